//! Bounded prefix of a sequence.

use super::{Finite, Reiterable, Sequence, Traversal};
use crate::cursor::{Cursor, ensure_pending};
use crate::error::Result;

/// A sequence of at most `count` values from its source.
///
/// Created by [`Sequence::take`]. `Take` is always [`Finite`], even over an
/// unbounded source.
#[derive(Debug, Clone, Copy)]
pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S> Take<S> {
    #[inline]
    pub(crate) const fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }

    /// The maximum number of values this sequence yields.
    #[inline]
    pub const fn limit(&self) -> usize {
        self.count
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor = TakeCursor<S::Cursor>;

    fn cursor(&self) -> Result<Self::Cursor> {
        Ok(TakeCursor {
            source: self.source.cursor()?,
            remaining: self.count,
        })
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        self.source.traversal()
    }
}

impl<S: Sequence> Finite for Take<S> {}

impl<S: Reiterable> Reiterable for Take<S> {}

/// Cursor of a [`Take`].
pub struct TakeCursor<C> {
    source: C,
    remaining: usize,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> Result<bool> {
        // The budget is checked first so an exhausted budget never touches
        // the source.
        if self.remaining == 0 {
            return Ok(false);
        }
        self.source.has_next()
    }

    fn next(&mut self) -> Result<C::Item> {
        ensure_pending(self)?;
        self.remaining -= 1;
        self.source.next()
    }
}
