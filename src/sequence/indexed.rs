//! Ordinal tagging.

use std::fmt;

use super::{Finite, Reiterable, Sequence, Traversal};
use crate::cursor::Cursor;
use crate::error::Result;

/// A value paired with its zero-based position in a traversal.
///
/// The position comes from the [`Indexed`] cursor's own counter, not from the
/// source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WithIndex<T> {
    /// Zero-based position of `value`.
    pub index: usize,
    /// The tagged value.
    pub value: T,
}

impl<T> WithIndex<T> {
    /// Creates a new pairing.
    #[inline]
    pub const fn new(index: usize, value: T) -> Self {
        Self { index, value }
    }

    /// Splits the pairing into `(index, value)`.
    #[inline]
    pub fn into_pair(self) -> (usize, T) {
        (self.index, self.value)
    }
}

impl<T: fmt::Display> fmt::Display for WithIndex<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.index, self.value)
    }
}

/// A sequence that tags every source value with its position.
///
/// Created by [`Sequence::with_index`].
#[derive(Debug, Clone, Copy)]
pub struct Indexed<S> {
    source: S,
}

impl<S> Indexed<S> {
    #[inline]
    pub(crate) const fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: Sequence> Sequence for Indexed<S> {
    type Item = WithIndex<S::Item>;
    type Cursor = IndexedCursor<S::Cursor>;

    fn cursor(&self) -> Result<Self::Cursor> {
        Ok(IndexedCursor {
            source: self.source.cursor()?,
            index: 0,
        })
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        self.source.traversal()
    }
}

impl<S: Finite> Finite for Indexed<S> {}

impl<S: Reiterable> Reiterable for Indexed<S> {}

/// Cursor of an [`Indexed`].
pub struct IndexedCursor<C> {
    source: C,
    index: usize,
}

impl<C: Cursor> Cursor for IndexedCursor<C> {
    type Item = WithIndex<C::Item>;

    #[inline]
    fn has_next(&mut self) -> Result<bool> {
        self.source.has_next()
    }

    fn next(&mut self) -> Result<Self::Item> {
        let value = self.source.next()?;
        let index = self.index;
        self.index += 1;
        Ok(WithIndex::new(index, value))
    }
}
