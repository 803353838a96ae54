//! Back-to-back replays of a re-iterable sequence.

use super::{Finite, Reiterable, Sequence, Traversal};
use crate::cursor::{Cursor, ensure_pending};
use crate::error::{Result, SequenceError};

/// A sequence replaying its source `times` times in a row.
///
/// Returned by [`Sequence::repeat`]. Each pass starts a fresh cursor on the
/// source, so only [`Reiterable`] sequences can be repeated.
#[derive(Debug, Clone, Copy)]
pub struct Repeat<S> {
    source: S,
    times: usize,
}

impl<S> Repeat<S> {
    #[inline]
    pub(crate) const fn new(source: S, times: usize) -> Self {
        Self { source, times }
    }

    /// Number of passes over the source.
    #[inline]
    pub const fn times(&self) -> usize {
        self.times
    }
}

impl<S> Sequence for Repeat<S>
where
    S: Reiterable + Clone,
{
    type Item = S::Item;
    type Cursor = RepeatCursor<S>;

    fn cursor(&self) -> Result<Self::Cursor> {
        Ok(RepeatCursor {
            source: self.source.clone(),
            current: None,
            remaining: self.times,
        })
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        Traversal::Reiterable
    }
}

impl<S> Finite for Repeat<S> where S: Finite + Reiterable + Clone {}

impl<S> Reiterable for Repeat<S> where S: Reiterable + Clone {}

/// Cursor of a [`Repeat`].
pub struct RepeatCursor<S: Sequence> {
    source: S,
    current: Option<S::Cursor>,
    remaining: usize,
}

impl<S: Sequence> Cursor for RepeatCursor<S> {
    type Item = S::Item;

    fn has_next(&mut self) -> Result<bool> {
        if let Some(cursor) = self.current.as_mut() {
            if cursor.has_next()? {
                return Ok(true);
            }
            self.current = None;
        }
        if self.remaining == 0 {
            return Ok(false);
        }

        self.remaining -= 1;
        let mut fresh = self.source.cursor()?;
        if fresh.has_next()? {
            self.current = Some(fresh);
            Ok(true)
        } else {
            // Every pass of a re-iterable source is identical; one empty pass
            // means all of them are.
            self.remaining = 0;
            Ok(false)
        }
    }

    fn next(&mut self) -> Result<S::Item> {
        ensure_pending(self)?;
        self.current
            .as_mut()
            .ok_or(SequenceError::ExhaustedCursor)?
            .next()
    }
}
