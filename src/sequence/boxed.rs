//! Type-erased sequences.

use std::fmt;

use super::{Finite, Sequence, Traversal};
use crate::cursor::Cursor;
use crate::error::Result;

/// Object-safe view of a [`Sequence`] with a boxed cursor.
trait ErasedSequence<'a, T> {
    fn erased_cursor(&self) -> Result<Box<dyn Cursor<Item = T> + 'a>>;

    fn erased_traversal(&self) -> Traversal;
}

impl<'a, S> ErasedSequence<'a, S::Item> for S
where
    S: Sequence,
    S::Cursor: 'a,
{
    fn erased_cursor(&self) -> Result<Box<dyn Cursor<Item = S::Item> + 'a>> {
        Ok(Box::new(self.cursor()?))
    }

    fn erased_traversal(&self) -> Traversal {
        self.traversal()
    }
}

/// A finite sequence whose concrete combinator chain has been erased.
///
/// Created by [`Sequence::boxed`]. Cursors are dispatched dynamically, so a
/// variable of this type can be rebound to a longer chain built on top of
/// itself.
pub struct BoxedSequence<'a, T> {
    inner: Box<dyn ErasedSequence<'a, T> + 'a>,
}

impl<'a, T> BoxedSequence<'a, T> {
    pub(crate) fn new<S>(sequence: S) -> Self
    where
        S: Sequence<Item = T> + Finite + 'a,
        S::Cursor: 'a,
    {
        Self {
            inner: Box::new(sequence),
        }
    }
}

impl<'a, T> Sequence for BoxedSequence<'a, T> {
    type Item = T;
    type Cursor = Box<dyn Cursor<Item = T> + 'a>;

    #[inline]
    fn cursor(&self) -> Result<Self::Cursor> {
        self.inner.erased_cursor()
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        self.inner.erased_traversal()
    }
}

impl<T> Finite for BoxedSequence<'_, T> {}

impl<T> fmt::Debug for BoxedSequence<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BoxedSequence")
            .field("traversal", &self.traversal())
            .finish_non_exhaustive()
    }
}
