//! Logical concatenation of two sequences.

use super::{Finite, Reiterable, Sequence, Traversal};
use crate::cursor::Cursor;
use crate::error::Result;

/// All values of `first`, then all values of `second`.
///
/// Created by [`Sequence::concat`], [`Sequence::append_first`] and
/// [`Sequence::append_last`]. Neither input is modified; both stay lazy.
#[derive(Debug, Clone, Copy)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    #[inline]
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Sequence for Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor = ConcatCursor<A::Cursor, B::Cursor>;

    fn cursor(&self) -> Result<Self::Cursor> {
        Ok(ConcatCursor {
            first: self.first.cursor()?,
            second: self.second.cursor()?,
            first_done: false,
        })
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        self.first.traversal().combine(self.second.traversal())
    }
}

impl<A, B> Finite for Concat<A, B>
where
    A: Finite,
    B: Finite<Item = A::Item>,
{
}

impl<A, B> Reiterable for Concat<A, B>
where
    A: Reiterable,
    B: Reiterable<Item = A::Item>,
{
}

/// Cursor of a [`Concat`].
pub struct ConcatCursor<A, B> {
    first: A,
    second: B,
    first_done: bool,
}

impl<A, B> ConcatCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    fn first_pending(&mut self) -> Result<bool> {
        if self.first_done {
            return Ok(false);
        }
        if self.first.has_next()? {
            return Ok(true);
        }
        self.first_done = true;
        Ok(false)
    }
}

impl<A, B> Cursor for ConcatCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn has_next(&mut self) -> Result<bool> {
        if self.first_pending()? {
            return Ok(true);
        }
        self.second.has_next()
    }

    fn next(&mut self) -> Result<A::Item> {
        if self.first_pending()? {
            return self.first.next();
        }
        self.second.next()
    }
}
