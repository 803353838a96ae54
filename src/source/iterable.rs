//! In-memory sources.

use std::iter::Fuse;

use crate::cursor::{Cursor, ensure_pending};
use crate::error::{Result, SequenceError};
use crate::sequence::{Finite, Reiterable, Sequence, Traversal};

// =============================================================================
// Iterator Cursor
// =============================================================================

/// Adapts any [`Iterator`] to the cursor protocol.
///
/// `has_next` pulls one value ahead and caches it for the following `next`.
/// The iterator is fused, so an exhausted cursor stays exhausted.
#[derive(Debug, Clone)]
pub struct IteratorCursor<I: Iterator> {
    iterator: Fuse<I>,
    lookahead: Option<I::Item>,
}

impl<I: Iterator> IteratorCursor<I> {
    /// Wraps `iterator`.
    #[inline]
    pub fn new(iterator: I) -> Self {
        Self {
            iterator: iterator.fuse(),
            lookahead: None,
        }
    }
}

impl<I: Iterator> Cursor for IteratorCursor<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> Result<bool> {
        if self.lookahead.is_none() {
            self.lookahead = self.iterator.next();
        }
        Ok(self.lookahead.is_some())
    }

    fn next(&mut self) -> Result<I::Item> {
        ensure_pending(self)?;
        self.lookahead.take().ok_or(SequenceError::ExhaustedCursor)
    }
}

// =============================================================================
// Iterable
// =============================================================================

/// A re-iterable sequence over a cloneable collection.
///
/// Every cursor iterates a fresh clone of the collection. The sequence is
/// [`Finite`] when the collection's iterator is an [`ExactSizeIterator`].
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let words = from_iterable(vec!["a", "b"]);
/// assert_eq!(words.join("+").unwrap(), "a+b");
/// assert_eq!(words.join("-").unwrap(), "a-b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iterable<I> {
    collection: I,
}

impl<I> Iterable<I>
where
    I: IntoIterator + Clone,
{
    /// Wraps `collection`.
    #[inline]
    pub const fn new(collection: I) -> Self {
        Self { collection }
    }

    /// Unwraps the collection.
    #[inline]
    pub fn into_inner(self) -> I {
        self.collection
    }
}

impl<I> Sequence for Iterable<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;
    type Cursor = IteratorCursor<I::IntoIter>;

    #[inline]
    fn cursor(&self) -> Result<Self::Cursor> {
        Ok(IteratorCursor::new(self.collection.clone().into_iter()))
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        Traversal::Reiterable
    }
}

impl<I> Finite for Iterable<I>
where
    I: IntoIterator + Clone,
    I::IntoIter: ExactSizeIterator,
{
}

impl<I> Reiterable for Iterable<I> where I: IntoIterator + Clone {}

// =============================================================================
// Single
// =============================================================================

/// A sequence of exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Single<T> {
    value: T,
}

impl<T: Clone> Single<T> {
    /// Creates a sequence yielding `value` once per traversal.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> Sequence for Single<T> {
    type Item = T;
    type Cursor = SingleCursor<T>;

    #[inline]
    fn cursor(&self) -> Result<Self::Cursor> {
        Ok(SingleCursor {
            value: Some(self.value.clone()),
        })
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        Traversal::Reiterable
    }
}

impl<T: Clone> Finite for Single<T> {}

impl<T: Clone> Reiterable for Single<T> {}

/// Cursor of a [`Single`].
#[derive(Debug, Clone)]
pub struct SingleCursor<T> {
    value: Option<T>,
}

impl<T> Cursor for SingleCursor<T> {
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> Result<bool> {
        Ok(self.value.is_some())
    }

    #[inline]
    fn next(&mut self) -> Result<T> {
        self.value.take().ok_or(SequenceError::ExhaustedCursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterator_cursor_peek_is_idempotent() {
        let mut pulled = 0;
        let source = std::iter::from_fn(|| {
            pulled += 1;
            (pulled <= 2).then_some(pulled)
        });
        let mut cursor = IteratorCursor::new(source);
        assert!(cursor.has_next().unwrap());
        assert!(cursor.has_next().unwrap());
        assert_eq!(cursor.next().unwrap(), 1);
        assert_eq!(cursor.next().unwrap(), 2);
        assert!(!cursor.has_next().unwrap());
    }

    #[test]
    fn test_exhausted_cursor_stays_exhausted() {
        let mut calls = 0;
        let flaky = std::iter::from_fn(|| {
            calls += 1;
            match calls {
                1 => Some(1),
                2 => None,
                _ => Some(3),
            }
        });
        let mut cursor = IteratorCursor::new(flaky);
        assert_eq!(cursor.next().unwrap(), 1);
        assert!(!cursor.has_next().unwrap());
        assert!(!cursor.has_next().unwrap());
        assert!(cursor.next().unwrap_err().is_exhausted());
    }

    #[test]
    fn test_single_yields_once_per_traversal() {
        let single = Single::new("only");
        assert_eq!(single.to_vec().unwrap(), vec!["only"]);
        assert_eq!(single.to_vec().unwrap(), vec!["only"]);
    }

    #[test]
    fn test_iterable_over_slice() {
        let numbers = [3, 1, 2];
        let sequence = Iterable::new(&numbers[..]);
        assert_eq!(sequence.transform(|value| value * 2).to_vec().unwrap(), vec![6, 2, 4]);
    }
}
