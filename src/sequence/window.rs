//! Fixed-width sliding windows.
//!
//! [`EachTuple`] keeps a ring buffer of the next `size` pending values. Every
//! produced [`Tuple`] is a copy of that buffer, so sliding the window never
//! changes a tuple that has already been handed out.

use std::collections::VecDeque;
use std::fmt;
use std::ops::Index;

use smallvec::SmallVec;

use super::{Finite, Reiterable, Sequence, Traversal};
use crate::cursor::{Cursor, ensure_pending};
use crate::error::Result;

// =============================================================================
// Tuple
// =============================================================================

/// An immutable window of consecutive values, indexed `0..len()`.
///
/// Pairs are stored inline without a heap allocation.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let pair = from_int(4).to(5).each_pair().to_vec().unwrap().remove(0);
/// assert_eq!(pair.get(0), Some(&4));
/// assert_eq!(pair[1], 5);
/// assert_eq!(pair.get(2), None);
/// assert_eq!(pair.to_string(), "(4, 5)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tuple<T> {
    values: SmallVec<[T; 2]>,
}

impl<T> Tuple<T> {
    /// Returns the value at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// The number of values in this tuple.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if this tuple holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values as a slice, oldest first.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Iterates over the values, oldest first.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Consumes the tuple into a `Vec`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.values.into_vec()
    }
}

impl<T> FromIterator<T> for Tuple<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> Index<usize> for Tuple<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<'a, T> IntoIterator for &'a Tuple<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Tuple<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; 2]>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for Tuple<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        for (position, value) in self.values.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, ")")
    }
}

// =============================================================================
// EachTuple
// =============================================================================

/// A sequence of overlapping windows of `size` consecutive source values.
///
/// Created by [`Sequence::each_tuple`] and [`Sequence::each_pair`]. A source
/// with `L` values yields `max(L - size + 1, 0)` tuples; a short source never
/// produces a short tuple.
#[derive(Debug, Clone, Copy)]
pub struct EachTuple<S> {
    source: S,
    size: usize,
}

impl<S> EachTuple<S> {
    pub(crate) fn new(source: S, size: usize) -> Self {
        assert!(size > 0, "each_tuple requires a window size of at least 1");
        Self { source, size }
    }

    /// The number of values in every produced tuple.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl<S> Sequence for EachTuple<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Tuple<S::Item>;
    type Cursor = EachTupleCursor<S::Cursor>;

    fn cursor(&self) -> Result<Self::Cursor> {
        Ok(EachTupleCursor {
            source: self.source.cursor()?,
            window: VecDeque::new(),
            size: self.size,
            primed: false,
        })
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        self.source.traversal()
    }
}

impl<S> Finite for EachTuple<S>
where
    S: Finite,
    S::Item: Clone,
{
}

impl<S> Reiterable for EachTuple<S>
where
    S: Reiterable,
    S::Item: Clone,
{
}

/// Cursor of an [`EachTuple`].
pub struct EachTupleCursor<C: Cursor> {
    source: C,
    window: VecDeque<C::Item>,
    size: usize,
    primed: bool,
}

impl<C: Cursor> EachTupleCursor<C> {
    fn prime(&mut self) -> Result<()> {
        if self.primed {
            return Ok(());
        }
        self.primed = true;
        while self.window.len() < self.size && self.source.has_next()? {
            self.window.push_back(self.source.next()?);
        }
        Ok(())
    }
}

impl<C> Cursor for EachTupleCursor<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = Tuple<C::Item>;

    fn has_next(&mut self) -> Result<bool> {
        self.prime()?;
        Ok(self.window.len() == self.size)
    }

    fn next(&mut self) -> Result<Self::Item> {
        ensure_pending(self)?;
        let tuple: Tuple<C::Item> = self.window.iter().cloned().collect();
        self.window.pop_front();
        if self.source.has_next()? {
            self.window.push_back(self.source.next()?);
        }
        Ok(tuple)
    }
}
