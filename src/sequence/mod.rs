//! Lazy sequences and the combinators that compose them.
//!
//! A [`Sequence`] is a producer of [`Cursor`]s. Combinators wrap a sequence
//! in another sequence, forming a chain that does no work until an eager
//! operation (or explicit iteration) pulls from the outermost cursor.
//!
//! - [`Transform`] / [`TryTransform`]: 1:1 mapping
//! - [`Take`]: bounded prefix
//! - [`EachTuple`]: fixed-width sliding window yielding [`Tuple`]s
//! - [`Indexed`]: ordinal tagging yielding [`WithIndex`] values
//! - [`Concat`]: logical concatenation (backs `append_first`/`append_last`)
//! - [`Repeat`]: back-to-back replays of a [`Reiterable`] sequence
//! - [`BoxedSequence`]: type-erased chain
//!
//! # Capabilities
//!
//! Two marker traits describe what a sequence can promise:
//!
//! - [`Finite`]: traversal terminates. Eager operations (`join`,
//!   `satisfy_all`, `satisfy_any`, `to_vec`, `count`, `for_each`) require it,
//!   so an unbounded range must be bounded with [`Sequence::take`] first.
//! - [`Reiterable`]: every call to [`Sequence::cursor`] yields an independent
//!   traversal. Sequences backed by a closable resource are single-pass and
//!   every combinator wrapping them reports [`Traversal::SinglePass`].
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let fizz_buzz = from_int(1).to_infinity().transform(|n| match (n % 3, n % 5) {
//!     (0, 0) => "FizzBuzz".to_string(),
//!     (0, _) => "Fizz".to_string(),
//!     (_, 0) => "Buzz".to_string(),
//!     _ => n.to_string(),
//! });
//!
//! assert_eq!(
//!     fizz_buzz.take(5).join(" ").unwrap(),
//!     "1 2 Fizz 4 Buzz"
//! );
//! ```

mod boxed;
mod concat;
mod indexed;
mod repeat;
mod take;
mod transform;
mod window;

pub use boxed::BoxedSequence;
pub use concat::{Concat, ConcatCursor};
pub use indexed::{Indexed, IndexedCursor, WithIndex};
pub use repeat::{Repeat, RepeatCursor};
pub use take::{Take, TakeCursor};
pub use transform::{Transform, TransformCursor, TryTransform, TryTransformCursor};
pub use window::{EachTuple, EachTupleCursor, Tuple};

use std::fmt::Display;

use crate::cursor::{Cursor, CursorIter};
use crate::error::Result;
use crate::source::Single;

// =============================================================================
// Traversal Kind
// =============================================================================

/// Whether a sequence can be traversed more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Each cursor is a fresh, independent traversal.
    Reiterable,
    /// The sequence consumes an external resource; only one cursor may be
    /// created.
    SinglePass,
}

impl Traversal {
    /// Traversal kind of a sequence built from two upstream sequences.
    ///
    /// The result is single-pass if either side is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Traversal;
    ///
    /// assert_eq!(
    ///     Traversal::Reiterable.combine(Traversal::SinglePass),
    ///     Traversal::SinglePass
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Reiterable, Self::Reiterable) => Self::Reiterable,
            _ => Self::SinglePass,
        }
    }

    /// Returns `true` for [`Traversal::Reiterable`].
    #[inline]
    pub const fn is_reiterable(self) -> bool {
        matches!(self, Self::Reiterable)
    }
}

// =============================================================================
// Capability Markers
// =============================================================================

/// Marker for sequences whose traversal is known to terminate.
///
/// Implemented by bounded sources and [`Take`], and propagated by every
/// combinator whose upstream sequences are all `Finite`.
pub trait Finite: Sequence {}

/// Marker for sequences that can be traversed any number of times.
///
/// Required by [`Sequence::repeat`], which opens a fresh cursor per pass.
pub trait Reiterable: Sequence {}

// =============================================================================
// Sequence
// =============================================================================

/// A lazy, pull-based sequence of values.
///
/// Implementors provide [`Sequence::cursor`] and [`Sequence::traversal`];
/// everything else is built on those two.
pub trait Sequence {
    /// The type of the produced values.
    type Item;

    /// The cursor that drives one traversal.
    type Cursor: Cursor<Item = Self::Item>;

    /// Starts a new traversal.
    ///
    /// # Errors
    ///
    /// Single-pass sequences return
    /// [`SequenceError::AlreadyConsumed`](crate::SequenceError::AlreadyConsumed)
    /// when asked for a second cursor.
    fn cursor(&self) -> Result<Self::Cursor>;

    /// Reports whether this sequence can be traversed again.
    fn traversal(&self) -> Traversal;

    /// Returns a fused iterator of results over a fresh traversal.
    ///
    /// A cursor-creation failure is yielded as the first item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut total = 0;
    /// for value in from_int(1).to(4).iter() {
    ///     total += value.unwrap();
    /// }
    /// assert_eq!(total, 10);
    /// ```
    fn iter(&self) -> CursorIter<Self::Cursor> {
        CursorIter::from_result(self.cursor())
    }

    // =========================================================================
    // Lazy Combinators
    // =========================================================================

    /// Maps every value with `function`.
    ///
    /// `function` runs only when the value is pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let squares = from_int(1).to(4).transform(|n| n * n);
    /// assert_eq!(squares.to_vec().unwrap(), vec![1, 4, 9, 16]);
    /// ```
    fn transform<U, F>(self, function: F) -> Transform<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        Transform::new(self, function)
    }

    /// Maps every value with a fallible `function`.
    ///
    /// An error returned by `function` surfaces from the cursor's `next`.
    fn try_transform<U, F>(self, function: F) -> TryTransform<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> Result<U>,
    {
        TryTransform::new(self, function)
    }

    /// Bounds this sequence to at most `count` values.
    ///
    /// The upstream cursor is never pulled past the `count`-th value, which
    /// makes `take` the way to consume an unbounded sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let first = from_int(10).to_infinity().take(3);
    /// assert_eq!(first.to_vec().unwrap(), vec![10, 11, 12]);
    /// ```
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Slides a window of `size` consecutive values over this sequence.
    ///
    /// A source shorter than `size` produces no tuples at all.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let sums = from_int(1).to(4).each_tuple(3).transform(|tuple| tuple.iter().sum::<i64>());
    /// assert_eq!(sums.to_vec().unwrap(), vec![6, 9]);
    /// ```
    fn each_tuple(self, size: usize) -> EachTuple<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        EachTuple::new(self, size)
    }

    /// Shorthand for `each_tuple(2)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let ascending = from_iterable(vec![1, 2, 3, 4])
    ///     .each_pair()
    ///     .satisfy_all(|pair| pair[0] <= pair[1])
    ///     .unwrap();
    /// assert!(ascending);
    /// ```
    fn each_pair(self) -> EachTuple<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        EachTuple::new(self, 2)
    }

    /// Pairs every value with its zero-based position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let tagged = from_iterable(vec!["x", "y"]).with_index().to_vec().unwrap();
    /// assert_eq!(tagged[1], WithIndex::new(1, "y"));
    /// ```
    fn with_index(self) -> Indexed<Self>
    where
        Self: Sized,
    {
        Indexed::new(self)
    }

    /// Yields all values of this sequence followed by all values of `other`.
    fn concat<S>(self, other: S) -> Concat<Self, S>
    where
        Self: Sized,
        S: Sequence<Item = Self::Item>,
    {
        Concat::new(self, other)
    }

    /// Yields `value` followed by the values of this sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let range = from_int(1).to(3);
    /// let prefixed = (&range).append_first(0);
    /// assert_eq!(prefixed.to_vec().unwrap(), vec![0, 1, 2, 3]);
    /// assert_eq!(range.to_vec().unwrap(), vec![1, 2, 3]);
    /// ```
    fn append_first(self, value: Self::Item) -> Concat<Single<Self::Item>, Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Concat::new(Single::new(value), self)
    }

    /// Yields the values of this sequence followed by `value`.
    fn append_last(self, value: Self::Item) -> Concat<Self, Single<Self::Item>>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Concat::new(self, Single::new(value))
    }

    /// Replays this sequence `times` times back to back.
    ///
    /// Only [`Reiterable`] sequences can be repeated; a chain over a line
    /// source does not offer this method.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let pattern = from_iterable(vec!['a', 'b']).repeat(3);
    /// assert_eq!(pattern.join("").unwrap(), "ababab");
    /// ```
    fn repeat(self, times: usize) -> Repeat<Self>
    where
        Self: Sized + Reiterable + Clone,
    {
        Repeat::new(self, times)
    }

    /// Erases the concrete type of this chain.
    ///
    /// Useful when a sequence variable is rebound to a longer chain inside a
    /// loop.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut row = from_iterable(vec![1, 2, 3]).boxed();
    /// while row.count().unwrap() > 1 {
    ///     row = row.each_pair().transform(|pair| pair[0] + pair[1]).boxed();
    /// }
    /// assert_eq!(row.to_vec().unwrap(), vec![8]);
    /// ```
    fn boxed<'a>(self) -> BoxedSequence<'a, Self::Item>
    where
        Self: Sized + Finite + 'a,
        Self::Cursor: 'a,
    {
        BoxedSequence::new(self)
    }

    // =========================================================================
    // Eager Operations
    // =========================================================================

    /// Returns `true` if `predicate` holds for every value.
    ///
    /// Stops at the first value for which `predicate` is false. An empty
    /// sequence satisfies every predicate.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the traversal.
    fn satisfy_all<P>(&self, mut predicate: P) -> Result<bool>
    where
        Self: Finite,
        P: FnMut(Self::Item) -> bool,
    {
        let mut cursor = self.cursor()?;
        while cursor.has_next()? {
            if !predicate(cursor.next()?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns `true` if `predicate` holds for at least one value.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the traversal.
    fn satisfy_any<P>(&self, mut predicate: P) -> Result<bool>
    where
        Self: Finite,
        P: FnMut(Self::Item) -> bool,
    {
        self.satisfy_all(|value| !predicate(value))
            .map(|none_match| !none_match)
    }

    /// Renders every value with [`Display`], separated by `separator`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// assert_eq!(from_int(1).to(5).join(" ").unwrap(), "1 2 3 4 5");
    /// ```
    fn join(&self, separator: &str) -> Result<String>
    where
        Self: Finite,
        Self::Item: Display,
    {
        let mut joined = String::new();
        let mut cursor = self.cursor()?;
        let mut first = true;
        while cursor.has_next()? {
            if !first {
                joined.push_str(separator);
            }
            first = false;
            joined.push_str(&cursor.next()?.to_string());
        }
        Ok(joined)
    }

    /// Collects every value into a `Vec`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the traversal.
    fn to_vec(&self) -> Result<Vec<Self::Item>>
    where
        Self: Finite,
    {
        self.iter().collect()
    }

    /// Counts the values of this sequence.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the traversal.
    fn count(&self) -> Result<usize>
    where
        Self: Finite,
    {
        let mut cursor = self.cursor()?;
        let mut total = 0;
        while cursor.has_next()? {
            cursor.next()?;
            total += 1;
        }
        Ok(total)
    }

    /// Calls `action` on every value in order.
    ///
    /// Values already handed to `action` stay handed over if a later pull
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the traversal.
    fn for_each<A>(&self, mut action: A) -> Result<()>
    where
        Self: Finite,
        A: FnMut(Self::Item),
    {
        let mut cursor = self.cursor()?;
        while cursor.has_next()? {
            action(cursor.next()?);
        }
        Ok(())
    }
}

// =============================================================================
// Borrowed Sequences
// =============================================================================

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Cursor = S::Cursor;

    #[inline]
    fn cursor(&self) -> Result<Self::Cursor> {
        (**self).cursor()
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        (**self).traversal()
    }
}

impl<S: Finite + ?Sized> Finite for &S {}

impl<S: Reiterable + ?Sized> Reiterable for &S {}
