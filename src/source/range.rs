//! Increasing integer ranges.

use std::fmt;

use crate::cursor::Cursor;
use crate::error::{Result, SequenceError};
use crate::sequence::{Finite, Reiterable, Sequence, Traversal};

/// An integer that can start a range.
///
/// Returned by [`from_int`](crate::source::from_int).
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(from_int(1).to(3).to_vec().unwrap(), vec![1, 2, 3]);
/// assert_eq!(from_int(1).to_infinity().take(2).to_vec().unwrap(), vec![1, 2]);
/// assert_eq!(from_int(-4).to_string(), "-4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int(i64);

impl Int {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The wrapped integer.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// The inclusive range from this integer to `end`.
    #[inline]
    pub const fn to(self, end: i64) -> BoundedRange {
        BoundedRange::new(self.0, end)
    }

    /// The unbounded range starting at this integer.
    #[inline]
    pub const fn to_infinity(self) -> UnboundedRange {
        UnboundedRange::new(self.0)
    }
}

impl fmt::Display for Int {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<i64> for Int {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

// =============================================================================
// Bounded Range
// =============================================================================

/// The integers `start..=end`, empty when `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundedRange {
    start: i64,
    end: i64,
}

impl BoundedRange {
    /// Creates the inclusive range `start..=end`.
    #[inline]
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// First value of the range.
    #[inline]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Last value of the range.
    #[inline]
    pub const fn end(&self) -> i64 {
        self.end
    }
}

impl Sequence for BoundedRange {
    type Item = i64;
    type Cursor = BoundedRangeCursor;

    #[inline]
    fn cursor(&self) -> Result<Self::Cursor> {
        Ok(BoundedRangeCursor {
            upcoming: (self.start <= self.end).then_some(self.start),
            end: self.end,
        })
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        Traversal::Reiterable
    }
}

impl Finite for BoundedRange {}

impl Reiterable for BoundedRange {}

/// Cursor of a [`BoundedRange`].
#[derive(Debug, Clone)]
pub struct BoundedRangeCursor {
    upcoming: Option<i64>,
    end: i64,
}

impl Cursor for BoundedRangeCursor {
    type Item = i64;

    #[inline]
    fn has_next(&mut self) -> Result<bool> {
        Ok(self.upcoming.is_some())
    }

    fn next(&mut self) -> Result<i64> {
        let value = self.upcoming.ok_or(SequenceError::ExhaustedCursor)?;
        // value < end implies value + 1 cannot overflow.
        self.upcoming = (value < self.end).then(|| value + 1);
        Ok(value)
    }
}

// =============================================================================
// Unbounded Range
// =============================================================================

/// The integers `start, start + 1, ...` without an upper bound.
///
/// Not [`Finite`]: bound it with [`Sequence::take`] before calling an eager
/// operation. The cursor stops after `i64::MAX` instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnboundedRange {
    start: i64,
}

impl UnboundedRange {
    /// Creates the range `start..`.
    #[inline]
    pub const fn new(start: i64) -> Self {
        Self { start }
    }

    /// First value of the range.
    #[inline]
    pub const fn start(&self) -> i64 {
        self.start
    }
}

impl Sequence for UnboundedRange {
    type Item = i64;
    type Cursor = UnboundedRangeCursor;

    #[inline]
    fn cursor(&self) -> Result<Self::Cursor> {
        Ok(UnboundedRangeCursor {
            upcoming: Some(self.start),
        })
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        Traversal::Reiterable
    }
}

impl Reiterable for UnboundedRange {}

/// Cursor of an [`UnboundedRange`].
#[derive(Debug, Clone)]
pub struct UnboundedRangeCursor {
    upcoming: Option<i64>,
}

impl Cursor for UnboundedRangeCursor {
    type Item = i64;

    #[inline]
    fn has_next(&mut self) -> Result<bool> {
        Ok(self.upcoming.is_some())
    }

    fn next(&mut self) -> Result<i64> {
        let value = self.upcoming.ok_or(SequenceError::ExhaustedCursor)?;
        self.upcoming = value.checked_add(1);
        Ok(value)
    }
}
