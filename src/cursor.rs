//! The pull protocol shared by every sequence.
//!
//! A [`Cursor`] answers two questions: "is there a next value?" and "give me
//! the next value". Every source and combinator in this crate is driven
//! through this protocol, so any cursor can be wrapped by any combinator.
//!
//! # Protocol
//!
//! - [`Cursor::has_next`] may be called any number of times. It never advances
//!   the cursor; implementations that have to read ahead cache the value.
//! - [`Cursor::next`] advances by exactly one position. Calling it when
//!   `has_next` would answer `false` fails with
//!   [`SequenceError::ExhaustedCursor`].
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut cursor = from_int(1).to(2).cursor().unwrap();
//! assert!(cursor.has_next().unwrap());
//! assert!(cursor.has_next().unwrap()); // idempotent
//! assert_eq!(cursor.next().unwrap(), 1);
//! assert_eq!(cursor.next().unwrap(), 2);
//! assert!(!cursor.has_next().unwrap());
//! ```

use std::iter::FusedIterator;

use crate::error::{Result, SequenceError};

/// Stateful, single-owner traversal over a sequence.
pub trait Cursor {
    /// The type of the produced values.
    type Item;

    /// Returns `true` if a call to [`Cursor::next`] would produce a value.
    ///
    /// # Errors
    ///
    /// Returns an error if answering requires a read that fails.
    fn has_next(&mut self) -> Result<bool>;

    /// Produces the next value and advances by one position.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::ExhaustedCursor`] if no value is pending, or
    /// any error raised while producing the value.
    fn next(&mut self) -> Result<Self::Item>;

    /// Converts this cursor into a fused [`Iterator`] of results.
    ///
    /// The iterator stops after the first error.
    fn into_results(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter::new(self)
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> Result<bool> {
        (**self).has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item> {
        (**self).next()
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> Result<bool> {
        (**self).has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item> {
        (**self).next()
    }
}

/// Fails with [`SequenceError::ExhaustedCursor`] unless `cursor` has a
/// pending value.
///
/// Used by cursors whose `next` would otherwise have to duplicate the
/// `has_next` logic.
pub(crate) fn ensure_pending<C: Cursor + ?Sized>(cursor: &mut C) -> Result<()> {
    if cursor.has_next()? {
        Ok(())
    } else {
        Err(SequenceError::ExhaustedCursor)
    }
}

// =============================================================================
// Iterator Bridge
// =============================================================================

enum IterState<C> {
    Pending(Result<C>),
    Running(C),
    Done,
}

/// A fused [`Iterator`] over the values of a cursor.
///
/// Each item is a `Result`; iteration ends after the cursor is exhausted or
/// after the first error has been yielded.
pub struct CursorIter<C> {
    state: IterState<C>,
}

impl<C: Cursor> CursorIter<C> {
    #[inline]
    pub(crate) const fn new(cursor: C) -> Self {
        Self {
            state: IterState::Running(cursor),
        }
    }

    /// Defers a cursor-creation failure until the first call to `next`.
    #[inline]
    pub(crate) const fn from_result(cursor: Result<C>) -> Self {
        Self {
            state: IterState::Pending(cursor),
        }
    }

    fn step(cursor: &mut C) -> Option<Result<C::Item>> {
        match cursor.has_next() {
            Ok(true) => Some(cursor.next()),
            Ok(false) => None,
            Err(error) => Some(Err(error)),
        }
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = Result<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut cursor = match std::mem::replace(&mut self.state, IterState::Done) {
            IterState::Pending(Ok(cursor)) | IterState::Running(cursor) => cursor,
            IterState::Pending(Err(error)) => return Some(Err(error)),
            IterState::Done => return None,
        };

        let item = Self::step(&mut cursor);
        if matches!(item, Some(Ok(_))) {
            self.state = IterState::Running(cursor);
        }
        item
    }
}

impl<C: Cursor> FusedIterator for CursorIter<C> {}
