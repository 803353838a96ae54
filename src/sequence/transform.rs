//! Lazy 1:1 mapping.

use super::{Finite, Reiterable, Sequence, Traversal};
use crate::ReferenceCounter;
use crate::cursor::Cursor;
use crate::error::Result;

/// A sequence that applies a function to every value of its source.
///
/// Created by [`Sequence::transform`]. The function is shared between all
/// cursors of this sequence and runs only inside [`Cursor::next`].
pub struct Transform<S, F> {
    source: S,
    function: ReferenceCounter<F>,
}

impl<S, F> Transform<S, F> {
    #[inline]
    pub(crate) fn new(source: S, function: F) -> Self {
        Self {
            source,
            function: ReferenceCounter::new(function),
        }
    }
}

impl<S: Clone, F> Clone for Transform<S, F> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            function: ReferenceCounter::clone(&self.function),
        }
    }
}

impl<S, F, U> Sequence for Transform<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor = TransformCursor<S::Cursor, F>;

    fn cursor(&self) -> Result<Self::Cursor> {
        Ok(TransformCursor {
            source: self.source.cursor()?,
            function: ReferenceCounter::clone(&self.function),
        })
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        self.source.traversal()
    }
}

impl<S, F, U> Finite for Transform<S, F>
where
    S: Finite,
    F: Fn(S::Item) -> U,
{
}

impl<S, F, U> Reiterable for Transform<S, F>
where
    S: Reiterable,
    F: Fn(S::Item) -> U,
{
}

/// Cursor of a [`Transform`].
pub struct TransformCursor<C, F> {
    source: C,
    function: ReferenceCounter<F>,
}

impl<C, F, U> Cursor for TransformCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    #[inline]
    fn has_next(&mut self) -> Result<bool> {
        self.source.has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<U> {
        let value = self.source.next()?;
        Ok((self.function)(value))
    }
}

// =============================================================================
// Fallible Mapping
// =============================================================================

/// A sequence that applies a fallible function to every value of its source.
///
/// Created by [`Sequence::try_transform`]. Errors are not recovered: the
/// first failing value aborts whatever is driving the traversal.
pub struct TryTransform<S, F> {
    source: S,
    function: ReferenceCounter<F>,
}

impl<S, F> TryTransform<S, F> {
    #[inline]
    pub(crate) fn new(source: S, function: F) -> Self {
        Self {
            source,
            function: ReferenceCounter::new(function),
        }
    }
}

impl<S: Clone, F> Clone for TryTransform<S, F> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            function: ReferenceCounter::clone(&self.function),
        }
    }
}

impl<S, F, U> Sequence for TryTransform<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> Result<U>,
{
    type Item = U;
    type Cursor = TryTransformCursor<S::Cursor, F>;

    fn cursor(&self) -> Result<Self::Cursor> {
        Ok(TryTransformCursor {
            source: self.source.cursor()?,
            function: ReferenceCounter::clone(&self.function),
        })
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        self.source.traversal()
    }
}

impl<S, F, U> Finite for TryTransform<S, F>
where
    S: Finite,
    F: Fn(S::Item) -> Result<U>,
{
}

impl<S, F, U> Reiterable for TryTransform<S, F>
where
    S: Reiterable,
    F: Fn(S::Item) -> Result<U>,
{
}

/// Cursor of a [`TryTransform`].
pub struct TryTransformCursor<C, F> {
    source: C,
    function: ReferenceCounter<F>,
}

impl<C, F, U> Cursor for TryTransformCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> Result<U>,
{
    type Item = U;

    #[inline]
    fn has_next(&mut self) -> Result<bool> {
        self.source.has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<U> {
        let value = self.source.next()?;
        (self.function)(value)
    }
}

static_assertions::assert_not_impl_any!(Transform<crate::source::BoundedRange, fn(i64) -> i64>: Send, Sync);
