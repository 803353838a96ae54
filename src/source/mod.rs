//! Sources that start a composition chain.
//!
//! - [`from_int`]: bounded and unbounded integer ranges
//! - [`from_iterable`] / [`single`]: in-memory collections
//! - [`from_reader`] / [`from_read`] / [`LineSource`]: line-oriented input
//!   (feature `lines`)
//! - [`from_str`]: string tokens (feature `tokens`)
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let total: i64 = from_str("1 2 3")
//!     .split(" ")
//!     .to_integer()
//!     .to_vec()
//!     .unwrap()
//!     .into_iter()
//!     .sum();
//! assert_eq!(total, 6);
//! ```

mod iterable;
#[cfg(feature = "lines")]
mod lines;
mod range;
#[cfg(feature = "tokens")]
mod tokens;

pub use iterable::{Iterable, IteratorCursor, Single, SingleCursor};
#[cfg(feature = "lines")]
pub use lines::{LineResource, LineSource, Lines, LinesCursor, ReaderResource};
pub use range::{BoundedRange, BoundedRangeCursor, Int, UnboundedRange, UnboundedRangeCursor};
#[cfg(feature = "tokens")]
pub use tokens::{Parsed, Text, Tokens, TokensCursor};

/// Starts a range at `value`; see [`Int::to`] and [`Int::to_infinity`].
#[inline]
pub const fn from_int(value: i64) -> Int {
    Int::new(value)
}

/// Wraps a cloneable collection as a re-iterable sequence.
#[inline]
pub const fn from_iterable<I>(collection: I) -> Iterable<I>
where
    I: IntoIterator + Clone,
{
    Iterable::new(collection)
}

/// A sequence yielding `value` once.
#[inline]
pub const fn single<T: Clone>(value: T) -> Single<T> {
    Single::new(value)
}

/// Reads lines from a buffered reader.
#[cfg(feature = "lines")]
#[inline]
pub const fn from_reader<B: std::io::BufRead>(reader: B) -> LineSource<ReaderResource<B>> {
    LineSource::from_reader(reader)
}

/// Reads lines from an unbuffered reader.
#[cfg(feature = "lines")]
#[inline]
pub fn from_read<T: std::io::Read>(
    read: T,
) -> LineSource<ReaderResource<std::io::BufReader<T>>> {
    LineSource::from_read(read)
}

/// Wraps a string for splitting into tokens.
#[cfg(feature = "tokens")]
#[inline]
pub fn from_str(text: impl Into<String>) -> Text {
    Text::new(text)
}
