//! Error types for sequence traversal.
//!
//! Every fallible operation in this crate reports a [`SequenceError`].
//! Faults are terminal for the traversal that raised them: no cursor retries
//! or skips a failing element.

use std::error::Error;
use std::io;

/// Errors raised while creating or driving a cursor.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut cursor = from_int(1).to(0).cursor().unwrap();
/// assert!(!cursor.has_next().unwrap());
/// assert!(matches!(cursor.next(), Err(SequenceError::ExhaustedCursor)));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    /// `next` was called although no element was pending.
    #[error("cursor is exhausted: next() called without a pending element")]
    ExhaustedCursor,

    /// The underlying resource failed to open, read or close.
    #[error("I/O failure while reading sequence: {0}")]
    Io(#[from] io::Error),

    /// A token could not be parsed into the requested type.
    #[error("cannot parse token {token:?}: {source}")]
    Parse {
        /// The offending token, verbatim.
        token: String,
        /// The parser's own error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    /// A single-pass sequence was asked for a second traversal.
    #[error("{sequence} is single-pass and has already been traversed")]
    AlreadyConsumed {
        /// Name of the sequence type that refused the traversal.
        sequence: &'static str,
    },
}

impl SequenceError {
    /// Builds a [`SequenceError::Parse`] from a token and its parse error.
    pub fn parse<E>(token: impl Into<String>, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Parse {
            token: token.into(),
            source: Box::new(source),
        }
    }

    /// Returns `true` for the protocol-violation variant.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::ExhaustedCursor)
    }

    /// Returns `true` if the error originated in the underlying resource.
    #[inline]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Returns `true` if a token failed to parse.
    #[inline]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SequenceError>;
