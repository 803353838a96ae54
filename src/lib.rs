//! # lazyseq
//!
//! Lazy, pull-based sequences and the combinators that compose them.
//!
//! ## Overview
//!
//! Sequences are built from a source and wrapped by combinators; nothing is
//! computed until an eager operation or an explicit iteration pulls values
//! through the chain. No intermediate collection is materialized.
//!
//! - **Cursor protocol**: [`Cursor`] with `has_next` / `next`
//! - **Sources**: integer ranges, in-memory collections, line-oriented
//!   input, string tokens
//! - **Combinators**: `transform`, `take`, `each_tuple` / `each_pair`,
//!   `with_index`, `append_first` / `append_last`, `concat`, `repeat`
//! - **Eager operations**: `join`, `satisfy_all` / `satisfy_any`, `to_vec`,
//!   `count`, `for_each` (only on [`Finite`] sequences)
//!
//! ## Feature Flags
//!
//! - `lines`: line-oriented input sources
//! - `tokens`: string splitting and token parsing
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let sorted = from_str("1 2 4 3")
//!     .split(" ")
//!     .to_integer()
//!     .each_pair()
//!     .satisfy_all(|pair| pair[0] <= pair[1])
//!     .unwrap();
//! assert!(!sorted);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the traits, entry points and value types.
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cursor::Cursor;
    pub use crate::error::SequenceError;
    pub use crate::sequence::{Finite, Reiterable, Sequence, Traversal, Tuple, WithIndex};
    pub use crate::source::{from_int, from_iterable, single};

    #[cfg(feature = "lines")]
    pub use crate::source::{LineSource, from_read, from_reader};

    #[cfg(feature = "tokens")]
    pub use crate::source::from_str;
}

pub mod cursor;
pub mod error;
pub mod sequence;
pub mod source;

pub use cursor::Cursor;
pub use error::{Result, SequenceError};
pub use sequence::{Finite, Reiterable, Sequence};

/// Shared-ownership pointer for closures and text held by sequences.
///
/// Sequences are driven from a single thread, so this is `Rc`.
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;
