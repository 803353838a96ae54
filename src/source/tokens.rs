//! Splitting text into tokens and parsing them.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::ReferenceCounter;
use crate::cursor::Cursor;
use crate::error::{Result, SequenceError};
use crate::sequence::{Finite, Reiterable, Sequence, Traversal, TryTransform};

/// A string that can be split into a [`Tokens`] sequence.
///
/// Returned by [`from_str`](crate::source::from_str).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Text {
    text: ReferenceCounter<str>,
}

impl Text {
    /// Wraps `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: ReferenceCounter::from(text.into()),
        }
    }

    /// The wrapped text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Splits on every occurrence of `separator`, keeping empty tokens.
    ///
    /// The empty string has no tokens. An empty separator yields the whole
    /// text as a single token.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let tokens = from_str("a,,b,").split(",");
    /// assert_eq!(tokens.to_vec().unwrap(), vec!["a", "", "b", ""]);
    /// ```
    pub fn split(&self, separator: &str) -> Tokens {
        Tokens {
            text: ReferenceCounter::clone(&self.text),
            separator: ReferenceCounter::from(separator),
        }
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Text").field(&&*self.text).finish()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.text)
    }
}

/// The tokens of a [`Text`], in order, empties included.
///
/// Splitting happens lazily inside the cursor; the text is shared, not copied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tokens {
    text: ReferenceCounter<str>,
    separator: ReferenceCounter<str>,
}

/// Tokens parsed into `T`, as returned by [`Tokens::parse`].
pub type Parsed<T> = TryTransform<Tokens, fn(String) -> Result<T>>;

impl Tokens {
    /// Parses every token as a base-10 `i64`.
    ///
    /// A token that is not an integer literal, including an empty token,
    /// fails with [`SequenceError::Parse`] when it is pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let numbers = from_str("3 -1 4").split(" ").to_integer();
    /// assert_eq!(numbers.to_vec().unwrap(), vec![3, -1, 4]);
    ///
    /// let broken = from_str("1,,2").split(",").to_integer();
    /// assert!(broken.to_vec().unwrap_err().is_parse());
    /// ```
    pub fn to_integer(self) -> Parsed<i64> {
        self.parse()
    }

    /// Parses every token with [`FromStr`].
    pub fn parse<T>(self) -> Parsed<T>
    where
        T: FromStr,
        T::Err: Error + Send + Sync + 'static,
    {
        self.try_transform(parse_token::<T> as fn(String) -> Result<T>)
    }
}

fn parse_token<T>(token: String) -> Result<T>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    token
        .parse()
        .map_err(|source| SequenceError::parse(token.as_str(), source))
}

impl Sequence for Tokens {
    type Item = String;
    type Cursor = TokensCursor;

    fn cursor(&self) -> Result<Self::Cursor> {
        Ok(TokensCursor {
            position: (!self.text.is_empty()).then_some(0),
            text: ReferenceCounter::clone(&self.text),
            separator: ReferenceCounter::clone(&self.separator),
        })
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        Traversal::Reiterable
    }
}

impl Finite for Tokens {}

impl Reiterable for Tokens {}

/// Cursor of a [`Tokens`].
#[derive(Debug, Clone)]
pub struct TokensCursor {
    text: ReferenceCounter<str>,
    separator: ReferenceCounter<str>,
    // Byte offset of the next token; `None` once the last token was produced.
    position: Option<usize>,
}

impl Cursor for TokensCursor {
    type Item = String;

    #[inline]
    fn has_next(&mut self) -> Result<bool> {
        Ok(self.position.is_some())
    }

    fn next(&mut self) -> Result<String> {
        let start = self.position.ok_or(SequenceError::ExhaustedCursor)?;
        let rest = &self.text[start..];

        let found = if self.separator.is_empty() {
            None
        } else {
            rest.find(&*self.separator)
        };

        match found {
            Some(offset) => {
                self.position = Some(start + offset + self.separator.len());
                Ok(rest[..offset].to_string())
            }
            None => {
                self.position = None;
                Ok(rest.to_string())
            }
        }
    }
}

static_assertions::assert_not_impl_any!(Tokens: Send, Sync);
