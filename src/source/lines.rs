//! Line-oriented input as a single-pass sequence.
//!
//! A [`LineSource`] owns one [`LineResource`]. It can read single lines
//! eagerly with [`LineSource::read_line`], or hand the resource to a [`Lines`]
//! sequence with [`LineSource::lines`].
//!
//! # Resource Lifetime
//!
//! - The resource is closed as soon as it reports end-of-data.
//! - A read fault closes the resource best-effort before the fault is
//!   returned. A failure of that close is logged and dropped so it never hides
//!   the read fault.
//! - A cursor dropped before exhaustion closes the resource.
//! - The resource is closed at most once and never reopened.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let input = "first\nsecond\n".as_bytes();
//! let numbered = from_reader(input).lines().with_index();
//! assert_eq!(numbered.join("\n").unwrap(), "0: first\n1: second");
//! ```

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, StdinLock};
use std::path::Path;

use crate::cursor::{Cursor, ensure_pending};
use crate::error::{Result, SequenceError};
use crate::sequence::{Finite, Sequence, Traversal};

// =============================================================================
// Line Resource
// =============================================================================

/// A closable, line-oriented input.
pub trait LineResource {
    /// Reads one line without its terminator, or `None` at end-of-data.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Releases the underlying handle.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn close(&mut self) -> io::Result<()>;
}

/// [`LineResource`] over any [`BufRead`]; closing drops the reader.
///
/// `\n` and `\r\n` terminators are stripped. Reading after close reports
/// end-of-data.
#[derive(Debug)]
pub struct ReaderResource<R> {
    reader: Option<R>,
}

impl<R: BufRead> ReaderResource<R> {
    /// Wraps `reader`.
    #[inline]
    pub const fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
        }
    }

    /// Returns `true` once the reader has been dropped.
    #[inline]
    pub const fn is_closed(&self) -> bool {
        self.reader.is_none()
    }
}

impl<R: BufRead> LineResource for ReaderResource<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn close(&mut self) -> io::Result<()> {
        self.reader = None;
        Ok(())
    }
}

// =============================================================================
// Line Source
// =============================================================================

/// Owner of a line resource, before it is turned into a sequence.
#[derive(Debug)]
pub struct LineSource<R> {
    resource: R,
}

impl<R: LineResource> LineSource<R> {
    /// Wraps an arbitrary resource.
    #[inline]
    pub const fn new(resource: R) -> Self {
        Self { resource }
    }

    /// Eagerly reads exactly one line, or `None` at end-of-data.
    ///
    /// The resource stays open either way; only [`Lines`] closes it.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Io`] if the read fails.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.resource.read_line()?)
    }

    /// Hands the resource to a single-pass sequence of its remaining lines.
    #[inline]
    pub fn lines(self) -> Lines<R> {
        Lines {
            resource: RefCell::new(Some(self.resource)),
        }
    }
}

impl<B: BufRead> LineSource<ReaderResource<B>> {
    /// Reads lines from a buffered reader.
    #[inline]
    pub const fn from_reader(reader: B) -> Self {
        Self::new(ReaderResource::new(reader))
    }
}

impl<T: Read> LineSource<ReaderResource<BufReader<T>>> {
    /// Reads lines from an unbuffered reader.
    #[inline]
    pub fn from_read(read: T) -> Self {
        Self::from_reader(BufReader::new(read))
    }
}

impl LineSource<ReaderResource<BufReader<File>>> {
    /// Opens the file at `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Io`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        tracing::trace!(path = %path.display(), "opened line source");
        Ok(Self::from_read(file))
    }
}

impl LineSource<ReaderResource<StdinLock<'static>>> {
    /// Reads lines from the process's standard input.
    #[inline]
    pub fn stdin() -> Self {
        Self::from_reader(io::stdin().lock())
    }
}

// =============================================================================
// Lines
// =============================================================================

/// The lines of a resource, traversable once.
///
/// The first call to [`Sequence::cursor`] takes the resource; later calls fail
/// with [`SequenceError::AlreadyConsumed`].
pub struct Lines<R> {
    resource: RefCell<Option<R>>,
}

impl<R: LineResource> Sequence for Lines<R> {
    type Item = String;
    type Cursor = LinesCursor<R>;

    fn cursor(&self) -> Result<Self::Cursor> {
        let resource = self
            .resource
            .borrow_mut()
            .take()
            .ok_or(SequenceError::AlreadyConsumed { sequence: "Lines" })?;
        tracing::trace!("line source handed to cursor");
        Ok(LinesCursor {
            resource: Some(resource),
            lookahead: None,
        })
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        Traversal::SinglePass
    }
}

impl<R: LineResource> Finite for Lines<R> {}

impl<R> std::fmt::Debug for Lines<R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let consumed = self
            .resource
            .try_borrow()
            .map_or(true, |resource| resource.is_none());
        formatter
            .debug_struct("Lines")
            .field("consumed", &consumed)
            .finish()
    }
}

/// Cursor of a [`Lines`]; owns the resource until it is closed.
pub struct LinesCursor<R: LineResource> {
    resource: Option<R>,
    lookahead: Option<String>,
}

impl<R: LineResource> LinesCursor<R> {
    /// Returns `true` once the resource has been closed.
    #[inline]
    pub const fn is_closed(&self) -> bool {
        self.resource.is_none()
    }

    fn close(&mut self) -> io::Result<()> {
        match self.resource.take() {
            Some(mut resource) => {
                tracing::trace!("closing line source");
                resource.close()
            }
            None => Ok(()),
        }
    }

    fn close_quietly(&mut self) {
        if let Err(error) = self.close() {
            tracing::warn!(%error, "failed to close line source; ignoring");
        }
    }
}

impl<R: LineResource> Cursor for LinesCursor<R> {
    type Item = String;

    fn has_next(&mut self) -> Result<bool> {
        if self.lookahead.is_some() {
            return Ok(true);
        }
        let Some(resource) = self.resource.as_mut() else {
            return Ok(false);
        };

        match resource.read_line() {
            Ok(Some(line)) => {
                self.lookahead = Some(line);
                Ok(true)
            }
            Ok(None) => {
                tracing::debug!("line source reached end of data");
                self.close()?;
                Ok(false)
            }
            Err(error) => {
                self.close_quietly();
                Err(SequenceError::Io(error))
            }
        }
    }

    fn next(&mut self) -> Result<String> {
        ensure_pending(self)?;
        self.lookahead.take().ok_or(SequenceError::ExhaustedCursor)
    }
}

impl<R: LineResource> Drop for LinesCursor<R> {
    fn drop(&mut self) {
        self.close_quietly();
    }
}
