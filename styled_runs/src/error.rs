// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

/// Error type for styled document operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the attempted range and the
/// length of the document at the time of failure. All offsets are counted in
/// `char`s.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} {start}..{end} for len {len}")]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The start offset of the caller-provided range.
    start: usize,

    /// The end offset (exclusive) of the caller-provided range.
    end: usize,

    /// The length in chars of the document at the time of failure.
    len: usize,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports document length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start offset of the range provided by the caller.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end offset of the range provided by the caller.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in chars of the document at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            start,
            end,
            len,
        }
    }
}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The range violated `start <= end <= len`.
    InvalidRange,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange => f.write_str("invalid range"),
        }
    }
}

/// Checks `range` against a document of `len` chars.
#[inline]
pub(crate) fn validate_range(range: &Range<usize>, len: usize) -> Result<(), Error> {
    if range.start > range.end || range.end > len {
        return Err(Error::invalid_range(range.start, range.end, len));
    }
    Ok(())
}

/// Checks a single caret `offset` against a document of `len` chars.
#[inline]
pub(crate) fn validate_offset(offset: usize, len: usize) -> Result<(), Error> {
    validate_range(&(offset..offset), len)
}
