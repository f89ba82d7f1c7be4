// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A range of chars in a document, or a caret when `start == end`.
///
/// Offsets are absolute `char` counts into the current text. A selection is
/// a plain value: operations validate it against the document they are given
/// and never adjust it after an edit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// First selected char.
    pub start: usize,
    /// One past the last selected char.
    pub end: usize,
}

impl Selection {
    /// Creates a selection over `start..end`.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates a caret at `offset`.
    #[inline]
    pub const fn collapsed(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns `true` if this is a caret.
    #[inline]
    pub const fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected chars; `0` for a caret or a reversed selection.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if no chars are selected.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns this selection as a `Range<usize>`.
    #[inline]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Selection {
    #[inline]
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Selection> for Range<usize> {
    #[inline]
    fn from(selection: Selection) -> Self {
        selection.as_range()
    }
}
