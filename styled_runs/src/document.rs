// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::iter::FusedIterator;
use core::ops::Range;

use crate::error::{validate_offset, validate_range};
use crate::{Error, Run};

/// An ordered sequence of maximal [`Run`]s that owns all of its text.
///
/// The runs always reconstruct the document text exactly, no run is empty and
/// no two adjacent runs carry equal attributes. Offsets are counted in `char`s.
///
/// Mutation happens through [`set_attributes`](Self::set_attributes) (restyle
/// without changing text) and [`replace_range`](Self::replace_range)
/// (structural edit). Both validate their range first and leave the document
/// untouched on failure.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledDocument<A> {
    runs: Vec<Run<A>>,
    /// Total length in chars.
    len: usize,
    default_attributes: A,
}

impl<A: Clone + PartialEq + Debug> StyledDocument<A> {
    /// Creates a document holding `text` as a single run styled with `attributes`.
    ///
    /// `attributes` also becomes the document default, reported for an empty document.
    pub fn new(text: impl Into<String>, attributes: A) -> Self {
        let mut document = Self::empty(attributes.clone());
        document.append([Run::new(text, attributes)]);
        document
    }

    /// Creates an empty document with the given default attributes.
    pub fn empty(default_attributes: A) -> Self {
        Self {
            runs: Vec::new(),
            len: 0,
            default_attributes,
        }
    }

    /// Creates a document by appending pre-built runs in order.
    ///
    /// Empty runs are dropped and equal neighbours are merged.
    pub fn from_runs(default_attributes: A, runs: impl IntoIterator<Item = Run<A>>) -> Self {
        let mut document = Self::empty(default_attributes);
        document.append(runs);
        document
    }

    /// Returns the length of the document, in chars.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the document holds no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The attributes reported for an empty document.
    #[inline]
    pub fn default_attributes(&self) -> &A {
        &self.default_attributes
    }

    /// The runs of this document, in order.
    #[inline]
    pub fn runs(&self) -> &[Run<A>] {
        &self.runs
    }

    /// Returns the number of runs.
    #[inline]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Returns the full text of the document.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    /// Checks that `range` satisfies `start <= end <= len` for this document.
    #[inline]
    pub fn check_range(&self, range: Range<usize>) -> Result<(), Error> {
        validate_range(&range, self.len)
    }

    /// Returns the attributes that text typed at `offset` would pick up.
    ///
    /// This is the run holding the char immediately before `offset`, or the
    /// first run when `offset` is `0`. An empty document reports its default
    /// attributes.
    pub fn attributes_at(&self, offset: usize) -> Result<&A, Error> {
        validate_offset(offset, self.len)?;
        let mut end = 0;
        for run in &self.runs {
            end += run.len();
            if offset <= end {
                return Ok(run.attributes());
            }
        }
        Ok(&self.default_attributes)
    }

    /// Returns the attribute breakdown covering exactly `range`.
    ///
    /// Runs overlapping the range boundaries are clipped in the view; the
    /// stored runs are not touched. An empty range yields nothing.
    pub fn slice_attributes(&self, range: Range<usize>) -> Result<AttributeSlices<'_, A>, Error> {
        validate_range(&range, self.len)?;
        Ok(AttributeSlices {
            runs: self.runs.iter(),
            run_start: 0,
            range,
        })
    }

    /// Replaces the attributes of every char in `range` with `mutator(old)`.
    ///
    /// Runs straddling either boundary are split first, and equal neighbours
    /// in the touched window are merged afterwards, so an identity `mutator`
    /// leaves the run list unchanged. A collapsed range is a no-op.
    pub fn set_attributes(
        &mut self,
        range: Range<usize>,
        mut mutator: impl FnMut(&A) -> A,
    ) -> Result<(), Error> {
        validate_range(&range, self.len)?;
        if range.is_empty() {
            return Ok(());
        }

        let first = self.split_at(range.start);
        let last = self.split_at(range.end);
        for run in &mut self.runs[first..last] {
            let attributes = mutator(run.attributes());
            run.set_attributes(attributes);
        }
        self.coalesce(first.saturating_sub(1)..last + 1);

        log::trace!(
            "set_attributes {}..{}: {} runs",
            range.start,
            range.end,
            self.runs.len()
        );
        Ok(())
    }

    /// Deletes the text in `range` and splices `fragment` in its place.
    ///
    /// Fragment runs are used as they are (empty ones are dropped), then the
    /// edit boundary is merged. A collapsed range is a pure insertion.
    pub fn replace_range(
        &mut self,
        range: Range<usize>,
        fragment: impl IntoIterator<Item = Run<A>>,
    ) -> Result<(), Error> {
        validate_range(&range, self.len)?;
        let fragment: Vec<Run<A>> = fragment.into_iter().filter(|run| !run.is_empty()).collect();
        let inserted: usize = fragment.iter().map(Run::len).sum();
        let count = fragment.len();

        let first = self.split_at(range.start);
        let last = self.split_at(range.end);
        self.runs.splice(first..last, fragment);
        self.len = self.len - (range.end - range.start) + inserted;
        self.coalesce(first.saturating_sub(1)..first + count + 1);

        log::trace!(
            "replace_range {}..{} with {inserted} chars: {} runs",
            range.start,
            range.end,
            self.runs.len()
        );
        Ok(())
    }

    /// Appends `fragment` at the end of the document.
    pub fn append(&mut self, fragment: impl IntoIterator<Item = Run<A>>) {
        for run in fragment {
            if run.is_empty() {
                continue;
            }
            self.len += run.len();
            match self.runs.last_mut() {
                Some(last) if last.attributes() == run.attributes() => last.absorb(run),
                _ => self.runs.push(run),
            }
        }
    }

    /// Removes all text, keeping the default attributes.
    pub fn clear(&mut self) {
        self.runs.clear();
        self.len = 0;
    }

    /// Returns the index of the run holding the char at `offset` and that
    /// run's start offset, or `(runs.len(), len)` at the end of the document.
    fn locate(&self, offset: usize) -> (usize, usize) {
        let mut start = 0;
        for (ix, run) in self.runs.iter().enumerate() {
            if offset < start + run.len() {
                return (ix, start);
            }
            start += run.len();
        }
        (self.runs.len(), start)
    }

    /// Ensures a run boundary at `offset` and returns the index of the run
    /// starting there (or `runs.len()` at the end of the document).
    fn split_at(&mut self, offset: usize) -> usize {
        let (ix, start) = self.locate(offset);
        if ix == self.runs.len() || start == offset {
            return ix;
        }
        let tail = self.runs[ix].split_off(offset - start);
        self.runs.insert(ix + 1, tail);
        ix + 1
    }

    /// Merges adjacent runs with equal attributes inside `window` (run indices).
    fn coalesce(&mut self, window: Range<usize>) {
        let end = window.end.min(self.runs.len());
        let start = window.start.min(end);
        if end - start < 2 {
            return;
        }
        let mut merged: Vec<Run<A>> = Vec::with_capacity(end - start);
        for run in self.runs.drain(start..end) {
            match merged.last_mut() {
                Some(last) if last.attributes() == run.attributes() => last.absorb(run),
                _ => merged.push(run),
            }
        }
        self.runs.splice(start..start, merged);
    }
}

impl<A: Clone + PartialEq + Debug> fmt::Display for StyledDocument<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            f.write_str(run.text())?;
        }
        Ok(())
    }
}

/// Iterator over the `(sub_range, attributes)` pieces covering a range.
///
/// Returned by [`StyledDocument::slice_attributes`].
#[derive(Clone, Debug)]
pub struct AttributeSlices<'a, A> {
    runs: core::slice::Iter<'a, Run<A>>,
    run_start: usize,
    range: Range<usize>,
}

impl<'a, A: Clone + PartialEq + Debug> Iterator for AttributeSlices<'a, A> {
    type Item = (Range<usize>, &'a A);

    fn next(&mut self) -> Option<Self::Item> {
        if self.range.is_empty() {
            return None;
        }
        loop {
            let run = self.runs.next()?;
            let start = self.run_start;
            let end = start + run.len();
            self.run_start = end;
            if end <= self.range.start {
                continue;
            }
            if start >= self.range.end {
                self.range.end = self.range.start;
                return None;
            }
            let clipped = start.max(self.range.start)..end.min(self.range.end);
            return Some((clipped, run.attributes()));
        }
    }
}

impl<A: Clone + PartialEq + Debug> FusedIterator for AttributeSlices<'_, A> {}
