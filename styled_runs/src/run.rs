// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt::Debug;

/// A span of text sharing one attribute value.
///
/// Inside a [`StyledDocument`](crate::StyledDocument) runs are maximal: no two
/// neighbours carry equal attributes, and none is empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<A> {
    text: String,
    /// Length of `text` in chars.
    len: usize,
    attributes: A,
}

impl<A: Clone + PartialEq + Debug> Run<A> {
    /// Creates a run of `text` styled with `attributes`.
    ///
    /// An empty `text` is accepted here; documents drop such runs when they
    /// are spliced in.
    pub fn new(text: impl Into<String>, attributes: A) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            len,
            attributes,
        }
    }

    /// The text of this run.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The attributes of this run.
    #[inline]
    pub fn attributes(&self) -> &A {
        &self.attributes
    }

    /// Length of the run, in chars.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the run holds no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Consumes the run, returning its text and attributes.
    pub fn into_parts(self) -> (String, A) {
        (self.text, self.attributes)
    }

    pub(crate) fn set_attributes(&mut self, attributes: A) {
        self.attributes = attributes;
    }

    /// Splits off everything from char offset `at` into a new run with the
    /// same attributes. `at` must lie strictly inside the run.
    pub(crate) fn split_off(&mut self, at: usize) -> Self {
        debug_assert!(
            at > 0 && at < self.len,
            "split offset {at} must be inside a run of len {}",
            self.len
        );
        let byte = self
            .text
            .char_indices()
            .nth(at)
            .map_or(self.text.len(), |(ix, _)| ix);
        let tail = self.text.split_off(byte);
        let tail_len = self.len - at;
        self.len = at;
        Self {
            text: tail,
            len: tail_len,
            attributes: self.attributes.clone(),
        }
    }

    /// Appends the text of `other`, keeping `self`'s attributes.
    pub(crate) fn absorb(&mut self, other: Self) {
        self.text.push_str(&other.text);
        self.len += other.len;
    }
}
