// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_runs::{Error, Run, StyledDocument};

use crate::{
    AttributeSet, EditorConfig, FlagKey, MixedTogglePolicy, Selection, StyleProperty,
    TypingAttributes,
};

/// A styled document whose runs carry [`AttributeSet`]s.
pub type RichDocument = StyledDocument<AttributeSet>;

/// Computes and applies character attributes scoped to a [`Selection`].
///
/// The engine holds no document state; every call takes the document it works
/// on. Each operation validates the selection first and fails with
/// [`ErrorKind::InvalidRange`](crate::ErrorKind::InvalidRange) without
/// touching the document.
#[derive(Clone, Debug, Default)]
pub struct SelectionAttributeEngine {
    mixed_toggle: MixedTogglePolicy,
}

impl SelectionAttributeEngine {
    /// Creates an engine with the default mixed-toggle policy.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine using the policies from `config`.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new().with_mixed_toggle(config.mixed_toggle())
    }

    /// Sets the policy for toggling a mixed selection.
    #[must_use]
    pub fn with_mixed_toggle(mut self, policy: MixedTogglePolicy) -> Self {
        self.mixed_toggle = policy;
        self
    }

    /// The policy for toggling a mixed selection.
    #[inline]
    pub fn mixed_toggle(&self) -> MixedTogglePolicy {
        self.mixed_toggle
    }

    /// Returns the attributes a toolbar should display for `selection`.
    ///
    /// A caret reports the attributes text typed there would pick up. A range
    /// reports, per key, the value all covered text agrees on or
    /// [`KeyState::Mixed`](crate::KeyState::Mixed).
    pub fn typing_attributes(
        &self,
        document: &RichDocument,
        selection: Selection,
    ) -> Result<TypingAttributes, Error> {
        if selection.is_collapsed() {
            let attributes = document.attributes_at(selection.start)?;
            return Ok(TypingAttributes::from_attributes(attributes));
        }
        let slices = document.slice_attributes(selection.as_range())?;
        Ok(TypingAttributes::intersect(slices.map(|(_, attributes)| attributes))
            .unwrap_or_else(|| TypingAttributes::from_attributes(document.default_attributes())))
    }

    /// Toggles `key` across `selection` and returns the value it was set to.
    ///
    /// A key counts as active only if all covered text has it. An active key
    /// is cleared; an inactive one is set. A mixed selection follows the
    /// [`MixedTogglePolicy`]. A caret leaves the document unchanged.
    pub fn toggle(
        &self,
        document: &mut RichDocument,
        selection: Selection,
        key: FlagKey,
    ) -> Result<bool, Error> {
        let typing = self.typing_attributes(document, selection)?;
        let activate = if typing.is_mixed(key) {
            self.mixed_toggle == MixedTogglePolicy::ActivateAll
        } else {
            !typing.is_active(key)
        };
        self.set_value(document, selection, key.property(activate))?;
        Ok(activate)
    }

    /// Sets `property` across `selection`, unconditionally.
    pub fn set_value(
        &self,
        document: &mut RichDocument,
        selection: Selection,
        property: StyleProperty,
    ) -> Result<(), Error> {
        document.set_attributes(selection.as_range(), |attributes| {
            property.apply(attributes)
        })
    }

    /// Resets every key across `selection` to the document default.
    pub fn clear_formatting(
        &self,
        document: &mut RichDocument,
        selection: Selection,
    ) -> Result<(), Error> {
        let defaults = *document.default_attributes();
        document.set_attributes(selection.as_range(), |_| defaults)
    }

    /// Replaces the text in `selection` with a pre-styled `fragment`.
    ///
    /// The caller decides where the selection goes afterwards.
    pub fn replace_range(
        &self,
        document: &mut RichDocument,
        selection: Selection,
        fragment: impl IntoIterator<Item = Run<AttributeSet>>,
    ) -> Result<(), Error> {
        document.replace_range(selection.as_range(), fragment)
    }

    /// Inserts a pre-styled `fragment` at `offset` without touching other runs.
    pub fn insert_styled_fragment(
        &self,
        document: &mut RichDocument,
        offset: usize,
        fragment: impl IntoIterator<Item = Run<AttributeSet>>,
    ) -> Result<(), Error> {
        self.replace_range(document, Selection::collapsed(offset), fragment)
    }
}
