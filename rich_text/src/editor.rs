// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use peniko::Color;
use styled_runs::{Error, Run};

use crate::engine::RichDocument;
use crate::sample::{WELCOME_TEXT, sample_fragment};
use crate::{
    AttributeSet, EditorConfig, FlagKey, Selection, SelectionAttributeEngine, StyleProperty,
    TypingAttributes,
};

/// What a formatting toolbar shows for the current selection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ToolbarState {
    /// All selected text is bold.
    pub bold: bool,
    /// All selected text is italic.
    pub italic: bool,
    /// All selected text is underlined.
    pub underline: bool,
    /// All selected text is struck through.
    pub strikethrough: bool,
    /// The text color shared by the whole selection, if any.
    pub foreground_color: Option<Color>,
    /// The highlight color shared by the whole selection, if any.
    pub background_color: Option<Color>,
    /// The size shown by the font size stepper.
    pub font_size: f32,
}

/// An editing session: a document, a selection and the toolbar actions on them.
///
/// Formatting a caret does not touch the document; it changes the attributes
/// the next [`insert_text`](Self::insert_text) uses. Those pending attributes
/// are dropped whenever the selection moves.
#[derive(Clone, Debug)]
pub struct RichTextEditor {
    document: RichDocument,
    selection: Selection,
    engine: SelectionAttributeEngine,
    config: EditorConfig,
    font_size: f32,
    caret_attributes: Option<AttributeSet>,
}

impl Default for RichTextEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl RichTextEditor {
    /// Creates a session over an empty document.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_text("", config)
    }

    /// Creates a session over unstyled `text`, with a caret at the start.
    pub fn with_text(text: impl Into<String>, config: EditorConfig) -> Self {
        let defaults = *config.default_attributes();
        Self {
            document: RichDocument::new(text, defaults),
            selection: Selection::collapsed(0),
            engine: SelectionAttributeEngine::from_config(&config),
            font_size: defaults.font_size,
            config,
            caret_attributes: None,
        }
    }

    /// Creates a session over the welcome text.
    pub fn welcome(config: EditorConfig) -> Self {
        Self::with_text(WELCOME_TEXT, config)
    }

    /// The document being edited.
    #[inline]
    pub fn document(&self) -> &RichDocument {
        &self.document
    }

    /// The plain text of the document.
    pub fn text(&self) -> String {
        self.document.text()
    }

    /// Number of chars in the document.
    #[inline]
    pub fn character_count(&self) -> usize {
        self.document.len()
    }

    /// The current selection.
    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The session configuration.
    #[inline]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The size shown by the font size stepper.
    #[inline]
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Moves the selection. Fails if it does not fit the document.
    pub fn set_selection(&mut self, selection: Selection) -> Result<(), Error> {
        self.document.check_range(selection.as_range())?;
        self.selection = selection;
        self.caret_attributes = None;
        Ok(())
    }

    /// Selects the whole document.
    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.document.len());
        self.caret_attributes = None;
    }

    /// The attributes of the current selection, including pending caret formatting.
    pub fn typing_attributes(&self) -> Result<TypingAttributes, Error> {
        match self.caret_attributes {
            Some(attributes) if self.selection.is_collapsed() => {
                Ok(TypingAttributes::from_attributes(&attributes))
            }
            _ => self
                .engine
                .typing_attributes(&self.document, self.selection),
        }
    }

    /// The toolbar state for the current selection.
    pub fn toolbar_state(&self) -> Result<ToolbarState, Error> {
        let typing = self.typing_attributes()?;
        Ok(ToolbarState {
            bold: typing.is_active(FlagKey::Bold),
            italic: typing.is_active(FlagKey::Italic),
            underline: typing.is_active(FlagKey::Underline),
            strikethrough: typing.is_active(FlagKey::Strikethrough),
            foreground_color: typing.foreground_color.uniform().copied().flatten(),
            background_color: typing.background_color.uniform().copied().flatten(),
            font_size: self.font_size,
        })
    }

    /// Toggles `key` on the selection and returns the value it was set to.
    pub fn toggle(&mut self, key: FlagKey) -> Result<bool, Error> {
        if self.selection.is_collapsed() {
            let current = self.caret_base()?;
            let activate = !key.is_set(&current);
            self.caret_attributes = Some(key.property(activate).apply(&current));
            return Ok(activate);
        }
        let activate = self
            .engine
            .toggle(&mut self.document, self.selection, key)?;
        log::debug!("toggle {key:?} to {activate} over {:?}", self.selection);
        Ok(activate)
    }

    /// Toggles bold on the selection.
    pub fn toggle_bold(&mut self) -> Result<bool, Error> {
        self.toggle(FlagKey::Bold)
    }

    /// Toggles italic on the selection.
    pub fn toggle_italic(&mut self) -> Result<bool, Error> {
        self.toggle(FlagKey::Italic)
    }

    /// Toggles underline on the selection.
    pub fn toggle_underline(&mut self) -> Result<bool, Error> {
        self.toggle(FlagKey::Underline)
    }

    /// Toggles strikethrough on the selection.
    pub fn toggle_strikethrough(&mut self) -> Result<bool, Error> {
        self.toggle(FlagKey::Strikethrough)
    }

    /// Sets `property` on the selection.
    pub fn set_value(&mut self, property: StyleProperty) -> Result<(), Error> {
        if self.selection.is_collapsed() {
            let current = self.caret_base()?;
            self.caret_attributes = Some(property.apply(&current));
            return Ok(());
        }
        self.engine
            .set_value(&mut self.document, self.selection, property)
    }

    /// Colors the selected text.
    pub fn apply_foreground_color(&mut self, color: Color) -> Result<(), Error> {
        self.set_value(StyleProperty::ForegroundColor(Some(color)))
    }

    /// Highlights the selected text; `None` clears the highlight.
    pub fn apply_background_color(&mut self, color: Option<Color>) -> Result<(), Error> {
        self.set_value(StyleProperty::BackgroundColor(color))
    }

    /// Sets the font size of the selection, clamped to the configured range.
    ///
    /// A size that is not finite is ignored.
    pub fn set_font_size(&mut self, size: f32) -> Result<(), Error> {
        if !size.is_finite() {
            return Ok(());
        }
        let size = self.config.clamp_font_size(size);
        self.set_value(StyleProperty::FontSize(size))?;
        self.font_size = size;
        log::debug!("font size {size} over {:?}", self.selection);
        Ok(())
    }

    /// Steps the font size up by the configured increment.
    pub fn increase_font_size(&mut self) -> Result<(), Error> {
        self.set_font_size(self.font_size + self.config.font_size_step())
    }

    /// Steps the font size down by the configured increment.
    pub fn decrease_font_size(&mut self) -> Result<(), Error> {
        self.set_font_size(self.font_size - self.config.font_size_step())
    }

    /// Resets the selection to the default attributes and the stepper to the default size.
    pub fn clear_formatting(&mut self) -> Result<(), Error> {
        let defaults = *self.document.default_attributes();
        if self.selection.is_collapsed() {
            self.document.check_range(self.selection.as_range())?;
            self.caret_attributes = Some(defaults);
        } else {
            self.engine
                .clear_formatting(&mut self.document, self.selection)?;
        }
        self.font_size = defaults.font_size;
        Ok(())
    }

    /// Replaces the selection with `text` and leaves a caret after it.
    ///
    /// A caret types with its typing attributes; a range takes the attributes
    /// of its first char.
    pub fn insert_text(&mut self, text: &str) -> Result<(), Error> {
        let attributes = if self.selection.is_collapsed() {
            self.caret_base()?
        } else {
            self.document
                .slice_attributes(self.selection.as_range())?
                .next()
                .map_or(*self.document.default_attributes(), |(_, attributes)| {
                    *attributes
                })
        };
        self.engine.replace_range(
            &mut self.document,
            self.selection,
            [Run::new(text, attributes)],
        )?;
        self.selection = Selection::collapsed(self.selection.start + text.chars().count());
        self.caret_attributes = None;
        Ok(())
    }

    /// Removes all text and places the caret at the start.
    pub fn clear_all(&mut self) {
        self.document.clear();
        self.selection = Selection::collapsed(0);
        self.caret_attributes = None;
    }

    /// Appends the sample fragment to the end of the document.
    pub fn insert_sample_text(&mut self) -> Result<(), Error> {
        let fragment = sample_fragment(self.document.default_attributes());
        let end = self.document.len();
        self.engine
            .insert_styled_fragment(&mut self.document, end, fragment)?;
        log::debug!(
            "inserted sample text, document now {} chars",
            self.document.len()
        );
        Ok(())
    }

    fn caret_base(&self) -> Result<AttributeSet, Error> {
        match self.caret_attributes {
            Some(attributes) => Ok(attributes),
            None => self.document.attributes_at(self.selection.start).copied(),
        }
    }
}
