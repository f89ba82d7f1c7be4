// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Font size of unstyled text, in points.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Line decoration style, used for underline and strikethrough.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// No decoration.
    #[default]
    None,
    /// A single line.
    Single,
}

impl LineStyle {
    /// Returns `true` if a line is drawn.
    #[inline]
    pub fn is_drawn(self) -> bool {
        self != Self::None
    }
}

/// The full set of character attributes carried by every run.
///
/// Every property is always present: unset visual properties use explicit
/// default values (`LineStyle::None`, `None` colors) rather than being
/// absent. Two sets are equal iff all fields are equal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AttributeSet {
    /// Bold weight.
    pub bold: bool,
    /// Italic style.
    pub italic: bool,
    /// Underline decoration.
    pub underline: LineStyle,
    /// Strikethrough decoration.
    pub strikethrough: LineStyle,
    /// Text color; `None` is the default text color.
    pub foreground_color: Option<Color>,
    /// Highlight color; `None` means no highlight.
    pub background_color: Option<Color>,
    /// Font size in points.
    pub font_size: f32,
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: LineStyle::None,
            strikethrough: LineStyle::None,
            foreground_color: None,
            background_color: None,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl AttributeSet {
    /// Creates the default attribute set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets bold.
    #[must_use]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Sets italic.
    #[must_use]
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Sets the underline style.
    #[must_use]
    pub fn with_underline(mut self, underline: LineStyle) -> Self {
        self.underline = underline;
        self
    }

    /// Sets the strikethrough style.
    #[must_use]
    pub fn with_strikethrough(mut self, strikethrough: LineStyle) -> Self {
        self.strikethrough = strikethrough;
        self
    }

    /// Sets the text color.
    #[must_use]
    pub fn with_foreground_color(mut self, color: Option<Color>) -> Self {
        self.foreground_color = color;
        self
    }

    /// Sets the highlight color.
    #[must_use]
    pub fn with_background_color(mut self, color: Option<Color>) -> Self {
        self.background_color = color;
        self
    }

    /// Sets the font size.
    #[must_use]
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}
