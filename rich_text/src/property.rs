// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::{AttributeSet, LineStyle};

/// Identifies one property of an [`AttributeSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleKey {
    /// [`AttributeSet::bold`].
    Bold,
    /// [`AttributeSet::italic`].
    Italic,
    /// [`AttributeSet::underline`].
    Underline,
    /// [`AttributeSet::strikethrough`].
    Strikethrough,
    /// [`AttributeSet::foreground_color`].
    ForegroundColor,
    /// [`AttributeSet::background_color`].
    BackgroundColor,
    /// [`AttributeSet::font_size`].
    FontSize,
}

impl StyleKey {
    /// Every key, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::Strikethrough,
        Self::ForegroundColor,
        Self::BackgroundColor,
        Self::FontSize,
    ];

    /// Reads the value of this key from `attributes`.
    pub fn value_in(self, attributes: &AttributeSet) -> StyleProperty {
        match self {
            Self::Bold => StyleProperty::Bold(attributes.bold),
            Self::Italic => StyleProperty::Italic(attributes.italic),
            Self::Underline => StyleProperty::Underline(attributes.underline),
            Self::Strikethrough => StyleProperty::Strikethrough(attributes.strikethrough),
            Self::ForegroundColor => StyleProperty::ForegroundColor(attributes.foreground_color),
            Self::BackgroundColor => StyleProperty::BackgroundColor(attributes.background_color),
            Self::FontSize => StyleProperty::FontSize(attributes.font_size),
        }
    }
}

/// The on/off keys that can be toggled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FlagKey {
    /// Bold weight.
    Bold,
    /// Italic style.
    Italic,
    /// Single underline.
    Underline,
    /// Single strikethrough.
    Strikethrough,
}

impl FlagKey {
    /// Returns `true` if the flag is on in `attributes`.
    pub fn is_set(self, attributes: &AttributeSet) -> bool {
        match self {
            Self::Bold => attributes.bold,
            Self::Italic => attributes.italic,
            Self::Underline => attributes.underline.is_drawn(),
            Self::Strikethrough => attributes.strikethrough.is_drawn(),
        }
    }

    /// The property turning this flag on (`active`) or back to its default.
    pub fn property(self, active: bool) -> StyleProperty {
        let line = if active {
            LineStyle::Single
        } else {
            LineStyle::None
        };
        match self {
            Self::Bold => StyleProperty::Bold(active),
            Self::Italic => StyleProperty::Italic(active),
            Self::Underline => StyleProperty::Underline(line),
            Self::Strikethrough => StyleProperty::Strikethrough(line),
        }
    }
}

impl From<FlagKey> for StyleKey {
    fn from(key: FlagKey) -> Self {
        match key {
            FlagKey::Bold => Self::Bold,
            FlagKey::Italic => Self::Italic,
            FlagKey::Underline => Self::Underline,
            FlagKey::Strikethrough => Self::Strikethrough,
        }
    }
}

/// A single property value, applied to a selection with
/// [`SelectionAttributeEngine::set_value`](crate::SelectionAttributeEngine::set_value).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StyleProperty {
    /// Bold weight.
    Bold(bool),
    /// Italic style.
    Italic(bool),
    /// Underline decoration.
    Underline(LineStyle),
    /// Strikethrough decoration.
    Strikethrough(LineStyle),
    /// Text color; `None` restores the default text color.
    ForegroundColor(Option<Color>),
    /// Highlight color; `None` clears the highlight.
    BackgroundColor(Option<Color>),
    /// Font size in points.
    FontSize(f32),
}

impl StyleProperty {
    /// The key this property sets.
    pub fn key(&self) -> StyleKey {
        match self {
            Self::Bold(_) => StyleKey::Bold,
            Self::Italic(_) => StyleKey::Italic,
            Self::Underline(_) => StyleKey::Underline,
            Self::Strikethrough(_) => StyleKey::Strikethrough,
            Self::ForegroundColor(_) => StyleKey::ForegroundColor,
            Self::BackgroundColor(_) => StyleKey::BackgroundColor,
            Self::FontSize(_) => StyleKey::FontSize,
        }
    }

    /// Returns `attributes` with this property's key replaced.
    #[must_use]
    pub fn apply(&self, attributes: &AttributeSet) -> AttributeSet {
        let mut out = *attributes;
        match *self {
            Self::Bold(bold) => out.bold = bold,
            Self::Italic(italic) => out.italic = italic,
            Self::Underline(line) => out.underline = line,
            Self::Strikethrough(line) => out.strikethrough = line,
            Self::ForegroundColor(color) => out.foreground_color = color,
            Self::BackgroundColor(color) => out.background_color = color,
            Self::FontSize(size) => out.font_size = size,
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{FlagKey, StyleKey, StyleProperty};
    use crate::{AttributeSet, LineStyle};
    use peniko::color::palette::css;

    #[test]
    fn apply_then_read_back() {
        let attrs = AttributeSet::new();
        let properties = [
            StyleProperty::Bold(true),
            StyleProperty::Italic(true),
            StyleProperty::Underline(LineStyle::Single),
            StyleProperty::Strikethrough(LineStyle::Single),
            StyleProperty::ForegroundColor(Some(css::BLUE)),
            StyleProperty::BackgroundColor(Some(css::YELLOW)),
            StyleProperty::FontSize(24.0),
        ];
        for property in properties {
            let applied = property.apply(&attrs);
            assert_eq!(property.key().value_in(&applied), property);
            // Only the targeted key changes.
            for key in StyleKey::ALL.into_iter().filter(|key| *key != property.key()) {
                assert_eq!(key.value_in(&applied), key.value_in(&attrs));
            }
        }
    }

    #[test]
    fn flag_properties_round_trip() {
        for key in [
            FlagKey::Bold,
            FlagKey::Italic,
            FlagKey::Underline,
            FlagKey::Strikethrough,
        ] {
            let on = key.property(true).apply(&AttributeSet::new());
            assert!(key.is_set(&on), "{key:?} should be set");
            let off = key.property(false).apply(&on);
            assert!(!key.is_set(&off), "{key:?} should be cleared");
            assert_eq!(off, AttributeSet::new());
            assert_eq!(key.property(true).key(), StyleKey::from(key));
        }
    }
}
