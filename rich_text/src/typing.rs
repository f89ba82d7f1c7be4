// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::{AttributeSet, FlagKey, LineStyle};

/// The value of one key across a selection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum KeyState<T> {
    /// All covered text agrees on this value.
    Uniform(T),
    /// The covered text carries differing values.
    Mixed,
}

impl<T: PartialEq> KeyState<T> {
    /// Returns the agreed value, or `None` when mixed.
    #[inline]
    pub fn uniform(&self) -> Option<&T> {
        match self {
            Self::Uniform(value) => Some(value),
            Self::Mixed => None,
        }
    }

    /// Returns `true` if the covered text disagrees on this key.
    #[inline]
    pub fn is_mixed(&self) -> bool {
        matches!(self, Self::Mixed)
    }

    fn merge(&mut self, value: T) {
        if let Self::Uniform(current) = self {
            if *current != value {
                *self = Self::Mixed;
            }
        }
    }
}

/// The attributes an editor should display for a selection.
///
/// For a caret this is the attribute set new text would get. For a range each
/// key is [`KeyState::Uniform`] only if every covered char agrees on it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TypingAttributes {
    /// Bold weight.
    pub bold: KeyState<bool>,
    /// Italic style.
    pub italic: KeyState<bool>,
    /// Underline decoration.
    pub underline: KeyState<LineStyle>,
    /// Strikethrough decoration.
    pub strikethrough: KeyState<LineStyle>,
    /// Text color.
    pub foreground_color: KeyState<Option<Color>>,
    /// Highlight color.
    pub background_color: KeyState<Option<Color>>,
    /// Font size.
    pub font_size: KeyState<f32>,
}

impl TypingAttributes {
    /// Uniform state for every key of `attributes`.
    pub fn from_attributes(attributes: &AttributeSet) -> Self {
        Self {
            bold: KeyState::Uniform(attributes.bold),
            italic: KeyState::Uniform(attributes.italic),
            underline: KeyState::Uniform(attributes.underline),
            strikethrough: KeyState::Uniform(attributes.strikethrough),
            foreground_color: KeyState::Uniform(attributes.foreground_color),
            background_color: KeyState::Uniform(attributes.background_color),
            font_size: KeyState::Uniform(attributes.font_size),
        }
    }

    /// Intersects a sequence of attribute sets, key by key.
    ///
    /// Returns `None` for an empty sequence.
    pub fn intersect<'a>(mut sets: impl Iterator<Item = &'a AttributeSet>) -> Option<Self> {
        let mut out = Self::from_attributes(sets.next()?);
        for attributes in sets {
            out.merge(attributes);
        }
        Some(out)
    }

    fn merge(&mut self, attributes: &AttributeSet) {
        self.bold.merge(attributes.bold);
        self.italic.merge(attributes.italic);
        self.underline.merge(attributes.underline);
        self.strikethrough.merge(attributes.strikethrough);
        self.foreground_color.merge(attributes.foreground_color);
        self.background_color.merge(attributes.background_color);
        self.font_size.merge(attributes.font_size);
    }

    /// Returns `true` only if all covered text has `key` set.
    ///
    /// A mixed key reports inactive.
    pub fn is_active(&self, key: FlagKey) -> bool {
        match key {
            FlagKey::Bold => self.bold == KeyState::Uniform(true),
            FlagKey::Italic => self.italic == KeyState::Uniform(true),
            FlagKey::Underline => matches!(self.underline, KeyState::Uniform(line) if line.is_drawn()),
            FlagKey::Strikethrough => {
                matches!(self.strikethrough, KeyState::Uniform(line) if line.is_drawn())
            }
        }
    }

    /// Returns `true` if the covered text disagrees on `key`.
    pub fn is_mixed(&self, key: FlagKey) -> bool {
        match key {
            FlagKey::Bold => self.bold.is_mixed(),
            FlagKey::Italic => self.italic.is_mixed(),
            FlagKey::Underline => self.underline.is_mixed(),
            FlagKey::Strikethrough => self.strikethrough.is_mixed(),
        }
    }

    /// Collapses to a full [`AttributeSet`] when no key is mixed.
    pub fn uniform(&self) -> Option<AttributeSet> {
        Some(AttributeSet {
            bold: *self.bold.uniform()?,
            italic: *self.italic.uniform()?,
            underline: *self.underline.uniform()?,
            strikethrough: *self.strikethrough.uniform()?,
            foreground_color: *self.foreground_color.uniform()?,
            background_color: *self.background_color.uniform()?,
            font_size: *self.font_size.uniform()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyState, TypingAttributes};
    use crate::{AttributeSet, FlagKey, LineStyle};
    use peniko::color::palette::css;

    #[test]
    fn intersect_marks_disagreeing_keys_mixed() {
        let plain = AttributeSet::new();
        let bold_blue = plain.with_bold(true).with_foreground_color(Some(css::BLUE));
        let typing = TypingAttributes::intersect([plain, bold_blue].iter()).unwrap();
        assert_eq!(typing.bold, KeyState::Mixed);
        assert_eq!(typing.foreground_color, KeyState::Mixed);
        assert_eq!(typing.italic, KeyState::Uniform(false));
        assert_eq!(typing.font_size, KeyState::Uniform(plain.font_size));
        assert!(!typing.is_active(FlagKey::Bold));
        assert!(typing.is_mixed(FlagKey::Bold));
        assert_eq!(typing.uniform(), None);
    }

    #[test]
    fn uniform_sets_collapse_back() {
        let attrs = AttributeSet::new()
            .with_underline(LineStyle::Single)
            .with_italic(true);
        let typing = TypingAttributes::intersect([attrs, attrs, attrs].iter()).unwrap();
        assert!(typing.is_active(FlagKey::Underline));
        assert!(typing.is_active(FlagKey::Italic));
        assert!(!typing.is_active(FlagKey::Strikethrough));
        assert_eq!(typing.uniform(), Some(attrs));
    }

    #[test]
    fn intersect_of_nothing_is_none() {
        assert_eq!(TypingAttributes::intersect(core::iter::empty()), None);
    }
}
