// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::RangeInclusive;

use crate::AttributeSet;

/// What [`toggle`](crate::SelectionAttributeEngine::toggle) does when the
/// selection disagrees on the toggled key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MixedTogglePolicy {
    /// Turn the key on across the whole selection.
    #[default]
    ActivateAll,
    /// Turn the key off across the whole selection.
    DeactivateAll,
}

/// Settings for an editing session.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    default_attributes: AttributeSet,
    font_size_range: RangeInclusive<f32>,
    font_size_step: f32,
    mixed_toggle: MixedTogglePolicy,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_attributes: AttributeSet::default(),
            font_size_range: 8.0..=72.0,
            font_size_step: 2.0,
            mixed_toggle: MixedTogglePolicy::default(),
        }
    }
}

impl EditorConfig {
    /// Creates the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the attributes of unstyled text.
    #[must_use]
    pub fn with_default_attributes(mut self, attributes: AttributeSet) -> Self {
        self.default_attributes = attributes;
        self
    }

    /// Sets the range font sizes are clamped to.
    ///
    /// A reversed range is ignored.
    #[must_use]
    pub fn with_font_size_range(mut self, range: RangeInclusive<f32>) -> Self {
        if range.start() <= range.end() {
            self.font_size_range = range;
        }
        self
    }

    /// Sets the increment used by the font size stepper.
    ///
    /// A step that is not finite and positive is ignored.
    #[must_use]
    pub fn with_font_size_step(mut self, step: f32) -> Self {
        if step.is_finite() && step > 0.0 {
            self.font_size_step = step;
        }
        self
    }

    /// Sets the policy for toggling a mixed selection.
    #[must_use]
    pub fn with_mixed_toggle(mut self, policy: MixedTogglePolicy) -> Self {
        self.mixed_toggle = policy;
        self
    }

    /// The attributes of unstyled text.
    #[inline]
    pub fn default_attributes(&self) -> &AttributeSet {
        &self.default_attributes
    }

    /// The range font sizes are clamped to.
    #[inline]
    pub fn font_size_range(&self) -> &RangeInclusive<f32> {
        &self.font_size_range
    }

    /// The increment used by the font size stepper.
    #[inline]
    pub fn font_size_step(&self) -> f32 {
        self.font_size_step
    }

    /// The policy for toggling a mixed selection.
    #[inline]
    pub fn mixed_toggle(&self) -> MixedTogglePolicy {
        self.mixed_toggle
    }

    /// Clamps `size` into [`font_size_range`](Self::font_size_range).
    pub fn clamp_font_size(&self, size: f32) -> f32 {
        size.clamp(*self.font_size_range.start(), *self.font_size_range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::{EditorConfig, MixedTogglePolicy};

    #[test]
    fn defaults() {
        let config = EditorConfig::new();
        assert_eq!(config.font_size_range(), &(8.0..=72.0));
        assert_eq!(config.font_size_step(), 2.0);
        assert_eq!(config.mixed_toggle(), MixedTogglePolicy::ActivateAll);
        assert_eq!(config.default_attributes().font_size, 16.0);
    }

    #[test]
    fn clamps_font_size() {
        let config = EditorConfig::new();
        assert_eq!(config.clamp_font_size(4.0), 8.0);
        assert_eq!(config.clamp_font_size(20.0), 20.0);
        assert_eq!(config.clamp_font_size(100.0), 72.0);
    }

    #[test]
    fn reversed_range_is_ignored() {
        let config = EditorConfig::new().with_font_size_range(30.0..=10.0);
        assert_eq!(config.font_size_range(), &(8.0..=72.0));
        let config = config.with_font_size_range(10.0..=30.0);
        assert_eq!(config.clamp_font_size(40.0), 30.0);
    }

    #[test]
    fn bad_font_size_step_is_ignored() {
        for step in [f32::NAN, f32::INFINITY, 0.0, -2.0] {
            let config = EditorConfig::new().with_font_size_step(step);
            assert_eq!(config.font_size_step(), 2.0, "step {step} should be ignored");
        }
        let config = EditorConfig::new().with_font_size_step(4.0);
        assert_eq!(config.font_size_step(), 4.0);
    }
}
