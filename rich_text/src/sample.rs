// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canned content for a fresh editing session.

use alloc::vec;
use alloc::vec::Vec;

use peniko::color::palette::css;
use styled_runs::Run;

use crate::AttributeSet;

/// Text a new session starts with.
pub const WELCOME_TEXT: &str = "Welcome to Rich Text Editor!\n\n\
Select any text and use the toolbar above to format it. Try making text bold, italic, \
changing colors, or adding underlines.\n\n\
You can also combine multiple formatting options for creative effects!";

/// A multi-style fragment showing bold, italic, colored and highlighted text.
///
/// Unstyled pieces use `base`; each styled piece changes one key of it.
pub fn sample_fragment(base: &AttributeSet) -> Vec<Run<AttributeSet>> {
    let base = *base;
    vec![
        Run::new("\n\nThis is sample text with ", base),
        Run::new("bold", base.with_bold(true)),
        Run::new(", ", base),
        Run::new("italic", base.with_italic(true)),
        Run::new(", ", base),
        Run::new("colored", base.with_foreground_color(Some(css::BLUE))),
        Run::new(", and ", base),
        Run::new("highlighted", base.with_background_color(Some(css::YELLOW))),
        Run::new(" text!\n", base),
    ]
}
