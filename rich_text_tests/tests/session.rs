// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editing-session flows as a toolbar would drive them.

use peniko::color::palette::css;
use rich_text::sample::WELCOME_TEXT;
use rich_text::{
    AttributeSet, EditorConfig, LineStyle, MixedTogglePolicy, RichTextEditor, Selection,
};

use crate::util::{assert_invariants, layout};

#[test]
fn session_welcome_then_format_first_line() {
    let mut editor = RichTextEditor::welcome(EditorConfig::default());
    assert_eq!(editor.character_count(), WELCOME_TEXT.chars().count());

    // "Welcome to Rich Text Editor!" is the first line.
    editor.set_selection(Selection::new(0, 28)).unwrap();
    editor.toggle_bold().unwrap();
    editor.toggle_underline().unwrap();
    editor.increase_font_size().unwrap();
    editor.increase_font_size().unwrap();

    let state = editor.toolbar_state().unwrap();
    assert!(state.bold && state.underline);
    assert!(!state.italic && !state.strikethrough);
    assert_eq!(state.font_size, 20.0);

    let heading = AttributeSet::default()
        .with_bold(true)
        .with_underline(LineStyle::Single)
        .with_font_size(20.0);
    let runs = layout(editor.document());
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0], ("Welcome to Rich Text Editor!".to_owned(), heading));
    assert_eq!(editor.text(), WELCOME_TEXT);
    assert_invariants(editor.document());
}

#[test]
fn session_highlight_then_clear_highlight() {
    let mut editor = RichTextEditor::with_text("Hello World", EditorConfig::default());
    editor.set_selection(Selection::new(6, 11)).unwrap();
    editor.apply_background_color(Some(css::YELLOW)).unwrap();
    assert_eq!(
        editor.toolbar_state().unwrap().background_color,
        Some(css::YELLOW)
    );

    editor.apply_background_color(None).unwrap();
    assert_eq!(editor.toolbar_state().unwrap().background_color, None);
    assert_eq!(editor.document().run_count(), 1);
}

#[test]
fn session_strikethrough_toggle_twice_restores() {
    let mut editor = RichTextEditor::with_text("Hello World", EditorConfig::default());
    editor.set_selection(Selection::new(2, 9)).unwrap();
    assert!(editor.toggle_strikethrough().unwrap());
    assert!(!editor.toggle_strikethrough().unwrap());
    assert_eq!(editor.document().run_count(), 1);
    assert!(!editor.toolbar_state().unwrap().strikethrough);
}

#[test]
fn session_mixed_policy_from_config() {
    let config = EditorConfig::default().with_mixed_toggle(MixedTogglePolicy::DeactivateAll);
    let mut editor = RichTextEditor::with_text("Hello World", config);
    editor.set_selection(Selection::new(0, 5)).unwrap();
    editor.toggle_italic().unwrap();

    editor.select_all();
    assert!(!editor.toggle_italic().unwrap());
    assert_eq!(
        layout(editor.document()),
        vec![("Hello World".to_owned(), AttributeSet::default())]
    );
}

#[test]
fn session_custom_font_range() {
    let config = EditorConfig::default()
        .with_font_size_range(10.0..=20.0)
        .with_font_size_step(4.0);
    let mut editor = RichTextEditor::with_text("abc", config);
    editor.select_all();
    editor.increase_font_size().unwrap();
    assert_eq!(editor.font_size(), 20.0);
    editor.increase_font_size().unwrap();
    assert_eq!(editor.font_size(), 20.0);
    editor.set_font_size(1.0).unwrap();
    assert_eq!(editor.font_size(), 10.0);
    assert_eq!(editor.document().runs()[0].attributes().font_size, 10.0);
}

#[test]
fn session_sample_text_after_welcome() {
    let mut editor = RichTextEditor::welcome(EditorConfig::default());
    let before = editor.character_count();
    editor.set_selection(Selection::new(0, 7)).unwrap();
    editor.insert_sample_text().unwrap();

    assert!(editor.text().starts_with(WELCOME_TEXT));
    assert!(editor.text().ends_with("highlighted text!\n"));
    assert!(editor.character_count() > before);
    // The selection is untouched by appending.
    assert_eq!(editor.selection(), Selection::new(0, 7));
    assert_invariants(editor.document());
}

#[test]
fn session_caret_clear_formatting_types_plain() {
    let mut editor = RichTextEditor::with_text("", EditorConfig::default());
    editor.toggle_bold().unwrap();
    editor.insert_text("bold").unwrap();
    editor.clear_formatting().unwrap();
    editor.insert_text(" plain").unwrap();

    assert_eq!(
        layout(editor.document()),
        vec![
            ("bold".to_owned(), AttributeSet::default().with_bold(true)),
            (" plain".to_owned(), AttributeSet::default()),
        ]
    );
}

#[test]
fn session_non_finite_font_size_is_ignored() {
    let mut editor = RichTextEditor::with_text("Hello World", EditorConfig::default());
    editor.select_all();
    editor.set_font_size(f32::NAN).unwrap();
    editor.set_font_size(f32::INFINITY).unwrap();
    assert_eq!(editor.font_size(), 16.0);
    assert_eq!(
        layout(editor.document()),
        vec![("Hello World".to_owned(), AttributeSet::default())]
    );

    editor.set_selection(Selection::new(2, 4)).unwrap();
    editor.toggle_bold().unwrap();
    editor.toggle_bold().unwrap();
    assert_eq!(editor.document().run_count(), 1);

    let mut restyled = editor.document().clone();
    restyled.set_attributes(0..11, |attributes| *attributes).unwrap();
    assert_eq!(&restyled, editor.document());
    assert_invariants(editor.document());
}

#[test]
fn session_bad_font_size_step_keeps_default() {
    let config = EditorConfig::default().with_font_size_step(f32::NAN);
    let mut editor = RichTextEditor::with_text("abc", config);
    assert_eq!(editor.config().font_size_step(), 2.0);
    editor.select_all();
    editor.increase_font_size().unwrap();
    assert_eq!(editor.font_size(), 18.0);
    editor.decrease_font_size().unwrap();
    assert_eq!(editor.font_size(), 16.0);
    assert_eq!(
        layout(editor.document()),
        vec![("abc".to_owned(), AttributeSet::default())]
    );
}
