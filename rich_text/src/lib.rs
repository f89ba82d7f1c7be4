// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection-scoped character formatting built on [`styled_runs`].
//!
//! - [`AttributeSet`] is the closed, fully-populated set of character attributes carried by
//!   every run: bold, italic, underline, strikethrough, text and highlight colors, font size.
//! - [`SelectionAttributeEngine`] reads the attributes of a [`Selection`] (to drive toolbar
//!   state) and applies toggles, values and resets to it.
//! - [`RichTextEditor`] is an editing session tying a document, a selection and an
//!   [`EditorConfig`] to the usual toolbar actions.
//!
//! ## Scope
//!
//! Rendering, hit-testing, input methods and the toolbar widgets themselves are left to the
//! caller. After any successful mutation the caller re-queries
//! [`typing_attributes`](SelectionAttributeEngine::typing_attributes) and the document to
//! refresh its view.
//!
//! ## Indices
//!
//! All offsets are **`char` counts** into the current text. Operations never adjust a stored
//! selection after an edit; out-of-bounds selections fail with [`ErrorKind::InvalidRange`] and
//! leave the document untouched.
//!
//! ## Example
//!
//! ```
//! use rich_text::{
//!     AttributeSet, FlagKey, KeyState, RichDocument, Selection, SelectionAttributeEngine,
//! };
//!
//! let engine = SelectionAttributeEngine::new();
//! let mut doc = RichDocument::new("Hello World", AttributeSet::default());
//!
//! // Bold "Hello".
//! engine.toggle(&mut doc, Selection::new(0, 5), FlagKey::Bold).unwrap();
//! assert_eq!(doc.run_count(), 2);
//!
//! // The whole text is now mixed; toggling makes it uniformly bold.
//! let all = Selection::new(0, 11);
//! let typing = engine.typing_attributes(&doc, all).unwrap();
//! assert_eq!(typing.bold, KeyState::Mixed);
//! engine.toggle(&mut doc, all, FlagKey::Bold).unwrap();
//! assert_eq!(doc.run_count(), 1);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` support in the dependencies.
//! - `libm`: Uses `libm` for color math in `no_std` builds.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub mod sample;

mod attributes;
mod config;
mod editor;
mod engine;
mod property;
mod selection;
mod typing;


pub use peniko::Color;
pub use styled_runs::{self, AttributeSlices, Error, ErrorKind, Run, StyledDocument};

pub use attributes::{AttributeSet, DEFAULT_FONT_SIZE, LineStyle};
pub use config::{EditorConfig, MixedTogglePolicy};
pub use editor::{RichTextEditor, ToolbarState};
pub use engine::{RichDocument, SelectionAttributeEngine};
pub use property::{FlagKey, StyleKey, StyleProperty};
pub use selection::Selection;
pub use typing::{KeyState, TypingAttributes};
