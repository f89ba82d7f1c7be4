// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled Runs is a Rust crate for run-length styled text.
//!
//! A [`StyledDocument`] stores its text as an ordered list of [`Run`]s, each
//! carrying one attribute value. The list is kept *maximal*: runs are never
//! empty and no two neighbours share equal attributes. Restyling a range
//! splits the runs at its boundaries, rewrites the attributes inside and
//! merges the touched window back together.
//!
//! All offsets are `char` counts, not byte indices.
//!
//! ## Example
//!
//! ```
//! use styled_runs::StyledDocument;
//!
//! let mut doc = StyledDocument::new("Hello world", false);
//! doc.set_attributes(0..5, |_| true).unwrap();
//! assert_eq!(doc.run_count(), 2);
//!
//! doc.set_attributes(5..11, |_| true).unwrap();
//! assert_eq!(doc.run_count(), 1);
//! assert_eq!(doc.runs()[0].text(), "Hello world");
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` support in the logging and error dependencies.
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

mod document;
mod error;
mod run;


pub use crate::document::{AttributeSlices, StyledDocument};
pub use crate::error::{Error, ErrorKind};
pub use crate::run::Run;
