// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `rich_text`.
//!
//! - The `util` module contains shared helpers (layout snapshots, invariant checks).
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so the helpers can be shared.
//! - `scenarios.rs` holds the documented end-to-end formatting scenarios, `invariants.rs` the
//!   structural properties checked across edit sequences, and `session.rs` the editor session.
//! - For test naming, put the topic first: `toggle_mixed_selection` over
//!   `mixed_selection_toggle`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod session;
mod util;
