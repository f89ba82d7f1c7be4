// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use rich_text::{AttributeSet, RichDocument};

/// The runs of `doc` as `(text, attributes)` pairs, for whole-layout assertions.
pub(crate) fn layout(doc: &RichDocument) -> Vec<(String, AttributeSet)> {
    doc.runs()
        .iter()
        .map(|run| (run.text().to_owned(), *run.attributes()))
        .collect()
}

/// Asserts the reconstruction and maximal-merge invariants.
pub(crate) fn assert_invariants(doc: &RichDocument) {
    let rebuilt: String = doc.runs().iter().map(|run| run.text()).collect();
    assert_eq!(rebuilt, doc.to_string(), "runs must reconstruct the text");
    assert_eq!(rebuilt.chars().count(), doc.len(), "length out of sync");
    assert!(
        doc.runs().iter().all(|run| !run.is_empty()),
        "empty run in {doc:?}"
    );
    for pair in doc.runs().windows(2) {
        assert_ne!(
            pair[0].attributes(),
            pair[1].attributes(),
            "adjacent runs share attributes in {doc:?}"
        );
    }
}

/// Small reproducible pseudo-random source for edit sequences.
pub(crate) struct Lcg(u32);

impl Lcg {
    pub(crate) fn new(seed: u32) -> Self {
        Self(seed)
    }

    /// Returns a value in `0..bound` (or `0` when `bound` is `0`).
    pub(crate) fn below(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (self.0 >> 8) as usize % bound.max(1)
    }
}
