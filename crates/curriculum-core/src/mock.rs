//! # Mock Content Source
//!
//! [`MockContentSource`] implements [`ContentSource`] from scripted answers and
//! records every lookup the resolver makes. Use it when a test needs to prove
//! *whether* the resolver consulted curated content, not only what came back.
//!
//! ## Example
//! ```
//! use curriculum_core::mock::MockContentSource;
//! use curriculum_core::{ConceptDraft, ConceptResolver};
//! use std::sync::Arc;
//!
//! let mut mock = MockContentSource::new();
//! mock.expect_lookup(4)
//!     .return_drafts(vec![ConceptDraft::text("חילוק ארוך", "...")]);
//! let mock = Arc::new(mock);
//!
//! let resolver = ConceptResolver::new(Arc::clone(&mock));
//! resolver.resolve(1, 1).unwrap(); // skipped, no lookup
//! resolver.resolve(4, 1).unwrap();
//!
//! mock.verify(); // exactly one lookup, for unit order 4
//! ```

use crate::concept::ConceptDraft;
use crate::source::ContentSource;
use std::collections::HashMap;
use std::sync::Mutex;

/// A content source with expectation tracking.
///
/// Every unit order the resolver asks about must have been scripted with
/// [`expect_lookup`](Self::expect_lookup); an unscripted lookup panics. When the
/// same order is scripted more than once, the latest answer wins and each
/// script adds one expected call.
#[derive(Debug, Default)]
pub struct MockContentSource {
    answers: HashMap<u32, Option<Vec<ConceptDraft>>>,
    expected: Vec<u32>,
    calls: Mutex<Vec<u32>>,
}

impl MockContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one lookup for `unit_order`.
    pub fn expect_lookup(&mut self, unit_order: u32) -> LookupExpectationBuilder<'_> {
        LookupExpectationBuilder {
            mock: self,
            unit_order,
        }
    }

    /// Unit orders looked up so far, in call order.
    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().unwrap().clone()
    }

    /// Panics unless the recorded lookups match the expectations exactly.
    pub fn verify(&self) {
        let calls = self.calls();
        assert_eq!(
            calls, self.expected,
            "Lookup mismatch: expected {:?}, got {:?}",
            self.expected, calls
        );
    }
}

/// Builder returned by [`MockContentSource::expect_lookup`].
pub struct LookupExpectationBuilder<'a> {
    mock: &'a mut MockContentSource,
    unit_order: u32,
}

impl LookupExpectationBuilder<'_> {
    /// Answers the lookup with a registered table.
    pub fn return_drafts(self, drafts: Vec<ConceptDraft>) {
        self.finish(Some(drafts));
    }

    /// Answers the lookup with "no table registered".
    pub fn return_absent(self) {
        self.finish(None);
    }

    fn finish(self, answer: Option<Vec<ConceptDraft>>) {
        self.mock.answers.insert(self.unit_order, answer);
        self.mock.expected.push(self.unit_order);
    }
}

impl ContentSource for MockContentSource {
    fn curated_drafts_for(&self, unit_order: u32) -> Option<&[ConceptDraft]> {
        self.calls.lock().unwrap().push(unit_order);
        match self.answers.get(&unit_order) {
            Some(answer) => answer.as_deref(),
            None => panic!("Unexpected lookup for unit order {unit_order}"),
        }
    }
}
