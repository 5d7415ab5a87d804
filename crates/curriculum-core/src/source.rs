//! # ContentSource Trait
//!
//! The seam between the resolver and wherever curated drafts live. The
//! resolver only ever asks one question, "which drafts are registered for this
//! unit order?", so that is the whole trait.
//!
//! [`Catalog`] and [`CuratedContentTable`] implement it for production use;
//! [`MockContentSource`](crate::mock::MockContentSource) implements it for tests
//! that need to observe or script the lookups.

use crate::catalog::{Catalog, CuratedContentTable};
use crate::concept::ConceptDraft;

/// Read-only provider of curated concept drafts keyed by unit order.
///
/// Implementations must be pure: the same `unit_order` always yields the same
/// answer for the lifetime of the value. `None` means no table is registered.
pub trait ContentSource: Send + Sync + 'static {
    fn curated_drafts_for(&self, unit_order: u32) -> Option<&[ConceptDraft]>;
}

impl ContentSource for Catalog {
    fn curated_drafts_for(&self, unit_order: u32) -> Option<&[ConceptDraft]> {
        Catalog::curated_drafts_for(self, unit_order)
    }
}

impl ContentSource for CuratedContentTable {
    fn curated_drafts_for(&self, unit_order: u32) -> Option<&[ConceptDraft]> {
        self.get(unit_order)
    }
}
