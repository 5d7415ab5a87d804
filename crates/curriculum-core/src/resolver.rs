//! # Concept Resolver
//!
//! Turns a `(unit_order, slot)` request into a [`Concept`].
//!
//! ## Resolution Rules
//!
//! 1. A zero unit order or slot is rejected with [`ResolveError::InvalidArgument`].
//! 2. Unit order 1 is authored elsewhere and always resolves to [`Resolution::Skipped`].
//! 3. If the content source has drafts for the unit and the slot is within
//!    range, slot `n` takes `drafts[n - 1]`.
//! 4. If the slot is past the end of the unit's drafts, the first draft is
//!    reused.
//! 5. If the unit has no drafts, a placeholder is synthesized from the unit
//!    order and slot.
//!
//! The concept id is always `concept-<unit_order>-<slot>` and the concept's
//! `order` is the slot. Nothing is cached or counted, so repeated calls return
//! identical values and the resolver can be cloned freely across tasks.

use crate::catalog::Catalog;
use crate::concept::{Concept, ConceptDraft};
use crate::error::ResolveError;
use crate::source::ContentSource;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, warn};

/// Unit order whose concepts are maintained outside the resolver.
pub const SKIPPED_UNIT_ORDER: u32 = 1;

/// Outcome of a resolve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Concept(Concept),
    /// Nothing should be generated for this unit.
    Skipped,
}

impl Resolution {
    pub fn into_concept(self) -> Option<Concept> {
        match self {
            Resolution::Concept(concept) => Some(concept),
            Resolution::Skipped => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Resolution::Skipped)
    }
}

/// Which rule produced a concept's title, content and formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftSource {
    /// The draft registered for exactly this slot.
    Curated,
    /// The slot was past the end of the unit's drafts; the first draft was reused.
    ReusedFirst,
    /// No drafts were registered for the unit.
    Placeholder,
}

/// A concept together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub concept: Concept,
    pub source: DraftSource,
}

/// Resolves concept slots against a shared [`ContentSource`].
pub struct ConceptResolver<S: ContentSource = Catalog> {
    source: Arc<S>,
}

impl<S: ContentSource> Clone for ConceptResolver<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: ContentSource> ConceptResolver<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolves the concept for `slot` of the unit with order `unit_order`.
    ///
    /// # Errors
    /// [`ResolveError::InvalidArgument`] when either argument is zero. Every
    /// other request succeeds.
    pub fn resolve(&self, unit_order: u32, slot: u32) -> Result<Resolution, ResolveError> {
        Ok(match self.resolve_with_source(unit_order, slot)? {
            Some(resolved) => Resolution::Concept(resolved.concept),
            None => Resolution::Skipped,
        })
    }

    /// Like [`resolve`](Self::resolve) but also reports which rule supplied the
    /// draft. Returns `Ok(None)` for the skipped unit.
    pub fn resolve_with_source(
        &self,
        unit_order: u32,
        slot: u32,
    ) -> Result<Option<Resolved>, ResolveError> {
        check_positive("unit_order", unit_order)?;
        check_positive("slot", slot)?;

        if unit_order == SKIPPED_UNIT_ORDER {
            debug!(unit_order, slot, "Skipped");
            return Ok(None);
        }

        let (draft, source) = self.select_draft(unit_order, slot);
        let concept = Concept::from_draft(unit_order, slot, &draft);
        debug!(unit_order, slot, ?source, id = %concept.id, "Resolved");

        Ok(Some(Resolved { concept, source }))
    }

    fn select_draft(&self, unit_order: u32, slot: u32) -> (Cow<'_, ConceptDraft>, DraftSource) {
        let index = (slot - 1) as usize;
        let curated = self
            .source
            .curated_drafts_for(unit_order)
            .and_then(|drafts| {
                drafts
                    .get(index)
                    .map(|draft| (draft, DraftSource::Curated))
                    .or_else(|| drafts.first().map(|draft| (draft, DraftSource::ReusedFirst)))
            });

        match curated {
            Some((draft, source)) => (Cow::Borrowed(draft), source),
            None => (
                Cow::Owned(ConceptDraft::placeholder(unit_order, slot)),
                DraftSource::Placeholder,
            ),
        }
    }
}

fn check_positive(argument: &'static str, value: u32) -> Result<(), ResolveError> {
    if value == 0 {
        warn!(argument, value, "Rejected resolve request");
        return Err(ResolveError::InvalidArgument { argument, value });
    }
    Ok(())
}
