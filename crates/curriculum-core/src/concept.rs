//! # Concept Records
//!
//! A [`ConceptDraft`] is the curated title/content/formula triple registered for
//! a unit order. A [`Concept`] is what the resolver hands back to callers: the
//! same triple plus a synthesized id and the slot number it was requested for.

use serde::{Deserialize, Serialize};

/// Prefix of every synthesized concept id.
pub const CONCEPT_ID_PREFIX: &str = "concept";

/// Builds the stable id for a `(unit_order, slot)` pair, e.g. `concept-2-1`.
pub fn concept_id(unit_order: u32, slot: u32) -> String {
    format!("{CONCEPT_ID_PREFIX}-{unit_order}-{slot}")
}

/// Curated content for one concept slot, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptDraft {
    pub title: String,
    pub content: String,
    /// LaTeX source, or empty when the concept has no formula.
    #[serde(default)]
    pub formula: String,
}

impl ConceptDraft {
    /// Creates a draft with a formula.
    ///
    /// # Arguments
    /// * `title` - Card title
    /// * `content` - Explanatory text
    /// * `formula` - Formula source, may be empty
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        formula: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            formula: formula.into(),
        }
    }

    /// Creates a draft without a formula.
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(title, content, String::new())
    }

    /// Generic stand-in used when no curated table exists for `unit_order`.
    pub fn placeholder(unit_order: u32, slot: u32) -> Self {
        Self::text(
            format!("מושג {slot}"),
            format!("תוכן מושג {slot} ביחידה {unit_order}"),
        )
    }
}

/// A resolved concept card.
///
/// `order` is the requested slot number, not the unit's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub id: String,
    pub title: String,
    pub content: String,
    pub formula: String,
    pub order: u32,
}

impl Concept {
    /// Materializes `draft` into the concept for `(unit_order, slot)`.
    pub fn from_draft(unit_order: u32, slot: u32, draft: &ConceptDraft) -> Self {
        Self {
            id: concept_id(unit_order, slot),
            title: draft.title.clone(),
            content: draft.content.clone(),
            formula: draft.formula.clone(),
            order: slot,
        }
    }

    /// Returns `true` if the concept carries a formula.
    pub fn has_formula(&self) -> bool {
        !self.formula.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concept_id_format() {
        assert_eq!(concept_id(2, 1), "concept-2-1");
        assert_eq!(concept_id(17, 40), "concept-17-40");
    }

    #[test]
    fn test_placeholder_mentions_unit_and_slot() {
        let draft = ConceptDraft::placeholder(7, 2);
        assert_eq!(draft.title, "מושג 2");
        assert_eq!(draft.content, "תוכן מושג 2 ביחידה 7");
        assert!(draft.formula.is_empty());
    }

    #[test]
    fn test_from_draft_uses_slot_as_order() {
        let draft = ConceptDraft::new("אחוז", "אחוז הוא שבר ממאה.", "a\\% = \\frac{a}{100}");
        let concept = Concept::from_draft(5, 3, &draft);

        assert_eq!(concept.id, "concept-5-3");
        assert_eq!(concept.order, 3);
        assert_eq!(concept.title, draft.title);
        assert!(concept.has_formula());
    }

    #[test]
    fn test_draft_formula_defaults_when_missing() {
        let draft: ConceptDraft =
            serde_json::from_str(r#"{"title":"חילוק ארוך","content":"..."}"#).unwrap();
        assert_eq!(draft.formula, "");
    }
}
