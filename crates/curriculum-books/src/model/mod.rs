//! Output tree handed to the renderer.
//!
//! Field names follow the site's curriculum JSON files (`bookId`,
//! `subSections`, `quizQuestions`, ...), so rendered books drop straight into
//! its data directory.

use curriculum_core::{Book, Concept, Unit};
use serde::Serialize;

/// A fully assembled book.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookContent {
    pub id: String,
    pub grade_id: String,
    pub name: String,
    pub description: String,
    pub units: Vec<UnitContent>,
}

impl BookContent {
    pub fn new(book: &Book, units: Vec<UnitContent>) -> Self {
        Self {
            id: book.id.clone(),
            grade_id: book.grade_id.clone(),
            name: book.name.clone(),
            description: book.description.clone(),
            units,
        }
    }

    pub fn concept_count(&self) -> usize {
        self.units.iter().map(|unit| unit.concepts.len()).sum()
    }
}

/// A unit with its resolved concepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitContent {
    pub id: String,
    pub book_id: String,
    pub order: u32,
    pub name: String,
    pub description: String,
    pub sub_sections: Vec<String>,
    pub concepts: Vec<Concept>,
    /// Always empty; examples are authored on the site.
    pub examples: Vec<serde_json::Value>,
    /// Always empty; quizzes are authored on the site.
    pub quiz_questions: Vec<serde_json::Value>,
}

impl UnitContent {
    pub fn new(book_id: &str, unit: &Unit, concepts: Vec<Concept>) -> Self {
        Self {
            id: unit.id(),
            book_id: book_id.to_string(),
            order: unit.order,
            name: unit.name.clone(),
            description: unit.description.clone(),
            sub_sections: unit.subsections.clone(),
            concepts,
            examples: Vec::new(),
            quiz_questions: Vec::new(),
        }
    }
}
