//! # Curriculum Core
//!
//! The catalog and concept resolver behind the curriculum builder. Given a
//! unit's order within its book and a concept slot number, the resolver
//! deterministically produces the concept card that belongs there: curated
//! content when the catalog has it, a structurally valid placeholder otherwise.
//!
//! ## 🏗️ Architecture Overview
//!
//! 1. **Data Layer** ([`Catalog`]) - Books, units, subsections and the
//!    [`CuratedContentTable`]. Built once, read-only afterwards.
//! 2. **Seam** ([`ContentSource`]) - The single lookup the resolver depends on.
//! 3. **Logic Layer** ([`ConceptResolver`]) - Validation, the unit-1 skip,
//!    curated lookup, reuse-first fallback and placeholder synthesis.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use curriculum_core::{Book, Catalog, ConceptDraft, ConceptResolver, Resolution, Unit};
//! use std::sync::Arc;
//!
//! let catalog = Catalog::builder()
//!     .book(Book::new("shevilim-plus-16", "6", "שבילים פלוס 16", "", vec![
//!         Unit::new(1, "כפל וחילוק שברים", "", Vec::<String>::new()),
//!         Unit::new(2, "המבנה העשרוני", "", Vec::<String>::new()),
//!     ]))
//!     .curated(2, vec![ConceptDraft::text("ערך מקומי במספרים עשרוניים", "...")])
//!     .build()
//!     .unwrap();
//!
//! let resolver = ConceptResolver::new(Arc::new(catalog));
//!
//! // Unit 1 is maintained elsewhere.
//! assert_eq!(resolver.resolve(1, 1).unwrap(), Resolution::Skipped);
//!
//! // Past the end of the curated drafts, the first draft is reused.
//! let concept = resolver.resolve(2, 5).unwrap().into_concept().unwrap();
//! assert_eq!(concept.id, "concept-2-5");
//! assert_eq!(concept.title, "ערך מקומי במספרים עשרוניים");
//! assert_eq!(concept.order, 5);
//! ```
//!
//! ## Concurrency Model
//!
//! - The catalog is immutable after [`CatalogBuilder::build`]
//! - [`ConceptResolver`] holds its source behind an `Arc` and clones cheaply
//! - Resolution is synchronous and depends only on its arguments, so any
//!   number of tasks may resolve concurrently without locks
//!
//! ## Testing
//!
//! [`mock::MockContentSource`] scripts curated lookups and records which unit
//! orders the resolver asked about. See the [`mock`] module.

pub mod catalog;
pub mod concept;
pub mod error;
pub mod mock;
pub mod resolver;
pub mod source;
pub mod tracing;

pub use catalog::{Book, Catalog, CatalogBuilder, CuratedContentTable, Unit};
pub use concept::{concept_id, Concept, ConceptDraft};
pub use error::{CatalogError, ResolveError};
pub use resolver::{ConceptResolver, DraftSource, Resolution, Resolved};
pub use source::ContentSource;
