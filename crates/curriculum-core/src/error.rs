//! # Core Errors
//!
//! Error types for the catalog and the resolver. Resolution is total for every
//! well-formed request, so [`ResolveError`] has a single variant; the catalog
//! only fails while it is being assembled.

use thiserror::Error;

/// Errors returned by [`ConceptResolver::resolve`](crate::ConceptResolver::resolve).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// A unit order or slot number of zero was requested.
    #[error("Invalid argument: {argument} must be positive, got {value}")]
    InvalidArgument { argument: &'static str, value: u32 },
}

/// Errors raised while assembling a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two books were registered under the same id.
    #[error("Duplicate book: {0}")]
    DuplicateBook(String),

    /// A unit's explicit order does not match its position in the book.
    #[error("Unit order mismatch in book {book_id}: unit at position {position} declares order {declared}")]
    UnitOrderMismatch {
        book_id: String,
        position: u32,
        declared: u32,
    },

    /// A curated table was registered for unit order zero.
    #[error("Invalid curated table: unit order must be positive")]
    ZeroUnitOrder,

    /// A curated table was registered with no drafts.
    #[error("Empty curated table for unit order {0}")]
    EmptyCuratedTable(u32),

    /// A curated table was registered twice for the same unit order.
    #[error("Duplicate curated table for unit order {0}")]
    DuplicateCuratedTable(u32),
}
