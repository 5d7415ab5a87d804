//! Error types for building and rendering books.

use curriculum_core::{CatalogError, ResolveError};
use thiserror::Error;

/// Errors that can occur while assembling or writing book content.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The catalog data failed validation.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The resolver rejected a request.
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// The build configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A requested book is not in the catalog.
    #[error("Unknown book: {0}")]
    UnknownBook(String),

    /// A book task panicked or was cancelled.
    #[error("Build task failed: {0}")]
    TaskFailed(String),

    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
