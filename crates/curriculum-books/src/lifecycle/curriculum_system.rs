use crate::error::BuildError;
use crate::lifecycle::BuildConfig;
use crate::model::{BookContent, UnitContent};
use curriculum_core::{Catalog, ConceptResolver, Resolution};
use std::sync::Arc;
use tracing::{debug, info, info_span, Instrument};

/// Drives the resolver over a catalog and assembles book content.
///
/// `CurriculumSystem` is responsible for:
/// - **Book Selection**: Turning a [`BuildConfig`] into an ordered list of books
/// - **Fan-out**: Building each book in its own Tokio task with a cloned resolver
/// - **Assembly**: Requesting slots `1..=K` per unit and dropping skipped units' slots
///
/// # Example
///
/// ```ignore
/// let system = CurriculumSystem::bundled()?;
/// let books = system.build(&BuildConfig::default()).await?;
/// ```
#[derive(Clone)]
pub struct CurriculumSystem {
    resolver: ConceptResolver,
}

impl CurriculumSystem {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            resolver: ConceptResolver::new(Arc::new(catalog)),
        }
    }

    /// A system over the books bundled with this crate.
    pub fn bundled() -> Result<Self, BuildError> {
        Ok(Self::new(crate::books::catalog()?))
    }

    pub fn catalog(&self) -> &Catalog {
        self.resolver.source()
    }

    pub fn resolver(&self) -> &ConceptResolver {
        &self.resolver
    }

    /// Builds every selected book concurrently.
    ///
    /// Books come back in selection order regardless of which task finishes
    /// first.
    ///
    /// # Errors
    /// - [`BuildError::Config`] for an invalid configuration
    /// - [`BuildError::UnknownBook`] if a selected book is not in the catalog
    /// - [`BuildError::TaskFailed`] if a book task panicked
    pub async fn build(&self, config: &BuildConfig) -> Result<Vec<BookContent>, BuildError> {
        config.validate()?;
        let book_ids = self.select_books(config)?;
        info!(
            books = book_ids.len(),
            concepts_per_unit = config.concepts_per_unit,
            "Starting build"
        );

        let mut handles = Vec::with_capacity(book_ids.len());
        for book_id in book_ids {
            let resolver = self.resolver.clone();
            let slots = config.concepts_per_unit;
            let span = info_span!("book", %book_id);
            handles.push(tokio::spawn(
                async move { build_book(&resolver, &book_id, slots) }.instrument(span),
            ));
        }

        let mut books = Vec::with_capacity(handles.len());
        for handle in handles {
            let book = handle
                .await
                .map_err(|e| BuildError::TaskFailed(e.to_string()))??;
            books.push(book);
        }

        info!(books = books.len(), "Build complete");
        Ok(books)
    }

    fn select_books(&self, config: &BuildConfig) -> Result<Vec<String>, BuildError> {
        match &config.books {
            None => Ok(self.catalog().books().iter().map(|b| b.id.clone()).collect()),
            Some(ids) => ids
                .iter()
                .map(|id| match self.catalog().book(id) {
                    Some(book) => Ok(book.id.clone()),
                    None => Err(BuildError::UnknownBook(id.clone())),
                })
                .collect(),
        }
    }
}

/// Builds one book synchronously.
///
/// Each unit requests slots `1..=slots`. A skipped unit keeps its name,
/// description and subsections but gets no concepts.
pub fn build_book(
    resolver: &ConceptResolver,
    book_id: &str,
    slots: u32,
) -> Result<BookContent, BuildError> {
    let book = resolver
        .source()
        .book(book_id)
        .ok_or_else(|| BuildError::UnknownBook(book_id.to_string()))?;

    let mut units = Vec::with_capacity(book.units.len());
    for unit in &book.units {
        let mut concepts = Vec::new();
        for slot in 1..=slots {
            match resolver.resolve(unit.order, slot)? {
                Resolution::Concept(concept) => concepts.push(concept),
                Resolution::Skipped => {
                    debug!(unit = unit.order, "Unit maintained externally");
                    break;
                }
            }
        }
        units.push(UnitContent::new(&book.id, unit, concepts));
    }

    let content = BookContent::new(book, units);
    info!(
        units = content.units.len(),
        concepts = content.concept_count(),
        "Book built"
    );
    Ok(content)
}
