//! # Curriculum Catalog
//!
//! The static, ordered declaration of books, their units and subsections, plus
//! the curated content table that maps a unit order to its concept drafts.
//!
//! Everything here is fixed once [`CatalogBuilder::build`] succeeds. There are
//! no mutating methods on [`Catalog`], so a single instance can be shared by any
//! number of readers.
//!
//! ## Unit Orders
//!
//! A unit's `order` is declared explicitly rather than derived from its index,
//! because the resolver keys curated content (and the unit-1 skip) off it. The
//! builder checks that every book declares its units as `1, 2, ..., n`.

use crate::concept::ConceptDraft;
use crate::error::CatalogError;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// A titled section of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub name: String,
    pub description: String,
    pub subsections: Vec<String>,
    /// 1-based position within the owning book.
    pub order: u32,
}

impl Unit {
    /// Creates a new Unit.
    ///
    /// # Arguments
    /// * `order` - 1-based position within the book
    /// * `name` - Display name
    /// * `description` - One-line summary
    /// * `subsections` - Ordered subsection labels (may be empty)
    pub fn new<I, S>(
        order: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        subsections: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            subsections: subsections.into_iter().map(Into::into).collect(),
            order,
        }
    }

    /// Identifier used by rendered output, e.g. `unit-3`.
    pub fn id(&self) -> String {
        format!("unit-{}", self.order)
    }
}

/// An educational volume: an ordered sequence of units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub grade_id: String,
    pub name: String,
    pub description: String,
    pub units: Vec<Unit>,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        grade_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        units: Vec<Unit>,
    ) -> Self {
        Self {
            id: id.into(),
            grade_id: grade_id.into(),
            name: name.into(),
            description: description.into(),
            units,
        }
    }

    fn check_unit_orders(&self) -> Result<(), CatalogError> {
        for (index, unit) in self.units.iter().enumerate() {
            let position = index as u32 + 1;
            if unit.order != position {
                return Err(CatalogError::UnitOrderMismatch {
                    book_id: self.id.clone(),
                    position,
                    declared: unit.order,
                });
            }
        }
        Ok(())
    }
}

/// Mapping from unit order to its ordered concept drafts.
///
/// Slot `n` of a unit is `drafts[n - 1]`. A unit order with no entry is a
/// normal state; every registered entry holds at least one draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CuratedContentTable {
    tables: BTreeMap<u32, Vec<ConceptDraft>>,
}

impl CuratedContentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the drafts for `unit_order`.
    ///
    /// # Errors
    /// Rejects order zero, an empty draft list, and a second registration for
    /// the same order.
    pub fn insert(&mut self, unit_order: u32, drafts: Vec<ConceptDraft>) -> Result<(), CatalogError> {
        if unit_order == 0 {
            return Err(CatalogError::ZeroUnitOrder);
        }
        if drafts.is_empty() {
            return Err(CatalogError::EmptyCuratedTable(unit_order));
        }
        if self.tables.contains_key(&unit_order) {
            return Err(CatalogError::DuplicateCuratedTable(unit_order));
        }
        self.tables.insert(unit_order, drafts);
        Ok(())
    }

    /// Drafts registered for `unit_order`, or `None` when absent.
    pub fn get(&self, unit_order: u32) -> Option<&[ConceptDraft]> {
        self.tables.get(&unit_order).map(Vec::as_slice)
    }

    /// Unit orders with a registered table, ascending.
    pub fn unit_orders(&self) -> impl Iterator<Item = u32> + '_ {
        self.tables.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Read-only collection of books plus the curated content table.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    curated: CuratedContentTable,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// All books in declaration order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book(&self, book_id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == book_id)
    }

    /// Units of `book_id` in order. Unknown books have no units.
    pub fn list_units(&self, book_id: &str) -> &[Unit] {
        self.book(book_id)
            .map(|book| book.units.as_slice())
            .unwrap_or_default()
    }

    pub fn unit(&self, book_id: &str, order: u32) -> Option<&Unit> {
        self.list_units(book_id).iter().find(|unit| unit.order == order)
    }

    /// Curated drafts for `unit_order`, or `None` if none were registered.
    pub fn curated_drafts_for(&self, unit_order: u32) -> Option<&[ConceptDraft]> {
        self.curated.get(unit_order)
    }

    pub fn curated(&self) -> &CuratedContentTable {
        &self.curated
    }
}

/// Assembles and validates a [`Catalog`].
///
/// # Example
/// ```
/// use curriculum_core::{Book, Catalog, ConceptDraft, Unit};
///
/// let catalog = Catalog::builder()
///     .book(Book::new("b", "6", "Book", "", vec![
///         Unit::new(1, "Intro", "", ["Warm-up"]),
///         Unit::new(2, "Ratios", "", Vec::<String>::new()),
///     ]))
///     .curated(2, vec![ConceptDraft::text("Ratio", "A comparison of two quantities.")])
///     .build()
///     .unwrap();
///
/// assert_eq!(catalog.list_units("b").len(), 2);
/// assert!(catalog.curated_drafts_for(3).is_none());
/// ```
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    books: Vec<Book>,
    curated: Vec<(u32, Vec<ConceptDraft>)>,
}

impl CatalogBuilder {
    pub fn book(mut self, book: Book) -> Self {
        self.books.push(book);
        self
    }

    pub fn curated(mut self, unit_order: u32, drafts: Vec<ConceptDraft>) -> Self {
        self.curated.push((unit_order, drafts));
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut seen = HashSet::new();
        for book in &self.books {
            if !seen.insert(book.id.as_str()) {
                return Err(CatalogError::DuplicateBook(book.id.clone()));
            }
            book.check_unit_orders()?;
        }

        let mut curated = CuratedContentTable::new();
        for (unit_order, drafts) in self.curated {
            curated.insert(unit_order, drafts)?;
        }

        debug!(
            books = self.books.len(),
            curated_units = curated.len(),
            "Catalog built"
        );
        Ok(Catalog {
            books: self.books,
            curated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(count: u32) -> Vec<Unit> {
        (1..=count)
            .map(|order| Unit::new(order, format!("unit {order}"), "", Vec::<String>::new()))
            .collect()
    }

    #[test]
    fn test_list_units_preserves_order() {
        let catalog = Catalog::builder()
            .book(Book::new("b16", "6", "Book 16", "", units(3)))
            .build()
            .unwrap();

        let orders: Vec<u32> = catalog.list_units("b16").iter().map(|u| u.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert!(catalog.list_units("missing").is_empty());
        assert_eq!(catalog.unit("b16", 2).unwrap().id(), "unit-2");
    }

    #[test]
    fn test_absent_is_distinct_from_present() {
        let catalog = Catalog::builder()
            .curated(2, vec![ConceptDraft::text("a", "b")])
            .build()
            .unwrap();

        assert_eq!(catalog.curated_drafts_for(2).map(<[_]>::len), Some(1));
        assert!(catalog.curated_drafts_for(3).is_none());
    }

    #[test]
    fn test_rejects_misnumbered_units() {
        let mut bad = units(3);
        bad[2].order = 4;

        let err = Catalog::builder()
            .book(Book::new("b", "6", "B", "", bad))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnitOrderMismatch {
                book_id: "b".into(),
                position: 3,
                declared: 4
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_books() {
        let err = Catalog::builder()
            .book(Book::new("b", "6", "B", "", units(1)))
            .book(Book::new("b", "6", "B again", "", units(1)))
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateBook("b".into()));
    }

    #[test]
    fn test_rejects_bad_curated_tables() {
        let mut table = CuratedContentTable::new();
        assert_eq!(table.insert(0, vec![ConceptDraft::text("a", "b")]), Err(CatalogError::ZeroUnitOrder));
        assert_eq!(table.insert(4, vec![]), Err(CatalogError::EmptyCuratedTable(4)));

        table.insert(4, vec![ConceptDraft::text("a", "b")]).unwrap();
        assert_eq!(
            table.insert(4, vec![ConceptDraft::text("c", "d")]),
            Err(CatalogError::DuplicateCuratedTable(4))
        );
        assert_eq!(table.unit_orders().collect::<Vec<_>>(), vec![4]);
    }
}
