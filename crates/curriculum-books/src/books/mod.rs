//! # Bundled Catalog
//!
//! The books this crate ships with, and the curated drafts shared between them.
//!
//! | Book | Units | Curated unit orders |
//! |------|-------|---------------------|
//! | [`shevilim_plus_16`] | 6 | 2–6 |
//! | [`shevilim_plus_18`] | 8 | 2–6 (shared table) |

pub mod curated;
pub mod shevilim_plus_16;
pub mod shevilim_plus_18;

use curriculum_core::{Catalog, CatalogError};

/// Grade all bundled books belong to.
pub const GRADE_ID: &str = "6";

/// Builds the bundled catalog.
///
/// # Errors
/// Only if the bundled data is malformed; see [`CatalogError`].
pub fn catalog() -> Result<Catalog, CatalogError> {
    curated::tables()
        .into_iter()
        .fold(
            Catalog::builder()
                .book(shevilim_plus_16::book())
                .book(shevilim_plus_18::book()),
            |builder, (unit_order, drafts)| builder.curated(unit_order, drafts),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_is_valid() {
        let catalog = catalog().unwrap();

        assert_eq!(catalog.books().len(), 2);
        assert_eq!(catalog.list_units(shevilim_plus_16::BOOK_ID).len(), 6);
        assert_eq!(catalog.list_units(shevilim_plus_18::BOOK_ID).len(), 8);
        assert_eq!(
            catalog.curated().unit_orders().collect::<Vec<_>>(),
            vec![2, 3, 4, 5, 6]
        );
        assert!(catalog.curated_drafts_for(1).is_none());
    }

    #[test]
    fn test_review_units_have_no_subsections() {
        let catalog = catalog().unwrap();
        let unit = catalog.unit(shevilim_plus_16::BOOK_ID, 2).unwrap();

        assert_eq!(unit.name, "שוב חישוב - המבנה העשרוני");
        assert!(unit.subsections.is_empty());
    }
}
