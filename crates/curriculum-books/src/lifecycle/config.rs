//! Build configuration.

use crate::error::BuildError;

/// Slots requested per unit unless configured otherwise.
pub const DEFAULT_CONCEPTS_PER_UNIT: u32 = 4;

/// Upper bound on slots requested per unit.
pub const MAX_CONCEPTS_PER_UNIT: u32 = 1000;

/// Settings for one build run.
///
/// # Example
///
/// ```
/// use curriculum_books::lifecycle::BuildConfig;
///
/// let config = BuildConfig::default()
///     .with_concepts_per_unit(6)
///     .with_books(["shevilim-plus-18"]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Number of concept slots requested for every unit.
    pub concepts_per_unit: u32,
    /// Book ids to build, in this order. `None` builds every book in catalog order.
    pub books: Option<Vec<String>>,
    /// Pretty-print rendered JSON.
    pub pretty: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            concepts_per_unit: DEFAULT_CONCEPTS_PER_UNIT,
            books: None,
            pretty: true,
        }
    }
}

impl BuildConfig {
    pub fn with_concepts_per_unit(mut self, concepts_per_unit: u32) -> Self {
        self.concepts_per_unit = concepts_per_unit;
        self
    }

    /// Restricts the build to `books`. An empty list means every book.
    pub fn with_books<I, S>(mut self, books: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let books: Vec<String> = books.into_iter().map(Into::into).collect();
        self.books = if books.is_empty() { None } else { Some(books) };
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.concepts_per_unit == 0 {
            return Err(BuildError::Config(
                "concepts_per_unit must be at least 1".to_string(),
            ));
        }
        if self.concepts_per_unit > MAX_CONCEPTS_PER_UNIT {
            return Err(BuildError::Config(format!(
                "concepts_per_unit must be at most {MAX_CONCEPTS_PER_UNIT}, got {}",
                self.concepts_per_unit
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuildConfig::default();
        assert_eq!(config.concepts_per_unit, 4);
        assert!(config.books.is_none());
        assert!(config.pretty);
    }

    #[test]
    fn test_zero_concepts_rejected() {
        let err = BuildConfig::default().with_concepts_per_unit(0).validate().unwrap_err();
        assert!(matches!(err, BuildError::Config(_)));
    }

    #[test]
    fn test_oversized_concept_count_rejected() {
        let err = BuildConfig::default()
            .with_concepts_per_unit(u32::MAX)
            .validate()
            .unwrap_err();
        assert!(matches!(err, BuildError::Config(_)));

        let at_limit = BuildConfig::default().with_concepts_per_unit(MAX_CONCEPTS_PER_UNIT);
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_empty_book_filter_means_all() {
        let config = BuildConfig::default().with_books(Vec::<String>::new());
        assert!(config.books.is_none());
    }
}
