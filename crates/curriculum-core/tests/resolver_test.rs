use curriculum_core::mock::MockContentSource;
use curriculum_core::{
    Book, Catalog, ConceptDraft, ConceptResolver, DraftSource, Resolution, ResolveError, Unit,
};
use std::sync::Arc;

fn decimal_drafts() -> Vec<ConceptDraft> {
    vec![
        ConceptDraft::text("ערך מקומי במספרים עשרוניים", "כל ספרה במספר עשרוני מייצגת ערך מסוים."),
        ConceptDraft::text("השוואת מספרים עשרוניים", "משווים שלמים, עשיריות, מאיות."),
        ConceptDraft::text("עיגול מספרים עשרוניים", "עיגול לפי הספרה בערך המקומי הרצוי."),
        ConceptDraft::text("המרה בין שברים למספרים עשרוניים", "שבר עשרוני ניתן להמרה."),
    ]
}

fn catalog() -> Catalog {
    let units = (1..=8)
        .map(|order| Unit::new(order, format!("יחידה {order}"), "", Vec::<String>::new()))
        .collect();

    Catalog::builder()
        .book(Book::new("test-book", "6", "Test", "", units))
        .curated(2, decimal_drafts())
        .curated(
            5,
            vec![ConceptDraft::new("אחוז", "אחוז הוא שבר ממאה.", "a\\% = \\frac{a}{100}")],
        )
        .build()
        .expect("valid catalog")
}

fn resolver() -> ConceptResolver {
    ConceptResolver::new(Arc::new(catalog()))
}

#[test]
fn test_unit_one_is_always_skipped() {
    let resolver = resolver();
    for slot in 1..=10 {
        assert_eq!(resolver.resolve(1, slot).unwrap(), Resolution::Skipped);
    }
}

#[test]
fn test_curated_slots_match_drafts_exactly() {
    let resolver = resolver();
    for (index, draft) in decimal_drafts().iter().enumerate() {
        let slot = index as u32 + 1;
        let concept = resolver.resolve(2, slot).unwrap().into_concept().unwrap();

        assert_eq!(concept.id, format!("concept-2-{slot}"));
        assert_eq!(concept.title, draft.title);
        assert_eq!(concept.content, draft.content);
        assert_eq!(concept.formula, draft.formula);
        assert_eq!(concept.order, slot);
    }
}

#[test]
fn test_overflow_reuses_first_draft() {
    let resolver = resolver();
    let first = resolver.resolve(2, 1).unwrap().into_concept().unwrap();

    for slot in [5, 6, 50] {
        let concept = resolver.resolve(2, slot).unwrap().into_concept().unwrap();
        assert_eq!(concept.id, format!("concept-2-{slot}"));
        assert_eq!(concept.order, slot);
        assert_eq!(concept.title, first.title);
        assert_eq!(concept.content, first.content);
        assert_eq!(concept.formula, first.formula);
    }

    // A single-draft table reuses its formula too.
    let percent = resolver.resolve(5, 3).unwrap().into_concept().unwrap();
    assert_eq!(percent.title, "אחוז");
    assert_eq!(percent.formula, "a\\% = \\frac{a}{100}");
}

#[test]
fn test_unregistered_unit_gets_placeholder() {
    let concept = resolver().resolve(7, 2).unwrap().into_concept().unwrap();

    assert_eq!(concept.id, "concept-7-2");
    assert_eq!(concept.order, 2);
    assert!(!concept.title.is_empty());
    assert!(!concept.content.is_empty());
    assert!(concept.formula.is_empty());
}

#[test]
fn test_zero_arguments_are_rejected() {
    let resolver = resolver();
    assert!(matches!(
        resolver.resolve(0, 1),
        Err(ResolveError::InvalidArgument { argument: "unit_order", value: 0 })
    ));
    assert!(matches!(
        resolver.resolve(2, 0),
        Err(ResolveError::InvalidArgument { argument: "slot", value: 0 })
    ));
}

#[test]
fn test_resolution_is_idempotent() {
    let resolver = resolver();
    for (unit_order, slot) in [(2, 1), (2, 9), (5, 1), (7, 3), (1, 1)] {
        assert_eq!(
            resolver.resolve(unit_order, slot).unwrap(),
            resolver.resolve(unit_order, slot).unwrap()
        );
    }
}

#[test]
fn test_concurrent_resolution_matches_sequential() {
    let resolver = resolver();
    let expected: Vec<Resolution> = (1..=8)
        .flat_map(|unit| (1..=6).map(move |slot| (unit, slot)))
        .map(|(unit, slot)| resolver.resolve(unit, slot).unwrap())
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let resolver = resolver.clone();
            std::thread::spawn(move || {
                (1..=8)
                    .flat_map(|unit| (1..=6).map(move |slot| (unit, slot)))
                    .map(|(unit, slot)| resolver.resolve(unit, slot).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

/// The skip and argument checks happen before any curated lookup.
#[test]
fn test_skip_and_rejection_never_consult_source() {
    let mock = Arc::new(MockContentSource::new());
    let resolver = ConceptResolver::new(Arc::clone(&mock));

    assert!(resolver.resolve(1, 1).unwrap().is_skipped());
    assert!(resolver.resolve(0, 1).is_err());
    assert!(resolver.resolve(3, 0).is_err());

    assert!(mock.calls().is_empty());
    mock.verify();
}

#[test]
fn test_present_but_empty_source_falls_back_to_placeholder() {
    let mut mock = MockContentSource::new();
    mock.expect_lookup(3).return_drafts(vec![]);
    mock.expect_lookup(4).return_absent();
    let mock = Arc::new(mock);
    let resolver = ConceptResolver::new(Arc::clone(&mock));

    let empty = resolver.resolve_with_source(3, 1).unwrap().unwrap();
    let absent = resolver.resolve_with_source(4, 1).unwrap().unwrap();

    assert_eq!(empty.source, DraftSource::Placeholder);
    assert_eq!(absent.source, DraftSource::Placeholder);
    assert_eq!(empty.concept.title, absent.concept.title);
    mock.verify();
}
