//! Curated concept drafts, keyed by unit order.
//!
//! The table is shared by every book in the catalog. Unit order 1 has no entry:
//! its concepts are authored by hand and the resolver skips it.

use curriculum_core::ConceptDraft;

/// `(unit_order, drafts)` pairs for the catalog builder.
pub fn tables() -> Vec<(u32, Vec<ConceptDraft>)> {
    vec![
        (2, decimal_structure()),
        (3, part_of_quantity_fractions()),
        (4, division_review()),
        (5, percentages()),
        (6, addition_subtraction_review()),
    ]
}

fn decimal_structure() -> Vec<ConceptDraft> {
    vec![
        ConceptDraft::text(
            "ערך מקומי במספרים עשרוניים",
            "כל ספרה במספר עשרוני מייצגת ערך מסוים: שלמים, עשיריות, מאיות וכו'.",
        ),
        ConceptDraft::text(
            "השוואת מספרים עשרוניים",
            "להשוואת מספרים עשרוניים משווים מימין לשמאל: שלמים, עשיריות, מאיות...",
        ),
        ConceptDraft::text(
            "עיגול מספרים עשרוניים",
            "עיגול מספר עשרוני נעשה לפי הספרה בערך המקומי הרצוי.",
        ),
        ConceptDraft::text(
            "המרה בין שברים למספרים עשרוניים",
            "שבר עשרוני ניתן להמרה למספר עשרוני ולהיפך.",
        ),
    ]
}

fn part_of_quantity_fractions() -> Vec<ConceptDraft> {
    vec![
        ConceptDraft::new(
            "מציאת חלק מכמות",
            "למצוא חלק מכמות, כופלים את הכמות בשבר המתאים.",
            r"\frac{a}{b} \text{ מ-}c = c \times \frac{a}{b}",
        ),
        ConceptDraft::text(
            "מציאת הכמות הכוללת",
            "אם ידוע החלק, ניתן למצוא את הכמות הכוללת על ידי חילוק.",
        ),
        ConceptDraft::text(
            "קשר בין כפל וחלק מכמות",
            "מציאת חלק מכמות היא למעשה פעולת כפל.",
        ),
        ConceptDraft::text("בעיות מעשיות", "שימוש בשברים לפתרון בעיות יומיומיות."),
    ]
}

fn division_review() -> Vec<ConceptDraft> {
    vec![
        ConceptDraft::text("חילוק ארוך", "שיטת החילוק הארוך מאפשרת לחלק מספרים גדולים."),
        ConceptDraft::new(
            "בדיקת תוצאת חילוק",
            "לבדוק חילוק: מחלק × מנה + שארית = מחולק",
            r"\text{מחולק} = \text{מחלק} \times \text{מנה} + \text{שארית}",
        ),
        ConceptDraft::text(
            "חילוק עם שארית",
            "לא תמיד החילוק מדויק - יכולה להיות שארית.",
        ),
        ConceptDraft::text(
            "חילוק באפס",
            "אי אפשר לחלק מספר באפס. 0 חלקי מספר כלשהו שווה 0.",
        ),
    ]
}

fn percentages() -> Vec<ConceptDraft> {
    vec![
        ConceptDraft::new(
            "אחוז",
            "אחוז הוא שבר ממאה. 1% = 1/100 = 0.01",
            r"a\% = \frac{a}{100}",
        ),
        ConceptDraft::new(
            "מציאת אחוז מכמות",
            "למצוא אחוז מכמות, כופלים את הכמות באחוז (כעשרוני או שבר).",
            r"a\% \text{ מ-}b = b \times \frac{a}{100}",
        ),
        ConceptDraft::text(
            "המרה בין אחוזים, שברים ועשרוניים",
            "ניתן להמיר בין שלוש הצורות: אחוזים, שברים, מספרים עשרוניים.",
        ),
        ConceptDraft::text("אחוזים בחיי היומיום", "שימוש באחוזים: הנחות, מס, ריבית ועוד."),
    ]
}

fn addition_subtraction_review() -> Vec<ConceptDraft> {
    vec![
        ConceptDraft::text("חיבור במספרים טבעיים", "חיבור מספרים מסודר לפי ערכים מקומיים."),
        ConceptDraft::text(
            "חיסור במספרים טבעיים",
            "חיסור דורש לעיתים השאלה מהערך המקומי הגבוה יותר.",
        ),
        ConceptDraft::text(
            "חיבור מספרים עשרוניים",
            "בחיבור עשרוניים יש ליישר את הנקודות העשרוניות.",
        ),
        ConceptDraft::text(
            "חיסור מספרים עשרוניים",
            "בחיסור עשרוניים יש ליישר את הנקודות העשרוניות.",
        ),
    ]
}
