//! Grade 6, book 16: fractions, decimals and percentages.

use curriculum_core::{Book, Unit};

pub const BOOK_ID: &str = "shevilim-plus-16";

pub fn book() -> Book {
    Book::new(
        BOOK_ID,
        super::GRADE_ID,
        "שבילים פלוס 16",
        "ספר מתמטיקה לכיתה ו׳ - שברים, עשרוניים ואחוזים",
        vec![
            Unit::new(
                1,
                "כפל וחילוק שברים - חלק א",
                "לימוד פעולות כפל וחילוק בשברים עם מספרים שלמים ומעורבים",
                [
                    "כפל - הגורמים הם שבר ומספר שלם - חזרה והעמקה",
                    "חילוק - אחד הגורמים (המחלק או המנה) הוא מספר שלם",
                    "כפל - הגורמים הם מספר מעורב ומספר שלם",
                    "פעילויות נוספות",
                ],
            ),
            Unit::new(
                2,
                "שוב חישוב - המבנה העשרוני",
                "חזרה על המבנה העשרוני במספרים טבעיים ועשרוניים",
                Vec::<String>::new(),
            ),
            Unit::new(
                3,
                "חלק מכמות בשברים",
                "לימוד מציאת חלק מכמות באמצעות שברים",
                [
                    "חזרה",
                    "מציאת הכמות החלקית ותרגיל כפל מתאים",
                    "מציאת הכמות הכוללת",
                    "מציאת החלק",
                ],
            ),
            Unit::new(
                4,
                "שוב חישוב - חילוק במספרים טבעיים",
                "חזרה ותרגול על פעולת החילוק במספרים טבעיים",
                Vec::<String>::new(),
            ),
            Unit::new(
                5,
                "חלק מכמות באחוזים",
                "לימוד מציאת חלק מכמות באמצעות אחוזים",
                ["חזרה", "מציאת הכמות החלקית", "מציאת החלק", "בעיות מסוגים שונים"],
            ),
            Unit::new(
                6,
                "שוב חישוב - חיבור וחיסור",
                "חזרה על חיבור וחיסור במספרים טבעיים ועשרוניים",
                Vec::<String>::new(),
            ),
        ],
    )
}
