//! Grade 6, book 18: ratio, scale and statistics.

use curriculum_core::{Book, Unit};

pub const BOOK_ID: &str = "shevilim-plus-18";

pub fn book() -> Book {
    Book::new(
        BOOK_ID,
        super::GRADE_ID,
        "שבילים פלוס 18",
        "ספר מתמטיקה לכיתה ו׳ - יחסים, קנה מידה וסטטיסטיקה",
        vec![
            Unit::new(
                1,
                "יחס",
                "לימוד מושג היחס ופעולות עם יחסים",
                [
                    "פעילות פתיחה",
                    "יצירת כמויות לפי יחס נתון",
                    "יחס מצומצם",
                    "מציאת המספר החסר",
                    "חלוקת כמות לפי יחס נתון",
                    "משימות יחס נוספות",
                ],
            ),
            Unit::new(
                2,
                "קנה מידה",
                "הבנה ושימוש בקני מידה במפות וסרטוטים",
                [
                    "פעילות פתיחה",
                    "מרחקים במפה ובמציאות",
                    "קנה מידה ב\"פארק מיני ישראל\"",
                    "קנה מידה במפות",
                    "סרטוטים בקני מידה שונים",
                    "שטח וקנה מידה",
                    "המיקרוסקופ",
                ],
            ),
            Unit::new(
                3,
                "שוב חישוב - מדידת זמן",
                "חזרה על מדידת זמן וחישובים עם יחידות זמן",
                Vec::<String>::new(),
            ),
            Unit::new(
                4,
                "בעיות תנועה והספק",
                "פתרון בעיות תנועה והספק",
                ["בעיות תנועה", "בעיות הספק"],
            ),
            Unit::new(
                5,
                "מספרים ופעולות",
                "לימוד מספרים מכוונים ומערכות מספרים",
                ["מספרים מכוונים", "מערכות מספרים", "פעולות במספרים ממערכות שונות"],
            ),
            Unit::new(
                6,
                "שוב חישוב - מרובעים",
                "חזרה על תכונות מרובעים",
                Vec::<String>::new(),
            ),
            Unit::new(
                7,
                "חקר נתונים וניתוח סיכויים",
                "חקר נתונים סטטיסטיים וחישוב סיכויים",
                [
                    "חקר נתונים – מהלך מחקר",
                    "שכיחות ושכיחות יחסית",
                    "ניתוח סיכויים וחישובם",
                ],
            ),
            Unit::new(
                8,
                "שוב חישוב - שטח והיקף",
                "חזרה על חישוב שטח והיקף של מצולעים",
                Vec::<String>::new(),
            ),
        ],
    )
}
