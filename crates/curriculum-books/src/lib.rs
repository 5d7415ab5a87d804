//! # Curriculum Books
//!
//! The bundled grade-6 books and the driver that turns them into content.
//!
//! ## 🚀 Core Components
//!
//! - **[books]**: Static unit declarations for each book and the shared curated
//!   concept table.
//! - **[lifecycle]**: [`CurriculumSystem`](lifecycle::CurriculumSystem), which
//!   fans out one task per book, and [`BuildConfig`](lifecycle::BuildConfig).
//! - **[model]**: The serializable book → unit → concept tree.
//! - **[render]**: JSON output to a writer or to one file per book.
//!
//! The resolution rules themselves live in `curriculum_core`.

pub mod books;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod render;

pub use error::BuildError;
