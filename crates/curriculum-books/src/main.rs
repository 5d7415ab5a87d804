//! # Curriculum Books CLI
//!
//! Builds the bundled books and writes them as JSON.
//!
//! ```bash
//! # All books to stdout, book-level logs on stderr
//! RUST_LOG=info cargo run -p curriculum-books
//!
//! # All books in one file
//! cargo run -p curriculum-books -- --output books.json
//!
//! # One file per book, six concept slots per unit
//! cargo run -p curriculum-books -- --concepts-per-unit 6 --out-dir data/grade-6
//! ```

use clap::Parser;
use curriculum_books::lifecycle::{BuildConfig, CurriculumSystem, DEFAULT_CONCEPTS_PER_UNIT};
use curriculum_books::render;
use curriculum_core::tracing::setup_tracing;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "curriculum-books",
    about = "Generate concept content for the bundled curriculum books",
    version
)]
struct Cli {
    /// Concept slots to request for every unit
    #[arg(long, default_value_t = DEFAULT_CONCEPTS_PER_UNIT)]
    concepts_per_unit: u32,

    /// Book id to build (repeatable; default is every book)
    #[arg(long = "book")]
    books: Vec<String>,

    /// Write all books as one JSON array to this file instead of stdout
    #[arg(long, conflicts_with = "out_dir")]
    output: Option<PathBuf>,

    /// Write `<book-id>.json` files here instead of printing to stdout
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let cli = Cli::parse();

    let config = BuildConfig::default()
        .with_concepts_per_unit(cli.concepts_per_unit)
        .with_books(cli.books)
        .with_pretty(!cli.compact);

    let system = CurriculumSystem::bundled().map_err(|e| e.to_string())?;
    let books = match system.build(&config).await {
        Ok(books) => books,
        Err(e) => {
            error!(error = %e, "Build failed");
            return Err(e.to_string());
        }
    };

    match (cli.output, cli.out_dir) {
        (Some(path), _) => {
            render::write_books_to_path(&path, &books, config.pretty)
                .map_err(|e| e.to_string())?;
        }
        (None, Some(dir)) => {
            let paths = render::write_book_files(&dir, &books, config.pretty)
                .map_err(|e| e.to_string())?;
            info!(files = paths.len(), dir = %dir.display(), "Done");
        }
        (None, None) => {
            render::write_books(std::io::stdout().lock(), &books, config.pretty)
                .map_err(|e| e.to_string())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_flag_parses() {
        let cli = Cli::try_parse_from(["curriculum-books", "--output", "books.json"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("books.json")));
        assert!(cli.out_dir.is_none());
        assert_eq!(cli.concepts_per_unit, DEFAULT_CONCEPTS_PER_UNIT);
    }

    #[test]
    fn test_output_and_out_dir_conflict() {
        let result = Cli::try_parse_from([
            "curriculum-books",
            "--output",
            "books.json",
            "--out-dir",
            "data",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_repeatable_book_flag() {
        let cli = Cli::try_parse_from([
            "curriculum-books",
            "--book",
            "shevilim-plus-16",
            "--book",
            "shevilim-plus-18",
            "--compact",
        ])
        .unwrap();
        assert_eq!(cli.books, vec!["shevilim-plus-16", "shevilim-plus-18"]);
        assert!(cli.compact);
    }
}
