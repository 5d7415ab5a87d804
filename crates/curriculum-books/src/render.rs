//! JSON rendering of assembled books.

use crate::error::BuildError;
use crate::model::BookContent;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Serializes `value` as JSON, pretty-printed on request.
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, BuildError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Writes all books as one JSON array followed by a newline.
pub fn write_books<W: Write>(mut writer: W, books: &[BookContent], pretty: bool) -> Result<(), BuildError> {
    let json = to_json(books, pretty)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Writes all books as one JSON array to `path`, replacing any existing file.
pub fn write_books_to_path(path: &Path, books: &[BookContent], pretty: bool) -> Result<(), BuildError> {
    let file = fs::File::create(path)?;
    write_books(io::BufWriter::new(file), books, pretty)?;
    info!(path = %path.display(), books = books.len(), "Wrote books");
    Ok(())
}

/// Writes each book to `<dir>/<book-id>.json`, creating `dir` if needed.
///
/// Returns the written paths in book order.
pub fn write_book_files(dir: &Path, books: &[BookContent], pretty: bool) -> Result<Vec<PathBuf>, BuildError> {
    fs::create_dir_all(dir)?;
    let mut paths = Vec::with_capacity(books.len());
    for book in books {
        let path = dir.join(format!("{}.json", book.id));
        fs::write(&path, to_json(book, pretty)?)?;
        info!(path = %path.display(), "Wrote book");
        paths.push(path);
    }
    Ok(paths)
}
