//! The personal book library: child directories of a configured root,
//! each presented with a discovered preview image.
//!
//! Independent of the reader core. A book's preview is simply the first
//! image (by display-name order) inside its directory; a book with no
//! readable images reports no preview rather than failing the listing.

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use anyhow::{Context, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::scanner::list_images;

/// One book-like directory under the library root.
#[derive(Debug, Clone)]
pub struct Book {
    /// Directory name, used as the display title.
    pub name: String,
    pub path: PathBuf,
    /// Creation time, epoch millis; falls back to mtime where the
    /// filesystem records no birth time.
    pub created: i64,
    /// First image in the book, if any.
    pub preview: Option<PathBuf>,
}

/// Lists the books under `root`, newest-first by creation time.
pub fn list_books(root: &Path) -> Result<Vec<Book>> {
    if !root.is_dir() {
        anyhow::bail!("library root is not a directory: {:?}", root);
    }

    let mut books = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("failed to read library root {:?}", root))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path().to_path_buf();
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };

        let created = entry
            .metadata()
            .ok()
            .and_then(|m| m.created().or_else(|_| m.modified()).ok())
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);

        books.push(Book {
            preview: discover_preview(&path),
            name,
            path,
            created,
        });
    }

    books.sort_by(|a, b| b.created.cmp(&a.created));
    debug!(count = books.len(), ?root, "Listed library books");
    Ok(books)
}

/// First image in the book directory, by display-name order.
fn discover_preview(book: &Path) -> Option<PathBuf> {
    match list_images(book) {
        Ok(images) => images.into_iter().next().map(|img| img.path),
        Err(e) => {
            warn!("Failed to discover preview for {:?}: {}", book, e);
            None
        }
    }
}
