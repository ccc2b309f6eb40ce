//! Flat directory scan producing the `ImageRef` list a gallery loads.
//!
//! The scan is intentionally shallow: a gallery shows the images directly
//! inside the opened directory, matched by extension. No decoding happens
//! here. The async wrapper runs the walk on a blocking task and delivers
//! one complete result per call; a newer scan superseding an older one is
//! the caller's concern.

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use thiserror::Error;
use tokio::task;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::models::{compare_names, ImageRef, MediaKind};

/// Why a directory could not be enumerated.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("scan task panicked")]
    TaskFailed,
}

/// Lists the image files directly inside `dir`, sorted by name.
///
/// Files whose extension is not a known image kind are skipped, as are
/// files whose metadata cannot be read (logged, not fatal).
pub fn list_images(dir: &Path) -> Result<Vec<ImageRef>, ScanError> {
    if !dir.exists() {
        return Err(ScanError::PathNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            match e.into_io_error() {
                Some(source) => ScanError::Io { path, source },
                None => ScanError::PathNotFound(dir.to_path_buf()),
            }
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let kind = match MediaKind::from_extension(ext) {
            Some(k) => k,
            None => continue,
        };

        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };

        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                warn!("Failed to read metadata for {:?}: {}", path, e);
                continue;
            }
        };

        let modified = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);

        images.push(ImageRef {
            name,
            path: path.to_path_buf(),
            kind,
            modified,
            size: metadata.len() as i64,
        });
    }

    images.sort_by(|a, b| compare_names(&a.name, &b.name));
    debug!(count = images.len(), ?dir, "Enumerated images");
    Ok(images)
}

/// Async wrapper around `list_images`, run on a blocking task.
pub async fn scan(dir: &Path) -> Result<Vec<ImageRef>, ScanError> {
    let dir = dir.to_path_buf();
    let images = task::spawn_blocking(move || list_images(&dir))
        .await
        .map_err(|_| ScanError::TaskFailed)??;

    info!(count = images.len(), "Scan complete");
    Ok(images)
}
