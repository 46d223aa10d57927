//! Stored-path resolution.
//!
//! The database keeps the path a PDF had when it was uploaded. Files are
//! copied into per-kind upload folders as `{epochMillis}_{originalFilename}`,
//! so when the recorded path has gone stale the loader falls back to
//! searching the kind's folder, first by exact filename, then by the
//! `_originalFilename` suffix.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ViewerError;

/// Resolve a stored path to an existing file, trying in order:
///
/// 1. the stored path itself (absolute, or relative to the working directory),
/// 2. an exact filename match among `search_folder`'s direct children,
/// 3. a suffix match on the part of the filename from its first
///    underscore, or on `_{filename}` when the stored name carries no
///    timestamp prefix.
///
/// With more than one suffix candidate the winner follows directory
/// listing order, which no filesystem guarantees to be stable.
pub fn resolve(stored_path: &str, search_folder: &Path) -> Result<PathBuf, ViewerError> {
    if stored_path.trim().is_empty() {
        return Err(ViewerError::EmptyReference);
    }

    let stored = Path::new(stored_path);
    if stored.is_file() {
        return Ok(stored.to_path_buf());
    }

    let filename = stored
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(stored_path)
        .to_string();

    if let Some(found) = scan_folder(search_folder, |name| name == filename) {
        tracing::debug!(stored = stored_path, found = %found.display(), "resolved by exact filename");
        return Ok(found);
    }

    // Uploads are renamed to {epochMillis}_{originalFilename}, so the
    // part from the first underscore onward survives a move. A stored
    // name without a timestamp prefix matches against "_{name}".
    let suffix = match filename.find('_') {
        Some(underscore) => filename[underscore..].to_string(),
        None => format!("_{filename}"),
    };
    if let Some(found) = scan_folder(search_folder, |name| name.contains(&suffix)) {
        tracing::debug!(stored = stored_path, found = %found.display(), suffix = %suffix, "resolved by suffix");
        return Ok(found);
    }

    Err(ViewerError::FileNotFound {
        stored_path: stored_path.to_string(),
        filename,
        folder: search_folder.display().to_string(),
    })
}

/// First direct child of `folder` that is a file and whose name passes
/// `matches`. A missing or unreadable folder yields no match.
fn scan_folder(folder: &Path, matches: impl Fn(&str) -> bool) -> Option<PathBuf> {
    let entries = fs::read_dir(folder).ok()?;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if matches(name) {
                return Some(path);
            }
        }
    }
    None
}
