use thiserror::Error;

/// Everything that can go wrong between a stored record and pixels on
/// screen. All variants are recovered at the viewer boundary and shown
/// to the user; none abort the application.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewerError {
    /// The record has no document attached (empty stored path).
    #[error("no document attached")]
    EmptyReference,

    /// Resolution exhausted every fallback.
    #[error("no file matching '{filename}' found in '{folder}/' (stored path: '{stored_path}')")]
    FileNotFound {
        stored_path: String,
        filename: String,
        folder: String,
    },

    /// The file exists but could not be opened as a PDF.
    #[error("failed to open '{path}': {reason}")]
    OpenFailure { path: String, reason: String },

    /// One page failed to decode; the document itself stays open.
    #[error("failed to render page {page}: {reason}")]
    RenderFailure { page: usize, reason: String },
}
