//! The generic document viewer.
//!
//! One component serves courses, exercises and practical works alike;
//! the record's [`DocumentKind`] supplies the search folder and the noun
//! used in messages. The viewer owns at most one open document at a
//! time and walks a small state machine per load attempt:
//! `Empty -> Loading -> { Displaying, Failed }`.

use std::collections::HashMap;

use iced::widget::image::Handle;

use crate::error::ViewerError;
use crate::loader;
use crate::renderer::{Document, PdfRenderer};
use crate::session::ViewerSession;
use crate::store::{DocumentKind, MaterialRecord};

/// Visual state of the viewer. `Failed` is terminal until the next
/// [`DocumentViewer::open`] call; a successful load always clears it.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerState {
    Empty,
    Loading,
    Displaying,
    Failed(String),
}

pub struct DocumentViewer {
    state: ViewerState,
    renderer: Option<PdfRenderer>,
    document: Option<Document>,
    session: Option<ViewerSession>,
    record: Option<MaterialRecord>,
    frame: Option<Handle>,
    /// Non-fatal notice (a page that failed to decode); the previous
    /// frame stays on screen.
    status: Option<String>,
    page_cache: HashMap<(usize, u32), Handle>,
}

// Rendered frames kept per (page, zoom percent).
const MAX_CACHED_FRAMES: usize = 10;

impl DocumentViewer {
    pub fn new() -> Self {
        Self {
            state: ViewerState::Empty,
            renderer: None,
            document: None,
            session: None,
            record: None,
            frame: None,
            status: None,
            page_cache: HashMap::new(),
        }
    }

    /// Resolve, open and display the record's PDF. Everything runs on
    /// the caller's thread; any previously open document is released
    /// before the new one is acquired.
    pub fn open(&mut self, record: MaterialRecord) {
        self.teardown();
        self.state = ViewerState::Loading;
        let kind = record.kind;
        self.record = Some(record.clone());

        let path = match loader::resolve(&record.pdf_path, kind.folder()) {
            Ok(path) => path,
            Err(err) => {
                self.fail(&err, kind);
                return;
            }
        };

        if self.renderer.is_none() {
            match PdfRenderer::new() {
                Ok(renderer) => self.renderer = Some(renderer),
                Err(err) => {
                    let err = ViewerError::OpenFailure {
                        path: record.pdf_path.clone(),
                        reason: format!("{err:#}"),
                    };
                    self.fail(&err, kind);
                    return;
                }
            }
        }
        let Some(renderer) = self.renderer.as_ref() else {
            return;
        };

        let document = match renderer.load_document(&path) {
            Ok(document) => document,
            Err(err) => {
                let err = ViewerError::OpenFailure {
                    path: record.pdf_path.clone(),
                    reason: format!("{err:#}"),
                };
                self.fail(&err, kind);
                return;
            }
        };

        let session = ViewerSession::new(document.page_count());
        tracing::info!(
            title = %record.title,
            path = %path.display(),
            pages = session.total_pages(),
            "document opened"
        );
        self.document = Some(document);
        self.session = Some(session);
        self.state = ViewerState::Displaying;
        self.refresh_frame();
    }

    /// Drop the open document and return to the empty state.
    pub fn close(&mut self) {
        self.teardown();
        self.state = ViewerState::Empty;
    }

    pub fn next_page(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.next_page() {
                self.refresh_frame();
            }
        }
    }

    pub fn previous_page(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.previous_page() {
                self.refresh_frame();
            }
        }
    }

    pub fn zoom_in(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.zoom_in();
            self.refresh_frame();
        }
    }

    pub fn zoom_out(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.zoom_out() {
                self.refresh_frame();
            }
        }
    }

    pub fn reset_zoom(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.reset_zoom();
            self.refresh_frame();
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Pagination and zoom controls are shown only while a document is
    /// on screen; `Empty` and `Failed` show the message area instead.
    pub fn controls_visible(&self) -> bool {
        self.state == ViewerState::Displaying
    }

    pub fn session(&self) -> Option<&ViewerSession> {
        self.session.as_ref()
    }

    pub fn record(&self) -> Option<&MaterialRecord> {
        self.record.as_ref()
    }

    pub fn frame(&self) -> Option<Handle> {
        self.frame.clone()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn teardown(&mut self) {
        self.document = None;
        self.session = None;
        self.record = None;
        self.frame = None;
        self.status = None;
        self.page_cache.clear();
    }

    fn fail(&mut self, err: &ViewerError, kind: DocumentKind) {
        tracing::error!(error = %err, "failed to load document");
        self.document = None;
        self.session = None;
        self.frame = None;
        self.page_cache.clear();
        self.state = ViewerState::Failed(user_message(err, kind));
    }

    /// Render the current page at the current zoom, via the frame cache.
    /// A decode failure keeps the previous frame on screen and records a
    /// status notice instead of tearing the session down.
    fn refresh_frame(&mut self) {
        let (Some(document), Some(session)) = (self.document.as_ref(), self.session.as_ref())
        else {
            return;
        };

        let page = session.current_page();
        let zoom = session.zoom();
        let cache_key = (page, (zoom * 100.0) as u32);

        if let Some(handle) = self.page_cache.get(&cache_key) {
            self.frame = Some(handle.clone());
            self.status = None;
            return;
        }

        match document.render_page(page, zoom) {
            Ok(img) => {
                let (width, height) = (img.width(), img.height());
                let handle = Handle::from_rgba(width, height, img.into_raw());

                if self.page_cache.len() >= MAX_CACHED_FRAMES {
                    let evict: Vec<_> = self
                        .page_cache
                        .keys()
                        .take(self.page_cache.len() + 1 - MAX_CACHED_FRAMES)
                        .cloned()
                        .collect();
                    for key in evict {
                        self.page_cache.remove(&key);
                    }
                }
                self.page_cache.insert(cache_key, handle.clone());
                self.frame = Some(handle);
                self.status = None;
            }
            Err(err) => {
                let err = ViewerError::RenderFailure {
                    page,
                    reason: format!("{err:#}"),
                };
                tracing::error!(error = %err, "page render failed");
                self.status = Some(err.to_string());
            }
        }
    }
}

impl Default for DocumentViewer {
    fn default() -> Self {
        Self::new()
    }
}

/// Message shown in the viewer's error area. Load failures name the
/// stored path and, where it helps, what to do about it.
fn user_message(err: &ViewerError, kind: DocumentKind) -> String {
    match err {
        ViewerError::EmptyReference => {
            format!("No PDF available for this {}.", kind.noun())
        }
        ViewerError::FileNotFound {
            stored_path,
            filename,
            folder,
        } => format!(
            "PDF not found for this {}. Stored path: '{}'. \
             Place a file named '{}' in the '{}/' folder to restore it.",
            kind.noun(),
            stored_path,
            filename,
            folder
        ),
        ViewerError::OpenFailure { path, reason } => {
            format!("Could not open the PDF at '{path}': {reason}")
        }
        ViewerError::RenderFailure { page, reason } => {
            format!("Could not render page {}: {}", page + 1, reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pdf_path: &str, kind: DocumentKind) -> MaterialRecord {
        MaterialRecord::new("Worksheet", pdf_path, 1, kind)
    }

    #[test]
    fn starts_empty_with_controls_hidden() {
        let viewer = DocumentViewer::new();
        assert_eq!(*viewer.state(), ViewerState::Empty);
        assert!(!viewer.controls_visible());
        assert!(viewer.frame().is_none());
    }

    #[test]
    fn empty_reference_fails_with_kind_specific_message() {
        let mut viewer = DocumentViewer::new();
        viewer.open(record("", DocumentKind::Exercises));
        assert_eq!(
            *viewer.state(),
            ViewerState::Failed("No PDF available for this exercise.".into())
        );
        assert!(!viewer.controls_visible());
    }

    #[test]
    fn empty_reference_message_names_practical_works_too() {
        let mut viewer = DocumentViewer::new();
        viewer.open(record("", DocumentKind::PracticalWorks));
        assert_eq!(
            *viewer.state(),
            ViewerState::Failed("No PDF available for this practical work.".into())
        );
    }

    #[test]
    fn unresolvable_path_reports_path_and_remediation() {
        let mut viewer = DocumentViewer::new();
        viewer.open(record("gone/1700_missing.pdf", DocumentKind::Courses));
        match viewer.state() {
            ViewerState::Failed(message) => {
                assert!(message.contains("gone/1700_missing.pdf"));
                assert!(message.contains("1700_missing.pdf"));
                assert!(message.contains("courses"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(!viewer.controls_visible());
        assert!(viewer.session().is_none());
    }

    #[test]
    fn navigation_on_a_failed_viewer_is_inert() {
        let mut viewer = DocumentViewer::new();
        viewer.open(record("", DocumentKind::Exercises));
        viewer.next_page();
        viewer.zoom_in();
        assert!(matches!(viewer.state(), ViewerState::Failed(_)));
        assert!(viewer.frame().is_none());
    }

    #[test]
    fn close_returns_to_empty() {
        let mut viewer = DocumentViewer::new();
        viewer.open(record("", DocumentKind::Exercises));
        viewer.close();
        assert_eq!(*viewer.state(), ViewerState::Empty);
        assert!(viewer.record().is_none());
    }
}
