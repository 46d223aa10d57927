/// Live state of one open document view: current page and zoom factor.
/// A fresh session is created on every successful load.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    current_page: usize,
    total_pages: usize,
    zoom: f32,
}

impl ViewerSession {
    const MIN_ZOOM: f32 = 0.5;
    const ZOOM_STEP: f32 = 0.25;
    const DEFAULT_ZOOM: f32 = 1.0;

    pub fn new(total_pages: usize) -> Self {
        Self {
            current_page: 0,
            total_pages,
            zoom: Self::DEFAULT_ZOOM,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Advance one page; no-op on the last page. Returns whether the
    /// page changed and a re-render is due.
    pub fn next_page(&mut self) -> bool {
        if self.current_page + 1 < self.total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; no-op on the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.current_page > 0 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page + 1 < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 0
    }

    /// Grow the zoom by one step. There is no upper bound.
    pub fn zoom_in(&mut self) {
        self.zoom += Self::ZOOM_STEP;
    }

    /// Shrink the zoom by one step, never past 0.5. The clamp catches a
    /// factor that drifted off the step grid (e.g. 0.6 stepping to 0.5
    /// instead of 0.35).
    pub fn zoom_out(&mut self) -> bool {
        if self.zoom > Self::MIN_ZOOM {
            self.zoom = (self.zoom - Self::ZOOM_STEP).max(Self::MIN_ZOOM);
            true
        } else {
            false
        }
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = Self::DEFAULT_ZOOM;
    }

    /// Toolbar label, 1-based for humans.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page + 1, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_page_at_default_zoom() {
        let session = ViewerSession::new(5);
        assert_eq!(session.current_page(), 0);
        assert_eq!(session.total_pages(), 5);
        assert_eq!(session.zoom(), 1.0);
    }

    #[test]
    fn next_page_stops_at_the_last_page() {
        let mut session = ViewerSession::new(2);
        assert!(session.next_page());
        assert!(!session.next_page());
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn previous_page_stops_at_the_first_page() {
        let mut session = ViewerSession::new(2);
        assert!(!session.previous_page());
        assert_eq!(session.current_page(), 0);
        session.next_page();
        assert!(session.previous_page());
        assert_eq!(session.current_page(), 0);
    }

    #[test]
    fn page_label_is_one_based() {
        let mut session = ViewerSession::new(5);
        session.next_page();
        session.next_page();
        session.next_page();
        assert_eq!(session.page_label(), "Page 4 of 5");
    }

    #[test]
    fn zoom_in_is_unbounded_above() {
        let mut session = ViewerSession::new(1);
        for _ in 0..40 {
            session.zoom_in();
        }
        assert!(session.zoom() > 10.0);
    }

    #[test]
    fn zoom_out_never_goes_below_the_floor() {
        let mut session = ViewerSession::new(1);
        for _ in 0..10 {
            session.zoom_out();
        }
        assert_eq!(session.zoom(), 0.5);
        assert!(!session.zoom_out());
        assert_eq!(session.zoom(), 0.5);
    }

    #[test]
    fn drifted_zoom_clamps_to_the_floor() {
        let mut session = ViewerSession::new(1);
        session.zoom = 0.6;
        assert!(session.zoom_out());
        assert_eq!(session.zoom(), 0.5);
    }

    #[test]
    fn reset_returns_to_default_zoom() {
        let mut session = ViewerSession::new(1);
        session.zoom_in();
        session.zoom_in();
        session.reset_zoom();
        assert_eq!(session.zoom(), 1.0);
    }
}
