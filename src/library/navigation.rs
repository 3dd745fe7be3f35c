/// Outcome of a page-change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    /// The page changed; carries the new page index.
    Moved(usize),
    /// The requested page is outside the document; nothing changed.
    AtBoundary,
}

/// Which folder, document and page the user is looking at.
///
/// The three screens are routed purely off this state: no folder selected is
/// the collection chooser, a folder without a document is the document list,
/// and both together is the page viewer. While a document is open
/// `current_page` is always below `page_count`; with no document open both
/// are zero.
#[derive(Debug, Default)]
pub struct NavigationState {
    selected_folder: Option<String>,
    selected_document: Option<String>,
    current_page: usize,
    page_count: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_folder(&self) -> Option<&str> {
        self.selected_folder.as_deref()
    }

    pub fn selected_document(&self) -> Option<&str> {
        self.selected_document.as_deref()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Enter a collection's document list.
    pub fn select_folder(&mut self, folder: &str) {
        self.selected_folder = Some(folder.to_owned());
    }

    /// Record a freshly opened document and start at its first page.
    ///
    /// The caller resolves `page_count` from the rendering side before
    /// calling; a document that fails to open never reaches this point, so
    /// a failed open leaves navigation untouched.
    pub fn open(&mut self, document: &str, page_count: usize) {
        self.selected_document = Some(document.to_owned());
        self.current_page = 0;
        self.page_count = page_count;
    }

    /// Move by `delta` pages if the target stays inside the document.
    ///
    /// Out-of-range targets are reported as [`PageStep::AtBoundary`] and
    /// leave the state unchanged; the walk never wraps or clamps. With no
    /// document open every request is a boundary.
    pub fn change_page(&mut self, delta: isize) -> PageStep {
        let candidate = self.current_page as isize + delta;
        if candidate >= 0 && (candidate as usize) < self.page_count {
            self.current_page = candidate as usize;
            PageStep::Moved(self.current_page)
        } else {
            PageStep::AtBoundary
        }
    }

    /// Leave the viewer: clears the open document and page fields but keeps
    /// the folder selection, returning the user to that folder's list.
    pub fn close(&mut self) {
        self.selected_document = None;
        self.current_page = 0;
        self.page_count = 0;
    }

    /// Back to the collection chooser: clears everything.
    pub fn reset(&mut self) {
        self.close();
        self.selected_folder = None;
    }
}
