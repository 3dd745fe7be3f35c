//! PDF document handling on top of pdfium.
//!
//! The pdfium library itself is bound once per process and kept in a
//! `OnceCell`, so document handles borrow with a `'static` lifetime and can
//! sit in application state. The app holds at most one [`Document`] at a
//! time and drops it before opening the next.

mod render;

pub use render::{PAGE_VIEW_HEIGHT, PAGE_VIEW_WIDTH, PageBitmap};

use std::fmt;
use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;
use pdfium_render::prelude::*;

thread_local! {
    // Everything runs on the UI thread; the instance is leaked on first
    // use so documents can borrow it for 'static.
    static PDFIUM: OnceCell<&'static Pdfium> = OnceCell::new();
}

/// Errors from binding pdfium or working with a document
#[derive(Debug)]
pub enum PdfError {
    /// The pdfium library could not be loaded
    Bind(PdfiumError),
    /// A document failed to open
    Open { path: PathBuf, source: PdfiumError },
    /// A page failed to rasterize
    Render { page: usize, source: PdfiumError },
}

impl fmt::Display for PdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfError::Bind(err) => write!(f, "failed to load pdfium: {:?}", err),
            PdfError::Open { path, source } => {
                write!(f, "failed to open {}: {:?}", path.display(), source)
            }
            PdfError::Render { page, source } => {
                write!(f, "failed to render page {}: {:?}", page, source)
            }
        }
    }
}

impl std::error::Error for PdfError {}

/// Bind pdfium on first use: a copy next to the executable wins over the
/// system-wide installation.
fn pdfium() -> Result<&'static Pdfium, PdfError> {
    PDFIUM.with(|cell| {
        cell.get_or_try_init(|| {
            let bindings =
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                    .or_else(|_| Pdfium::bind_to_system_library())
                    .map_err(PdfError::Bind)?;
            Ok(&*Box::leak(Box::new(Pdfium::new(bindings))))
        })
        .copied()
    })
}

/// An open PDF document with its page count resolved up front.
pub struct Document {
    inner: PdfDocument<'static>,
    page_count: usize,
}

impl Document {
    /// Open the file at `path`. Unreadable or corrupt files surface the
    /// pdfium error unmodified.
    pub fn open(path: &Path) -> Result<Self, PdfError> {
        let inner = pdfium()?
            .load_pdf_from_file(path, None)
            .map_err(|source| PdfError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        let page_count = inner.pages().len() as usize;
        Ok(Self { inner, page_count })
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Rasterize one page for the viewer canvas.
    pub fn render_page(&self, page: usize) -> Result<PageBitmap, PdfError> {
        render::render_page(&self.inner, page)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("page_count", &self.page_count)
            .finish()
    }
}
