use anyhow::{Context, Result};
use pdfium_render::prelude::*;
use std::path::Path;

/// Thin adapter over pdfium-render. One renderer is created per process
/// and reused across loads.
pub struct PdfRenderer {
    pdfium: &'static Pdfium,
}

impl PdfRenderer {
    /// Bind the pdfium library, looking next to the executable first and
    /// falling back to the system library paths. The binding is leaked:
    /// pdfium must never be torn down while documents are alive, and
    /// process exit reclaims it.
    pub fn new() -> Result<Self> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.to_path_buf()));

        let bindings = exe_dir
            .and_then(|dir| {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir.as_path()))
                    .ok()
            })
            .map(Ok)
            .unwrap_or_else(Pdfium::bind_to_system_library)
            .context("Failed to bind to PDFium library. Please install PDFium or download the library from https://github.com/bblanchon/pdfium-binaries")?;

        let pdfium: &'static Pdfium = Box::leak(Box::new(Pdfium::new(bindings)));
        Ok(Self { pdfium })
    }

    pub fn load_document(&self, path: &Path) -> Result<Document> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .with_context(|| format!("Failed to load PDF document '{}'", path.display()))?;
        Ok(Document { inner: document })
    }
}

/// An open PDF document. Dropping it releases the pdfium handle, so the
/// viewer holds at most one at a time.
pub struct Document {
    inner: PdfDocument<'static>,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("page_count", &self.page_count())
            .finish()
    }
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.inner.pages().len() as usize
    }

    /// Decode one page into an RGBA bitmap, sized from the page's point
    /// dimensions scaled by the zoom factor.
    pub fn render_page(&self, page_index: usize, zoom: f32) -> Result<image::RgbaImage> {
        let page = self
            .inner
            .pages()
            .get(page_index as u16)
            .context("Page index out of bounds")?;

        let render_width = (page.width().value * zoom) as i32;
        let render_height = (page.height().value * zoom) as i32;

        let render_config = PdfRenderConfig::new()
            .set_target_width(render_width)
            .set_maximum_height(render_height)
            .rotate_if_landscape(PdfPageRenderRotation::None, false);

        let bitmap = page
            .render_with_config(&render_config)
            .context("Failed to render page")?;

        let buffer = bitmap.as_raw_bytes();
        let img = image::RgbaImage::from_raw(
            bitmap.width() as u32,
            bitmap.height() as u32,
            buffer.to_vec(),
        )
        .context("Failed to create image from bitmap")?;

        Ok(img)
    }
}
