use pdfium_render::prelude::*;

use super::PdfError;

/// Size of the viewer canvas in logical pixels. Pages are scaled to fit
/// inside it while keeping their aspect ratio.
pub const PAGE_VIEW_WIDTH: f32 = 600.0;
pub const PAGE_VIEW_HEIGHT: f32 = 500.0;

/// One rasterized page, as RGBA bytes ready for a GUI texture.
pub struct PageBitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Rasterize `page` of `document` to fit the viewer canvas.
pub fn render_page(document: &PdfDocument<'_>, page: usize) -> Result<PageBitmap, PdfError> {
    let wrap = |source| PdfError::Render { page, source };

    let pdf_page = document.pages().get(page as u16).map_err(wrap)?;

    let page_width = pdf_page.width().value;
    let page_height = pdf_page.height().value;
    let scale = (PAGE_VIEW_WIDTH / page_width).min(PAGE_VIEW_HEIGHT / page_height);
    let width = (page_width * scale) as i32;
    let height = (page_height * scale) as i32;

    let render_config = PdfRenderConfig::new()
        .set_target_width(width)
        .set_target_height(height)
        .set_format(PdfBitmapFormat::BGRA);

    let bitmap = pdf_page.render_with_config(&render_config).map_err(wrap)?;

    // pdfium hands back BGRA; egui textures want RGBA.
    let bgra = bitmap.as_bytes();
    let mut pixels = Vec::with_capacity(bgra.len());
    for px in bgra.chunks_exact(4) {
        pixels.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
    }

    Ok(PageBitmap {
        width: width as u32,
        height: height as u32,
        pixels,
    })
}
