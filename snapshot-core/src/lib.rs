//! Offline board snapshots: SVG documents and PNG images.
//!
//! The board is painted onto an [`SvgSurface`]; PNGs are produced by
//! rasterising that SVG with `resvg` and encoding the pixels deterministically.

mod raster;
mod svg;

use gammon_core::geometry::ASPECT;
use gammon_core::{Board, Palette};

pub use raster::{encode_pixmap, encode_rgba_to_png_bytes, rasterize};
pub use svg::SvgSurface;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Paint(#[from] gammon_core::Error),

    #[error("SVG parse error: {0}")]
    Svg(String),

    #[error("pixmap alloc failed ({width}x{height})")]
    PixmapAlloc { width: u32, height: u32 },

    #[error("png encode: {0}")]
    Png(#[from] png::EncodingError),
}

/// Whole-pixel size of a board `width` pixels wide.
pub fn pixel_size(width: f64) -> (u32, u32) {
    let w = width.round().max(1.0) as u32;
    let h = (width * ASPECT).round().max(1.0) as u32;
    (w, h)
}

pub fn render_svg(board: &Board, width: f64, palette: &Palette) -> Result<String, SnapshotError> {
    let mut surface = SvgSurface::new();
    gammon_core::paint_with(&mut surface, width, board, palette)?;
    Ok(surface.finish())
}

pub fn render_pixmap(
    board: &Board,
    width: f64,
    palette: &Palette,
) -> Result<tiny_skia::Pixmap, SnapshotError> {
    let svg = render_svg(board, width, palette)?;
    let (w, h) = pixel_size(width);
    rasterize(&svg, w, h)
}

pub fn render_png(board: &Board, width: f64, palette: &Palette) -> Result<Vec<u8>, SnapshotError> {
    let pixmap = render_pixmap(board, width, palette)?;
    let bytes = encode_pixmap(&pixmap)?;
    tracing::debug!(
        width = pixmap.width(),
        height = pixmap.height(),
        bytes = bytes.len(),
        "board snapshot encoded"
    );
    Ok(bytes)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
