//! SVG rasterization
//!
//! Renders a normalized, color-substituted SVG into a square transparent
//! bitmap and encodes it as PNG.

use crate::error::{AppError, Result};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

/// Render an SVG string to PNG bytes of an exactly `size`x`size` bitmap
///
/// The background stays fully transparent. The drawing is scaled to fill
/// the target on both axes; the normalized viewBox dimensions already
/// decided the drawn aspect, so square icons stay square.
///
/// Fails with a decode error when the SVG cannot be parsed — no partial
/// output is produced. A render that paints nothing at all is suspicious
/// (usually a silently failed draw, not a legitimately invisible icon)
/// but non-fatal; it is surfaced as a warning.
pub fn render_png(svg: &str, size: u32) -> Result<Vec<u8>> {
    if size == 0 {
        return Err(AppError::Decode("PNG size must be positive".to_string()));
    }

    let tree = Tree::from_str(svg, &Options::default())
        .map_err(|e| AppError::Decode(format!("SVG parsing failed: {}", e)))?;

    let svg_size = tree.size();
    if svg_size.width() <= 0.0 || svg_size.height() <= 0.0 {
        return Err(AppError::Decode("SVG has zero dimensions".to_string()));
    }

    let mut pixmap = Pixmap::new(size, size).ok_or_else(|| {
        AppError::Decode(format!("Could not allocate {}x{} surface", size, size))
    })?;

    // Pixmap::new starts out fully transparent; no explicit clear needed
    let transform = Transform::from_scale(
        size as f32 / svg_size.width(),
        size as f32 / svg_size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let visible_pixels = pixmap.data().chunks(4).filter(|px| px[3] > 0).count();
    if visible_pixels == 0 {
        log::warn!(
            "rendered {}x{} bitmap has no visible pixels; the draw likely failed silently",
            size,
            size
        );
    }

    pixmap
        .encode_png()
        .map_err(|e| AppError::Decode(format!("PNG encoding failed: {}", e)))
}
