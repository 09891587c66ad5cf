use std::path::Path;

use crate::foundation::error::{FishError, FishResult};
use crate::render::output::FrameRGBA;

/// Rasterize an SVG document at its intrinsic size.
///
/// Text is resolved against system fonts, plus `font_file` when given.
pub fn rasterize_svg(svg: &str, font_file: Option<&Path>) -> FishResult<FrameRGBA> {
    let mut opts = usvg::Options::default();
    opts.fontdb_mut().load_system_fonts();
    if let Some(path) = font_file {
        opts.fontdb_mut().load_font_file(path).map_err(|e| {
            FishError::render(format!("load font '{}': {e}", path.display()))
        })?;
    }

    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| FishError::render(format!("parse svg tree: {e}")))?;

    let size = tree.size();
    if !size.width().is_finite() || !size.height().is_finite() {
        return Err(FishError::render("svg has invalid width/height"));
    }
    let width = (size.width().ceil() as u32).max(1);
    let height = (size.height().ceil() as u32).max(1);

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| FishError::render("failed to allocate svg pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.take(),
        premultiplied: true,
    })
}
