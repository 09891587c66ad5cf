use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{FishError, FishResult};

/// Vertical gradient image staged through a temporary PNG file.
///
/// The file lives exactly as long as this value; dropping it removes the file on every path
/// out of the scene, including errors.
pub struct GradientBackdrop {
    file: tempfile::NamedTempFile,
    image: image::RgbaImage,
}

impl GradientBackdrop {
    /// Write a `width` x `height` gradient through `colors` (top to bottom) to a temporary
    /// file and read it back.
    pub fn create(colors: &[Rgba8], width: u32, height: u32) -> FishResult<Self> {
        if colors.is_empty() {
            return Err(FishError::validation("gradient needs at least one color"));
        }
        if width == 0 || height == 0 {
            return Err(FishError::validation("gradient size must be > 0"));
        }

        let img = gradient_image(colors, width, height);
        let file = tempfile::Builder::new()
            .prefix("fishplot-bg-")
            .suffix(".png")
            .tempfile()
            .context("create gradient temp file")?;
        img.save_with_format(file.path(), image::ImageFormat::Png)
            .with_context(|| format!("write gradient '{}'", file.path().display()))?;

        let image = image::open(file.path())
            .with_context(|| format!("read gradient '{}'", file.path().display()))?
            .to_rgba8();
        tracing::debug!(path = %file.path().display(), width, height, "staged gradient background");

        Ok(Self { file, image })
    }

    /// Location of the staged file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Decoded gradient pixels.
    pub fn image(&self) -> &image::RgbaImage {
        &self.image
    }
}

/// Evenly spaced stops interpolated row by row.
fn gradient_image(colors: &[Rgba8], width: u32, height: u32) -> image::RgbaImage {
    let segments = colors.len().saturating_sub(1);
    image::RgbaImage::from_fn(width, height, |_, y| {
        let c = if segments == 0 || height == 1 {
            colors[0]
        } else {
            let t = f64::from(y) / f64::from(height - 1) * segments as f64;
            let i = (t.floor() as usize).min(segments - 1);
            colors[i].lerp(colors[i + 1], t - i as f64)
        };
        image::Rgba([c.r, c.g, c.b, c.a])
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
