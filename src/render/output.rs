use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{FishError, FishResult};

/// A rendered image as RGBA8 pixels.
///
/// Raster surfaces produce premultiplied pixels; the flag records which form `data` holds.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixels.
    pub fn to_straight(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut out);
        }
        out
    }

    /// Pixel at `(x, y)` as stored.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Encode the frame as PNG (straight alpha).
    pub fn save_png(&self, path: &Path) -> FishResult<()> {
        if self.data.len() != (self.width as usize) * (self.height as usize) * 4 {
            return Err(FishError::render("frame byte length does not match its size"));
        }
        image::save_buffer_with_format(
            path,
            &self.to_straight(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

/// How PNG output is rasterized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RasterBackend {
    /// Draw directly with `vello_cpu`; text needs a configured font file.
    #[default]
    Cpu,
    /// Render the SVG document with `resvg`, using system fonts.
    Resvg,
}

impl std::str::FromStr for RasterBackend {
    type Err = FishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpu" => Ok(Self::Cpu),
            "resvg" | "svg" => Ok(Self::Resvg),
            other => Err(FishError::validation(format!(
                "unknown raster backend '{other}' (expected cpu or resvg)"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/output.rs"]
mod tests;
