use std::path::Path;

use anyhow::Context as _;

use crate::config::plot::PlotConfig;
use crate::fish::data::FishData;
use crate::fish::forest::LayoutForest;
use crate::fish::input::FishDocument;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{FishError, FishResult};
use crate::layout::solver::{LayoutOpts, layout_clones};
use crate::render::cpu::CpuSurface;
use crate::render::output::{FrameRGBA, RasterBackend};
use crate::render::raster::rasterize_svg;
use crate::render::scene::draw_fish_plot;
use crate::render::surface::Surface;
use crate::render::svg::SvgSurface;
use crate::render::traversal::validate_colors;

/// A laid-out fish plot ready to draw.
///
/// Holds the clone forest, one color per clone and the configuration. Every output path
/// goes through [`FishPlot::draw`].
#[derive(Clone, Debug)]
pub struct FishPlot {
    forest: LayoutForest,
    colors: Vec<Rgba8>,
    config: PlotConfig,
}

impl FishPlot {
    /// Build from a precomputed forest.
    pub fn new(forest: LayoutForest, colors: Vec<Rgba8>, config: PlotConfig) -> FishResult<Self> {
        config.validate()?;
        validate_colors(&forest, &colors)?;
        Ok(Self {
            forest,
            colors,
            config,
        })
    }

    /// Lay out a fraction table and build the plot.
    pub fn from_data(data: &FishData, colors: Vec<Rgba8>, config: PlotConfig) -> FishResult<Self> {
        let opts = LayoutOpts {
            separate_independent_clones: config.separate_independent_clones,
        };
        let forest = layout_clones(data, opts)?;
        Self::new(forest, colors, config)
    }

    /// Build from a parsed input document.
    pub fn from_document(doc: &FishDocument) -> FishResult<Self> {
        Self::from_data(&doc.to_data()?, doc.resolved_colors(), doc.config.clone())
    }

    /// Read a JSON input document and build the plot.
    pub fn from_path(path: &Path) -> FishResult<Self> {
        Self::from_document(&FishDocument::from_path(path)?)
    }

    /// Clone forest.
    pub fn forest(&self) -> &LayoutForest {
        &self.forest
    }

    /// Clone colors in index order.
    pub fn colors(&self) -> &[Rgba8] {
        &self.colors
    }

    /// Plot configuration.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Paint onto any surface.
    pub fn draw(&self, surface: &mut dyn Surface) -> FishResult<()> {
        draw_fish_plot(surface, &self.forest, &self.colors, &self.config)
    }

    /// Render an SVG document.
    pub fn to_svg(&self) -> FishResult<String> {
        let mut surface = SvgSurface::new(self.config.canvas, &self.config.font);
        self.draw(&mut surface)?;
        Ok(surface.finish())
    }

    /// Render to premultiplied pixels.
    pub fn to_frame(&self, backend: RasterBackend) -> FishResult<FrameRGBA> {
        let font = self.config.font.path.as_deref();
        match backend {
            RasterBackend::Cpu => {
                let mut surface = CpuSurface::new(self.config.canvas)?;
                if let Some(path) = font {
                    surface = surface.with_font_file(path)?;
                }
                self.draw(&mut surface)?;
                Ok(surface.finish())
            }
            RasterBackend::Resvg => rasterize_svg(&self.to_svg()?, font),
        }
    }

    /// Write `.svg` or `.png` output, chosen by the file extension.
    pub fn write(&self, path: &Path, backend: RasterBackend) -> FishResult<()> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("svg") => {
                let svg = self.to_svg()?;
                std::fs::write(path, svg)
                    .with_context(|| format!("write svg '{}'", path.display()))?;
                Ok(())
            }
            Some("png") => self.to_frame(backend)?.save_png(path),
            _ => Err(FishError::validation(format!(
                "unsupported output '{}' (expected .svg or .png)",
                path.display()
            ))),
        }
    }
}
