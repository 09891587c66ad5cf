use std::path::PathBuf;

use crate::config::plot::{BackgroundDef, PlotConfig};
use crate::fish::forest::{LayoutForest, Y_EXTENT};
use crate::foundation::core::{Affine, Point, Rect, Rgba8};
use crate::foundation::error::{FishError, FishResult};
use crate::render::background::GradientBackdrop;
use crate::render::legend::{draw_legend, legend_entries, legend_height};
use crate::render::surface::{StrokeStyle, Surface, TextAnchor, TextBaseline, TextSpec};
use crate::render::traversal::{TraversalParams, draw_clones, validate_colors};

const EDGE_MARGIN: f64 = 10.0;
const GRADIENT_WIDTH: u32 = 8;

/// Where the plot sits on the canvas and how data coordinates map onto it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLayout {
    /// Plot area in pixels.
    pub plot: Rect,
    /// Legend area in pixels (zero height when the legend is off).
    pub legend: Rect,
    /// Leftmost data x (first timepoint minus the padding).
    pub x_min: f64,
    /// Rightmost data x (last timepoint).
    pub x_max: f64,
    /// Data space (x, y-up in `0..=Y_EXTENT`) to pixels.
    pub to_pixels: Affine,
}

impl SceneLayout {
    /// Reserve margins for titles, labels and legend, then fit the data range to the rest.
    pub fn compute(
        size: (f64, f64),
        forest: &LayoutForest,
        config: &PlotConfig,
    ) -> FishResult<Self> {
        let (w, h) = size;
        let (t0, t1) = forest.time_span();
        let pad = config.pad_left * (t1 - t0);
        let x_min = t0 - pad;
        let x_max = if t1 > x_min { t1 } else { x_min + 1.0 };

        let mut top = EDGE_MARGIN;
        if config.title.is_some() {
            top += config.title_px() * 1.5;
        }
        if !config.vlab.is_empty() {
            top += config.vlab_px() * 1.5;
        }
        let mut bottom = EDGE_MARGIN;
        if config.title_btm.is_some() {
            bottom += config.title_px() * 1.5;
        }
        let inner_w = w - 2.0 * EDGE_MARGIN;
        let legend_h = legend_height(&config.legend, forest.len(), inner_w);
        bottom += legend_h;

        let plot = Rect::new(EDGE_MARGIN, top, w - EDGE_MARGIN, h - bottom);
        if plot.width() <= 0.0 || plot.height() <= 0.0 {
            return Err(FishError::validation(format!(
                "canvas {w}x{h} leaves no room for the plot area"
            )));
        }
        let legend = Rect::new(plot.x0, plot.y1, plot.x1, plot.y1 + legend_h);

        let sx = plot.width() / (x_max - x_min);
        let sy = plot.height() / Y_EXTENT;
        let to_pixels = Affine::new([sx, 0.0, 0.0, -sy, plot.x0 - x_min * sx, plot.y1]);

        Ok(Self {
            plot,
            legend,
            x_min,
            x_max,
            to_pixels,
        })
    }
}

/// Paint the background over `plot`. Returns the staged gradient file, which no longer
/// exists by the time this returns.
pub(crate) fn paint_background(
    surface: &mut dyn Surface,
    plot: Rect,
    background: &BackgroundDef,
) -> FishResult<Option<PathBuf>> {
    match background {
        BackgroundDef::Solid { color } => {
            surface.fill_rect(plot, color.to_rgba8())?;
            Ok(None)
        }
        BackgroundDef::Gradient { colors } => {
            let stops = colors.iter().map(|c| c.to_rgba8()).collect::<Vec<_>>();
            let height = (plot.height().round() as u32).max(1);
            let backdrop = GradientBackdrop::create(&stops, GRADIENT_WIDTH, height)?;
            let path = backdrop.path().to_path_buf();
            surface.draw_image(plot, backdrop.image())?;
            Ok(Some(path))
        }
    }
}

/// Draw a complete fish plot onto `surface`.
///
/// Colors are checked against the clone count before anything is drawn.
#[tracing::instrument(skip_all, fields(clones = forest.len(), shape = config.shape.as_str()))]
pub fn draw_fish_plot(
    surface: &mut dyn Surface,
    forest: &LayoutForest,
    colors: &[Rgba8],
    config: &PlotConfig,
) -> FishResult<()> {
    config.validate()?;
    validate_colors(forest, colors)?;

    let (w, h) = surface.size();
    let layout = SceneLayout::compute((w, h), forest, config)?;
    let plot = layout.plot;

    paint_background(surface, plot, &config.background)?;

    let (t0, t1) = forest.time_span();
    let params = TraversalParams {
        mode: config.shape,
        pad: config.pad_left * (t1 - t0),
        ramp_angle: config.ramp_angle,
        border_width: config.border,
        border_color: config.border_color(),
        annotation_style: &config.annotations,
        to_pixels: layout.to_pixels,
    };
    let drawn = draw_clones(surface, forest, colors, &params)?;
    tracing::debug!(drawn, "clones drawn");

    let vline = StrokeStyle {
        color: config.col_vline.to_rgba8(),
        width: 1.0,
    };
    for (i, x) in config.vlines.iter().enumerate() {
        let px = (layout.to_pixels * Point::new(*x, 0.0)).x;
        surface.line(Point::new(px, plot.y0), Point::new(px, plot.y1), vline)?;
        if let Some(label) = config.vlab.get(i) {
            surface.text(
                &TextSpec::new(
                    label,
                    Point::new(px, plot.y0 - config.vlab_px() * 0.25),
                    config.vlab_px(),
                    Rgba8::BLACK,
                )
                .align(TextAnchor::Middle)
                .baseline(TextBaseline::Bottom),
            )?;
        }
    }

    if let Some(title) = &config.title {
        surface.text(
            &TextSpec::new(title, Point::new(w / 2.0, EDGE_MARGIN), config.title_px(), Rgba8::BLACK)
                .align(TextAnchor::Middle)
                .baseline(TextBaseline::Top),
        )?;
    }
    if let Some(title) = &config.title_btm {
        surface.text(
            &TextSpec::new(
                title,
                Point::new(plot.x0, h - EDGE_MARGIN),
                config.title_px(),
                Rgba8::BLACK,
            )
            .align(TextAnchor::Start)
            .baseline(TextBaseline::Bottom),
        )?;
    }

    if config.legend.enabled {
        let entries = legend_entries(forest, colors);
        draw_legend(
            surface,
            layout.legend,
            &entries,
            &config.legend,
            config.border_color(),
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
