//! fishplot draws fish plots: stacked, branching shapes that show how subclonal cell
//! populations grow, shrink and nest over time.
//!
//! The pipeline is:
//!
//! - Validate a fraction table into [`FishData`] (or parse a [`FishDocument`])
//! - Lay it out into a [`LayoutForest`] of per-clone control points
//! - Draw a [`FishPlot`] onto a [`Surface`]: [`SvgSurface`], [`CpuSurface`], or your own
//!
//! ```no_run
//! # fn main() -> fishplot::FishResult<()> {
//! let data = fishplot::FishData::new(
//!     vec![0.0, 30.0, 75.0, 150.0],
//!     vec![vec![100.0, 45.0, 0.0, 0.0], vec![2.0, 44.0, 0.0, 0.0]],
//!     vec![None, Some(0)],
//! )?;
//! let colors = fishplot::default_palette(data.len());
//! let plot = fishplot::FishPlot::from_data(&data, colors, fishplot::PlotConfig::default())?;
//! std::fs::write("fish.svg", plot.to_svg()?).map_err(anyhow::Error::from)?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod fish;
mod foundation;
mod geometry;
mod layout;
mod plot;
mod render;

pub use crate::config::plot::{
    AnnotationPosition, AnnotationStyle, BASE_TEXT_PX, BackgroundDef, FontSpec, LegendDef,
    PlotConfig,
};
pub use crate::fish::data::{FRACTION_TOLERANCE, FishData};
pub use crate::fish::forest::{ControlPoint, LayoutForest, Subclone, Y_EXTENT, nest_levels};
pub use crate::fish::input::{CloneDef, FishDocument, default_palette};
pub use crate::foundation::color::ColorDef;
pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{FishError, FishResult};
pub use crate::geometry::curve::{
    CURVE_SAMPLES, CurveParams, NEST_DECAY, ShapeMode, ShapeOutline, build_outline,
    replicate_points, start_point,
};
pub use crate::geometry::interp::{NaturalSpline, bezier_samples};
pub use crate::layout::solver::{LayoutOpts, bands_at, layout_clones};
pub use crate::plot::FishPlot;
pub use crate::render::background::GradientBackdrop;
pub use crate::render::clone::{CloneStyle, annotation_anchor, draw_clone};
pub use crate::render::cpu::CpuSurface;
pub use crate::render::legend::{LEGEND_ENTRY_WIDTH, LegendEntry, legend_columns, legend_entries};
pub use crate::render::output::{FrameRGBA, RasterBackend};
pub use crate::render::raster::rasterize_svg;
pub use crate::render::scene::{SceneLayout, draw_fish_plot};
pub use crate::render::surface::{StrokeStyle, Surface, TextAnchor, TextBaseline, TextSpec};
pub use crate::render::svg::SvgSurface;
pub use crate::render::traversal::{
    CHILD_PAD_FACTOR, TraversalParams, clone_padding, draw_clones, traversal_order,
    validate_colors,
};
