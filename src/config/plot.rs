use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::foundation::color::ColorDef;
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{FishError, FishResult};
use crate::geometry::curve::ShapeMode;

/// Text size in pixels at a size multiplier (`cex`) of 1.
pub const BASE_TEXT_PX: f64 = 16.0;

/// Everything that controls how a fish plot looks.
///
/// All fields have defaults, so an empty JSON object is a valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Outline interpolation; unknown names fall back to polygon.
    pub shape: ShapeMode,
    /// Clone border width in pixels; 0 disables borders.
    pub border: f64,
    /// Clone border color; `"none"` (or `null`) strokes with each clone's fill color.
    #[serde(deserialize_with = "de_optional_color")]
    pub col_border: Option<ColorDef>,
    /// Left padding as a fraction of the timepoint span.
    pub pad_left: f64,
    /// Polygon ramp steepness in `[0, 1]`.
    pub ramp_angle: f64,
    /// Plot background.
    pub background: BackgroundDef,
    /// X positions of vertical reference lines.
    pub vlines: Vec<f64>,
    /// Color of vertical reference lines.
    pub col_vline: ColorDef,
    /// Labels drawn above each vertical line (empty or one per line).
    pub vlab: Vec<String>,
    /// Size multiplier for vertical line labels.
    pub cex_vlab: f64,
    /// Title drawn above the plot.
    pub title: Option<String>,
    /// Title drawn below the plot, left-aligned.
    pub title_btm: Option<String>,
    /// Size multiplier shared by both titles.
    pub cex_title: f64,
    /// Font used for every label.
    pub font: FontSpec,
    /// Styling of per-clone origin annotations.
    pub annotations: AnnotationStyle,
    /// Legend beneath the plot.
    pub legend: LegendDef,
    /// Spread independent root clones apart instead of stacking them.
    pub separate_independent_clones: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            shape: ShapeMode::Polygon,
            border: 0.5,
            col_border: Some(ColorDef::from(Rgba8::rgb(0x77, 0x77, 0x77))),
            pad_left: 0.2,
            ramp_angle: 0.5,
            background: BackgroundDef::default(),
            vlines: Vec::new(),
            col_vline: ColorDef::from(Rgba8::rgba(0xff, 0xff, 0xff, 0x99)),
            vlab: Vec::new(),
            cex_vlab: 0.7,
            title: None,
            title_btm: None,
            cex_title: 1.0,
            font: FontSpec::default(),
            annotations: AnnotationStyle::default(),
            legend: LegendDef::default(),
            separate_independent_clones: false,
        }
    }
}

impl PlotConfig {
    /// Check ranges that serde cannot express.
    pub fn validate(&self) -> FishResult<()> {
        self.canvas.validate()?;
        for (name, value) in [
            ("border", self.border),
            ("pad_left", self.pad_left),
            ("cex_vlab", self.cex_vlab),
            ("cex_title", self.cex_title),
            ("annotations.size", self.annotations.size),
            ("legend.cex", self.legend.cex),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FishError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.ramp_angle) {
            return Err(FishError::validation("ramp_angle must be within [0, 1]"));
        }
        if !self.annotations.angle.is_finite() || !self.annotations.offset.is_finite() {
            return Err(FishError::validation(
                "annotations.angle and annotations.offset must be finite",
            ));
        }
        if self.vlines.iter().any(|v| !v.is_finite()) {
            return Err(FishError::validation("vlines must be finite"));
        }
        if !self.vlab.is_empty() && self.vlab.len() != self.vlines.len() {
            return Err(FishError::validation(format!(
                "got {} vlab labels for {} vlines",
                self.vlab.len(),
                self.vlines.len()
            )));
        }
        if let BackgroundDef::Gradient { colors } = &self.background
            && colors.is_empty()
        {
            return Err(FishError::validation(
                "gradient background needs at least one color",
            ));
        }
        if self.legend.columns == Some(0) {
            return Err(FishError::validation("legend.columns must be > 0"));
        }
        Ok(())
    }

    /// Border color, if one is configured.
    pub fn border_color(&self) -> Option<Rgba8> {
        self.col_border.map(ColorDef::to_rgba8)
    }

    /// Title size in pixels.
    pub fn title_px(&self) -> f64 {
        BASE_TEXT_PX * self.cex_title
    }

    /// Vertical line label size in pixels.
    pub fn vlab_px(&self) -> f64 {
        BASE_TEXT_PX * self.cex_vlab
    }
}

/// Plot background.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackgroundDef {
    /// Vertical gradient through `colors`, top to bottom.
    Gradient {
        /// Gradient stops, evenly spaced.
        colors: Vec<ColorDef>,
    },
    /// One flat color.
    Solid {
        /// Fill color.
        color: ColorDef,
    },
}

impl Default for BackgroundDef {
    fn default() -> Self {
        // bisque, darkgoldenrod1, darkorange3
        Self::Gradient {
            colors: vec![
                ColorDef::from(Rgba8::rgb(0xff, 0xe4, 0xc4)),
                ColorDef::from(Rgba8::rgb(0xff, 0xb9, 0x0f)),
                ColorDef::from(Rgba8::rgb(0xcd, 0x66, 0x00)),
            ],
        }
    }
}

/// Font selection shared by all text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    /// Family name written into SVG output and used for system font lookup.
    pub family: String,
    /// Bold weight.
    pub bold: bool,
    /// Font file; required for text on the CPU raster surface.
    pub path: Option<PathBuf>,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_owned(),
            bold: true,
            path: None,
        }
    }
}

/// Side of the origin an annotation is placed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationPosition {
    /// Below the origin.
    Below,
    /// Left of the origin.
    #[default]
    Left,
    /// Above the origin.
    Above,
    /// Right of the origin.
    Right,
}

/// Styling of per-clone origin annotations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationStyle {
    /// Rotation in degrees, counter-clockwise.
    pub angle: f64,
    /// Text color.
    pub color: ColorDef,
    /// Placement relative to the origin.
    pub position: AnnotationPosition,
    /// Size multiplier.
    pub size: f64,
    /// Distance from the origin in multiples of the text size.
    pub offset: f64,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            angle: 0.0,
            color: ColorDef::from(Rgba8::BLACK),
            position: AnnotationPosition::Left,
            size: 0.7,
            offset: 0.2,
        }
    }
}

impl AnnotationStyle {
    /// Text size in pixels.
    pub fn size_px(&self) -> f64 {
        BASE_TEXT_PX * self.size
    }
}

/// Legend beneath the plot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendDef {
    /// Draw the legend.
    pub enabled: bool,
    /// Fixed column count; chosen from the canvas width when absent.
    pub columns: Option<usize>,
    /// Size multiplier for legend labels.
    pub cex: f64,
}

impl Default for LegendDef {
    fn default() -> Self {
        Self {
            enabled: false,
            columns: None,
            cex: 0.7,
        }
    }
}

impl LegendDef {
    /// Label size in pixels.
    pub fn size_px(&self) -> f64 {
        BASE_TEXT_PX * self.cex
    }
}

fn de_optional_color<'de, D>(deserializer: D) -> Result<Option<ColorDef>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        None(NoneTag),
        Color(ColorDef),
    }

    #[derive(Deserialize)]
    enum NoneTag {
        #[serde(rename = "none", alias = "NONE", alias = "None", alias = "NA")]
        None,
    }

    Ok(match Option::<Repr>::deserialize(deserializer)? {
        None | Some(Repr::None(_)) => None,
        Some(Repr::Color(c)) => Some(c),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/config/plot.rs"]
mod tests;
