//! Clone outline construction.
//!
//! Every clone starts at an artificial origin left of its first control point. From there the
//! outline ramps up to the measured band and follows the top and bottom edges across the
//! timepoints. Three interpolation strategies are available through [`ShapeMode`].

use serde::{Deserialize, Serialize};

use crate::fish::forest::{ControlPoint, Y_EXTENT};
use crate::foundation::core::{Affine, BezPath, Point};
use crate::geometry::interp::{NaturalSpline, bezier_samples};

/// Per-level decay applied to the left padding, so nested clones ramp up faster.
pub const NEST_DECAY: f64 = 0.6;
/// Number of samples taken along each fitted edge.
pub const CURVE_SAMPLES: usize = 100;
/// Flank as a fraction of the clone's x-range in bezier mode.
pub const BEZIER_FLANK: f64 = 0.01;
/// Flank as a fraction of the clone's x-range in spline mode.
pub const SPLINE_FLANK: f64 = 0.001;
/// Spline starts whose y falls outside this band (fraction of plot height) are pulled right.
pub const SPLINE_CENTRAL_BAND: (f64, f64) = (0.15, 0.85);

/// Interpolation strategy for clone outlines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeMode {
    /// Straight segments with a single ramp point.
    #[default]
    Polygon,
    /// One high-degree Bezier curve per edge.
    Bezier,
    /// Natural cubic spline per edge.
    Spline,
}

impl ShapeMode {
    /// Parse a mode name. Unknown names fall back to [`ShapeMode::Polygon`] with a warning.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "polygon" => Self::Polygon,
            "bezier" => Self::Bezier,
            "spline" => Self::Spline,
            other => {
                tracing::warn!(shape = other, "unknown shape mode; falling back to polygon");
                Self::Polygon
            }
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Polygon => "polygon",
            Self::Bezier => "bezier",
            Self::Spline => "spline",
        }
    }
}

impl Serialize for ShapeMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ShapeMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&s))
    }
}

/// Inputs for [`build_outline`] besides the control points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveParams {
    /// Interpolation strategy.
    pub mode: ShapeMode,
    /// Depth of the clone in the parent tree.
    pub nest_level: u32,
    /// Left padding before decay, in timepoint units.
    pub pad_left: f64,
    /// Polygon ramp steepness in `[0, 1]`; 0 keeps the ramp flat at the origin height.
    pub ramp_angle: f64,
    /// Total plot height the spline band check is measured against.
    pub plot_height: f64,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            mode: ShapeMode::Polygon,
            nest_level: 0,
            pad_left: 0.0,
            ramp_angle: 0.5,
            plot_height: Y_EXTENT,
        }
    }
}

/// Closed clone outline in data space.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeOutline {
    /// Origin of the clone; annotations are anchored here.
    pub start: Point,
    /// Outline vertices in drawing order.
    pub vertices: Vec<Point>,
}

impl ShapeOutline {
    /// Return `true` when the first and last vertices coincide.
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(a), Some(b)) => (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            _ => false,
        }
    }

    /// Map every vertex (and the origin) through `a`.
    pub fn transformed(&self, a: Affine) -> Self {
        Self {
            start: a * self.start,
            vertices: self.vertices.iter().map(|p| a * *p).collect(),
        }
    }

    /// Filled-path form of the outline.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut it = self.vertices.iter();
        if let Some(first) = it.next() {
            path.move_to(*first);
            for p in it {
                path.line_to(*p);
            }
            path.close_path();
        }
        path
    }
}

/// Origin of a clone: left of the first control point by `pad_left * NEST_DECAY^nest_level`,
/// vertically centered on the first band.
pub fn start_point(points: &[ControlPoint], nest_level: u32, pad_left: f64) -> Option<Point> {
    let first = points.first()?;
    let x = first.x - pad_left * NEST_DECAY.powi(nest_level.min(i32::MAX as u32) as i32);
    Some(Point::new(x, first.mid()))
}

/// Replace every control point with five copies at `x - 2f, x - f, x, x + f, x + 2f`.
pub fn replicate_points(points: &[ControlPoint], flank: f64) -> Vec<ControlPoint> {
    points
        .iter()
        .flat_map(|p| {
            [-2.0, -1.0, 0.0, 1.0, 2.0]
                .into_iter()
                .map(move |k| ControlPoint::new(p.x + k * flank, p.top, p.bottom))
        })
        .collect()
}

/// Build the closed outline for one clone. Returns `None` for clones without control points.
pub fn build_outline(points: &[ControlPoint], params: &CurveParams) -> Option<ShapeOutline> {
    let start = start_point(points, params.nest_level, params.pad_left)?;
    Some(match params.mode {
        ShapeMode::Polygon => polygon_outline(points, start, params.ramp_angle),
        ShapeMode::Bezier => bezier_outline(points, start),
        ShapeMode::Spline => spline_outline(points, start, params.plot_height),
    })
}

fn x_range(points: &[ControlPoint], start: Point) -> f64 {
    let last = points.iter().map(|p| p.x).fold(start.x, f64::max);
    last - start.x
}

fn polygon_outline(points: &[ControlPoint], start: Point, ramp_angle: f64) -> ShapeOutline {
    let first = points[0];
    let ramp_x = (start.x + first.x) / 2.0;
    let ramp_top = Point::new(ramp_x, start.y + (first.top - start.y) * ramp_angle);
    let ramp_bottom = Point::new(ramp_x, start.y + (first.bottom - start.y) * ramp_angle);

    let mut vertices = Vec::with_capacity(points.len() * 2 + 4);
    vertices.push(start);
    vertices.push(ramp_bottom);
    vertices.extend(points.iter().map(|p| Point::new(p.x, p.bottom)));
    vertices.extend(points.iter().rev().map(|p| Point::new(p.x, p.top)));
    vertices.push(ramp_top);
    vertices.push(start);
    ShapeOutline { start, vertices }
}

fn bezier_outline(points: &[ControlPoint], start: Point) -> ShapeOutline {
    let flank = x_range(points, start) * BEZIER_FLANK;
    let expanded = replicate_points(points, flank);

    let top = std::iter::once(start)
        .chain(expanded.iter().map(|p| Point::new(p.x, p.top)))
        .collect::<Vec<_>>();
    let bottom = std::iter::once(start)
        .chain(expanded.iter().map(|p| Point::new(p.x, p.bottom)))
        .collect::<Vec<_>>();

    join_edges(
        start,
        bezier_samples(&top, CURVE_SAMPLES),
        bezier_samples(&bottom, CURVE_SAMPLES),
    )
}

fn spline_outline(points: &[ControlPoint], start: Point, plot_height: f64) -> ShapeOutline {
    let flank = x_range(points, start) * SPLINE_FLANK;
    let expanded = replicate_points(points, flank);

    let (lo, hi) = SPLINE_CENTRAL_BAND;
    let mut start = start;
    if start.y < plot_height * lo || start.y > plot_height * hi {
        start.x = (start.x + points[0].x) / 2.0;
    }
    let origin = [-2.0, 0.0, 2.0].map(|k| Point::new(start.x + k * flank, start.y));

    let top = origin
        .iter()
        .copied()
        .chain(expanded.iter().map(|p| Point::new(p.x, p.top)))
        .collect::<Vec<_>>();
    let bottom = origin
        .iter()
        .copied()
        .chain(expanded.iter().map(|p| Point::new(p.x, p.bottom)))
        .collect::<Vec<_>>();

    let sample = |knots: &[Point]| {
        NaturalSpline::fit(knots)
            .map(|s| s.samples(CURVE_SAMPLES))
            .unwrap_or_default()
    };
    join_edges(start, sample(&top), sample(&bottom))
}

fn join_edges(start: Point, top: Vec<Point>, bottom: Vec<Point>) -> ShapeOutline {
    let mut vertices = top;
    vertices.extend(bottom.into_iter().rev());
    ShapeOutline { start, vertices }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/curve.rs"]
mod tests;
