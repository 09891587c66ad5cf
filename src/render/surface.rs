use crate::foundation::core::{BezPath, Point, Rect, Rgba8};
use crate::foundation::error::FishResult;

/// Edge paint for paths and lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in pixels.
    pub width: f64,
}

/// Horizontal placement of text relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    #[default]
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

impl TextAnchor {
    /// Fraction of the text width that lies left of the anchor.
    pub fn offset_fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Middle => 0.5,
            Self::End => 1.0,
        }
    }
}

/// Vertical placement of text relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// Anchor is at the top of the line box.
    Top,
    /// Anchor is at the vertical middle of the line box.
    #[default]
    Middle,
    /// Anchor is at the bottom of the line box.
    Bottom,
}

impl TextBaseline {
    /// Fraction of the line height that lies above the anchor.
    pub fn offset_fraction(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Middle => 0.5,
            Self::Bottom => 1.0,
        }
    }
}

/// One single-line text draw.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpec<'a> {
    /// Text content.
    pub text: &'a str,
    /// Anchor point in pixels.
    pub anchor: Point,
    /// Font size in pixels.
    pub size_px: f64,
    /// Fill color.
    pub color: Rgba8,
    /// Horizontal alignment.
    pub align: TextAnchor,
    /// Vertical alignment.
    pub baseline: TextBaseline,
    /// Counter-clockwise rotation around the anchor, in degrees.
    pub angle_deg: f64,
}

impl<'a> TextSpec<'a> {
    /// Left-aligned, vertically centered, unrotated text.
    pub fn new(text: &'a str, anchor: Point, size_px: f64, color: Rgba8) -> Self {
        Self {
            text,
            anchor,
            size_px,
            color,
            align: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            angle_deg: 0.0,
        }
    }

    /// Set the horizontal alignment.
    pub fn align(mut self, align: TextAnchor) -> Self {
        self.align = align;
        self
    }

    /// Set the vertical alignment.
    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Set the rotation.
    pub fn rotated(mut self, angle_deg: f64) -> Self {
        self.angle_deg = angle_deg;
        self
    }
}

/// Drawing target for a fish plot. Coordinates are pixels, y pointing down.
///
/// Calls are painted in submission order; later calls cover earlier ones.
pub trait Surface {
    /// Canvas size in pixels.
    fn size(&self) -> (f64, f64);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Rgba8) -> FishResult<()>;

    /// Stretch an image over `rect`.
    fn draw_image(&mut self, rect: Rect, image: &image::RgbaImage) -> FishResult<()>;

    /// Fill a closed path and optionally stroke its edge.
    fn fill_path(&mut self, path: &BezPath, fill: Rgba8, stroke: Option<StrokeStyle>)
    -> FishResult<()>;

    /// Draw a straight line segment.
    fn line(&mut self, from: Point, to: Point, stroke: StrokeStyle) -> FishResult<()>;

    /// Draw one line of text.
    fn text(&mut self, text: &TextSpec<'_>) -> FishResult<()>;
}

/// Surface that records every call, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) calls: Vec<Call>,
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    Rect(Rect, Rgba8),
    Image(Rect, u32, u32),
    Path(BezPath, Rgba8, Option<StrokeStyle>),
    Line(Point, Point, StrokeStyle),
    Text(String, Point, f64),
}

#[cfg(test)]
impl RecordingSurface {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub(crate) fn paths(&self) -> Vec<&BezPath> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Path(p, ..) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text(t, ..) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) -> FishResult<()> {
        self.calls.push(Call::Rect(rect, color));
        Ok(())
    }

    fn draw_image(&mut self, rect: Rect, image: &image::RgbaImage) -> FishResult<()> {
        self.calls
            .push(Call::Image(rect, image.width(), image.height()));
        Ok(())
    }

    fn fill_path(
        &mut self,
        path: &BezPath,
        fill: Rgba8,
        stroke: Option<StrokeStyle>,
    ) -> FishResult<()> {
        self.calls.push(Call::Path(path.clone(), fill, stroke));
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, stroke: StrokeStyle) -> FishResult<()> {
        self.calls.push(Call::Line(from, to, stroke));
        Ok(())
    }

    fn text(&mut self, text: &TextSpec<'_>) -> FishResult<()> {
        self.calls
            .push(Call::Text(text.text.to_owned(), text.anchor, text.angle_deg));
        Ok(())
    }
}
