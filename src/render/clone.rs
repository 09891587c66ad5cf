use crate::config::plot::{AnnotationPosition, AnnotationStyle};
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::FishResult;
use crate::geometry::curve::ShapeOutline;
use crate::render::surface::{StrokeStyle, Surface, TextAnchor, TextBaseline, TextSpec};

/// Paint parameters for one clone shape.
#[derive(Clone, Debug)]
pub struct CloneStyle<'a> {
    /// Fill color.
    pub fill: Rgba8,
    /// Edge width in pixels; 0 disables the edge.
    pub border_width: f64,
    /// Edge color; `None` paints the edge with the fill color.
    pub border_color: Option<Rgba8>,
    /// Text drawn at the clone's origin.
    pub annotation: Option<&'a str>,
    /// Placement and styling of `annotation`.
    pub annotation_style: &'a AnnotationStyle,
}

impl CloneStyle<'_> {
    /// Edge stroke, if one is drawn.
    pub fn stroke(&self) -> Option<StrokeStyle> {
        (self.border_width > 0.0).then(|| StrokeStyle {
            color: self.border_color.unwrap_or(self.fill),
            width: self.border_width,
        })
    }
}

/// Anchor and alignment of an annotation placed around `origin`.
pub fn annotation_anchor(
    origin: Point,
    style: &AnnotationStyle,
) -> (Point, TextAnchor, TextBaseline) {
    let off = style.offset * style.size_px();
    match style.position {
        AnnotationPosition::Below => (
            Point::new(origin.x, origin.y + off),
            TextAnchor::Middle,
            TextBaseline::Top,
        ),
        AnnotationPosition::Left => (
            Point::new(origin.x - off, origin.y),
            TextAnchor::End,
            TextBaseline::Middle,
        ),
        AnnotationPosition::Above => (
            Point::new(origin.x, origin.y - off),
            TextAnchor::Middle,
            TextBaseline::Bottom,
        ),
        AnnotationPosition::Right => (
            Point::new(origin.x + off, origin.y),
            TextAnchor::Start,
            TextBaseline::Middle,
        ),
    }
}

/// Submit one clone: its filled outline, then its annotation when non-empty.
///
/// `outline` must already be in surface pixels.
pub fn draw_clone(
    surface: &mut dyn Surface,
    outline: &ShapeOutline,
    style: &CloneStyle<'_>,
) -> FishResult<()> {
    surface.fill_path(&outline.to_path(), style.fill, style.stroke())?;

    if let Some(text) = style.annotation
        && !text.is_empty()
    {
        let s = style.annotation_style;
        let (anchor, align, baseline) = annotation_anchor(outline.start, s);
        surface.text(
            &TextSpec::new(text, anchor, s.size_px(), s.color.to_rgba8())
                .align(align)
                .baseline(baseline)
                .rotated(s.angle),
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/clone.rs"]
mod tests;
