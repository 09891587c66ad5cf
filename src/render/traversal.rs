use std::collections::VecDeque;

use crate::config::plot::AnnotationStyle;
use crate::fish::forest::{LayoutForest, Y_EXTENT};
use crate::foundation::core::{Affine, Rgba8};
use crate::foundation::error::{FishError, FishResult};
use crate::geometry::curve::{CurveParams, ShapeMode, build_outline};
use crate::render::clone::{CloneStyle, draw_clone};
use crate::render::surface::Surface;

/// Share of the configured left padding given to non-root clones.
pub const CHILD_PAD_FACTOR: f64 = 0.4;

/// Left padding for a clone: the full pad for roots, [`CHILD_PAD_FACTOR`] of it otherwise.
pub fn clone_padding(pad: f64, parent: Option<usize>) -> f64 {
    match parent {
        None => pad,
        Some(_) => pad * CHILD_PAD_FACTOR,
    }
}

/// Breadth-first order in which clones are painted; parents always precede children.
pub fn traversal_order(forest: &LayoutForest) -> Vec<usize> {
    let mut order = Vec::with_capacity(forest.len());
    let mut queue = VecDeque::from([None]);
    while let Some(parent) = queue.pop_front() {
        for child in forest.children_of(parent) {
            order.push(child);
            queue.push_back(Some(child));
        }
    }
    order
}

/// Fail unless there is exactly one color per clone.
pub fn validate_colors(forest: &LayoutForest, colors: &[Rgba8]) -> FishResult<()> {
    if colors.len() != forest.len() {
        return Err(FishError::validation(format!(
            "got {} colors for {} clones",
            colors.len(),
            forest.len()
        )));
    }
    Ok(())
}

/// Shape and paint settings shared by every clone in one traversal.
#[derive(Clone, Debug)]
pub struct TraversalParams<'a> {
    /// Outline interpolation.
    pub mode: ShapeMode,
    /// Left padding in timepoint units, before the per-clone factor.
    pub pad: f64,
    /// Polygon ramp steepness.
    pub ramp_angle: f64,
    /// Edge width in pixels.
    pub border_width: f64,
    /// Edge color; `None` uses each clone's fill.
    pub border_color: Option<Rgba8>,
    /// Annotation styling.
    pub annotation_style: &'a AnnotationStyle,
    /// Data space to surface pixels.
    pub to_pixels: Affine,
}

/// Paint every clone in traversal order. Returns the number of shapes drawn.
pub fn draw_clones(
    surface: &mut dyn Surface,
    forest: &LayoutForest,
    colors: &[Rgba8],
    params: &TraversalParams<'_>,
) -> FishResult<usize> {
    validate_colors(forest, colors)?;

    let mut drawn = 0;
    for idx in traversal_order(forest) {
        let Some(clone) = forest.get(idx) else {
            continue;
        };
        let curve = CurveParams {
            mode: params.mode,
            nest_level: clone.nest_level,
            pad_left: clone_padding(params.pad, clone.parent),
            ramp_angle: params.ramp_angle,
            plot_height: Y_EXTENT,
        };
        let Some(outline) = build_outline(&clone.points, &curve) else {
            tracing::info!(clone = idx, "clone has no control points; skipping");
            continue;
        };
        tracing::debug!(
            clone = idx,
            nest_level = clone.nest_level,
            vertices = outline.vertices.len(),
            "drawing clone"
        );

        let style = CloneStyle {
            fill: colors[idx],
            border_width: params.border_width,
            border_color: params.border_color,
            annotation: clone.annotation.as_deref(),
            annotation_style: params.annotation_style,
        };
        draw_clone(surface, &outline.transformed(params.to_pixels), &style)?;
        drawn += 1;
    }
    Ok(drawn)
}

#[cfg(test)]
#[path = "../../tests/unit/render/traversal.rs"]
mod tests;
