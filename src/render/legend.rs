use crate::config::plot::LegendDef;
use crate::fish::forest::LayoutForest;
use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::FishResult;
use crate::render::surface::{StrokeStyle, Surface, TextAnchor, TextBaseline, TextSpec};

/// Horizontal room one automatically placed legend column needs, in pixels.
pub const LEGEND_ENTRY_WIDTH: f64 = 160.0;

const ROW_SPACING: f64 = 1.6;

/// One swatch and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Swatch color.
    pub color: Rgba8,
    /// Label text.
    pub label: String,
}

/// Entries in clone index order; unlabeled clones are named `clone N` (1-based).
pub fn legend_entries(forest: &LayoutForest, colors: &[Rgba8]) -> Vec<LegendEntry> {
    forest
        .clones()
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(i, (c, color))| LegendEntry {
            color: *color,
            label: c
                .label
                .clone()
                .unwrap_or_else(|| format!("clone {}", i + 1)),
        })
        .collect()
}

/// Column count: the configured one, or as many [`LEGEND_ENTRY_WIDTH`] columns as fit.
/// Never more than the entry count, never less than one.
pub fn legend_columns(def: &LegendDef, entries: usize, width: f64) -> usize {
    let auto = || ((width / LEGEND_ENTRY_WIDTH).floor() as usize).max(1);
    def.columns
        .unwrap_or_else(auto)
        .min(entries)
        .max(1)
}

/// Pixel height the legend occupies beneath the plot.
pub fn legend_height(def: &LegendDef, entries: usize, width: f64) -> f64 {
    if !def.enabled || entries == 0 {
        return 0.0;
    }
    let rows = entries.div_ceil(legend_columns(def, entries, width));
    rows as f64 * def.size_px() * ROW_SPACING + def.size_px()
}

/// Draw `entries` column-major inside `area`.
pub fn draw_legend(
    surface: &mut dyn Surface,
    area: Rect,
    entries: &[LegendEntry],
    def: &LegendDef,
    border: Option<Rgba8>,
) -> FishResult<()> {
    if entries.is_empty() {
        return Ok(());
    }
    let cols = legend_columns(def, entries.len(), area.width());
    let rows = entries.len().div_ceil(cols);
    let col_w = area.width() / cols as f64;
    let size = def.size_px();
    let row_h = size * ROW_SPACING;

    for (i, entry) in entries.iter().enumerate() {
        let (col, row) = (i / rows, i % rows);
        let x = area.x0 + col as f64 * col_w + size / 2.0;
        let y = area.y0 + size / 2.0 + row as f64 * row_h;
        let swatch = Rect::new(x, y, x + size, y + size);

        let mut path = kurbo::BezPath::new();
        path.move_to((swatch.x0, swatch.y0));
        path.line_to((swatch.x1, swatch.y0));
        path.line_to((swatch.x1, swatch.y1));
        path.line_to((swatch.x0, swatch.y1));
        path.close_path();
        surface.fill_path(
            &path,
            entry.color,
            Some(StrokeStyle {
                color: border.unwrap_or(entry.color),
                width: 1.0,
            }),
        )?;
        surface.text(
            &TextSpec::new(
                &entry.label,
                Point::new(swatch.x1 + size / 2.0, swatch.center().y),
                size,
                Rgba8::BLACK,
            )
            .align(TextAnchor::Start)
            .baseline(TextBaseline::Middle),
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/legend.rs"]
mod tests;
