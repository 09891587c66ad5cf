use crate::fish::data::FishData;
use crate::fish::forest::{ControlPoint, LayoutForest, Subclone, Y_EXTENT};
use crate::foundation::error::FishResult;

/// Options for [`layout_clones`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutOpts {
    /// Spread root clones apart with equal gaps instead of stacking them around the center.
    pub separate_independent_clones: bool,
}

/// Vertical band `[bottom, top]` of every clone at one timepoint.
pub fn bands_at(data: &FishData, t: usize, opts: LayoutOpts) -> Vec<(f64, f64)> {
    let n = data.len();
    let mut children = vec![Vec::new(); n];
    let mut roots = Vec::new();
    for (i, p) in data.parents().iter().enumerate() {
        match *p {
            Some(p) => children[p].push(i),
            None => roots.push(i),
        }
    }

    let mut bands = vec![(0.0, 0.0); n];
    let root_sum: f64 = roots.iter().map(|&r| data.fraction(r, t)).sum();
    let (mut cursor, gap) = if opts.separate_independent_clones {
        let gap = ((Y_EXTENT - root_sum) / (roots.len() + 1) as f64).max(0.0);
        (gap, gap)
    } else {
        ((Y_EXTENT - root_sum) / 2.0, 0.0)
    };

    // Parents are placed before children; each entry is (clone, bottom of its band).
    let mut stack = Vec::with_capacity(n);
    for &r in &roots {
        stack.push((r, cursor));
        cursor += data.fraction(r, t) + gap;
    }
    while let Some((i, bottom)) = stack.pop() {
        let f = data.fraction(i, t);
        bands[i] = (bottom, bottom + f);

        let kids = &children[i];
        if kids.is_empty() {
            continue;
        }
        let kid_sum: f64 = kids.iter().map(|&c| data.fraction(c, t)).sum();
        let gap = ((f - kid_sum) / (kids.len() + 1) as f64).max(0.0);
        let mut c = bottom + gap;
        for &k in kids {
            stack.push((k, c));
            c += data.fraction(k, t) + gap;
        }
    }
    bands
}

/// Control points of one clone given its band at every timepoint.
///
/// The clone spans from its first non-zero timepoint to its last, plus the following
/// timepoint where it narrows to a point. Zero-fraction timepoints inside that span keep a
/// zero-width band.
fn clone_points(
    fractions: &[f64],
    timepoints: &[f64],
    bands: &[(f64, f64)],
) -> Vec<ControlPoint> {
    let Some(first) = fractions.iter().position(|f| *f > 0.0) else {
        return Vec::new();
    };
    let last = fractions.iter().rposition(|f| *f > 0.0).unwrap_or(first);
    let end = (last + 1).min(timepoints.len() - 1);
    (first..=end)
        .map(|t| {
            let (bottom, top) = bands[t];
            ControlPoint::new(timepoints[t], top, bottom)
        })
        .collect()
}

/// Lay out every clone's control points from a validated fraction table.
#[tracing::instrument(skip(data), fields(clones = data.len(), timepoints = data.timepoints().len()))]
pub fn layout_clones(data: &FishData, opts: LayoutOpts) -> FishResult<LayoutForest> {
    let timepoints = data.timepoints();
    let per_time = (0..timepoints.len())
        .map(|t| bands_at(data, t, opts))
        .collect::<Vec<_>>();

    let clones = (0..data.len())
        .map(|i| {
            let bands = per_time.iter().map(|b| b[i]).collect::<Vec<_>>();
            Subclone {
                points: clone_points(&data.fractions()[i], timepoints, &bands),
                nest_level: data.nest_levels()[i],
                parent: data.parents()[i],
                annotation: data.annotations()[i].clone(),
                label: data.labels()[i].clone(),
            }
        })
        .collect();

    LayoutForest::new(clones, timepoints.to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
