use serde::{Deserialize, Serialize};

use crate::foundation::error::{FishError, FishResult};

/// Height of the vertical band every fish plot is laid out in (population percent).
pub const Y_EXTENT: f64 = 100.0;

/// One sample of a clone's outline: its top and bottom edge at a timepoint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Position on the timepoint axis.
    pub x: f64,
    /// Upper edge, in `0..=Y_EXTENT`.
    pub top: f64,
    /// Lower edge, in `0..=Y_EXTENT`.
    pub bottom: f64,
}

impl ControlPoint {
    /// Build a control point.
    pub fn new(x: f64, top: f64, bottom: f64) -> Self {
        Self { x, top, bottom }
    }

    /// Vertical midpoint of the band.
    pub fn mid(self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

/// One subclonal population as it is drawn.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Subclone {
    /// Ordered outline samples; empty when the clone never has a non-zero fraction.
    pub points: Vec<ControlPoint>,
    /// Depth in the parent tree (roots are 0).
    pub nest_level: u32,
    /// Parent clone index, `None` for roots.
    pub parent: Option<usize>,
    /// Text drawn at the clone's origin.
    #[serde(default)]
    pub annotation: Option<String>,
    /// Name shown in the legend.
    #[serde(default)]
    pub label: Option<String>,
}

/// Arena of clones linked by parent indices, plus the shared timepoint axis.
///
/// Construction rejects parent indices outside the arena and parent cycles, so every
/// traversal over a `LayoutForest` terminates and visits parents first.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutForest {
    clones: Vec<Subclone>,
    timepoints: Vec<f64>,
}

impl LayoutForest {
    /// Validate and build a forest from precomputed clones.
    ///
    /// Each clone's `nest_level` is recomputed from the parent links; the supplied value
    /// is ignored.
    pub fn new(mut clones: Vec<Subclone>, timepoints: Vec<f64>) -> FishResult<Self> {
        validate_timepoints(&timepoints)?;
        let parents = clones.iter().map(|c| c.parent).collect::<Vec<_>>();
        let levels = nest_levels(&parents)?;
        for (clone, level) in clones.iter_mut().zip(levels) {
            clone.nest_level = level;
        }

        for (i, clone) in clones.iter().enumerate() {
            for p in &clone.points {
                if !(p.x.is_finite() && p.top.is_finite() && p.bottom.is_finite()) {
                    return Err(FishError::validation(format!(
                        "clone {i} has a non-finite control point"
                    )));
                }
            }
            if clone.points.windows(2).any(|w| w[1].x < w[0].x) {
                return Err(FishError::validation(format!(
                    "clone {i} control points must be ordered by x"
                )));
            }
        }

        Ok(Self { clones, timepoints })
    }

    /// Number of clones.
    pub fn len(&self) -> usize {
        self.clones.len()
    }

    /// Return `true` when the forest has no clones.
    pub fn is_empty(&self) -> bool {
        self.clones.is_empty()
    }

    /// All clones in index order.
    pub fn clones(&self) -> &[Subclone] {
        &self.clones
    }

    /// Clone at `idx`.
    pub fn get(&self, idx: usize) -> Option<&Subclone> {
        self.clones.get(idx)
    }

    /// Shared timepoint axis.
    pub fn timepoints(&self) -> &[f64] {
        &self.timepoints
    }

    /// Indices of clones whose parent is `parent`, in index order.
    pub fn children_of(&self, parent: Option<usize>) -> impl Iterator<Item = usize> + '_ {
        self.clones
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.parent == parent)
            .map(|(i, _)| i)
    }

    /// `(first, last)` timepoint.
    pub fn time_span(&self) -> (f64, f64) {
        let first = self.timepoints.first().copied().unwrap_or(0.0);
        let last = self.timepoints.last().copied().unwrap_or(first);
        (first, last)
    }
}

/// Reject empty, non-finite or non-ascending timepoint axes.
pub(crate) fn validate_timepoints(timepoints: &[f64]) -> FishResult<()> {
    if timepoints.is_empty() {
        return Err(FishError::validation("at least one timepoint is required"));
    }
    if timepoints.iter().any(|t| !t.is_finite()) {
        return Err(FishError::validation("timepoints must be finite"));
    }
    if timepoints.windows(2).any(|w| w[1] <= w[0]) {
        return Err(FishError::validation(
            "timepoints must be strictly ascending",
        ));
    }
    Ok(())
}

/// Compute each clone's depth in the parent tree.
///
/// Fails when a parent index points outside the arena or when following parents from any
/// clone never reaches a root (a cycle, including a clone that is its own parent).
pub fn nest_levels(parents: &[Option<usize>]) -> FishResult<Vec<u32>> {
    let n = parents.len();
    for (i, p) in parents.iter().enumerate() {
        if let Some(p) = *p
            && p >= n
        {
            return Err(FishError::validation(format!(
                "clone {i} references parent {p}, but only {n} clones are defined"
            )));
        }
    }

    let mut levels = Vec::with_capacity(n);
    for start in 0..n {
        let mut depth = 0u32;
        let mut cur = parents[start];
        while let Some(p) = cur {
            depth += 1;
            if depth as usize > n {
                return Err(FishError::validation(format!(
                    "parent links starting at clone {start} form a cycle"
                )));
            }
            cur = parents[p];
        }
        levels.push(depth);
    }
    Ok(levels)
}

#[cfg(test)]
#[path = "../../tests/unit/fish/forest.rs"]
mod tests;
