use crate::fish::forest::{Y_EXTENT, nest_levels, validate_timepoints};
use crate::foundation::error::{FishError, FishResult};

/// Slack allowed when comparing sums of fractions (percent units).
pub const FRACTION_TOLERANCE: f64 = 1e-6;

/// Population fractions for every clone at every timepoint, with parent links.
///
/// Fractions are percentages of the whole sample, so a child's fraction is included in its
/// parent's fraction.
#[derive(Clone, Debug, PartialEq)]
pub struct FishData {
    timepoints: Vec<f64>,
    fractions: Vec<Vec<f64>>,
    parents: Vec<Option<usize>>,
    nest_levels: Vec<u32>,
    labels: Vec<Option<String>>,
    annotations: Vec<Option<String>>,
}

impl FishData {
    /// Validate a fraction table (one row per clone, one column per timepoint).
    pub fn new(
        timepoints: Vec<f64>,
        fractions: Vec<Vec<f64>>,
        parents: Vec<Option<usize>>,
    ) -> FishResult<Self> {
        validate_timepoints(&timepoints)?;
        if fractions.len() != parents.len() {
            return Err(FishError::validation(format!(
                "got {} fraction rows but {} parent entries",
                fractions.len(),
                parents.len()
            )));
        }
        let nest_levels = nest_levels(&parents)?;

        for (i, row) in fractions.iter().enumerate() {
            if row.len() != timepoints.len() {
                return Err(FishError::validation(format!(
                    "clone {i} has {} fractions for {} timepoints",
                    row.len(),
                    timepoints.len()
                )));
            }
            if let Some(v) = row
                .iter()
                .find(|v| !v.is_finite() || **v < 0.0 || **v > Y_EXTENT)
            {
                return Err(FishError::validation(format!(
                    "clone {i} has fraction {v} outside 0..={Y_EXTENT}"
                )));
            }
        }

        let n = parents.len();
        for t in 0..timepoints.len() {
            let mut root_sum = 0.0;
            let mut child_sums = vec![0.0; n];
            for (i, p) in parents.iter().enumerate() {
                let f = fractions[i][t];
                match *p {
                    None => root_sum += f,
                    Some(p) => {
                        child_sums[p] += f;
                        if f > 0.0 && fractions[p][t] <= 0.0 {
                            return Err(FishError::validation(format!(
                                "clone {i} is present at timepoint {t} but its parent {p} is not"
                            )));
                        }
                    }
                }
            }
            if root_sum > Y_EXTENT + FRACTION_TOLERANCE {
                return Err(FishError::validation(format!(
                    "root clones sum to {root_sum} at timepoint {t}, more than {Y_EXTENT}"
                )));
            }
            for (p, sum) in child_sums.iter().enumerate() {
                if *sum > fractions[p][t] + FRACTION_TOLERANCE {
                    return Err(FishError::validation(format!(
                        "children of clone {p} sum to {sum} at timepoint {t}, more than its fraction {}",
                        fractions[p][t]
                    )));
                }
            }
        }

        Ok(Self {
            timepoints,
            fractions,
            parents,
            nest_levels,
            labels: vec![None; n],
            annotations: vec![None; n],
        })
    }

    /// Attach legend labels (one per clone).
    pub fn with_labels(mut self, labels: Vec<Option<String>>) -> FishResult<Self> {
        if labels.len() != self.len() {
            return Err(FishError::validation(format!(
                "got {} labels for {} clones",
                labels.len(),
                self.len()
            )));
        }
        self.labels = labels;
        Ok(self)
    }

    /// Attach origin annotations (one per clone).
    pub fn with_annotations(mut self, annotations: Vec<Option<String>>) -> FishResult<Self> {
        if annotations.len() != self.len() {
            return Err(FishError::validation(format!(
                "got {} annotations for {} clones",
                annotations.len(),
                self.len()
            )));
        }
        self.annotations = annotations;
        Ok(self)
    }

    /// Number of clones.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Return `true` when there are no clones.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Timepoint axis.
    pub fn timepoints(&self) -> &[f64] {
        &self.timepoints
    }

    /// Fraction of clone `clone` at timepoint index `t`.
    pub fn fraction(&self, clone: usize, t: usize) -> f64 {
        self.fractions[clone][t]
    }

    /// Fraction rows, one per clone.
    pub fn fractions(&self) -> &[Vec<f64>] {
        &self.fractions
    }

    /// Parent links.
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// Depth of each clone in the parent tree.
    pub fn nest_levels(&self) -> &[u32] {
        &self.nest_levels
    }

    /// Legend labels.
    pub fn labels(&self) -> &[Option<String>] {
        &self.labels
    }

    /// Origin annotations.
    pub fn annotations(&self) -> &[Option<String>] {
        &self.annotations
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fish/data.rs"]
mod tests;
