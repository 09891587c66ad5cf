use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::config::plot::PlotConfig;
use crate::fish::data::FishData;
use crate::foundation::color::ColorDef;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{FishError, FishResult};

/// One clone row of an input document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CloneDef {
    /// Population fraction (percent) at each timepoint.
    pub fractions: Vec<f64>,
    /// Parent clone index, `null` for roots.
    #[serde(default)]
    pub parent: Option<usize>,
    /// Legend label.
    #[serde(default)]
    pub label: Option<String>,
    /// Origin annotation.
    #[serde(default)]
    pub annotation: Option<String>,
}

/// JSON input: timepoints, clones, optional colors and plot configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FishDocument {
    /// Ascending timepoint axis.
    pub timepoints: Vec<f64>,
    /// Clones in index order.
    pub clones: Vec<CloneDef>,
    /// One color per clone; the default palette is used when absent.
    #[serde(default)]
    pub colors: Option<Vec<ColorDef>>,
    /// Plot configuration.
    #[serde(default)]
    pub config: PlotConfig,
}

impl FishDocument {
    /// Parse a document from a JSON string.
    pub fn from_json_str(s: &str) -> FishResult<Self> {
        serde_json::from_str(s).map_err(|e| FishError::serde(e.to_string()))
    }

    /// Read and parse a document from disk.
    pub fn from_path(path: &Path) -> FishResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open fish document '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            FishError::serde(format!("parse fish document '{}': {e}", path.display()))
        })
    }

    /// Validated fraction table with labels and annotations attached.
    pub fn to_data(&self) -> FishResult<FishData> {
        let fractions = self.clones.iter().map(|c| c.fractions.clone()).collect();
        let parents = self.clones.iter().map(|c| c.parent).collect();
        FishData::new(self.timepoints.clone(), fractions, parents)?
            .with_labels(self.clones.iter().map(|c| c.label.clone()).collect())?
            .with_annotations(self.clones.iter().map(|c| c.annotation.clone()).collect())
    }

    /// Configured colors, or the default palette sized to the clone count.
    ///
    /// A configured list is returned as-is even when its length is wrong; the mismatch is
    /// reported when drawing starts.
    pub fn resolved_colors(&self) -> Vec<Rgba8> {
        match &self.colors {
            Some(colors) => colors.iter().map(|c| c.to_rgba8()).collect(),
            None => default_palette(self.clones.len()),
        }
    }
}

const PALETTE: [Rgba8; 10] = [
    Rgba8::rgb(0x88, 0x88, 0x88),
    Rgba8::rgb(0xef, 0x00, 0x00),
    Rgba8::rgb(0x8f, 0xff, 0x40),
    Rgba8::rgb(0xff, 0x60, 0x00),
    Rgba8::rgb(0x50, 0xff, 0xaf),
    Rgba8::rgb(0xff, 0xcf, 0x00),
    Rgba8::rgb(0x00, 0x70, 0xff),
    Rgba8::rgb(0xa0, 0x20, 0xf0),
    Rgba8::rgb(0x8b, 0x45, 0x13),
    Rgba8::rgb(0x00, 0xce, 0xd1),
];

/// `n` colors cycling through the built-in palette.
pub fn default_palette(n: usize) -> Vec<Rgba8> {
    PALETTE.iter().copied().cycle().take(n).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/fish/input.rs"]
mod tests;
