//! Difficulty tuning
//!
//! Platform widths change as the score crosses fixed thresholds: safe platforms
//! get narrower, hazards get wider. The table is built in; there is no loader.

use serde::{Deserialize, Serialize};

use crate::sim::PlatformKind;

/// Width range `[min, max)` used once `score > above`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidthBand {
    pub above: u64,
    pub min: i32,
    pub max: i32,
}

impl WidthBand {
    pub const fn new(above: u64, min: i32, max: i32) -> Self {
        Self { above, min, max }
    }
}

/// Width bands for both platform kinds, sorted by descending threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyTuning {
    pub safe: Vec<WidthBand>,
    pub hazard: Vec<WidthBand>,
}

impl Default for DifficultyTuning {
    fn default() -> Self {
        Self {
            safe: vec![
                WidthBand::new(5000, 30, 50),
                WidthBand::new(2500, 40, 65),
                WidthBand::new(0, 55, 85),
            ],
            hazard: vec![
                WidthBand::new(10000, 60, 85),
                WidthBand::new(5000, 50, 70),
                WidthBand::new(0, 40, 65),
            ],
        }
    }
}

impl DifficultyTuning {
    /// Width range `(min, max)` for a platform kind at the given score
    pub fn width_range(&self, kind: PlatformKind, score: u64) -> (i32, i32) {
        let bands = match kind {
            PlatformKind::Safe => &self.safe,
            PlatformKind::Hazard => &self.hazard,
        };
        // The last band is the base band and applies at any score
        bands
            .iter()
            .find(|b| score > b.above)
            .or_else(|| bands.last())
            .map(|b| (b.min, b.max))
            .unwrap_or((1, 2))
    }
}
