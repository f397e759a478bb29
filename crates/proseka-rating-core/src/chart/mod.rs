//! Chart-related types.
//!
//! - `ChartConstant` - internal chart level and note count used for rating

use serde::{Deserialize, Serialize};

use crate::config::weights;

/// Rating inputs that belong to the chart rather than the play
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConstant {
    /// Internal chart level (difficulty constant)
    pub level: f64,
    /// Total number of judged notes
    pub max_combo: f64,
}

impl ChartConstant {
    pub fn new(level: f64, max_combo: f64) -> Self {
        Self { level, max_combo }
    }

    /// Calculate max score (max_combo * 3)
    pub fn max_score(&self) -> f64 {
        self.max_combo * weights::PERFECT
    }
}
