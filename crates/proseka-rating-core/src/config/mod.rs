//! Scoring constants.
//!
//! This module groups the fixed numbers of the 39S rating system:
//! - Judgement weights used to build the raw score
//! - Percentage thresholds where the rating curve changes slope
//! - Rating bonuses awarded on top of the chart constant at each threshold

/// Points awarded per judgement.
///
/// A chart's maximum score is `max_combo * PERFECT`.
pub mod weights {
    pub const PERFECT: f64 = 3.0;
    pub const GREAT: f64 = 2.0;
    pub const GOOD: f64 = 1.0;
    pub const BAD: f64 = 0.5;
    pub const MISS: f64 = 0.0;
}

/// Score percentages (0-100) at which a rating tier begins.
pub mod thresholds {
    pub const MAX: f64 = 100.0;
    pub const SS: f64 = 99.5;
    pub const S: f64 = 99.0;
    pub const AA: f64 = 98.0;
    pub const A: f64 = 97.0;

    /// At or below this percentage the rating is always 0.
    pub const FLOOR: f64 = 50.0;
}

/// Rating added to the chart constant at each threshold.
pub mod bonuses {
    pub const MAX: f64 = 4.0;
    pub const SS: f64 = 3.0;
    pub const S: f64 = 2.0;
    pub const AA: f64 = 1.0;
    pub const A: f64 = 0.0;
}
