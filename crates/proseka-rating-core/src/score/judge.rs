use serde::{Deserialize, Serialize};

use crate::config::weights;

/// Judgement counts from a single play
///
/// Counts are integers in practice but stored as `f64` so fractional
/// inputs pass through the formula unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Judge {
    pub perfect: f64,
    pub great: f64,
    pub good: f64,
    pub bad: f64,
    pub miss: f64,
}

impl Judge {
    pub fn new(perfect: f64, great: f64, good: f64, bad: f64, miss: f64) -> Self {
        Self {
            perfect,
            great,
            good,
            bad,
            miss,
        }
    }

    /// Calculate raw score (perfect * 3 + great * 2 + good + bad * 0.5)
    pub fn raw_score(&self) -> f64 {
        self.perfect * weights::PERFECT
            + self.great * weights::GREAT
            + self.good * weights::GOOD
            + self.bad * weights::BAD
            + self.miss * weights::MISS
    }

    /// Every count multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.perfect * factor,
            self.great * factor,
            self.good * factor,
            self.bad * factor,
            self.miss * factor,
        )
    }

    /// Total number of judged notes
    pub fn total_notes(&self) -> f64 {
        self.perfect + self.great + self.good + self.bad + self.miss
    }

    /// Check if every judged note was a PERFECT
    pub fn is_all_perfect(&self) -> bool {
        self.great == 0.0 && self.good == 0.0 && self.bad == 0.0 && self.miss == 0.0
    }

    /// Check if the combo never broke (no BAD or MISS)
    pub fn is_full_combo(&self) -> bool {
        self.bad == 0.0 && self.miss == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judge_raw_score() {
        let judge = Judge::new(100.0, 10.0, 4.0, 2.0, 7.0);
        // 300 + 20 + 4 + 1 + 0
        assert_eq!(judge.raw_score(), 325.0);
    }

    #[test]
    fn test_judge_bad_worth_half() {
        let judge = Judge {
            bad: 3.0,
            ..Default::default()
        };
        assert_eq!(judge.raw_score(), 1.5);
    }

    #[test]
    fn test_judge_scaled() {
        let judge = Judge::new(4.0, 2.0, 0.0, 1.0, 0.0).scaled(0.5);
        assert_eq!(judge, Judge::new(2.0, 1.0, 0.0, 0.5, 0.0));
    }

    #[test]
    fn test_judge_total_notes() {
        let judge = Judge::new(290.0, 5.0, 2.0, 1.0, 2.0);
        assert_eq!(judge.total_notes(), 300.0);
    }

    #[test]
    fn test_judge_is_all_perfect() {
        let ap = Judge {
            perfect: 500.0,
            ..Default::default()
        };
        assert!(ap.is_all_perfect());
        assert!(ap.is_full_combo());

        let not_ap = Judge {
            perfect: 499.0,
            great: 1.0,
            ..Default::default()
        };
        assert!(!not_ap.is_all_perfect());
        assert!(not_ap.is_full_combo());
    }

    #[test]
    fn test_judge_is_full_combo() {
        let broke = Judge {
            perfect: 499.0,
            miss: 1.0,
            ..Default::default()
        };
        assert!(!broke.is_full_combo());
    }

    #[test]
    fn test_judge_deserialize_missing_fields() {
        let judge: Judge = serde_json::from_str(r#"{"perfect": 10, "good": 2}"#).unwrap();
        assert_eq!(judge.perfect, 10.0);
        assert_eq!(judge.good, 2.0);
        assert_eq!(judge.miss, 0.0);
    }
}
