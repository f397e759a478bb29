use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::ChartConstant;
use crate::config::thresholds;
use crate::error::{Error, Result};
use crate::rating::RatingTier;
use crate::score::{Field, Judge};

/// Every intermediate value of one rating calculation
///
/// `raw_score` and `max_score` share a scale; for counts above 1e300 both
/// are reported scaled down by 2^-64.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingBreakdown {
    pub raw_score: f64,
    pub max_score: f64,
    /// Score as a percentage of `max_score` (0-100)
    pub percent: f64,
    pub tier: RatingTier,
    pub rating: f64,
}

/// Calculates 39S ratings
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingCalculator;

impl RatingCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Check every input, then that the raw score fits the chart.
    ///
    /// Fields are checked one at a time in a fixed order so the first
    /// offending field is the one reported.
    pub fn validate(judge: &Judge, chart: &ChartConstant) -> Result<()> {
        let inputs = [
            (Field::PerfectCount, judge.perfect),
            (Field::GreatCount, judge.great),
            (Field::GoodCount, judge.good),
            (Field::BadCount, judge.bad),
            (Field::MissCount, judge.miss),
            (Field::MaxCombo, chart.max_combo),
            (Field::ChartLevel, chart.level),
        ];
        for (field, value) in inputs {
            check_input(field, value)?;
        }

        let (raw_score, max_score) = comparable_scores(judge, chart);
        if raw_score > max_score {
            debug!(raw_score, max_score, "Rejected score above maximum");
            return Err(Error::ScoreExceedsMaximum {
                raw_score,
                max_score,
            });
        }

        Ok(())
    }

    pub fn breakdown(&self, judge: &Judge, chart: &ChartConstant) -> Result<RatingBreakdown> {
        Self::validate(judge, chart)?;

        let (raw_score, max_score) = comparable_scores(judge, chart);
        // A chart without notes can only be validated with an empty judge
        let percent = if max_score <= 0.0 {
            0.0
        } else if raw_score >= max_score {
            thresholds::MAX
        } else {
            raw_score * 100.0 / max_score
        };

        let tier = RatingTier::from_percent(percent);
        let rating = tier.rating(percent, chart.level).max(0.0);

        debug!(
            raw_score,
            max_score,
            percent,
            %tier,
            level = chart.level,
            rating,
            "Calculated rating"
        );

        Ok(RatingBreakdown {
            raw_score,
            max_score,
            percent,
            tier,
            rating,
        })
    }

    pub fn calculate(&self, judge: &Judge, chart: &ChartConstant) -> Result<f64> {
        self.breakdown(judge, chart).map(|b| b.rating)
    }
}

/// Inputs above this are rescaled before summing so the weighted sums and
/// the percentage stay finite.
const RESCALE_ABOVE: f64 = 1e300;

/// Raw and max score on a common scale.
///
/// Huge inputs are multiplied by 2^-64, which is exact, so the ratio (and
/// every checkpoint) is unchanged.
fn comparable_scores(judge: &Judge, chart: &ChartConstant) -> (f64, f64) {
    let largest = [
        judge.perfect,
        judge.great,
        judge.good,
        judge.bad,
        judge.miss,
        chart.max_combo,
    ]
    .into_iter()
    .fold(0.0, f64::max);

    if largest > RESCALE_ABOVE {
        let factor = 2f64.powi(-64);
        let scaled_chart = ChartConstant::new(chart.level, chart.max_combo * factor);
        (judge.scaled(factor).raw_score(), scaled_chart.max_score())
    } else {
        (judge.raw_score(), chart.max_score())
    }
}

fn check_input(field: Field, value: f64) -> Result<()> {
    if !value.is_finite() {
        debug!(%field, value, "Rejected non-finite input");
        return Err(Error::NonFiniteValue { field, value });
    }
    if value < 0.0 {
        debug!(%field, value, "Rejected negative input");
        return Err(Error::NegativeValue { field, value });
    }
    Ok(())
}

/// Calculate the 39S rating of a play.
///
/// Judgements are worth 3 (PERFECT), 2 (GREAT), 1 (GOOD), 0.5 (BAD) and
/// 0 (MISS) points; `max_combo * 3` is the chart's maximum score.
pub fn calculate(
    perfect_count: f64,
    great_count: f64,
    good_count: f64,
    bad_count: f64,
    miss_count: f64,
    internal_chart_level: f64,
    max_combo: f64,
) -> Result<f64> {
    let judge = Judge::new(perfect_count, great_count, good_count, bad_count, miss_count);
    let chart = ChartConstant::new(internal_chart_level, max_combo);
    RatingCalculator::new().calculate(&judge, &chart)
}
