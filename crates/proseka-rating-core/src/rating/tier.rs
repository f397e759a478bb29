use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::config::{bonuses, thresholds};

/// Segment of the rating curve a score percentage falls into
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
)]
pub enum RatingTier {
    #[strum(serialize = "<50%")]
    Floor,
    #[strum(serialize = "50%")]
    Decay,
    #[strum(serialize = "97%")]
    A,
    #[strum(serialize = "98%")]
    Aa,
    #[strum(serialize = "99%")]
    S,
    #[strum(serialize = "99.5%")]
    Ss,
    #[strum(serialize = "100%")]
    Max,
}

impl RatingTier {
    /// Each tier covers `[min_percent, next tier's min_percent)`.
    /// NaN lands in `Floor`.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= thresholds::MAX {
            Self::Max
        } else if percent >= thresholds::SS {
            Self::Ss
        } else if percent >= thresholds::S {
            Self::S
        } else if percent >= thresholds::AA {
            Self::Aa
        } else if percent >= thresholds::A {
            Self::A
        } else if percent >= thresholds::FLOOR {
            Self::Decay
        } else {
            Self::Floor
        }
    }

    pub fn min_percent(&self) -> f64 {
        match self {
            Self::Floor => 0.0,
            Self::Decay => thresholds::FLOOR,
            Self::A => thresholds::A,
            Self::Aa => thresholds::AA,
            Self::S => thresholds::S,
            Self::Ss => thresholds::SS,
            Self::Max => thresholds::MAX,
        }
    }

    /// Unclamped rating for `percent` on a chart of the given level.
    ///
    /// `percent` is expected to lie inside this tier. `Decay` goes negative
    /// for low levels; callers clamp at 0.
    pub fn rating(&self, percent: f64, level: f64) -> f64 {
        match self {
            Self::Max => level + bonuses::MAX,
            Self::Ss => level + bonuses::SS + (percent - thresholds::SS) * 2.0,
            Self::S => level + bonuses::S + (percent - thresholds::S) * 2.0,
            Self::Aa => level + bonuses::AA + (percent - thresholds::AA),
            Self::A => level + bonuses::A + (percent - thresholds::A),
            // Every 3% below 97% costs 2 rating
            Self::Decay => level - (thresholds::A - percent) / 3.0 * 2.0,
            Self::Floor => 0.0,
        }
    }

    /// Clamped rating at the lower bound of every tier, highest tier first
    pub fn checkpoints(level: f64) -> Vec<(Self, f64)> {
        Self::iter()
            .rev()
            .map(|tier| (tier, tier.rating(tier.min_percent(), level).max(0.0)))
            .collect()
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for RatingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
