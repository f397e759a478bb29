//! 39S rating calculation.
//!
//! A play's raw score is turned into a percentage of the chart's maximum
//! score, which is mapped to a rating through a piecewise-linear curve
//! anchored on the chart constant:
//!
//! | percent | rating |
//! |---------|--------|
//! | 100     | constant + 4 |
//! | 99.5    | constant + 3 |
//! | 99      | constant + 2 |
//! | 98      | constant + 1 |
//! | 97      | constant |
//!
//! Ratings between two checkpoints are interpolated linearly. Below 97%
//! every 3% costs 2 rating down to 50%; below 50% the rating is 0. Ratings
//! are never negative.

mod calculator;
mod tier;

pub use calculator::*;
pub use tier::*;
