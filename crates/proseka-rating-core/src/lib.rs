pub mod chart;
pub mod config;
pub mod error;
pub mod rating;
pub mod score;

pub use chart::ChartConstant;
pub use error::{Error, Result};
pub use rating::{RatingBreakdown, RatingCalculator, RatingTier, calculate};
pub use score::{Field, Judge};
