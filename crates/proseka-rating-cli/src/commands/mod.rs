pub mod calc;
pub mod tiers;
