//! Tiers command implementation.

use anyhow::{Context, Result};
use proseka_rating_core::{ChartConstant, Judge, RatingCalculator, RatingTier};
use serde::Serialize;

#[derive(Serialize)]
struct Checkpoint {
    tier: RatingTier,
    min_percent: f64,
    rating: f64,
}

/// Run the tiers command
pub fn run(level: f64, json: bool) -> Result<()> {
    RatingCalculator::validate(&Judge::default(), &ChartConstant::new(level, 0.0))
        .context("Invalid chart level")?;

    let checkpoints: Vec<Checkpoint> = RatingTier::checkpoints(level)
        .into_iter()
        .map(|(tier, rating)| Checkpoint {
            tier,
            min_percent: tier.min_percent(),
            rating,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&checkpoints)?);
    } else {
        println!("=== Level {} ===", level);
        for checkpoint in &checkpoints {
            println!("{:>6}  {:.2}", checkpoint.tier.short_name(), checkpoint.rating);
        }
    }

    Ok(())
}
