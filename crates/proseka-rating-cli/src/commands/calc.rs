//! Calc command implementation.

use anyhow::{Context, Result};
use proseka_rating_core::{ChartConstant, Judge, RatingCalculator};
use tracing::info;

/// Run the calc command
pub fn run(judge: Judge, chart: ChartConstant, json: bool) -> Result<()> {
    let breakdown = RatingCalculator::new()
        .breakdown(&judge, &chart)
        .context("Failed to calculate rating")?;

    info!(
        "Rated {} notes on a level {} chart",
        judge.total_notes(),
        chart.level
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        println!(
            "Score:  {} / {} ({:.4}%)",
            breakdown.raw_score, breakdown.max_score, breakdown.percent
        );
        if let Some(label) = combo_label(&judge) {
            println!("Combo:  {}", label);
        }
        println!("Tier:   {}", breakdown.tier);
        println!("Rating: {:.4}", breakdown.rating);
    }

    Ok(())
}

/// ALL PERFECT / FULL COMBO marker, if the play earned one
fn combo_label(judge: &Judge) -> Option<&'static str> {
    if judge.total_notes() == 0.0 {
        None
    } else if judge.is_all_perfect() {
        Some("ALL PERFECT")
    } else if judge.is_full_combo() {
        Some("FULL COMBO")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_label() {
        let ap = Judge::new(300.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(combo_label(&ap), Some("ALL PERFECT"));

        let fc = Judge::new(290.0, 8.0, 2.0, 0.0, 0.0);
        assert_eq!(combo_label(&fc), Some("FULL COMBO"));

        let broken = Judge::new(290.0, 8.0, 0.0, 1.0, 1.0);
        assert_eq!(combo_label(&broken), None);
    }

    #[test]
    fn test_combo_label_empty_play() {
        assert_eq!(combo_label(&Judge::default()), None);
    }
}
