//! CLI argument definitions for proseka-rating.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "proseka-rating")]
#[command(about = "39S rating calculator", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Calculate the rating of a single play
    #[command(allow_negative_numbers = true)]
    Calc {
        /// Number of PERFECT judgements
        #[arg(long)]
        perfect: f64,
        /// Number of GREAT judgements
        #[arg(long, default_value = "0")]
        great: f64,
        /// Number of GOOD judgements
        #[arg(long, default_value = "0")]
        good: f64,
        /// Number of BAD judgements
        #[arg(long, default_value = "0")]
        bad: f64,
        /// Number of MISS judgements
        #[arg(long, default_value = "0")]
        miss: f64,
        /// Internal chart level (constant)
        #[arg(short, long)]
        level: f64,
        /// Total note count of the chart
        #[arg(short, long)]
        max_combo: f64,
        /// Output the full breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the rating at each tier checkpoint for a chart level
    #[command(allow_negative_numbers = true)]
    Tiers {
        /// Internal chart level (constant)
        #[arg(short, long)]
        level: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
