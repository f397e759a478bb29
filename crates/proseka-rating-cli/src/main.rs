mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use proseka_rating_core::{ChartConstant, Judge};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("proseka_rating=warn,proseka_rating_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Calc {
            perfect,
            great,
            good,
            bad,
            miss,
            level,
            max_combo,
            json,
        } => commands::calc::run(
            Judge::new(perfect, great, good, bad, miss),
            ChartConstant::new(level, max_combo),
            json,
        ),
        Command::Tiers { level, json } => commands::tiers::run(level, json),
    }
}
