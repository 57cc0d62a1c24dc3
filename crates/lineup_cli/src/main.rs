//! Lineup CLI
//!
//! 저장된 경기 라인업 파일을 검증하고 쿼터별 교체 내역을 출력.
//!
//! Usage:
//!   lineup validate --game game.json [--rules rules.json]
//!   lineup diff --game game.json --quarter 3
//!   lineup changes --game game.json
//!   lineup summary --game game.json
//!
//! Environment:
//!   LINEUP_RULES_PATH - fair-play rule overrides (JSON), used when --rules is absent
//!   RUST_LOG          - log filter (default: info)

mod game_file;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lineup_core::{
    diff_game, diff_quarters, playing_time_summary, sort_for_display, FairPlayRules,
    LineupValidator, QUARTERS,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use game_file::GameFile;

#[derive(Parser)]
#[command(name = "lineup")]
#[command(
    about = "Validate fair-play lineups and show quarter-over-quarter changes",
    long_about = None
)]
struct Cli {
    /// Fair-play rule overrides (JSON)
    #[arg(long, global = true, env = "LINEUP_RULES_PATH")]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a 4-quarter lineup against the fair-play rules
    Validate {
        /// Game file (format, roster, quarters)
        #[arg(long)]
        game: PathBuf,
    },

    /// Show changes between a quarter and the one before it
    Diff {
        /// Game file (format, roster, quarters)
        #[arg(long)]
        game: PathBuf,

        /// Quarter to compare with its predecessor (2-4)
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=4))]
        quarter: u8,
    },

    /// Show changes for every quarter after the first
    Changes {
        /// Game file (format, roster, quarters)
        #[arg(long)]
        game: PathBuf,
    },

    /// Per-player playing time
    Summary {
        /// Game file (format, roster, quarters)
        #[arg(long)]
        game: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter())
        .init();

    let cli = Cli::parse();
    let rules = match &cli.rules {
        Some(path) => FairPlayRules::load(path)
            .with_context(|| format!("Failed to load rules: {}", path.display()))?,
        None => FairPlayRules::default(),
    };

    match cli.command {
        Commands::Validate { game } => {
            let (roster, proposal) = GameFile::load_checked(&game, &rules)?;
            let validator = LineupValidator::new(rules);
            let report = validator.validate_with_availability(
                &proposal.assignments(),
                &roster,
                proposal.format,
                &proposal.absences(),
            );

            print_json(&report)?;
            for message in report.messages() {
                eprintln!("  ✗ {message}");
            }
            if !report.is_valid {
                info!(violations = report.violations.len(), "lineup is not fair-play compliant");
                return Ok(ExitCode::FAILURE);
            }
            info!("lineup is fair-play compliant");
        }

        Commands::Diff { game, quarter } => {
            let (roster, proposal) = GameFile::load_checked(&game, &rules)?;
            let (Some(previous), Some(current)) =
                (proposal.quarter(quarter - 1), proposal.quarter(quarter))
            else {
                anyhow::bail!("quarter {quarter} is outside 2..={QUARTERS}");
            };

            let mut changes = diff_quarters(
                &previous.assignment(),
                &current.assignment(),
                &previous.bench_or_derived(&roster),
                &current.bench_or_derived(&roster),
                &roster,
            );
            sort_for_display(&mut changes);
            print_json(&changes)?;
        }

        Commands::Changes { game } => {
            let (roster, proposal) = GameFile::load_checked(&game, &rules)?;
            let per_quarter = diff_game(&proposal, &roster);
            let total: usize = per_quarter.iter().map(|q| q.changes.len()).sum();
            info!(quarters = per_quarter.len(), changes = total, "computed game changes");
            print_json(&per_quarter)?;
        }

        Commands::Summary { game } => {
            let (roster, proposal) = GameFile::load_checked(&game, &rules)?;
            print_json(&playing_time_summary(&proposal, &roster))?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// RUST_LOG when set and parseable, otherwise `info`.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
