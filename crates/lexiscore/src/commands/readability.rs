//! Readability command — Flesch Reading Ease scoring.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lexiscore_core::readability;

use super::{paint_difficulty, read_passage};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze, or `-` to read the passage from stdin.
    pub file: Utf8PathBuf,

    /// Minimum acceptable Flesch Reading Ease score.
    #[arg(long)]
    pub min_score: Option<f64>,
}

/// Score readability of a passage using Flesch Reading Ease.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config_min_score: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing readability command");

    let content = read_passage(&args.file, max_input_bytes)?;
    let min_score = args.min_score.or(config_min_score);

    let report = readability::score_passage(&content, min_score)
        .with_context(|| format!("failed to score {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.below_min {
        let min = report.min_score.unwrap_or(0.0);
        bail!(
            "{} scores {:.2} (min: {:.0}). Text is harder than the target level.",
            args.file,
            report.score,
            min,
        );
    } else if let Some(min) = report.min_score {
        println!(
            "{} {} scores {:.2} (min: {:.0})",
            "PASS:".green(),
            args.file,
            report.score,
            min,
        );
    } else {
        println!("Flesch Reading Ease: {:.2}", report.score);
        println!("Difficulty: {}", paint_difficulty(report.level));
        println!("Estimated CEFR level: {}", report.cefr);
    }

    Ok(())
}
