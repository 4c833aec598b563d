//! Analyze command — the full passage report.
//!
//! Combines readability scoring with vocabulary coverage, the complete
//! single-passage analysis: score, difficulty tier, CEFR estimate, and the
//! reference word-list diff.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use lexiscore_core::{Config, CoverageMode, CoverageReport, ReadabilityReport};
use lexiscore_core::{coverage, readability, text, vocabulary};

use super::{paint_difficulty, read_passage, resolve_word_list};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze, or `-` to read the passage from stdin.
    pub file: Utf8PathBuf,

    /// Coverage mode: report matched (coverage) or unmatched (advanced) words.
    #[arg(long, value_enum)]
    pub mode: Option<CoverageMode>,

    /// Reference word-list document (defaults to the bundled Oxford 3000).
    #[arg(long, value_name = "FILE")]
    pub word_list: Option<Utf8PathBuf>,

    /// Print the full word list selected by the mode.
    #[arg(long)]
    pub words: bool,

    /// Minimum acceptable Flesch Reading Ease score.
    #[arg(long)]
    pub min_score: Option<f64>,
}

/// Combined report for `--json` output.
#[derive(Serialize)]
struct AnalyzeReport {
    readability: ReadabilityReport,
    coverage: CoverageReport,
}

/// Run the full analysis: readability plus vocabulary coverage.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, mode = ?args.mode, "executing analyze command");

    let content = read_passage(&args.file, max_input_bytes)?;
    let min_score = args.min_score.or(config.min_score);
    let mode = args.mode.or(config.mode).unwrap_or_default();

    let readability = readability::score_passage(&content, min_score)?;

    let word_list = resolve_word_list(args.word_list, config);
    let vocabulary = vocabulary::load_word_list(&word_list)
        .context("cannot analyze without the reference word list")?;
    let coverage = coverage::analyze(&text::word_set(&content), &vocabulary, mode);

    if global_json {
        let report = AnalyzeReport {
            readability,
            coverage,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Flesch Reading Ease: {:.2}", readability.score);
    println!(
        "Difficulty: {} [{}]",
        paint_difficulty(readability.level),
        readability.color
    );
    println!("Estimated CEFR level: {}", readability.cefr);
    println!();
    println!("Total unique words: {}", coverage.total_words);
    println!("{}: {}", mode.word_heading(), coverage.count);
    match mode {
        CoverageMode::Coverage => println!("Coverage: {:.2}%", coverage.percentage),
        CoverageMode::Advanced => println!("Advanced vocabulary: {:.2}%", coverage.percentage),
    }

    if args.words && !coverage.words.is_empty() {
        println!();
        println!("{}", coverage.words.join(", "));
    }

    println!();
    println!(
        "{}",
        "CEFR and vocabulary figures are estimates based on readability and lexical coverage."
            .dimmed()
    );

    if readability.below_min {
        let min = readability.min_score.unwrap_or(0.0);
        anyhow::bail!(
            "{} scores {:.2} (min: {:.0}). Text is harder than the target level.",
            args.file,
            readability.score,
            min,
        );
    }

    Ok(())
}
