//! Coverage command — vocabulary diff against the reference word list.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use lexiscore_core::{Config, CoverageMode};
use lexiscore_core::{coverage, text, vocabulary};

use super::{read_passage, resolve_word_list};

/// Arguments for the `coverage` subcommand.
#[derive(Args, Debug)]
pub struct CoverageArgs {
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
}

/// Diff a passage's vocabulary against the reference word list.
#[instrument(name = "cmd_coverage", skip_all, fields(file = %args.file))]
pub fn cmd_coverage(
    args: CoverageArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, mode = ?args.mode, "executing coverage command");

    let content = read_passage(&args.file, max_input_bytes)?;
    if content.trim().is_empty() {
        anyhow::bail!("please enter a passage to analyze");
    }

    let mode = args.mode.or(config.mode).unwrap_or_default();
    let word_list = resolve_word_list(args.word_list, config);
    let vocabulary = vocabulary::load_word_list(&word_list)
        .context("cannot analyze without the reference word list")?;

    let report = coverage::analyze(&text::word_set(&content), &vocabulary, mode);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Total unique words: {}", report.total_words);
    println!("{}: {}", mode.word_heading(), report.count);
    match mode {
        CoverageMode::Coverage => println!("Coverage: {:.2}%", report.percentage),
        CoverageMode::Advanced => println!("Advanced vocabulary: {:.2}%", report.percentage),
    }

    if args.words && !report.words.is_empty() {
        println!();
        println!("{}", report.words.join(", "));
    }

    Ok(())
}
