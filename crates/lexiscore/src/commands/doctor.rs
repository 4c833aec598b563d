//! Doctor command — diagnose configuration and word-list availability.
//!
//! The reference word list is a startup requirement; this command surfaces
//! a missing or empty document before a passage ever gets analyzed.

use camino::Utf8Path;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::instrument;

use lexiscore_core::config::{Config, ConfigSources};
use lexiscore_core::vocabulary;

use super::resolve_word_list;

/// Arguments for the `doctor` subcommand.
#[derive(Args, Debug, Default)]
pub struct DoctorArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct DoctorReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    word_list: String,
    word_list_ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    word_count: Option<usize>,
    mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    issues: Vec<String>,
}

/// Check that the tool can actually serve an analysis from this directory.
#[instrument(name = "cmd_doctor", skip_all)]
pub fn cmd_doctor(
    _args: DoctorArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    cwd: &Utf8Path,
) -> anyhow::Result<()> {
    let word_list = resolve_word_list(None, config);
    let mode = config.mode.unwrap_or_default();

    let mut issues = Vec::new();
    let (word_list_ok, word_count) = match vocabulary::load_word_list(&word_list) {
        Ok(words) => (true, Some(words.len())),
        Err(e) => {
            issues.push(e.to_string());
            (false, None)
        }
    };

    let report = DoctorReport {
        config_file: sources.primary_file().map(|p| p.to_string()),
        word_list: word_list.to_string(),
        word_list_ok,
        word_count,
        mode: mode.to_string(),
        issues,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("working directory: {cwd}");
        match &report.config_file {
            Some(file) => println!("{} config: {file}", "ok".green()),
            None => println!("{} config: none found (defaults in effect)", "ok".green()),
        }
        if report.word_list_ok {
            println!(
                "{} word list: {} ({} words)",
                "ok".green(),
                report.word_list,
                report.word_count.unwrap_or(0),
            );
        } else {
            println!("{} word list: {}", "fail".red(), report.word_list);
        }
        println!("{} mode: {}", "ok".green(), report.mode);
        for issue in &report.issues {
            println!("  {issue}");
        }
    }

    if !report.word_list_ok {
        anyhow::bail!("reference word list is unavailable; analysis cannot run");
    }

    Ok(())
}
