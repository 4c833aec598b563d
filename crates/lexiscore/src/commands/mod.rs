//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use lexiscore_core::DifficultyLevel;
use owo_colors::{AnsiColors, OwoColorize};

pub mod analyze;
pub mod coverage;
pub mod doctor;
pub mod info;
pub mod readability;

/// Render a difficulty label in its tier color.
///
/// The named color labels (green, tomato, ...) stay part of the report; this
/// is their closest ANSI rendering for terminals.
pub(crate) fn paint_difficulty(level: DifficultyLevel) -> String {
    let color = match level {
        DifficultyLevel::VeryEasy => AnsiColors::Green,
        DifficultyLevel::Easy => AnsiColors::BrightGreen,
        DifficultyLevel::FairlyEasy => AnsiColors::Yellow,
        DifficultyLevel::Standard => AnsiColors::BrightYellow,
        DifficultyLevel::Difficult => AnsiColors::BrightRed,
        DifficultyLevel::VeryDifficult => AnsiColors::Red,
    };
    level.label().color(color).to_string()
}

/// Read a passage from a file, or from stdin when the path is `-`.
///
/// Validates size against the configured limit; for files the check runs
/// against metadata before the content is read into memory.
pub fn read_passage(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        let mut buf = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)
            .context("failed to read passage from stdin")?;
        if let Some(max) = max_bytes
            && buf.len() > max
        {
            anyhow::bail!(
                "input too large: stdin is {} bytes (limit: {max} bytes)",
                buf.len()
            );
        }
        return Ok(buf);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Resolve the reference word-list path from flag, config, and default.
pub fn resolve_word_list(
    flag: Option<camino::Utf8PathBuf>,
    config: &lexiscore_core::Config,
) -> camino::Utf8PathBuf {
    flag.or_else(|| config.word_list.clone())
        .unwrap_or_else(|| camino::Utf8PathBuf::from(lexiscore_core::vocabulary::DEFAULT_WORD_LIST))
}
