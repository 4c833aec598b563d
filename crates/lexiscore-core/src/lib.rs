//! Core library for lexiscore.
//!
//! This crate provides the analysis engine used by the `lexiscore` CLI and
//! any downstream consumers: passage normalization, Flesch Reading Ease
//! scoring with CEFR-tier classification, and vocabulary coverage against a
//! bundled reference word list.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and management
//! - [`coverage`] - Word-set diffing against the reference vocabulary
//! - [`error`] - Error types and result aliases
//! - [`levels`] - Difficulty tiers and CEFR mapping
//! - [`readability`] - Flesch Reading Ease scoring
//! - [`syllables`] - Word-level syllable counting
//! - [`text`] - Normalization and sentence splitting
//! - [`vocabulary`] - Memoized reference word-list loading
//!
//! # Quick Start
//!
//! ```no_run
//! use camino::Utf8Path;
//! use lexiscore_core::{coverage, readability, text, vocabulary, CoverageMode};
//!
//! let passage = "The cat sat on the mat.";
//! let report = readability::score_passage(passage, None).expect("non-empty passage");
//! println!("{:.2} -> {}", report.score, report.cefr);
//!
//! let words = vocabulary::load_word_list(Utf8Path::new(vocabulary::DEFAULT_WORD_LIST))
//!     .expect("word list present");
//! let cov = coverage::analyze(&text::word_set(passage), &words, CoverageMode::Coverage);
//! println!("{:.2}% coverage", cov.percentage);
//! ```
#![deny(unsafe_code)]

pub mod config;

pub mod coverage;

pub mod error;

pub mod levels;

pub mod readability;

pub mod syllables;

pub mod text;

pub mod vocabulary;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};

pub use coverage::{CoverageMode, CoverageReport};

pub use error::{
    AnalysisError, AnalysisResult, ConfigError, ConfigResult, VocabularyError, VocabularyResult,
};

pub use levels::DifficultyLevel;

pub use readability::ReadabilityReport;

/// Default cap on passage input size: 5 MiB.
///
/// Checked before reading files into memory; disable via the
/// `disable_input_limit` config key.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
