//! Error types for lexiscore-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading the reference word list.
///
/// Both variants are fatal for the request: the tool cannot analyze a
/// passage without its reference vocabulary.
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// The word list document could not be opened or read.
    #[error("failed to read word list {path}: {source}")]
    Read {
        /// Path of the document that failed to load.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document was read but produced no usable words.
    #[error("word list {path} contains no usable words")]
    NoWords {
        /// Path of the empty or unparseable document.
        path: Utf8PathBuf,
    },
}

/// Result type alias using [`VocabularyError`].
pub type VocabularyResult<T> = Result<T, VocabularyError>;

/// Errors that can occur during passage analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The passage is empty or whitespace-only; nothing to score.
    #[error("please enter a passage to analyze")]
    EmptyPassage,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
