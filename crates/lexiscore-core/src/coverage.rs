//! Vocabulary coverage analysis.
//!
//! Diffs a passage's normalized word set against the reference vocabulary.
//! Coverage mode reports the words the passage shares with the list;
//! advanced mode reports the words that go beyond it. The mode is fixed at
//! startup (config file or flag), never toggled mid-analysis.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which side of the set comparison to report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CoverageMode {
    /// Words the passage shares with the reference list (intersection).
    #[default]
    Coverage,
    /// Words in the passage beyond the reference list (difference).
    Advanced,
}

impl CoverageMode {
    /// Returns the mode as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Coverage => "coverage",
            Self::Advanced => "advanced",
        }
    }

    /// Display heading for the reported word set.
    pub const fn word_heading(&self) -> &'static str {
        match self {
            Self::Coverage => "Reference words found",
            Self::Advanced => "Words beyond the reference list",
        }
    }
}

impl std::fmt::Display for CoverageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of coverage analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CoverageReport {
    /// Mode the analysis ran in.
    pub mode: CoverageMode,
    /// Unique words in the normalized passage.
    pub total_words: usize,
    /// Words selected by the mode (matched in coverage, unmatched in advanced).
    pub count: usize,
    /// `count / total_words * 100`; 0 when the passage has no words.
    pub percentage: f64,
    /// The selected words, sorted ascending.
    pub words: Vec<String>,
}

/// Diff the passage word set against the reference vocabulary.
///
/// Pure set arithmetic: intersection in coverage mode, difference in
/// advanced mode. The percentage guard keeps an empty passage at 0 instead
/// of dividing by zero.
#[tracing::instrument(skip_all, fields(mode = %mode, passage_words = passage.len()))]
pub fn analyze(
    passage: &HashSet<String>,
    vocabulary: &HashSet<String>,
    mode: CoverageMode,
) -> CoverageReport {
    let mut words: Vec<String> = match mode {
        CoverageMode::Coverage => passage.intersection(vocabulary).cloned().collect(),
        CoverageMode::Advanced => passage.difference(vocabulary).cloned().collect(),
    };
    words.sort_unstable();

    let total_words = passage.len();
    let count = words.len();
    let percentage = if total_words == 0 {
        0.0
    } else {
        count as f64 / total_words as f64 * 100.0
    };

    CoverageReport {
        mode,
        total_words,
        count,
        percentage,
        words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::word_set;

    fn vocab(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn full_coverage() {
        let passage = word_set("The cat sat.");
        let vocabulary = vocab(&["the", "cat", "sat"]);

        let report = analyze(&passage, &vocabulary, CoverageMode::Coverage);
        assert_eq!(report.total_words, 3);
        assert_eq!(report.count, 3);
        assert!((report.percentage - 100.0).abs() < f64::EPSILON);

        let advanced = analyze(&passage, &vocabulary, CoverageMode::Advanced);
        assert_eq!(advanced.count, 0);
        assert!(advanced.percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_passage_yields_zero_percentage() {
        let passage = word_set("   ");
        let vocabulary = vocab(&["the"]);

        let report = analyze(&passage, &vocabulary, CoverageMode::Coverage);
        assert_eq!(report.total_words, 0);
        assert_eq!(report.count, 0);
        assert!(report.percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn words_are_sorted_ascending() {
        let passage = word_set("zebra apple mango");
        let vocabulary = vocab(&["zebra", "apple", "mango"]);

        let report = analyze(&passage, &vocabulary, CoverageMode::Coverage);
        assert_eq!(report.words, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn modes_partition_the_passage() {
        let passage = word_set("The quick brown fox jumps over the lazy dog");
        let vocabulary = vocab(&["the", "quick", "dog", "over"]);

        let covered = analyze(&passage, &vocabulary, CoverageMode::Coverage);
        let advanced = analyze(&passage, &vocabulary, CoverageMode::Advanced);

        let mut union: HashSet<String> = covered.words.iter().cloned().collect();
        for w in &advanced.words {
            assert!(union.insert(w.clone()), "overlap on {w:?}");
        }
        assert_eq!(union, passage);
        assert_eq!(covered.count + advanced.count, passage.len());
    }

    #[test]
    fn percentage_stays_in_range() {
        for text in ["", "cat", "cat dog bird", "the the the"] {
            let passage = word_set(text);
            let vocabulary = vocab(&["cat", "the"]);
            for mode in [CoverageMode::Coverage, CoverageMode::Advanced] {
                let report = analyze(&passage, &vocabulary, mode);
                assert!((0.0..=100.0).contains(&report.percentage));
            }
        }
    }
}
