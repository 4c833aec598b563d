//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = easier text. Typical prose lands in 0–100, but the formula
//! is unbounded on both ends. Uses dictionary-backed syllable counting (via
//! [`crate::syllables`]) and abbreviation-aware sentence splitting (via
//! [`crate::text::split_sentences`]).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::levels::DifficultyLevel;
use crate::syllables;
use crate::text;

/// Result of readability analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch Reading Ease score.
    pub score: f64,
    /// Number of sentences detected.
    pub sentences: usize,
    /// Number of words detected.
    pub words: usize,
    /// Total syllable count.
    pub syllables: usize,
    /// Classified difficulty tier.
    pub level: DifficultyLevel,
    /// Difficulty label for display.
    pub difficulty: String,
    /// Estimated CEFR proficiency tier.
    pub cefr: String,
    /// Display color for the difficulty label.
    pub color: String,
    /// Minimum acceptable score (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Whether the score falls below the minimum.
    pub below_min: bool,
}

/// Score a passage with Flesch Reading Ease and classify its difficulty.
///
/// # Arguments
///
/// * `passage` — The text to score.
/// * `min_score` — Optional minimum acceptable score (gate).
///
/// # Errors
///
/// [`AnalysisError::EmptyPassage`] when the passage is empty, whitespace-only,
/// or contains no countable sentence.
#[tracing::instrument(skip(passage), fields(passage_len = passage.len()))]
pub fn score_passage(passage: &str, min_score: Option<f64>) -> AnalysisResult<ReadabilityReport> {
    if passage.trim().is_empty() {
        return Err(AnalysisError::EmptyPassage);
    }

    let sentence_list = text::split_sentences(passage);
    let sentences = sentence_list.len();
    let words = text::count_words(passage);
    let syllables = count_syllables(passage);

    if words == 0 || sentences == 0 {
        return Err(AnalysisError::EmptyPassage);
    }

    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    let score = 206.835 - 1.015f64.mul_add(words_per_sentence, 84.6 * syllables_per_word);

    let level = DifficultyLevel::from_score(score);
    let below_min = min_score.is_some_and(|min| score < min);

    Ok(ReadabilityReport {
        score,
        sentences,
        words,
        syllables,
        level,
        difficulty: level.label().to_string(),
        cefr: level.cefr().to_string(),
        color: level.color().to_string(),
        min_score,
        below_min,
    })
}

/// Total syllables across all whitespace tokens, punctuation trimmed.
fn count_syllables(passage: &str) -> usize {
    passage
        .split_whitespace()
        .map(|w| {
            let cleaned = w.trim_matches(|c: char| !c.is_alphabetic());
            if cleaned.is_empty() {
                0
            } else {
                syllables::count(cleaned)
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_prose_scores_very_easy() {
        let report = score_passage("The cat sat on the mat. The dog ran fast.", None).unwrap();
        assert_eq!(report.sentences, 2);
        assert_eq!(report.words, 10);
        assert!(report.score > 90.0);
        assert_eq!(report.level, DifficultyLevel::VeryEasy);
        assert_eq!(report.cefr, "A1 (Beginner)");
        assert!(!report.below_min);
    }

    #[test]
    fn dense_prose_scores_very_difficult() {
        let text = "The implementation of the comprehensive organizational restructuring \
                    initiative necessitated the establishment of interdepartmental \
                    communication protocols.";
        let report = score_passage(text, None).unwrap();
        assert!(report.score < 30.0);
        assert_eq!(report.level, DifficultyLevel::VeryDifficult);
        assert_eq!(report.cefr, "C2 (Proficient)");
    }

    #[test]
    fn min_score_gate() {
        let text = "The implementation of the comprehensive organizational restructuring \
                    initiative necessitated interdepartmental communication protocols.";
        let report = score_passage(text, Some(60.0)).unwrap();
        assert!(report.below_min);

        let easy = score_passage("The cat sat on the mat.", Some(60.0)).unwrap();
        assert!(!easy.below_min);
    }

    #[test]
    fn empty_passage_rejected() {
        assert!(matches!(
            score_passage("", None),
            Err(AnalysisError::EmptyPassage)
        ));
        assert!(matches!(
            score_passage("   \n\t ", None),
            Err(AnalysisError::EmptyPassage)
        ));
    }

    #[test]
    fn score_is_finite_for_ordinary_text() {
        let report = score_passage("I love chocolate cake. It is delicious.", None).unwrap();
        assert!(report.score.is_finite());
        assert!(report.syllables > 0);
    }

    #[test]
    fn report_carries_display_fields() {
        let report = score_passage("The cat sat on the mat.", None).unwrap();
        assert_eq!(report.difficulty, report.level.label());
        assert_eq!(report.color, report.level.color());
    }
}
