//! Passage normalization and counting primitives.
//!
//! Provides word-set extraction (the normalization rule shared by passages
//! and the reference word list), whitespace word counting, and
//! abbreviation-aware sentence splitting for the readability scorer.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Everything outside `[a-z\s]` becomes a space before tokenizing.
static NON_ALPHA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z\s]").expect("valid regex"));

/// Abbreviations that end with a period mid-sentence.
static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "st", "vs", "etc", "eg", "ie", "cf",
        "fig", "dept", "inc", "ltd", "co", "est", "approx", "vol", "ch", "sec", "min", "max",
    ]
    .into_iter()
    .collect()
});

/// Minimum token length kept after normalization.
///
/// The same cutoff applies to passages and to the reference word list, so the
/// two sides can never disagree on what counts as a word.
pub const MIN_WORD_LEN: usize = 2;

/// Normalize a passage into its set of unique words.
///
/// Lowercases, replaces every character outside `[a-z\s]` with a space,
/// splits on whitespace, and keeps tokens of at least [`MIN_WORD_LEN`]
/// characters. Repeated words collapse to one entry.
pub fn word_set(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    let cleaned = NON_ALPHA.replace_all(&lowered, " ");
    cleaned
        .split_whitespace()
        .filter(|w| w.len() >= MIN_WORD_LEN)
        .map(str::to_string)
        .collect()
}

/// Count words by whitespace splitting (multiset count, not unique).
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split text into sentences on `.`, `!`, and `?`.
///
/// Periods after known abbreviations, initials, dotted acronyms, and inside
/// decimal numbers or ellipses do not end a sentence; neither does a period
/// followed by a lowercase continuation.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let min_length = 3;
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        current.push(ch);
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        if ch == '.' && !period_ends_sentence(&chars, i, &current) {
            continue;
        }
        let sentence = current.trim();
        if sentence.len() >= min_length {
            sentences.push(sentence.to_string());
        }
        current.clear();
    }

    let sentence = current.trim();
    if sentence.len() >= min_length {
        sentences.push(sentence.to_string());
    }

    sentences
}

/// Decide whether the period at `pos` closes the current sentence.
fn period_ends_sentence(chars: &[char], pos: usize, current: &str) -> bool {
    let prev = pos.checked_sub(1).and_then(|p| chars.get(p)).copied();
    let next = chars.get(pos + 1).copied();

    // Decimal number: digit on both sides (3.14)
    if prev.is_some_and(|c| c.is_ascii_digit()) && next.is_some_and(|c| c.is_ascii_digit()) {
        return false;
    }

    // Ellipsis: part of a dot run
    if prev == Some('.') || next == Some('.') {
        return false;
    }

    if is_abbreviation(&word_before_period(current)) {
        return false;
    }

    // A lowercase continuation keeps the sentence open
    let mut j = pos + 1;
    while j < chars.len() && chars[j].is_whitespace() {
        j += 1;
    }
    !chars.get(j).is_some_and(|c| c.is_lowercase())
}

/// The token immediately preceding the terminating period, trailing dot removed.
fn word_before_period(current: &str) -> String {
    current
        .trim_end_matches('.')
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .to_string()
}

fn is_abbreviation(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    // Single initial (J.) or dotted acronym (U.S.A.)
    if word.chars().count() == 1 && word.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
        return true;
    }
    if word.contains('.') && word.chars().all(|c| c.is_ascii_uppercase() || c == '.') {
        return true;
    }
    ABBREVIATIONS.contains(word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_set_is_lowercase_alphabetic() {
        let words = word_set("Hello, WORLD! It's 42 degrees outside.");
        for w in &words {
            assert!(w.chars().all(|c| c.is_ascii_lowercase()), "bad token {w:?}");
        }
        assert!(words.contains("hello"));
        assert!(words.contains("world"));
        // "It's" splits into "it" and "s"; the single letter is dropped
        assert!(words.contains("it"));
        assert!(!words.contains("s"));
        assert!(!words.contains("42"));
    }

    #[test]
    fn word_set_deduplicates() {
        let words = word_set("cat cat cat");
        assert_eq!(words.len(), 1);
        assert!(words.contains("cat"));
    }

    #[test]
    fn word_set_empty_input() {
        assert!(word_set("").is_empty());
        assert!(word_set("   ").is_empty());
        assert!(word_set("7 + 3 = 10").is_empty());
    }

    #[test]
    fn single_letters_dropped_from_both_sides() {
        // "a" and "I" fall below MIN_WORD_LEN, same as in the word list
        let words = word_set("I saw a dog");
        assert_eq!(words.len(), 2);
        assert!(words.contains("saw"));
        assert!(words.contains("dog"));
    }

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "This is a sentence.");
    }

    #[test]
    fn abbreviations_not_split() {
        let sentences = split_sentences("Dr. Smith went to the store. He bought milk.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Dr. Smith"));
    }

    #[test]
    fn decimals_not_split() {
        let sentences = split_sentences("The price is 3.14 dollars. That is cheap.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.14"));
    }

    #[test]
    fn acronyms_not_split() {
        let sentences = split_sentences("She moved to the U.S.A. last year. It was sudden.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn question_and_exclamation() {
        let sentences = split_sentences("Are you serious? I cannot believe it! This is amazing.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn empty_input_has_no_sentences() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn count_words_is_multiset() {
        assert_eq!(count_words("the cat and the dog"), 5);
        assert_eq!(count_words(""), 0);
    }
}
