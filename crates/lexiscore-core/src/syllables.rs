//! Word-level syllable counting.
//!
//! A dictionary of common words with known counts, backed by a vowel-group
//! estimation heuristic for everything else. The dictionary covers the words
//! the heuristic is known to get wrong (vowel hiatus, silent endings).

use std::collections::HashMap;
use std::sync::LazyLock;

/// Common words with known syllable counts.
static SYLLABLE_DICT: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Vowel clusters that are pronounced separately
    map.extend([
        ("area", 3),
        ("being", 2),
        ("create", 2),
        ("created", 3),
        ("diary", 3),
        ("idea", 3),
        ("ideas", 3),
        ("lion", 2),
        ("media", 3),
        ("period", 3),
        ("poem", 2),
        ("quiet", 2),
        ("radio", 3),
        ("react", 2),
        ("real", 2),
        ("really", 3),
        ("science", 2),
        ("serious", 3),
        ("social", 2),
        ("special", 2),
        ("theater", 3),
        ("usual", 3),
        ("usually", 4),
        ("video", 3),
        ("violet", 3),
        ("violent", 3),
    ]);

    // Silent or reduced endings the heuristic miscounts
    map.extend([
        ("average", 3),
        ("business", 2),
        ("camera", 3),
        ("chocolate", 3),
        ("comfortable", 4),
        ("different", 3),
        ("evening", 2),
        ("every", 2),
        ("everyone", 3),
        ("everything", 3),
        ("family", 3),
        ("favorite", 3),
        ("general", 3),
        ("interest", 3),
        ("interesting", 4),
        ("literature", 4),
        ("memory", 3),
        ("natural", 3),
        ("ordinary", 4),
        ("orange", 2),
        ("police", 2),
        ("restaurant", 3),
        ("separate", 3),
        ("several", 3),
        ("temperature", 4),
        ("vegetable", 4),
    ]);

    // High-frequency words worth a direct hit
    map.extend([
        ("the", 1),
        ("people", 2),
        ("because", 2),
        ("before", 2),
        ("between", 2),
        ("little", 2),
        ("again", 2),
        ("against", 2),
        ("always", 2),
        ("another", 3),
        ("beautiful", 3),
        ("important", 3),
        ("together", 3),
        ("something", 2),
        ("sometimes", 2),
        ("everywhere", 3),
        ("able", 2),
        ("table", 2),
        ("simple", 2),
        ("example", 3),
        ("once", 1),
        ("one", 1),
        ("some", 1),
        ("come", 1),
        ("done", 1),
        ("gone", 1),
        ("have", 1),
        ("give", 1),
        ("live", 1),
        ("love", 1),
        ("move", 1),
        ("were", 1),
        ("where", 1),
        ("there", 1),
        ("these", 1),
        ("those", 1),
        ("house", 1),
        ("horse", 1),
        ("course", 1),
        ("large", 1),
        ("voice", 1),
        ("juice", 1),
        ("piece", 1),
        ("peace", 1),
    ]);

    map
});

/// Look up a syllable count in the dictionary.
pub fn lookup(word: &str) -> Option<usize> {
    SYLLABLE_DICT.get(word.to_lowercase().as_str()).copied()
}

/// Estimate syllables by counting vowel groups, with silent-ending adjustments.
///
/// Fallback for words not in the dictionary.
pub fn estimate(word: &str) -> usize {
    let lowered: String = word
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect();
    if lowered.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut groups = 0usize;
    let mut in_group = false;
    for c in lowered.chars() {
        let v = is_vowel(c);
        if v && !in_group {
            groups += 1;
        }
        in_group = v;
    }

    // Silent e: "make", "store", but not "-le" ("table") or "-ee" ("free")
    if groups > 1 && lowered.ends_with('e') && !lowered.ends_with("le") && !lowered.ends_with("ee")
    {
        groups -= 1;
    }

    // Past-tense -ed is usually silent unless it follows t or d ("wanted")
    if groups > 1
        && lowered.ends_with("ed")
        && !lowered.ends_with("ted")
        && !lowered.ends_with("ded")
    {
        groups -= 1;
    }

    groups.max(1)
}

/// Count syllables: dictionary lookup with estimation fallback.
pub fn count(word: &str) -> usize {
    lookup(word).unwrap_or_else(|| estimate(word))
}
