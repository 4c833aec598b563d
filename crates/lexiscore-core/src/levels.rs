//! Difficulty tiers for Flesch Reading Ease scores.
//!
//! Six right-open bands, evaluated top-down, each carrying a difficulty
//! label, an estimated CEFR proficiency tier, and a display color. The
//! classification is total: every real score (NaN included) lands in
//! exactly one tier.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of six readability tiers, easiest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DifficultyLevel {
    /// Score ≥ 90.
    VeryEasy,
    /// 80 ≤ score < 90.
    Easy,
    /// 65 ≤ score < 80.
    FairlyEasy,
    /// 50 ≤ score < 65.
    Standard,
    /// 30 ≤ score < 50.
    Difficult,
    /// Score < 30.
    VeryDifficult,
}

impl DifficultyLevel {
    /// Classify a Flesch Reading Ease score.
    ///
    /// First match wins; NaN fails every comparison and falls through to
    /// the bottom band.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 80.0 {
            Self::Easy
        } else if score >= 65.0 {
            Self::FairlyEasy
        } else if score >= 50.0 {
            Self::Standard
        } else if score >= 30.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }

    /// Human-readable difficulty label with US grade-level hint.
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy (5th grade)",
            Self::Easy => "Easy (6th grade)",
            Self::FairlyEasy => "Fairly Easy (7th-8th grade)",
            Self::Standard => "Standard (9th-12th grade)",
            Self::Difficult => "Difficult (College)",
            Self::VeryDifficult => "Very Difficult (Postgraduate)",
        }
    }

    /// Estimated CEFR proficiency tier.
    pub const fn cefr(self) -> &'static str {
        match self {
            Self::VeryEasy => "A1 (Beginner)",
            Self::Easy => "A2 (Elementary)",
            Self::FairlyEasy => "B1 (Intermediate)",
            Self::Standard => "B2 (Upper-Intermediate)",
            Self::Difficult => "C1 (Advanced)",
            Self::VeryDifficult => "C2 (Proficient)",
        }
    }

    /// Display color name associated with the tier.
    pub const fn color(self) -> &'static str {
        match self {
            Self::VeryEasy => "green",
            Self::Easy => "lightgreen",
            Self::FairlyEasy => "yellowgreen",
            Self::Standard => "orange",
            Self::Difficult => "tomato",
            Self::VeryDifficult => "red",
        }
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
