//! String similarity measures.
//!
//! The default measure is the Sørensen-Dice coefficient over character
//! bigrams, computed after removing all whitespace. Jaro-Winkler is available
//! as an alternate scorer.

use std::collections::HashMap;

use rapidfuzz::distance::jaro_winkler;
use serde::{Deserialize, Serialize};

/// Scorer used for non-exact candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimilarityMetric {
    /// Bigram Dice coefficient, whitespace-insensitive.
    #[default]
    Dice,
    /// Jaro-Winkler similarity on the names as given.
    JaroWinkler,
}

impl SimilarityMetric {
    /// Score two names. Callers lowercase both sides first.
    pub fn score(self, a: &str, b: &str) -> f64 {
        match self {
            Self::Dice => dice_coefficient(a, b),
            Self::JaroWinkler => jaro_winkler::similarity(a.chars(), b.chars()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dice => "dice",
            Self::JaroWinkler => "jaro-winkler",
        }
    }
}

/// Bigram Dice coefficient between two strings, in `[0, 1]`.
///
/// Whitespace is removed from both inputs. Equal stripped strings score `1.0`
/// (including two blank strings); a stripped string shorter than two
/// characters shares no bigrams and scores `0.0`. Repeated bigrams are
/// counted as a multiset, so "aaaa" vs "aa" is `2*1 / (4+2-2) = 0.5`.
pub fn dice_coefficient(a: &str, b: &str) -> f64 {
    let first: Vec<char> = a.chars().filter(|ch| !ch.is_whitespace()).collect();
    let second: Vec<char> = b.chars().filter(|ch| !ch.is_whitespace()).collect();

    if first == second {
        return 1.0;
    }
    if first.len() < 2 || second.len() < 2 {
        return 0.0;
    }

    let mut bigrams: HashMap<(char, char), usize> = HashMap::with_capacity(first.len() - 1);
    for pair in first.windows(2) {
        *bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut shared = 0usize;
    for pair in second.windows(2) {
        if let Some(count) = bigrams.get_mut(&(pair[0], pair[1]))
            && *count > 0
        {
            *count -= 1;
            shared += 1;
        }
    }

    (2 * shared) as f64 / (first.len() + second.len() - 2) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn identical_strings_score_one() {
        assert_close(dice_coefficient("ecg", "ecg"), 1.0);
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_close(dice_coefficient("x ray", "xray"), 1.0);
        assert_close(dice_coefficient("  ", ""), 1.0);
    }

    #[test]
    fn single_character_scores_zero() {
        assert_close(dice_coefficient("a", "ab"), 0.0);
        assert_close(dice_coefficient("", "ab"), 0.0);
    }

    #[test]
    fn repeated_bigrams_are_a_multiset() {
        assert_close(dice_coefficient("aaaa", "aa"), 0.5);
        assert_close(dice_coefficient("aa", "aaaa"), 0.5);
    }

    #[test]
    fn known_scores() {
        // th, et, te shared out of 10 + 10 bigrams
        assert_close(dice_coefficient("thermometer", "stethoscope"), 0.3);
        // ul..nd (9) shared, 16 + 9 bigrams
        assert_close(dice_coefficient("ultrasound machine", "ultrasound"), 0.72);
        // ul..nd plus ne (10) shared, 16 + 16 bigrams
        assert_close(
            dice_coefficient("ultrasound machine", "ultrasound scanner"),
            0.625,
        );
        assert_close(dice_coefficient("x-ray machine", "x-ray film"), 8.0 / 19.0);
        assert_close(dice_coefficient("x-ray machine", "digital x-ray"), 8.0 / 22.0);
    }

    #[test]
    fn jaro_winkler_is_bounded() {
        let score = SimilarityMetric::JaroWinkler.score("ultrasound", "ultrasound machine");
        assert!(score > 0.8 && score <= 1.0, "got {score}");
        assert_close(SimilarityMetric::JaroWinkler.score("ecg", "ecg"), 1.0);
    }
}
