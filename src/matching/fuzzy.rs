// src/matching/fuzzy.rs
// Edit-distance token matching, tolerant of typos and truncated compounds

use crate::matching::levenshtein::{distance, LevenshteinOptions};
use crate::utils::match_config::NameMatchConfig;

/// Whether two tokens are close enough to count as the same word.
///
/// Tokens that are both at least `token_partial_length_threshold` long are
/// first compared on a common-length prefix, so "mcdonald" can match
/// "macdonld" even when the full-length distance is over the threshold.
pub fn is_fuzzy_match(token1: &str, token2: &str, config: &NameMatchConfig) -> bool {
    let options = LevenshteinOptions::default();
    let min_length = config.token_partial_length_threshold;
    let len1 = token1.chars().count();
    let len2 = token2.chars().count();

    if len1 >= min_length && len2 >= min_length {
        let trunc_length = len1.min(len2);
        let truncated1 = char_prefix(token1, trunc_length);
        let truncated2 = char_prefix(token2, trunc_length);
        if distance(truncated1, truncated2, &options) <= config.levenshtein_threshold {
            return true;
        }
    }

    distance(token1, token2, &options) <= config.levenshtein_threshold
}

/// Fraction of `tokens1` with a fuzzy match anywhere in `tokens2`, over the
/// longer of the two sequences. Not symmetric: only `tokens1` is tested.
pub fn compare_fuzzy_tokens<S: AsRef<str>>(
    tokens1: &[S],
    tokens2: &[S],
    config: &NameMatchConfig,
) -> f64 {
    let longest = tokens1.len().max(tokens2.len());
    if longest == 0 {
        return 0.0;
    }
    let matches = tokens1
        .iter()
        .filter(|t1| {
            tokens2
                .iter()
                .any(|t2| is_fuzzy_match(t1.as_ref(), t2.as_ref(), config))
        })
        .count();
    matches as f64 / longest as f64
}

fn char_prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fuzzy(t1: &[&str], t2: &[&str]) -> f64 {
        compare_fuzzy_tokens(t1, t2, &NameMatchConfig::default())
    }

    #[test]
    fn test_matches_small_typos() {
        assert_eq!(fuzzy(&["john"], &["jhon"]), 1.0);
        assert_eq!(fuzzy(&["smith"], &["smyth"]), 1.0);
        assert_eq!(fuzzy(&["robert"], &["robrt"]), 1.0);
        assert_eq!(fuzzy(&["nielsen"], &["nilsen"]), 1.0);
    }

    #[test]
    fn test_rejects_distance_over_threshold() {
        assert_eq!(fuzzy(&["john"], &["jane"]), 0.0);
    }

    #[test]
    fn test_multiple_tokens() {
        assert_eq!(fuzzy(&["john", "smith"], &["jhon", "smyth"]), 1.0);
        assert_eq!(fuzzy(&["john", "smith"], &["jhon", "doe"]), 0.5);
    }

    #[test]
    fn test_compound_names_match_on_prefix() {
        assert_eq!(fuzzy(&["oconnor"], &["occonor"]), 1.0);
        assert_eq!(fuzzy(&["mcdonald"], &["macdonld"]), 1.0);
        assert_eq!(fuzzy(&["jon"], &["jonathan"]), 1.0);
    }

    #[test]
    fn test_prefix_check_needs_minimum_length() {
        let config = NameMatchConfig::default();
        // "ab" is below the partial threshold; full distance to "abcde" is 3.
        assert!(!is_fuzzy_match("ab", "abcde", &config));
        // Short tokens still match on full distance.
        assert!(is_fuzzy_match("al", "ali", &config));
    }

    #[test]
    fn test_threshold_is_configurable() {
        let config = NameMatchConfig {
            levenshtein_threshold: 1,
            ..NameMatchConfig::default()
        };
        assert!(!is_fuzzy_match("john", "jhon", &config));
        assert!(is_fuzzy_match("smith", "smyth", &config));
    }

    #[test]
    fn test_not_symmetric() {
        let forward = fuzzy(&["john", "john"], &["john", "xavier", "zzzzzz"]);
        let backward = fuzzy(&["john", "xavier", "zzzzzz"], &["john", "john"]);
        assert!((forward - 2.0 / 3.0).abs() < 1e-12);
        assert!((backward - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_accented_tokens_compare_by_base_letter() {
        assert_eq!(fuzzy(&["josé"], &["jose"]), 1.0);
        assert!(is_fuzzy_match("müllerin", "mullerin", &NameMatchConfig {
            levenshtein_threshold: 0,
            ..NameMatchConfig::default()
        }));
    }

    #[test]
    fn test_stroked_letters_match_their_base_letter() {
        let exact_only = NameMatchConfig {
            levenshtein_threshold: 0,
            ..NameMatchConfig::default()
        };
        assert_eq!(compare_fuzzy_tokens(&["søren"], &["soren"], &exact_only), 1.0);
        assert_eq!(compare_fuzzy_tokens(&["łukasz"], &["lukasz"], &exact_only), 1.0);
    }

    #[test]
    fn test_empty_sequences_score_zero() {
        let empty: [&str; 0] = [];
        assert_eq!(fuzzy(&empty, &empty), 0.0);
        assert_eq!(fuzzy(&empty, &["john"]), 0.0);
        assert_eq!(fuzzy(&["john"], &empty), 0.0);
    }

    #[test]
    fn test_char_prefix_respects_char_boundaries() {
        assert_eq!(char_prefix("søren", 2), "sø");
        assert_eq!(char_prefix("abc", 10), "abc");
    }
}
