// src/matching/name.rs
// Name similarity decision: combines token-set and fuzzy scores against the approval threshold

use log::debug;
use serde::Serialize;

use crate::matching::fuzzy::compare_fuzzy_tokens;
use crate::matching::input::NameInput;
use crate::matching::normalize::normalize_name;
use crate::matching::token_set::compare_token_sets;
use crate::utils::match_config::{NameMatchConfig, NameMatchConfigOverrides};

/// Score breakdown for a single name pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NameMatchScore {
    pub set_score: f64,
    pub fuzzy_score: f64,
    pub combined: f64,
    pub is_match: bool,
}

impl NameMatchScore {
    fn rejected() -> Self {
        Self {
            set_score: 0.0,
            fuzzy_score: 0.0,
            combined: 0.0,
            is_match: false,
        }
    }
}

/// Scores two raw names. Either name being empty is an automatic non-match.
pub fn score_names(name1: &str, name2: &str, config: &NameMatchConfig) -> NameMatchScore {
    if name1.is_empty() || name2.is_empty() {
        return NameMatchScore::rejected();
    }

    let tokens1 = normalize_name(name1, config);
    let tokens2 = normalize_name(name2, config);

    let set_score = compare_token_sets(&tokens1, &tokens2);
    let fuzzy_score = compare_fuzzy_tokens(&tokens1, &tokens2, config);
    let combined =
        set_score * config.set_score_weight + fuzzy_score * config.fuzzy_score_weight;
    let is_match = combined >= config.approval_threshold;

    debug!(
        "Name pair {:?} vs {:?}: tokens {:?} / {:?}, set={:.3}, fuzzy={:.3}, combined={:.3} -> {}",
        name1,
        name2,
        tokens1,
        tokens2,
        set_score,
        fuzzy_score,
        combined,
        if is_match { "match" } else { "no match" }
    );

    NameMatchScore {
        set_score,
        fuzzy_score,
        combined,
        is_match,
    }
}

/// Whether two single names refer to the same entity.
pub fn is_name_similar(name1: &str, name2: &str, config: &NameMatchConfig) -> bool {
    score_names(name1, name2, config).is_match
}

/// Whether any variant on one side matches any variant on the other, using
/// the default configuration with `overrides` applied.
pub fn are_names_similar(
    names1: impl Into<NameInput>,
    names2: impl Into<NameInput>,
    overrides: &NameMatchConfigOverrides,
) -> bool {
    let names1 = names1.into();
    let names2 = names2.into();
    if names1.is_empty() || names2.is_empty() {
        return false;
    }
    let config = NameMatchConfig::with_overrides(overrides);
    any_pair_similar(&names1, &names2, &config)
}

/// Same as [`are_names_similar`] with a fully specified configuration.
pub fn are_names_similar_with_config(
    names1: impl Into<NameInput>,
    names2: impl Into<NameInput>,
    config: &NameMatchConfig,
) -> bool {
    any_pair_similar(&names1.into(), &names2.into(), config)
}

fn any_pair_similar(names1: &NameInput, names2: &NameInput, config: &NameMatchConfig) -> bool {
    if names1.is_empty() || names2.is_empty() {
        return false;
    }
    names1.names().iter().any(|name1| {
        names2
            .names()
            .iter()
            .any(|name2| is_name_similar(name1, name2, config))
    })
}

/// Reusable matcher holding a merged configuration.
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct NameMatcher {
    config: NameMatchConfig,
}

impl NameMatcher {
    pub fn new(config: NameMatchConfig) -> Self {
        Self { config }
    }

    pub fn with_overrides(overrides: &NameMatchConfigOverrides) -> Self {
        Self::new(NameMatchConfig::with_overrides(overrides))
    }

    pub fn config(&self) -> &NameMatchConfig {
        &self.config
    }

    pub fn normalize(&self, name: &str) -> Vec<String> {
        normalize_name(name, &self.config)
    }

    pub fn score(&self, name1: &str, name2: &str) -> NameMatchScore {
        score_names(name1, name2, &self.config)
    }

    pub fn is_similar(&self, name1: &str, name2: &str) -> bool {
        is_name_similar(name1, name2, &self.config)
    }

    pub fn are_similar(&self, names1: impl Into<NameInput>, names2: impl Into<NameInput>) -> bool {
        are_names_similar_with_config(names1, names2, &self.config)
    }
}
