// src/utils/match_config.rs
//! Tunable parameters for name matching.
//!
//! `NameMatchConfig` is the complete, immutable set of parameters every
//! matching call receives. `NameMatchConfigOverrides` is the partial form
//! callers use to change a few fields while keeping the rest at their
//! defaults; it can be read from a JSON file or from environment variables.

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::utils::constants::{
    DEFAULT_APPROVAL_THRESHOLD, DEFAULT_EXCLUDED_WORDS, DEFAULT_FUZZY_SCORE_WEIGHT,
    DEFAULT_LEVENSHTEIN_THRESHOLD, DEFAULT_SET_SCORE_WEIGHT,
    DEFAULT_TOKEN_PARTIAL_LENGTH_THRESHOLD,
};
use crate::utils::env::parse_env_var;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Configuration for name matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameMatchConfig {
    /// Weight for exact token matches (0-1)
    pub set_score_weight: f64,
    /// Weight for fuzzy token matches (0-1)
    pub fuzzy_score_weight: f64,
    /// Minimum combined score to consider names similar (0-1)
    pub approval_threshold: f64,
    /// Minimum token length for truncated-prefix comparison
    pub token_partial_length_threshold: usize,
    /// Maximum Levenshtein distance for a fuzzy token match
    pub levenshtein_threshold: usize,
    /// Tokens ignored during comparison, stored lowercase
    #[serde(deserialize_with = "deserialize_lowercase_words")]
    pub excluded_words: BTreeSet<String>,
}

fn deserialize_lowercase_words<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let words = Vec::<String>::deserialize(deserializer)?;
    Ok(lowercase_words(&words))
}

fn lowercase_words(words: &[String]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

impl Default for NameMatchConfig {
    fn default() -> Self {
        Self {
            set_score_weight: DEFAULT_SET_SCORE_WEIGHT,
            fuzzy_score_weight: DEFAULT_FUZZY_SCORE_WEIGHT,
            approval_threshold: DEFAULT_APPROVAL_THRESHOLD,
            token_partial_length_threshold: DEFAULT_TOKEN_PARTIAL_LENGTH_THRESHOLD,
            levenshtein_threshold: DEFAULT_LEVENSHTEIN_THRESHOLD,
            excluded_words: DEFAULT_EXCLUDED_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl NameMatchConfig {
    /// Default configuration with `overrides` applied on top.
    pub fn with_overrides(overrides: &NameMatchConfigOverrides) -> Self {
        overrides.apply_to(&Self::default())
    }

    /// Replaces the excluded-word list, lowercasing every entry.
    pub fn with_excluded_words<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.excluded_words = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
        self
    }

    /// Whether a (lowercased) token is on the excluded-word list.
    /// Entries are lowercased when the config is built, deserialized or
    /// given overrides; a multi-word entry can never equal a single token.
    pub fn is_excluded_word(&self, token: &str) -> bool {
        self.excluded_words.contains(token)
    }

    /// Rejects values the matching engine cannot interpret sensibly.
    /// Weights that do not sum to 1 are allowed but logged.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("setScoreWeight", self.set_score_weight),
            ("fuzzyScoreWeight", self.fuzzy_score_weight),
            ("approvalThreshold", self.approval_threshold),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                bail!("{} must be within [0, 1], got {}", field, value);
            }
        }
        if self.token_partial_length_threshold == 0 {
            bail!("tokenPartialLengthThreshold must be a positive integer");
        }

        let weight_sum = self.set_score_weight + self.fuzzy_score_weight;
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            warn!(
                "Score weights sum to {:.3} (set={}, fuzzy={}); combined scores may leave [0, 1]",
                weight_sum, self.set_score_weight, self.fuzzy_score_weight
            );
        }
        Ok(())
    }

    /// Log the current configuration
    pub fn log_config(&self) {
        info!("👤 Name matching configuration");
        info!(
            "   Weights: set={}, fuzzy={}",
            self.set_score_weight, self.fuzzy_score_weight
        );
        info!("   Approval threshold: {}", self.approval_threshold);
        info!(
            "   Levenshtein threshold: {} (prefix comparison from {} chars)",
            self.levenshtein_threshold, self.token_partial_length_threshold
        );
        info!("   Excluded words: {}", self.excluded_words.len());
    }
}

/// Partial configuration: every field left as `None` keeps the value of the
/// configuration it is applied to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct NameMatchConfigOverrides {
    pub set_score_weight: Option<f64>,
    pub fuzzy_score_weight: Option<f64>,
    pub approval_threshold: Option<f64>,
    pub token_partial_length_threshold: Option<usize>,
    pub levenshtein_threshold: Option<usize>,
    /// Replaces the whole excluded-word list when set.
    pub excluded_words: Option<Vec<String>>,
}

impl NameMatchConfigOverrides {
    /// Read overrides from a JSON file using the camelCase field names.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read name match config {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Invalid name match config in {}", path.display()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Failed to parse name match config JSON")
    }

    /// Create overrides from `NAME_MATCH_*` environment variables.
    /// Unset or unparseable variables leave the field untouched.
    pub fn from_env() -> Self {
        let excluded_words = std::env::var("NAME_MATCH_EXCLUDED_WORDS").ok().map(|raw| {
            raw.split(',')
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect()
        });

        Self {
            set_score_weight: parse_env_var("NAME_MATCH_SET_SCORE_WEIGHT"),
            fuzzy_score_weight: parse_env_var("NAME_MATCH_FUZZY_SCORE_WEIGHT"),
            approval_threshold: parse_env_var("NAME_MATCH_APPROVAL_THRESHOLD"),
            token_partial_length_threshold: parse_env_var(
                "NAME_MATCH_TOKEN_PARTIAL_LENGTH_THRESHOLD",
            ),
            levenshtein_threshold: parse_env_var("NAME_MATCH_LEVENSHTEIN_THRESHOLD"),
            excluded_words,
        }
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: NameMatchConfigOverrides) -> Self {
        Self {
            set_score_weight: other.set_score_weight.or(self.set_score_weight),
            fuzzy_score_weight: other.fuzzy_score_weight.or(self.fuzzy_score_weight),
            approval_threshold: other.approval_threshold.or(self.approval_threshold),
            token_partial_length_threshold: other
                .token_partial_length_threshold
                .or(self.token_partial_length_threshold),
            levenshtein_threshold: other.levenshtein_threshold.or(self.levenshtein_threshold),
            excluded_words: other.excluded_words.or(self.excluded_words),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, base: &NameMatchConfig) -> NameMatchConfig {
        NameMatchConfig {
            set_score_weight: self.set_score_weight.unwrap_or(base.set_score_weight),
            fuzzy_score_weight: self.fuzzy_score_weight.unwrap_or(base.fuzzy_score_weight),
            approval_threshold: self.approval_threshold.unwrap_or(base.approval_threshold),
            token_partial_length_threshold: self
                .token_partial_length_threshold
                .unwrap_or(base.token_partial_length_threshold),
            levenshtein_threshold: self
                .levenshtein_threshold
                .unwrap_or(base.levenshtein_threshold),
            excluded_words: match &self.excluded_words {
                Some(words) => lowercase_words(words),
                None => base.excluded_words.clone(),
            },
        }
    }
}

/// Effective configuration from layered sources: defaults, then the JSON
/// file at `path`, then `NAME_MATCH_*` variables, then `cli_overrides`.
pub fn resolve_config(
    path: Option<&Path>,
    cli_overrides: NameMatchConfigOverrides,
) -> Result<NameMatchConfig> {
    let file_overrides = match path {
        Some(path) => {
            info!("Loading name match config from {}", path.display());
            NameMatchConfigOverrides::from_json_file(path)?
        }
        None => NameMatchConfigOverrides::default(),
    };
    let overrides = file_overrides
        .merge(NameMatchConfigOverrides::from_env())
        .merge(cli_overrides);
    debug!("Effective overrides: {:?}", overrides);

    let config = NameMatchConfig::with_overrides(&overrides);
    config
        .validate()
        .context("Invalid name match configuration")?;
    config.log_config();
    Ok(config)
}
