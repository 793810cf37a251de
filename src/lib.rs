// src/lib.rs
pub mod matching;
pub mod utils;

// Re-export the matching surface for easier access
pub use matching::fuzzy::{compare_fuzzy_tokens, is_fuzzy_match};
pub use matching::input::NameInput;
pub use matching::levenshtein::{self as levenshtein, LevenshteinOptions};
pub use matching::name::{
    are_names_similar, are_names_similar_with_config, is_name_similar, score_names,
    NameMatchScore, NameMatcher,
};
pub use matching::normalize::normalize_name;
pub use matching::token_set::compare_token_sets;
pub use utils::match_config::{NameMatchConfig, NameMatchConfigOverrides};
