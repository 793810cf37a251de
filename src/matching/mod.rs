pub mod fuzzy;
pub mod input;
pub mod levenshtein;
pub mod name;
pub mod normalize;
pub mod token_set;
