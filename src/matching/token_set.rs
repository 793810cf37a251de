// src/matching/token_set.rs
use std::collections::HashSet;

/// Fraction of the smaller distinct-token set that also appears in the other.
/// Extra tokens on the larger side (a middle name, say) cost nothing.
pub fn compare_token_sets<S: AsRef<str>>(tokens1: &[S], tokens2: &[S]) -> f64 {
    let set1: HashSet<&str> = tokens1.iter().map(AsRef::as_ref).collect();
    let set2: HashSet<&str> = tokens2.iter().map(AsRef::as_ref).collect();

    let smaller = set1.len().min(set2.len());
    if smaller == 0 {
        return 0.0;
    }
    let common = set1.intersection(&set2).count();
    common as f64 / smaller as f64
}
