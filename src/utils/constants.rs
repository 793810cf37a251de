// src/utils/constants.rs

/// Weight of the exact token-set score in the combined score.
pub const DEFAULT_SET_SCORE_WEIGHT: f64 = 0.6;
/// Weight of the fuzzy token score in the combined score.
pub const DEFAULT_FUZZY_SCORE_WEIGHT: f64 = 0.4;
/// Minimum combined score for two names to be considered the same entity.
pub const DEFAULT_APPROVAL_THRESHOLD: f64 = 0.66;
/// Tokens at least this long are also compared on their truncated prefixes.
pub const DEFAULT_TOKEN_PARTIAL_LENGTH_THRESHOLD: usize = 3;
/// Maximum Levenshtein distance for two tokens to count as a fuzzy match.
pub const DEFAULT_LEVENSHTEIN_THRESHOLD: usize = 2;

/// Honorifics and legal-entity suffixes dropped before scoring.
/// Accents are already folded away by the time tokens are checked.
/// Multi-word entries never match a single token and are kept for compatibility.
pub const DEFAULT_EXCLUDED_WORDS: &[&str] = &[
    // English titles
    "mr", "mrs", "ms", "dr", "miss", "mister", "esq",
    // French titles
    "monsieur", "madame", "mademoiselle", "mle", "mme", "mlle",
    // Spanish/Portuguese titles
    "senor", "senora", "senorita", "don", "dona", "sr", "sra", "srta",
    // French sole-trader markers
    "ei", "et",
    // English business entities
    "llc", "llp", "inc", "corp", "incorporated", "corporation",
    "limited liability company", "limited liability partnership",
    // Spanish/Latin American business entities
    "sa", "srl", "sociedad anonima", "sociedad de responsabilidad limitada",
    // French business entities
    "sas", "sarl", "eurl", "sasu",
    "societe anonyme", "societe par actions simplifiee",
    "societe a responsabilite limitee",
    "entreprise unipersonnelle a responsabilite limitee",
    // German
    "ag", "gmbh", "kg", "ug",
    // Dutch
    "bv", "nv",
    // Italian
    "spa",
    // Finnish/Swedish
    "oy", "ab",
    // Norwegian/Danish
    "as",
];
