// src/utils/env.rs
use log::{debug, info, warn};

/// Loads variables from a `.env` file in the working directory (or a parent),
/// if one exists. Variables already set in the process environment win.
pub fn load_env() {
    match dotenv::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }
}

/// Reads and parses an environment variable, ignoring it when unset or unparseable.
pub(crate) fn parse_env_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: could not parse value", key, raw);
            None
        }
    }
}
