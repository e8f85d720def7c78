//! Environment configuration helpers

use std::str::FromStr;

/// Load variables from a `.env` file in the working directory or its parents
///
/// Returns `true` when a file was found. Variables already present in the
/// process environment are left untouched.
pub fn load_dotenv() -> bool {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            true
        }
        Err(e) if e.not_found() => false,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse .env file");
            false
        }
    }
}

/// Read a variable, falling back to `default` when unset or empty
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Read and parse a variable
///
/// `Ok(None)` when unset; `Err` carries a readable message when the value
/// does not parse.
pub fn env_parse<T>(key: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| format!("{key}={raw:?} is invalid: {e}")),
        _ => Ok(None),
    }
}
