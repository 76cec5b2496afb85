//! Configuration utility functions
//!
//! Helpers for reading configuration values from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

/// Get a path value from an environment variable or use the default
pub fn get_env_path(key: &str, default: PathBuf) -> PathBuf {
    match std::env::var(key) {
        Ok(val) if !val.trim().is_empty() => PathBuf::from(val),
        _ => default,
    }
}

/// Get a parsed value from an environment variable or use the default.
///
/// Values that fail to parse are reported and ignored.
pub fn get_env_parsed<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("Ignoring {}={}: {}", key, val, e);
                default
            }
        },
        Err(_) => default,
    }
}
