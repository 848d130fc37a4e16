//! Custom validation helpers for configuration values

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Matches 7-character hex colors such as `#1F77B4`
pub static HEX_COLOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color pattern is valid"));

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a tracing log level name
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if VALID_LOG_LEVELS.contains(&level) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}
