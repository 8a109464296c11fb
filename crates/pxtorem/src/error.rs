//! Error types for option resolution.
//!
//! Every error is raised while turning an option bag into
//! [`Options`](crate::Options), before any style sheet is touched. Walking a
//! sheet never fails.

use thiserror::Error;

/// Errors that can occur while resolving conversion options.
///
/// # Examples
///
/// ```rust
/// use pxtorem::{Error, Options};
/// use serde_json::json;
///
/// let result = Options::from_json(&json!({ "exclude": 42 }));
/// assert!(matches!(result, Err(Error::InvalidExcludeConfig(_))));
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// `exclude` was neither a pattern nor a list of patterns.
    #[error("options.exclude should be a pattern or an array of patterns, got {0}")]
    InvalidExcludeConfig(String),

    /// One entry of `exclude` is not a usable pattern.
    #[error("options.exclude[{index}] is not a valid pattern: {reason}")]
    InvalidExcludeEntry { index: usize, reason: String },

    /// A canonical option has the wrong type or an out-of-range value.
    #[error("invalid value for option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
