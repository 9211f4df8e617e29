//! Error types for the autocomplete plugin.
//!
//! This module defines the centralized error type [`AutocompleteError`] and a
//! [`Result`] alias used throughout the crate. None of these errors reach the
//! user: fetch and parse failures degrade to "no candidates", theme failures
//! fall back to the default theme.

use thiserror::Error;

/// The main error type for autocomplete plugin operations.
///
/// # Examples
///
/// ```
/// use autocomplete::AutocompleteError;
///
/// let err = AutocompleteError::Fetch("HTTP status 503".to_string());
/// assert_eq!(err.to_string(), "Fetch error: HTTP status 503");
/// ```
#[derive(Debug, Error)]
pub enum AutocompleteError {
    /// The remote listing request did not produce a usable response.
    ///
    /// Covers non-success HTTP statuses reported by the host.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The remote listing body was not valid JSON.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for autocomplete operations.
pub type Result<T> = std::result::Result<T, AutocompleteError>;
