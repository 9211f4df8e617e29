//! Domain layer for the autocomplete plugin.
//!
//! Core types and the shared filtering rule, independent of Zellij APIs and
//! rendering.
//!
//! # Organization
//!
//! - [`candidate`]: Candidate model
//! - [`error`]: Error types and result alias
//! - [`filter`]: Case-insensitive substring filter and match ranges

pub mod candidate;
pub mod error;
pub mod filter;

pub use candidate::Candidate;
pub use error::{AutocompleteError, Result};
