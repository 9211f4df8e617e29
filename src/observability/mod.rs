//! File-based logging for the plugin.
//!
//! Zellij plugins have no terminal to log to, so `tracing` output goes to a
//! plain-text file in the data directory:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → autocomplete.log
//! ```
//!
//! # Features
//!
//! - **File Output**: `~/.local/share/zellij/autocomplete/autocomplete.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Level Control**: `trace_level` plugin option, any `EnvFilter` directive
//! - **Span Timings**: a `close` line with busy/idle time per span
//!
//! # Usage
//!
//! ```rust,no_run
//! use autocomplete::observability::init_tracing;
//! use autocomplete::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
