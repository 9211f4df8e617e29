//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing::Subscriber;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "autocomplete.log";

/// Initializes the tracing subscriber with a rotating log file.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events with the `trace_level` directive (default `"info"`)
/// 2. Formats them as plain text lines without ANSI colors, plus one line
///    with busy/idle timings when each span closes
/// 3. Writes them to `autocomplete.log` in the data directory, rotating at 10 MB
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently gives up if directory creation fails (logging is optional)
/// - Idempotent: only the first call installs a subscriber
///
/// An unparsable `trace_level` falls back to `"info"`.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = FileWriter::new(data_dir.join(LOG_FILE_NAME));
    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(log_layer(writer))
        .try_init();
}

/// Plain-text layer writing events and span timings to `writer`.
fn log_layer<S>(writer: FileWriter) -> impl Layer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(move || writer.clone())
}
