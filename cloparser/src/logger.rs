//! Logging setup for programs built on the scanner.
//!
//! The scanner reports every probe decision through `tracing` (`trace!` for
//! each probe, `debug!` for matches and value failures). This module installs
//! a subscriber that prints those events to stderr and forwards `log` crate
//! calls to `tracing`.
//!
//! # Example
//!
//! ```ignore
//! use cloparser::logger::init_logging;
//!
//! // Honors RUST_LOG, falls back to "info"
//! init_logging("info");
//! tracing::info!("parsing options");
//! ```

use std::sync::OnceLock;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize logging with a stderr `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` when it is set, otherwise from
/// `default_filter` (e.g. `"info"` or `"cloparser=trace"`).
///
/// Calling this more than once is harmless; only the first call has effect.
pub fn init_logging(default_filter: &str) {
    LOGGER_INITIALIZED.get_or_init(|| {
        // Set up log -> tracing bridge
        tracing_log::LogTracer::init().ok();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .with_span_events(FmtSpan::NONE)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .ok();
    });
}
