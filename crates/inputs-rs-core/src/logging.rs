//! Logging and diagnostics for the inputs-rs library.
//!
//! Malformed filter, modifier, and validator declarations never fail a
//! pipeline; they are reported through a [`DiagnosticSink`] and dropped. The
//! default sink forwards to [`tracing`], so diagnostics end up wherever the
//! host application routes its logs. Tests and embedders can inject their
//! own sink instead.
//!
//! [`setup_logging`] installs a `tracing-subscriber` configured from
//! [`Settings`].

use std::sync::Arc;

use crate::settings::Settings;

/// A write-only channel for malformed-declaration notices.
///
/// Diagnostics are fire-and-forget: callers must never branch on them.
pub trait DiagnosticSink: Send + Sync {
    /// Reports a non-fatal problem.
    ///
    /// `context` is the message itself (e.g. "Unknown filter provided"),
    /// `detail` carries optional extra information and may be empty.
    fn warn(&self, context: &str, detail: &str);
}

/// A shared, thread-safe diagnostic sink.
pub type SharedSink = Arc<dyn DiagnosticSink>;

/// Forwards diagnostics to `tracing::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, context: &str, detail: &str) {
        if detail.is_empty() {
            tracing::warn!(target: "inputs_rs", "{context}");
        } else {
            tracing::warn!(target: "inputs_rs", detail, "{context}");
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn warn(&self, _context: &str, _detail: &str) {}
}

/// Returns the process-wide default sink, which logs through `tracing`.
pub fn default_sink() -> SharedSink {
    Arc::new(TracingSink)
}

/// Returns the sink selected by `settings.warn_on_unknown_presets`.
pub fn sink_from_settings(settings: &Settings) -> SharedSink {
    if settings.warn_on_unknown_presets {
        default_sink()
    } else {
        Arc::new(NoopSink)
    }
}

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log level is read from `settings.log_level` (e.g. "debug", "info", "warn",
/// "error"). In debug mode a pretty, human-readable format is used; otherwise
/// a structured JSON format is used. Installing a subscriber twice is a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for a hosting control.
///
/// Entering the span while a control resolves or validates its model value
/// tags every diagnostic with the control's name.
///
/// # Examples
///
/// ```
/// use inputs_rs_core::logging::control_span;
///
/// let span = control_span("postal-code");
/// let _guard = span.enter();
/// tracing::debug!("resolving filters");
/// ```
pub fn control_span(name: &str) -> tracing::Span {
    tracing::debug_span!("control", name)
}
