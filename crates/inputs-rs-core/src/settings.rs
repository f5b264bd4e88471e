//! Settings for the inputs-rs library.
//!
//! This module provides the [`Settings`] struct, which holds the library-wide
//! configuration shared by every hosting control: logging, diagnostic
//! behaviour, and defaults for number inputs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The complete set of library settings.
///
/// # Examples
///
/// ```
/// use inputs_rs_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.log_level, "info");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled.
    pub debug: bool,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,
    /// Whether malformed filter/modifier/validator declarations are reported.
    ///
    /// When `false`, [`sink_from_settings`](crate::logging::sink_from_settings)
    /// hands out a sink that discards every diagnostic.
    pub warn_on_unknown_presets: bool,

    // ── Number inputs ────────────────────────────────────────────────

    /// Characters number inputs accept in addition to the digits `0-9`
    /// (e.g. `".,"` for decimal separators).
    pub number_allowed_characters: String,

    // ── Escape hatch ─────────────────────────────────────────────────

    /// Custom settings that don't fit into the above categories.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            warn_on_unknown_presets: true,
            number_allowed_characters: String::new(),
            extra: HashMap::new(),
        }
    }
}
