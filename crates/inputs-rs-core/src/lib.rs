//! # inputs-rs-core
//!
//! Core types, settings, diagnostics, and error types for the inputs-rs library.
//! This crate has no dependencies on the other inputs-rs crates and provides
//! the foundation the transform and validation pipelines are built on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`logging`] - Diagnostic sinks and tracing-based logging setup
//! - [`settings`] - Library settings
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`utils`] - Utility types (`OneOrMany`, string collections)

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{InputsError, InputsResult};
pub use logging::{DiagnosticSink, NoopSink, SharedSink, TracingSink};
pub use settings::Settings;
pub use utils::{CheckboxValue, CollectionModel, OneOrMany, StringCollection};
