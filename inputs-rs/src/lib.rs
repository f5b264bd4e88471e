//! # inputs-rs
//!
//! Headless form-input controls with a shared model-value pipeline: declared
//! filters and modifiers transform the value, declared validators check it.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient access.
//! You can depend on `inputs-rs` to get the whole library, or depend on
//! individual crates for finer-grained control.
//!
//! ## Quick start
//!
//! ```
//! use inputs_rs::prelude::*;
//!
//! let mut postal_code = TextModel::new("postal-code")
//!     .with_filters(FilterSpec::from(vec![Filter::pattern("[0-9A-Za-z]").unwrap()]))
//!     .with_modifiers(ModifierSpec::from(Modifier::preset("uppercase")))
//!     .with_validators([ValidatorItem::Required]);
//!
//! postal_code.set_value(Some("1234 ab"));
//! assert_eq!(postal_code.value(), Some("1234AB"));
//! assert!(postal_code.validate().valid);
//! ```

/// Settings, logging, diagnostics, errors, and collection helpers.
pub use inputs_rs_core as core;

/// Filters, modifiers, resolution, and the transform executor.
#[cfg(feature = "model")]
pub use inputs_rs_model as model;

/// Validators, the `required` placeholder, and validation results.
#[cfg(feature = "validation")]
pub use inputs_rs_validation as validation;

/// Headless text, number, checkbox, radio, and file controls.
#[cfg(feature = "controls")]
pub use inputs_rs_controls as controls;

/// Diagnostic capture and assertion helpers for tests.
#[cfg(feature = "testing")]
pub use inputs_rs_test as test;

// ── Third-party re-exports ──────────────────────────────────────────

pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;

/// The most commonly used types.
pub mod prelude {
    pub use inputs_rs_core::logging::setup_logging;
    pub use inputs_rs_core::{
        CheckboxValue, CollectionModel, DiagnosticSink, InputsError, InputsResult, OneOrMany,
        Settings, SharedSink, StringCollection,
    };

    #[cfg(feature = "model")]
    pub use inputs_rs_model::{
        create_filters, create_modifiers, transform, transform_fn, Filter, FilterSpec,
        ModelModifiers, Modifier, ModifierSpec, TransformFn, TransformPipeline, TransformResolver,
    };

    #[cfg(feature = "validation")]
    pub use inputs_rs_validation::{
        replace_required_preset, validate, FileHandle, ValidationOutcome, ValidationResult,
        Validator, ValidatorItem,
    };

    #[cfg(feature = "controls")]
    pub use inputs_rs_controls::{
        CheckboxModel, ControlConfig, FileModel, NumberModel, RadioModel, TextKind, TextModel,
    };
}
