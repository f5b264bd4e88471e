//! # inputs-rs-validation
//!
//! Model-value validation for the inputs-rs library. Validators are plain
//! functions returning pass, fail, or a failure message; [`validate`] runs all
//! of them and aggregates the outcome into a [`ValidationResult`].
//!
//! ## Modules
//!
//! - [`validation`] - Validator aggregation and the `required` placeholder
//! - [`required`] - Control-specific "value is present" predicates
//! - [`files`] - The file handles file inputs validate
//! - [`config`] - Validator declarations loaded from JSON or TOML

pub mod config;
pub mod files;
pub mod required;
pub mod validation;

pub use config::{resolve_validators, ValidatorDecl, ValidatorSpec};
pub use files::FileHandle;
pub use validation::{
    replace_required_preset, validate, ValidationOutcome, ValidationResult, Validator,
    ValidatorItem,
};
