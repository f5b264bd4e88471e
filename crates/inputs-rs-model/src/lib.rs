//! # inputs-rs-model
//!
//! Model-value transforms for the inputs-rs library. A hosting control
//! declares filters and modifiers (named presets, patterns, or functions);
//! the [`resolver`] normalizes them into [`TransformFn`] chains and
//! [`transform`](transform::transform) folds a value through them.
//!
//! ## Modules
//!
//! - [`transform`] - Normalized transform functions and the executor
//! - [`filters`] - Filter declarations and the filter preset table
//! - [`modifiers`] - Modifier declarations and the modifier preset table
//! - [`resolver`] - Turning declarations into transform chains
//! - [`model_modifiers`] - Case modifiers attached to the model binding
//! - [`number`] - The default filter of number inputs
//! - [`pipeline`] - Cached filter → modifier → model-modifier chains
//! - [`config`] - Transform declarations loaded from JSON or TOML

pub mod config;
pub mod filters;
pub mod model_modifiers;
pub mod modifiers;
pub mod number;
pub mod pipeline;
pub mod resolver;
pub mod transform;

pub use config::TransformConfig;
pub use filters::{Filter, FilterPreset, FilterSpec};
pub use model_modifiers::ModelModifiers;
pub use modifiers::{Modifier, ModifierPreset, ModifierSpec};
pub use pipeline::TransformPipeline;
pub use resolver::{create_filters, create_modifiers, TransformResolver};
pub use transform::{transform, transform_fn, TransformFn};
