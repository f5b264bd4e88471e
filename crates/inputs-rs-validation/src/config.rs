//! Validator declarations loaded from JSON or TOML.
//!
//! Functions cannot be written in a configuration document, so the only
//! declarable validator is the `"required"` preset. Other entries are
//! reported through the diagnostic sink and dropped.

use std::fmt;

use inputs_rs_core::{OneOrMany, SharedSink};
use serde::{Deserialize, Deserializer};

use crate::validation::ValidatorItem;

/// Diagnostic emitted for a validator preset name other than `required`.
pub const UNKNOWN_VALIDATOR_PRESET: &str = "Unknown validator preset provided";
/// Diagnostic emitted for a validator entry that is not a preset name.
pub const UNKNOWN_VALIDATOR: &str = "Unknown validator provided";

/// The name of the only validator preset.
pub const REQUIRED: &str = "required";

/// A validator declaration: one entry or an ordered list of entries.
pub type ValidatorSpec = OneOrMany<ValidatorDecl>;

/// A single declared validator.
#[derive(Clone, PartialEq)]
pub enum ValidatorDecl {
    /// A preset name.
    Preset(String),
    /// An entry of unrecognized type.
    Other(serde_json::Value),
}

impl fmt::Debug for ValidatorDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(name) => f.debug_tuple("Preset").field(name).finish(),
            Self::Other(value) => f.debug_tuple("Other").field(value).finish(),
        }
    }
}

impl From<&str> for ValidatorDecl {
    fn from(name: &str) -> Self {
        Self::Preset(name.to_string())
    }
}

impl From<serde_json::Value> for ValidatorDecl {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(name) => Self::Preset(name),
            other => Self::Other(other),
        }
    }
}

impl<'de> Deserialize<'de> for ValidatorDecl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

/// Turns declared validators into validator items.
///
/// `"required"` becomes [`ValidatorItem::Required`]; anything else is
/// reported to `sink` and dropped.
pub fn resolve_validators<V: ?Sized>(
    spec: Option<&ValidatorSpec>,
    sink: &SharedSink,
) -> Vec<ValidatorItem<V>> {
    let Some(spec) = spec else {
        return Vec::new();
    };

    let mut items = Vec::with_capacity(spec.len());
    for decl in spec {
        match decl {
            ValidatorDecl::Preset(name) if name == REQUIRED => items.push(ValidatorItem::Required),
            ValidatorDecl::Preset(name) => sink.warn(UNKNOWN_VALIDATOR_PRESET, name),
            ValidatorDecl::Other(value) => sink.warn(UNKNOWN_VALIDATOR, &value.to_string()),
        }
    }
    items
}
