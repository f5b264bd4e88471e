//! Modifier declarations and the modifier preset table.
//!
//! A modifier rewrites a value (its case, or anything a function decides)
//! without the select-matches semantics of filters. Modifiers cannot be
//! patterns.

use std::fmt;

use inputs_rs_core::OneOrMany;
use serde::{Deserialize, Deserializer};

use crate::transform::{transform_fn, TransformFn};

/// A modifier declaration: one modifier or an ordered list of modifiers.
pub type ModifierSpec = OneOrMany<Modifier>;

/// The closed set of built-in modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierPreset {
    /// Converts to upper case.
    Uppercase,
    /// Converts to lower case.
    Lowercase,
}

impl ModifierPreset {
    /// Every modifier preset, in table order.
    pub const ALL: [Self; 2] = [Self::Uppercase, Self::Lowercase];

    /// Looks up a preset by its declared name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "uppercase" => Some(Self::Uppercase),
            "lowercase" => Some(Self::Lowercase),
            _ => None,
        }
    }

    /// Returns the declared name of this preset.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
        }
    }

    /// Returns the transform implementing this preset.
    pub fn function(self) -> TransformFn {
        match self {
            Self::Uppercase => transform_fn(str::to_uppercase),
            Self::Lowercase => transform_fn(str::to_lowercase),
        }
    }
}

impl fmt::Display for ModifierPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single modifier declaration.
#[derive(Clone)]
pub enum Modifier {
    /// A named preset. Unknown names are dropped at resolution.
    Preset(String),
    /// An arbitrary transform, used as-is.
    Function(TransformFn),
    /// An item of unrecognized type, typically from a configuration document.
    Other(serde_json::Value),
}

impl Modifier {
    /// Declares a preset by name.
    pub fn preset(name: impl Into<String>) -> Self {
        Self::Preset(name.into())
    }

    /// Declares a function modifier.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::Function(transform_fn(f))
    }

    /// Returns `true` for [`Modifier::Preset`] items.
    pub const fn is_preset(&self) -> bool {
        matches!(self, Self::Preset(_))
    }

    /// Returns the preset name, if this is a preset item.
    pub fn preset_name(&self) -> Option<&str> {
        match self {
            Self::Preset(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(name) => f.debug_tuple("Preset").field(name).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
            Self::Other(value) => f.debug_tuple("Other").field(value).finish(),
        }
    }
}

impl From<&str> for Modifier {
    fn from(name: &str) -> Self {
        Self::preset(name)
    }
}

impl From<String> for Modifier {
    fn from(name: String) -> Self {
        Self::Preset(name)
    }
}

impl From<ModifierPreset> for Modifier {
    fn from(preset: ModifierPreset) -> Self {
        Self::preset(preset.name())
    }
}

impl From<TransformFn> for Modifier {
    fn from(f: TransformFn) -> Self {
        Self::Function(f)
    }
}

/// Interprets a configuration value: a string is a preset name, anything
/// else is kept as [`Modifier::Other`].
impl From<serde_json::Value> for Modifier {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(name) => Self::Preset(name),
            other => Self::Other(other),
        }
    }
}

impl<'de> Deserialize<'de> for Modifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}
