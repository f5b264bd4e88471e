//! Filter declarations and the filter preset table.
//!
//! A filter narrows a value to a subset of its characters. Controls declare
//! filters as a [`FilterSpec`]: one [`Filter`] or an ordered list of them.
//! Each item is a named preset, a pattern whose matches are kept, or an
//! arbitrary transform function.

use std::fmt;

use inputs_rs_core::{InputsError, InputsResult, OneOrMany};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};

use crate::transform::{transform_fn, TransformFn};

/// A filter declaration: one filter or an ordered list of filters.
pub type FilterSpec = OneOrMany<Filter>;

static LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Za-z]").expect("valid regex"));
static NUMBERS: Lazy<Regex> = Lazy::new(|| Regex::new("[0-9]").expect("valid regex"));

/// The closed set of built-in filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterPreset {
    /// Keeps the ASCII letters `A-Z` and `a-z`.
    Letters,
    /// Keeps the digits `0-9`.
    Numbers,
}

impl FilterPreset {
    /// Every filter preset, in table order.
    pub const ALL: [Self; 2] = [Self::Letters, Self::Numbers];

    /// Looks up a preset by its declared name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "letters" => Some(Self::Letters),
            "numbers" => Some(Self::Numbers),
            _ => None,
        }
    }

    /// Returns the declared name of this preset.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Letters => "letters",
            Self::Numbers => "numbers",
        }
    }

    /// Returns the transform implementing this preset.
    pub fn function(self) -> TransformFn {
        match self {
            Self::Letters => transform_fn(|value| select_matches(&LETTERS, value)),
            Self::Numbers => transform_fn(|value| select_matches(&NUMBERS, value)),
        }
    }
}

impl fmt::Display for FilterPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Concatenates every non-overlapping match of `pattern` in `value`, in
/// order of occurrence. A pattern matching nothing yields `""`.
pub fn select_matches(pattern: &Regex, value: &str) -> String {
    pattern.find_iter(value).map(|m| m.as_str()).collect()
}

/// A single filter declaration.
#[derive(Clone)]
pub enum Filter {
    /// A named preset. Unknown names are dropped at resolution.
    Preset(String),
    /// A pattern. The filter keeps what matches.
    Pattern(Regex),
    /// An arbitrary transform, used as-is.
    Function(TransformFn),
    /// An item of unrecognized type, typically from a configuration
    /// document (a number, `null`, an object without a valid `pattern`).
    Other(serde_json::Value),
}

impl Filter {
    /// Declares a preset by name.
    pub fn preset(name: impl Into<String>) -> Self {
        Self::Preset(name.into())
    }

    /// Compiles `pattern` and declares it as a filter.
    pub fn pattern(pattern: &str) -> InputsResult<Self> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|e| InputsError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }

    /// Declares a function filter.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::Function(transform_fn(f))
    }

    /// Returns `true` for [`Filter::Preset`] items.
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

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(name) => f.debug_tuple("Preset").field(name).finish(),
            Self::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
            Self::Other(value) => f.debug_tuple("Other").field(value).finish(),
        }
    }
}

impl From<&str> for Filter {
    fn from(name: &str) -> Self {
        Self::preset(name)
    }
}

impl From<String> for Filter {
    fn from(name: String) -> Self {
        Self::Preset(name)
    }
}

impl From<FilterPreset> for Filter {
    fn from(preset: FilterPreset) -> Self {
        Self::preset(preset.name())
    }
}

impl From<Regex> for Filter {
    fn from(regex: Regex) -> Self {
        Self::Pattern(regex)
    }
}

impl From<TransformFn> for Filter {
    fn from(f: TransformFn) -> Self {
        Self::Function(f)
    }
}

/// Interprets a configuration value: a string is a preset name and
/// `{ "pattern": "<regex>" }` is a pattern. Anything else is kept as
/// [`Filter::Other`].
impl From<serde_json::Value> for Filter {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(name) => Self::Preset(name),
            serde_json::Value::Object(map) => {
                let compiled = match map.get("pattern") {
                    Some(serde_json::Value::String(source)) if map.len() == 1 => {
                        Regex::new(source).ok()
                    }
                    _ => None,
                };
                compiled.map_or_else(|| Self::Other(serde_json::Value::Object(map)), Self::Pattern)
            }
            other => Self::Other(other),
        }
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}
