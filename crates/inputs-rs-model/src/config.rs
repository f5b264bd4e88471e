//! Transform declarations loaded from JSON or TOML.
//!
//! A control configuration declares filters and modifiers the same way code
//! does: a string names a preset and `{ pattern = "<regex>" }` is a pattern.
//! Anything else is kept and reported as unknown when the pipeline is built.
//!
//! ```toml
//! filters = ["numbers", { pattern = "[.,]" }]
//! modifiers = "uppercase"
//!
//! [model_modifiers]
//! lowercase = true
//! ```

use inputs_rs_core::{InputsError, InputsResult};
use serde::Deserialize;

use crate::filters::FilterSpec;
use crate::model_modifiers::ModelModifiers;
use crate::modifiers::ModifierSpec;
use crate::pipeline::TransformPipeline;
use crate::resolver::TransformResolver;

/// The transform section of a control configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransformConfig {
    /// Filter declaration, if any.
    #[serde(default)]
    pub filters: Option<FilterSpec>,
    /// Modifier declaration, if any.
    #[serde(default)]
    pub modifiers: Option<ModifierSpec>,
    /// Case flags applied after the declared modifiers.
    #[serde(default)]
    pub model_modifiers: ModelModifiers,
}

impl TransformConfig {
    /// Parses a configuration from a JSON document.
    ///
    /// Malformed documents are reported as
    /// [`InputsError::SerializationError`].
    pub fn from_json_str(json: &str) -> InputsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a configuration from a TOML document.
    pub fn from_toml_str(toml_str: &str) -> InputsResult<Self> {
        toml::from_str(toml_str).map_err(|e| {
            InputsError::ConfigurationError(format!("Failed to parse transform TOML: {e}"))
        })
    }

    /// Resolves the declarations into a pipeline.
    ///
    /// Malformed items are reported through `resolver` and dropped.
    pub fn into_pipeline(self, resolver: TransformResolver) -> TransformPipeline {
        let mut pipeline = TransformPipeline::new(resolver);
        pipeline.set_filters(self.filters);
        pipeline.set_modifiers(self.modifiers);
        pipeline.set_model_modifiers(self.model_modifiers);
        pipeline
    }
}
