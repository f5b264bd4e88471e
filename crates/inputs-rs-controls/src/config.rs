//! Control declarations loaded from JSON or TOML.
//!
//! ```toml
//! name = "postal-code"
//! filters = ["numbers", "letters"]
//! modifiers = "uppercase"
//! validators = "required"
//! ```
//!
//! Malformed filter, modifier, and validator entries are reported through the
//! sink selected by [`Settings`] and dropped.

use inputs_rs_core::logging::sink_from_settings;
use inputs_rs_core::{InputsError, InputsResult, Settings};
use inputs_rs_model::config::TransformConfig;
use inputs_rs_model::TransformResolver;
use inputs_rs_validation::config::resolve_validators;
use inputs_rs_validation::ValidatorSpec;
use serde::Deserialize;

use crate::number::NumberModel;
use crate::text::{TextKind, TextModel};

/// The declaration of one text-like or number control.
#[derive(Debug, Clone, Deserialize)]
pub struct ControlConfig {
    /// The control name.
    pub name: String,
    /// Filters, modifiers, and model modifiers.
    #[serde(flatten)]
    pub transforms: TransformConfig,
    /// Validator declarations; only `"required"` is recognized.
    #[serde(default)]
    pub validators: Option<ValidatorSpec>,
    /// Number inputs only: characters accepted besides the digits. Falls
    /// back to `Settings::number_allowed_characters`.
    #[serde(default)]
    pub allowed_characters: Option<String>,
}

impl ControlConfig {
    /// Parses a declaration from a JSON document.
    ///
    /// Malformed documents are reported as
    /// [`InputsError::SerializationError`].
    pub fn from_json_str(json: &str) -> InputsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a declaration from a TOML document.
    pub fn from_toml_str(toml_str: &str) -> InputsResult<Self> {
        toml::from_str(toml_str).map_err(|e| {
            InputsError::ConfigurationError(format!("Failed to parse control TOML: {e}"))
        })
    }

    /// Builds a text-like control of the given kind.
    pub fn into_text(self, kind: TextKind, settings: &Settings) -> TextModel {
        let sink = sink_from_settings(settings);
        let validators = resolve_validators::<str>(self.validators.as_ref(), &sink);
        let pipeline = self.transforms.into_pipeline(TransformResolver::new(sink));

        TextModel::new(self.name)
            .with_kind(kind)
            .with_pipeline(pipeline)
            .with_validators(validators)
    }

    /// Builds a number control. Declared filters replace the numeric default.
    pub fn into_number(self, settings: &Settings) -> InputsResult<NumberModel> {
        let sink = sink_from_settings(settings);
        let validators = resolve_validators::<str>(self.validators.as_ref(), &sink);
        let allowed = self
            .allowed_characters
            .as_deref()
            .unwrap_or(&settings.number_allowed_characters);

        let mut number = NumberModel::new(self.name)
            .with_resolver(TransformResolver::new(sink))
            .with_allowed_characters(allowed)?
            .with_model_modifiers(self.transforms.model_modifiers)
            .with_validators(validators);

        if let Some(filters) = self.transforms.filters {
            number = number.with_filters(filters);
        }
        if let Some(modifiers) = self.transforms.modifiers {
            number = number.with_modifiers(modifiers);
        }
        Ok(number)
    }
}
