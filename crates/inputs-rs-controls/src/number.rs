//! Number inputs.
//!
//! A number input is a text input whose filters default to "digits plus the
//! allowed characters". Declaring filters replaces that default; clearing
//! them restores it.

use inputs_rs_core::{InputsResult, Settings};
use inputs_rs_model::number::numeric_filter;
use inputs_rs_model::{
    Filter, FilterPreset, FilterSpec, ModelModifiers, ModifierSpec, TransformResolver,
};
use inputs_rs_validation::{ValidationResult, ValidatorItem};

use crate::text::TextModel;

/// The model of a number input.
///
/// # Examples
///
/// ```
/// use inputs_rs_controls::NumberModel;
///
/// let mut input = NumberModel::new("amount").with_allowed_characters(".,").unwrap();
/// input.set_value(Some("€ 12.50"));
/// assert_eq!(input.value(), Some("12.50"));
/// ```
#[derive(Debug, Clone)]
pub struct NumberModel {
    inner: TextModel,
    default_filter: Filter,
    custom_filters: bool,
}

impl NumberModel {
    /// Creates a number input accepting digits only.
    pub fn new(name: impl Into<String>) -> Self {
        let default_filter = Filter::from(FilterPreset::Numbers);
        Self {
            inner: TextModel::new(name).with_filters(FilterSpec::from(default_filter.clone())),
            default_filter,
            custom_filters: false,
        }
    }

    /// Creates a number input accepting the characters configured in
    /// `settings.number_allowed_characters`.
    pub fn from_settings(name: impl Into<String>, settings: &Settings) -> InputsResult<Self> {
        Self::new(name).with_allowed_characters(&settings.number_allowed_characters)
    }

    /// Accepts `allowed` in addition to the digits.
    ///
    /// Only affects the default filter; declared filters are kept.
    pub fn with_allowed_characters(mut self, allowed: &str) -> InputsResult<Self> {
        self.default_filter = if allowed.is_empty() {
            Filter::from(FilterPreset::Numbers)
        } else {
            numeric_filter(allowed)?
        };
        if !self.custom_filters {
            self.inner
                .set_filters(Some(FilterSpec::from(self.default_filter.clone())));
        }
        Ok(self)
    }

    /// Resolves declarations with `resolver`.
    #[must_use]
    pub fn with_resolver(mut self, resolver: TransformResolver) -> Self {
        self.inner = self.inner.with_resolver(resolver);
        self
    }

    /// Declares filters, replacing the default filter.
    #[must_use]
    pub fn with_filters(mut self, filters: FilterSpec) -> Self {
        self.set_filters(Some(filters));
        self
    }

    /// Sets the modifier declaration.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: ModifierSpec) -> Self {
        self.inner.set_modifiers(Some(modifiers));
        self
    }

    /// Sets the model modifiers.
    #[must_use]
    pub fn with_model_modifiers(mut self, flags: ModelModifiers) -> Self {
        self.inner.set_model_modifiers(flags);
        self
    }

    /// Sets the validator declarations.
    #[must_use]
    pub fn with_validators<I>(mut self, validators: I) -> Self
    where
        I: IntoIterator<Item = ValidatorItem<str>>,
    {
        self.inner.set_validators(validators);
        self
    }

    /// Sets the initial value, transformed through the pipeline.
    #[must_use]
    pub fn with_value(mut self, value: Option<&str>) -> Self {
        self.inner.set_value(value);
        self
    }

    /// Returns the control name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Returns the current model value.
    pub fn value(&self) -> Option<&str> {
        self.inner.value()
    }

    /// Returns `true` if declared filters replace the default filter.
    pub const fn has_custom_filters(&self) -> bool {
        self.custom_filters
    }

    /// Transforms `value` and stores the result. `None` clears the value.
    pub fn set_value(&mut self, value: Option<&str>) {
        self.inner.set_value(value);
    }

    /// Declares filters. `None` restores the default filter.
    pub fn set_filters(&mut self, filters: Option<FilterSpec>) {
        self.custom_filters = filters.is_some();
        let filters = filters.unwrap_or_else(|| FilterSpec::from(self.default_filter.clone()));
        self.inner.set_filters(Some(filters));
    }

    /// Replaces the modifier declaration.
    pub fn set_modifiers(&mut self, modifiers: Option<ModifierSpec>) {
        self.inner.set_modifiers(modifiers);
    }

    /// Validates the current value, with `required` meaning non-empty.
    pub fn validate(&self) -> ValidationResult {
        self.inner.validate()
    }

    /// Returns the underlying text model.
    pub const fn as_text(&self) -> &TextModel {
        &self.inner
    }
}
