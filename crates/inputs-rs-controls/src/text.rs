//! Text, textarea, and password inputs.
//!
//! The three share one model: an optional string that is passed through
//! the control's [`TransformPipeline`] whenever it is set.

use std::fmt;

use inputs_rs_core::logging::control_span;
use inputs_rs_model::{
    FilterSpec, ModelModifiers, ModifierSpec, TransformPipeline, TransformResolver,
};
use inputs_rs_validation::{
    replace_required_preset, required, validate, ValidationResult, ValidatorItem,
};

/// Which native input a [`TextModel`] stands for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextKind {
    /// A single-line text input.
    #[default]
    Text,
    /// A multi-line text area.
    TextArea,
    /// A password input.
    Password,
}

impl TextKind {
    /// Returns the input type name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "textarea",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The model of a text-like input.
///
/// # Examples
///
/// ```
/// use inputs_rs_controls::TextModel;
/// use inputs_rs_model::{Modifier, ModifierSpec};
///
/// let mut input = TextModel::new("code")
///     .with_modifiers(ModifierSpec::from(Modifier::preset("uppercase")));
/// input.set_value(Some("abc-123"));
/// assert_eq!(input.value(), Some("ABC-123"));
/// ```
#[derive(Debug, Clone)]
pub struct TextModel {
    name: String,
    kind: TextKind,
    pipeline: TransformPipeline,
    value: Option<String>,
    validators: Vec<ValidatorItem<str>>,
}

impl TextModel {
    /// Creates an empty text input without transforms or validators.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TextKind::default(),
            pipeline: TransformPipeline::default(),
            value: None,
            validators: Vec::new(),
        }
    }

    /// Sets the input kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: TextKind) -> Self {
        self.kind = kind;
        self
    }

    /// Replaces the whole pipeline, e.g. one built with a custom resolver.
    #[must_use]
    pub fn with_pipeline(mut self, pipeline: TransformPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Resolves declarations with `resolver`, e.g. one reporting to a
    /// custom sink. Declarations made so far are re-resolved.
    #[must_use]
    pub fn with_resolver(mut self, resolver: TransformResolver) -> Self {
        self.pipeline = std::mem::take(&mut self.pipeline).with_resolver(resolver);
        self
    }

    /// Sets the filter declaration.
    #[must_use]
    pub fn with_filters(mut self, filters: FilterSpec) -> Self {
        self.pipeline.set_filters(Some(filters));
        self
    }

    /// Sets the modifier declaration.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: ModifierSpec) -> Self {
        self.pipeline.set_modifiers(Some(modifiers));
        self
    }

    /// Sets the model modifiers.
    #[must_use]
    pub fn with_model_modifiers(mut self, flags: ModelModifiers) -> Self {
        self.pipeline.set_model_modifiers(flags);
        self
    }

    /// Sets the validator declarations.
    #[must_use]
    pub fn with_validators<I>(mut self, validators: I) -> Self
    where
        I: IntoIterator<Item = ValidatorItem<str>>,
    {
        self.validators = validators.into_iter().collect();
        self
    }

    /// Sets the initial value, transformed through the pipeline.
    ///
    /// Call after the transforms are configured.
    #[must_use]
    pub fn with_value(mut self, value: Option<&str>) -> Self {
        self.set_value(value);
        self
    }

    /// Returns the control name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the input kind.
    pub const fn kind(&self) -> TextKind {
        self.kind
    }

    /// Returns the current model value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the pipeline.
    pub const fn pipeline(&self) -> &TransformPipeline {
        &self.pipeline
    }

    /// Transforms `value` and stores the result. `None` clears the value.
    pub fn set_value(&mut self, value: Option<&str>) {
        let span = control_span(&self.name);
        let _guard = span.enter();

        self.value = value.map(|raw| self.pipeline.apply(Some(raw)));
        tracing::trace!(kind = %self.kind, "model value updated");
    }

    /// Replaces the filter declaration. The current value is left as-is.
    pub fn set_filters(&mut self, filters: Option<FilterSpec>) {
        let span = control_span(&self.name);
        let _guard = span.enter();
        self.pipeline.set_filters(filters);
    }

    /// Replaces the modifier declaration. The current value is left as-is.
    pub fn set_modifiers(&mut self, modifiers: Option<ModifierSpec>) {
        let span = control_span(&self.name);
        let _guard = span.enter();
        self.pipeline.set_modifiers(modifiers);
    }

    /// Replaces the model modifiers. The current value is left as-is.
    pub fn set_model_modifiers(&mut self, flags: ModelModifiers) {
        self.pipeline.set_model_modifiers(flags);
    }

    /// Replaces the validator declarations.
    pub fn set_validators<I>(&mut self, validators: I)
    where
        I: IntoIterator<Item = ValidatorItem<str>>,
    {
        self.validators = validators.into_iter().collect();
    }

    /// Validates the current value, with `required` meaning non-empty.
    ///
    /// An absent value is validated as `""`.
    pub fn validate(&self) -> ValidationResult {
        let validators =
            replace_required_preset(self.validators.iter().cloned(), Some(required::text()));
        validate(self.value.as_deref().unwrap_or_default(), &validators)
    }
}
