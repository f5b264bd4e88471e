//! Cached filter → modifier → model-modifier chains.
//!
//! A hosting control re-applies its transforms on every model update, while
//! its declarations change rarely. [`TransformPipeline`] resolves each
//! declaration once and only re-resolves the one that was replaced.

use crate::filters::FilterSpec;
use crate::model_modifiers::ModelModifiers;
use crate::modifiers::ModifierSpec;
use crate::resolver::TransformResolver;
use crate::transform::{transform, TransformFn};

/// The resolved transforms of one control.
///
/// # Examples
///
/// ```
/// use inputs_rs_model::{Filter, FilterSpec, Modifier, ModifierSpec, TransformPipeline};
///
/// let pipeline = TransformPipeline::default()
///     .with_filters(FilterSpec::from(Filter::preset("letters")))
///     .with_modifiers(ModifierSpec::from(Modifier::preset("uppercase")));
///
/// assert_eq!(pipeline.apply(Some("ab12cd")), "ABCD");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransformPipeline {
    resolver: TransformResolver,
    filter_spec: Option<FilterSpec>,
    modifier_spec: Option<ModifierSpec>,
    model_modifiers: ModelModifiers,
    filters: Resolved,
    modifiers: Resolved,
    model: Resolved,
}

/// A resolved chain. Function items are opaque, so `Debug` only shows the
/// length.
#[derive(Clone, Default)]
struct Resolved(Vec<TransformFn>);

impl std::fmt::Debug for Resolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} transforms]", self.0.len())
    }
}

impl TransformPipeline {
    /// Creates an empty pipeline reporting through `resolver`.
    pub fn new(resolver: TransformResolver) -> Self {
        Self {
            resolver,
            ..Self::default()
        }
    }

    /// Switches to `resolver` and re-resolves every declaration with it.
    #[must_use]
    pub fn with_resolver(mut self, resolver: TransformResolver) -> Self {
        self.resolver = resolver;
        let filters = self.filter_spec.take();
        let modifiers = self.modifier_spec.take();
        self.set_filters(filters);
        self.set_modifiers(modifiers);
        self
    }

    /// Sets the filter declaration (builder form).
    #[must_use]
    pub fn with_filters(mut self, filters: FilterSpec) -> Self {
        self.set_filters(Some(filters));
        self
    }

    /// Sets the modifier declaration (builder form).
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: ModifierSpec) -> Self {
        self.set_modifiers(Some(modifiers));
        self
    }

    /// Sets the model modifiers (builder form).
    #[must_use]
    pub fn with_model_modifiers(mut self, flags: ModelModifiers) -> Self {
        self.set_model_modifiers(flags);
        self
    }

    /// Replaces the filter declaration and re-resolves the filter chain.
    pub fn set_filters(&mut self, filters: Option<FilterSpec>) {
        self.filters = Resolved(self.resolver.resolve_filters(filters.as_ref()));
        self.filter_spec = filters;
    }

    /// Replaces the modifier declaration and re-resolves the modifier chain.
    pub fn set_modifiers(&mut self, modifiers: Option<ModifierSpec>) {
        self.modifiers = Resolved(self.resolver.resolve_modifiers(modifiers.as_ref()));
        self.modifier_spec = modifiers;
    }

    /// Replaces the model modifiers.
    pub fn set_model_modifiers(&mut self, flags: ModelModifiers) {
        self.model = Resolved(flags.transforms());
        self.model_modifiers = flags;
    }

    /// Returns the current filter declaration.
    pub const fn filter_spec(&self) -> Option<&FilterSpec> {
        self.filter_spec.as_ref()
    }

    /// Returns the current modifier declaration.
    pub const fn modifier_spec(&self) -> Option<&ModifierSpec> {
        self.modifier_spec.as_ref()
    }

    /// Returns the current model modifiers.
    pub const fn model_modifiers(&self) -> ModelModifiers {
        self.model_modifiers
    }

    /// Returns the resolved filter chain.
    pub fn filters(&self) -> &[TransformFn] {
        &self.filters.0
    }

    /// Returns the resolved modifier chain.
    pub fn modifiers(&self) -> &[TransformFn] {
        &self.modifiers.0
    }

    /// Returns the full chain in application order.
    pub fn chain(&self) -> impl Iterator<Item = &TransformFn> {
        self.filters.0.iter().chain(&self.modifiers.0).chain(&self.model.0)
    }

    /// Applies filters, then modifiers, then model modifiers to `value`.
    pub fn apply(&self, value: Option<&str>) -> String {
        transform(value, self.chain())
    }
}

#[cfg(test)]
mod tests {
    use inputs_rs_test::DiagnosticOutbox;

    use super::*;
    use crate::filters::Filter;
    use crate::modifiers::Modifier;

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = TransformPipeline::default();
        assert_eq!(pipeline.apply(Some("Abc 123")), "Abc 123");
        assert_eq!(pipeline.apply(None), "");
        assert_eq!(pipeline.chain().count(), 0);
    }

    #[test]
    fn test_order_filters_modifiers_model() {
        let pipeline = TransformPipeline::default()
            .with_filters(FilterSpec::from(Filter::preset("letters")))
            .with_modifiers(ModifierSpec::from(Modifier::function(|v| format!("{v}x"))))
            .with_model_modifiers(ModelModifiers {
                lowercase: false,
                uppercase: true,
            });

        // The appended "x" is uppercased, so model modifiers ran last.
        assert_eq!(pipeline.apply(Some("ab 12")), "ABX");
        assert_eq!(pipeline.chain().count(), 3);
    }

    #[test]
    fn test_set_filters_only_reresolves_filters() {
        let outbox = DiagnosticOutbox::new();
        let mut pipeline = TransformPipeline::new(TransformResolver::new(outbox.as_sink()))
            .with_modifiers(ModifierSpec::from(Modifier::preset("bogus")));
        assert_eq!(outbox.len(), 1);

        pipeline.set_filters(Some(FilterSpec::from(Filter::preset("numbers"))));
        assert_eq!(outbox.len(), 1);
        assert_eq!(pipeline.filters().len(), 1);
        assert!(pipeline.modifiers().is_empty());
        assert_eq!(pipeline.apply(Some("a1b2")), "12");

        pipeline.set_filters(None);
        assert!(pipeline.filter_spec().is_none());
        assert_eq!(pipeline.apply(Some("a1b2")), "a1b2");
    }

    #[test]
    fn test_set_modifiers_replaces_chain() {
        let mut pipeline = TransformPipeline::default()
            .with_modifiers(ModifierSpec::from(Modifier::preset("uppercase")));
        assert_eq!(pipeline.apply(Some("abc")), "ABC");

        pipeline.set_modifiers(Some(ModifierSpec::from(Modifier::preset("lowercase"))));
        assert_eq!(pipeline.apply(Some("ABC")), "abc");
        assert_eq!(pipeline.modifier_spec().map(ModifierSpec::len), Some(1));
    }

    #[test]
    fn test_with_resolver_reresolves_declarations() {
        let outbox = DiagnosticOutbox::new();
        let pipeline = TransformPipeline::default()
            .with_filters(FilterSpec::from(Filter::preset("bogus")))
            .with_modifiers(ModifierSpec::from(Modifier::preset("uppercase")))
            .with_resolver(TransformResolver::new(outbox.as_sink()));

        assert_eq!(outbox.len(), 1);
        assert!(pipeline.filters().is_empty());
        assert_eq!(pipeline.apply(Some("abc")), "ABC");
    }

    #[test]
    fn test_model_modifiers_accessor() {
        let flags = ModelModifiers {
            lowercase: true,
            uppercase: false,
        };
        let pipeline = TransformPipeline::default().with_model_modifiers(flags);
        assert_eq!(pipeline.model_modifiers(), flags);
        assert_eq!(pipeline.apply(Some("ABC")), "abc");
    }
}
