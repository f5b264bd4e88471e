//! Turning filter and modifier declarations into transform chains.
//!
//! Resolution never fails. Items that cannot be turned into a transform are
//! reported through the resolver's [`DiagnosticSink`](inputs_rs_core::DiagnosticSink)
//! and dropped; the remaining items keep their relative order.

use inputs_rs_core::logging::{default_sink, sink_from_settings};
use inputs_rs_core::{Settings, SharedSink};

use crate::filters::{select_matches, Filter, FilterPreset, FilterSpec};
use crate::modifiers::{Modifier, ModifierPreset, ModifierSpec};
use crate::transform::{transform_fn, TransformFn};

/// Diagnostic emitted for a filter preset name outside the preset table.
pub const UNKNOWN_FILTER_PRESET: &str = "Unknown filter preset provided";
/// Diagnostic emitted for a filter item of unrecognized type.
pub const UNKNOWN_FILTER: &str = "Unknown filter provided";
/// Diagnostic emitted for a modifier preset name outside the preset table.
pub const UNKNOWN_MODIFIER_PRESET: &str = "Unknown modifier preset provided";
/// Diagnostic emitted for a modifier item of unrecognized type.
pub const UNKNOWN_MODIFIER: &str = "Unknown modifier provided";

/// Resolves filter and modifier declarations, reporting malformed items to
/// an injected sink.
///
/// # Examples
///
/// ```
/// use inputs_rs_model::{transform, Filter, FilterSpec, TransformResolver};
///
/// let resolver = TransformResolver::default();
/// let spec = FilterSpec::from(Filter::preset("numbers"));
/// let filters = resolver.resolve_filters(Some(&spec));
///
/// assert_eq!(transform(Some("abc123def"), &filters), "123");
/// ```
#[derive(Clone)]
pub struct TransformResolver {
    sink: SharedSink,
}

impl Default for TransformResolver {
    fn default() -> Self {
        Self::new(default_sink())
    }
}

impl std::fmt::Debug for TransformResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformResolver").finish_non_exhaustive()
    }
}

impl TransformResolver {
    /// Creates a resolver reporting to `sink`.
    pub fn new(sink: SharedSink) -> Self {
        Self { sink }
    }

    /// Creates a resolver whose sink follows `settings.warn_on_unknown_presets`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(sink_from_settings(settings))
    }

    /// Returns the sink diagnostics are reported to.
    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    /// Resolves a filter declaration into an ordered transform chain.
    ///
    /// - Function items are passed through unchanged.
    /// - Pattern items keep every non-overlapping match, concatenated.
    /// - Preset items are looked up in [`FilterPreset`]; unknown names are
    ///   reported as [`UNKNOWN_FILTER_PRESET`] and dropped.
    /// - Any other item is reported as [`UNKNOWN_FILTER`] and dropped.
    ///
    /// An absent or empty declaration resolves to an empty chain, as does a
    /// lone empty preset name (`""`), without a diagnostic.
    pub fn resolve_filters(&self, filters: Option<&FilterSpec>) -> Vec<TransformFn> {
        let Some(filters) =
            filters.filter(|spec| !is_blank(spec.as_slice(), Filter::preset_name))
        else {
            return Vec::new();
        };

        let mut resolved = Vec::with_capacity(filters.len());
        for filter in filters {
            match filter {
                Filter::Function(f) => resolved.push(f.clone()),
                Filter::Pattern(regex) => {
                    let regex = regex.clone();
                    resolved.push(transform_fn(move |value| select_matches(&regex, value)));
                }
                Filter::Preset(name) => match FilterPreset::from_name(name) {
                    Some(preset) => resolved.push(preset.function()),
                    None => self.sink.warn(UNKNOWN_FILTER_PRESET, name),
                },
                Filter::Other(value) => self.sink.warn(UNKNOWN_FILTER, &value.to_string()),
            }
        }

        tracing::trace!(
            declared = filters.len(),
            resolved = resolved.len(),
            "resolved filters"
        );
        resolved
    }

    /// Resolves a modifier declaration into an ordered transform chain.
    ///
    /// - Function items are passed through unchanged.
    /// - Preset items are looked up in [`ModifierPreset`]; unknown names are
    ///   reported as [`UNKNOWN_MODIFIER_PRESET`] and dropped.
    /// - Any other item is reported as [`UNKNOWN_MODIFIER`] and dropped.
    ///
    /// An absent or empty declaration resolves to an empty chain, as does a
    /// lone empty preset name (`""`), without a diagnostic.
    pub fn resolve_modifiers(&self, modifiers: Option<&ModifierSpec>) -> Vec<TransformFn> {
        let Some(modifiers) =
            modifiers.filter(|spec| !is_blank(spec.as_slice(), Modifier::preset_name))
        else {
            return Vec::new();
        };

        let mut resolved = Vec::with_capacity(modifiers.len());
        for modifier in modifiers {
            match modifier {
                Modifier::Function(f) => resolved.push(f.clone()),
                Modifier::Preset(name) => match ModifierPreset::from_name(name) {
                    Some(preset) => resolved.push(preset.function()),
                    None => self.sink.warn(UNKNOWN_MODIFIER_PRESET, name),
                },
                Modifier::Other(value) => self.sink.warn(UNKNOWN_MODIFIER, &value.to_string()),
            }
        }

        tracing::trace!(
            declared = modifiers.len(),
            resolved = resolved.len(),
            "resolved modifiers"
        );
        resolved
    }
}

/// Resolves filters, reporting to the process-wide tracing sink.
pub fn create_filters(filters: Option<&FilterSpec>) -> Vec<TransformFn> {
    TransformResolver::default().resolve_filters(filters)
}

/// Resolves modifiers, reporting to the process-wide tracing sink.
pub fn create_modifiers(modifiers: Option<&ModifierSpec>) -> Vec<TransformFn> {
    TransformResolver::default().resolve_modifiers(modifiers)
}

/// A declaration consisting of a single empty preset name declares nothing.
fn is_blank<T>(items: &[T], preset_name: impl Fn(&T) -> Option<&str>) -> bool {
    matches!(items, [item] if preset_name(item) == Some(""))
}

/// Returns the items of a declaration that are not named presets, in order.
pub fn filter_presets<T: Clone>(items: &[T], is_preset: impl Fn(&T) -> bool) -> Vec<T> {
    items.iter().filter(|item| !is_preset(*item)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use inputs_rs_test::DiagnosticOutbox;
    use regex::Regex;
    use serde_json::json;

    use super::*;
    use crate::transform::transform;

    fn resolver() -> (TransformResolver, DiagnosticOutbox) {
        let outbox = DiagnosticOutbox::new();
        (TransformResolver::new(outbox.as_sink()), outbox)
    }

    fn filter(name: &str) -> FilterSpec {
        FilterSpec::One(name.into())
    }

    fn modifier(name: &str) -> ModifierSpec {
        ModifierSpec::One(name.into())
    }

    fn filters(items: Vec<Filter>) -> FilterSpec {
        FilterSpec::Many(items)
    }

    fn modifiers(items: Vec<Modifier>) -> ModifierSpec {
        ModifierSpec::Many(items)
    }

    // ── Filters ─────────────────────────────────────────────────────

    #[test]
    fn test_filter_presets_resolve() {
        let (r, outbox) = resolver();
        assert_eq!(r.resolve_filters(Some(&filter("letters"))).len(), 1);
        assert_eq!(r.resolve_filters(Some(&filter("numbers"))).len(), 1);
        assert_eq!(
            r.resolve_filters(Some(&filters(vec!["letters".into(), "numbers".into()])))
                .len(),
            2
        );
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_filter_patterns_keep_matches() {
        let (r, _) = resolver();
        let spec = filters(vec![
            Filter::from(Regex::new("[^0-9]").unwrap()),
            Filter::from(Regex::new("[^A-Z]").unwrap()),
        ]);
        let chain = r.resolve_filters(Some(&spec));
        assert_eq!(transform(Some("UPDATED with 12345"), &chain), " with ");
    }

    #[test]
    fn test_filter_functions_pass_through_unchanged() {
        let (r, _) = resolver();
        let first_char = crate::transform::transform_fn(|v| v.chars().take(1).collect());
        let spec = FilterSpec::One(Filter::Function(first_char.clone()));
        let chain = r.resolve_filters(Some(&spec));
        assert_eq!(chain.len(), 1);
        assert!(Arc::ptr_eq(&chain[0], &first_char));
    }

    #[test]
    fn test_absent_or_empty_filters() {
        let (r, outbox) = resolver();
        assert!(r.resolve_filters(None).is_empty());
        assert!(r.resolve_filters(Some(&filters(vec![]))).is_empty());
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_blank_declarations_are_silent() {
        let (r, outbox) = resolver();
        let blank_filters: FilterSpec = serde_json::from_value(json!("")).unwrap();
        let blank_modifiers: ModifierSpec = serde_json::from_value(json!("")).unwrap();

        assert!(r.resolve_filters(Some(&blank_filters)).is_empty());
        assert!(r.resolve_modifiers(Some(&blank_modifiers)).is_empty());
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_empty_name_in_a_list_is_reported() {
        let (r, outbox) = resolver();
        let spec = filters(vec!["".into(), "numbers".into()]);
        assert_eq!(r.resolve_filters(Some(&spec)).len(), 1);
        assert_eq!(outbox.messages(), vec![UNKNOWN_FILTER_PRESET.to_string()]);
    }

    #[test]
    fn test_unknown_filter_preset() {
        let (r, outbox) = resolver();
        assert!(r.resolve_filters(Some(&filter("wrong preset"))).is_empty());
        assert_eq!(outbox.messages(), vec![UNKNOWN_FILTER_PRESET.to_string()]);
        assert_eq!(outbox.entries()[0].detail, "wrong preset");
    }

    #[test]
    fn test_unknown_filter_items() {
        let (r, outbox) = resolver();
        assert!(r.resolve_filters(Some(&Filter::from(json!(42)).into())).is_empty());
        assert_eq!(outbox.len(), 1);

        let spec = filters(vec![json!(42).into(), json!(null).into(), json!(null).into()]);
        assert!(r.resolve_filters(Some(&spec)).is_empty());
        assert_eq!(outbox.count(UNKNOWN_FILTER), 4);
    }

    #[test]
    fn test_partially_incorrect_filters() {
        let (r, outbox) = resolver();
        let spec = filters(vec!["letters".into(), json!(42).into()]);
        assert_eq!(r.resolve_filters(Some(&spec)).len(), 1);

        let spec = filters(vec!["numbers".into(), json!(null).into(), json!(null).into()]);
        assert_eq!(r.resolve_filters(Some(&spec)).len(), 1);
        assert_eq!(outbox.count(UNKNOWN_FILTER), 3);
    }

    #[test]
    fn test_resolution_does_not_mutate_spec() {
        let (r, _) = resolver();
        let spec = filters(vec!["numbers".into(), "bogus".into()]);
        r.resolve_filters(Some(&spec));
        assert_eq!(spec.len(), 2);
    }

    // ── Modifiers ───────────────────────────────────────────────────

    #[test]
    fn test_modifier_presets_resolve() {
        let (r, outbox) = resolver();
        let spec = modifiers(vec!["lowercase".into(), "uppercase".into()]);
        let chain = r.resolve_modifiers(Some(&spec));
        assert_eq!(chain.len(), 2);
        assert_eq!(transform(Some("UPDATED 12345"), &chain), "UPDATED 12345");
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_modifier_functions() {
        let (r, _) = resolver();
        let spec = modifiers(vec![
            Modifier::function(|v| v.chars().skip(3).collect()),
            Modifier::function(|v| {
                let keep = v.chars().count().saturating_sub(3);
                v.chars().take(keep).collect()
            }),
        ]);
        let chain = r.resolve_modifiers(Some(&spec));
        assert_eq!(transform(Some("updated 12345"), &chain), "ated 12");
    }

    #[test]
    fn test_unknown_modifiers() {
        let (r, outbox) = resolver();
        assert!(r.resolve_modifiers(None).is_empty());
        assert!(r.resolve_modifiers(Some(&modifiers(vec![]))).is_empty());

        assert!(r.resolve_modifiers(Some(&modifier("wrong preset"))).is_empty());
        assert_eq!(outbox.messages(), vec![UNKNOWN_MODIFIER_PRESET.to_string()]);

        assert!(r.resolve_modifiers(Some(&Modifier::from(json!(42)).into())).is_empty());
        let spec = modifiers(vec![json!(42).into(), json!(null).into(), json!(null).into()]);
        assert!(r.resolve_modifiers(Some(&spec)).is_empty());
        assert_eq!(outbox.len(), 5);
        assert_eq!(outbox.count(UNKNOWN_MODIFIER), 4);
    }

    #[test]
    fn test_partially_incorrect_modifiers() {
        let (r, _) = resolver();
        let spec = modifiers(vec!["lowercase".into(), json!(42).into()]);
        assert_eq!(r.resolve_modifiers(Some(&spec)).len(), 1);
    }

    // ── Helpers ─────────────────────────────────────────────────────

    #[test]
    fn test_filter_presets_helper() {
        let items = vec![
            Filter::preset("numbers"),
            Filter::pattern("[a-z]").unwrap(),
            Filter::preset("letters"),
        ];
        let custom = filter_presets(&items, Filter::is_preset);
        assert_eq!(custom.len(), 1);
        assert!(matches!(custom[0], Filter::Pattern(_)));

        let modifiers = vec![Modifier::preset("uppercase"), Modifier::function(str::to_string)];
        assert_eq!(filter_presets(&modifiers, Modifier::is_preset).len(), 1);
    }

    #[test]
    fn test_from_settings_silences_diagnostics() {
        let settings = Settings {
            warn_on_unknown_presets: false,
            ..Settings::default()
        };
        let r = TransformResolver::from_settings(&settings);
        assert!(r.resolve_filters(Some(&filter("bogus"))).is_empty());
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(create_filters(Some(&filter("numbers"))).len(), 1);
        assert_eq!(create_modifiers(Some(&modifier("uppercase"))).len(), 1);
        assert!(create_filters(None).is_empty());
    }
}
