//! Standalone and grouped checkboxes.
//!
//! A standalone checkbox binds a boolean. A checkbox in a group binds a
//! shared collection and toggles membership of its own value in it.

use inputs_rs_core::logging::{control_span, default_sink};
use inputs_rs_core::{CheckboxValue, SharedSink, StringCollection};
use inputs_rs_validation::{
    replace_required_preset, required, validate, ValidationResult, ValidatorItem,
};

/// Diagnostic context when ticking is impossible.
pub const CHECK_FAILED: &str = "Could not tick checkbox-item.";
/// Diagnostic context when unticking is impossible.
pub const UNCHECK_FAILED: &str = "Could not untick checkbox-item.";
/// Diagnostic context when validation is impossible.
pub const VALIDATE_FAILED: &str = "Could not validate checkbox-item.";

const NO_VALUE_TO_SET: &str = "There is no value to set.";
const NO_VALUE_TO_UNSET: &str = "There is no value to unset.";
const NO_MODEL_VALUE: &str = "There is no model value.";

/// The model of a checkbox.
///
/// # Examples
///
/// ```
/// use inputs_rs_controls::CheckboxModel;
/// use inputs_rs_core::CheckboxValue;
///
/// let mut fruit = CheckboxModel::new("fruit")
///     .with_own_value("apple")
///     .with_value(vec!["pear".to_string()].into());
///
/// fruit.check();
/// assert!(fruit.is_checked());
/// assert_eq!(
///     fruit.value(),
///     Some(&CheckboxValue::from(vec!["pear".to_string(), "apple".to_string()]))
/// );
/// ```
#[derive(Clone)]
pub struct CheckboxModel {
    name: String,
    own_value: Option<String>,
    value: Option<CheckboxValue>,
    validators: Vec<ValidatorItem<CheckboxValue>>,
    sink: SharedSink,
}

impl std::fmt::Debug for CheckboxModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckboxModel")
            .field("name", &self.name)
            .field("own_value", &self.own_value)
            .field("value", &self.value)
            .field("validators", &self.validators)
            .finish_non_exhaustive()
    }
}

impl CheckboxModel {
    /// Creates a checkbox without an own value or model value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            own_value: None,
            value: None,
            validators: Vec::new(),
            sink: default_sink(),
        }
    }

    /// Sets the value this checkbox contributes to a collection model.
    #[must_use]
    pub fn with_own_value(mut self, own_value: impl Into<String>) -> Self {
        self.own_value = Some(own_value.into());
        self
    }

    /// Sets the initial model value.
    #[must_use]
    pub fn with_value(mut self, value: CheckboxValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the validator declarations.
    #[must_use]
    pub fn with_validators<I>(mut self, validators: I) -> Self
    where
        I: IntoIterator<Item = ValidatorItem<CheckboxValue>>,
    {
        self.validators = validators.into_iter().collect();
        self
    }

    /// Reports diagnostics to `sink` instead of the tracing sink.
    #[must_use]
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Returns the control name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the checkbox's own value.
    pub fn own_value(&self) -> Option<&str> {
        self.own_value.as_deref()
    }

    /// Returns the current model value.
    pub const fn value(&self) -> Option<&CheckboxValue> {
        self.value.as_ref()
    }

    /// Replaces the model value.
    pub fn set_value(&mut self, value: Option<CheckboxValue>) {
        self.value = value;
    }

    /// Returns whether the checkbox is ticked. An unset model is unticked.
    pub fn is_checked(&self) -> bool {
        self.value
            .as_ref()
            .is_some_and(|value| value.is_checked(self.own_value.as_deref()))
    }

    /// Ticks the checkbox.
    ///
    /// A boolean model becomes `true`; a collection model gains the own
    /// value. Without a model value or, for collections, an own value, a
    /// diagnostic is reported and nothing changes.
    pub fn check(&mut self) {
        let span = control_span(&self.name);
        let _guard = span.enter();

        match (&mut self.value, self.own_value.as_deref()) {
            (Some(CheckboxValue::Boolean(checked)), _) => *checked = true,
            (Some(CheckboxValue::Collection(items)), Some(own)) => {
                items.add(own);
            }
            _ => self.sink.warn(CHECK_FAILED, NO_VALUE_TO_SET),
        }
    }

    /// Unticks the checkbox.
    ///
    /// A boolean model becomes `false`; a collection model loses the own
    /// value. Without a model value or, for collections, an own value, a
    /// diagnostic is reported and nothing changes.
    pub fn uncheck(&mut self) {
        let span = control_span(&self.name);
        let _guard = span.enter();

        match (&mut self.value, self.own_value.as_deref()) {
            (Some(CheckboxValue::Boolean(checked)), _) => *checked = false,
            (Some(CheckboxValue::Collection(items)), Some(own)) => {
                items.remove(own);
            }
            _ => self.sink.warn(UNCHECK_FAILED, NO_VALUE_TO_UNSET),
        }
    }

    /// Flips the checkbox.
    pub fn toggle(&mut self) {
        if self.is_checked() {
            self.uncheck();
        } else {
            self.check();
        }
    }

    /// Validates the model value, with `required` meaning ticked.
    ///
    /// Returns `None` and reports a diagnostic when the model is unset.
    pub fn validate(&self) -> Option<ValidationResult> {
        let Some(value) = &self.value else {
            let span = control_span(&self.name);
            let _guard = span.enter();
            self.sink.warn(VALIDATE_FAILED, NO_MODEL_VALUE);
            return None;
        };

        let validators = replace_required_preset(
            self.validators.iter().cloned(),
            Some(required::checkbox(self.own_value.clone())),
        );
        Some(validate(value, &validators))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use inputs_rs_test::DiagnosticOutbox;

    use super::*;

    fn checkbox(outbox: &DiagnosticOutbox) -> CheckboxModel {
        CheckboxModel::new("testing-checkbox-input").with_sink(outbox.as_sink())
    }

    fn list(items: &[&str]) -> CheckboxValue {
        CheckboxValue::from(items.iter().map(|s| (*s).to_string()).collect::<Vec<_>>())
    }

    // ── Initial state ───────────────────────────────────────────────

    #[test]
    fn test_unset_is_unchecked() {
        let outbox = DiagnosticOutbox::new();
        assert!(!checkbox(&outbox).is_checked());
    }

    #[test]
    fn test_initially_checked_values() {
        let outbox = DiagnosticOutbox::new();
        assert!(checkbox(&outbox).with_value(true.into()).is_checked());
        assert!(checkbox(&outbox)
            .with_own_value("test")
            .with_value(list(&["test"]))
            .is_checked());

        let set: HashSet<String> = std::iter::once("test".to_string()).collect();
        assert!(checkbox(&outbox)
            .with_own_value("test")
            .with_value(set.into())
            .is_checked());
    }

    // ── Checking ────────────────────────────────────────────────────

    #[test]
    fn test_check_boolean() {
        let outbox = DiagnosticOutbox::new();
        let mut input = checkbox(&outbox).with_value(false.into());
        input.check();
        assert_eq!(input.value(), Some(&CheckboxValue::Boolean(true)));
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_check_collection() {
        let outbox = DiagnosticOutbox::new();
        let mut input = checkbox(&outbox).with_own_value("test").with_value(list(&[]));
        input.check();
        assert_eq!(input.value(), Some(&list(&["test"])));
        input.check();
        assert_eq!(input.value(), Some(&list(&["test"])));
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_check_without_value_warns() {
        let outbox = DiagnosticOutbox::new();
        let mut input = checkbox(&outbox);
        input.check();
        assert_eq!(input.value(), None);
        assert!(!input.is_checked());
        assert_eq!(outbox.messages(), vec![CHECK_FAILED]);
        assert_eq!(outbox.entries()[0].detail, "There is no value to set.");
    }

    // ── Unchecking ──────────────────────────────────────────────────

    #[test]
    fn test_uncheck_boolean() {
        let outbox = DiagnosticOutbox::new();
        let mut input = checkbox(&outbox).with_value(true.into());
        input.uncheck();
        assert_eq!(input.value(), Some(&CheckboxValue::Boolean(false)));
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_uncheck_collection() {
        let outbox = DiagnosticOutbox::new();
        let mut input = checkbox(&outbox)
            .with_own_value("test")
            .with_value(list(&["test"]));
        input.uncheck();
        assert_eq!(input.value(), Some(&list(&[])));
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_uncheck_without_own_value_warns() {
        let outbox = DiagnosticOutbox::new();
        let mut input = checkbox(&outbox).with_value(list(&[]));
        input.uncheck();
        assert_eq!(input.value(), Some(&list(&[])));
        assert_eq!(outbox.messages(), vec![UNCHECK_FAILED]);
        assert_eq!(outbox.entries()[0].detail, "There is no value to unset.");
    }

    #[test]
    fn test_toggle() {
        let outbox = DiagnosticOutbox::new();
        let mut input = checkbox(&outbox).with_value(false.into());
        input.toggle();
        assert!(input.is_checked());
        input.toggle();
        assert!(!input.is_checked());

        input.set_value(Some(list(&["test"])));
        assert!(!input.is_checked());
    }

    // ── Validation ──────────────────────────────────────────────────

    #[test]
    fn test_validate_boolean() {
        let outbox = DiagnosticOutbox::new();
        let checked = checkbox(&outbox)
            .with_value(true.into())
            .with_validators([ValidatorItem::Required]);
        assert_eq!(checked.validate(), Some(ValidationResult::passed()));

        let unchecked = checkbox(&outbox)
            .with_value(false.into())
            .with_validators([ValidatorItem::Required]);
        assert_eq!(unchecked.validate(), Some(ValidationResult::failed()));
    }

    #[test]
    fn test_validate_collection() {
        let outbox = DiagnosticOutbox::new();
        let member = checkbox(&outbox)
            .with_own_value("test")
            .with_value(list(&["test"]))
            .with_validators([ValidatorItem::Required]);
        assert_eq!(member.validate(), Some(ValidationResult::passed()));

        let other = checkbox(&outbox)
            .with_own_value("other")
            .with_value(list(&["test"]))
            .with_validators([ValidatorItem::Required]);
        assert_eq!(other.validate(), Some(ValidationResult::failed()));

        let no_own_value = checkbox(&outbox)
            .with_value(list(&[]))
            .with_validators([ValidatorItem::Required]);
        assert_eq!(no_own_value.validate(), Some(ValidationResult::failed()));
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_validate_required_and_specific_value() {
        let outbox = DiagnosticOutbox::new();
        let input = checkbox(&outbox)
            .with_own_value("test")
            .with_value(list(&[]))
            .with_validators([
                ValidatorItem::Required,
                ValidatorItem::function(|v: &CheckboxValue| {
                    if v.is_checked(Some("test")) {
                        Ok(())
                    } else {
                        Err("Wrong value")
                    }
                }),
            ]);
        assert_eq!(
            input.validate(),
            Some(ValidationResult::with_messages(["Wrong value"]))
        );
    }

    #[test]
    fn test_validate_unset_model_warns_once() {
        let outbox = DiagnosticOutbox::new();
        let input = checkbox(&outbox).with_validators([ValidatorItem::Required]);
        assert_eq!(input.validate(), None);
        outbox.assert_count(1);
        let entry = outbox.last().unwrap();
        assert_eq!(entry.context, VALIDATE_FAILED);
        assert_eq!(entry.detail, "There is no model value.");
    }
}
