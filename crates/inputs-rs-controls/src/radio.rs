//! Radio buttons.
//!
//! Every radio in a group binds the same optional model value and holds its
//! own value; it is ticked when the two are equal. Values can be of any type,
//! including structured ones.

use inputs_rs_core::logging::control_span;
use inputs_rs_validation::{
    replace_required_preset, required, validate, ValidationResult, ValidatorItem,
};

/// The model of one radio button.
///
/// # Examples
///
/// ```
/// use inputs_rs_controls::RadioModel;
///
/// let mut two = RadioModel::new("size", "two").with_value(Some("one"));
/// assert!(!two.is_checked());
///
/// two.check();
/// assert_eq!(two.value(), Some(&"two"));
/// ```
#[derive(Debug, Clone)]
pub struct RadioModel<T> {
    name: String,
    own_value: T,
    value: Option<T>,
    validators: Vec<ValidatorItem<Option<T>>>,
}

impl<T> RadioModel<T>
where
    T: Clone + PartialEq + 'static,
{
    /// Creates a radio contributing `own_value`, with no selection.
    pub fn new(name: impl Into<String>, own_value: T) -> Self {
        Self {
            name: name.into(),
            own_value,
            value: None,
            validators: Vec::new(),
        }
    }

    /// Sets the initial model value.
    #[must_use]
    pub fn with_value(mut self, value: Option<T>) -> Self {
        self.value = value;
        self
    }

    /// Sets the validator declarations.
    #[must_use]
    pub fn with_validators<I>(mut self, validators: I) -> Self
    where
        I: IntoIterator<Item = ValidatorItem<Option<T>>>,
    {
        self.validators = validators.into_iter().collect();
        self
    }

    /// Returns the control name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns this radio's own value.
    pub const fn own_value(&self) -> &T {
        &self.own_value
    }

    /// Returns the current model value.
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Replaces the model value.
    pub fn set_value(&mut self, value: Option<T>) {
        self.value = value;
    }

    /// Returns whether the model value equals this radio's own value.
    pub fn is_checked(&self) -> bool {
        self.value.as_ref() == Some(&self.own_value)
    }

    /// Selects this radio's own value.
    pub fn check(&mut self) {
        let span = control_span(&self.name);
        let _guard = span.enter();
        self.value = Some(self.own_value.clone());
        tracing::trace!("radio selected");
    }

    /// Clears the selection.
    pub fn uncheck(&mut self) {
        self.value = None;
    }

    /// Validates the model value, with `required` meaning "something is
    /// selected".
    pub fn validate(&self) -> ValidationResult {
        let validators =
            replace_required_preset(self.validators.iter().cloned(), Some(required::radio::<T>()));
        validate(&self.value, &validators)
    }
}
