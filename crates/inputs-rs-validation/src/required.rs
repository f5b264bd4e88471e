//! Control-specific "value is present" predicates.
//!
//! Each control binds the `required` placeholder to the predicate matching
//! its model value type via
//! [`replace_required_preset`](crate::validation::replace_required_preset).

use inputs_rs_core::CheckboxValue;

use crate::files::FileHandle;
use crate::validation::Validator;

/// Text-like controls: the value is non-empty.
///
/// An absent value is validated as `""`.
pub fn text() -> Validator<str> {
    Validator::new(|value: &str| !value.is_empty())
}

/// Checkboxes: a boolean model must be `true`; a collection model must
/// contain the checkbox's own value.
pub fn checkbox(own_value: Option<String>) -> Validator<CheckboxValue> {
    Validator::new(move |value: &CheckboxValue| value.is_checked(own_value.as_deref()))
}

/// Radios: a value is selected.
pub fn radio<T: 'static>() -> Validator<Option<T>> {
    Validator::new(Option::<T>::is_some)
}

/// Radios bound to loosely typed values: anything but `null` is selected.
pub fn radio_json() -> Validator<serde_json::Value> {
    Validator::new(|value: &serde_json::Value| !value.is_null())
}

/// File inputs: at least one file is selected.
pub fn files() -> Validator<[FileHandle]> {
    Validator::new(|files: &[FileHandle]| !files.is_empty())
}
