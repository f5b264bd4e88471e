//! Validator aggregation.
//!
//! A validator inspects a model value and either passes, fails silently, or
//! fails with a message. [`validate`] runs every validator in order and
//! collects the outcome:
//!
//! 1. `None` entries are skipped.
//! 2. Each remaining validator is called exactly once, in order.
//! 3. Any failure makes the result invalid; messages are collected in order.
//!
//! Failures accumulate rather than short-circuiting, so a control can show
//! every message at once.
//!
//! Controls declare validators with a `required` placeholder that is bound to
//! a control-specific predicate by [`replace_required_preset`].

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// What a single validator reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The value is acceptable.
    Pass,
    /// The value is rejected without a message.
    Fail,
    /// The value is rejected with a message.
    Message(String),
}

impl ValidationOutcome {
    /// Returns `true` for [`ValidationOutcome::Pass`].
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl From<bool> for ValidationOutcome {
    fn from(valid: bool) -> Self {
        if valid {
            Self::Pass
        } else {
            Self::Fail
        }
    }
}

impl From<&str> for ValidationOutcome {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<String> for ValidationOutcome {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl<M: Into<Self>> From<Result<(), M>> for ValidationOutcome {
    fn from(result: Result<(), M>) -> Self {
        result.map_or_else(Into::into, |()| Self::Pass)
    }
}

/// A shared validator over values of type `V`.
///
/// # Examples
///
/// ```
/// use inputs_rs_validation::{ValidationOutcome, Validator};
///
/// let short = Validator::<str>::new(|v| if v.len() < 5 { Ok(()) } else { Err("Value is too long") });
/// assert_eq!(short.call("abc"), ValidationOutcome::Pass);
/// assert_eq!(short.call("abcdef"), ValidationOutcome::Message("Value is too long".into()));
/// ```
pub struct Validator<V: ?Sized> {
    func: Arc<dyn Fn(&V) -> ValidationOutcome + Send + Sync>,
}

impl<V: ?Sized> Validator<V> {
    /// Wraps a function returning anything convertible to a
    /// [`ValidationOutcome`]: a `bool`, a message, or a `Result<(), message>`.
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<ValidationOutcome>,
    {
        Self {
            func: Arc::new(move |value: &V| f(value).into()),
        }
    }

    /// Runs the validator.
    pub fn call(&self, value: &V) -> ValidationOutcome {
        (self.func)(value)
    }

    /// Returns `true` if both handles point at the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl<V: ?Sized> Clone for Validator<V> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
        }
    }
}

impl<V: ?Sized> fmt::Debug for Validator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

/// The aggregated outcome of validating one value.
///
/// Serializes as `{ "valid": bool, "failed": [messages] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// `false` if any validator failed.
    pub valid: bool,
    /// The failure messages, in validator order.
    pub failed: Vec<String>,
}

impl ValidationResult {
    /// A passing result with no messages.
    pub const fn passed() -> Self {
        Self {
            valid: true,
            failed: Vec::new(),
        }
    }

    /// A failing result without messages.
    pub const fn failed() -> Self {
        Self {
            valid: false,
            failed: Vec::new(),
        }
    }

    /// A failing result carrying `messages`.
    pub fn with_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            valid: false,
            failed: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Folds one validator outcome into this result.
    pub fn record(&mut self, outcome: ValidationOutcome) {
        match outcome {
            ValidationOutcome::Pass => {}
            ValidationOutcome::Fail => self.valid = false,
            ValidationOutcome::Message(message) => {
                self.valid = false;
                self.failed.push(message);
            }
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::passed()
    }
}

/// Validates `value` against every validator, in order.
///
/// # Examples
///
/// ```
/// use inputs_rs_validation::{validate, ValidationResult, Validator};
///
/// let short = Validator::<str>::new(|v| v.len() < 5);
/// let message = Validator::<str>::new(|v| if v.len() < 5 { Ok(()) } else { Err("Too long") });
///
/// assert_eq!(validate("abc", [&short, &message]), ValidationResult::passed());
/// assert_eq!(
///     validate("abcdef", [&short, &message]),
///     ValidationResult::with_messages(["Too long"])
/// );
/// ```
pub fn validate<'a, V, I>(value: &V, validators: I) -> ValidationResult
where
    V: ?Sized + 'a,
    I: IntoIterator,
    I::Item: Into<Option<&'a Validator<V>>>,
{
    let mut result = ValidationResult::passed();
    for validator in validators.into_iter().filter_map(Into::into) {
        result.record(validator.call(value));
    }
    result
}

/// A validator declaration: the `required` placeholder or a function.
pub enum ValidatorItem<V: ?Sized> {
    /// Stands for the hosting control's "value is present" predicate.
    Required,
    /// A validator used as-is.
    Function(Validator<V>),
}

impl<V: ?Sized> ValidatorItem<V> {
    /// Declares a function validator.
    pub fn function<F, R>(f: F) -> Self
    where
        F: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<ValidationOutcome>,
    {
        Self::Function(Validator::new(f))
    }

    /// Returns `true` for the `required` placeholder.
    pub const fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }
}

impl<V: ?Sized> Clone for ValidatorItem<V> {
    fn clone(&self) -> Self {
        match self {
            Self::Required => Self::Required,
            Self::Function(validator) => Self::Function(validator.clone()),
        }
    }
}

impl<V: ?Sized> fmt::Debug for ValidatorItem<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("Required"),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl<V: ?Sized> From<Validator<V>> for ValidatorItem<V> {
    fn from(validator: Validator<V>) -> Self {
        Self::Function(validator)
    }
}

/// Binds the `required` placeholder to `required`.
///
/// - Items without a placeholder are returned unchanged, in order.
/// - The first placeholder is replaced by `required`, or removed when
///   `required` is `None`.
/// - Later placeholders are removed.
pub fn replace_required_preset<V, I>(items: I, required: Option<Validator<V>>) -> Vec<Validator<V>>
where
    V: ?Sized,
    I: IntoIterator<Item = ValidatorItem<V>>,
{
    let mut required = required;
    let mut seen = false;
    let mut validators = Vec::new();

    for item in items {
        match item {
            ValidatorItem::Function(validator) => validators.push(validator),
            ValidatorItem::Required if seen => {
                tracing::debug!("dropping duplicate required placeholder");
            }
            ValidatorItem::Required => {
                seen = true;
                validators.extend(required.take());
            }
        }
    }

    validators
}
