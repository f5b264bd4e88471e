//! Normalized transform functions and the transform executor.
//!
//! Every filter and modifier a control declares ends up as a [`TransformFn`]:
//! a shared `&str -> String` function that must accept any input, including
//! the empty string. [`transform`] folds a value through an ordered list of
//! them.

use std::sync::Arc;

/// A normalized, total string-to-string transform.
pub type TransformFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Wraps a closure or function as a [`TransformFn`].
///
/// # Examples
///
/// ```
/// use inputs_rs_model::transform::transform_fn;
///
/// let first_char = transform_fn(|value| value.chars().take(1).collect());
/// assert_eq!(first_char("abc"), "a");
/// ```
pub fn transform_fn<F>(f: F) -> TransformFn
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Transforms a value by applying each transformer in order.
///
/// - An absent or empty `value` yields `""` without invoking any transformer.
/// - `None` entries are skipped.
/// - With no remaining transformers the value is returned unchanged.
///
/// # Examples
///
/// ```
/// use inputs_rs_model::transform::{transform, transform_fn};
///
/// let upper = transform_fn(|v| v.to_uppercase());
/// let trim_end = transform_fn(|v| v.trim_end().to_string());
///
/// assert_eq!(transform(Some("abc  "), [&upper, &trim_end]), "ABC");
/// assert_eq!(transform(None, [&upper]), "");
/// assert_eq!(transform(Some("abc"), [None, Some(&upper)]), "ABC");
/// ```
pub fn transform<'a, I>(value: Option<&str>, transformers: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Option<&'a TransformFn>>,
{
    let value = match value {
        Some(value) if !value.is_empty() => value,
        _ => return String::new(),
    };

    transformers
        .into_iter()
        .filter_map(Into::into)
        .fold(value.to_string(), |acc, transformer| transformer(&acc))
}
