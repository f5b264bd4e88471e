//! The default filter of number inputs.
//!
//! A number input keeps the digits `0-9` plus a configurable set of extra
//! characters (decimal separators, a minus sign).

use inputs_rs_core::{InputsResult, Settings};

use crate::filters::Filter;

/// Builds the filter keeping digits and each character of `allowed`.
///
/// Characters in `allowed` are taken literally, so regex metacharacters
/// such as `.` or `-` are safe to pass.
///
/// # Examples
///
/// ```
/// use inputs_rs_model::number::numeric_filter;
/// use inputs_rs_model::{create_filters, transform, FilterSpec};
///
/// let spec = FilterSpec::from(numeric_filter(".,").unwrap());
/// let chain = create_filters(Some(&spec));
/// assert_eq!(transform(Some("€ 1.234,50"), &chain), "1.234,50");
/// ```
pub fn numeric_filter(allowed: &str) -> InputsResult<Filter> {
    let extra: String = allowed
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect();
    Filter::pattern(&format!("[0-9{extra}]"))
}

/// Builds the number filter from `settings.number_allowed_characters`.
pub fn numeric_filter_from_settings(settings: &Settings) -> InputsResult<Filter> {
    numeric_filter(&settings.number_allowed_characters)
}
