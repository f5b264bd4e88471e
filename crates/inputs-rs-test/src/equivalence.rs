//! Comparing transforms on probe inputs.
//!
//! Resolved transforms are opaque functions, so two resolutions of the same
//! declaration can only be compared by what they produce.

use std::sync::Arc;

/// A string transform as produced by resolution.
pub type Transform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Asserts that two transform chains have the same length and produce the
/// same output for every probe.
///
/// # Panics
///
/// Panics on the first length or output mismatch.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use inputs_rs_test::equivalence::{assert_equivalent, Transform};
///
/// let a: Vec<Transform> = vec![Arc::new(|v: &str| v.to_uppercase())];
/// let b: Vec<Transform> = vec![Arc::new(|v: &str| v.to_ascii_uppercase())];
/// assert_equivalent(&a, &b, &["abc", "x1"]);
/// ```
pub fn assert_equivalent(left: &[Transform], right: &[Transform], probes: &[&str]) {
    assert_eq!(
        left.len(),
        right.len(),
        "Transform chains differ in length: {} vs {}",
        left.len(),
        right.len()
    );
    for (index, (l, r)) in left.iter().zip(right).enumerate() {
        for probe in probes {
            assert_eq!(
                l(probe),
                r(probe),
                "Transform #{index} differs on probe {probe:?}"
            );
        }
    }
}
