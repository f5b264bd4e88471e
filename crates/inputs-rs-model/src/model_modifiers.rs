//! Case modifiers attached to the model binding itself.
//!
//! Unlike declared modifiers these are plain flags. They run after filters
//! and declared modifiers, lowercase first, then uppercase.

use serde::{Deserialize, Serialize};

use crate::modifiers::ModifierPreset;
use crate::transform::TransformFn;

/// Flags requesting case conversion of the bound model value.
///
/// # Examples
///
/// ```
/// use inputs_rs_model::{transform, ModelModifiers};
///
/// let flags = ModelModifiers { uppercase: true, ..ModelModifiers::default() };
/// assert_eq!(transform(Some("abc"), &flags.transforms()), "ABC");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelModifiers {
    /// Convert the value to lower case.
    pub lowercase: bool,
    /// Convert the value to upper case.
    pub uppercase: bool,
}

impl ModelModifiers {
    /// Returns `true` if no flag is set.
    pub const fn is_empty(&self) -> bool {
        !self.lowercase && !self.uppercase
    }

    /// Returns the transforms for the set flags, lowercase before uppercase.
    pub fn transforms(&self) -> Vec<TransformFn> {
        let mut chain = Vec::new();
        if self.lowercase {
            chain.push(ModifierPreset::Lowercase.function());
        }
        if self.uppercase {
            chain.push(ModifierPreset::Uppercase.function());
        }
        chain
    }
}
