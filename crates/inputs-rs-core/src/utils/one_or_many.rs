//! A declaration that is either a single item or an ordered list of items.
//!
//! Controls accept `filters = "numbers"` as well as
//! `filters = ["numbers", "letters"]`; [`OneOrMany`] models both shapes and
//! normalizes them to a slice.

use serde::{Deserialize, Serialize};

/// Either a single `T` or an ordered list of `T`.
///
/// # Examples
///
/// ```
/// use inputs_rs_core::utils::OneOrMany;
///
/// let one: OneOrMany<&str> = "numbers".into();
/// assert_eq!(one.as_slice(), &["numbers"]);
///
/// let many: OneOrMany<&str> = vec!["numbers", "letters"].into();
/// assert_eq!(many.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// An ordered list of items. Tried first when deserializing.
    Many(Vec<T>),
    /// A single item.
    One(T),
}

impl<T> OneOrMany<T> {
    /// Returns the items as a slice, in declaration order.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(item) => std::slice::from_ref(item),
            Self::Many(items) => items,
        }
    }

    /// Returns an iterator over the items in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` for an empty list.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Converts into a `Vec`, preserving order.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(item: T) -> Self {
        Self::One(item)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Many(items)
    }
}

impl<T> FromIterator<T> for OneOrMany<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Many(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OneOrMany<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
