//! Duplicate-free membership helpers for string collections.
//!
//! Checkbox groups store their model value either as an ordered `Vec<String>`
//! or as a set. [`StringCollection`] gives both the same add/remove/has
//! vocabulary; empty values are ignored everywhere.

use std::collections::{BTreeSet, HashSet};

/// Membership operations shared by list and set model values.
///
/// # Examples
///
/// ```
/// use inputs_rs_core::utils::StringCollection;
///
/// let mut selected: Vec<String> = vec!["foo".into()];
/// selected.add("bar");
/// selected.add("foo");
/// assert_eq!(selected, vec!["foo".to_string(), "bar".to_string()]);
/// assert!(selected.has("bar"));
/// ```
pub trait StringCollection {
    /// Adds `value` unless it is empty or already present.
    ///
    /// Returns `true` if the collection changed.
    fn add(&mut self, value: &str) -> bool;

    /// Removes `value` if present. Empty values are ignored.
    ///
    /// Returns `true` if the collection changed.
    fn remove(&mut self, value: &str) -> bool;

    /// Returns `true` if `value` is non-empty and present.
    fn has(&self, value: &str) -> bool;
}

impl StringCollection for Vec<String> {
    fn add(&mut self, value: &str) -> bool {
        if value.is_empty() || self.iter().any(|v| v == value) {
            return false;
        }
        self.push(value.to_string());
        true
    }

    fn remove(&mut self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        match self.iter().position(|v| v == value) {
            Some(index) => {
                self.remove(index);
                true
            }
            None => false,
        }
    }

    fn has(&self, value: &str) -> bool {
        !value.is_empty() && self.iter().any(|v| v == value)
    }
}

impl StringCollection for HashSet<String> {
    fn add(&mut self, value: &str) -> bool {
        !value.is_empty() && self.insert(value.to_string())
    }

    fn remove(&mut self, value: &str) -> bool {
        !value.is_empty() && HashSet::remove(self, value)
    }

    fn has(&self, value: &str) -> bool {
        !value.is_empty() && self.contains(value)
    }
}

impl StringCollection for BTreeSet<String> {
    fn add(&mut self, value: &str) -> bool {
        !value.is_empty() && self.insert(value.to_string())
    }

    fn remove(&mut self, value: &str) -> bool {
        !value.is_empty() && BTreeSet::remove(self, value)
    }

    fn has(&self, value: &str) -> bool {
        !value.is_empty() && self.contains(value)
    }
}

/// The model value of a multi-choice control: an ordered list or a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionModel {
    /// Ordered, insertion order preserved.
    List(Vec<String>),
    /// Unordered, de-duplicating.
    Set(HashSet<String>),
}

impl CollectionModel {
    /// Returns the number of members.
    pub fn len(&self) -> usize {
        match self {
            Self::List(items) => items.len(),
            Self::Set(items) => items.len(),
        }
    }

    /// Returns `true` if there are no members.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CollectionModel {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl From<Vec<String>> for CollectionModel {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<HashSet<String>> for CollectionModel {
    fn from(items: HashSet<String>) -> Self {
        Self::Set(items)
    }
}

impl StringCollection for CollectionModel {
    fn add(&mut self, value: &str) -> bool {
        match self {
            Self::List(items) => items.add(value),
            Self::Set(items) => items.add(value),
        }
    }

    fn remove(&mut self, value: &str) -> bool {
        match self {
            Self::List(items) => StringCollection::remove(items, value),
            Self::Set(items) => StringCollection::remove(items, value),
        }
    }

    fn has(&self, value: &str) -> bool {
        match self {
            Self::List(items) => items.has(value),
            Self::Set(items) => items.has(value),
        }
    }
}

/// The model value of a checkbox: a plain flag, or membership of the
/// checkbox's own value in a shared collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckboxValue {
    /// A standalone checkbox.
    Boolean(bool),
    /// One checkbox of a group bound to the same collection.
    Collection(CollectionModel),
}

impl CheckboxValue {
    /// Returns whether the checkbox is ticked.
    ///
    /// A collection counts as ticked when it contains `own_value`; without an
    /// own value a collection is never ticked.
    pub fn is_checked(&self, own_value: Option<&str>) -> bool {
        match self {
            Self::Boolean(checked) => *checked,
            Self::Collection(items) => own_value.is_some_and(|value| items.has(value)),
        }
    }
}

impl From<bool> for CheckboxValue {
    fn from(checked: bool) -> Self {
        Self::Boolean(checked)
    }
}

impl From<CollectionModel> for CheckboxValue {
    fn from(items: CollectionModel) -> Self {
        Self::Collection(items)
    }
}

impl From<Vec<String>> for CheckboxValue {
    fn from(items: Vec<String>) -> Self {
        Self::Collection(CollectionModel::List(items))
    }
}

impl From<HashSet<String>> for CheckboxValue {
    fn from(items: HashSet<String>) -> Self {
        Self::Collection(CollectionModel::Set(items))
    }
}
