//! Utility types and functions for the inputs-rs library.
//!
//! This module provides:
//! - [`OneOrMany`]: A declaration that is either a single item or an ordered list.
//! - [`StringCollection`]: Duplicate-free membership helpers for `Vec` and set types.
//! - [`CollectionModel`]: The list-or-set model value of multi-choice controls.
//! - [`CheckboxValue`]: The flag-or-collection model value of checkboxes.

mod collections;
mod one_or_many;

pub use collections::{CheckboxValue, CollectionModel, StringCollection};
pub use one_or_many::OneOrMany;
