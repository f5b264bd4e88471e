//! File inputs.

use inputs_rs_core::logging::control_span;
use inputs_rs_validation::{
    replace_required_preset, required, validate, FileHandle, ValidationResult, ValidatorItem,
};

/// The model of a file input: the currently selected files.
#[derive(Debug, Clone)]
pub struct FileModel {
    name: String,
    files: Vec<FileHandle>,
    validators: Vec<ValidatorItem<[FileHandle]>>,
}

impl FileModel {
    /// Creates a file input with nothing selected.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            validators: Vec::new(),
        }
    }

    /// Sets the validator declarations.
    #[must_use]
    pub fn with_validators<I>(mut self, validators: I) -> Self
    where
        I: IntoIterator<Item = ValidatorItem<[FileHandle]>>,
    {
        self.validators = validators.into_iter().collect();
        self
    }

    /// Returns the control name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the selected files.
    pub fn files(&self) -> &[FileHandle] {
        &self.files
    }

    /// Replaces the selection.
    pub fn select<I>(&mut self, files: I)
    where
        I: IntoIterator<Item = FileHandle>,
    {
        let span = control_span(&self.name);
        let _guard = span.enter();
        self.files = files.into_iter().collect();
        tracing::trace!(count = self.files.len(), "files selected");
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Validates the selection, with `required` meaning "at least one file".
    pub fn validate(&self) -> ValidationResult {
        let validators =
            replace_required_preset(self.validators.iter().cloned(), Some(required::files()));
        validate(self.files.as_slice(), &validators)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_mock() -> FileHandle {
        FileHandle::new("test-file.txt", 14, "text/plain")
    }

    #[test]
    fn test_select_and_clear() {
        let mut input = FileModel::new("testing-file-input");
        assert!(input.files().is_empty());

        input.select([file_mock()]);
        assert_eq!(input.files(), &[file_mock()]);

        input.clear();
        assert!(input.files().is_empty());
    }

    #[test]
    fn test_select_nothing() {
        let mut input = FileModel::new("f");
        input.select(Vec::new());
        assert!(input.files().is_empty());
    }

    #[test]
    fn test_required_validation() {
        let mut input = FileModel::new("f").with_validators([ValidatorItem::Required]);
        assert_eq!(input.validate(), ValidationResult::failed());

        input.select([file_mock()]);
        assert_eq!(input.validate(), ValidationResult::passed());
    }

    #[test]
    fn test_specific_file_validation() {
        let mut input = FileModel::new("f").with_validators([
            ValidatorItem::Required,
            ValidatorItem::function(|files: &[FileHandle]| {
                if files.first().is_some_and(|f| f.name == "test-file.txt") {
                    Ok(())
                } else {
                    Err("Wrong file")
                }
            }),
        ]);

        input.select([FileHandle::new("invalid-file.txt", 1, "text/plain")]);
        assert_eq!(input.validate(), ValidationResult::with_messages(["Wrong file"]));
    }
}
