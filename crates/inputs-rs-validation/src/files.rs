//! The file handles file inputs hold.
//!
//! Reading file contents is left to the host; validators only see the
//! metadata a picker reports.

use serde::{Deserialize, Serialize};

/// Metadata of one selected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    /// The file name, without any path.
    pub name: String,
    /// The size in bytes.
    pub size: u64,
    /// The MIME type reported by the picker; may be empty.
    #[serde(default, rename = "type")]
    pub mime: String,
}

impl FileHandle {
    /// Creates a file handle.
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Returns the extension of the file name, if any.
    pub fn extension(&self) -> Option<&str> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
    }
}
