use std::path::Path;

use crate::error::ChangeLogError;
use crate::format::format_change_log;

/// One synthetic change event: an identifying label plus the ordered list
/// of affected file names.
///
/// Order is preserved and significant; uniqueness is not enforced. An
/// absent label serializes as the empty string, never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangeLogRecord {
    pub label: Option<String>,
    pub files: Vec<String>,
}

impl ChangeLogRecord {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            files: Vec::new(),
        }
    }

    #[must_use]
    pub fn unlabeled() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }

    pub fn add_file(&mut self, file: impl Into<String>) {
        self.files.push(file.into());
    }

    #[must_use]
    pub fn to_xml(&self) -> String {
        format_change_log(self)
    }

    /// Serializes the record and writes it to `path`, creating or
    /// truncating the file. A partial write on failure is not cleaned up.
    ///
    /// # Errors
    ///
    /// Returns `ChangeLogError::Write` if the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ChangeLogError> {
        std::fs::write(path, self.to_xml()).map_err(|source| ChangeLogError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
