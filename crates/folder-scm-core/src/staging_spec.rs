use std::path::{Path, PathBuf};

use crate::error::SpecError;

/// Immutable description of one staging scenario: where to copy the
/// workspace from, and which file names the synthetic change log reports.
///
/// Constructed through [`StagingSpec::builder`]; the source directory is
/// validated once, up front, and the value is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingSpec {
    source_dir: PathBuf,
    changelog_files: Vec<String>,
}

impl StagingSpec {
    #[must_use]
    pub fn builder(source_dir: impl Into<PathBuf>) -> StagingSpecBuilder {
        StagingSpecBuilder {
            source_dir: source_dir.into(),
            changelog_files: Vec::new(),
        }
    }

    /// Shorthand for a spec with an empty change-log file list.
    ///
    /// # Errors
    ///
    /// Returns `SpecError` if `source_dir` does not exist or is not a
    /// directory.
    pub fn new(source_dir: impl Into<PathBuf>) -> Result<Self, SpecError> {
        Self::builder(source_dir).build()
    }

    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    #[must_use]
    pub fn changelog_files(&self) -> &[String] {
        &self.changelog_files
    }
}

#[derive(Debug, Clone)]
pub struct StagingSpecBuilder {
    source_dir: PathBuf,
    changelog_files: Vec<String>,
}

impl StagingSpecBuilder {
    #[must_use]
    pub fn changelog_file(mut self, file: impl Into<String>) -> Self {
        self.changelog_files.push(file.into());
        self
    }

    #[must_use]
    pub fn changelog_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.changelog_files.extend(files.into_iter().map(Into::into));
        self
    }

    /// Validates the source directory and freezes the configuration. No
    /// filesystem mutation happens here.
    ///
    /// # Errors
    ///
    /// Returns `SpecError::SourceNotFound` if the source path does not
    /// exist, or `SpecError::NotADirectory` if it exists but is not a
    /// directory.
    pub fn build(self) -> Result<StagingSpec, SpecError> {
        if !self.source_dir.exists() {
            return Err(SpecError::SourceNotFound {
                path: self.source_dir,
            });
        }
        if !self.source_dir.is_dir() {
            return Err(SpecError::NotADirectory {
                path: self.source_dir,
            });
        }

        Ok(StagingSpec {
            source_dir: self.source_dir,
            changelog_files: self.changelog_files,
        })
    }
}
