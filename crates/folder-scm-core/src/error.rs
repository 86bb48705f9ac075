use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("source directory '{path}' does not exist")]
    SourceNotFound { path: PathBuf },

    #[error("source path '{path}' is not a directory")]
    NotADirectory { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("failed to stage workspace")]
    Staging(#[from] folder_scm_staging::StagingError),

    #[error("failed to write change log")]
    ChangeLog(#[from] folder_scm_changelog::ChangeLogError),
}
