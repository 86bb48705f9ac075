use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StagingError {
    #[error("failed to remove existing workspace at '{path}'")]
    RemoveTarget {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory '{path}'")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read source directory '{path}'")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy '{from}' to '{to}'")]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
