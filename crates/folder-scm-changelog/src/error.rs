use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChangeLogError {
    #[error("failed to write change log at '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
