use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("checkout failed")]
    Checkout(#[from] folder_scm_core::CheckoutError),

    #[error("invalid staging configuration")]
    Spec(#[from] folder_scm_core::SpecError),

    #[error("failed to read scenario file '{path}'")]
    ScenarioRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario file '{path}'")]
    ScenarioParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("--source is required unless --scenario is given")]
    MissingSource,
}

pub(crate) type Result<T> = std::result::Result<T, CliError>;
