use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CliError, Result};

/// A checkout scenario loaded from a TOML file, as an alternative to
/// passing `--source`/`--file` flags.
///
/// ```toml
/// source-dir = "fixtures/project"
/// changelog-files = ["a.txt", "sub/b.txt"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct Scenario {
    pub source_dir: PathBuf,
    #[serde(default)]
    pub changelog_files: Vec<String>,
}

impl Scenario {
    pub(crate) fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ScenarioRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| CliError::ScenarioParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
