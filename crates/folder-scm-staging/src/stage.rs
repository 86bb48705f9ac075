use std::fs;
use std::path::Path;

use crate::error::StagingError;

/// Replaces the contents of `target` with a verbatim copy of `source`.
///
/// Anything already at `target` (file or directory tree) is removed first;
/// there are no merge semantics. Relative structure is preserved; attribute
/// fidelity is whatever `fs::copy` provides. A failed stage may leave the
/// target partially copied.
///
/// # Errors
///
/// Returns `StagingError` if removal of the existing target fails or if the
/// copy fails partway.
pub fn stage(source: &Path, target: &Path) -> Result<(), StagingError> {
    if target.exists() {
        remove_target(target)?;
    }

    copy_dir_recursive(source, target)
}

fn remove_target(target: &Path) -> Result<(), StagingError> {
    let result = if target.is_dir() {
        fs::remove_dir_all(target)
    } else {
        fs::remove_file(target)
    };

    result.map_err(|source| StagingError::RemoveTarget {
        path: target.to_path_buf(),
        source,
    })
}

fn copy_dir_recursive(source: &Path, target: &Path) -> Result<(), StagingError> {
    fs::create_dir_all(target).map_err(|err| StagingError::CreateDir {
        path: target.to_path_buf(),
        source: err,
    })?;

    let entries = fs::read_dir(source).map_err(|err| StagingError::ReadDir {
        path: source.to_path_buf(),
        source: err,
    })?;

    for entry in entries {
        let entry = entry.map_err(|err| StagingError::ReadDir {
            path: source.to_path_buf(),
            source: err,
        })?;

        let from = entry.path();
        let to = target.join(entry.file_name());

        if from.is_dir() {
            copy_dir_recursive(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|err| StagingError::CopyFile {
                from: from.clone(),
                to: to.clone(),
                source: err,
            })?;
        }
    }

    Ok(())
}
