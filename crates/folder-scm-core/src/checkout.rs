use std::path::Path;

use tracing::debug;

use folder_scm_changelog::ChangeLogRecord;

use crate::error::CheckoutError;
use crate::sink::ProgressSink;
use crate::staging_spec::StagingSpec;

/// Capability of populating a workspace and recording what changed.
///
/// Hosts trigger checkouts through this trait rather than a concrete
/// implementation type.
pub trait Checkout: Send + Sync {
    /// Stages `workspace` and writes the change-log document to
    /// `changelog_path`. Both steps are synchronous and run to completion
    /// on the caller's thread; concurrent calls against the same workspace
    /// must be serialized by the caller.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError` if staging or change-log writing fails.
    /// There is no partial-success signaling and no compensation for a
    /// half-finished stage.
    fn checkout(
        &self,
        workspace: &Path,
        changelog_path: &Path,
        sink: &mut dyn ProgressSink,
    ) -> Result<(), CheckoutError>;
}

/// Copies a fixed local directory into the workspace and reports a
/// pre-configured file list as the change log.
#[derive(Debug, Clone)]
pub struct FolderScm {
    spec: StagingSpec,
}

impl FolderScm {
    #[must_use]
    pub fn new(spec: StagingSpec) -> Self {
        Self { spec }
    }

    #[must_use]
    pub fn spec(&self) -> &StagingSpec {
        &self.spec
    }
}

impl Checkout for FolderScm {
    fn checkout(
        &self,
        workspace: &Path,
        changelog_path: &Path,
        sink: &mut dyn ProgressSink,
    ) -> Result<(), CheckoutError> {
        if workspace.exists() {
            sink.progress(&format!(
                "Deleting existing workspace {}",
                workspace.display()
            ));
        }
        sink.progress(&format!("Staging {}", self.spec.source_dir().display()));

        folder_scm_staging::stage(self.spec.source_dir(), workspace)?;
        debug!(workspace = %workspace.display(), "workspace staged");

        let record = ChangeLogRecord::new(self.spec.source_dir().display().to_string())
            .with_files(self.spec.changelog_files().iter().cloned());
        record.write_to_file(changelog_path)?;
        debug!(
            path = %changelog_path.display(),
            files = record.files.len(),
            "change log written"
        );

        Ok(())
    }
}
