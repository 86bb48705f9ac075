use std::path::PathBuf;

use clap::Args;

use folder_scm_core::{Checkout, FolderScm, SilentSink, StagingSpec, WriterSink};

use crate::error::{CliError, Result};
use crate::scenario::Scenario;

#[derive(Args)]
pub(crate) struct CheckoutArgs {
    /// Directory to copy into the workspace
    #[arg(long, conflicts_with = "scenario", required_unless_present = "scenario")]
    source: Option<PathBuf>,

    /// File name to report in the change log (repeatable)
    #[arg(long = "file", value_name = "NAME", conflicts_with = "scenario")]
    files: Vec<String>,

    /// TOML scenario file providing the source directory and change-log files
    #[arg(long, value_name = "PATH")]
    scenario: Option<PathBuf>,

    /// Workspace directory to (re)populate
    #[arg(long)]
    workspace: PathBuf,

    /// Where to write the change-log XML
    #[arg(long = "changelog", value_name = "PATH")]
    changelog: PathBuf,

    /// Suppress progress output
    #[arg(long)]
    quiet: bool,
}

pub(crate) fn run(args: CheckoutArgs) -> Result<()> {
    let spec = build_spec(&args)?;
    let scm = FolderScm::new(spec);

    if args.quiet {
        scm.checkout(&args.workspace, &args.changelog, &mut SilentSink)?;
    } else {
        let mut sink = WriterSink::new(std::io::stdout());
        scm.checkout(&args.workspace, &args.changelog, &mut sink)?;
        println!("Checked out into {}", args.workspace.display());
    }

    Ok(())
}

fn build_spec(args: &CheckoutArgs) -> Result<StagingSpec> {
    if let Some(path) = &args.scenario {
        let scenario = Scenario::from_file(path)?;
        let spec = StagingSpec::builder(scenario.source_dir)
            .changelog_files(scenario.changelog_files)
            .build()?;
        return Ok(spec);
    }

    // clap already rejects the missing-source case
    let source = args.source.as_ref().ok_or(CliError::MissingSource)?;
    let spec = StagingSpec::builder(source)
        .changelog_files(args.files.iter().cloned())
        .build()?;
    Ok(spec)
}
