//! Run command implementation
//!
//! Locates the installed artifact and hands over to it: argv is forwarded
//! unmodified, stdio is inherited, and the returned code becomes the
//! wrapper's own exit code.

use std::path::PathBuf;

use crate::cli::RunArgs;
use crate::error::Result;
use crate::launcher;
use crate::manifest::Manifest;

/// Run the installed binary; returns the child's exit code
pub fn run(install_dir: Option<PathBuf>, manifest: Option<PathBuf>, args: RunArgs) -> Result<i32> {
    let manifest = Manifest::resolve(manifest.as_deref())?;

    let install_dir = match install_dir {
        Some(dir) => dir,
        None => launcher::default_install_dir()?,
    };

    let binary = launcher::artifact_path(&install_dir, &manifest);
    launcher::launch(&binary, &args.args)
}
