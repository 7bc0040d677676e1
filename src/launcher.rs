//! Child process launch with inherited standard streams
//!
//! The wrapper stays out of the way: stdin, stdout and stderr are wired
//! straight through to the child, nothing is buffered or rewritten, and the
//! child's exit code becomes the wrapper's own. A child killed by a signal
//! has no exit code and maps to 1.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{BinshimError, Result};
use crate::manifest::Manifest;

/// Default install directory: the directory the wrapper itself runs from
pub fn default_install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| BinshimError::IoError {
        message: format!("executable path has no parent directory: {}", exe.display()),
    })?;
    Ok(dir.to_path_buf())
}

/// Path of the installed artifact for this platform
pub fn artifact_path(install_dir: &Path, manifest: &Manifest) -> PathBuf {
    install_dir.join(manifest.artifact_name())
}

/// Spawn the artifact with the given arguments and wait for it to exit
///
/// Blocks until the child exits; there is no timeout, so a hung child hangs
/// the wrapper too.
pub fn launch(binary: &Path, args: &[OsString]) -> Result<i32> {
    if !binary.exists() {
        return Err(BinshimError::BinaryNotFound {
            path: binary.display().to_string(),
        });
    }

    let status = Command::new(binary)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| BinshimError::LaunchFailed {
            path: binary.display().to_string(),
            reason: e.to_string(),
        })?;

    // No exit code means the child was killed by a signal
    Ok(status.code().unwrap_or(1))
}
