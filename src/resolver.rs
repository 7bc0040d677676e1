//! Release URL resolution from the host platform key
//!
//! Maps the running OS and CPU architecture to the identifiers used in release
//! asset names, then builds the canonical download URL:
//! `<repository>/releases/download/v<version>/<name>-<os>-<arch>`.
//!
//! Pure functions: unsupported platforms fail here, before any network I/O.

use crate::error::{BinshimError, Result};
use crate::manifest::Manifest;

/// Map an OS identifier (as reported by `std::env::consts::OS`) to the
/// identifier used in release asset names
fn release_os(os: &str) -> Result<&'static str> {
    match os {
        "windows" => Ok("windows"),
        "macos" => Ok("darwin"),
        "linux" => Ok("linux"),
        other => Err(BinshimError::UnsupportedOs {
            os: other.to_string(),
        }),
    }
}

/// Map a CPU architecture identifier (as reported by `std::env::consts::ARCH`)
/// to the identifier used in release asset names
fn release_arch(arch: &str) -> Result<&'static str> {
    match arch {
        "x86_64" => Ok("amd64"),
        "aarch64" => Ok("arm64"),
        other => Err(BinshimError::UnsupportedArch {
            arch: other.to_string(),
        }),
    }
}

/// Build the download URL for the given platform key
pub fn release_url(manifest: &Manifest, os: &str, arch: &str) -> Result<String> {
    let os = release_os(os)?;
    let arch = release_arch(arch)?;

    Ok(format!(
        "{}/releases/download/v{}/{}-{}-{}",
        manifest.repository, manifest.version, manifest.name, os, arch
    ))
}

/// Build the download URL for the running host
pub fn host_release_url(manifest: &Manifest) -> Result<String> {
    release_url(manifest, std::env::consts::OS, std::env::consts::ARCH)
}
