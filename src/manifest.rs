//! Release manifest: the (name, version, repository) coordinate
//!
//! The defaults are baked in at build time from the crate metadata, mirroring
//! how the wrapper package pins the release it was published against. A JSON
//! manifest file can override them, mainly for testing against a local server.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BinshimError, Result};

/// Release coordinate read at process start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Name of the wrapped binary (also the release asset prefix)
    pub name: String,
    /// Semantic version of the pinned release, without the leading 'v'
    pub version: String,
    /// Repository base URL the release assets are published under
    pub repository: String,
}

impl Manifest {
    /// Manifest baked in at build time from the package metadata
    pub fn baked() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            repository: env!("CARGO_PKG_REPOSITORY").to_string(),
        }
    }

    /// Load a manifest from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| BinshimError::ManifestReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| BinshimError::ManifestParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Resolve the effective manifest: an explicit file wins over the baked-in one
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::baked()),
        }
    }

    /// File name of the installed artifact, with the platform suffix
    pub fn artifact_name(&self) -> String {
        if cfg!(windows) {
            format!("{}.exe", self.name)
        } else {
            self.name.clone()
        }
    }
}
