//! Install command implementation
//!
//! One-shot binary acquisition:
//! 1. Resolve the effective manifest (baked-in or explicit file)
//! 2. Map the host platform key to the release asset URL
//! 3. Download the asset into the install directory, atomically
//! 4. Report the installed path
//!
//! Unsupported platforms fail before any network activity. Any failure exits
//! the process non-zero so calling package managers can detect it.

use std::path::PathBuf;

use console::Style;

use crate::error::Result;
use crate::fetcher;
use crate::launcher;
use crate::manifest::Manifest;
use crate::resolver;

/// Run install command
pub fn run(install_dir: Option<PathBuf>, manifest: Option<PathBuf>, verbose: bool) -> Result<()> {
    let manifest = Manifest::resolve(manifest.as_deref())?;
    let url = resolver::host_release_url(&manifest)?;

    let install_dir = match install_dir {
        Some(dir) => dir,
        None => launcher::default_install_dir()?,
    };
    std::fs::create_dir_all(&install_dir)?;

    let dest = launcher::artifact_path(&install_dir, &manifest);

    let dim = Style::new().dim();
    println!("Downloading {} v{}...", manifest.name, manifest.version);
    if verbose {
        println!("  {}", dim.apply_to(&url));
    }

    fetcher::download(&url, &dest)?;

    let green = Style::new().green().bold();
    println!(
        "{} Installed {} v{} to {}",
        green.apply_to("✓"),
        manifest.name,
        manifest.version,
        dest.display()
    );

    Ok(())
}
