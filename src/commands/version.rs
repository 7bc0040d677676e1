//! Version command implementation

use crate::error::Result;
use crate::manifest::Manifest;

/// Run version command
pub fn run() -> Result<()> {
    let manifest = Manifest::baked();

    println!("binshim {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Pinned release:");
    println!("  {} v{}", manifest.name, manifest.version);
    println!("  {}", manifest.repository);
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn rustc_version() -> &'static str {
    // This will be the version of rustc used to compile
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
