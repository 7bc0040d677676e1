//! binshim - prebuilt binary wrapper
//!
//! A package-manager wrapper that downloads the platform-specific prebuilt
//! release binary pinned by its manifest (install) and forwards command-line
//! invocations to it with inherited standard streams, mirroring the child's
//! exit code (run).

use clap::Parser;

mod cli;
mod commands;
mod error;
mod fetcher;
mod launcher;
mod manifest;
mod resolver;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let install_dir = cli.install_dir.clone();
    let manifest = cli.manifest.clone();

    let result = match cli.command {
        Commands::Install => {
            commands::install::run(install_dir, manifest, cli.verbose).map(|()| 0)
        }
        Commands::Run(args) => commands::run::run(install_dir, manifest, args),
        Commands::Version => commands::version::run().map(|()| 0),
        Commands::Completions(args) => commands::completions::run(args).map(|()| 0),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            // Install failures must exit non-zero so package managers notice
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
