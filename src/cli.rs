//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// binshim - prebuilt binary wrapper
///
/// Installs the platform-specific prebuilt binary pinned by the manifest and
/// forwards invocations to it.
#[derive(Parser, Debug)]
#[command(
    name = "binshim",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Package-manager wrapper for a platform-specific prebuilt binary",
    long_about = "binshim downloads the prebuilt release binary matching the host \
                  operating system and CPU architecture, installs it beside itself, \
                  and forwards later invocations to it with the child's exit code.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  binshim install\n    \
                  binshim run -- --help\n    \
                  binshim version\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/binshim/binshim"
)]
pub struct Cli {
    /// Directory the binary is installed into (defaults to the wrapper's own directory)
    #[arg(long, short = 'd', global = true, env = "BINSHIM_INSTALL_DIR")]
    pub install_dir: Option<PathBuf>,

    /// Manifest file overriding the baked-in release coordinate
    #[arg(long, short = 'm', global = true, env = "BINSHIM_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the prebuilt binary for this platform
    #[command(after_help = "EXAMPLES:\n  \
                  Install the pinned release:\n    binshim install\n\n\
                  Install into a specific directory:\n    binshim install -d ~/.local/bin\n\n\
                  Install from an explicit manifest:\n    binshim install -m manifest.json")]
    Install,

    /// Run the installed binary, forwarding all arguments
    Run(RunArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Forward arguments to the binary:\n    binshim run -- --help\n\n\
                  Run with no arguments:\n    binshim run")]
pub struct RunArgs {
    /// Arguments forwarded unmodified to the installed binary
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    binshim completions --shell bash > ~/.bash_completion.d/binshim\n\n\
                  Generate zsh completions:\n    binshim completions --shell zsh > ~/.zfunc/_binshim")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(long, value_enum)]
    pub shell: clap_complete::Shell,
}
