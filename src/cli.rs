//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manifest used when neither `--manifest` nor `BERKS_MANIFEST` is given
pub const DEFAULT_MANIFEST: &str = "Berksfile";

/// berks-lock - Berksfile lockfile inspector
///
/// Inspect the lockfile written next to a Berksfile and detect manifest drift.
#[derive(Parser, Debug)]
#[command(
    name = "berks-lock",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Inspect Berksfile lockfiles",
    long_about = "berks-lock reads the lockfile written next to a Berksfile, lists the \
                  cookbook sources it pins and checks whether the Berksfile changed since \
                  the lockfile was written.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  berks-lock list\n    \
                  berks-lock check --manifest cookbooks/app/Berksfile\n    \
                  berks-lock fingerprint --write"
)]
pub struct Cli {
    /// Path to the Berksfile; the lockfile is `<manifest>.lock`
    #[arg(
        long,
        short = 'm',
        global = true,
        env = "BERKS_MANIFEST",
        default_value = DEFAULT_MANIFEST
    )]
    pub manifest: PathBuf,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the lockfile in its canonical form
    Show,

    /// List locked cookbook sources
    List(ListArgs),

    /// Check that the lockfile matches the current Berksfile
    Check,

    /// Print the Berksfile fingerprint, optionally recording it in the lockfile
    Fingerprint(FingerprintArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Also show constraints and locations
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Arguments for the fingerprint command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the fingerprint:\n    berks-lock fingerprint\n\n\
                  Store it in Berksfile.lock:\n    berks-lock fingerprint --write")]
pub struct FingerprintArgs {
    /// Store the fingerprint in the lockfile, creating it when missing
    #[arg(long)]
    pub write: bool,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
