//! berks-lock - Berksfile lockfile inspector
//!
//! Reads the lockfile written next to a Berksfile and reports on it.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "berks_lock=debug"
    } else {
        "berks_lock=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Show => commands::show::run(&cli.manifest),
        Commands::List(ref args) => commands::list::run(&cli.manifest, args),
        Commands::Check => commands::check::run(&cli.manifest),
        Commands::Fingerprint(ref args) => commands::fingerprint::run(&cli.manifest, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(ref args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
