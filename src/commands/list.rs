//! List command implementation
//!
//! Lists the locked cookbook sources in lockfile order.

use std::path::Path;

use console::Style;

use crate::cli::ListArgs;
use crate::commands::helpers::load_lockfile;
use berks_lock::{LockedCookbook, Result};

/// Run list command
pub fn run(manifest: &Path, args: &ListArgs) -> Result<()> {
    let lockfile = load_lockfile(manifest)?;

    if lockfile.sources().is_empty() {
        println!("No cookbooks locked.");
        return Ok(());
    }

    println!("Locked cookbooks ({}):", lockfile.sources().len());
    println!();

    for cookbook in lockfile.sources() {
        if args.detailed {
            display_cookbook_detailed(cookbook);
        } else {
            display_cookbook_simple(cookbook);
        }
    }

    Ok(())
}

fn display_cookbook_simple(cookbook: &LockedCookbook) {
    let version = cookbook.locked_version.as_deref().unwrap_or("unlocked");
    println!(
        "  {} ({})",
        Style::new().bold().yellow().apply_to(&cookbook.name),
        Style::new().green().apply_to(version)
    );
}

fn display_cookbook_detailed(cookbook: &LockedCookbook) {
    display_cookbook_simple(cookbook);
    if let Some(ref constraint) = cookbook.constraint {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Constraint:"),
            constraint
        );
    }
    match cookbook.location {
        Some(ref location) => println!(
            "    {} {}",
            Style::new().bold().apply_to("Source:"),
            location
        ),
        None => println!(
            "    {} {}",
            Style::new().bold().apply_to("Source:"),
            Style::new().dim().apply_to("default site")
        ),
    }
    println!();
}
