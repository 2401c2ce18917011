//! The `nphys` command line tool

mod cli;
mod commands;
mod error;

// crate modules
use cli::{Cli, Commands};
use error::Result;

// standard library
use std::error::Error;

// external crates
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");

        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }

        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    logging_init(&cli)?;

    // progress bar would be interleaved with the per-isotope logs
    let progress = !cli.quiet && cli.verbose == 0;

    match cli.command {
        Commands::Average(args) => commands::average(args),
        Commands::Survey(args) => commands::survey(args, progress),
        Commands::Drift(args) => commands::drift(args),
        Commands::Salt(args) => commands::salt(args),
        Commands::Plane(args) => commands::plane(args),
    }
}

/// Warnings by default, -v for info, -vv for debug, -vvv for trace
fn logging_init(cli: &Cli) -> Result<()> {
    stderrlog::new()
        .module(module_path!())
        .modules([
            "nphys_bolsig",
            "nphys_plane",
            "nphys_salt",
            "nphys_spectrum",
            "nphys_xsdata",
        ])
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 1)
        .show_level(false)
        .init()?;
    Ok(())
}
