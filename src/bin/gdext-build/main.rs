//! gdext-build CLI - build orchestrator for GDExtension modules

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gdext_build::util::shell::{ColorChoice, Shell};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("gdext_build=debug")
    } else {
        EnvFilter::new("gdext_build=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let color = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let shell = Shell::from_flags(cli.quiet, cli.verbose, color);

    // Execute command
    match cli.command {
        Commands::Build(args) => commands::build::execute(args, &shell),
        Commands::Doctor(args) => commands::doctor::execute(args, &shell),
        Commands::Verify(args) => commands::verify::execute(args, &shell),
    }
}
