//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// gdext-build - Cross-platform build orchestrator for GDExtension modules
#[derive(Parser)]
#[command(name = "gdext-build")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress everything except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch godot-cpp, build it, build the extension, and verify artifacts
    Build(BuildArgs),

    /// Check that the required build tools are installed
    Doctor(DoctorArgs),

    /// Check that the expected artifacts exist in the output directory
    Verify(VerifyArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Number of parallel jobs for the godot-cpp build
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Name of the extension module
    #[arg(long, default_value = "cosine_calculator")]
    pub plugin: String,

    /// Plugin project directory (defaults to the current directory)
    #[arg(long)]
    pub project_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct DoctorArgs {
    /// Plugin project directory (defaults to the current directory)
    #[arg(long)]
    pub project_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Name of the extension module
    #[arg(long, default_value = "cosine_calculator")]
    pub plugin: String,

    /// Plugin project directory (defaults to the current directory)
    #[arg(long)]
    pub project_dir: Option<PathBuf>,
}
