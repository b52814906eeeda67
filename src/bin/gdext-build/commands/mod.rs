//! Command implementations

pub mod build;
pub mod doctor;
pub mod verify;

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Resolve the project directory: explicit flag or the invocation directory.
pub fn resolve_project_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}
