//! Build context shared by every pipeline step.

use std::path::{Path, PathBuf};
use std::thread;

use crate::core::env::{Arch, Platform};

/// Upper bound on the job count passed to the dependency build.
pub const MAX_JOBS: usize = 8;

/// Job count used when the CPU count cannot be determined.
pub const FALLBACK_JOBS: usize = 4;

/// Immutable configuration for one pipeline run.
///
/// Constructed once at startup and passed by reference into every
/// component; architecture and platform are never re-detected.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Plugin project directory (the invocation directory).
    project_dir: PathBuf,

    /// Name of the extension module, e.g. `cosine_calculator`.
    plugin: String,

    /// Normalized host CPU architecture.
    arch: Arch,

    /// Normalized host operating system.
    platform: Platform,

    /// Explicit job-count override for the dependency build.
    jobs: Option<usize>,
}

impl BuildContext {
    /// Create a context for the host environment.
    pub fn new(project_dir: PathBuf, plugin: impl Into<String>) -> Self {
        BuildContext {
            project_dir,
            plugin: plugin.into(),
            arch: Arch::host(),
            platform: Platform::host(),
            jobs: None,
        }
    }

    /// Create a context with an explicit architecture and platform.
    pub fn with_env(
        project_dir: PathBuf,
        plugin: impl Into<String>,
        arch: Arch,
        platform: Platform,
    ) -> Self {
        BuildContext {
            project_dir,
            plugin: plugin.into(),
            arch,
            platform,
            jobs: None,
        }
    }

    /// Override the computed job count.
    pub fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    pub fn arch(&self) -> &Arch {
        &self.arch
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Local checkout of the godot-cpp sources.
    pub fn dep_dir(&self) -> PathBuf {
        self.project_dir.join("godot-cpp")
    }

    /// Directory the compiled artifacts land in.
    pub fn bin_dir(&self) -> PathBuf {
        self.project_dir.join("bin")
    }

    /// The extension source file whose presence signals that the tool is
    /// being run from the right directory.
    pub fn extension_source(&self) -> PathBuf {
        self.project_dir
            .join("src")
            .join(format!("{}.cpp", self.plugin))
    }

    /// Parallelism for the dependency build: the explicit override if set,
    /// otherwise min(CPU count, 8), falling back to 4.
    pub fn jobs(&self) -> usize {
        self.jobs.unwrap_or_else(default_jobs)
    }
}

fn default_jobs() -> usize {
    thread::available_parallelism()
        .map(|n| n.get().min(MAX_JOBS))
        .unwrap_or(FALLBACK_JOBS)
}
