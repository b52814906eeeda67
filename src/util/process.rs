//! Subprocess execution utilities.
//!
//! All external tools (git, scons, compilers) are reached through the
//! [`CommandRunner`] trait: run a command in a directory, get back success
//! plus captured text. Failure to launch is data, not a fault, so a missing
//! tool can never crash the pipeline; the orchestrator decides what each
//! failure means.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured result of one external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// True only when the process launched and exited with status 0.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful invocation with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        CommandOutput {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed invocation with the given stderr.
    pub fn err(stderr: impl Into<String>) -> Self {
        CommandOutput {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Narrow seam for process execution, substitutable with a fake in tests.
pub trait CommandRunner {
    /// Launch `program` with `args` in `cwd`, block until completion, and
    /// capture its output. Never panics and never returns an error: launch
    /// failures are reported as `success: false`.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> CommandOutput;
}

/// Runner backed by real subprocesses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> CommandOutput {
        tracing::debug!(
            "running `{}` in {}",
            display_command(program, args),
            cwd.display()
        );

        match Command::new(program).args(args).current_dir(cwd).output() {
            Ok(output) => CommandOutput {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(e) => CommandOutput::err(format!("failed to launch `{}`: {}", program, e)),
        }
    }
}

/// Locate an executable in PATH.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Render a command line for log and error messages.
pub fn display_command(program: &str, args: &[&str]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().map(|s| s.to_string()));
    parts.join(" ")
}
