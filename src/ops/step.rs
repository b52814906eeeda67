//! Per-step result type.

use std::path::Path;

use crate::util::process::{display_command, CommandOutput, CommandRunner};
use crate::util::shell::{Shell, Status};

/// Outcome of one pipeline step.
///
/// The halt-or-continue policy lives in a single exhaustive match in the
/// orchestrator, not in scattered boolean checks: a clone failure is
/// `Fatal`, a pull failure on an existing checkout is `Tolerated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Success,
    /// Something went wrong but the pipeline proceeds with what is on disk.
    Tolerated(String),
    /// The pipeline halts here.
    Fatal(String),
}

impl StepStatus {
    pub fn is_fatal(&self) -> bool {
        matches!(self, StepStatus::Fatal(_))
    }
}

/// Run a build command, echoing the command line and its captured stdout.
///
/// Probe commands (version queries) bypass this and stay silent; this is
/// for the invocations whose output the user wants to see.
pub fn run_logged(
    runner: &dyn CommandRunner,
    shell: &Shell,
    program: &str,
    args: &[&str],
    cwd: &Path,
) -> CommandOutput {
    shell.status(Status::Running, display_command(program, args));

    let out = runner.run(program, args, cwd);

    let stdout = out.stdout.trim();
    if !stdout.is_empty() {
        shell.raw(stdout);
    }
    if !out.success {
        let stderr = out.stderr.trim();
        if !stderr.is_empty() {
            shell.raw(stderr);
        }
    }

    out
}
