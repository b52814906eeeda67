//! Test utilities and fakes for gdext-build unit tests.
//!
//! The pipeline's only side-effect seam is [`CommandRunner`], so a scripted
//! fake is enough to exercise fetch, compile, preflight, and the
//! orchestrator without spawning a single real process.
//!
//! # Example
//!
//! ```rust,ignore
//! use gdext_build::test_support::FakeRunner;
//! use gdext_build::util::process::CommandOutput;
//!
//! let runner = FakeRunner::new()
//!     .on("scons --version", CommandOutput::ok("SCons 4.7.0"))
//!     .on("git pull", CommandOutput::err("network is down"));
//! ```

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::util::process::{display_command, CommandOutput, CommandRunner};
use crate::util::shell::{ColorChoice, Shell, Verbosity};

/// One recorded command invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    /// The invocation as a single display string, e.g. `git pull`.
    pub fn display(&self) -> String {
        let args: Vec<&str> = self.args.iter().map(|s| s.as_str()).collect();
        display_command(&self.program, &args)
    }
}

/// Scripted command runner.
///
/// Rules are matched by prefix against the display form of the invocation;
/// the first matching rule wins. Unmatched commands succeed with empty
/// output, so tests only script the interesting cases.
#[derive(Debug, Default)]
pub struct FakeRunner {
    rules: Vec<(String, CommandOutput)>,
    calls: Mutex<Vec<Invocation>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        FakeRunner::default()
    }

    /// Script a response for commands starting with `prefix`.
    pub fn on(mut self, prefix: impl Into<String>, output: CommandOutput) -> Self {
        self.rules.push((prefix.into(), output));
        self
    }

    /// All invocations recorded so far.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded invocations whose display form starts with `prefix`.
    pub fn count_matching(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.display().starts_with(prefix))
            .count()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> CommandOutput {
        let invocation = Invocation {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        };
        let display = invocation.display();
        self.calls.lock().unwrap().push(invocation);

        for (prefix, output) in &self.rules {
            if display.starts_with(prefix.as_str()) {
                return output.clone();
            }
        }

        CommandOutput::ok("")
    }
}

/// A shell that prints nothing, for tests.
pub fn quiet_shell() -> Shell {
    Shell::new(Verbosity::Quiet, ColorChoice::Never)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_runner_matches_by_prefix() {
        let runner = FakeRunner::new().on("git pull", CommandOutput::err("no network"));

        let out = runner.run("git", &["pull"], Path::new("/work"));
        assert!(!out.success);

        let out = runner.run("git", &["clone", "url"], Path::new("/work"));
        assert!(out.success);
    }

    #[test]
    fn test_fake_runner_records_invocations() {
        let runner = FakeRunner::new();
        runner.run("scons", &["--version"], Path::new("/work"));
        runner.run("git", &["pull"], Path::new("/work/godot-cpp"));

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].display(), "scons --version");
        assert_eq!(calls[1].cwd, PathBuf::from("/work/godot-cpp"));
        assert_eq!(runner.count_matching("git"), 1);
    }
}
