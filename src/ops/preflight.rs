//! Environment and toolchain preflight checks.
//!
//! Verifies that the tools the pipeline will shell out to actually respond
//! before any expensive work starts: scons must answer a version query, and
//! at least one C++ compiler from the platform's candidate list must too.
//!
//! Each probe is independent and tolerates the tool being entirely absent;
//! "not installed" and "installed but errored" differ only in the message,
//! never in the returned result.

use std::path::PathBuf;

use crate::core::context::BuildContext;
use crate::util::process::{find_executable, CommandRunner};

/// Remediation shown when scons is missing.
pub const SCONS_HINT: &str = "install SCons: pip install scons";

/// Result of a single preflight check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check
    pub name: String,

    /// Whether the check passed
    pub passed: bool,

    /// Human-readable status message
    pub message: String,

    /// Path to the tool (if found)
    pub path: Option<PathBuf>,

    /// Whether this check is required or optional
    pub required: bool,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: true,
            message: message.into(),
            path: None,
            required: true,
        }
    }

    /// Create a failing check result.
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: false,
            message: message.into(),
            path: None,
            required: true,
        }
    }

    /// Mark this check as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the tool path.
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}

/// Summary of all preflight checks.
#[derive(Debug, Clone, Default)]
pub struct PreflightReport {
    /// Individual check results
    pub checks: Vec<CheckResult>,
}

impl PreflightReport {
    pub fn new() -> Self {
        PreflightReport { checks: Vec::new() }
    }

    pub fn add(&mut self, check: CheckResult) {
        self.checks.push(check);
    }

    /// Check if all required checks passed.
    pub fn all_required_passed(&self) -> bool {
        self.checks.iter().filter(|c| c.required).all(|c| c.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }

    /// Remediation hints from failed required checks.
    pub fn hints(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| c.required && !c.passed)
            .map(|c| c.message.as_str())
            .collect()
    }
}

/// Run all preflight checks.
pub fn preflight(ctx: &BuildContext, runner: &dyn CommandRunner) -> PreflightReport {
    let mut report = PreflightReport::new();
    report.add(check_scons(ctx, runner));
    report.add(check_compiler(ctx, runner));
    report.add(check_git(ctx, runner));
    report
}

/// Check that the native build tool answers a version query.
fn check_scons(ctx: &BuildContext, runner: &dyn CommandRunner) -> CheckResult {
    let out = runner.run("scons", &["--version"], ctx.project_dir());
    if out.success {
        let mut result = CheckResult::pass("SCons", "SCons is available");
        if let Some(path) = find_executable("scons") {
            result = result.with_path(path);
        }
        return result;
    }

    if out.stderr.contains("failed to launch") {
        tracing::debug!("scons not installed: {}", out.stderr.trim());
    } else {
        tracing::debug!("scons errored on version query: {}", out.stderr.trim());
    }

    CheckResult::fail("SCons", format!("SCons not found; {}", SCONS_HINT))
}

/// Probe the platform's compiler candidates in order; the first one that
/// responds satisfies the requirement.
fn check_compiler(ctx: &BuildContext, runner: &dyn CommandRunner) -> CheckResult {
    let candidates = ctx.platform().compiler_candidates();

    for compiler in candidates {
        let out = runner.run(compiler, &["--version"], ctx.project_dir());
        if out.success {
            let mut result =
                CheckResult::pass("C++ Compiler", format!("Found {}", compiler));
            if let Some(path) = find_executable(compiler) {
                result = result.with_path(path);
            }
            return result;
        }
        tracing::debug!("compiler {} did not respond", compiler);
    }

    CheckResult::fail(
        "C++ Compiler",
        format!(
            "no C++ compiler found (tried {}); {}",
            candidates.join(", "),
            ctx.platform().compiler_hint()
        ),
    )
}

/// Git is needed for the first fetch; an existing checkout can build
/// without it, so this check is advisory only.
fn check_git(ctx: &BuildContext, runner: &dyn CommandRunner) -> CheckResult {
    let out = runner.run("git", &["--version"], ctx.project_dir());
    if out.success {
        let mut result = CheckResult::pass("Git", "Git is available");
        if let Some(path) = find_executable("git") {
            result = result.with_path(path);
        }
        return result.optional();
    }

    CheckResult::fail("Git", "Git not found (needed to fetch godot-cpp)").optional()
}

/// Format the preflight report for display.
pub fn format_report(report: &PreflightReport, verbose: bool) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    writeln!(output, "Preflight checks:").unwrap();
    for check in &report.checks {
        let status = if check.passed { "[OK]" } else { "[!!]" };
        let required = if check.required { "" } else { " (optional)" };

        writeln!(output, "  {} {}{}", status, check.name, required).unwrap();

        if verbose || !check.passed {
            writeln!(output, "      {}", check.message).unwrap();
        }
        if verbose {
            if let Some(path) = &check.path {
                writeln!(output, "      Path: {}", path.display()).unwrap();
            }
        }
    }

    writeln!(
        output,
        "\nSummary: {} passed, {} failed",
        report.passed_count(),
        report.failed_count()
    )
    .unwrap();

    output
}
