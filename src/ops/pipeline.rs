//! The orchestrator: fixed-order pipeline with fail-fast semantics.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::context::BuildContext;
use crate::ops::step::StepStatus;
use crate::ops::{compile, fetch, preflight, verify};
use crate::util::process::CommandRunner;
use crate::util::shell::{Shell, Status};

/// Errors that end a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The precondition signal that the tool is being run from the plugin
    /// directory is absent.
    #[error("extension source not found at {}; run this from the plugin directory (e.g. addons/{plugin})", path.display())]
    MissingSource { path: PathBuf, plugin: String },

    /// A step reported a fatal failure.
    #[error("{step} failed")]
    StepFailed { step: &'static str },
}

/// The five pipeline steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Preflight,
    Fetch,
    CompileDependency,
    CompileExtension,
    Verify,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Preflight,
        Step::Fetch,
        Step::CompileDependency,
        Step::CompileExtension,
        Step::Verify,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Step::Preflight => "prerequisite check",
            Step::Fetch => "godot-cpp fetch",
            Step::CompileDependency => "godot-cpp build",
            Step::CompileExtension => "extension build",
            Step::Verify => "artifact verification",
        }
    }

    /// Remediation hint shown when this step fails.
    pub fn hint(&self) -> &'static str {
        match self {
            Step::Preflight => "install the missing tools listed above",
            Step::Fetch => "check network connectivity and git configuration",
            Step::CompileDependency | Step::CompileExtension => {
                "inspect the compiler output above; the sources may need fixing"
            }
            Step::Verify => "an earlier step produced no output; re-run with --verbose",
        }
    }
}

/// Run the full pipeline.
///
/// Steps run strictly in order; the first fatal result halts everything and
/// the step's remediation hint is printed. Tolerated results are logged and
/// the pipeline continues. No step is retried.
pub fn run(
    ctx: &BuildContext,
    runner: &dyn CommandRunner,
    shell: &Shell,
) -> Result<(), PipelineError> {
    let source = ctx.extension_source();
    if !source.exists() {
        return Err(PipelineError::MissingSource {
            path: source,
            plugin: ctx.plugin().to_string(),
        });
    }

    shell.note(format!(
        "building {} for {}/{}",
        ctx.plugin(),
        ctx.platform(),
        ctx.arch()
    ));

    let total = Step::ALL.len();
    for (i, step) in Step::ALL.iter().enumerate() {
        shell.note(format!("[{}/{}] {}", i + 1, total, step.name()));

        match run_step(*step, ctx, runner, shell) {
            StepStatus::Success => {}
            StepStatus::Tolerated(msg) => shell.warn(msg),
            StepStatus::Fatal(msg) => {
                shell.error(format!("{}: {}", step.name(), msg));
                shell.note(format!("hint: {}", step.hint()));
                return Err(PipelineError::StepFailed { step: step.name() });
            }
        }
    }

    print_summary(ctx, shell);
    Ok(())
}

fn run_step(
    step: Step,
    ctx: &BuildContext,
    runner: &dyn CommandRunner,
    shell: &Shell,
) -> StepStatus {
    match step {
        Step::Preflight => {
            shell.status(Status::Checking, "build tools");
            let report = preflight::preflight(ctx, runner);
            shell.raw(preflight::format_report(&report, shell.is_verbose()));
            if report.all_required_passed() {
                StepStatus::Success
            } else {
                StepStatus::Fatal("required tools are missing".to_string())
            }
        }
        Step::Fetch => fetch::sync(ctx, runner, shell),
        Step::CompileDependency => compile::compile_dependency(ctx, runner, shell),
        Step::CompileExtension => compile::compile_extension(ctx, runner, shell),
        Step::Verify => {
            shell.status(Status::Verifying, "build artifacts");
            let report = verify::verify(ctx);
            shell.raw(verify::format_verify_report(&report));
            if report.is_success() {
                StepStatus::Success
            } else {
                StepStatus::Fatal(format!(
                    "{} expected artifact(s) missing",
                    report.missing.len()
                ))
            }
        }
    }
}

fn print_summary(ctx: &BuildContext, shell: &Shell) {
    shell.status(
        Status::Finished,
        format!("{} built successfully", ctx.plugin()),
    );
    shell.note(format!("architecture: {}", ctx.arch()));
    shell.note(format!("platform: {}", ctx.platform()));
    shell.note(format!("output directory: {}", ctx.bin_dir().display()));
    shell.note("expected speedup over the script implementation:");
    shell.note("  small inputs (<100 rows): 2-5x");
    shell.note("  medium inputs (100-500 rows): 5-20x");
    shell.note("  large inputs (>500 rows): 20-50x");
}
