//! Compilation steps - godot-cpp first, then the extension module.
//!
//! Each step runs scons twice, once per build configuration, and fails fast:
//! the first non-zero exit aborts the step and the remaining invocations are
//! skipped. The dependency build gets an explicit `-jN`; the extension build
//! does not and lets scons pick. The asymmetry is inherited from the tool
//! this replaces and kept for compatibility (see DESIGN.md).

use crate::core::artifact::Variant;
use crate::core::context::BuildContext;
use crate::ops::step::{run_logged, StepStatus};
use crate::util::fs::ensure_dir;
use crate::util::process::CommandRunner;
use crate::util::shell::{Shell, Status};

/// Compile the godot-cpp library, debug then release.
pub fn compile_dependency(
    ctx: &BuildContext,
    runner: &dyn CommandRunner,
    shell: &Shell,
) -> StepStatus {
    let jobs = ctx.jobs();
    tracing::debug!("building godot-cpp with {} jobs", jobs);
    let jobs_flag = format!("-j{}", jobs);

    for variant in Variant::ALL {
        shell.status(
            Status::Compiling,
            format!("godot-cpp {}", variant.target_name()),
        );

        let target = format!("target={}", variant.target_name());
        let platform = format!("platform={}", ctx.platform());
        let arch = format!("arch={}", ctx.arch());
        let args = [
            target.as_str(),
            platform.as_str(),
            arch.as_str(),
            jobs_flag.as_str(),
        ];

        let out = run_logged(runner, shell, "scons", &args, &ctx.dep_dir());
        if !out.success {
            return StepStatus::Fatal(format!(
                "godot-cpp {} build failed",
                variant.target_name()
            ));
        }
    }

    StepStatus::Success
}

/// Compile the extension module against the built dependency.
pub fn compile_extension(
    ctx: &BuildContext,
    runner: &dyn CommandRunner,
    shell: &Shell,
) -> StepStatus {
    if let Err(e) = ensure_dir(&ctx.bin_dir()) {
        return StepStatus::Fatal(format!("{:#}", e));
    }

    for variant in Variant::ALL {
        shell.status(
            Status::Compiling,
            format!("{} {}", ctx.plugin(), variant.target_name()),
        );

        let target = format!("target={}", variant.target_name());
        let platform = format!("platform={}", ctx.platform());
        let arch = format!("arch={}", ctx.arch());
        let args = [target.as_str(), platform.as_str(), arch.as_str()];

        let out = run_logged(runner, shell, "scons", &args, ctx.project_dir());
        if !out.success {
            return StepStatus::Fatal(format!(
                "{} {} build failed",
                ctx.plugin(),
                variant.target_name()
            ));
        }
    }

    StepStatus::Success
}
