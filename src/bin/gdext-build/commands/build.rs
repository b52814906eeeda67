//! `gdext-build build` command

use anyhow::Result;

use crate::cli::BuildArgs;
use gdext_build::ops;
use gdext_build::util::shell::Shell;
use gdext_build::{BuildContext, SystemRunner};

pub fn execute(args: BuildArgs, shell: &Shell) -> Result<()> {
    let project_dir = super::resolve_project_dir(args.project_dir)?;

    let ctx = BuildContext::new(project_dir, args.plugin).with_jobs(args.jobs);
    let runner = SystemRunner;

    ops::pipeline::run(&ctx, &runner, shell)?;
    Ok(())
}
