//! `gdext-build doctor` command

use anyhow::Result;

use crate::cli::DoctorArgs;
use gdext_build::ops::{format_report, preflight};
use gdext_build::util::shell::Shell;
use gdext_build::{BuildContext, SystemRunner};

pub fn execute(args: DoctorArgs, shell: &Shell) -> Result<()> {
    let project_dir = super::resolve_project_dir(args.project_dir)?;

    // The plugin name does not influence tool probing.
    let ctx = BuildContext::new(project_dir, "cosine_calculator");
    let runner = SystemRunner;

    let report = preflight(&ctx, &runner);
    print!("{}", format_report(&report, shell.is_verbose()));

    // Exit with error code if required checks failed
    if !report.all_required_passed() {
        std::process::exit(1);
    }

    Ok(())
}
