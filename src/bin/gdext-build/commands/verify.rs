//! `gdext-build verify` command

use anyhow::{bail, Result};

use crate::cli::VerifyArgs;
use gdext_build::ops::{format_verify_report, verify};
use gdext_build::util::shell::Shell;
use gdext_build::BuildContext;

pub fn execute(args: VerifyArgs, _shell: &Shell) -> Result<()> {
    let project_dir = super::resolve_project_dir(args.project_dir)?;

    let ctx = BuildContext::new(project_dir, args.plugin);
    let report = verify(&ctx);
    print!("{}", format_verify_report(&report));

    if !report.is_success() {
        bail!("{} expected artifact(s) missing", report.missing.len());
    }

    println!("all expected artifacts present");
    Ok(())
}
