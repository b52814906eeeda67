//! Artifact verification.
//!
//! After a build, both expected shared libraries must exist in the output
//! directory. Every expected file is checked before returning so the report
//! always names everything that is missing, not just the first gap.

use std::fs;

use crate::core::artifact::expected_artifacts;
use crate::core::context::BuildContext;

/// What the output directory actually contains.
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    /// Present artifacts with their size in bytes.
    pub present: Vec<(String, u64)>,

    /// Expected artifacts that were not found.
    pub missing: Vec<String>,
}

impl VerifyReport {
    /// Success means zero missing files.
    pub fn is_success(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Check the output directory against the expected artifact names.
pub fn verify(ctx: &BuildContext) -> VerifyReport {
    let bin_dir = ctx.bin_dir();
    let mut report = VerifyReport::default();

    for name in expected_artifacts(ctx) {
        let path = bin_dir.join(&name);
        match fs::metadata(&path) {
            Ok(meta) => {
                tracing::debug!("found {} ({} bytes)", name, meta.len());
                report.present.push((name, meta.len()));
            }
            Err(_) => report.missing.push(name),
        }
    }

    report
}

/// Format the verification report for display.
pub fn format_verify_report(report: &VerifyReport) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    for (name, bytes) in &report.present {
        writeln!(output, "  [OK] {} ({:.2} MB)", name, megabytes(*bytes)).unwrap();
    }
    for name in &report.missing {
        writeln!(output, "  [!!] {} - missing", name).unwrap();
    }

    if !report.missing.is_empty() {
        writeln!(output, "\n{} expected file(s) missing", report.missing.len()).unwrap();
    }

    output
}

fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}
