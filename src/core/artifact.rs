//! Expected artifact naming.
//!
//! GDExtension shared libraries follow the fixed convention
//! `lib<plugin>.<platform>.<target>.<arch>.<ext>`, where the target is one
//! of the two scons build configurations.

use crate::core::context::BuildContext;
use crate::core::env::Platform;

/// The two build configurations produced for every module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Debug,
    Release,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Debug, Variant::Release];

    /// The scons `target=` value for this variant.
    pub fn target_name(&self) -> &'static str {
        match self {
            Variant::Debug => "template_debug",
            Variant::Release => "template_release",
        }
    }
}

/// Compute the expected filename for one variant.
pub fn artifact_name(plugin: &str, platform: Platform, variant: Variant, arch: &str) -> String {
    format!(
        "lib{}.{}.{}.{}.{}",
        plugin,
        platform,
        variant.target_name(),
        arch,
        platform.lib_extension()
    )
}

/// All filenames a successful build must leave in the output directory.
pub fn expected_artifacts(ctx: &BuildContext) -> Vec<String> {
    Variant::ALL
        .iter()
        .map(|variant| {
            artifact_name(
                ctx.plugin(),
                ctx.platform(),
                *variant,
                ctx.arch().as_str(),
            )
        })
        .collect()
}
