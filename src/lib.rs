//! gdext-build - Cross-platform build orchestrator for GDExtension modules
//!
//! This crate provides the core library functionality for gdext-build:
//! host environment detection, dependency fetching, compilation, and
//! artifact verification, driven as a linear fail-fast pipeline.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and fakes for gdext-build unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a scripted command runner so pipeline
/// logic can be exercised without spawning real processes.
#[cfg(test)]
pub mod test_support;

pub use crate::core::context::BuildContext;
pub use crate::core::env::{Arch, Platform};
pub use crate::util::process::{CommandOutput, CommandRunner, SystemRunner};
