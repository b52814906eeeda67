//! Core types: host environment, build context, artifact naming.

pub mod artifact;
pub mod context;
pub mod env;

pub use artifact::{expected_artifacts, Variant};
pub use context::BuildContext;
pub use env::{repository_url, Arch, Platform};
