//! Shared utilities

pub mod fs;
pub mod process;
pub mod shell;

pub use process::{CommandOutput, CommandRunner, SystemRunner};
pub use shell::{ColorChoice, Shell, Status, Verbosity};
