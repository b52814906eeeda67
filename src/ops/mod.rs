//! High-level operations.
//!
//! This module contains the pipeline steps and the orchestrator that runs
//! them in order.

pub mod compile;
pub mod fetch;
pub mod pipeline;
pub mod preflight;
pub mod step;
pub mod verify;

pub use pipeline::{run, PipelineError, Step};
pub use preflight::{format_report, preflight, CheckResult, PreflightReport};
pub use step::StepStatus;
pub use verify::{format_verify_report, verify, VerifyReport};
