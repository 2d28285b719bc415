//! Step orchestration logic.
//!
//! This module contains:
//! - classpath: artifact-list to classpath-string mapping
//! - command: deterministic KSP command-line assembly
//! - executor: synchronous external process execution
//! - registrar: generated source-root registration
//! - step: the driver wiring the phases together

pub mod classpath;
pub mod command;
pub mod executor;
pub mod registrar;
pub mod step;

// Re-export commonly used types
pub use classpath::ClasspathError;
pub use command::build_invocation;
pub use step::{StepError, StepOutcome};
