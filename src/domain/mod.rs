//! Data structures shared across the step pipeline.
//!
//! This module contains:
//! - Scope: main vs. test compilation unit selection
//! - ProjectModel / Artifact: the host build's view of the target project
//! - Invocation / ExecutionResult: the assembled tool command and its outcome

pub mod invocation;
pub mod project;
pub mod scope;

// Re-export commonly used types
pub use invocation::{ExecutionResult, Invocation};
pub use project::{Artifact, ProjectModel};
pub use scope::{generated_output_dir, path_separator, OutputKind, Scope};
