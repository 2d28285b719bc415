//! ksprun - KSP build-step runner
//!
//! Runs the Kotlin Symbol Processing command-line tool as a step of a
//! host build: derives the full JVM command line from a project manifest,
//! executes the tool with live stream pass-through, and registers the
//! generated-source directories back for the host's compilation.
//!
//! # Architecture
//!
//! One synchronous pipeline per step, parameterized by scope (main/test):
//! - The host build writes a manifest describing the project and settings
//! - The command builder assembles a deterministic, order-sensitive
//!   argument list from the manifest and the resolved classpaths
//! - The executor runs the tool, blocking until it exits
//! - On a zero exit, the generated kotlin/java/resources directories that
//!   exist on disk are appended to the matching source-root list
//!
//! # Modules
//!
//! - `config`: manifest loading and defaults
//! - `domain`: scope, project model, invocation types
//! - `core`: classpath resolution, command assembly, execution, registration
//! - `cli`: the `generate` / `generate-test` commands
//!
//! # Usage
//!
//! ```bash
//! # Before compiling main sources
//! ksprun --manifest target/ksprun.yaml generate
//!
//! # Before compiling test sources, skippable via a build property
//! KSPRUN_SKIP_TEST=true ksprun --manifest target/ksprun.yaml generate-test
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;

// Re-export main types at crate root for convenience
pub use crate::config::{KspSettings, LogLevel, Manifest, ResolvedStep};
pub use crate::core::step::{StepError, StepOutcome};
pub use crate::domain::{Artifact, Invocation, OutputKind, ProjectModel, Scope};
