//! The build step driver.
//!
//! One call runs one step: skip check, invocation assembly, external tool
//! execution, then source-root registration. Any failure is terminal for
//! the step; there is no retry and no partial registration.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{info, instrument};

use crate::config::KspSettings;
use crate::core::classpath::ClasspathError;
use crate::core::{command, executor, registrar};
use crate::domain::{Artifact, ProjectModel, Scope};

#[derive(Debug, Error)]
pub enum StepError {
    /// An artifact could not be turned into a classpath entry.
    #[error(transparent)]
    Classpath(#[from] ClasspathError),

    /// Launching or waiting on the external tool failed.
    #[error("failed to run the KSP tool: {0}")]
    Execution(#[source] anyhow::Error),

    /// The tool ran and exited non-zero. Its own streamed output is the
    /// diagnostic payload; nothing is interpreted here.
    #[error("KSP exited with status {0}")]
    ToolFailure(i32),
}

/// What the step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The skip flag was set; nothing ran.
    Skipped,
    /// The tool ran to completion and these roots were registered.
    Completed { registered_roots: Vec<PathBuf> },
}

/// Run one KSP build step for `scope`.
///
/// The project model is mutated only on success, and only by appending
/// generated source roots.
#[instrument(skip_all, fields(project = %project.name, %scope))]
pub async fn run(
    settings: &KspSettings,
    project: &mut ProjectModel,
    tool_artifacts: &[Artifact],
    scope: Scope,
) -> Result<StepOutcome, StepError> {
    if settings.skip {
        info!("KSP execution is skipped");
        return Ok(StepOutcome::Skipped);
    }

    let invocation = command::build_invocation(settings, project, tool_artifacts, scope)?;

    let result = executor::execute(&invocation, &project.base_dir)
        .await
        .map_err(StepError::Execution)?;

    if !result.success() {
        return Err(StepError::ToolFailure(result.exit_code));
    }

    let registered_roots = registrar::register_generated_roots(project, scope);
    info!(
        count = registered_roots.len(),
        "KSP step finished, source roots registered"
    );

    Ok(StepOutcome::Completed { registered_roots })
}
