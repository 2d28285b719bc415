//! Classpath assembly from resolved artifact lists.
//!
//! The host build has already resolved everything to files on disk; this
//! module only filters, maps and joins. Two classpaths exist per step: the
//! tool's own runtime dependencies (`-classpath`) and the target project's
//! dependencies (`-libraries`).

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{path_separator, Artifact};

/// Scope label a tool dependency must carry to end up on the launch
/// classpath.
const RUNTIME_SCOPE: &str = "runtime";

#[derive(Debug, Error)]
pub enum ClasspathError {
    /// The host resolved an artifact but its file is not on disk. The tool
    /// cannot run without materialized dependency files.
    #[error("artifact file does not exist: {0}")]
    MissingArtifact(PathBuf),
}

/// Join the tool's runtime-scoped dependencies into a `-classpath` value.
///
/// Host resolution order is preserved; an empty list yields an empty
/// string, which the tool tolerates.
pub fn tool_classpath(tool_artifacts: &[Artifact]) -> Result<String, ClasspathError> {
    join(tool_artifacts.iter().filter(|a| a.scope == RUNTIME_SCOPE))
}

/// Join the project's dependency files into a `-libraries` value.
pub fn project_libraries(artifacts: &[Artifact]) -> Result<String, ClasspathError> {
    join(artifacts.iter())
}

fn join<'a>(artifacts: impl Iterator<Item = &'a Artifact>) -> Result<String, ClasspathError> {
    let mut entries = Vec::new();
    for artifact in artifacts {
        if !artifact.path.exists() {
            return Err(ClasspathError::MissingArtifact(artifact.path.clone()));
        }
        entries.push(artifact.path.display().to_string());
    }
    Ok(entries.join(path_separator()))
}
