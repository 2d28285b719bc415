//! The host build's view of the target project.
//!
//! The host build resolves dependencies and decides when the step runs;
//! this model is the surface it hands over: display name, directories,
//! source-root lists and already-resolved artifact files. The only
//! mutation the step performs is appending generated source roots.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::scope::Scope;

/// A resolved dependency file with the scope label the host declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Path to the resolved file (jar or classes directory).
    pub path: PathBuf,

    /// Dependency scope, e.g. "runtime", "compile", "test".
    #[serde(default = "default_artifact_scope")]
    pub scope: String,
}

fn default_artifact_scope() -> String {
    "runtime".to_string()
}

impl Artifact {
    /// Create an artifact with the given scope label.
    pub fn new(path: impl Into<PathBuf>, scope: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            scope: scope.into(),
        }
    }
}

/// The target project, as described by the host build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectModel {
    /// Display name, passed to the tool as the module name.
    pub name: String,

    /// Project base directory; also the working directory of the tool.
    pub base_dir: PathBuf,

    /// Build output directory; all generated output lands under it.
    pub build_dir: PathBuf,

    /// Source roots of the main compilation unit.
    #[serde(default)]
    pub compile_source_roots: Vec<PathBuf>,

    /// Source roots of the test compilation unit.
    #[serde(default)]
    pub test_compile_source_roots: Vec<PathBuf>,

    /// The project's resolved runtime dependencies.
    #[serde(default)]
    pub runtime_artifacts: Vec<Artifact>,

    /// The project's resolved test dependencies.
    #[serde(default)]
    pub test_artifacts: Vec<Artifact>,
}

impl ProjectModel {
    /// Source roots of the compilation unit selected by `scope`.
    pub fn source_roots(&self, scope: Scope) -> &[PathBuf] {
        match scope {
            Scope::Main => &self.compile_source_roots,
            Scope::Test => &self.test_compile_source_roots,
        }
    }

    /// Project dependency artifacts for `scope`.
    pub fn artifacts(&self, scope: Scope) -> &[Artifact] {
        match scope {
            Scope::Main => &self.runtime_artifacts,
            Scope::Test => &self.test_artifacts,
        }
    }

    /// Append a directory to the main source-root list.
    pub fn add_compile_source_root(&mut self, root: PathBuf) {
        self.compile_source_roots.push(root);
    }

    /// Append a directory to the test source-root list.
    pub fn add_test_compile_source_root(&mut self, root: PathBuf) {
        self.test_compile_source_roots.push(root);
    }
}
