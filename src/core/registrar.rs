//! Registration of generated output directories as source roots.
//!
//! Runs only after a zero-exit execution. Only the kotlin, java and
//! resources outputs are candidates; the class output holds compiled
//! bytecode, not sources, and is never registered.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::{generated_output_dir, OutputKind, ProjectModel, Scope};

/// Append each generated-source directory the tool actually produced to
/// the project's source-root list for `scope`. Returns the appended paths.
///
/// A directory the tool did not create is skipped silently; this is a
/// no-op, never an error.
pub fn register_generated_roots(project: &mut ProjectModel, scope: Scope) -> Vec<PathBuf> {
    let mut registered = Vec::new();

    for kind in OutputKind::SOURCE_KINDS {
        let dir = generated_output_dir(&project.build_dir, scope, kind);
        if !dir.exists() {
            debug!(dir = %dir.display(), "no generated output, skipping");
            continue;
        }

        info!(dir = %dir.display(), %scope, "registering generated source root");
        match scope {
            Scope::Main => project.add_compile_source_root(dir.clone()),
            Scope::Test => project.add_test_compile_source_root(dir.clone()),
        }
        registered.push(dir);
    }

    registered
}
