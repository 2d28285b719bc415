//! Build-step scope and the generated-output directory layout.
//!
//! A step runs either against the main sources or the test sources. The
//! scope is fixed when the step starts and selects the project dependency
//! set, the source-root list, and the generated-output namespace for
//! everything downstream.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Which compilation unit a step operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Main sources, runtime-scoped project dependencies.
    Main,
    /// Test sources, test-scoped project dependencies.
    Test,
}

impl Scope {
    /// Directory under the build dir that holds generated sources for
    /// this scope.
    pub fn generated_dir_name(self) -> &'static str {
        match self {
            Scope::Main => "generated-sources",
            Scope::Test => "generated-test-sources",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Main => write!(f, "main"),
            Scope::Test => write!(f, "test"),
        }
    }
}

/// The four output categories KSP writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Class,
    Kotlin,
    Java,
    Resources,
}

impl OutputKind {
    /// All kinds, in the order their output-dir flags appear on the
    /// command line.
    pub const ALL: [OutputKind; 4] = [
        OutputKind::Class,
        OutputKind::Kotlin,
        OutputKind::Java,
        OutputKind::Resources,
    ];

    /// Kinds whose output may be registered as a source root. `Class`
    /// holds compiled bytecode, not sources, and is deliberately absent.
    pub const SOURCE_KINDS: [OutputKind; 3] =
        [OutputKind::Kotlin, OutputKind::Java, OutputKind::Resources];

    /// Suffix of the output directory name (`ksp-<suffix>`).
    pub fn dir_suffix(self) -> &'static str {
        match self {
            OutputKind::Class => "class",
            OutputKind::Kotlin => "kotlin",
            OutputKind::Java => "java",
            OutputKind::Resources => "resources",
        }
    }

    /// Stem of the command-line flag (`-<stem>-output-dir=`). Differs from
    /// the directory suffix for `Resources`: the flag is singular.
    pub fn flag_stem(self) -> &'static str {
        match self {
            OutputKind::Resources => "resource",
            other => other.dir_suffix(),
        }
    }
}

/// Where KSP writes output of `kind` for `scope`:
/// `<build_dir>/generated-(test-)sources/ksp-<kind>`.
pub fn generated_output_dir(build_dir: &Path, scope: Scope, kind: OutputKind) -> PathBuf {
    build_dir
        .join(scope.generated_dir_name())
        .join(format!("ksp-{}", kind.dir_suffix()))
}

/// Platform path-list separator, used when joining classpath entries,
/// source roots and processor options.
pub fn path_separator() -> &'static str {
    if cfg!(windows) {
        ";"
    } else {
        ":"
    }
}
