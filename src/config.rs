//! Step manifest loading and resolution.
//!
//! The host build describes the target project and the KSP settings in one
//! YAML manifest, written before the step runs. This module parses the raw
//! file and resolves it into absolute paths:
//! - relative paths in the manifest are resolved against the manifest
//!   file's parent directory
//! - a blank or absent `jdk_home` means "use the ambient JDK" (`JAVA_HOME`)
//!
//! All defaults live here, expressed as serde `default` functions so the
//! manifest only needs to spell out what deviates.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{Artifact, ProjectModel};

/// Raw manifest schema (matches the YAML structure).
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub project: ProjectModel,
    #[serde(default)]
    pub tool: ToolSection,
    #[serde(default)]
    pub ksp: KspSettings,
}

/// Dependencies needed to launch the KSP tool itself, as resolved by the
/// host build for the step plugin.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolSection {
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

/// KSP invocation settings with their documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KspSettings {
    /// Overrides the JDK used to launch and compile against. Blank or
    /// absent means the ambient JDK (`JAVA_HOME`).
    #[serde(default)]
    pub jdk_home: Option<PathBuf>,

    /// Kotlin language version (default: 2.2).
    #[serde(default = "default_language_version")]
    pub language_version: String,

    /// Kotlin api version (default: 2.2).
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Target JVM version (default: 11).
    #[serde(default = "default_jvm_target")]
    pub jvm_target: String,

    /// Pass `-verbose` to the java execution (default: false).
    #[serde(default)]
    pub verbose: bool,

    /// Treat all KSP warnings as errors (default: false).
    #[serde(default)]
    pub all_warnings_as_errors: bool,

    /// KSP log level (default: warn).
    #[serde(default)]
    pub log_level: LogLevel,

    /// `key=value` options forwarded to the processors (default: none).
    #[serde(default)]
    pub processor_options: Vec<String>,

    /// Skip the step entirely (default: false).
    #[serde(default)]
    pub skip: bool,
}

fn default_language_version() -> String {
    "2.2".to_string()
}
fn default_api_version() -> String {
    "2.2".to_string()
}
fn default_jvm_target() -> String {
    "11".to_string()
}

impl Default for KspSettings {
    fn default() -> Self {
        Self {
            jdk_home: None,
            language_version: default_language_version(),
            api_version: default_api_version(),
            jvm_target: default_jvm_target(),
            verbose: false,
            all_warnings_as_errors: false,
            log_level: LogLevel::default(),
            processor_options: Vec::new(),
            skip: false,
        }
    }
}

/// KSP log level, passed through as `-Dksp.logging=<level>` when it
/// deviates from the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    #[serde(alias = "warning")]
    Warn,
    Info,
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        write!(f, "{s}")
    }
}

/// A manifest with every path made absolute, ready to drive a step.
#[derive(Debug, Clone)]
pub struct ResolvedStep {
    pub project: ProjectModel,
    pub tool_artifacts: Vec<Artifact>,
    pub settings: KspSettings,
}

impl Manifest {
    /// Load a manifest from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;

        Self::from_yaml(&content)
    }

    /// Parse a manifest from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse manifest YAML")
    }

    /// Resolve every path in the manifest against `base` (the manifest
    /// file's parent directory; must itself be absolute).
    pub fn resolve(self, base: &Path) -> ResolvedStep {
        let mut project = self.project;
        project.base_dir = resolve_path(base, &project.base_dir);
        project.build_dir = resolve_path(base, &project.build_dir);
        for root in project
            .compile_source_roots
            .iter_mut()
            .chain(project.test_compile_source_roots.iter_mut())
        {
            *root = resolve_path(base, root);
        }
        for artifact in project
            .runtime_artifacts
            .iter_mut()
            .chain(project.test_artifacts.iter_mut())
        {
            artifact.path = resolve_path(base, &artifact.path);
        }

        let mut tool_artifacts = self.tool.artifacts;
        for artifact in &mut tool_artifacts {
            artifact.path = resolve_path(base, &artifact.path);
        }

        let mut settings = self.ksp;
        settings.jdk_home = settings
            .jdk_home
            .filter(|home| !home.as_os_str().is_empty())
            .map(|home| resolve_path(base, &home));

        ResolvedStep {
            project,
            tool_artifacts,
            settings,
        }
    }
}

/// Resolve a path that may be relative to the manifest's parent directory.
fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_manifest_gets_all_defaults() {
        let manifest = Manifest::from_yaml(
            r#"
project:
  name: demo
  base_dir: /proj
  build_dir: /proj/target
"#,
        )
        .unwrap();

        let ksp = &manifest.ksp;
        assert_eq!(ksp.language_version, "2.2");
        assert_eq!(ksp.api_version, "2.2");
        assert_eq!(ksp.jvm_target, "11");
        assert_eq!(ksp.log_level, LogLevel::Warn);
        assert!(!ksp.verbose);
        assert!(!ksp.all_warnings_as_errors);
        assert!(ksp.processor_options.is_empty());
        assert!(!ksp.skip);
        assert!(ksp.jdk_home.is_none());
        assert!(manifest.tool.artifacts.is_empty());
    }

    #[test]
    fn warning_is_an_alias_for_warn() {
        let level: LogLevel = serde_yaml::from_str("warning").unwrap();
        assert_eq!(level, LogLevel::Warn);
        assert_eq!(level.to_string(), "warn");
    }

    #[test]
    fn relative_paths_resolve_against_base() {
        let manifest = Manifest::from_yaml(
            r#"
project:
  name: demo
  base_dir: .
  build_dir: target
  compile_source_roots: [src/main/kotlin]
  runtime_artifacts:
    - path: libs/dep.jar
tool:
  artifacts:
    - path: libs/ksp.jar
"#,
        )
        .unwrap();

        let resolved = manifest.resolve(Path::new("/workspace/demo"));
        assert_eq!(resolved.project.base_dir, PathBuf::from("/workspace/demo/."));
        assert_eq!(
            resolved.project.build_dir,
            PathBuf::from("/workspace/demo/target")
        );
        assert_eq!(
            resolved.project.compile_source_roots[0],
            PathBuf::from("/workspace/demo/src/main/kotlin")
        );
        assert_eq!(
            resolved.project.runtime_artifacts[0].path,
            PathBuf::from("/workspace/demo/libs/dep.jar")
        );
        assert_eq!(
            resolved.tool_artifacts[0].path,
            PathBuf::from("/workspace/demo/libs/ksp.jar")
        );
    }

    #[test]
    fn blank_jdk_home_degrades_to_ambient() {
        let manifest = Manifest::from_yaml(
            r#"
project:
  name: demo
  base_dir: /proj
  build_dir: /proj/target
ksp:
  jdk_home: ""
"#,
        )
        .unwrap();

        let resolved = manifest.resolve(Path::new("/proj"));
        assert!(resolved.settings.jdk_home.is_none());
    }
}
