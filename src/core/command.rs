//! Deterministic KSP command-line assembly.
//!
//! The tool's argument parser is order-sensitive for some flags, so the
//! argument sequence below reproduces the tool's CLI contract exactly,
//! including the `=` vs space separator per flag. All path-valued
//! arguments are absolute so the command is independent of the child's
//! working directory.

use std::path::{Path, PathBuf};

use crate::config::{KspSettings, LogLevel};
use crate::core::classpath::{self, ClasspathError};
use crate::domain::{
    generated_output_dir, path_separator, Artifact, Invocation, OutputKind, ProjectModel, Scope,
};

/// Entry-point class of the KSP command-line tool.
const KSP_MAIN_CLASS: &str = "com.google.devtools.ksp.cmdline.KSPJvmMain";

/// Build the full KSP invocation for one step.
///
/// Pure apart from filesystem existence probes (the java executable and
/// the artifact files): identical inputs produce identical argument
/// sequences.
pub fn build_invocation(
    settings: &KspSettings,
    project: &ProjectModel,
    tool_artifacts: &[Artifact],
    scope: Scope,
) -> Result<Invocation, ClasspathError> {
    let jdk_home = resolve_jdk_home(settings);
    let program = resolve_java_executable(&jdk_home);

    let mut args: Vec<String> = Vec::new();

    if settings.verbose {
        args.push("-verbose".to_string());
    }
    if settings.log_level != LogLevel::Warn {
        args.push(format!("-Dksp.logging={}", settings.log_level));
    }

    args.push("-classpath".to_string());
    args.push(classpath::tool_classpath(tool_artifacts)?);

    args.push(KSP_MAIN_CLASS.to_string());

    args.push(format!("-jvm-target={}", settings.jvm_target));
    args.push(format!("-module-name={}", project.name));
    args.push(format!(
        "-source-roots={}",
        join_paths(project.source_roots(scope))
    ));
    args.push(format!("-project-base-dir={}", project.base_dir.display()));
    args.push(format!("-output-base-dir={}", project.build_dir.display()));
    args.push(format!(
        "-caches-dir={}",
        project.build_dir.join("ksp-caches").display()
    ));
    for kind in OutputKind::ALL {
        args.push(format!(
            "-{}-output-dir={}",
            kind.flag_stem(),
            generated_output_dir(&project.build_dir, scope, kind).display()
        ));
    }
    args.push(format!("-language-version={}", settings.language_version));
    args.push(format!("-api-version={}", settings.api_version));
    args.push(format!("-jdk-home={}", jdk_home.display()));

    if settings.all_warnings_as_errors {
        args.push("-all-warnings-as-errors=true".to_string());
    }
    if !settings.processor_options.is_empty() {
        args.push(format!(
            "-processor-options={}",
            settings.processor_options.join(path_separator())
        ));
    }

    args.push("-libraries".to_string());
    args.push(classpath::project_libraries(project.artifacts(scope))?);

    Ok(Invocation { program, args })
}

/// The JDK home the invocation advertises: the configured override when
/// present, the ambient `JAVA_HOME` otherwise. May be empty when neither
/// is set; the tool then applies its own default.
fn resolve_jdk_home(settings: &KspSettings) -> PathBuf {
    match &settings.jdk_home {
        Some(home) if !home.as_os_str().is_empty() => home.clone(),
        _ => std::env::var_os("JAVA_HOME")
            .map(PathBuf::from)
            .unwrap_or_default(),
    }
}

/// Probe `<jdk home>/bin/java`; fall back to the bare `java` token and the
/// ambient search path when it is not there. Never fails.
fn resolve_java_executable(jdk_home: &Path) -> PathBuf {
    let candidate = jdk_home.join("bin").join("java");
    if candidate.exists() {
        candidate
    } else {
        PathBuf::from("java")
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(path_separator())
}
