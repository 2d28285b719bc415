//! End-to-end step behavior: skip short-circuit, failure propagation,
//! and post-success source-root registration.

use std::fs;
use std::path::{Path, PathBuf};

use ksprun::core::step::{self, StepError, StepOutcome};
use ksprun::{Artifact, KspSettings, ProjectModel, Scope};

fn project_on_disk(root: &Path) -> ProjectModel {
    let base = root.join("proj");
    let build = base.join("target");
    let main_root = base.join("src/main/kotlin");
    for d in [&build, &main_root] {
        fs::create_dir_all(d).unwrap();
    }

    ProjectModel {
        name: "demo".to_string(),
        base_dir: base,
        build_dir: build,
        compile_source_roots: vec![main_root],
        test_compile_source_roots: Vec::new(),
        runtime_artifacts: Vec::new(),
        test_artifacts: Vec::new(),
    }
}

/// A jdk layout whose `bin/java` is a script exiting with `exit_code`,
/// standing in for the real tool launch.
#[cfg(unix)]
fn fake_jdk(root: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let jdk = root.join("jdk");
    let bin = jdk.join("bin");
    fs::create_dir_all(&bin).unwrap();
    let java = bin.join("java");
    fs::write(&java, format!("#!/bin/sh\nexit {exit_code}\n")).unwrap();
    let mut perms = fs::metadata(&java).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&java, perms).unwrap();
    jdk
}

#[tokio::test]
async fn skip_launches_nothing_and_registers_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut project = project_on_disk(dir.path());

    // Generated output already on disk; a running step would register it.
    fs::create_dir_all(project.build_dir.join("generated-sources/ksp-kotlin")).unwrap();

    // These artifacts do not exist, so anything past the skip check would
    // fail loudly.
    let tool_artifacts = vec![Artifact::new("/missing/tool.jar", "runtime")];
    let settings = KspSettings {
        skip: true,
        ..Default::default()
    };

    let roots_before = project.compile_source_roots.clone();
    let outcome = step::run(&settings, &mut project, &tool_artifacts, Scope::Main)
        .await
        .unwrap();

    assert_eq!(outcome, StepOutcome::Skipped);
    assert_eq!(project.compile_source_roots, roots_before);
}

#[cfg(unix)]
#[tokio::test]
async fn failing_tool_aborts_without_registration() {
    let dir = tempfile::tempdir().unwrap();
    let mut project = project_on_disk(dir.path());
    fs::create_dir_all(project.build_dir.join("generated-sources/ksp-kotlin")).unwrap();

    let settings = KspSettings {
        jdk_home: Some(fake_jdk(dir.path(), 1)),
        ..Default::default()
    };

    let err = step::run(&settings, &mut project, &[], Scope::Main)
        .await
        .unwrap_err();

    assert!(matches!(err, StepError::ToolFailure(1)));
    // No partial registration on failure.
    assert_eq!(project.compile_source_roots.len(), 1);
}

#[cfg(unix)]
#[tokio::test]
async fn successful_run_registers_generated_directories() {
    let dir = tempfile::tempdir().unwrap();
    let mut project = project_on_disk(dir.path());
    for sub in ["ksp-kotlin", "ksp-java", "ksp-class"] {
        fs::create_dir_all(project.build_dir.join("generated-sources").join(sub)).unwrap();
    }

    let settings = KspSettings {
        jdk_home: Some(fake_jdk(dir.path(), 0)),
        ..Default::default()
    };

    let outcome = step::run(&settings, &mut project, &[], Scope::Main)
        .await
        .unwrap();

    let expected = vec![
        project.build_dir.join("generated-sources/ksp-kotlin"),
        project.build_dir.join("generated-sources/ksp-java"),
    ];
    assert_eq!(
        outcome,
        StepOutcome::Completed {
            registered_roots: expected.clone()
        }
    );
    // The kotlin and java outputs were appended; the class output never is.
    assert_eq!(&project.compile_source_roots[1..], &expected[..]);
}

#[cfg(unix)]
#[tokio::test]
async fn test_scope_registers_into_the_test_list() {
    let dir = tempfile::tempdir().unwrap();
    let mut project = project_on_disk(dir.path());
    fs::create_dir_all(project.build_dir.join("generated-test-sources/ksp-kotlin")).unwrap();

    let settings = KspSettings {
        jdk_home: Some(fake_jdk(dir.path(), 0)),
        ..Default::default()
    };

    let outcome = step::run(&settings, &mut project, &[], Scope::Test)
        .await
        .unwrap();

    let expected = vec![project.build_dir.join("generated-test-sources/ksp-kotlin")];
    assert_eq!(
        outcome,
        StepOutcome::Completed {
            registered_roots: expected.clone()
        }
    );
    assert_eq!(project.test_compile_source_roots, expected);
    // The main list keeps only its original root.
    assert_eq!(project.compile_source_roots.len(), 1);
}
