//! External process execution with live stream pass-through.
//!
//! The step runs exactly one child process and blocks until it exits. The
//! child inherits the host's stdin, stdout and stderr, so the tool's
//! diagnostics reach the user while it runs; the environment is inherited
//! unmodified. There is no timeout and no cancellation path.

use std::path::Path;
use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::debug;

use crate::domain::{ExecutionResult, Invocation};

/// Run `invocation` from `working_dir`, blocking until the child exits.
///
/// Launch failures (executable not found, spawn errors) are fatal. A
/// non-zero exit is not an error here; the caller decides what it means.
pub async fn execute(invocation: &Invocation, working_dir: &Path) -> Result<ExecutionResult> {
    debug!(command = %invocation.rendered(), "launching external tool");

    let status = Command::new(&invocation.program)
        .args(&invocation.args)
        .current_dir(working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .with_context(|| {
            format!(
                "Failed to launch '{}' in {}",
                invocation.program.display(),
                working_dir.display()
            )
        })?;

    let exit_code = status.code().unwrap_or(-1);
    debug!(exit_code, "external tool exited");

    Ok(ExecutionResult { exit_code })
}
