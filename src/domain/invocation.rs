//! The assembled tool command and its outcome.

use std::path::PathBuf;

/// A fully-assembled external tool command line.
///
/// Built once by the command builder, immutable, consumed exactly once by
/// the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The java executable to launch.
    pub program: PathBuf,

    /// Ordered arguments. The tool's parser is order-sensitive for some
    /// flags, so the order is part of the contract.
    pub args: Vec<String>,
}

impl Invocation {
    /// One-line rendering for logs.
    pub fn rendered(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Outcome of running an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Child exit code; -1 when the child was killed by a signal.
    pub exit_code: i32,
}

impl ExecutionResult {
    pub fn success(self) -> bool {
        self.exit_code == 0
    }
}
