//! Command-line interface for ksprun.
//!
//! Two build-step commands: `generate` runs KSP over the main sources
//! before compilation, `generate-test` over the test sources before test
//! compilation. Each carries its own skip flag, settable via a build
//! property (`KSPRUN_SKIP` / `KSPRUN_SKIP_TEST`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::Manifest;
use crate::core::step::{self, StepOutcome};
use crate::domain::Scope;

/// ksprun - runs the Kotlin Symbol Processing tool as a build step
#[derive(Parser, Debug)]
#[command(name = "ksprun")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the step manifest written by the host build
    #[arg(short, long, global = true, default_value = "ksprun.yaml")]
    pub manifest: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run KSP over the main sources (pre-compile phase)
    Generate {
        /// Skip KSP execution for this step
        #[arg(long, env = "KSPRUN_SKIP")]
        skip: bool,
    },

    /// Run KSP over the test sources (pre-test-compile phase)
    GenerateTest {
        /// Skip KSP execution for this step
        #[arg(long, env = "KSPRUN_SKIP_TEST")]
        skip: bool,
    },
}

impl Cli {
    /// Execute the selected command.
    pub async fn execute(self) -> Result<()> {
        let (scope, skip) = match self.command {
            Commands::Generate { skip } => (Scope::Main, skip),
            Commands::GenerateTest { skip } => (Scope::Test, skip),
        };

        run_step(&self.manifest, scope, skip).await
    }
}

/// Load the manifest, run the step, and print the registered source roots
/// on stdout for the host build to consume. Logs go to stderr.
async fn run_step(manifest_path: &Path, scope: Scope, skip: bool) -> Result<()> {
    let manifest_path = manifest_path.canonicalize().with_context(|| {
        format!("Failed to locate manifest file: {}", manifest_path.display())
    })?;
    let manifest = Manifest::from_file(&manifest_path)?;

    let base = manifest_path
        .parent()
        .context("Manifest file has no parent directory")?;
    let mut resolved = manifest.resolve(base);
    if skip {
        resolved.settings.skip = true;
    }

    let outcome = step::run(
        &resolved.settings,
        &mut resolved.project,
        &resolved.tool_artifacts,
        scope,
    )
    .await?;

    if let StepOutcome::Completed { registered_roots } = outcome {
        for root in &registered_roots {
            println!("{}", root.display());
        }
    }

    Ok(())
}
