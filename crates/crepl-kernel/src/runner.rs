//! Runner — one compile-and-run cycle per call.
//!
//! The source and artifact paths are the same every turn, so `run` takes
//! `&mut self`: a runner can only have one cycle in flight.

use std::io;
use std::path::Path;

use crate::error::ToolchainError;
use crate::outcome::RunOutcome;
use crate::scratch::ScratchDir;
use crate::synth::CompilationUnit;
use crate::toolchain::Toolchain;

/// Writes units into a scratch directory and drives a [`Toolchain`] over them.
pub struct Runner<T> {
    toolchain: T,
    scratch: ScratchDir,
}

impl<T: Toolchain> Runner<T> {
    /// Create a runner that owns `scratch` until it is closed or dropped.
    pub fn new(toolchain: T, scratch: ScratchDir) -> Self {
        Self { toolchain, scratch }
    }

    /// Compile and, if that succeeds, execute `unit`.
    ///
    /// Never fails: launch and I/O problems come back as
    /// [`RunOutcome::ExecutionError`].
    pub async fn run(&mut self, unit: &CompilationUnit) -> RunOutcome {
        match self.try_run(unit).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, "Toolchain invocation failed");
                RunOutcome::ExecutionError {
                    message: e.to_string(),
                }
            }
        }
    }

    async fn try_run(&mut self, unit: &CompilationUnit) -> Result<RunOutcome, ToolchainError> {
        let source = self.scratch.source_path();
        let artifact = self.scratch.artifact_path();

        tokio::fs::write(&source, unit.as_str())
            .await
            .map_err(|err| ToolchainError::WriteSource {
                path: source.clone(),
                source: err,
            })?;

        let compiled = self.toolchain.compile(&source, &artifact).await?;
        if !compiled.ok() {
            return Ok(RunOutcome::CompileFailed {
                diagnostics: compiled.stderr,
            });
        }

        let ran = self.toolchain.execute(&artifact).await?;
        match ran.code {
            None => tracing::warn!("Artifact terminated by signal"),
            Some(0) => {}
            Some(code) => tracing::debug!(code, "Artifact exited non-zero"),
        }
        Ok(RunOutcome::from(ran))
    }

    /// The scratch directory in use.
    pub fn scratch_path(&self) -> &Path {
        self.scratch.path()
    }

    /// Remove the scratch directory.
    pub fn close(self) -> io::Result<()> {
        self.scratch.close()
    }
}
