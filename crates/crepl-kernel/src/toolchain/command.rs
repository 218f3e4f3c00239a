//! CommandToolchain — a real compiler invoked as a child process.
//!
//! ```text
//! <compiler> -o <artifact> <source> [compiler_args...]
//! <artifact>
//! ```

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::KernelConfig;
use crate::error::ToolchainError;
use crate::outcome::ProcessOutput;
use crate::toolchain::Toolchain;

/// Drives an external C compiler such as `gcc` or `clang`.
#[derive(Debug, Clone)]
pub struct CommandToolchain {
    program: String,
    args: Vec<String>,
}

impl CommandToolchain {
    /// Use `program` with extra arguments after the source path.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from the compiler settings of a kernel config.
    pub fn from_config(config: &KernelConfig) -> Self {
        Self::new(config.compiler.clone(), config.compiler_args.clone())
    }

    /// The compiler program.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandToolchain {
    fn default() -> Self {
        Self::from_config(&KernelConfig::default())
    }
}

#[async_trait]
impl Toolchain for CommandToolchain {
    async fn compile(&self, source: &Path, artifact: &Path) -> Result<ProcessOutput, ToolchainError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-o").arg(artifact).arg(source).args(&self.args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!(program = %self.program, source = %source.display(), "Compiling");
        let output = cmd
            .output()
            .await
            .map_err(|err| ToolchainError::LaunchCompiler {
                program: self.program.clone(),
                source: err,
            })?;
        let output = ProcessOutput::from_output(output);
        tracing::debug!(code = ?output.code, "Compiler exited");
        Ok(output)
    }

    async fn execute(&self, artifact: &Path) -> Result<ProcessOutput, ToolchainError> {
        let mut cmd = Command::new(artifact);
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = cmd
            .output()
            .await
            .map_err(|err| ToolchainError::LaunchArtifact {
                path: artifact.to_path_buf(),
                source: err,
            })?;
        let output = ProcessOutput::from_output(output);
        tracing::debug!(code = ?output.code, "Artifact exited");
        Ok(output)
    }
}
