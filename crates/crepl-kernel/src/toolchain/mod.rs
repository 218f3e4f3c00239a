//! The external toolchain seam.
//!
//! The kernel never compiles anything itself. It hands paths to a
//! [`Toolchain`] and reads back exit codes and streams. [`CommandToolchain`]
//! runs a real compiler; tests substitute a scripted fake.

mod command;

pub use command::CommandToolchain;

use std::path::Path;

use async_trait::async_trait;

use crate::error::ToolchainError;
use crate::outcome::ProcessOutput;

/// Compile a source file and execute the result.
///
/// `Err` means a process could not be launched at all. A compiler that runs
/// and rejects the source returns `Ok` with a non-zero code.
#[async_trait]
pub trait Toolchain: Send + Sync {
    /// Compile `source` into `artifact`.
    async fn compile(&self, source: &Path, artifact: &Path) -> Result<ProcessOutput, ToolchainError>;

    /// Run `artifact` with no arguments and capture its output.
    async fn execute(&self, artifact: &Path) -> Result<ProcessOutput, ToolchainError>;
}
