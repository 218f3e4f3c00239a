//! Errors raised while driving the external toolchain.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failure to write scratch files or launch a process.
///
/// Compiler rejections are not errors; they come back as a non-zero
/// [`ProcessOutput`](crate::ProcessOutput).
#[derive(Debug, Error)]
pub enum ToolchainError {
    #[error("cannot write {}: {source}", path.display())]
    WriteSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot launch compiler `{program}`: {source}")]
    LaunchCompiler {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot launch {}: {source}", path.display())]
    LaunchArtifact {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
