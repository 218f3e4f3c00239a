//! Session-lifetime scratch directory.
//!
//! One directory per session, created at startup and removed exactly once:
//! by [`ScratchDir::close`] on an orderly shutdown, or by `Drop` otherwise.
//! Every turn writes the same two paths inside it:
//!
//! | Path | Contents |
//! |------|----------|
//! | `<dir>/crepl_unit.c` | the synthesized unit |
//! | `<dir>/crepl_unit` | the compiled artifact |

use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

const PREFIX: &str = "crepl-";
const SOURCE_NAME: &str = "crepl_unit.c";
#[cfg(windows)]
const ARTIFACT_NAME: &str = "crepl_unit.exe";
#[cfg(not(windows))]
const ARTIFACT_NAME: &str = "crepl_unit";

/// A private temporary directory holding the per-turn source and artifact.
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Create a fresh directory under the system temp dir.
    pub fn new() -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix(PREFIX).tempdir()?;
        tracing::info!(path = %dir.path().display(), "Created scratch directory");
        Ok(Self { dir })
    }

    /// Create a fresh directory under `parent`.
    pub fn new_in(parent: impl AsRef<Path>) -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix(PREFIX).tempdir_in(parent)?;
        tracing::info!(path = %dir.path().display(), "Created scratch directory");
        Ok(Self { dir })
    }

    /// The directory itself.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Where the unit source is written each turn.
    pub fn source_path(&self) -> PathBuf {
        self.dir.path().join(SOURCE_NAME)
    }

    /// Where the compiler puts the artifact each turn.
    pub fn artifact_path(&self) -> PathBuf {
        self.dir.path().join(ARTIFACT_NAME)
    }

    /// Remove the directory, reporting any failure.
    pub fn close(self) -> io::Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir.close()?;
        tracing::info!(path = %path.display(), "Removed scratch directory");
        Ok(())
    }
}
