//! Test utilities for crepl.
//!
//! - [`ScriptedToolchain`]: a fake [`Toolchain`] that replays queued results
//!   and records every unit it was asked to compile
//! - [`gcc_available`]: lets real-compiler tests skip themselves

use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crepl_kernel::{ProcessOutput, Toolchain, ToolchainError};

/// One queued response from the fake.
#[derive(Debug, Clone)]
enum Step {
    Output(ProcessOutput),
    LaunchFailure,
}

#[derive(Debug, Default)]
struct State {
    compiles: VecDeque<Step>,
    runs: VecDeque<Step>,
    sources: Vec<String>,
    executions: usize,
}

/// A toolchain that never spawns anything.
///
/// Compiles succeed and runs print nothing unless a result was queued.
/// Clones share state, so a test can keep a handle after moving one into a
/// kernel.
#[derive(Debug, Clone, Default)]
pub struct ScriptedToolchain {
    state: Arc<Mutex<State>>,
}

impl ScriptedToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next compile fail with `diagnostics` on stderr.
    pub fn push_compile_failure(&self, diagnostics: &str) {
        self.lock()
            .compiles
            .push_back(Step::Output(ProcessOutput::failure(1, diagnostics)));
    }

    /// Make the next compile fail to launch.
    pub fn push_compiler_missing(&self) {
        self.lock().compiles.push_back(Step::LaunchFailure);
    }

    /// Make the next run produce `output`.
    pub fn push_run(&self, output: ProcessOutput) {
        self.lock().runs.push_back(Step::Output(output));
    }

    /// Make the next run fail to launch.
    pub fn push_artifact_missing(&self) {
        self.lock().runs.push_back(Step::LaunchFailure);
    }

    /// Every unit handed to `compile`, oldest first.
    pub fn sources(&self) -> Vec<String> {
        self.lock().sources.clone()
    }

    /// How many times `execute` was called.
    pub fn executions(&self) -> usize {
        self.lock().executions
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl Toolchain for ScriptedToolchain {
    async fn compile(&self, source: &Path, _artifact: &Path) -> Result<ProcessOutput, ToolchainError> {
        let text = tokio::fs::read_to_string(source)
            .await
            .map_err(|err| ToolchainError::LaunchCompiler {
                program: "scripted".into(),
                source: err,
            })?;

        let mut state = self.lock();
        state.sources.push(text);
        match state.compiles.pop_front() {
            None => Ok(ProcessOutput::success("")),
            Some(Step::Output(output)) => Ok(output),
            Some(Step::LaunchFailure) => Err(ToolchainError::LaunchCompiler {
                program: "scripted".into(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            }),
        }
    }

    async fn execute(&self, artifact: &Path) -> Result<ProcessOutput, ToolchainError> {
        let mut state = self.lock();
        state.executions += 1;
        match state.runs.pop_front() {
            None => Ok(ProcessOutput::success("")),
            Some(Step::Output(output)) => Ok(output),
            Some(Step::LaunchFailure) => Err(ToolchainError::LaunchArtifact {
                path: artifact.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            }),
        }
    }
}

/// True if `gcc` can be launched from `PATH`.
pub fn gcc_available() -> bool {
    Command::new("gcc")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Skip the current test when `gcc` is missing.
#[macro_export]
macro_rules! require_gcc {
    () => {
        if !$crate::gcc_available() {
            eprintln!("skipping: gcc not found on PATH");
            return;
        }
    };
}
