//! Captured process output and the outcome of one compile-and-run cycle.

/// Exit status and captured streams of one child process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutput {
    /// Exit code. `None` if the process was killed by a signal.
    pub code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl ProcessOutput {
    /// A zero exit with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A non-zero exit with the given stderr.
    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Convert captured bytes, replacing invalid UTF-8.
    pub fn from_output(output: std::process::Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// True if the process exited with status 0.
    pub fn ok(&self) -> bool {
        self.code == Some(0)
    }
}

/// Result of handing one compilation unit to the toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The compiler rejected the unit. Nothing was executed.
    CompileFailed {
        /// Compiler stderr, verbatim.
        diagnostics: String,
    },
    /// The unit compiled and the artifact ran to completion.
    ///
    /// A non-zero `code` is still a completed run.
    Completed {
        stdout: String,
        stderr: String,
        code: Option<i32>,
    },
    /// A file could not be written or a process could not be launched.
    ExecutionError { message: String },
}

impl RunOutcome {
    /// True if the compiler accepted the unit.
    pub fn compiled(&self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }

    /// Artifact stdout, empty unless the run completed.
    pub fn stdout(&self) -> &str {
        match self {
            RunOutcome::Completed { stdout, .. } => stdout,
            _ => "",
        }
    }

    /// Artifact stderr on a completed run, or compiler diagnostics on a failed compile.
    pub fn stderr(&self) -> &str {
        match self {
            RunOutcome::Completed { stderr, .. } => stderr,
            RunOutcome::CompileFailed { diagnostics } => diagnostics,
            RunOutcome::ExecutionError { .. } => "",
        }
    }

    /// Artifact exit code, if it ran and exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RunOutcome::Completed { code, .. } => *code,
            _ => None,
        }
    }
}

impl From<ProcessOutput> for RunOutcome {
    fn from(output: ProcessOutput) -> Self {
        RunOutcome::Completed {
            stdout: output.stdout,
            stderr: output.stderr,
            code: output.code,
        }
    }
}
