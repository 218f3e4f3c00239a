//! Kernel configuration.

use crate::session::DEFAULT_HEADERS;

/// Compiler used when nothing else is configured.
pub const DEFAULT_COMPILER: &str = "gcc";

/// Configuration for kernel initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelConfig {
    /// Compiler program, looked up on `PATH` unless it contains a slash.
    pub compiler: String,
    /// Extra arguments appended after the source path (e.g. `-lm`).
    pub compiler_args: Vec<String>,
    /// Headers included at the top of every unit.
    pub headers: Vec<String>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            compiler: DEFAULT_COMPILER.to_string(),
            compiler_args: Vec::new(),
            headers: DEFAULT_HEADERS.iter().map(|h| h.to_string()).collect(),
        }
    }
}

impl KernelConfig {
    /// Use a different compiler program.
    pub fn with_compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = compiler.into();
        self
    }

    /// Append an extra compiler argument.
    pub fn with_compiler_arg(mut self, arg: impl Into<String>) -> Self {
        self.compiler_args.push(arg.into());
        self
    }
}
