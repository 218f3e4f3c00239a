//! crepl-kernel: the core of crepl.
//!
//! This crate provides:
//!
//! - **Classifier**: sorts a fragment into declaration, expression, or statement
//! - **Session**: preamble, accumulated globals, and submission history
//! - **Synthesizer**: wraps a fragment into a complete C compilation unit
//! - **Runner**: compiles and executes a unit through a [`Toolchain`]
//! - **Kernel**: ties the pieces together, one submission at a time

pub mod classify;
pub mod config;
pub mod error;
pub mod kernel;
pub mod outcome;
pub mod runner;
pub mod scratch;
pub mod session;
pub mod synth;
pub mod toolchain;

pub use classify::{classify, Classification};
pub use config::KernelConfig;
pub use error::ToolchainError;
pub use kernel::{Kernel, Turn};
pub use outcome::{ProcessOutput, RunOutcome};
pub use runner::Runner;
pub use scratch::ScratchDir;
pub use session::Session;
pub use synth::{synthesize, CompilationUnit};
pub use toolchain::{CommandToolchain, Toolchain};
