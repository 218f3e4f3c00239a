//! The Kernel — one interactive compilation session.
//!
//! ```text
//! fragment ─► history ─► classify ─┬─ Declaration ─► Session.globals
//!                                  └─ Expression / Statement
//!                                        ─► synthesize ─► Runner ─► RunOutcome
//! ```
//!
//! The kernel owns the [`Session`] and the [`Runner`] (and through it the
//! scratch directory). Command handling (`clear`, `show`, ...) lives in the
//! REPL; the kernel only sees fragments.

use std::path::Path;

use anyhow::{Context, Result};

use crate::classify::{classify, Classification};
use crate::config::KernelConfig;
use crate::outcome::RunOutcome;
use crate::runner::Runner;
use crate::scratch::ScratchDir;
use crate::session::Session;
use crate::synth::synthesize_for;
use crate::toolchain::{CommandToolchain, Toolchain};

/// What happened to one submitted fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The fragment was added to the globals. Nothing was compiled.
    Declared,
    /// The fragment was compiled and, if that worked, executed.
    Ran {
        classification: Classification,
        outcome: RunOutcome,
    },
}

/// An incremental compilation session.
pub struct Kernel<T = CommandToolchain> {
    session: Session,
    runner: Runner<T>,
}

impl Kernel<CommandToolchain> {
    /// Create a kernel that drives the configured compiler.
    pub fn new(config: KernelConfig) -> Result<Self> {
        let toolchain = CommandToolchain::from_config(&config);
        Self::with_toolchain(config, toolchain)
    }
}

impl<T: Toolchain> Kernel<T> {
    /// Create a kernel over any toolchain.
    pub fn with_toolchain(config: KernelConfig, toolchain: T) -> Result<Self> {
        let scratch = ScratchDir::new().context("Failed to create scratch directory")?;
        Ok(Self::from_parts(Session::with_headers(&config.headers), toolchain, scratch))
    }

    /// Assemble a kernel from an existing session and scratch directory.
    pub fn from_parts(session: Session, toolchain: T, scratch: ScratchDir) -> Self {
        Self {
            session,
            runner: Runner::new(toolchain, scratch),
        }
    }

    /// Process one fragment.
    ///
    /// The fragment is recorded in history first, whatever happens next.
    pub async fn submit(&mut self, fragment: &str) -> Turn {
        self.session.record_history(fragment);

        let classification = classify(fragment);
        tracing::debug!(%classification, fragment, "Classified fragment");

        if classification == Classification::Declaration {
            self.session.record_declaration(fragment);
            return Turn::Declared;
        }

        let Some(unit) = synthesize_for(&self.session, classification, fragment) else {
            unreachable!("synthesis only declines declarations")
        };
        let outcome = self.runner.run(&unit).await;
        Turn::Ran {
            classification,
            outcome,
        }
    }

    /// The session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable session state, for `clear` and friends.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// The scratch directory in use.
    pub fn scratch_path(&self) -> &Path {
        self.runner.scratch_path()
    }

    /// Tear down the session, removing the scratch directory.
    pub fn shutdown(self) -> Result<()> {
        self.runner
            .close()
            .context("Failed to remove scratch directory")
    }
}
