//! crepl REPL — interactive C, one line at a time.
//!
//! Each line is either a command (`help`, `clear`, `show`, `history`,
//! `exit`/`quit`) or a C fragment handed to the kernel:
//!
//! - Declarations (`int x = 5;`) are kept as global code
//! - Expressions (`1 + 2 * 3`) are compiled and their value printed
//! - Anything else is compiled as the body of `main` and run
//!
//! Lines are processed strictly one after another on a current-thread
//! runtime, so only one compile-and-run cycle is ever in flight.

pub mod command;
pub mod palette;

use std::io::Write;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tokio::runtime::Runtime;

use crepl_kernel::{CommandToolchain, Kernel, KernelConfig, RunOutcome, Toolchain, Turn};

pub use command::Command;
pub use palette::Palette;

/// Prompt shown before each line.
pub const PROMPT: &str = "C>>> ";

/// REPL configuration.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Compiler and preamble settings.
    pub kernel: KernelConfig,
    /// Color status messages.
    pub color: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            kernel: KernelConfig::default(),
            color: true,
        }
    }
}

/// What the caller should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text as-is. Plain text always ends in a newline.
    Output(String),
    /// Nothing to print.
    Silent,
    /// Print this text, then leave the loop.
    Exit(String),
}

/// REPL state: the kernel plus the runtime that drives it.
pub struct Repl<T = CommandToolchain> {
    kernel: Kernel<T>,
    runtime: Runtime,
    palette: Palette,
}

impl Repl<CommandToolchain> {
    /// Create a REPL that drives the configured compiler.
    pub fn new(config: ReplConfig) -> Result<Self> {
        let toolchain = CommandToolchain::from_config(&config.kernel);
        Self::with_toolchain(config, toolchain)
    }
}

impl<T: Toolchain> Repl<T> {
    /// Create a REPL over any toolchain.
    pub fn with_toolchain(config: ReplConfig, toolchain: T) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start runtime")?;
        let kernel = Kernel::with_toolchain(config.kernel, toolchain)?;
        Ok(Self {
            kernel,
            runtime,
            palette: Palette::new(config.color),
        })
    }

    /// Process a single line of input.
    pub fn process_line(&mut self, line: &str) -> Reply {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return Reply::Silent;
        }

        if let Some(command) = Command::parse(trimmed) {
            return self.handle_command(command);
        }

        let turn = self.runtime.block_on(self.kernel.submit(trimmed));
        self.render_turn(turn)
    }

    fn handle_command(&mut self, command: Command) -> Reply {
        let p = self.palette;
        match command {
            Command::Exit => Reply::Exit(line(&p.success("Goodbye!"))),
            Command::Help => Reply::Output(p.info(HELP_TEXT)),
            Command::Clear => {
                self.kernel.session_mut().reset();
                Reply::Output(line(&p.success("Global code cleared")))
            }
            Command::Show => {
                let mut out = line(&p.info("Current global code:"));
                out.push_str(&self.kernel.session().snapshot_globals());
                Reply::Output(out)
            }
            Command::History => {
                let mut out = line(&p.muted("Command history:"));
                for (i, fragment) in self.kernel.session().history().iter().enumerate() {
                    out.push_str(&line(&p.muted(&format!("{}: {}", i + 1, fragment))));
                }
                Reply::Output(out)
            }
        }
    }

    fn render_turn(&self, turn: Turn) -> Reply {
        let p = self.palette;
        let out = match turn {
            Turn::Declared => line(&p.success("Added to global code")),
            Turn::Ran { outcome, .. } => match outcome {
                RunOutcome::Completed { stdout, stderr, code } => {
                    if code != Some(0) {
                        tracing::debug!(?code, "Program exited non-zero");
                    }
                    let mut out = stdout;
                    if !out.is_empty() && !out.ends_with('\n') {
                        out.push('\n');
                    }
                    if !stderr.is_empty() {
                        let msg = format!("runtime error: {}", stderr.trim_end());
                        out.push_str(&line(&p.error(&msg)));
                    }
                    // No exit code means the program was killed by a signal.
                    if code.is_none() {
                        out.push_str(&line(&p.error("runtime error: terminated by signal")));
                    }
                    out
                }
                RunOutcome::CompileFailed { diagnostics } => {
                    let msg = format!("compile error: {}", diagnostics.trim_end());
                    line(&p.error(&msg))
                }
                RunOutcome::ExecutionError { message } => {
                    line(&p.error(&format!("execution error: {message}")))
                }
            },
        };

        if out.is_empty() {
            Reply::Silent
        } else {
            Reply::Output(out)
        }
    }

    /// Startup banner.
    pub fn banner(&self) -> String {
        let p = self.palette;
        let rule = "=".repeat(40);
        let mut out = String::new();
        out.push_str(&line(&p.title(&rule)));
        out.push_str(&line(&p.title(&format!(
            "     crepl v{} (C Interactive Terminal)",
            env!("CARGO_PKG_VERSION")
        ))));
        out.push_str(&line(&p.title(&rule)));
        out.push_str(&p.info(BANNER_HINTS));
        out
    }

    /// The underlying kernel.
    pub fn kernel(&self) -> &Kernel<T> {
        &self.kernel
    }

    /// Tear down, removing the scratch directory.
    pub fn shutdown(self) -> Result<()> {
        self.kernel.shutdown()
    }
}

/// Append a newline.
fn line(text: &str) -> String {
    let mut s = String::with_capacity(text.len() + 1);
    s.push_str(text);
    s.push('\n');
    s
}

const BANNER_HINTS: &str = "\
Type 'help' for help
Type 'exit' or 'quit' to exit
Type 'clear' to clear global code
Type 'show' to display current global code
Type 'history' to view command history

";

const HELP_TEXT: &str = r#"
Help Information:
========================================
Basic usage:
- Single C statement:  printf("Hello World\n");
- Variable definition: int x = 10;
- Function definition: int add(int a, int b) { return a + b; }
- Math expression:     1 + 2 * 3
- Function call:       add(5, 3);

Commands:
- help       Show this help
- clear      Clear all global definitions
- show       View current global code
- history    View command history
- exit/quit  Exit

Notes:
- Lines starting with int, float, double, char, void, long, short,
  or unsigned and containing ';' or '{' become global code.
- Arithmetic without ';' or '(' prints its value; add(5, 3) + 1 does not.

Examples:
C>>> int x = 5;
C>>> printf("x = %d\n", x);
C>>> int factorial(int n) { return n <= 1 ? 1 : n * factorial(n-1); }
C>>> printf("5! = %d\n", factorial(5));
========================================

"#;

/// Run the REPL until `exit`, Ctrl-C, or end of input.
pub fn run(config: ReplConfig) -> Result<()> {
    let mut repl = Repl::new(config)?;
    print!("{}", repl.banner());

    let result = read_loop(&mut repl);

    // Scratch cleanup happens on every way out of the loop.
    let shutdown = repl.shutdown();
    if let Err(e) = &shutdown {
        tracing::warn!(error = %e, "Scratch cleanup failed");
    }
    result?;
    shutdown
}

fn read_loop<T: Toolchain>(repl: &mut Repl<T>) -> Result<()> {
    let mut rl = DefaultEditor::new().context("Failed to create editor")?;
    let goodbye = line(&repl.palette.success("Goodbye!"));

    loop {
        match rl.readline(PROMPT) {
            Ok(input) => {
                if !input.trim().is_empty() {
                    let _ = rl.add_history_entry(input.as_str());
                }

                match repl.process_line(&input) {
                    Reply::Output(text) => print!("{text}"),
                    Reply::Silent => {}
                    Reply::Exit(text) => {
                        print!("{text}");
                        return Ok(());
                    }
                }
                let _ = std::io::stdout().flush();
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                print!("{goodbye}");
                return Ok(());
            }
            Err(ReadlineError::Eof) => {
                println!();
                print!("{goodbye}");
                return Ok(());
            }
            Err(err) => {
                return Err(err).context("Failed to read input");
            }
        }
    }
}
