//! crepl entry point.
//!
//! Launch the interactive C REPL:
//! ```bash
//! cargo run -p crepl-repl -- --cflag -lm
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crepl_kernel::config::DEFAULT_COMPILER;
use crepl_kernel::KernelConfig;
use crepl_repl::ReplConfig;

#[derive(Debug, Parser)]
#[command(name = "crepl", version, about = "Interactive C REPL backed by an external compiler")]
struct Args {
    /// C compiler to invoke as `<cc> -o <artifact> <source>`
    #[arg(long = "cc", env = "CREPL_CC", default_value = DEFAULT_COMPILER)]
    compiler: String,

    /// Extra compiler argument placed after the source file; repeatable
    #[arg(long = "cflag", value_name = "ARG", allow_hyphen_values = true)]
    cflags: Vec<String>,

    /// Disable colored output (also honours NO_COLOR)
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());

    let config = ReplConfig {
        kernel: KernelConfig {
            compiler: args.compiler,
            compiler_args: args.cflags,
            ..KernelConfig::default()
        },
        color: !(args.no_color || no_color_env),
    };

    tracing::debug!(compiler = %config.kernel.compiler, "Starting crepl");
    crepl_repl::run(config)
}
