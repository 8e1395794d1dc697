//! Command-line interface for tokengen.
//!
//! # Commands
//!
//! - `run` (default) - generate every artifact described by the configuration files
//! - `templates list` - show the templates compiled into the binary
//!
//! ```bash
//! # Uses swift-token-gen.yml and token.json from the current directory
//! tokengen
//!
//! # Several configuration files against one token file
//! tokengen run -c colors.yml -c grid.yml -t design/token.json
//!
//! tokengen templates list
//! ```
//!
//! # Global Options
//!
//! - `--verbose` - debug output
//! - `--quiet` - errors only
//!
//! `RUST_LOG` overrides both. Logs are written to stderr.

mod run;
mod templates;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

pub use run::RunCommand;
pub use templates::TemplatesCommand;

#[derive(Parser, Debug)]
#[command(
    name = "tokengen",
    about = "Generate Xcode asset catalogs and source files from design tokens",
    version,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunCommand,

    /// Enable debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate artifacts from configuration and token files
    Run(RunCommand),

    /// Inspect bundled templates
    Templates(TemplatesCommand),
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        self.init_logging();

        match self.command {
            Some(Commands::Run(cmd)) => cmd.execute(),
            Some(Commands::Templates(cmd)) => cmd.execute(),
            None => self.run.execute(),
        }
    }

    /// Level used when `RUST_LOG` is not set.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.log_level()));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .without_time()
            .try_init();
    }
}
