//! tokengen CLI entry point
//!
//! Parses arguments, runs the selected command and turns failures into a readable
//! report with remediation hints. Exits with status 1 on error.

use clap::Parser;
use tokengen_cli::cli;
use tokengen_cli::core::user_friendly_error;

fn main() {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    if let Err(e) = cli.execute() {
        let error_ctx = user_friendly_error(e);
        error_ctx.display();
        std::process::exit(1);
    }
}
