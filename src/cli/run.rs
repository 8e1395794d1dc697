//! Generate artifacts from configuration and token files.

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::parsers::{self, ParseContext};
use crate::token::DesignToken;

pub const DEFAULT_CONFIG: &str = "swift-token-gen.yml";
pub const DEFAULT_TOKEN: &str = "token.json";

#[derive(Args, Debug, Clone)]
pub struct RunCommand {
    /// Configuration file, may be repeated. Files run in the order given.
    #[arg(short = 'c', long = "config", value_name = "PATH", default_value = DEFAULT_CONFIG)]
    pub configs: Vec<PathBuf>,

    /// Design token file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_TOKEN)]
    pub token: PathBuf,
}

impl RunCommand {
    pub fn execute(self) -> Result<()> {
        let working_dir = std::env::current_dir().context("Failed to determine the current directory")?;
        self.execute_in(&working_dir)
    }

    /// Run with every relative path resolved against `working_dir`.
    ///
    /// All documents are loaded before anything is generated, so a missing or malformed
    /// file leaves the output tree untouched.
    pub fn execute_in(&self, working_dir: &Path) -> Result<()> {
        let configs = self
            .configs
            .iter()
            .map(|path| Config::load(&working_dir.join(path)))
            .collect::<Result<Vec<_>>>()?;
        let token = DesignToken::load(&working_dir.join(&self.token))?;
        debug!("Loaded {} configuration file(s)", configs.len());

        let ctx = ParseContext {
            token: &token,
            working_dir,
        };
        parsers::run_all(&configs, ctx)?;

        info!("Done");
        Ok(())
    }
}
