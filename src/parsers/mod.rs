//! Generator dispatch
//!
//! Each top-level configuration section is handled by a [`Parser`] built from a static
//! [`ParserInfo`] table. Dispatch happens on two levels:
//!
//! | Level | Sections | Unknown key |
//! |---|---|---|
//! | top level ([`PARSERS`]) | `xcassets`, `files` | logged and skipped |
//! | inside `xcassets` | `colors`, `images` | [`TokenGenError::InvalidConfigEntry`] |
//!
//! A parser that fails aborts the whole run; sections after it are not processed.
//!
//! [`TokenGenError::InvalidConfigEntry`]: crate::core::TokenGenError::InvalidConfigEntry

pub mod assets_catalog;
pub mod files;

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::core::TokenGenError;
use crate::token::DesignToken;

/// A configured generator, ready to write its artifacts
pub trait Parser {
    fn parse(&self) -> Result<()>;
}

/// Inputs shared by every parser during a run
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    pub token: &'a DesignToken,
    /// Base directory for every relative input, output and template path
    pub working_dir: &'a Path,
}

/// Builds a parser from its raw section value
pub type Constructor = for<'a> fn(&Value, ParseContext<'a>) -> Result<Box<dyn Parser + 'a>>;

/// Static binding of a section name to a parser constructor
#[derive(Clone, Copy)]
pub struct ParserInfo {
    pub name: &'static str,
    pub construct: Constructor,
}

impl std::fmt::Debug for ParserInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserInfo").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Top-level sections
pub const PARSERS: &[ParserInfo] = &[assets_catalog::INFO, files::INFO];

/// Find the parser registered under `name`.
#[must_use]
pub fn find_parser<'i>(infos: &'i [ParserInfo], name: &str) -> Option<&'i ParserInfo> {
    infos.iter().find(|info| info.name == name)
}

/// Interpret a section value as a list of spec mappings.
///
/// # Errors
///
/// [`TokenGenError::InvalidConfigEntry`] for `key` when the value is not a list of mappings.
pub fn spec_list(config: &Value, key: &str) -> Result<Vec<Value>, TokenGenError> {
    match config.as_array() {
        Some(entries) if entries.iter().all(Value::is_object) => Ok(entries.clone()),
        _ => Err(TokenGenError::InvalidConfigEntry {
            key: key.to_string(),
        }),
    }
}

/// Run every recognised section of `config` in key order.
pub fn run(config: &Config, ctx: ParseContext<'_>) -> Result<()> {
    for (name, section) in config.sections() {
        let Some(info) = find_parser(PARSERS, name) else {
            warn!("Couldn't find a parser for key \"{}\", skipping", name);
            continue;
        };

        info!("Running '{}' from {}", name, config.path().display());
        let parser = (info.construct)(section, ctx)
            .with_context(|| format!("Failed to configure section '{name}'"))?;
        parser.parse().with_context(|| format!("Failed to generate section '{name}'"))?;
    }
    Ok(())
}

/// Run several configuration documents in sequence, stopping at the first failure.
pub fn run_all(configs: &[Config], ctx: ParseContext<'_>) -> Result<()> {
    for config in configs {
        run(config, ctx)?;
    }
    Ok(())
}
