//! Configuration documents and typed access to their entries
//!
//! A configuration is a YAML mapping whose top-level keys name the generators to run:
//!
//! ```yaml
//! xcassets:
//!   colors:
//!     - output: Generated/Colors.xcassets
//!       input:
//!         keys: [light, colors]
//!       adaptive:
//!         keys: [dark, colors]
//! files:
//!   - inputs:
//!       - keys: [spacing]
//!     outputs:
//!       - template: swift-constants
//!         output: Generated/Spacing.swift
//! ```
//!
//! The document is decoded into a [`serde_json::Value`] tree so that YAML and JSON input
//! share the same representation as the token document. Mapping keys iterate in sorted
//! order.

pub mod entry;

pub use entry::{ConfigEntry, Key, keys};

use anyhow::Result;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::TokenGenError;
use crate::token::json_kind;
use crate::utils::fs::read_text_file;

/// A loaded configuration document
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    path: PathBuf,
    sections: Map<String, Value>,
}

impl Config {
    /// Load a YAML configuration from disk.
    ///
    /// # Errors
    ///
    /// - [`TokenGenError::MissingConfiguration`] when `path` does not exist
    /// - [`TokenGenError::DecodeFailure`] when the YAML is invalid or not a mapping
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TokenGenError::MissingConfiguration {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = read_text_file(path)?;
        let config = Self::parse(&content, path)?;
        debug!("Loaded configuration from {} ({} sections)", path.display(), config.sections.len());
        Ok(config)
    }

    /// Decode configuration text. `path` is only used for error messages.
    ///
    /// # Errors
    ///
    /// [`TokenGenError::DecodeFailure`] when the text is not a YAML mapping.
    pub fn parse(content: &str, path: &Path) -> Result<Self, TokenGenError> {
        let decode_failure = |reason: String| TokenGenError::DecodeFailure {
            path: path.display().to_string(),
            reason,
        };

        let value: Value = serde_yaml::from_str(content).map_err(|e| decode_failure(e.to_string()))?;

        match value {
            Value::Object(sections) => Ok(Self {
                path: path.to_path_buf(),
                sections,
            }),
            other => Err(decode_failure(format!(
                "the configuration must be a mapping, found {}",
                json_kind(&other)
            ))),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Top-level sections in key order.
    #[must_use]
    pub const fn sections(&self) -> &Map<String, Value> {
        &self.sections
    }
}
