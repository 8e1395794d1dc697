//! Xcode asset catalog generation (`xcassets` section)
//!
//! ```yaml
//! xcassets:
//!   colors:
//!     - output: Generated/Colors.xcassets
//!       input:
//!         keys: [light, colors]
//!       adaptive:
//!         keys: [dark, colors]
//!   images:
//!     - output: Generated/Icons.xcassets
//!       input: Images/icons
//! ```
//!
//! Unlike the top level, an unrecognised key inside `xcassets` is an error.

pub mod color;
pub mod image;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

use super::{ParseContext, Parser, ParserInfo, find_parser};
use crate::config::Key;
use crate::core::TokenGenError;
use crate::templating::{TemplateRenderer, TemplateSource, bundled};

/// Catalog sub-sections
pub const CATALOG_PARSERS: &[ParserInfo] =
    &[color::INFO, image::INFO];

/// Manifest file name used at every level of a catalog
pub const CONTENTS: &str = "Contents.json";

pub(crate) const OUTPUT: Key = Key::with_message(
    "output",
    "\
You need to provide an output path for the asset catalog.

Add 'output' to the catalog entry in your configuration, for example:

  xcassets:
    colors:
      - output: Generated/Colors.xcassets
        input:
          keys: [light, colors]
          keysAsNamePrefix: true
        adaptive:
          keys: [dark, colors]

Paths are relative to the directory tokengen runs in.",
);

pub const INFO: ParserInfo = ParserInfo {
    name: "xcassets",
    construct,
};

fn construct<'a>(config: &Value, ctx: ParseContext<'a>) -> Result<Box<dyn Parser + 'a>> {
    Ok(Box::new(AssetsCatalogParser::new(config, ctx)?))
}

/// Dispatches `colors` and `images` to their parsers
pub struct AssetsCatalogParser<'a> {
    sections: Map<String, Value>,
    ctx: ParseContext<'a>,
}

impl<'a> AssetsCatalogParser<'a> {
    /// # Errors
    ///
    /// [`TokenGenError::InvalidConfigEntry`] when the section is not a mapping.
    pub fn new(config: &Value, ctx: ParseContext<'a>) -> Result<Self, TokenGenError> {
        let sections = config.as_object().cloned().ok_or_else(|| TokenGenError::InvalidConfigEntry {
            key: "xcassets".to_string(),
        })?;

        Ok(Self {
            sections,
            ctx,
        })
    }
}

impl Parser for AssetsCatalogParser<'_> {
    fn parse(&self) -> Result<()> {
        for (name, section) in &self.sections {
            let info = find_parser(CATALOG_PARSERS, name).ok_or_else(|| {
                TokenGenError::InvalidConfigEntry {
                    key: name.clone(),
                }
            })?;

            let parser = (info.construct)(section, self.ctx)?;
            parser.parse().with_context(|| format!("Failed to generate xcassets '{name}'"))?;
        }
        Ok(())
    }
}

/// Write the catalog's root `Contents.json`.
pub(crate) fn write_root_manifest(renderer: &TemplateRenderer, output: &Path) -> Result<()> {
    let source = TemplateSource::bundled(bundled::INFO_CONTENTS)?;
    renderer.render(&tera::Context::new(), &source, &output.join(CONTENTS))
}

/// `params` of a catalog entry, or an empty mapping.
pub(crate) fn entry_params(entry: &Value) -> Value {
    entry.get("params").cloned().unwrap_or_else(|| Value::Object(Map::new()))
}
