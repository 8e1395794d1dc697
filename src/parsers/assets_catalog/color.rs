//! Color sets (`xcassets.colors`)
//!
//! Light ("any") and dark values are read from two places in the token tree and paired
//! by their derived names:
//!
//! - a pair whose hex strings are identical produces a color without a dark variant
//! - an any value without a dark counterpart produces a color without a dark variant
//! - a dark value without an any counterpart produces a color of its own, using the dark
//!   hex as its only appearance
//!
//! Colors are sorted by name and then run through `[add_prefix, add_suffix, hex_to_rgba]`.

use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use super::{CONTENTS, OUTPUT, entry_params, write_root_manifest};
use crate::config::{ConfigEntry, Key, keys};
use crate::core::TokenGenError;
use crate::parsers::{ParseContext, Parser, ParserInfo, spec_list};
use crate::processor::{Named, Processor, add_prefix, add_suffix, rgba};
use crate::templating::{TemplateRenderer, TemplateSource, bundled};
use crate::token::{Entry, TokenValue};

pub const INFO: ParserInfo = ParserInfo {
    name: "colors",
    construct,
};

const INPUT: Key = Key::with_message(
    "input",
    "\
You need to provide an input for the color catalog.

Add an 'input' block pointing into the design token, for example:

  xcassets:
    colors:
      - output: Generated/Colors.xcassets
        input:
          keys: [light, colors]
          keysAsNamePrefix: true
        adaptive:
          keys: [dark, colors]",
);

const KEYS: Key = Key::with_message(
    "keys",
    "\
You need to provide the key path of the colors inside the design token.

Add 'keys' to the input (and adaptive) block, for example:

  xcassets:
    colors:
      - output: Generated/Colors.xcassets
        input:
          keys: [light, colors]
        adaptive:
          keys: [dark, colors]",
);

const ADAPTIVE: Key = Key::new("adaptive");

/// A color with its light and optional dark appearance
///
/// `any` and `dark` start out as `{hex}` and gain an `rgba` breakdown during processing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color {
    pub name: String,
    pub any: Map<String, Value>,
    pub dark: Option<Map<String, Value>>,
}

impl Color {
    /// Build a color from token entries.
    ///
    /// `dark` is dropped when it is not a string or matches the any hex exactly.
    ///
    /// # Errors
    ///
    /// [`TokenGenError::MissingColorValue`] when the any value is not a string.
    pub fn from_entries(name: &str, any: &Entry, dark: Option<&Entry>) -> Result<Self, TokenGenError> {
        let any_hex = any.value.as_str().ok_or_else(|| TokenGenError::MissingColorValue {
            name: name.to_string(),
        })?;

        let dark = dark
            .and_then(|entry| entry.value.as_str())
            .filter(|dark_hex| *dark_hex != any_hex)
            .map(hex_map);

        Ok(Self {
            name: name.to_string(),
            any: hex_map(any_hex),
            dark,
        })
    }
}

impl Named for Color {
    fn name(&self) -> &str {
        &self.name
    }

    fn renamed(self, name: String) -> Self {
        Self {
            name,
            ..self
        }
    }
}

fn hex_map(hex: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("hex".to_string(), Value::String(hex.to_string()));
    map
}

/// Pair any and dark values by name. The result is sorted by name.
///
/// # Errors
///
/// [`TokenGenError::MissingColorValue`] for a value that is not a hex string.
pub fn combine_colors(any: Vec<TokenValue>, dark: Vec<TokenValue>) -> Result<Vec<Color>, TokenGenError> {
    let mut dark_by_name: BTreeMap<String, Entry> =
        dark.into_iter().map(|value| (value.name, value.entry)).collect();

    let mut colors = Vec::with_capacity(any.len() + dark_by_name.len());
    for value in any {
        let dark_entry = dark_by_name.remove(&value.name);
        colors.push(Color::from_entries(&value.name, &value.entry, dark_entry.as_ref())?);
    }

    for (name, entry) in &dark_by_name {
        colors.push(Color::from_entries(name, entry, None)?);
    }

    colors.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(colors)
}

/// Processing stage adding `rgba` to both appearances of every color.
pub fn hex_to_rgba(colors: Vec<Color>, _options: Option<&Value>) -> Vec<Color> {
    colors
        .into_iter()
        .map(|color| Color {
            any: rgba::with_rgba(color.any),
            dark: color.dark.map(rgba::with_rgba),
            ..color
        })
        .collect()
}

fn processor() -> Processor<Color> {
    Processor::new(vec![add_prefix, add_suffix, hex_to_rgba])
}

fn construct<'a>(config: &Value, ctx: ParseContext<'a>) -> Result<Box<dyn Parser + 'a>> {
    Ok(Box::new(ColorCatalogParser {
        entries: spec_list(config, "colors")?,
        ctx,
    }))
}

/// Generates one color catalog per spec entry
pub struct ColorCatalogParser<'a> {
    entries: Vec<Value>,
    ctx: ParseContext<'a>,
}

impl ColorCatalogParser<'_> {
    fn resolve(&self, block: &Value, use_prefix: bool) -> Result<Vec<TokenValue>> {
        let keys: Vec<String> = ConfigEntry::option(Some(block), &KEYS)?;
        Ok(self.ctx.token.values(&keys, use_prefix)?)
    }

    fn parse_entry(&self, entry: &Value) -> Result<()> {
        let output: String = ConfigEntry::option(Some(entry), &OUTPUT)?;
        let input = Value::Object(ConfigEntry::option(Some(entry), &INPUT)?);
        let use_prefix =
            ConfigEntry::optional_option::<bool>(Some(&input), &keys::KEYS_AS_NAME_PREFIX).unwrap_or(false);

        let any_values = self.resolve(&input, use_prefix)?;
        let dark_values = match ConfigEntry::optional_option::<Map<String, Value>>(Some(entry), &ADAPTIVE) {
            Some(adaptive) => {
                let adaptive = Value::Object(adaptive);
                let dark_prefix =
                    ConfigEntry::optional_option::<bool>(Some(&adaptive), &keys::KEYS_AS_NAME_PREFIX)
                        .unwrap_or(use_prefix);
                self.resolve(&adaptive, dark_prefix)?
            }
            None => Vec::new(),
        };
        debug!("Resolved {} any and {} dark color values", any_values.len(), dark_values.len());

        let colors = processor().process(combine_colors(any_values, dark_values)?, Some(entry));

        let output_path = self.ctx.working_dir.join(&output);
        write_catalog(&colors, &output_path, &entry_params(entry))?;
        info!("Generated {} colors in {}", colors.len(), output_path.display());
        Ok(())
    }
}

impl Parser for ColorCatalogParser<'_> {
    fn parse(&self) -> Result<()> {
        for entry in &self.entries {
            self.parse_entry(entry)?;
        }
        Ok(())
    }
}

fn write_catalog(colors: &[Color], output: &Path, params: &Value) -> Result<()> {
    let renderer = TemplateRenderer::new();
    write_root_manifest(&renderer, output)?;

    let source = TemplateSource::bundled(bundled::COLOR_CONTENTS)?;
    for color in colors {
        ensure_decoded(color, &color.any)?;
        if let Some(dark) = &color.dark {
            ensure_decoded(color, dark)?;
        }

        let context = tera::Context::from_serialize(json!({
            "params": params,
            "color": color,
        }))?;
        let path = output.join(format!("{}.colorset", color.name)).join(CONTENTS);
        renderer.render(&context, &source, &path)?;
    }
    Ok(())
}

/// Fail with the offending hex when `hex_to_rgba` could not decode an appearance.
fn ensure_decoded(color: &Color, appearance: &Map<String, Value>) -> Result<(), TokenGenError> {
    if appearance.contains_key("rgba") {
        return Ok(());
    }
    Err(TokenGenError::MalformedColorValue {
        name: color.name.clone(),
        hex: appearance.get("hex").and_then(Value::as_str).unwrap_or_default().to_string(),
    })
}
