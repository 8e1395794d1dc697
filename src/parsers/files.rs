//! Templated source files (`files` section)
//!
//! Each entry resolves a list of `inputs` from the token tree and renders every template
//! in `outputs` against all of them:
//!
//! ```yaml
//! files:
//!   - inputs:
//!       - keys: [grid]
//!         params:
//!           objectName: Phone
//!       - keys: [grid, tv]
//!         keysAsNamePrefix: true
//!         process:
//!           sortBy: value
//!         params:
//!           objectName: TV
//!     outputs:
//!       - template: swift-constants
//!         output: Generated/DesignTokenGrid.swift
//!         params:
//!           objectName: DesignTokenGrid
//! ```
//!
//! Templates see `{inputs: [{values, params}, ...], params}` where `params` belongs to
//! the output being rendered. Values of each input run through `[add_prefix, sort_values]`.

use anyhow::{Context, Result};
use serde_json::{Map, Value, json};
use tracing::{debug, info};

use crate::config::{ConfigEntry, Key, keys};
use crate::core::TokenGenError;
use crate::parsers::{ParseContext, Parser, ParserInfo, spec_list};
use crate::processor::sort::sort_values;
use crate::processor::{Processor, add_prefix};
use crate::templating::{TemplateRenderer, TemplateSource};
use crate::token::TokenValue;

pub const INFO: ParserInfo = ParserInfo {
    name: "files",
    construct,
};

const KEYS: Key = Key::with_message(
    "keys",
    "\
You need to provide the key path of the values inside the design token.

Add 'keys' to every input, for example:

  files:
    - inputs:
        - keys: [grid]
          params:
            objectName: Phone
        - keys: [grid, tv]
          params:
            objectName: TV
      outputs:
        - template: Templates/Grid.tera
          output: Generated/DesignTokenGrid.swift",
);

const TEMPLATE: Key = Key::with_message(
    "template",
    "\
You need to provide a template for every output.

Use the name of a bundled template (see 'tokengen templates list') or a path
relative to the working directory. Templates use Tera syntax; the resolved
values are available as 'inputs', for example
'{% for value in inputs[0].values %}{{ value.name }}{% endfor %}'.",
);

const OUTPUT: Key = Key::with_message(
    "output",
    "\
You need to provide an output path for every rendered template.

Paths are relative to the directory tokengen runs in.",
);

const INPUTS: &str = "inputs";
const OUTPUTS: &str = "outputs";

fn processor() -> Processor<TokenValue> {
    Processor::new(vec![add_prefix, sort_values])
}

fn construct<'a>(config: &Value, ctx: ParseContext<'a>) -> Result<Box<dyn Parser + 'a>> {
    Ok(Box::new(FilesParser {
        entries: spec_list(config, "files")?,
        ctx,
    }))
}

/// Renders templates against values resolved from the token tree
pub struct FilesParser<'a> {
    entries: Vec<Value>,
    ctx: ParseContext<'a>,
}

impl FilesParser<'_> {
    /// Resolve one `inputs` element into `{values, params}`.
    fn resolve_input(&self, input: &Value) -> Result<Value> {
        let keys: Vec<String> = ConfigEntry::option(Some(input), &KEYS)?;
        let use_prefix =
            ConfigEntry::optional_option::<bool>(Some(input), &keys::KEYS_AS_NAME_PREFIX).unwrap_or(false);

        let values = self.ctx.token.values(&keys, use_prefix)?;
        let values = processor().process(values, Some(input));
        debug!("Resolved {} values for keys [{}]", values.len(), keys.join(", "));

        Ok(json!({
            "values": serde_json::to_value(values)?,
            "params": ConfigEntry::raw(Some(input), &keys::PARAMS).cloned().unwrap_or(Value::Null),
        }))
    }

    fn parse_entry(&self, entry: &Value) -> Result<()> {
        let inputs = list(entry, INPUTS)?;
        let outputs = list(entry, OUTPUTS)?;

        let resolved = inputs.iter().map(|input| self.resolve_input(input)).collect::<Result<Vec<_>>>()?;

        let mut context = Map::new();
        context.insert(INPUTS.to_string(), Value::Array(resolved));

        let renderer = TemplateRenderer::new();
        for output in outputs {
            let template: String = ConfigEntry::option(Some(output), &TEMPLATE)?;
            let destination: String = ConfigEntry::option(Some(output), &OUTPUT)?;
            let params = ConfigEntry::raw(Some(output), &keys::PARAMS).cloned().unwrap_or(Value::Null);

            let mut output_context = context.clone();
            output_context.insert(keys::PARAMS.raw_value.to_string(), params);

            let source = TemplateSource::resolve(&template, self.ctx.working_dir)?;
            let tera_context = tera::Context::from_value(Value::Object(output_context))?;
            let path = self.ctx.working_dir.join(&destination);
            renderer
                .render(&tera_context, &source, &path)
                .with_context(|| format!("Failed to generate {destination}"))?;
            info!("Generated {}", path.display());
        }
        Ok(())
    }
}

impl Parser for FilesParser<'_> {
    fn parse(&self) -> Result<()> {
        for entry in &self.entries {
            self.parse_entry(entry)?;
        }
        Ok(())
    }
}

fn list<'v>(entry: &'v Value, key: &str) -> Result<&'v Vec<Value>, TokenGenError> {
    entry.get(key).and_then(Value::as_array).ok_or_else(|| TokenGenError::InvalidConfigEntry {
        key: key.to_string(),
    })
}
