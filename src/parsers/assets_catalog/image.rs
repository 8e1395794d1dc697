//! Image sets (`xcassets.images`)
//!
//! Every file in the input directory becomes an imageset named after the file (camelCase
//! rule, extension dropped). A file with the same derived name in the `adaptive`
//! directory is added as the dark appearance; dark files without a light counterpart are
//! ignored.
//!
//! ```yaml
//! xcassets:
//!   images:
//!     - output: Generated/Icons.xcassets
//!       input: Images/icons
//!       adaptive:
//!         input: Images/icons-dark
//!       properties:
//!         preserves-vector-representation: true
//! ```

use anyhow::Result;
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{CONTENTS, OUTPUT, entry_params, write_root_manifest};
use crate::config::{ConfigEntry, Key};
use crate::core::TokenGenError;
use crate::parsers::{ParseContext, Parser, ParserInfo, spec_list};
use crate::processor::{Named, Processor, add_prefix, add_suffix};
use crate::templating::{TemplateRenderer, TemplateSource, bundled};
use crate::utils::fs::{list_files_sorted, replace_file};
use crate::utils::naming::camel_case_file_name;

pub const INFO: ParserInfo = ParserInfo {
    name: "images",
    construct,
};

const INPUT: Key = Key::with_message(
    "input",
    "\
You need to provide an input directory for the image catalog.

Add 'input' to the catalog entry in your configuration, for example:

  xcassets:
    images:
      - output: Generated/Icons.xcassets
        input: Images/icons
        properties:
          preserves-vector-representation: true
          template-rendering-intent: template

Paths are relative to the directory tokengen runs in.",
);

const ADAPTIVE: Key = Key::new("adaptive");
const PROPERTIES: Key = Key::new("properties");

/// An image with its light file and optional dark file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub name: String,
    pub any: PathBuf,
    pub dark: Option<PathBuf>,
}

impl Image {
    /// File name inside the imageset: `name.ext`
    #[must_use]
    pub fn file(&self) -> String {
        file_name(&self.name, &self.any)
    }

    /// File name of the dark variant: `nameDark.ext`
    #[must_use]
    pub fn dark_file(&self) -> Option<String> {
        self.dark.as_ref().map(|dark| file_name(&format!("{}Dark", self.name), dark))
    }

    /// Folder name: `name.imageset`
    #[must_use]
    pub fn imageset(&self) -> String {
        format!("{}.imageset", self.name)
    }
}

impl Named for Image {
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

fn file_name(stem: &str, source: &Path) -> String {
    match source.extension() {
        Some(extension) => format!("{stem}.{}", extension.to_string_lossy()),
        None => stem.to_string(),
    }
}

/// Pair light files with dark files of the same derived name.
#[must_use]
pub fn combine_images(any: Vec<PathBuf>, dark: Vec<PathBuf>) -> Vec<Image> {
    let mut dark_by_name: HashMap<String, PathBuf> =
        dark.into_iter().map(|path| (camel_case_file_name(&path), path)).collect();

    any.into_iter()
        .map(|path| {
            let name = camel_case_file_name(&path);
            let dark = dark_by_name.remove(&name);
            Image {
                name,
                any: path,
                dark,
            }
        })
        .collect()
}

fn processor() -> Processor<Image> {
    Processor::new(vec![add_prefix, add_suffix])
}

fn construct<'a>(config: &Value, ctx: ParseContext<'a>) -> Result<Box<dyn Parser + 'a>> {
    Ok(Box::new(ImageCatalogParser {
        entries: spec_list(config, "images")?,
        ctx,
    }))
}

/// Generates one image catalog per spec entry
pub struct ImageCatalogParser<'a> {
    entries: Vec<Value>,
    ctx: ParseContext<'a>,
}

impl ImageCatalogParser<'_> {
    /// The dark directory: either `adaptive: {input: dir}` or `adaptive: dir`.
    fn adaptive_dir(entry: &Value) -> Result<Option<String>, TokenGenError> {
        match ConfigEntry::raw(Some(entry), &ADAPTIVE) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(dir)) => Ok(Some(dir.clone())),
            Some(adaptive @ Value::Object(_)) => ConfigEntry::option(Some(adaptive), &INPUT).map(Some),
            Some(_) => Err(TokenGenError::InvalidConfigEntry {
                key: ADAPTIVE.raw_value.to_string(),
            }),
        }
    }

    fn parse_entry(&self, entry: &Value) -> Result<()> {
        let output: String = ConfigEntry::option(Some(entry), &OUTPUT)?;
        let input: String = ConfigEntry::option(Some(entry), &INPUT)?;

        let any_files = list_files_sorted(&self.ctx.working_dir.join(&input))?;
        let dark_files = match Self::adaptive_dir(entry)? {
            Some(dir) => list_files_sorted(&self.ctx.working_dir.join(dir))?,
            None => Vec::new(),
        };
        debug!("Found {} images and {} dark images", any_files.len(), dark_files.len());

        let images = processor().process(combine_images(any_files, dark_files), Some(entry));

        let output_path = self.ctx.working_dir.join(&output);
        let properties = ConfigEntry::optional_option::<Map<String, Value>>(Some(entry), &PROPERTIES)
            .unwrap_or_default();
        write_catalog(&images, &output_path, &entry_params(entry), &properties)?;
        info!("Generated {} images in {}", images.len(), output_path.display());
        Ok(())
    }
}

impl Parser for ImageCatalogParser<'_> {
    fn parse(&self) -> Result<()> {
        for entry in &self.entries {
            self.parse_entry(entry)?;
        }
        Ok(())
    }
}

fn write_catalog(
    images: &[Image],
    output: &Path,
    params: &Value,
    properties: &Map<String, Value>,
) -> Result<()> {
    let renderer = TemplateRenderer::new();
    write_root_manifest(&renderer, output)?;

    let source = TemplateSource::bundled(bundled::IMAGE_CONTENTS)?;
    for image in images {
        let imageset = output.join(image.imageset());
        let file = image.file();
        replace_file(&image.any, &imageset.join(&file))?;

        let dark_file = image.dark_file();
        if let (Some(dark), Some(dark_file)) = (&image.dark, &dark_file) {
            replace_file(dark, &imageset.join(dark_file))?;
        }

        let context = tera::Context::from_serialize(json!({
            "file": file,
            "darkFile": dark_file,
            "params": params,
            "properties": properties,
        }))?;
        renderer.render(&context, &source, &imageset.join(CONTENTS))?;
    }
    Ok(())
}
