//! Template rendering engine with Tera.
//!
//! Every render uses a fresh [`Tera`] instance with the custom filters registered, so
//! rendering has no state shared between outputs.

use anyhow::Result;
use regex::Regex;
use std::path::Path;
use strsim::levenshtein;
use tera::{Context as TeraContext, Tera};
use tracing::debug;

use super::bundled::TemplateSource;
use super::filters;
use crate::core::TokenGenError;
use crate::utils::fs::write_text_file;

const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Renders templates and writes the results to disk
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render `source` against `context` and write the result to `output`.
    ///
    /// Parent directories of `output` are created; an existing file is overwritten.
    pub fn render(&self, context: &TeraContext, source: &TemplateSource, output: &Path) -> Result<()> {
        let name = source.name();
        debug!("Rendering template '{}' to {}", name, output.display());

        let content = source.load()?;
        let rendered = self.render_str(&content, context, &name)?;
        write_text_file(output, &rendered)
    }

    /// Render template text. `template_name` is only used in error messages.
    ///
    /// # Errors
    ///
    /// [`TokenGenError::TemplateRender`] with the formatted Tera error chain. Unknown
    /// variables get "did you mean" suggestions from the top-level context keys.
    pub fn render_str(
        &self,
        content: &str,
        context: &TeraContext,
        template_name: &str,
    ) -> Result<String, TokenGenError> {
        let mut tera = Tera::default();
        filters::register_filters(&mut tera);

        tera.render_str(content, context).map_err(|error| {
            let mut message = Self::format_tera_error(&error);

            if let Some(variable) = Self::extract_variable_name(&message) {
                let available = Self::available_variables(context);
                let similar = Self::find_similar_variables(&variable, &available);
                if !similar.is_empty() {
                    message.push_str(&format!("\n  Did you mean: {}?", similar.join(", ")));
                }
            }

            TokenGenError::TemplateRender {
                template: template_name.to_string(),
                message,
            }
        })
    }

    /// Walk the Tera error chain and drop the internal one-off template name.
    pub fn format_tera_error(error: &tera::Error) -> String {
        use std::error::Error;

        let mut all_messages = vec![error.to_string()];
        let mut current_error: Option<&dyn Error> = error.source();
        while let Some(err) = current_error {
            all_messages.push(err.to_string());
            current_error = err.source();
        }

        let messages: Vec<String> = all_messages
            .into_iter()
            .map(|msg| {
                msg.replace("while rendering '__tera_one_off'", "")
                    .replace("Failed to render '__tera_one_off'", "Template rendering failed")
                    .replace("Failed to parse '__tera_one_off'", "Template syntax error")
                    .replace("'__tera_one_off'", "template")
                    .trim()
                    .to_string()
            })
            .filter(|msg| {
                !msg.is_empty() && msg != "Template rendering failed" && msg != "Template syntax error"
            })
            .collect();

        if messages.is_empty() {
            "Template syntax error".to_string()
        } else {
            messages.join("\n  -> ")
        }
    }

    fn extract_variable_name(message: &str) -> Option<String> {
        let re = Regex::new(r"Variable `([^`]+)` not found").ok()?;
        re.captures(message).and_then(|caps| caps.get(1)).map(|m| m.as_str().to_string())
    }

    fn available_variables(context: &TeraContext) -> Vec<String> {
        match context.clone().into_json() {
            serde_json::Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    fn find_similar_variables(target: &str, available: &[String]) -> Vec<String> {
        let root = target.split('.').next().unwrap_or(target);
        let mut scored: Vec<(String, usize)> =
            available.iter().map(|var| (var.clone(), levenshtein(root, var))).collect();
        scored.sort_by_key(|(_, distance)| *distance);

        scored
            .into_iter()
            .filter(|(var, distance)| {
                var != root && *distance <= root.len() * SIMILARITY_THRESHOLD_PERCENT / 100
            })
            .take(3)
            .map(|(var, _)| var)
            .collect()
    }
}
