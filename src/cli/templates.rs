//! Inspect templates compiled into the binary.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use crate::templating::{BUNDLED_TEMPLATES, BundledTemplate};

#[derive(Args, Debug, Clone)]
pub struct TemplatesCommand {
    #[command(subcommand)]
    command: Option<TemplatesSubcommands>,
}

#[derive(Subcommand, Debug, Clone)]
enum TemplatesSubcommands {
    /// List bundled templates
    List,
}

impl TemplatesCommand {
    pub fn execute(self) -> Result<()> {
        match self.command {
            Some(TemplatesSubcommands::List) | None => {
                print!("{}", format_list(BUNDLED_TEMPLATES));
                Ok(())
            }
        }
    }
}

fn format_list(templates: &[BundledTemplate]) -> String {
    let width = templates.iter().map(|t| t.name.len()).max().unwrap_or(0);

    let mut out = format!("{}\n", "Bundled templates:".bold());
    for template in templates {
        out.push_str(&format!(
            "  {}  {}\n",
            format!("{:width$}", template.name).green(),
            template.description
        ));
    }
    out.push_str("\nReference a template by name in the 'template' key of a files output.\n");
    out
}
