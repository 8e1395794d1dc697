//! Templates compiled into the binary and template lookup.
//!
//! A template reference from the configuration is resolved against the bundled set by
//! logical name first, then as a path relative to the working directory.

use anyhow::Result;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::core::TokenGenError;
use crate::utils::fs::read_text_file;

/// A template shipped with tokengen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundledTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub content: &'static str,
}

/// Asset catalog root manifest
pub const INFO_CONTENTS: &str = "info-contents";
/// Colorset manifest
pub const COLOR_CONTENTS: &str = "color-contents";
/// Imageset manifest
pub const IMAGE_CONTENTS: &str = "image-contents";

pub const BUNDLED_TEMPLATES: &[BundledTemplate] = &[
    BundledTemplate {
        name: INFO_CONTENTS,
        description: "Asset catalog root Contents.json",
        content: include_str!("../../templates/info-contents.tera"),
    },
    BundledTemplate {
        name: COLOR_CONTENTS,
        description: "Colorset Contents.json with optional dark appearance",
        content: include_str!("../../templates/color-contents.tera"),
    },
    BundledTemplate {
        name: IMAGE_CONTENTS,
        description: "Imageset Contents.json with optional dark appearance and properties",
        content: include_str!("../../templates/image-contents.tera"),
    },
    BundledTemplate {
        name: "swift-constants",
        description: "Swift enum of static constants, one nested enum per input",
        content: include_str!("../../templates/swift-constants.tera"),
    },
    BundledTemplate {
        name: "swiftui-colors",
        description: "SwiftUI Color extension referencing asset catalog colors",
        content: include_str!("../../templates/swiftui-colors.tera"),
    },
];

/// Look up a bundled template by logical name.
#[must_use]
pub fn find(name: &str) -> Option<&'static BundledTemplate> {
    BUNDLED_TEMPLATES.iter().find(|template| template.name == name)
}

/// Where a template's text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Bundled(&'static BundledTemplate),
    File(PathBuf),
}

impl TemplateSource {
    /// Resolve a configuration template reference.
    ///
    /// # Errors
    ///
    /// [`TokenGenError::MissingTemplate`] when `reference` is neither a bundled name nor an
    /// existing file below `working_dir`.
    pub fn resolve(reference: &str, working_dir: &Path) -> Result<Self, TokenGenError> {
        if let Some(template) = find(reference) {
            return Ok(Self::Bundled(template));
        }

        let path = working_dir.join(reference);
        if path.is_file() {
            Ok(Self::File(path))
        } else {
            Err(TokenGenError::MissingTemplate {
                name: reference.to_string(),
            })
        }
    }

    /// A bundled template that must exist.
    ///
    /// # Errors
    ///
    /// [`TokenGenError::MissingTemplate`] for an unknown name.
    pub fn bundled(name: &str) -> Result<Self, TokenGenError> {
        find(name).map(Self::Bundled).ok_or_else(|| TokenGenError::MissingTemplate {
            name: name.to_string(),
        })
    }

    /// Name used in logs and error messages.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Bundled(template) => template.name.to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Read the template text.
    pub fn load(&self) -> Result<Cow<'static, str>> {
        match self {
            Self::Bundled(template) => Ok(Cow::Borrowed(template.content)),
            Self::File(path) => Ok(Cow::Owned(read_text_file(path)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    #[test]
    fn test_bundled_names_unique() {
        let names: HashSet<&str> = BUNDLED_TEMPLATES.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), BUNDLED_TEMPLATES.len());
        assert!(find(INFO_CONTENTS).is_some());
        assert!(find(COLOR_CONTENTS).is_some());
        assert!(find(IMAGE_CONTENTS).is_some());
    }

    #[test]
    fn test_resolve_prefers_bundled() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("swift-constants"), "local").unwrap();

        let source = TemplateSource::resolve("swift-constants", temp.path()).unwrap();
        assert!(matches!(source, TemplateSource::Bundled(_)));
    }

    #[test]
    fn test_resolve_falls_back_to_file() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("Templates")).unwrap();
        std::fs::write(temp.path().join("Templates/Grid.tera"), "{{ inputs | length }}").unwrap();

        let source = TemplateSource::resolve("Templates/Grid.tera", temp.path()).unwrap();
        assert_eq!(source, TemplateSource::File(temp.path().join("Templates/Grid.tera")));
        assert_eq!(source.load().unwrap(), "{{ inputs | length }}");
    }

    #[test]
    fn test_resolve_missing() {
        let temp = TempDir::new().unwrap();
        let err = TemplateSource::resolve("Templates/Nope.tera", temp.path()).unwrap_err();
        assert!(matches!(err, TokenGenError::MissingTemplate { name } if name == "Templates/Nope.tera"));
        assert!(TemplateSource::bundled("nope").is_err());
    }
}
