//! The design token tree
//!
//! A design token document is an arbitrarily nested JSON object. Any object that decodes
//! as an [`Entry`] (`type` string, `value` of any shape, optional `description` string) is
//! a leaf; every other object is a group that traversal recurses into. Scalars and arrays
//! that are not inside a leaf are ignored.
//!
//! A group that happens to have `type` and `value` keys is treated as a leaf. This is the
//! documented detection rule, not an accident of the implementation.
//!
//! # Naming
//!
//! [`DesignToken::extract_values`] names leaves in one of two ways:
//!
//! - **prefix mode**: the names of the enclosing groups are accumulated into a camelCase
//!   identifier, `lower_first(prefix + upper_first(key))`, so `{colors: {primary: ..}}`
//!   extracted with prefix `""` yields `colorsPrimary`
//! - **plain mode**: the leaf's own key is used as-is
//!
//! # Examples
//!
//! ```rust
//! use tokengen_cli::token::DesignToken;
//! use serde_json::json;
//!
//! let token = DesignToken::from_value(json!({
//!     "colors": { "primary": { "type": "color", "value": "#FF0000FF" } }
//! }))
//! .unwrap();
//!
//! let values = token.values(&["colors".to_string()], false).unwrap();
//! assert_eq!(values[0].name, "primary");
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

use crate::core::TokenGenError;
use crate::processor::Named;
use crate::utils::fs::read_text_file;
use crate::utils::naming::{lower_first, upper_first};

/// A leaf of the token tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Token type as declared in the document (`color`, `spacing`, ...)
    #[serde(rename = "type")]
    pub kind: String,

    /// Raw value. Objects are kept as objects, everything else verbatim.
    pub value: Value,
}

impl Entry {
    /// Try to read `node` as a leaf.
    ///
    /// Extra keys (for example `$extensions`) do not prevent detection.
    #[must_use]
    pub fn decode(node: &Value) -> Option<Self> {
        if !node.is_object() {
            return None;
        }
        Entry::deserialize(node).ok()
    }
}

/// A named leaf produced by traversal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenValue {
    pub name: String,
    pub entry: Entry,
}

impl Named for TokenValue {
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

/// The decoded design token document
///
/// Read-only for the duration of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignToken {
    root: Map<String, Value>,
}

impl DesignToken {
    /// Load and decode a token document from disk.
    ///
    /// # Errors
    ///
    /// - [`TokenGenError::MissingToken`] when `path` does not exist
    /// - [`TokenGenError::DecodeFailure`] when the file is not JSON or its root is not an object
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TokenGenError::MissingToken {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = read_text_file(path)?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| TokenGenError::DecodeFailure {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!("Loaded design token from {}", path.display());
        Self::from_value(value).map_err(|_| {
            TokenGenError::DecodeFailure {
                path: path.display().to_string(),
                reason: "the token document must be a JSON object".to_string(),
            }
            .into()
        })
    }

    /// Wrap an already decoded document.
    ///
    /// # Errors
    ///
    /// Returns [`TokenGenError::DecodeFailure`] if `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self, TokenGenError> {
        match value {
            Value::Object(root) => Ok(Self {
                root,
            }),
            other => Err(TokenGenError::DecodeFailure {
                path: "<token>".to_string(),
                reason: format!("expected an object, found {}", json_kind(&other)),
            }),
        }
    }

    #[must_use]
    pub const fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Walk `keys` from the root and return the mapping at the end of the path.
    ///
    /// An empty path returns the root.
    ///
    /// # Errors
    ///
    /// [`TokenGenError::SubtokenNotFound`] at the first key that is absent or whose value
    /// is not an object.
    pub fn sub_token(&self, keys: &[String]) -> Result<&Map<String, Value>, TokenGenError> {
        let mut current = &self.root;
        for key in keys {
            current = current.get(key).and_then(Value::as_object).ok_or_else(|| {
                TokenGenError::SubtokenNotFound {
                    keys: keys.to_vec(),
                }
            })?;
        }
        Ok(current)
    }

    /// Collect every leaf below `dict`.
    ///
    /// Output follows the key order of the mapping, which is sorted.
    #[must_use]
    pub fn extract_values(
        dict: &Map<String, Value>,
        prefix: &str,
        use_prefix: bool,
    ) -> Vec<TokenValue> {
        let mut values = Vec::new();
        Self::collect(dict, prefix, use_prefix, &mut values);
        values
    }

    fn collect(
        dict: &Map<String, Value>,
        prefix: &str,
        use_prefix: bool,
        values: &mut Vec<TokenValue>,
    ) {
        for (key, node) in dict {
            let Some(children) = node.as_object() else {
                continue;
            };

            let name = if use_prefix {
                lower_first(&format!("{prefix}{}", upper_first(key)))
            } else {
                key.clone()
            };

            match Entry::decode(node) {
                Some(entry) => values.push(TokenValue {
                    name,
                    entry,
                }),
                None => Self::collect(children, &name, use_prefix, values),
            }
        }
    }

    /// Resolve `keys` and extract the leaves below it.
    ///
    /// In prefix mode the starting prefix is empty, so names begin with the first key
    /// below the resolved mapping.
    ///
    /// # Errors
    ///
    /// Propagates [`TokenGenError::SubtokenNotFound`] from [`sub_token`](Self::sub_token).
    pub fn values(&self, keys: &[String], use_prefix: bool) -> Result<Vec<TokenValue>, TokenGenError> {
        let dict = self.sub_token(keys)?;
        Ok(Self::extract_values(dict, "", use_prefix))
    }
}

pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
