//! Typed access to untyped configuration mappings
//!
//! Every generator receives its spec entries as raw [`serde_json::Value`]s. Values are read
//! through a [`Key`], which carries the remediation text shown to the user when a required
//! key is missing or has the wrong type.
//!
//! Typing follows serde: a key matches `T` when its value deserializes as `T`, so a YAML
//! list of strings reads as `Vec<String>` and a nested mapping as
//! `Map<String, Value>`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::TokenGenError;

/// A configuration key with the guidance shown when it is required but missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub raw_value: &'static str,
    pub error_message: &'static str,
}

impl Key {
    /// A key that is only ever read optionally.
    #[must_use]
    pub const fn new(raw_value: &'static str) -> Self {
        Self {
            raw_value,
            error_message: "",
        }
    }

    /// A key with remediation text for the required case.
    #[must_use]
    pub const fn with_message(raw_value: &'static str, error_message: &'static str) -> Self {
        Self {
            raw_value,
            error_message,
        }
    }
}

/// Keys shared by several generators
pub mod keys {
    use super::Key;

    /// Namespace for processing-stage options
    pub const PROCESS: Key = Key::new("process");
    pub const ADD_PREFIX: Key = Key::new("addPrefix");
    pub const ADD_SUFFIX: Key = Key::new("addSuffix");
    pub const SORT_BY: Key = Key::new("sortBy");
    pub const KEYS_AS_NAME_PREFIX: Key = Key::new("keysAsNamePrefix");
    pub const PARAMS: Key = Key::new("params");
}

/// Accessor functions over raw configuration values
pub struct ConfigEntry;

impl ConfigEntry {
    /// Return the value under `key` if `map` is a mapping containing it.
    #[must_use]
    pub fn raw<'a>(map: Option<&'a Value>, key: &Key) -> Option<&'a Value> {
        map.and_then(Value::as_object).and_then(|m| m.get(key.raw_value))
    }

    /// Read `key` as `T`, returning `None` when absent or of another shape.
    #[must_use]
    pub fn optional_option<T: DeserializeOwned>(map: Option<&Value>, key: &Key) -> Option<T> {
        Self::raw(map, key).and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Read `key` as `T`.
    ///
    /// # Errors
    ///
    /// [`TokenGenError::MissingRequiredKey`] carrying the key's guidance when `map` is not a
    /// mapping, the key is absent, or its value does not have the shape of `T`.
    pub fn option<T: DeserializeOwned>(map: Option<&Value>, key: &Key) -> Result<T, TokenGenError> {
        Self::optional_option(map, key).ok_or_else(|| TokenGenError::MissingRequiredKey {
            key: key.raw_value.to_string(),
            guidance: key.error_message.to_string(),
        })
    }
}
