//! Post-extraction processing pipeline
//!
//! A [`Processor`] is an ordered list of pure stages. Each stage receives the current
//! collection and the options found under the `process` key of the spec entry, and returns
//! a new collection. Stages run in registration order, so `[add_prefix, sort]` sorts on
//! the prefixed names.
//!
//! ```yaml
//! - keys: [spacing]
//!   process:
//!     addPrefix: spacing
//!     sortBy: value
//! ```
//!
//! # Built-in stages
//!
//! - [`add_prefix`] / [`add_suffix`] - rename every item (any [`Named`] type)
//! - [`sort::sort_values`] - order token values by name or by a field of their value
//! - [`rgba`] - hex color decomposition used by the color catalog

pub mod rgba;
pub mod sort;

use serde_json::Value;

use crate::config::{ConfigEntry, keys};
use crate::utils::naming::upper_first;

/// A single processing stage
pub type Processable<T> = fn(Vec<T>, Option<&Value>) -> Vec<T>;

/// Items that carry a renameable name
pub trait Named {
    fn name(&self) -> &str;

    /// Return the same item under a new name.
    #[must_use]
    fn renamed(self, name: String) -> Self;
}

/// An ordered chain of [`Processable`] stages over one element type
pub struct Processor<T> {
    stages: Vec<Processable<T>>,
}

impl<T> Processor<T> {
    #[must_use]
    pub fn new(stages: Vec<Processable<T>>) -> Self {
        Self {
            stages,
        }
    }

    /// Run every stage over `initial`.
    ///
    /// `raw_options` is the whole spec entry; only its `process` mapping reaches the stages.
    pub fn process(&self, initial: Vec<T>, raw_options: Option<&Value>) -> Vec<T> {
        let options = ConfigEntry::raw(raw_options, &keys::PROCESS).filter(|v| v.is_object());
        self.stages.iter().fold(initial, |items, stage| stage(items, options))
    }
}

/// Prepend the `addPrefix` option to every name, capitalizing the original first letter.
///
/// Identity when the option is absent.
pub fn add_prefix<T: Named>(items: Vec<T>, options: Option<&Value>) -> Vec<T> {
    let Some(prefix) = ConfigEntry::optional_option::<String>(options, &keys::ADD_PREFIX) else {
        return items;
    };

    items
        .into_iter()
        .map(|item| {
            let name = format!("{prefix}{}", upper_first(item.name()));
            item.renamed(name)
        })
        .collect()
}

/// Append the `addSuffix` option to every name. Identity when the option is absent.
pub fn add_suffix<T: Named>(items: Vec<T>, options: Option<&Value>) -> Vec<T> {
    let Some(suffix) = ConfigEntry::optional_option::<String>(options, &keys::ADD_SUFFIX) else {
        return items;
    };

    items
        .into_iter()
        .map(|item| {
            let name = format!("{}{suffix}", item.name());
            item.renamed(name)
        })
        .collect()
}
