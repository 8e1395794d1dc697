//! Template rendering for generated artifacts
//!
//! Templates use [Tera](https://keats.github.io/tera/) syntax. Asset catalog manifests are
//! rendered from bundled templates; the files generator accepts either a bundled template
//! name or a path relative to the working directory.
//!
//! # Contexts
//!
//! | Generator | Context |
//! |---|---|
//! | asset catalog root | empty |
//! | colorset | `{params, color: {name, any, dark}}` |
//! | imageset | `{file, darkFile, params, properties}` |
//! | files | `{inputs: [{values, params}], params}` |
//!
//! # Filters
//!
//! See [`filters`] for `quote`, `escape_leading_digit` and the `prefix_*` filters.

pub mod bundled;
pub mod filters;
pub mod renderer;

pub use bundled::{BUNDLED_TEMPLATES, BundledTemplate, TemplateSource};
pub use renderer::TemplateRenderer;
