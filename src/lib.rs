//! tokengen - design token code generator
//!
//! Reads a design token document (a JSON tree whose leaves are `{type, value,
//! description?}` objects) and one or more YAML configuration files, then writes Xcode
//! asset catalogs and templated source files.
//!
//! # Architecture Overview
//!
//! ```text
//! config.yml ─┐
//!             ├─> parsers (xcassets | files) ─> processor stages ─> templating ─> files on disk
//! token.json ─┘
//! ```
//!
//! - [`token`] - the token tree: leaf detection, sub-token lookup, value extraction
//! - [`config`] - configuration documents and typed access to spec entries
//! - [`processor`] - ordered transformation stages (prefix, suffix, sort, hex to RGBA)
//! - [`parsers`] - the section registry and the colors, images and files generators
//! - [`templating`] - Tera rendering, custom filters, bundled templates
//! - [`core`] - error types and user-facing error formatting
//! - [`utils`] - naming rules and file-system helpers
//! - [`cli`] - the `tokengen` command line
//!
//! # Configuration Example
//!
//! ```yaml
//! xcassets:
//!   colors:
//!     - output: Generated/Colors.xcassets
//!       input:
//!         keys: [colors, light]
//!       adaptive:
//!         keys: [colors, dark]
//!   images:
//!     - output: Generated/Icons.xcassets
//!       input: Images/icons
//! files:
//!   - inputs:
//!       - keys: [spacing]
//!     outputs:
//!       - template: swift-constants
//!         output: Generated/Spacing.swift
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod parsers;
pub mod processor;
pub mod templating;
pub mod token;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
