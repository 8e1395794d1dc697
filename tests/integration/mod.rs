//! Integration test suite for tokengen
//!
//! End-to-end tests that run the `tokengen` binary in a temporary directory.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! - **cli**: argument handling, error reporting, `templates list`
//! - **colors**: color catalogs
//! - **files**: templated source files
//! - **images**: image catalogs

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod cli;
mod colors;
mod files;
mod images;
