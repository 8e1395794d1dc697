//! Utility modules shared across tokengen
//!
//! - [`fs`] - directory creation, file writes and copies, directory listing
//! - [`naming`] - the camelCase naming rule and first-letter case helpers

pub mod fs;
pub mod naming;

pub use fs::{ensure_dir, ensure_parent_dir, list_files_sorted, replace_file, write_text_file};
pub use naming::{camel_case, camel_case_file_name, lower_first, upper_first};
