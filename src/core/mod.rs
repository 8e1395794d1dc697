//! Core types shared by every tokengen module
//!
//! Currently this is the error taxonomy and the user-facing error reporting used by the
//! CLI. See [`error`] for details.

pub mod error;

pub use error::{ErrorContext, TokenGenError, user_friendly_error};
