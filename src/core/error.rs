//! Error handling for tokengen
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** ([`TokenGenError`]) so library code and tests can match on
//!    the exact failure
//! 2. **User-friendly reporting** ([`ErrorContext`]) so the CLI can print the cause together
//!    with remediation text instead of a bare message
//!
//! Library functions return [`TokenGenError`] directly or wrap it in [`anyhow::Error`]
//! with additional context. At the CLI boundary [`user_friendly_error`] recovers the typed
//! error and attaches details and a suggestion.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tokengen_cli::core::{TokenGenError, user_friendly_error};
//!
//! let error = anyhow::Error::from(TokenGenError::MissingToken {
//!     path: "token.json".to_string(),
//! });
//! user_friendly_error(error).display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for tokengen operations
///
/// Document loading failures ([`MissingConfiguration`], [`MissingToken`],
/// [`DecodeFailure`]) abort a run before any parser starts. Everything else is raised
/// while a parser walks its spec list and aborts the remainder of the run.
///
/// [`MissingConfiguration`]: TokenGenError::MissingConfiguration
/// [`MissingToken`]: TokenGenError::MissingToken
/// [`DecodeFailure`]: TokenGenError::DecodeFailure
#[derive(Error, Debug)]
pub enum TokenGenError {
    /// The configuration file does not exist
    #[error("Configuration file not found: {path}")]
    MissingConfiguration {
        /// Path that was looked up
        path: String,
    },

    /// The design token file does not exist
    #[error("Design token file not found: {path}")]
    MissingToken {
        /// Path that was looked up
        path: String,
    },

    /// A document was read but does not have the expected shape
    #[error("Failed to decode {path}: {reason}")]
    DecodeFailure {
        /// Path of the document
        path: String,
        /// Parser message or shape mismatch description
        reason: String,
    },

    /// A required configuration key is absent or has the wrong type
    ///
    /// `guidance` carries the remediation text attached to the key.
    #[error("Missing required configuration key '{key}'")]
    MissingRequiredKey {
        /// The configuration key
        key: String,
        /// How to fix the configuration
        guidance: String,
    },

    /// A configuration key is present but its value has the wrong shape
    #[error("Invalid configuration entry for key '{key}'")]
    InvalidConfigEntry {
        /// The offending key
        key: String,
    },

    /// A template is neither bundled nor present on disk
    #[error("Template '{name}' could not be found")]
    MissingTemplate {
        /// Logical name or path of the template
        name: String,
    },

    /// A key path does not lead to a mapping inside the token tree
    #[error("Failed to retrieve subtoken for keys: {}", keys.join(", "))]
    SubtokenNotFound {
        /// The full key path that was requested
        keys: Vec<String>,
    },

    /// The "any" side of a color is missing or not a string
    #[error("The \"any\" color value for '{name}' is missing or not a string")]
    MissingColorValue {
        /// Name of the color
        name: String,
    },

    /// A color hex string cannot be split into channels
    #[error("The color value '{hex}' for '{name}' is not a valid hex color")]
    MalformedColorValue {
        /// Name of the color
        name: String,
        /// The offending value
        hex: String,
    },

    /// Tera failed to parse or render a template
    #[error("Failed to render template '{template}': {message}")]
    TemplateRender {
        /// Template name or path
        template: String,
        /// Formatted Tera error chain
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{message}")]
    Other {
        /// Pre-formatted message, including any cause chain
        message: String,
    },
}

/// Error wrapper with user-facing details and a suggestion
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: TokenGenError,
    /// What to do about it
    pub suggestion: Option<String>,
    /// Longer explanation of what happened
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context without details or suggestion.
    #[must_use]
    pub const fn new(error: TokenGenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors
    ///
    /// - Error message: red and bold
    /// - Details: yellow
    /// - Suggestion: green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("\n{}:\n{}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("\n{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

const MISSING_CONFIGURATION_DETAILS: &str = "\
The configuration was not provided or could not be found.

Provide it in one of two ways:

  1. Command-line argument
     Pass '-c <config path>' or '--config <config path>'. The flag may be
     repeated to run several configuration files in sequence.

  2. File placement
     Put a file named 'swift-token-gen.yml' into the directory where you run
     the code generation.

The configuration must be a YAML document whose top-level keys name the
generators to run (for example 'xcassets' or 'files').";

const MISSING_TOKEN_DETAILS: &str = "\
No design token document was provided.

Provide it in one of two ways:

  1. Command-line argument
     Pass '-t <token path>' or '--token <token path>'.

  2. File placement
     Put a file named 'token.json' into the directory where you run the code
     generation.

The token document must be a JSON object. Leaves are objects with a 'type'
and a 'value' and an optional 'description'.";

const MISSING_COLOR_DETAILS: &str = "\
The color value for the \"any\" variant is missing or in the wrong format.

Make sure every color leaf in the design token has its hex value stored as a
string, for example:

  \"background\": { \"type\": \"color\", \"value\": \"#FFFFFFFF\" }";

/// Convert any error into an [`ErrorContext`] suitable for CLI display
///
/// Typed [`TokenGenError`]s are recovered even when wrapped in `anyhow` context.
/// Any other error is flattened together with its `Caused by:` chain.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let error = match error.downcast::<TokenGenError>() {
        Ok(tokengen_error) => return create_error_context(tokengen_error),
        Err(error) => error,
    };

    let error = match error.downcast::<std::io::Error>() {
        Ok(io_error) => {
            let suggestion = match io_error.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    "Check the permissions of the input files and output directories"
                }
                std::io::ErrorKind::NotFound => {
                    "Check that the file or directory exists and the path is correct"
                }
                _ => "Check the paths used in your configuration",
            };
            return ErrorContext::new(TokenGenError::Io(io_error)).with_suggestion(suggestion);
        }
        Err(error) => error,
    };

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(TokenGenError::Other {
        message,
    })
}

fn create_error_context(error: TokenGenError) -> ErrorContext {
    match error {
        TokenGenError::MissingConfiguration {
            ..
        } => ErrorContext::new(error)
            .with_details(MISSING_CONFIGURATION_DETAILS)
            .with_suggestion("Run 'tokengen -c <config path>' or create swift-token-gen.yml"),
        TokenGenError::MissingToken {
            ..
        } => ErrorContext::new(error)
            .with_details(MISSING_TOKEN_DETAILS)
            .with_suggestion("Run 'tokengen -t <token path>' or create token.json"),
        TokenGenError::DecodeFailure {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Make sure the configuration is a YAML mapping and the token document a JSON object")
            .with_details("Both documents must decode to a mapping at the top level"),
        TokenGenError::MissingRequiredKey {
            ref guidance,
            ..
        } => {
            let guidance = guidance.clone();
            ErrorContext::new(error)
                .with_details(guidance)
                .with_suggestion("Add the key to your configuration file and run tokengen again")
        }
        TokenGenError::InvalidConfigEntry {
            ref key,
        } => {
            let details = format!(
                "The value for '{key}' does not have the expected shape. Section values are lists of \
                 mappings, and 'xcassets' only accepts 'colors' and 'images'."
            );
            ErrorContext::new(error).with_details(details)
        }
        TokenGenError::MissingTemplate {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Run 'tokengen templates list' to see the bundled templates")
            .with_details(
                "Templates are looked up by bundled name first, then as a path relative to the \
                 working directory",
            ),
        TokenGenError::SubtokenNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the 'keys' in your configuration against the design token document")
            .with_details("Every key in the path must lead to an object in the token document"),
        TokenGenError::MissingColorValue {
            ..
        } => ErrorContext::new(error).with_details(MISSING_COLOR_DETAILS),
        TokenGenError::MalformedColorValue {
            ..
        } => ErrorContext::new(error)
            .with_details(MISSING_COLOR_DETAILS)
            .with_suggestion("Use six (#RRGGBB) or eight (#RRGGBBAA) hex digits"),
        TokenGenError::TemplateRender {
            ..
        } => ErrorContext::new(error)
            .with_suggestion(
                "Check template syntax: variables use {{ var }}, comments use {# #}, control flow uses {% %}",
            )
            .with_details(
                "Template errors occur when Tera cannot render the template. Common issues:\n\
                 - Undefined variables (use {% if var is defined %} to check)\n\
                 - Syntax errors (unclosed {{ or {% delimiters)\n\
                 - Unknown filters",
            ),
        TokenGenError::Io(_)
        | TokenGenError::Other {
            ..
        } => ErrorContext::new(error),
    }
}
