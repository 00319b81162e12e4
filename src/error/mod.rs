//! Error types for the SendGrid integration module.
//!
//! Every error raised here is terminal: it signals caller misuse or missing
//! setup, never a transient condition. Errors surface at serialization or
//! rendering time; building an [`Email`](crate::Email) never fails.
//!
//! # Error Hierarchy
//!
//! - [`MailError::Configuration`]: cross-field rule violations (reply-to
//!   exclusivity, version without template) and missing rendering setup
//! - [`MailError::Rendering`]: a template variant does not exist or failed to render
//! - [`MailError::Serialization`]: the wire document could not be produced
//! - [`MailError::Config`]: building a [`MailerConfig`](crate::MailerConfig) failed
//!
//! # Examples
//!
//! ```rust
//! use integrations_sendgrid::{encode, Email, MailError, MailerConfig};
//!
//! let email = Email::new().put_template_version("v1");
//! match encode(&email, &MailerConfig::default()) {
//!     Err(MailError::Configuration { message }) => println!("misconfigured: {}", message),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror::Error;

use crate::config::ConfigError;
use crate::rendering::RenderError;

/// Top-level error type for the SendGrid integration.
#[derive(Debug, Error)]
pub enum MailError {
    /// Configuration-related errors.
    ///
    /// Raised when fields that are individually valid combine into a request
    /// the API rejects, or when the rendering bridge lacks a view or renderer.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error.
        message: String,
    },

    /// Template rendering errors.
    #[error("Rendering error for template '{template}': {message}")]
    Rendering {
        /// Template file that failed.
        template: String,
        /// Description of the failure.
        message: String,
        /// Underlying renderer error.
        #[source]
        source: Option<RenderError>,
    },

    /// Serialization errors.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization error.
        message: String,
    },

    /// Invalid mailer configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl MailError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        MailError::Configuration {
            message: message.into(),
        }
    }

    /// Wrap a renderer failure for the given template file.
    pub fn rendering(template: impl Into<String>, source: RenderError) -> Self {
        MailError::Rendering {
            template: template.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Returns true for configuration errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, MailError::Configuration { .. } | MailError::Config(_))
    }

    /// Returns true for rendering errors.
    pub fn is_rendering(&self) -> bool {
        matches!(self, MailError::Rendering { .. })
    }

    /// Returns true if the error is retryable.
    ///
    /// Always false: retrying the same input yields the same failure.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

impl From<serde_json::Error> for MailError {
    fn from(err: serde_json::Error) -> Self {
        MailError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type alias for mail operations.
pub type MailResult<T> = Result<T, MailError>;
