//! Builders for composing SendGrid mail/send requests.
//!
//! # Builders
//!
//! - [`Email`] - The aggregate value; every operation returns a new `Email`
//! - [`AttachmentBuilder`] - For attachments assembled piece by piece
//!
//! Cross-field rules (reply-to exclusivity, template version without a
//! template) are not checked here. Fields can be set in any order and are
//! validated by [`encode`](crate::encode).
//!
//! # Examples
//!
//! ```rust
//! use integrations_sendgrid::builders::Email;
//!
//! let email = Email::new()
//!     .put_from("sender@example.com")
//!     .add_to("recipient@example.com")
//!     .put_subject("Hello World")
//!     .put_text("This is a plain text email")
//!     .put_html("<p>This is an HTML email</p>");
//!
//! assert_eq!(email.content().len(), 2);
//! ```

mod attachment_builder;
mod email_builder;

pub use attachment_builder::AttachmentBuilder;
pub use email_builder::Email;

use thiserror::Error;

/// Error type for builder operations.
///
/// Returned when a builder's `build()` method is called but the builder is
/// missing required fields or holds invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// A required field is missing.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A field has an invalid value.
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue {
        /// The name of the field with the invalid value.
        field: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl BuilderError {
    /// Create a new missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a new invalid value error.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}
