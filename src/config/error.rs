//! Errors raised while assembling a [`MailerConfig`](super::MailerConfig).

use thiserror::Error;

/// Mailer configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting was present but blank.
    #[error("Mailer setting {field} is set but empty")]
    MissingField {
        /// Setting name, e.g. `SENDGRID_DEFAULT_LAYOUT`.
        field: String,
    },

    /// A value that cannot be used, such as an empty default view.
    #[error("Invalid mailer configuration: {message}")]
    Invalid {
        /// What was wrong.
        message: String,
    },

    /// The environment holds an inconsistent combination of settings.
    #[error("Mailer environment error: {message}")]
    Environment {
        /// What was wrong.
        message: String,
    },
}
