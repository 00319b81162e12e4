//! Serialization of an [`Email`] into the mail/send wire document.
//!
//! The rules, in order:
//!
//! 1. With no personalizations, one is synthesized from the email's own
//!    recipients, subject, maps, send time and headers.
//! 2. Base fields are copied when present.
//! 3. A template version requires a template id; both combine to
//!    `"<template_id>.<version_id>"`.
//! 4. `reply_to` and `reply_to_list` are mutually exclusive.
//! 5. Settings, categories, batch id, ASM and IP pool pass through.
//! 6. `mail_settings.sandbox_mode.enable` is always a concrete boolean.
//!
//! # Examples
//!
//! ```rust
//! use integrations_sendgrid::{encode, Email, MailerConfig};
//!
//! let email = Email::new()
//!     .put_from("sender@example.com")
//!     .add_to("recipient@example.com")
//!     .put_subject("Hello")
//!     .put_text("Hi there")
//!     .put_template("tid")
//!     .put_template_version("vid");
//!
//! let body = encode(&email, &MailerConfig::default())?;
//! assert_eq!(body["template_id"], "tid.vid");
//! assert_eq!(body["personalizations"][0]["to"][0]["email"], "recipient@example.com");
//! assert_eq!(body["mail_settings"]["sandbox_mode"]["enable"], false);
//! # Ok::<(), integrations_sendgrid::MailError>(())
//! ```

mod request;

pub use request::MailSendRequest;

use serde_json::Value;

use crate::builders::Email;
use crate::config::MailerConfig;
use crate::error::MailResult;

/// Encode an email into the mail/send JSON document.
///
/// # Errors
///
/// Returns [`MailError::Configuration`](crate::MailError::Configuration) when
/// a template version has no template, or when both reply-to forms are set.
pub fn encode(email: &Email, config: &MailerConfig) -> MailResult<Value> {
    MailSendRequest::from_email(email, config)?.into_value()
}

/// Encode an email into the compact JSON request body.
pub fn to_json_string(email: &Email, config: &MailerConfig) -> MailResult<String> {
    let request = MailSendRequest::from_email(email, config)?;
    Ok(serde_json::to_string(&request)?)
}
