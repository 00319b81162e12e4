//! Value types for the SendGrid v3 mail/send body.
//!
//! This module provides the primitives an [`Email`](crate::Email) is composed
//! of: recipients, content parts, attachments, settings fragments, template
//! references and personalizations.

mod email;
mod personalization;
mod settings;
mod template;

pub use email::*;
pub use personalization::*;
pub use settings::*;
pub use template::*;
