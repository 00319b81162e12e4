//! Per-recipient-batch override bundle.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::Recipient;

/// One recipient batch of a send.
///
/// Carries the subset of email fields that can be overridden per batch.
/// Every field is optional and omitted from the wire document when unset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Personalization {
    /// "To" recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Vec<Recipient>>,
    /// "CC" recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<Recipient>>,
    /// "BCC" recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<Recipient>>,
    /// Subject override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Legacy template substitutions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitutions: Option<BTreeMap<String, String>>,
    /// Custom arguments echoed back in event webhooks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_args: Option<BTreeMap<String, String>>,
    /// Dynamic template data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_template_data: Option<BTreeMap<String, Value>>,
    /// Scheduled send time (unix epoch seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_at: Option<i64>,
    /// Extra headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
}

impl Personalization {
    /// Create an empty personalization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a "To" recipient.
    pub fn add_to(mut self, recipient: impl Into<Recipient>) -> Self {
        self.to.get_or_insert_with(Vec::new).push(recipient.into());
        self
    }

    /// Add a "CC" recipient.
    pub fn add_cc(mut self, recipient: impl Into<Recipient>) -> Self {
        self.cc.get_or_insert_with(Vec::new).push(recipient.into());
        self
    }

    /// Add a "BCC" recipient.
    pub fn add_bcc(mut self, recipient: impl Into<Recipient>) -> Self {
        self.bcc.get_or_insert_with(Vec::new).push(recipient.into());
        self
    }

    /// Set the subject override.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Add a substitution.
    pub fn add_substitution(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.substitutions
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Add a custom argument.
    pub fn add_custom_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_args
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Add a dynamic template data entry.
    pub fn add_dynamic_template_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.dynamic_template_data
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the scheduled send time.
    pub fn with_send_at(mut self, send_at: i64) -> Self {
        self.send_at = Some(send_at);
        self
    }

    /// Add a header.
    pub fn add_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}
