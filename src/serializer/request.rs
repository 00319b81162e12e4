//! Typed mail/send request body.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::builders::Email;
use crate::config::MailerConfig;
use crate::error::{MailError, MailResult};
use crate::types::{
    Asm, Attachment, ContentPart, MailSettings, Personalization, Recipient, Toggle,
    TrackingSettings,
};

/// Request body for `POST /v3/mail/send`.
///
/// Produced from an [`Email`] by [`MailSendRequest::from_email`], which
/// applies every cross-field rule. Absent optional fields are omitted from
/// the JSON, never emitted as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MailSendRequest {
    /// Recipient batches; never empty.
    pub personalizations: Vec<Personalization>,
    /// Sender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Recipient>,
    /// Subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Body parts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentPart>>,
    /// Scheduled send time (unix epoch seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_at: Option<i64>,
    /// Attachments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    /// Headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    /// Template id, `<template_id>.<version_id>` when a version is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Single reply-to address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Recipient>,
    /// Reply-to list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_list: Option<Vec<Recipient>>,
    /// Mail settings; `sandbox_mode` is always set.
    pub mail_settings: MailSettings,
    /// Tracking settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_settings: Option<TrackingSettings>,
    /// Categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// Batch id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    /// Unsubscribe group handling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asm: Option<Asm>,
    /// IP pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_pool_name: Option<String>,
}

impl MailSendRequest {
    /// Build the request body from an email.
    ///
    /// # Errors
    ///
    /// - [`MailError::Configuration`] if a template version is set without a template
    /// - [`MailError::Configuration`] if both `reply_to` and `reply_to_list` are set
    pub fn from_email(email: &Email, config: &MailerConfig) -> MailResult<Self> {
        let personalizations = match email.personalizations.as_deref() {
            None | Some([]) => vec![email.to_personalization()],
            Some(list) => list.to_vec(),
        };

        let template_id = match (&email.template_id, &email.version_id) {
            (Some(template), Some(version)) => Some(format!("{}.{}", template, version)),
            (Some(template), None) => Some(template.clone()),
            (None, Some(version)) => {
                return Err(MailError::configuration(format!(
                    "template version '{}' is set without a template id",
                    version
                )))
            }
            (None, None) => None,
        };

        if email.reply_to.is_some() && email.reply_to_list.is_some() {
            return Err(MailError::configuration(
                "reply_to and reply_to_list are mutually exclusive",
            ));
        }

        let mut mail_settings = email.mail_settings.clone().unwrap_or_default();
        let sandbox = resolve_sandbox(&mail_settings, config, email);
        mail_settings.sandbox_mode = Some(Toggle::new(sandbox));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            personalizations = personalizations.len(),
            synthesized = email.personalizations().is_empty(),
            template_id = ?template_id,
            sandbox,
            "Encoded mail/send request"
        );

        Ok(Self {
            personalizations,
            from: email.from.clone(),
            subject: email.subject.clone(),
            content: email.content.clone(),
            send_at: email.send_at,
            attachments: email.attachments.clone(),
            headers: email.headers.clone(),
            template_id,
            reply_to: email.reply_to.clone(),
            reply_to_list: email.reply_to_list.clone(),
            mail_settings,
            tracking_settings: email.tracking.clone(),
            categories: email.categories.clone(),
            batch_id: email.batch_id.clone(),
            asm: email.asm(),
            ip_pool_name: email.ip_pool_name.clone(),
        })
    }

    /// Convert into a JSON value.
    pub fn into_value(self) -> MailResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Explicit setting, then configured default, then the email's own flag.
fn resolve_sandbox(settings: &MailSettings, config: &MailerConfig, email: &Email) -> bool {
    settings
        .sandbox_mode
        .map(|toggle| toggle.enable)
        .or(config.sandbox_enable)
        .unwrap_or(email.sandbox)
}
