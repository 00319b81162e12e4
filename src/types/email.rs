//! Recipient, content and attachment primitives for the mail/send body.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Represents an email address with optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipient {
    /// Email address (e.g., "user@example.com").
    pub email: String,
    /// Display name (e.g., "John Doe").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Recipient {
    /// Create a new recipient without a display name.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    /// Create a new recipient with a display name.
    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

impl From<String> for Recipient {
    fn from(email: String) -> Self {
        Self::new(email)
    }
}

impl From<&str> for Recipient {
    fn from(email: &str) -> Self {
        Self::new(email)
    }
}

impl<E: Into<String>, N: Into<String>> From<(E, N)> for Recipient {
    fn from((email, name): (E, N)) -> Self {
        Self::with_name(email, name)
    }
}

/// Body variant carried by a [`ContentPart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    /// `text/plain`.
    #[serde(rename = "text/plain")]
    Text,
    /// `text/html`.
    #[serde(rename = "text/html")]
    Html,
}

impl ContentType {
    /// MIME string used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text/plain",
            ContentType::Html => "text/html",
        }
    }

    /// Template file extension for this content type.
    pub fn extension(&self) -> &'static str {
        match self {
            ContentType::Text => "txt",
            ContentType::Html => "html",
        }
    }

    /// Map a template file extension back to a content type.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "txt" => Some(ContentType::Text),
            "html" => Some(ContentType::Html),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered body of the email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPart {
    /// Content type.
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Body.
    pub value: String,
}

impl ContentPart {
    /// Create a new content part.
    pub fn new(content_type: ContentType, value: impl Into<String>) -> Self {
        Self {
            content_type,
            value: value.into(),
        }
    }

    /// Plain text body.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(ContentType::Text, value)
    }

    /// HTML body.
    pub fn html(value: impl Into<String>) -> Self {
        Self::new(ContentType::Html, value)
    }
}

/// Email attachment.
///
/// `content` is the base64-encoded payload, as the API expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Base64-encoded content.
    pub content: String,
    /// Filename.
    pub filename: String,
    /// MIME type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Content disposition (`attachment` or `inline`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,
    /// Content ID (for inline attachments).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

impl Attachment {
    /// Create an attachment from already base64-encoded content.
    pub fn new(content: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            filename: filename.into(),
            mime_type: None,
            disposition: None,
            content_id: None,
        }
    }

    /// Create an attachment from raw bytes.
    ///
    /// The bytes are base64-encoded and the MIME type is guessed from the
    /// filename extension.
    pub fn from_bytes(filename: impl Into<String>, data: &[u8]) -> Self {
        let filename = filename.into();
        let mime_type = mime_guess::from_path(&filename)
            .first()
            .map(|m| m.essence_str().to_string());
        Self {
            content: STANDARD.encode(data),
            filename,
            mime_type,
            disposition: Some("attachment".to_string()),
            content_id: None,
        }
    }

    /// Set the MIME type.
    pub fn with_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Set the content disposition.
    pub fn with_disposition(mut self, disposition: impl Into<String>) -> Self {
        self.disposition = Some(disposition.into());
        self
    }

    /// Mark the attachment inline under the given content ID.
    pub fn inline(mut self, content_id: impl Into<String>) -> Self {
        self.disposition = Some("inline".to_string());
        self.content_id = Some(content_id.into());
        self
    }
}

/// Unsubscribe group handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asm {
    /// Unsubscribe group the send belongs to.
    pub group_id: i64,
    /// Groups shown on the manage-preferences page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups_to_display: Option<Vec<i64>>,
}

impl Asm {
    /// Create an ASM fragment for the given group.
    pub fn new(group_id: i64) -> Self {
        Self {
            group_id,
            groups_to_display: None,
        }
    }
}
