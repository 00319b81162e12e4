//! Attachment builder for attachments assembled from optional parts.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::builders::BuilderError;
use crate::types::Attachment;

/// Builder for [`Attachment`] when the parts arrive separately.
///
/// The API requires both a filename and content; `build()` reports whichever
/// is missing.
///
/// # Examples
///
/// ```rust
/// use integrations_sendgrid::builders::AttachmentBuilder;
///
/// let attachment = AttachmentBuilder::new()
///     .filename("logo.png")
///     .data(&[0x89, 0x50, 0x4E, 0x47])
///     .inline("logo")
///     .build()?;
///
/// assert_eq!(attachment.mime_type.as_deref(), Some("image/png"));
/// # Ok::<(), integrations_sendgrid::builders::BuilderError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct AttachmentBuilder {
    content: Option<String>,
    filename: Option<String>,
    mime_type: Option<String>,
    disposition: Option<String>,
    content_id: Option<String>,
}

impl AttachmentBuilder {
    /// Create a new attachment builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set already base64-encoded content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set raw content; it is base64-encoded.
    pub fn data(mut self, data: &[u8]) -> Self {
        self.content = Some(STANDARD.encode(data));
        self
    }

    /// Set the filename.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the MIME type. When unset it is guessed from the filename.
    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Set the disposition (`attachment` or `inline`).
    pub fn disposition(mut self, disposition: impl Into<String>) -> Self {
        self.disposition = Some(disposition.into());
        self
    }

    /// Mark the attachment inline under the given content ID.
    pub fn inline(mut self, content_id: impl Into<String>) -> Self {
        self.disposition = Some("inline".to_string());
        self.content_id = Some(content_id.into());
        self
    }

    /// Build the [`Attachment`].
    ///
    /// # Errors
    ///
    /// - [`BuilderError::MissingField`] if `filename` or `content` is not set
    /// - [`BuilderError::InvalidValue`] if the disposition is not `attachment` or `inline`
    /// - [`BuilderError::InvalidValue`] if an explicit MIME type does not parse
    pub fn build(self) -> Result<Attachment, BuilderError> {
        let filename = self
            .filename
            .filter(|f| !f.is_empty())
            .ok_or_else(|| BuilderError::missing_field("filename"))?;
        let content = self
            .content
            .ok_or_else(|| BuilderError::missing_field("content"))?;

        if let Some(disposition) = &self.disposition {
            if disposition != "attachment" && disposition != "inline" {
                return Err(BuilderError::invalid_value(
                    "disposition",
                    "must be 'attachment' or 'inline'",
                ));
            }
        }

        let mime_type = match self.mime_type {
            Some(raw) => {
                let parsed: mime::Mime = raw.parse().map_err(|_| {
                    BuilderError::invalid_value("mime_type", format!("'{}' is not a MIME type", raw))
                })?;
                Some(parsed.essence_str().to_string())
            }
            None => mime_guess::from_path(&filename)
                .first()
                .map(|m| m.essence_str().to_string()),
        };

        Ok(Attachment {
            content,
            filename,
            mime_type,
            disposition: self.disposition,
            content_id: self.content_id,
        })
    }
}
