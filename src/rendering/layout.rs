//! Layout selection and per-content-type resolution.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MailError, MailResult};
use crate::types::ContentType;

/// A concrete layout: a template file rendered by a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// View that renders the layout.
    pub view: String,
    /// Layout template file, including its extension.
    pub template: String,
}

impl Layout {
    /// Create a layout.
    pub fn new(view: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            template: template.into(),
        }
    }
}

/// A layout choice, as set on an email or in the mailer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutSelection {
    /// A bare layout name, expanded to `<name>.html` and `<name>.txt`.
    Named {
        /// View that renders the layout.
        view: String,
        /// Layout name without extension.
        name: String,
    },
    /// A single layout file, applied to the content type of its extension.
    File {
        /// View that renders the layout.
        view: String,
        /// Layout file with a `.html` or `.txt` extension.
        file: String,
    },
    /// Render without any layout.
    Disabled,
}

impl LayoutSelection {
    /// Bare layout name used for both content types.
    pub fn named(view: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named {
            view: view.into(),
            name: name.into(),
        }
    }

    /// Layout file used for the content type of its extension.
    pub fn file(view: impl Into<String>, file: impl Into<String>) -> Self {
        Self::File {
            view: view.into(),
            file: file.into(),
        }
    }
}

/// Extension of the last path segment, so `v1.2/email` has none.
pub(crate) fn extension(file: &str) -> Option<&str> {
    Path::new(file).extension().and_then(|ext| ext.to_str())
}

/// Layouts resolved per content type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layouts {
    html: Option<Layout>,
    text: Option<Layout>,
}

impl Layouts {
    /// Resolve the configured default, then overlay the email's own choice.
    ///
    /// A `File` selection only replaces the layout of its own content type.
    pub fn resolve(
        default: Option<&LayoutSelection>,
        explicit: Option<&LayoutSelection>,
    ) -> MailResult<Self> {
        let mut layouts = Self::default();
        for selection in [default, explicit].into_iter().flatten() {
            layouts.apply(selection)?;
        }
        Ok(layouts)
    }

    fn apply(&mut self, selection: &LayoutSelection) -> MailResult<()> {
        match selection {
            LayoutSelection::Named { view, name } => {
                self.html = Some(Layout::new(view.clone(), format!("{}.html", name)));
                self.text = Some(Layout::new(view.clone(), format!("{}.txt", name)));
            }
            LayoutSelection::File { view, file } => {
                let content_type = extension(file)
                    .and_then(ContentType::from_extension)
                    .ok_or_else(|| {
                        MailError::configuration(format!(
                            "unsupported layout file '{}': expected a .html or .txt extension",
                            file
                        ))
                    })?;
                *self.slot(content_type) = Some(Layout::new(view.clone(), file.clone()));
            }
            LayoutSelection::Disabled => {
                self.html = None;
                self.text = None;
            }
        }
        Ok(())
    }

    fn slot(&mut self, content_type: ContentType) -> &mut Option<Layout> {
        match content_type {
            ContentType::Html => &mut self.html,
            ContentType::Text => &mut self.text,
        }
    }

    /// Layout for the given content type.
    pub fn get(&self, content_type: ContentType) -> Option<&Layout> {
        match content_type {
            ContentType::Html => self.html.as_ref(),
            ContentType::Text => self.text.as_ref(),
        }
    }
}
