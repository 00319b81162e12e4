//! Bridge between an external template engine and the email body.
//!
//! The engine is consumed through [`TemplateRenderer`]. [`render_template`]
//! picks the view and layouts, renders one or both content types and writes
//! the output back through [`Email::put_html`] / [`Email::put_text`].
//!
//! # Examples
//!
//! ```rust
//! use integrations_sendgrid::mocks::StaticRenderer;
//! use integrations_sendgrid::{render_template, Email, MailerConfig};
//! use serde_json::json;
//!
//! let renderer = StaticRenderer::new()
//!     .with_template("emails", "welcome.html", "<p>Hi {{name}}</p>")
//!     .with_template("emails", "welcome.txt", "Hi {{name}}");
//!
//! let config = MailerConfig::builder()
//!     .default_view("emails")
//!     .renderer(renderer)
//!     .build()?;
//!
//! let email = render_template(Email::new(), "welcome", &json!({"name": "Ann"}), &config)?;
//! assert_eq!(email.text(), Some("Hi Ann"));
//! assert_eq!(email.html(), Some("<p>Hi Ann</p>"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod layout;

pub use layout::{Layout, LayoutSelection, Layouts};

use layout::extension;

use serde_json::Value;
use thiserror::Error;

use crate::builders::Email;
use crate::config::MailerConfig;
use crate::error::{MailError, MailResult};
use crate::types::ContentType;

/// Errors reported by a [`TemplateRenderer`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The view has no template with this name.
    #[error("Template not found: {template}")]
    TemplateNotFound {
        /// Template file that was requested.
        template: String,
    },

    /// The template exists but rendering failed.
    #[error("Render failed: {message}")]
    Failed {
        /// Description of the failure.
        message: String,
    },
}

/// A synchronous template engine.
///
/// `template` always carries its extension (`welcome.html`, `welcome.txt`).
pub trait TemplateRenderer {
    /// Render `template` from `view` with the given assigns, wrapped in `layout` if any.
    fn render(
        &self,
        view: &str,
        template: &str,
        assigns: &Value,
        layout: Option<&Layout>,
    ) -> Result<String, RenderError>;
}

/// Render a template into the email body.
///
/// - `welcome.html` renders the HTML body only, `welcome.txt` the text body only.
/// - `welcome` renders both `welcome.txt` and `welcome.html`; both must exist.
///
/// The view comes from [`Email::put_view`], else from the configured default.
/// Layouts are the configured default overlaid with [`Email::put_layout`].
///
/// # Errors
///
/// - [`MailError::Configuration`] if no renderer is configured, no view is
///   available, or the template or layout extension is not `html`/`txt`
/// - [`MailError::Rendering`] if the renderer fails for any variant; the
///   email is not modified in that case
pub fn render_template(
    email: Email,
    template: &str,
    assigns: &Value,
    config: &MailerConfig,
) -> MailResult<Email> {
    let renderer = config
        .renderer
        .as_deref()
        .ok_or_else(|| MailError::configuration("no template renderer configured"))?;

    let view = email
        .view
        .clone()
        .or_else(|| config.default_view.clone())
        .ok_or_else(|| {
            MailError::configuration("no view set on the email and no default view configured")
        })?;

    let layouts = Layouts::resolve(config.default_layout.as_ref(), email.layout.as_ref())?;

    let targets = match extension(template) {
        Some(ext) => {
            let content_type = ContentType::from_extension(ext).ok_or_else(|| {
                MailError::configuration(format!(
                    "unsupported template '{}': expected a .html or .txt extension",
                    template
                ))
            })?;
            vec![(content_type, template.to_string())]
        }
        None => vec![
            (ContentType::Text, format!("{}.txt", template)),
            (ContentType::Html, format!("{}.html", template)),
        ],
    };

    let mut rendered = Vec::with_capacity(targets.len());
    for (content_type, file) in targets {
        let layout = layouts.get(content_type);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            view = %view,
            template = %file,
            layout = ?layout.map(|l| l.template.as_str()),
            "Rendering email template"
        );
        let body = renderer
            .render(&view, &file, assigns, layout)
            .map_err(|err| MailError::rendering(file.as_str(), err))?;
        rendered.push((content_type, body));
    }

    Ok(rendered
        .into_iter()
        .fold(email, |email, (content_type, body)| email.put_content(content_type, body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{RenderCall, StaticRenderer};
    use rstest::rstest;
    use serde_json::json;
    use std::sync::Arc;

    fn welcome_renderer() -> StaticRenderer {
        StaticRenderer::new()
            .with_template("emails", "welcome.html", "<p>Hi {{name}}</p>")
            .with_template("emails", "welcome.txt", "Hi {{name}}")
    }

    fn config_with(renderer: StaticRenderer) -> MailerConfig {
        MailerConfig::builder()
            .default_view("emails")
            .renderer(renderer)
            .build()
            .unwrap()
    }

    #[test]
    fn test_bare_name_renders_both_variants() {
        let config = config_with(welcome_renderer());
        let email = render_template(Email::new(), "welcome", &json!({"name": "Ann"}), &config).unwrap();

        assert_eq!(email.content().len(), 2);
        assert_eq!(email.content()[0].content_type, ContentType::Text);
        assert_eq!(email.text(), Some("Hi Ann"));
        assert_eq!(email.html(), Some("<p>Hi Ann</p>"));
    }

    #[rstest]
    #[case("welcome.html", ContentType::Html, "<p>Hi Bo</p>")]
    #[case("welcome.txt", ContentType::Text, "Hi Bo")]
    fn test_explicit_extension_renders_one_variant(
        #[case] template: &str,
        #[case] content_type: ContentType,
        #[case] expected: &str,
    ) {
        let config = config_with(welcome_renderer());
        let email = render_template(Email::new(), template, &json!({"name": "Bo"}), &config).unwrap();

        assert_eq!(email.content().len(), 1);
        assert_eq!(email.content()[0].content_type, content_type);
        assert_eq!(email.content()[0].value, expected);
    }

    #[test]
    fn test_missing_variant_is_fatal() {
        let renderer = StaticRenderer::new().with_template("emails", "welcome.html", "<p>Hi</p>");
        let config = config_with(renderer);

        let err = render_template(Email::new(), "welcome", &json!({}), &config).unwrap_err();
        match err {
            MailError::Rendering { template, .. } => assert_eq!(template, "welcome.txt"),
            other => panic!("Expected Rendering error, got {:?}", other),
        }
    }

    #[test]
    fn test_bare_name_in_dotted_directory_renders_both_variants() {
        let renderer = StaticRenderer::new()
            .with_template("emails", "v1.2/welcome.html", "<p>Hi {{name}}</p>")
            .with_template("emails", "v1.2/welcome.txt", "Hi {{name}}");
        let config = config_with(renderer);

        let email =
            render_template(Email::new(), "v1.2/welcome", &json!({"name": "Cy"}), &config).unwrap();

        assert_eq!(email.text(), Some("Hi Cy"));
        assert_eq!(email.html(), Some("<p>Hi Cy</p>"));
    }

    #[test]
    fn test_unsupported_template_extension() {
        let config = config_with(welcome_renderer());
        let err = render_template(Email::new(), "welcome.md", &json!({}), &config).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_missing_view_is_configuration_error() {
        let config = MailerConfig::default().with_renderer(welcome_renderer());
        let err = render_template(Email::new(), "welcome", &json!({}), &config).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_missing_renderer_is_configuration_error() {
        let config = MailerConfig::builder().default_view("emails").build().unwrap();
        let err = render_template(Email::new(), "welcome", &json!({}), &config).unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(err.to_string(), "Configuration error: no template renderer configured");
    }

    #[test]
    fn test_email_view_overrides_default() {
        let renderer = StaticRenderer::new().with_template("custom", "note.txt", "custom view");
        let config = config_with(renderer);

        let email = render_template(Email::new().put_view("custom"), "note.txt", &json!({}), &config).unwrap();
        assert_eq!(email.text(), Some("custom view"));
    }

    #[test]
    fn test_renderer_receives_resolved_layouts() {
        let renderer = Arc::new(
            welcome_renderer()
                .with_template("layouts", "app.txt", "-- {{inner_content}} --")
                .with_template("custom", "fancy.html", "<main>{{inner_content}}</main>"),
        );
        let config = MailerConfig::builder()
            .default_view("emails")
            .default_layout(LayoutSelection::named("layouts", "app"))
            .shared_renderer(renderer.clone())
            .build()
            .unwrap();

        let email = Email::new().put_layout(LayoutSelection::file("custom", "fancy.html"));
        let email = render_template(email, "welcome", &json!({"name": "Di"}), &config).unwrap();

        assert_eq!(email.text(), Some("-- Hi Di --"));
        assert_eq!(email.html(), Some("<main><p>Hi Di</p></main>"));

        assert_eq!(
            renderer.calls(),
            vec![
                RenderCall {
                    view: "emails".to_string(),
                    template: "welcome.txt".to_string(),
                    layout: Some(Layout::new("layouts", "app.txt")),
                },
                RenderCall {
                    view: "emails".to_string(),
                    template: "welcome.html".to_string(),
                    layout: Some(Layout::new("custom", "fancy.html")),
                },
            ]
        );
    }

    #[test]
    fn test_failure_leaves_email_untouched() {
        let renderer = StaticRenderer::new().with_template("emails", "welcome.txt", "text");
        let config = config_with(renderer);
        let email = Email::new().put_text("before");

        let err = render_template(email.clone(), "welcome", &json!({}), &config).unwrap_err();
        assert!(err.is_rendering());
        assert_eq!(email.text(), Some("before"));
    }

    #[test]
    fn test_rerender_replaces_existing_content() {
        let config = config_with(welcome_renderer());
        let email = Email::new().put_html("<p>old</p>").put_text("old");

        let email = render_template(email, "welcome", &json!({"name": "Cy"}), &config).unwrap();
        assert_eq!(email.content().len(), 2);
        assert_eq!(email.content()[0].content_type, ContentType::Html);
        assert_eq!(email.html(), Some("<p>Hi Cy</p>"));
        assert_eq!(email.text(), Some("Hi Cy"));
    }
}
