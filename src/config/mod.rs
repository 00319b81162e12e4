//! Configuration module for the mailer.
//!
//! [`MailerConfig`] carries the process-wide defaults the serializer and the
//! rendering bridge fall back to:
//!
//! - Default view used to render templates
//! - Default layout per content type
//! - Default sandbox-mode flag
//! - The template renderer
//!
//! The value is resolved once by the caller and passed explicitly into
//! [`encode`](crate::encode) and [`render_template`](crate::render_template).

use std::fmt;
use std::sync::Arc;

pub mod error;

pub use error::ConfigError;

use crate::rendering::{LayoutSelection, TemplateRenderer};

/// Environment variable holding the default view.
pub const ENV_DEFAULT_VIEW: &str = "SENDGRID_DEFAULT_VIEW";
/// Environment variable holding the default layout name.
pub const ENV_DEFAULT_LAYOUT: &str = "SENDGRID_DEFAULT_LAYOUT";
/// Environment variable holding the default sandbox flag.
pub const ENV_SANDBOX_ENABLE: &str = "SENDGRID_SANDBOX_ENABLE";

/// Configuration for the mailer.
#[derive(Clone, Default)]
pub struct MailerConfig {
    /// View used by the rendering bridge when the email names none.
    pub default_view: Option<String>,

    /// Layout applied by the rendering bridge unless the email overrides it.
    pub default_layout: Option<LayoutSelection>,

    /// Sandbox flag used when `mail_settings` carries no explicit value.
    pub sandbox_enable: Option<bool>,

    /// Template renderer used by the rendering bridge.
    pub renderer: Option<Arc<dyn TemplateRenderer + Send + Sync>>,
}

impl MailerConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```
    /// use integrations_sendgrid::MailerConfig;
    ///
    /// let config = MailerConfig::builder()
    ///     .default_view("emails")
    ///     .sandbox_enable(true)
    ///     .build()?;
    /// # Ok::<(), integrations_sendgrid::config::ConfigError>(())
    /// ```
    pub fn builder() -> MailerConfigBuilder {
        MailerConfigBuilder::default()
    }

    /// Create a configuration from environment variables.
    ///
    /// This method reads the following environment variables:
    /// - `SENDGRID_DEFAULT_VIEW` for the default view
    /// - `SENDGRID_DEFAULT_LAYOUT` for a bare layout name rendered with the default view
    /// - `SENDGRID_SANDBOX_ENABLE` (`true`/`false`/`1`/`0`/`yes`/`no`)
    ///
    /// All variables are optional, but a layout variable that is present must
    /// name a layout. No renderer is attached; add one with
    /// [`MailerConfig::with_renderer`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a configuration from an arbitrary key lookup.
    ///
    /// Keys are the `SENDGRID_*` names used by [`MailerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        let default_view = lookup(ENV_DEFAULT_VIEW);
        if let Some(view) = &default_view {
            builder = builder.default_view(view.clone());
        }

        if let Some(layout) = lookup(ENV_DEFAULT_LAYOUT) {
            if layout.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: ENV_DEFAULT_LAYOUT.to_string(),
                });
            }
            let view = default_view.ok_or_else(|| ConfigError::Environment {
                message: format!("{} requires {} to be set", ENV_DEFAULT_LAYOUT, ENV_DEFAULT_VIEW),
            })?;
            builder = builder.default_layout(LayoutSelection::named(view, layout));
        }

        if let Some(raw) = lookup(ENV_SANDBOX_ENABLE) {
            builder = builder.sandbox_enable(parse_bool(ENV_SANDBOX_ENABLE, &raw)?);
        }

        builder.build()
    }

    /// Return a copy of this configuration using the given renderer.
    pub fn with_renderer(mut self, renderer: impl TemplateRenderer + Send + Sync + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }
}

impl fmt::Debug for MailerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailerConfig")
            .field("default_view", &self.default_view)
            .field("default_layout", &self.default_layout)
            .field("sandbox_enable", &self.sandbox_enable)
            .field("renderer", &self.renderer.as_ref().map(|_| "<renderer>"))
            .finish()
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::Invalid {
            message: format!("{} must be a boolean, got '{}'", key, other),
        }),
    }
}

/// Builder for creating mailer configurations.
#[derive(Default)]
pub struct MailerConfigBuilder {
    default_view: Option<String>,
    default_layout: Option<LayoutSelection>,
    sandbox_enable: Option<bool>,
    renderer: Option<Arc<dyn TemplateRenderer + Send + Sync>>,
}

impl MailerConfigBuilder {
    /// Set the default view.
    ///
    /// # Example
    ///
    /// ```
    /// use integrations_sendgrid::MailerConfig;
    ///
    /// let builder = MailerConfig::builder().default_view("emails");
    /// ```
    pub fn default_view(mut self, view: impl Into<String>) -> Self {
        self.default_view = Some(view.into());
        self
    }

    /// Set the default layout.
    ///
    /// # Example
    ///
    /// ```
    /// use integrations_sendgrid::{LayoutSelection, MailerConfig};
    ///
    /// let builder = MailerConfig::builder()
    ///     .default_layout(LayoutSelection::named("layouts", "email"));
    /// ```
    pub fn default_layout(mut self, layout: LayoutSelection) -> Self {
        self.default_layout = Some(layout);
        self
    }

    /// Set the default sandbox flag.
    pub fn sandbox_enable(mut self, enable: bool) -> Self {
        self.sandbox_enable = Some(enable);
        self
    }

    /// Set the template renderer.
    pub fn renderer(mut self, renderer: impl TemplateRenderer + Send + Sync + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Set a shared template renderer.
    pub fn shared_renderer(mut self, renderer: Arc<dyn TemplateRenderer + Send + Sync>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the default view is an empty string.
    pub fn build(self) -> Result<MailerConfig, ConfigError> {
        if matches!(self.default_view.as_deref(), Some(view) if view.trim().is_empty()) {
            return Err(ConfigError::Invalid {
                message: "default_view must not be empty".to_string(),
            });
        }

        Ok(MailerConfig {
            default_view: self.default_view,
            default_layout: self.default_layout,
            sandbox_enable: self.sandbox_enable,
            renderer: self.renderer,
        })
    }
}
