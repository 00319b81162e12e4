//! SendGrid v3 mail/send Integration Module
//!
//! Type-safe composition and serialization of the request body for the
//! SendGrid transactional email API. This crate produces the JSON document;
//! delivering it is left to whatever HTTP client the application uses.
//!
//! # Features
//!
//! - **Value Builder**: Every [`Email`] operation returns a new value
//! - **Personalizations**: Per-batch recipient overrides, synthesized when absent
//! - **Wire Validation**: Template identity and reply-to rules checked at encode time
//! - **Sandbox Defaulting**: Explicit setting, configured default, or per-email flag
//! - **Template Bridge**: Render HTML/text bodies through any [`TemplateRenderer`]
//! - **Tracing**: Optional `debug!` events behind the `tracing` feature
//!
//! # Quick Start
//!
//! ```rust
//! use integrations_sendgrid::{encode, Email, MailerConfig};
//!
//! let email = Email::new()
//!     .put_from("sender@example.com")
//!     .add_to("recipient@example.com")
//!     .put_subject("Hello from SendGrid")
//!     .put_text("This is a test email.");
//!
//! let body = encode(&email, &MailerConfig::default())?;
//! assert_eq!(body["from"]["email"], "sender@example.com");
//! # Ok::<(), integrations_sendgrid::MailError>(())
//! ```
//!
//! # Batch Sends
//!
//! ```rust
//! use integrations_sendgrid::{encode, Email, MailerConfig};
//!
//! let base = Email::new()
//!     .put_from("newsletter@example.com")
//!     .put_template("d-newsletter");
//!
//! let alice = Email::new().add_to("alice@example.com").add_dynamic_template_data("name", "Alice");
//! let bob = Email::new().add_to("bob@example.com").add_dynamic_template_data("name", "Bob");
//!
//! let email = base
//!     .add_personalization(alice.to_personalization())
//!     .add_personalization(bob.to_personalization());
//!
//! let body = encode(&email, &MailerConfig::default())?;
//! assert_eq!(body["personalizations"].as_array().map(Vec::len), Some(2));
//! # Ok::<(), integrations_sendgrid::MailError>(())
//! ```
//!
//! # Configuration
//!
//! ```rust
//! use integrations_sendgrid::{LayoutSelection, MailerConfig};
//!
//! // From environment variables
//! let config = MailerConfig::from_env()?;
//!
//! // With builder
//! let config = MailerConfig::builder()
//!     .default_view("emails")
//!     .default_layout(LayoutSelection::named("layouts", "email"))
//!     .sandbox_enable(true)
//!     .build()?;
//! # Ok::<(), integrations_sendgrid::config::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

// Module declarations
pub mod builders;
pub mod config;
pub mod error;
pub mod mocks;
pub mod rendering;
pub mod serializer;
pub mod types;

// Re-export builder types
pub use builders::{AttachmentBuilder, BuilderError, Email};

// Re-export configuration types
pub use config::{ConfigError, MailerConfig, MailerConfigBuilder};

// Re-export error types
pub use error::{MailError, MailResult};

// Re-export rendering types
pub use rendering::{render_template, Layout, LayoutSelection, RenderError, TemplateRenderer};

// Re-export serializer entry points
pub use serializer::{encode, to_json_string, MailSendRequest};

// Re-export common value types
pub use types::{
    Asm, Attachment, ClickTracking, ContentPart, ContentType, Footer, GoogleAnalytics,
    MailSettings, OpenTracking, Personalization, Recipient, SubscriptionTracking, TemplateRef,
    Toggle, TrackingSettings,
};
