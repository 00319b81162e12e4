//! Mail delivery and tracking settings fragments.
//!
//! Every entry is optional so fragments can be merged key by key: writing one
//! toggle never clears another.

use serde::{Deserialize, Serialize};

/// A bare enable flag (`{"enable": bool}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Toggle {
    /// Whether the setting is enabled.
    pub enable: bool,
}

impl Toggle {
    /// Create a toggle.
    pub fn new(enable: bool) -> Self {
        Self { enable }
    }
}

/// Footer appended to every send.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Footer {
    /// Whether the footer is enabled.
    pub enable: bool,
    /// Plain text footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// HTML footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl Footer {
    /// Create an enabled footer with no content.
    pub fn enabled() -> Self {
        Self {
            enable: true,
            ..Self::default()
        }
    }

    /// Set the text footer.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the HTML footer.
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }
}

/// Mail delivery settings (`mail_settings` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MailSettings {
    /// Ignore unsubscribe groups and suppressions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_list_management: Option<Toggle>,
    /// Bypass the spam report list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_spam_management: Option<Toggle>,
    /// Bypass the bounce list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_bounce_management: Option<Toggle>,
    /// Bypass the global unsubscribe list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_unsubscribe_management: Option<Toggle>,
    /// Footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    /// Validate without delivering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox_mode: Option<Toggle>,
}

impl MailSettings {
    /// Create empty mail settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sandbox mode toggle.
    pub fn with_sandbox_mode(mut self, enable: bool) -> Self {
        self.sandbox_mode = Some(Toggle::new(enable));
        self
    }

    /// Set the footer.
    pub fn with_footer(mut self, footer: Footer) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Set the bypass-list-management toggle.
    pub fn with_bypass_list_management(mut self, enable: bool) -> Self {
        self.bypass_list_management = Some(Toggle::new(enable));
        self
    }
}

/// Click tracking.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClickTracking {
    /// Whether click tracking is enabled.
    pub enable: bool,
    /// Also rewrite links in the text body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_text: Option<bool>,
}

/// Open tracking.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OpenTracking {
    /// Whether open tracking is enabled.
    pub enable: bool,
    /// Tag replaced by the tracking pixel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitution_tag: Option<String>,
}

/// Subscription tracking (unsubscribe link).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubscriptionTracking {
    /// Whether subscription tracking is enabled.
    pub enable: bool,
    /// Text appended to the text body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// HTML appended to the HTML body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Tag replaced by the unsubscribe URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitution_tag: Option<String>,
}

impl SubscriptionTracking {
    /// Create a subscription tracking fragment.
    pub fn new(enable: bool) -> Self {
        Self {
            enable,
            ..Self::default()
        }
    }

    /// Set the text snippet.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the HTML snippet.
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Set the substitution tag.
    pub fn with_substitution_tag(mut self, tag: impl Into<String>) -> Self {
        self.substitution_tag = Some(tag.into());
        self
    }
}

/// Google Analytics link decoration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GoogleAnalytics {
    /// Whether link decoration is enabled.
    pub enable: bool,
    /// `utm_source`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    /// `utm_medium`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    /// `utm_term`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_term: Option<String>,
    /// `utm_content`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
    /// `utm_campaign`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
}

impl GoogleAnalytics {
    /// Create a Google Analytics fragment.
    pub fn new(enable: bool) -> Self {
        Self {
            enable,
            ..Self::default()
        }
    }

    /// Set `utm_source`.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.utm_source = Some(source.into());
        self
    }

    /// Set `utm_medium`.
    pub fn with_medium(mut self, medium: impl Into<String>) -> Self {
        self.utm_medium = Some(medium.into());
        self
    }

    /// Set `utm_term`.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.utm_term = Some(term.into());
        self
    }

    /// Set `utm_content`.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.utm_content = Some(content.into());
        self
    }

    /// Set `utm_campaign`.
    pub fn with_campaign(mut self, campaign: impl Into<String>) -> Self {
        self.utm_campaign = Some(campaign.into());
        self
    }
}

/// Tracking settings (`tracking_settings` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackingSettings {
    /// Click tracking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_tracking: Option<ClickTracking>,
    /// Open tracking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_tracking: Option<OpenTracking>,
    /// Subscription tracking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_tracking: Option<SubscriptionTracking>,
    /// Google Analytics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ganalytics: Option<GoogleAnalytics>,
}

impl TrackingSettings {
    /// Create empty tracking settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set click tracking.
    pub fn with_click_tracking(mut self, enable: bool, enable_text: bool) -> Self {
        self.click_tracking = Some(ClickTracking {
            enable,
            enable_text: Some(enable_text),
        });
        self
    }

    /// Set open tracking.
    pub fn with_open_tracking(mut self, enable: bool) -> Self {
        self.open_tracking = Some(OpenTracking {
            enable,
            substitution_tag: None,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_mail_settings_serialize_to_empty_object() {
        let settings = MailSettings::new();
        assert_eq!(serde_json::to_value(settings).unwrap(), json!({}));
    }

    #[test]
    fn test_mail_settings_wire_shape() {
        let settings = MailSettings::new()
            .with_bypass_list_management(true)
            .with_footer(Footer::enabled().with_text("bye"));

        assert_eq!(
            serde_json::to_value(settings).unwrap(),
            json!({
                "bypass_list_management": {"enable": true},
                "footer": {"enable": true, "text": "bye"}
            })
        );
    }

    #[test]
    fn test_tracking_settings_wire_shape() {
        let settings = TrackingSettings::new()
            .with_click_tracking(true, false)
            .with_open_tracking(true);

        assert_eq!(
            serde_json::to_value(settings).unwrap(),
            json!({
                "click_tracking": {"enable": true, "enable_text": false},
                "open_tracking": {"enable": true}
            })
        );
    }

    #[test]
    fn test_google_analytics_builder() {
        let ga = GoogleAnalytics::new(true)
            .with_source("newsletter")
            .with_campaign("spring");
        assert_eq!(ga.utm_source.as_deref(), Some("newsletter"));
        assert_eq!(ga.utm_campaign.as_deref(), Some("spring"));
        assert!(ga.utm_medium.is_none());
    }
}
