//! The email aggregate and its builder operations.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::rendering::LayoutSelection;
use crate::types::{
    Asm, Attachment, ClickTracking, ContentPart, ContentType, Footer, GoogleAnalytics,
    MailSettings, OpenTracking, Personalization, Recipient, SubscriptionTracking, TemplateRef,
    Toggle, TrackingSettings,
};

/// An email under composition.
///
/// Every operation consumes the value and returns the updated one. `Email`
/// owns all of its data, so cloning before an operation leaves the original
/// untouched:
///
/// ```rust
/// use integrations_sendgrid::Email;
///
/// let base = Email::new().put_from("sender@example.com");
/// let first = base.clone().add_to("a@example.com");
/// let second = base.clone().add_to("b@example.com");
///
/// assert!(base.to().is_empty());
/// assert_eq!(first.to()[0].email, "a@example.com");
/// assert_eq!(second.to()[0].email, "b@example.com");
/// ```
///
/// # Examples
///
/// ## Plain email
///
/// ```rust
/// use integrations_sendgrid::Email;
///
/// let email = Email::new()
///     .put_from_with_name("sender@example.com", "Sender")
///     .add_to("recipient1@example.com")
///     .add_to("recipient2@example.com")
///     .add_cc("cc@example.com")
///     .put_reply_to("support@example.com")
///     .put_subject("Meeting Invitation")
///     .put_html("<p>You're invited to our meeting</p>");
///
/// assert_eq!(email.to().len(), 2);
/// ```
///
/// ## Dynamic template
///
/// ```rust
/// use integrations_sendgrid::{Email, TemplateRef};
///
/// let email = Email::new()
///     .put_from("noreply@example.com")
///     .add_to("user@example.com")
///     .put_template(TemplateRef::dynamic("d-1234"))
///     .add_dynamic_template_data("name", "John Doe");
///
/// assert_eq!(email.template_id(), Some("d-1234"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Email {
    pub(crate) to: Option<Vec<Recipient>>,
    pub(crate) cc: Option<Vec<Recipient>>,
    pub(crate) bcc: Option<Vec<Recipient>>,
    pub(crate) from: Option<Recipient>,
    pub(crate) reply_to: Option<Recipient>,
    pub(crate) reply_to_list: Option<Vec<Recipient>>,
    pub(crate) subject: Option<String>,
    pub(crate) content: Option<Vec<ContentPart>>,
    pub(crate) template_id: Option<String>,
    pub(crate) version_id: Option<String>,
    pub(crate) substitutions: Option<BTreeMap<String, String>>,
    pub(crate) custom_args: Option<BTreeMap<String, String>>,
    pub(crate) dynamic_template_data: Option<BTreeMap<String, Value>>,
    pub(crate) headers: Option<BTreeMap<String, String>>,
    pub(crate) personalizations: Option<Vec<Personalization>>,
    pub(crate) send_at: Option<i64>,
    pub(crate) categories: Option<Vec<String>>,
    pub(crate) batch_id: Option<String>,
    pub(crate) ip_pool_name: Option<String>,
    pub(crate) asm_group_id: Option<i64>,
    pub(crate) asm_groups_to_display: Option<Vec<i64>>,
    pub(crate) mail_settings: Option<MailSettings>,
    pub(crate) tracking: Option<TrackingSettings>,
    pub(crate) attachments: Option<Vec<Attachment>>,
    pub(crate) sandbox: bool,
    pub(crate) view: Option<String>,
    pub(crate) layout: Option<LayoutSelection>,
}

impl Email {
    /// Create an empty email.
    pub fn new() -> Self {
        Self::default()
    }

    // Recipients

    /// Add a "To" recipient.
    ///
    /// Can be called multiple times; order is preserved and duplicates are kept.
    pub fn add_to(mut self, recipient: impl Into<Recipient>) -> Self {
        self.to.get_or_insert_with(Vec::new).push(recipient.into());
        self
    }

    /// Add a "To" recipient with a display name.
    pub fn add_to_with_name(self, email: impl Into<String>, name: impl Into<String>) -> Self {
        self.add_to(Recipient::with_name(email, name))
    }

    /// Add a "CC" recipient.
    pub fn add_cc(mut self, recipient: impl Into<Recipient>) -> Self {
        self.cc.get_or_insert_with(Vec::new).push(recipient.into());
        self
    }

    /// Add a "CC" recipient with a display name.
    pub fn add_cc_with_name(self, email: impl Into<String>, name: impl Into<String>) -> Self {
        self.add_cc(Recipient::with_name(email, name))
    }

    /// Add a "BCC" recipient.
    pub fn add_bcc(mut self, recipient: impl Into<Recipient>) -> Self {
        self.bcc.get_or_insert_with(Vec::new).push(recipient.into());
        self
    }

    /// Add a "BCC" recipient with a display name.
    pub fn add_bcc_with_name(self, email: impl Into<String>, name: impl Into<String>) -> Self {
        self.add_bcc(Recipient::with_name(email, name))
    }

    /// Set the sender.
    pub fn put_from(mut self, recipient: impl Into<Recipient>) -> Self {
        self.from = Some(recipient.into());
        self
    }

    /// Set the sender with a display name.
    pub fn put_from_with_name(self, email: impl Into<String>, name: impl Into<String>) -> Self {
        self.put_from(Recipient::with_name(email, name))
    }

    /// Set the single reply-to address.
    ///
    /// Mutually exclusive with [`Email::put_reply_to_list`]; the conflict is
    /// reported by [`encode`](crate::encode).
    pub fn put_reply_to(mut self, recipient: impl Into<Recipient>) -> Self {
        self.reply_to = Some(recipient.into());
        self
    }

    /// Set the single reply-to address with a display name.
    pub fn put_reply_to_with_name(self, email: impl Into<String>, name: impl Into<String>) -> Self {
        self.put_reply_to(Recipient::with_name(email, name))
    }

    /// Replace the reply-to list.
    ///
    /// Items can be bare addresses or `(address, name)` pairs.
    ///
    /// ```rust
    /// use integrations_sendgrid::{Email, Recipient};
    ///
    /// let email = Email::new().put_reply_to_list(vec![
    ///     Recipient::from("a@example.com"),
    ///     Recipient::from(("b@example.com", "Bee")),
    /// ]);
    /// assert_eq!(email.reply_to_list().len(), 2);
    /// ```
    pub fn put_reply_to_list<I, R>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Recipient>,
    {
        self.reply_to_list = Some(recipients.into_iter().map(Into::into).collect());
        self
    }

    // Content

    /// Set the subject.
    pub fn put_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the plain text body.
    ///
    /// Replaces an existing text part in place, otherwise appends one.
    pub fn put_text(self, body: impl Into<String>) -> Self {
        self.upsert_content(ContentPart::text(body))
    }

    /// Set the HTML body.
    ///
    /// Replaces an existing HTML part in place, otherwise appends one.
    pub fn put_html(self, body: impl Into<String>) -> Self {
        self.upsert_content(ContentPart::html(body))
    }

    /// Set the body for the given content type.
    pub fn put_content(self, content_type: ContentType, body: impl Into<String>) -> Self {
        self.upsert_content(ContentPart::new(content_type, body))
    }

    fn upsert_content(mut self, part: ContentPart) -> Self {
        let content = self.content.get_or_insert_with(Vec::new);
        match content
            .iter_mut()
            .find(|existing| existing.content_type == part.content_type)
        {
            Some(existing) => *existing = part,
            None => content.push(part),
        }
        self
    }

    // Maps

    /// Add a header. An existing key is overwritten.
    pub fn add_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Add a legacy template substitution. An existing key is overwritten.
    pub fn add_substitution(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.substitutions
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Add a custom argument. An existing key is overwritten.
    pub fn add_custom_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_args
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Add a dynamic template data entry. An existing key is overwritten.
    pub fn add_dynamic_template_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.dynamic_template_data
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    // Categories

    /// Add a category unless it is already present.
    pub fn put_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        let categories = self.categories.get_or_insert_with(Vec::new);
        if !categories.contains(&category) {
            categories.push(category);
        }
        self
    }

    /// Replace the categories wholesale. The replacement is stored as given.
    pub fn put_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    // Templates

    /// Set the template.
    ///
    /// Accepts a bare id or a [`TemplateRef`]; both are stored as the id.
    pub fn put_template(mut self, template: impl Into<TemplateRef>) -> Self {
        self.template_id = Some(template.into().into_id());
        self
    }

    /// Set the template version.
    ///
    /// A version without a template is rejected by [`encode`](crate::encode).
    pub fn put_template_version(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }

    // Scheduling and grouping

    /// Schedule the send (unix epoch seconds).
    pub fn put_send_at(mut self, send_at: i64) -> Self {
        self.send_at = Some(send_at);
        self
    }

    /// Schedule the send at the given instant.
    pub fn put_send_at_datetime(self, send_at: DateTime<Utc>) -> Self {
        self.put_send_at(send_at.timestamp())
    }

    /// Set the batch id.
    pub fn put_batch_id(mut self, batch_id: impl Into<String>) -> Self {
        self.batch_id = Some(batch_id.into());
        self
    }

    /// Set the IP pool.
    pub fn put_ip_pool_name(mut self, ip_pool_name: impl Into<String>) -> Self {
        self.ip_pool_name = Some(ip_pool_name.into());
        self
    }

    /// Set the unsubscribe group.
    pub fn put_asm_group_id(mut self, group_id: i64) -> Self {
        self.asm_group_id = Some(group_id);
        self
    }

    /// Set the unsubscribe groups shown on the preferences page.
    ///
    /// Has no wire effect until a group id is set.
    pub fn put_asm_groups_to_display<I>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        self.asm_groups_to_display = Some(groups.into_iter().collect());
        self
    }

    // Mail settings

    fn mail_settings_mut(&mut self) -> &mut MailSettings {
        self.mail_settings.get_or_insert_with(MailSettings::default)
    }

    /// Toggle bypass of unsubscribe groups and suppressions.
    pub fn configure_bypass_list_management(mut self, enable: bool) -> Self {
        self.mail_settings_mut().bypass_list_management = Some(Toggle::new(enable));
        self
    }

    /// Toggle bypass of the spam report list.
    pub fn configure_bypass_spam_management(mut self, enable: bool) -> Self {
        self.mail_settings_mut().bypass_spam_management = Some(Toggle::new(enable));
        self
    }

    /// Toggle bypass of the bounce list.
    pub fn configure_bypass_bounce_management(mut self, enable: bool) -> Self {
        self.mail_settings_mut().bypass_bounce_management = Some(Toggle::new(enable));
        self
    }

    /// Toggle bypass of the global unsubscribe list.
    pub fn configure_bypass_unsubscribe_management(mut self, enable: bool) -> Self {
        self.mail_settings_mut().bypass_unsubscribe_management = Some(Toggle::new(enable));
        self
    }

    /// Set the footer.
    pub fn put_footer(mut self, footer: Footer) -> Self {
        self.mail_settings_mut().footer = Some(footer);
        self
    }

    /// Replace the mail settings wholesale.
    ///
    /// Only `mail_settings` changes; every other field is kept.
    pub fn put_mail_settings(mut self, settings: MailSettings) -> Self {
        self.mail_settings = Some(settings);
        self
    }

    // Tracking settings

    fn tracking_mut(&mut self) -> &mut TrackingSettings {
        self.tracking.get_or_insert_with(TrackingSettings::default)
    }

    /// Configure click tracking.
    pub fn configure_click_tracking(mut self, enable: bool, enable_text: bool) -> Self {
        self.tracking_mut().click_tracking = Some(ClickTracking {
            enable,
            enable_text: Some(enable_text),
        });
        self
    }

    /// Configure open tracking.
    pub fn configure_open_tracking(mut self, enable: bool, substitution_tag: Option<String>) -> Self {
        self.tracking_mut().open_tracking = Some(OpenTracking {
            enable,
            substitution_tag,
        });
        self
    }

    /// Configure subscription tracking.
    pub fn configure_subscription_tracking(mut self, settings: SubscriptionTracking) -> Self {
        self.tracking_mut().subscription_tracking = Some(settings);
        self
    }

    /// Configure Google Analytics link decoration.
    pub fn configure_google_analytics(mut self, settings: GoogleAnalytics) -> Self {
        self.tracking_mut().ganalytics = Some(settings);
        self
    }

    /// Replace the tracking settings wholesale.
    pub fn put_tracking_settings(mut self, settings: TrackingSettings) -> Self {
        self.tracking = Some(settings);
        self
    }

    // Attachments and flags

    /// Add an attachment.
    pub fn add_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.get_or_insert_with(Vec::new).push(attachment);
        self
    }

    /// Set the fallback sandbox flag.
    ///
    /// Used only when neither `mail_settings` nor the mailer configuration
    /// specify sandbox mode.
    pub fn set_sandbox(mut self, enable: bool) -> Self {
        self.sandbox = enable;
        self
    }

    // Rendering state

    /// Set the view used by [`render_template`](crate::render_template).
    pub fn put_view(mut self, view: impl Into<String>) -> Self {
        self.view = Some(view.into());
        self
    }

    /// Set the layout used by [`render_template`](crate::render_template).
    pub fn put_layout(mut self, layout: LayoutSelection) -> Self {
        self.layout = Some(layout);
        self
    }

    // Personalizations

    /// Project the per-recipient fields into a [`Personalization`].
    ///
    /// Fields the email has not set stay unset.
    pub fn to_personalization(&self) -> Personalization {
        Personalization {
            to: self.to.clone(),
            cc: self.cc.clone(),
            bcc: self.bcc.clone(),
            subject: self.subject.clone(),
            substitutions: self.substitutions.clone(),
            custom_args: self.custom_args.clone(),
            dynamic_template_data: self.dynamic_template_data.clone(),
            send_at: self.send_at,
            headers: self.headers.clone(),
        }
    }

    /// Append a personalization.
    ///
    /// Entries are never merged or deduplicated; each call adds one batch.
    pub fn add_personalization(mut self, personalization: Personalization) -> Self {
        self.personalizations
            .get_or_insert_with(Vec::new)
            .push(personalization);
        self
    }

    // Accessors

    /// "To" recipients.
    pub fn to(&self) -> &[Recipient] {
        self.to.as_deref().unwrap_or_default()
    }

    /// "CC" recipients.
    pub fn cc(&self) -> &[Recipient] {
        self.cc.as_deref().unwrap_or_default()
    }

    /// "BCC" recipients.
    pub fn bcc(&self) -> &[Recipient] {
        self.bcc.as_deref().unwrap_or_default()
    }

    /// Sender.
    pub fn from(&self) -> Option<&Recipient> {
        self.from.as_ref()
    }

    /// Single reply-to address.
    pub fn reply_to(&self) -> Option<&Recipient> {
        self.reply_to.as_ref()
    }

    /// Reply-to list.
    pub fn reply_to_list(&self) -> &[Recipient] {
        self.reply_to_list.as_deref().unwrap_or_default()
    }

    /// Subject.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Content parts in insertion order.
    pub fn content(&self) -> &[ContentPart] {
        self.content.as_deref().unwrap_or_default()
    }

    /// Plain text body.
    pub fn text(&self) -> Option<&str> {
        self.content_of(ContentType::Text)
    }

    /// HTML body.
    pub fn html(&self) -> Option<&str> {
        self.content_of(ContentType::Html)
    }

    fn content_of(&self, content_type: ContentType) -> Option<&str> {
        self.content()
            .iter()
            .find(|part| part.content_type == content_type)
            .map(|part| part.value.as_str())
    }

    /// Template id.
    pub fn template_id(&self) -> Option<&str> {
        self.template_id.as_deref()
    }

    /// Template version id.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// Headers.
    pub fn headers(&self) -> Option<&BTreeMap<String, String>> {
        self.headers.as_ref()
    }

    /// Substitutions.
    pub fn substitutions(&self) -> Option<&BTreeMap<String, String>> {
        self.substitutions.as_ref()
    }

    /// Custom arguments.
    pub fn custom_args(&self) -> Option<&BTreeMap<String, String>> {
        self.custom_args.as_ref()
    }

    /// Dynamic template data.
    pub fn dynamic_template_data(&self) -> Option<&BTreeMap<String, Value>> {
        self.dynamic_template_data.as_ref()
    }

    /// Personalizations added so far.
    pub fn personalizations(&self) -> &[Personalization] {
        self.personalizations.as_deref().unwrap_or_default()
    }

    /// Scheduled send time.
    pub fn send_at(&self) -> Option<i64> {
        self.send_at
    }

    /// Categories.
    pub fn categories(&self) -> &[String] {
        self.categories.as_deref().unwrap_or_default()
    }

    /// Batch id.
    pub fn batch_id(&self) -> Option<&str> {
        self.batch_id.as_deref()
    }

    /// IP pool.
    pub fn ip_pool_name(&self) -> Option<&str> {
        self.ip_pool_name.as_deref()
    }

    /// Unsubscribe group handling, present once a group id is set.
    pub fn asm(&self) -> Option<Asm> {
        self.asm_group_id.map(|group_id| Asm {
            group_id,
            groups_to_display: self.asm_groups_to_display.clone(),
        })
    }

    /// Mail settings.
    pub fn mail_settings(&self) -> Option<&MailSettings> {
        self.mail_settings.as_ref()
    }

    /// Tracking settings.
    pub fn tracking(&self) -> Option<&TrackingSettings> {
        self.tracking.as_ref()
    }

    /// Attachments.
    pub fn attachments(&self) -> &[Attachment] {
        self.attachments.as_deref().unwrap_or_default()
    }

    /// Fallback sandbox flag.
    pub fn sandbox(&self) -> bool {
        self.sandbox
    }

    /// View used for rendering.
    pub fn view(&self) -> Option<&str> {
        self.view.as_deref()
    }

    /// Layout used for rendering.
    pub fn layout(&self) -> Option<&LayoutSelection> {
        self.layout.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_add_to_preserves_order_and_duplicates() {
        let email = Email::new()
            .add_to("a@example.com")
            .add_to("b@example.com")
            .add_to("a@example.com");

        let addresses: Vec<&str> = email.to().iter().map(|r| r.email.as_str()).collect();
        assert_eq!(addresses, vec!["a@example.com", "b@example.com", "a@example.com"]);
    }

    #[test]
    fn test_recipients_with_names() {
        let email = Email::new()
            .add_to_with_name("to@example.com", "To")
            .add_cc_with_name("cc@example.com", "Cc")
            .add_bcc_with_name("bcc@example.com", "Bcc");

        assert_eq!(email.to()[0].name.as_deref(), Some("To"));
        assert_eq!(email.cc()[0].name.as_deref(), Some("Cc"));
        assert_eq!(email.bcc()[0].name.as_deref(), Some("Bcc"));
    }

    #[test]
    fn test_put_from_replaces() {
        let email = Email::new()
            .put_from("first@example.com")
            .put_from_with_name("second@example.com", "Second");

        let from = email.from().unwrap();
        assert_eq!(from.email, "second@example.com");
        assert_eq!(from.name.as_deref(), Some("Second"));
    }

    #[test]
    fn test_put_reply_to_list_mixed_items() {
        let email = Email::new().put_reply_to_list([
            Recipient::from("a@example.com"),
            Recipient::from(("b@example.com", "Bee")),
        ]);

        assert_eq!(email.reply_to_list()[0], Recipient::new("a@example.com"));
        assert_eq!(email.reply_to_list()[1], Recipient::with_name("b@example.com", "Bee"));

        let replaced = email.put_reply_to_list(vec!["c@example.com"]);
        assert_eq!(replaced.reply_to_list().len(), 1);
    }

    #[test]
    fn test_content_order_text_then_html() {
        let email = Email::new().put_text("plain").put_html("<p>html</p>");

        assert_eq!(
            email.content(),
            &[ContentPart::text("plain"), ContentPart::html("<p>html</p>")]
        );
    }

    #[test]
    fn test_put_text_replaces_in_place() {
        let email = Email::new()
            .put_text("plain")
            .put_html("<p>html</p>")
            .put_text("plain again");

        assert_eq!(email.content().len(), 2);
        assert_eq!(email.content()[0], ContentPart::text("plain again"));
        assert_eq!(email.html(), Some("<p>html</p>"));
    }

    #[test]
    fn test_html_first_keeps_position() {
        let email = Email::new()
            .put_html("<p>1</p>")
            .put_text("1")
            .put_html("<p>2</p>");

        assert_eq!(email.content()[0], ContentPart::html("<p>2</p>"));
        assert_eq!(email.content()[1], ContentPart::text("1"));
    }

    #[test]
    fn test_maps_last_write_wins() {
        let email = Email::new()
            .add_header("X-Id", "1")
            .add_header("X-Id", "2")
            .add_substitution("-name-", "Ann")
            .add_custom_arg("campaign", "spring")
            .add_dynamic_template_data("count", 3)
            .add_dynamic_template_data("count", "three");

        assert_eq!(email.headers().unwrap().len(), 1);
        assert_eq!(email.headers().unwrap()["X-Id"], "2");
        assert_eq!(email.substitutions().unwrap()["-name-"], "Ann");
        assert_eq!(email.custom_args().unwrap()["campaign"], "spring");
        assert_eq!(email.dynamic_template_data().unwrap()["count"], json!("three"));
    }

    #[test]
    fn test_put_category_deduplicates() {
        let email = Email::new().put_category("a").put_category("a");
        assert_eq!(email.categories(), &["a".to_string()]);

        let email = email.put_category("b").put_category("a");
        assert_eq!(email.categories(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_put_categories_replaces_without_dedup() {
        let email = Email::new()
            .put_category("old")
            .put_categories(vec!["x", "x", "y"]);

        assert_eq!(email.categories(), &["x", "x", "y"]);
    }

    #[test]
    fn test_put_template_normalizes_variants() {
        assert_eq!(Email::new().put_template("tid").template_id(), Some("tid"));
        assert_eq!(
            Email::new().put_template(TemplateRef::legacy("legacy")).template_id(),
            Some("legacy")
        );
        assert_eq!(
            Email::new().put_template(TemplateRef::dynamic("d-1")).template_id(),
            Some("d-1")
        );
    }

    #[test]
    fn test_put_template_version_alone_is_accepted() {
        let email = Email::new().put_template_version("vid");
        assert_eq!(email.version_id(), Some("vid"));
        assert_eq!(email.template_id(), None);
    }

    #[test]
    fn test_send_at_datetime() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let email = Email::new().put_send_at_datetime(at);
        assert_eq!(email.send_at(), Some(1_704_067_200));
    }

    #[test]
    fn test_asm_group_and_display() {
        let email = Email::new().put_asm_groups_to_display(vec![1, 2]);
        assert!(email.asm().is_none());

        let email = email.put_asm_group_id(7);
        let asm = email.asm().unwrap();
        assert_eq!(asm.group_id, 7);
        assert_eq!(asm.groups_to_display, Some(vec![1, 2]));

        let email = email.put_asm_group_id(9);
        assert_eq!(email.asm().unwrap().groups_to_display, Some(vec![1, 2]));
    }

    #[test]
    fn test_mail_settings_merge_key_by_key() {
        let email = Email::new()
            .configure_bypass_list_management(true)
            .configure_bypass_spam_management(false)
            .put_footer(Footer::enabled().with_text("bye"));

        let settings = email.mail_settings().unwrap();
        assert_eq!(settings.bypass_list_management, Some(Toggle::new(true)));
        assert_eq!(settings.bypass_spam_management, Some(Toggle::new(false)));
        assert!(settings.footer.is_some());
        assert!(settings.sandbox_mode.is_none());
    }

    #[test]
    fn test_put_mail_settings_keeps_other_fields() {
        let email = Email::new()
            .put_from("sender@example.com")
            .put_subject("Hi")
            .configure_bypass_bounce_management(true)
            .put_mail_settings(MailSettings::new().with_sandbox_mode(false));

        assert_eq!(email.subject(), Some("Hi"));
        assert_eq!(email.from().unwrap().email, "sender@example.com");
        let settings = email.mail_settings().unwrap();
        assert!(settings.bypass_bounce_management.is_none());
        assert_eq!(settings.sandbox_mode, Some(Toggle::new(false)));
    }

    #[test]
    fn test_tracking_settings_merge_key_by_key() {
        let email = Email::new()
            .configure_click_tracking(true, true)
            .configure_open_tracking(false, Some("%open%".to_string()))
            .configure_subscription_tracking(SubscriptionTracking::new(true).with_text("unsub"))
            .configure_google_analytics(GoogleAnalytics::new(true).with_source("mail"));

        let tracking = email.tracking().unwrap();
        assert!(tracking.click_tracking.as_ref().unwrap().enable);
        assert_eq!(
            tracking.open_tracking.as_ref().unwrap().substitution_tag.as_deref(),
            Some("%open%")
        );
        assert!(tracking.subscription_tracking.is_some());
        assert!(tracking.ganalytics.is_some());

        let replaced = email.put_tracking_settings(TrackingSettings::new().with_open_tracking(true));
        assert!(replaced.tracking().unwrap().click_tracking.is_none());
    }

    #[test]
    fn test_attachments_append() {
        let email = Email::new()
            .add_attachment(Attachment::new("YQ==", "a.txt"))
            .add_attachment(Attachment::new("Yg==", "b.txt"));

        assert_eq!(email.attachments().len(), 2);
        assert_eq!(email.attachments()[1].filename, "b.txt");
    }

    #[test]
    fn test_clone_is_independent() {
        let base = Email::new().configure_bypass_list_management(true);
        let changed = base.clone().configure_bypass_list_management(false).put_category("x");

        assert_eq!(
            base.mail_settings().unwrap().bypass_list_management,
            Some(Toggle::new(true))
        );
        assert!(base.categories().is_empty());
        assert_eq!(
            changed.mail_settings().unwrap().bypass_list_management,
            Some(Toggle::new(false))
        );
    }

    #[test]
    fn test_to_personalization_projects_set_fields_only() {
        let email = Email::new()
            .put_from("sender@example.com")
            .add_to("a@example.com")
            .put_subject("Hi")
            .add_substitution("-x-", "1");

        let personalization = email.to_personalization();
        assert_eq!(personalization.to, Some(vec![Recipient::new("a@example.com")]));
        assert_eq!(personalization.subject.as_deref(), Some("Hi"));
        assert!(personalization.cc.is_none());
        assert!(personalization.headers.is_none());
        assert!(personalization.send_at.is_none());
        assert!(email.personalizations().is_empty());
    }

    #[test]
    fn test_add_personalization_accumulates_in_order() {
        let first = Personalization::new().add_to("one@example.com");
        let second = Personalization::new().add_to("two@example.com");

        let email = Email::new()
            .add_personalization(first.clone())
            .add_personalization(second.clone());

        assert_eq!(email.personalizations(), &[first, second]);
    }

    #[test]
    fn test_add_personalization_does_not_deduplicate() {
        let p = Personalization::new().add_to("same@example.com");
        let email = Email::new().add_personalization(p.clone()).add_personalization(p);
        assert_eq!(email.personalizations().len(), 2);
    }

    #[test]
    fn test_rendering_state() {
        let email = Email::new()
            .put_view("emails")
            .put_layout(LayoutSelection::named("layouts", "app"))
            .set_sandbox(true);

        assert_eq!(email.view(), Some("emails"));
        assert!(email.layout().is_some());
        assert!(email.sandbox());
    }
}
