//! Integration tests for the Email builder and personalization expansion.

use integrations_sendgrid::types::*;
use integrations_sendgrid::Email;

#[test]
fn test_add_to_preserves_call_order_and_length() {
    let addresses = ["c@example.com", "a@example.com", "b@example.com", "a@example.com"];
    let email = addresses
        .iter()
        .fold(Email::new(), |email, address| email.add_to(*address));

    let collected: Vec<&str> = email.to().iter().map(|r| r.email.as_str()).collect();
    assert_eq!(collected, addresses);
}

#[test]
fn test_text_then_html_then_text_again() {
    let email = Email::new().put_text("one").put_html("<p>two</p>");
    assert_eq!(
        email.content(),
        &[ContentPart::text("one"), ContentPart::html("<p>two</p>")]
    );

    let email = email.put_text("three");
    assert_eq!(
        email.content(),
        &[ContentPart::text("three"), ContentPart::html("<p>two</p>")]
    );
}

#[test]
fn test_category_twice_is_stored_once() {
    let email = Email::new().put_category("a").put_category("a");
    assert_eq!(email.categories(), &["a"]);
}

#[test]
fn test_builder_calls_leave_prior_value_unchanged() {
    let original = Email::new()
        .put_subject("original")
        .configure_click_tracking(true, true)
        .add_header("X-A", "1");

    let derived = original
        .clone()
        .put_subject("derived")
        .configure_click_tracking(false, false)
        .add_header("X-A", "2")
        .put_mail_settings(MailSettings::new().with_sandbox_mode(true));

    assert_eq!(original.subject(), Some("original"));
    assert!(original.tracking().unwrap().click_tracking.as_ref().unwrap().enable);
    assert_eq!(original.headers().unwrap()["X-A"], "1");
    assert!(original.mail_settings().is_none());

    assert_eq!(derived.subject(), Some("derived"));
    assert_eq!(derived.headers().unwrap()["X-A"], "2");
}

#[test]
fn test_add_personalization_twice_keeps_both_in_order() {
    let first = Email::new()
        .add_to("one@example.com")
        .add_substitution("-n-", "1")
        .to_personalization();
    let second = Personalization::new()
        .add_to("two@example.com")
        .with_subject("second batch");

    let email = Email::new()
        .add_personalization(first.clone())
        .add_personalization(second.clone());

    assert_eq!(email.personalizations().len(), 2);
    assert_eq!(email.personalizations()[0], first);
    assert_eq!(email.personalizations()[1], second);
}

#[test]
fn test_to_personalization_covers_all_per_recipient_fields() {
    let email = Email::new()
        .add_to("to@example.com")
        .add_cc("cc@example.com")
        .add_bcc("bcc@example.com")
        .put_subject("Subject")
        .add_substitution("-s-", "sub")
        .add_custom_arg("arg", "val")
        .add_dynamic_template_data("name", "Ann")
        .put_send_at(42)
        .add_header("X-H", "h")
        .put_from("not-projected@example.com")
        .put_category("not-projected");

    let p = email.to_personalization();
    assert_eq!(p.to, Some(vec![Recipient::new("to@example.com")]));
    assert_eq!(p.cc, Some(vec![Recipient::new("cc@example.com")]));
    assert_eq!(p.bcc, Some(vec![Recipient::new("bcc@example.com")]));
    assert_eq!(p.subject.as_deref(), Some("Subject"));
    assert_eq!(p.substitutions.unwrap()["-s-"], "sub");
    assert_eq!(p.custom_args.unwrap()["arg"], "val");
    assert_eq!(p.dynamic_template_data.unwrap()["name"], "Ann");
    assert_eq!(p.send_at, Some(42));
    assert_eq!(p.headers.unwrap()["X-H"], "h");
}

#[test]
fn test_attachment_builder_feeds_email() {
    let attachment = integrations_sendgrid::AttachmentBuilder::new()
        .filename("invoice.pdf")
        .data(b"%PDF-1.4")
        .build()
        .unwrap();

    let email = Email::new().add_attachment(attachment);
    assert_eq!(email.attachments()[0].mime_type.as_deref(), Some("application/pdf"));
}
