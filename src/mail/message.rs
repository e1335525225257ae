//! The mail-send request document.

use super::{Asm, Attachment, Content, Email, MailSettings, Personalization, TrackingSettings};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of a `POST /v3/mail/send` request.
///
/// The remote service requires at least one personalization, a sender, a
/// subject (unless every personalization overrides it) and one content part.
/// None of that is checked here; a document missing them is rejected by the
/// service with a `400` and an `errors` list.
///
/// Every field holding an empty value is left out of the JSON.
///
/// # Examples
/// ```
/// use sendgrid_client::{Email, Mail, Personalization};
///
/// let mut to = Personalization::new();
/// to.add_tos([Email::new("", "b@x.com")]);
///
/// let mut mail = Mail::new();
/// mail.set_from(Email::new("", "a@x.com"))
///     .set_subject("Hi")
///     .add_personalizations([to])
///     .set_text_content("hello");
///
/// let body = mail.to_json().unwrap();
/// assert!(body.starts_with(b"{\"personalizations\""));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mail {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub personalizations: Vec<Personalization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Email>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subject: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Content>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Email>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub template_id: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sections: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_args: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "super::is_zero")]
    pub send_at: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub batch_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asm: Option<Asm>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ip_pool_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail_settings: Option<MailSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_settings: Option<TrackingSettings>,
}

impl Mail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from its four required parts.
    pub fn with_parts(
        from: Email,
        subject: impl Into<String>,
        content: Vec<Content>,
        personalizations: Vec<Personalization>,
    ) -> Self {
        Self {
            from: Some(from),
            subject: subject.into(),
            content,
            personalizations,
            ..Self::default()
        }
    }

    pub fn add_personalizations(
        &mut self,
        personalizations: impl IntoIterator<Item = Personalization>,
    ) -> &mut Self {
        self.personalizations.extend(personalizations);
        self
    }

    pub fn set_from(&mut self, from: Email) -> &mut Self {
        self.from = Some(from);
        self
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) -> &mut Self {
        self.subject = subject.into();
        self
    }

    /// Append content parts in call order.
    ///
    /// The service expects `text/plain` before `text/html` when both are
    /// present. Parts are never reordered here.
    pub fn add_content(&mut self, content: impl IntoIterator<Item = Content>) -> &mut Self {
        self.content.extend(content);
        self
    }

    /// Append a `text/plain` part.
    ///
    /// This appends rather than replaces: calling it twice yields two
    /// plain-text parts.
    pub fn set_text_content(&mut self, text: impl Into<String>) -> &mut Self {
        self.content.push(Content::new("text/plain", text));
        self
    }

    /// Append a `text/html` part. Like [`Mail::set_text_content`], repeated
    /// calls append.
    pub fn set_html_content(&mut self, html: impl Into<String>) -> &mut Self {
        self.content.push(Content::new("text/html", html));
        self
    }

    pub fn set_reply_to(&mut self, reply_to: Email) -> &mut Self {
        self.reply_to = Some(reply_to);
        self
    }

    pub fn add_attachment(&mut self, attachments: impl IntoIterator<Item = Attachment>) -> &mut Self {
        self.attachments.extend(attachments);
        self
    }

    pub fn set_template_id(&mut self, template_id: impl Into<String>) -> &mut Self {
        self.template_id = template_id.into();
        self
    }

    /// Insert a substitution section, replacing any previous value for `key`.
    pub fn add_section(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.sections.insert(key.into(), value.into());
        self
    }

    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn add_categories<I, S>(&mut self, categories: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.extend(categories.into_iter().map(Into::into));
        self
    }

    pub fn set_custom_arg(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.custom_args.insert(key.into(), value.into());
        self
    }

    /// Schedule delivery, as a unix timestamp in seconds.
    pub fn set_send_at(&mut self, send_at: i64) -> &mut Self {
        self.send_at = send_at;
        self
    }

    pub fn set_batch_id(&mut self, batch_id: impl Into<String>) -> &mut Self {
        self.batch_id = batch_id.into();
        self
    }

    pub fn set_unsubscribe_group(&mut self, asm: Asm) -> &mut Self {
        self.asm = Some(asm);
        self
    }

    pub fn set_ip_pool_name(&mut self, ip_pool_name: impl Into<String>) -> &mut Self {
        self.ip_pool_name = ip_pool_name.into();
        self
    }

    pub fn set_mail_settings(&mut self, settings: MailSettings) -> &mut Self {
        self.mail_settings = Some(settings);
        self
    }

    pub fn set_tracking_settings(&mut self, settings: TrackingSettings) -> &mut Self {
        self.tracking_settings = Some(settings);
        self
    }

    /// Serialize the document to the JSON bytes expected by `mail/send`.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::{Disposition, Setting};
    use serde_json::{Value, json};

    fn minimal() -> Mail {
        let mut to = Personalization::new();
        to.add_tos([Email::new("", "b@x.com")]);

        let mut mail = Mail::new();
        mail.set_from(Email::new("", "a@x.com"))
            .add_personalizations([to])
            .set_subject("Hi")
            .set_text_content("hello");
        mail
    }

    fn to_value(mail: &Mail) -> Value {
        serde_json::from_slice(&mail.to_json().unwrap()).unwrap()
    }

    #[test]
    fn minimal_document_has_only_required_keys() {
        let value = to_value(&minimal());

        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["content", "from", "personalizations", "subject"]);

        assert_eq!(value["personalizations"][0]["to"][0]["email"], "b@x.com");
        assert_eq!(value["content"][0], json!({ "type": "text/plain", "value": "hello" }));
        assert_eq!(value["from"], json!({ "email": "a@x.com" }));
    }

    #[test]
    fn with_parts_matches_builder() {
        let mut to = Personalization::new();
        to.add_tos([Email::new("", "b@x.com")]);

        let mail = Mail::with_parts(
            Email::new("", "a@x.com"),
            "Hi",
            vec![Content::new("text/plain", "hello")],
            vec![to],
        );
        assert_eq!(mail, minimal());
    }

    #[test]
    fn no_attachments_key_without_attachments() {
        let value = to_value(&minimal());
        assert!(value.get("attachments").is_none());

        let mut mail = minimal();
        mail.add_attachment([Attachment::new().set_filename("a.txt").set_content("YQ==")]);
        let value = to_value(&mail);
        assert_eq!(
            value["attachments"],
            json!([{ "content": "YQ==", "filename": "a.txt" }])
        );
    }

    #[test]
    fn text_and_html_setters_append() {
        let mut mail = Mail::new();
        mail.set_text_content("one")
            .set_html_content("<p>two</p>")
            .set_text_content("three");

        let types: Vec<_> = mail.content.iter().map(|c| c.mime_type.as_str()).collect();
        assert_eq!(types, ["text/plain", "text/html", "text/plain"]);
    }

    #[test]
    fn add_content_preserves_order() {
        let mut mail = Mail::new();
        mail.add_content([
            Content::new("text/plain", "a"),
            Content::new("text/html", "b"),
        ])
        .add_content([Content::new("text/x-amp-html", "c")]);

        let values: Vec<_> = mail.content.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["a", "b", "c"]);
    }

    #[test]
    fn categories_append_across_calls() {
        let mut mail = Mail::new();
        mail.add_categories(["a"]).add_categories(["b", "c"]);
        assert_eq!(to_value(&mail)["categories"], json!(["a", "b", "c"]));
    }

    #[test]
    fn header_upsert_is_last_write_wins() {
        let mut mail = Mail::new();
        mail.set_header("X", "1").set_header("X", "2");
        assert_eq!(to_value(&mail)["headers"], json!({ "X": "2" }));
    }

    #[test]
    fn custom_args_and_sections_upsert() {
        let mut mail = Mail::new();
        mail.set_custom_arg("id", "1")
            .set_custom_arg("id", "2")
            .add_section("%footer%", "old")
            .add_section("%footer%", "new");

        let value = to_value(&mail);
        assert_eq!(value["custom_args"], json!({ "id": "2" }));
        assert_eq!(value["sections"], json!({ "%footer%": "new" }));
    }

    #[test]
    fn personalizations_do_not_share_storage() {
        let mut first = Personalization::new();
        first.add_tos([Email::new("", "a@x.com")]);
        let mut second = first.clone();
        second.set_substitution("k", "v");

        let mut mail = Mail::new();
        mail.add_personalizations([first, second]);
        mail.personalizations[0].add_tos([Email::new("", "c@x.com")]);

        assert_eq!(mail.personalizations[0].to.len(), 2);
        assert_eq!(mail.personalizations[1].to.len(), 1);
        assert!(mail.personalizations[0].substitutions.is_empty());
    }

    #[test]
    fn optional_top_level_fields() {
        let mut mail = Mail::new();
        mail.set_reply_to(Email::new("Support", "help@x.com"))
            .set_template_id("d-123")
            .set_send_at(1_700_000_000)
            .set_batch_id("batch-1")
            .set_unsubscribe_group(crate::mail::Asm::new().set_group_id(7))
            .set_ip_pool_name("transactional")
            .set_mail_settings(MailSettings::new().set_sandbox_mode(Setting::new(false)));

        assert_eq!(
            to_value(&mail),
            json!({
                "reply_to": { "name": "Support", "email": "help@x.com" },
                "template_id": "d-123",
                "send_at": 1_700_000_000,
                "batch_id": "batch-1",
                "asm": { "group_id": 7 },
                "ip_pool_name": "transactional",
                "mail_settings": { "sandbox_mode": { "enable": false } }
            })
        );
    }

    #[test]
    fn round_trip_is_structurally_identical() {
        let mut mail = minimal();
        mail.set_html_content("<b>hello</b>")
            .add_attachment([Attachment::new()
                .set_content("YQ==")
                .set_filename("a.txt")
                .set_disposition(Disposition::Inline)])
            .set_tracking_settings(
                TrackingSettings::new()
                    .set_click_tracking(crate::mail::ClickTrackingSetting::new(false)),
            );
        mail.personalizations[0].set_dynamic_template_data("n", json!({ "deep": [1, 2] }));

        let first = mail.to_json().unwrap();
        let decoded: Mail = serde_json::from_slice(&first).unwrap();
        assert_eq!(decoded, mail);

        let second = decoded.to_json().unwrap();
        let a: Value = serde_json::from_slice(&first).unwrap();
        let b: Value = serde_json::from_slice(&second).unwrap();
        assert_eq!(a, b);
    }
}
