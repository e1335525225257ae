//! Per-recipient-group overrides.

use super::Email;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One recipient group's copy of a message.
///
/// Each personalization is delivered as an independent copy with its own
/// recipients, substitutions and schedule. Values set here take precedence
/// over the same fields on the [`Mail`](super::Mail).
///
/// Mutators work in place and return `&mut Self` so calls can be chained:
///
/// ```
/// use sendgrid_client::{Email, Personalization};
///
/// let mut p = Personalization::new();
/// p.add_tos([Email::new("Bob", "bob@example.com")])
///     .set_substitution("-name-", "Bob")
///     .set_send_at(1_700_000_000);
/// assert_eq!(p.to.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Personalization {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<Email>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<Email>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<Email>,
    /// Overrides the message subject for this group.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subject: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub substitutions: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_args: BTreeMap<String, String>,
    /// Unix timestamp in seconds. Zero means "send now".
    #[serde(default, skip_serializing_if = "super::is_zero")]
    pub send_at: i64,
    /// Handlebars data for dynamic templates.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dynamic_template_data: BTreeMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
}

impl Personalization {
    /// Create a personalization with every list and map empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `to` recipients. Order is kept and duplicates are allowed.
    pub fn add_tos(&mut self, to: impl IntoIterator<Item = Email>) -> &mut Self {
        self.to.extend(to);
        self
    }

    pub fn add_ccs(&mut self, cc: impl IntoIterator<Item = Email>) -> &mut Self {
        self.cc.extend(cc);
        self
    }

    pub fn add_bccs(&mut self, bcc: impl IntoIterator<Item = Email>) -> &mut Self {
        self.bcc.extend(bcc);
        self
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) -> &mut Self {
        self.subject = subject.into();
        self
    }

    /// Insert a header, replacing any previous value for `key`.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Insert a substitution, replacing any previous value for `key`.
    pub fn set_substitution(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.substitutions.insert(key.into(), value.into());
        self
    }

    pub fn set_custom_arg(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.custom_args.insert(key.into(), value.into());
        self
    }

    /// Insert a dynamic template value. Accepts anything convertible to a
    /// JSON value, including `serde_json::json!` literals.
    pub fn set_dynamic_template_data(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> &mut Self {
        self.dynamic_template_data.insert(key.into(), value.into());
        self
    }

    /// Schedule delivery, as a unix timestamp in seconds.
    pub fn set_send_at(&mut self, send_at: i64) -> &mut Self {
        self.send_at = send_at;
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_personalization_serializes_empty() {
        let value = serde_json::to_value(Personalization::new()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn recipients_keep_order_and_duplicates() {
        let mut p = Personalization::new();
        p.add_tos([Email::new("", "a@x.com"), Email::new("", "b@x.com")])
            .add_tos([Email::new("", "a@x.com")])
            .add_ccs([Email::new("C", "c@x.com")])
            .add_bccs([Email::new("", "d@x.com")]);

        let to: Vec<_> = p.to.iter().map(|e| e.address.as_str()).collect();
        assert_eq!(to, ["a@x.com", "b@x.com", "a@x.com"]);
        assert_eq!(p.cc, vec![Email::new("C", "c@x.com")]);
        assert_eq!(p.bcc.len(), 1);
    }

    #[test]
    fn map_setters_are_last_write_wins() {
        let mut p = Personalization::new();
        p.set_header("X", "1")
            .set_header("X", "2")
            .set_substitution("-name-", "A")
            .set_substitution("-name-", "B")
            .set_custom_arg("id", "1")
            .set_custom_arg("id", "2");

        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["headers"], json!({ "X": "2" }));
        assert_eq!(value["substitutions"], json!({ "-name-": "B" }));
        assert_eq!(value["custom_args"], json!({ "id": "2" }));
    }

    #[test]
    fn dynamic_template_data_accepts_json() {
        let mut p = Personalization::new();
        p.set_dynamic_template_data("name", "Ada")
            .set_dynamic_template_data("total", 42)
            .set_dynamic_template_data("items", json!([{ "sku": "a1" }]));

        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(
            value["dynamic_template_data"],
            json!({ "name": "Ada", "total": 42, "items": [{ "sku": "a1" }] })
        );
    }

    #[test]
    fn categories_append_in_order() {
        let mut p = Personalization::new();
        p.add_categories(["a"]).add_categories(["b", "c"]);
        assert_eq!(p.categories, ["a", "b", "c"]);
    }

    #[test]
    fn subject_and_schedule() {
        let mut p = Personalization::new();
        p.set_subject("Override").set_send_at(1_700_000_000);

        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(
            value,
            json!({ "subject": "Override", "send_at": 1_700_000_000 })
        );
    }
}
