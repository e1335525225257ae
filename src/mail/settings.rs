//! Delivery-control and tracking settings.
//!
//! Every setting carries an `enable` flag stored as `Option<bool>`. A flag
//! that was never set is left out of the JSON entirely, while `Some(false)`
//! is sent as `false`. The remote service treats a missing flag as "use the
//! account default", so the two are not interchangeable.
//!
//! [`MailSettings`] and [`TrackingSettings`] both expose `bcc`,
//! `bypass_list_management`, `footer` and `sandbox_mode`. The API accepts
//! them under either namespace and they are configured independently.

use serde::{Deserialize, Serialize};

/// A bare on/off toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
}

impl Setting {
    pub fn new(enable: bool) -> Self {
        Self {
            enable: Some(enable),
        }
    }
}

/// Blind-copy every message to a fixed address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BccSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
}

impl BccSetting {
    pub fn new(enable: bool, email: impl Into<String>) -> Self {
        Self {
            enable: Some(enable),
            email: email.into(),
        }
    }

    pub fn set_enable(mut self, enable: bool) -> Self {
        self.enable = Some(enable);
        self
    }

    pub fn set_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}

/// Footer appended to every message body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub html: String,
}

impl FooterSetting {
    pub fn new(enable: bool) -> Self {
        Self {
            enable: Some(enable),
            ..Self::default()
        }
    }

    pub fn set_enable(mut self, enable: bool) -> Self {
        self.enable = Some(enable);
        self
    }

    /// Plain-text footer, used for `text/plain` parts.
    pub fn set_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// HTML footer, used for `text/html` parts.
    pub fn set_html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self
    }
}

/// Spam scoring of outgoing content.
///
/// Messages scoring above `threshold` (1 to 10) are dropped and, if
/// `post_to_url` is set, reported there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpamCheckSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(default, skip_serializing_if = "super::is_zero")]
    pub threshold: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub post_to_url: String,
}

impl SpamCheckSetting {
    pub fn new(enable: bool) -> Self {
        Self {
            enable: Some(enable),
            ..Self::default()
        }
    }

    pub fn set_enable(mut self, enable: bool) -> Self {
        self.enable = Some(enable);
        self
    }

    pub fn set_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn set_post_to_url(mut self, url: impl Into<String>) -> Self {
        self.post_to_url = url.into();
        self
    }
}

/// Sandbox mode as accepted under `tracking_settings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxModeSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_spam: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spam_check: Option<SpamCheckSetting>,
}

impl SandboxModeSetting {
    pub fn new(enable: bool) -> Self {
        Self {
            enable: Some(enable),
            ..Self::default()
        }
    }

    pub fn set_enable(mut self, enable: bool) -> Self {
        self.enable = Some(enable);
        self
    }

    pub fn set_forward_spam(mut self, forward_spam: bool) -> Self {
        self.forward_spam = Some(forward_spam);
        self
    }

    pub fn set_spam_check(mut self, spam_check: SpamCheckSetting) -> Self {
        self.spam_check = Some(spam_check);
        self
    }
}

/// Link rewriting for click tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickTrackingSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    /// Also rewrite links in `text/plain` parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_text: Option<bool>,
}

impl ClickTrackingSetting {
    pub fn new(enable: bool) -> Self {
        Self {
            enable: Some(enable),
            enable_text: None,
        }
    }

    pub fn set_enable(mut self, enable: bool) -> Self {
        self.enable = Some(enable);
        self
    }

    pub fn set_enable_text(mut self, enable_text: bool) -> Self {
        self.enable_text = Some(enable_text);
        self
    }
}

/// Tracking pixel for open tracking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenTrackingSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    /// Tag in the body replaced by the pixel instead of appending it.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub substitution_tag: String,
}

impl OpenTrackingSetting {
    pub fn new(enable: bool) -> Self {
        Self {
            enable: Some(enable),
            ..Self::default()
        }
    }

    pub fn set_enable(mut self, enable: bool) -> Self {
        self.enable = Some(enable);
        self
    }

    pub fn set_substitution_tag(mut self, tag: impl Into<String>) -> Self {
        self.substitution_tag = tag.into();
        self
    }
}

/// Unsubscribe link inserted into the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionTrackingSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub html: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub substitution_tag: String,
}

impl SubscriptionTrackingSetting {
    pub fn new(enable: bool) -> Self {
        Self {
            enable: Some(enable),
            ..Self::default()
        }
    }

    pub fn set_enable(mut self, enable: bool) -> Self {
        self.enable = Some(enable);
        self
    }

    pub fn set_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn set_html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self
    }

    pub fn set_substitution_tag(mut self, tag: impl Into<String>) -> Self {
        self.substitution_tag = tag.into();
        self
    }
}

/// Google Analytics UTM parameters appended to tracked links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub utm_source: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub utm_medium: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub utm_term: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub utm_content: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub utm_campaign: String,
}

impl GaSetting {
    pub fn new(enable: bool) -> Self {
        Self {
            enable: Some(enable),
            ..Self::default()
        }
    }

    pub fn set_enable(mut self, enable: bool) -> Self {
        self.enable = Some(enable);
        self
    }

    pub fn set_campaign_source(mut self, source: impl Into<String>) -> Self {
        self.utm_source = source.into();
        self
    }

    pub fn set_campaign_medium(mut self, medium: impl Into<String>) -> Self {
        self.utm_medium = medium.into();
        self
    }

    pub fn set_campaign_term(mut self, term: impl Into<String>) -> Self {
        self.utm_term = term.into();
        self
    }

    pub fn set_campaign_content(mut self, content: impl Into<String>) -> Self {
        self.utm_content = content.into();
        self
    }

    pub fn set_campaign_name(mut self, name: impl Into<String>) -> Self {
        self.utm_campaign = name.into();
        self
    }
}

/// Settings under the `mail_settings` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcc: Option<BccSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bypass_list_management: Option<Setting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox_mode: Option<Setting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spam_check: Option<SpamCheckSetting>,
}

impl MailSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bcc(mut self, bcc: BccSetting) -> Self {
        self.bcc = Some(bcc);
        self
    }

    pub fn set_bypass_list_management(mut self, setting: Setting) -> Self {
        self.bypass_list_management = Some(setting);
        self
    }

    pub fn set_footer(mut self, footer: FooterSetting) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Validate the request without delivering it.
    pub fn set_sandbox_mode(mut self, setting: Setting) -> Self {
        self.sandbox_mode = Some(setting);
        self
    }

    pub fn set_spam_check(mut self, spam_check: SpamCheckSetting) -> Self {
        self.spam_check = Some(spam_check);
        self
    }
}

/// Settings under the `tracking_settings` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_tracking: Option<ClickTrackingSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_tracking: Option<OpenTrackingSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_tracking: Option<SubscriptionTrackingSetting>,
    #[serde(rename = "ganalytics", default, skip_serializing_if = "Option::is_none")]
    pub google_analytics: Option<GaSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcc: Option<BccSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bypass_list_management: Option<Setting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox_mode: Option<SandboxModeSetting>,
}

impl TrackingSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_click_tracking(mut self, setting: ClickTrackingSetting) -> Self {
        self.click_tracking = Some(setting);
        self
    }

    pub fn set_open_tracking(mut self, setting: OpenTrackingSetting) -> Self {
        self.open_tracking = Some(setting);
        self
    }

    pub fn set_subscription_tracking(mut self, setting: SubscriptionTrackingSetting) -> Self {
        self.subscription_tracking = Some(setting);
        self
    }

    pub fn set_google_analytics(mut self, setting: GaSetting) -> Self {
        self.google_analytics = Some(setting);
        self
    }

    pub fn set_bcc(mut self, bcc: BccSetting) -> Self {
        self.bcc = Some(bcc);
        self
    }

    pub fn set_bypass_list_management(mut self, setting: Setting) -> Self {
        self.bypass_list_management = Some(setting);
        self
    }

    pub fn set_footer(mut self, footer: FooterSetting) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn set_sandbox_mode(mut self, setting: SandboxModeSetting) -> Self {
        self.sandbox_mode = Some(setting);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_json<T: Serialize>(value: &T) -> serde_json::Value {
        serde_json::to_value(value).unwrap()
    }

    #[test]
    fn untouched_enable_is_omitted() {
        assert_eq!(to_json(&Setting::default()), json!({}));
        assert_eq!(to_json(&FooterSetting::default()), json!({}));
        assert_eq!(to_json(&GaSetting::default()), json!({}));
        assert_eq!(to_json(&ClickTrackingSetting::default()), json!({}));
    }

    #[test]
    fn explicit_false_is_emitted() {
        assert_eq!(to_json(&Setting::new(false)), json!({ "enable": false }));
        assert_eq!(
            to_json(&SpamCheckSetting::new(false)),
            json!({ "enable": false })
        );
        assert_eq!(
            to_json(&ClickTrackingSetting::new(true).set_enable_text(false)),
            json!({ "enable": true, "enable_text": false })
        );
        assert_eq!(
            to_json(&OpenTrackingSetting::default().set_enable(false)),
            json!({ "enable": false })
        );
    }

    #[test]
    fn explicit_true_is_emitted() {
        assert_eq!(to_json(&Setting::new(true)), json!({ "enable": true }));
    }

    #[test]
    fn bcc_serializes_email() {
        assert_eq!(
            to_json(&BccSetting::new(true, "audit@example.com")),
            json!({ "enable": true, "email": "audit@example.com" })
        );
    }

    #[test]
    fn spam_check_fields() {
        let spam = SpamCheckSetting::new(true)
            .set_threshold(5)
            .set_post_to_url("https://hooks.example.com/spam");
        assert_eq!(
            to_json(&spam),
            json!({
                "enable": true,
                "threshold": 5,
                "post_to_url": "https://hooks.example.com/spam"
            })
        );
    }

    #[test]
    fn empty_mail_settings_omit_every_child() {
        assert_eq!(to_json(&MailSettings::new()), json!({}));
        assert_eq!(to_json(&TrackingSettings::new()), json!({}));
    }

    #[test]
    fn mail_settings_nesting() {
        let settings = MailSettings::new()
            .set_sandbox_mode(Setting::new(true))
            .set_bypass_list_management(Setting::new(false))
            .set_footer(FooterSetting::new(true).set_text("bye"))
            .set_spam_check(SpamCheckSetting::new(true).set_threshold(3));

        assert_eq!(
            to_json(&settings),
            json!({
                "bypass_list_management": { "enable": false },
                "footer": { "enable": true, "text": "bye" },
                "sandbox_mode": { "enable": true },
                "spam_check": { "enable": true, "threshold": 3 }
            })
        );
    }

    #[test]
    fn tracking_settings_nesting() {
        let settings = TrackingSettings::new()
            .set_click_tracking(ClickTrackingSetting::new(true))
            .set_open_tracking(OpenTrackingSetting::new(true).set_substitution_tag("%open%"))
            .set_subscription_tracking(
                SubscriptionTrackingSetting::new(false).set_html("<a>unsub</a>"),
            )
            .set_google_analytics(
                GaSetting::new(true)
                    .set_campaign_source("newsletter")
                    .set_campaign_medium("email")
                    .set_campaign_term("rust")
                    .set_campaign_content("header")
                    .set_campaign_name("launch"),
            )
            .set_sandbox_mode(
                SandboxModeSetting::new(true)
                    .set_forward_spam(false)
                    .set_spam_check(SpamCheckSetting::new(true)),
            );

        assert_eq!(
            to_json(&settings),
            json!({
                "click_tracking": { "enable": true },
                "open_tracking": { "enable": true, "substitution_tag": "%open%" },
                "subscription_tracking": { "enable": false, "html": "<a>unsub</a>" },
                "ganalytics": {
                    "enable": true,
                    "utm_source": "newsletter",
                    "utm_medium": "email",
                    "utm_term": "rust",
                    "utm_content": "header",
                    "utm_campaign": "launch"
                },
                "sandbox_mode": {
                    "enable": true,
                    "forward_spam": false,
                    "spam_check": { "enable": true }
                }
            })
        );
    }

    #[test]
    fn namespaces_are_independent() {
        let mail = MailSettings::new().set_bcc(BccSetting::new(true, "a@example.com"));
        let tracking = TrackingSettings::new().set_bcc(BccSetting::new(false, "b@example.com"));

        assert_eq!(mail.bcc.unwrap().enable, Some(true));
        assert_eq!(tracking.bcc.unwrap().enable, Some(false));
    }

    #[test]
    fn tri_state_survives_decoding() {
        let decoded: Setting = serde_json::from_value(json!({ "enable": false })).unwrap();
        assert_eq!(decoded.enable, Some(false));

        let decoded: Setting = serde_json::from_value(json!({})).unwrap();
        assert_eq!(decoded.enable, None);
    }
}
