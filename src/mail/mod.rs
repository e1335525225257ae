//! Typed model of the `mail/send` request body.
//!
//! All types here are plain values. They are assembled with chainable
//! setters, serialized once with `serde`, and never validated beyond
//! [`Email::parse`]. A [`Mail`] is not meant to be mutated from several
//! threads at once; share it behind a lock if you need to.

mod address;
mod asm;
mod attachment;
mod content;
mod message;
mod personalization;
mod settings;

pub use address::Email;
pub use asm::Asm;
pub use attachment::{Attachment, Disposition};
pub use content::Content;
pub use message::Mail;
pub use personalization::Personalization;
pub use settings::{
    BccSetting, ClickTrackingSetting, FooterSetting, GaSetting, MailSettings,
    OpenTrackingSetting, SandboxModeSetting, Setting, SpamCheckSetting,
    SubscriptionTrackingSetting, TrackingSettings,
};

/// Numeric fields equal to zero are left out of the JSON.
fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
