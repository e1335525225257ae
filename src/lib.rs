//! # SendGrid Client
//! Asynchronous client for the SendGrid v3 HTTP API, with a typed model of the `mail/send` request body ([`Mail`]) and thin GET/POST helpers on [`Client`] for every other endpoint.
//!
//! ## Audience and uses
//! For Rust services that send transactional email through SendGrid: assemble a [`Mail`] with its chainable setters, one [`Personalization`] per recipient group, then hand it to [`Client::send`].
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest` with a fixed per-request timeout and no retries.
//!
//! ## Out of scope
//! Not a general-purpose HTTP client. No rate limiting, caching, or retry policy, and no validation of field values beyond mailbox syntax in [`Email::parse`]. Missing required fields are reported by the remote service as a `400` with [`Response::errors`].
//!
//! ## Errors
//! Transport failures surface as [`Error::Request`], unparseable addresses as [`Error::Address`], and undecodable bodies as [`Error::Json`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use sendgrid_client::{Client, Email, Mail, MailSettings, Personalization, Setting};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendgrid_client::Error> {
//!     let client = Client::new("SG.xxxxx")?;
//!
//!     let mut to = Personalization::new();
//!     to.add_tos([Email::parse("Bob <bob@example.com>")?])
//!         .set_substitution("-name-", "Bob");
//!
//!     let mut mail = Mail::new();
//!     mail.set_from(Email::new("Alice", "alice@example.com"))
//!         .set_subject("Hello -name-")
//!         .add_personalizations([to])
//!         .set_text_content("Hi -name-")
//!         .set_html_content("<p>Hi -name-</p>")
//!         .set_mail_settings(MailSettings::new().set_sandbox_mode(Setting::new(true)));
//!
//!     let response = client.send(&mail).await?;
//!     println!("Status: {}", response.status_code);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
pub mod mail;
mod response;

pub use client::{API_BASE_URL, API_KEY_ENV, Client, ClientBuilder};
pub use error::Error;
pub use mail::{
    Asm, Attachment, BccSetting, ClickTrackingSetting, Content, Disposition, Email,
    FooterSetting, GaSetting, Mail, MailSettings, OpenTrackingSetting, Personalization,
    SandboxModeSetting, Setting, SpamCheckSetting, SubscriptionTrackingSetting,
    TrackingSettings,
};
pub use response::{ErrorDetails, Response};

/// Version of this library, sent in the default user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Major version of the SendGrid API this client targets.
pub const API_VERSION: u32 = 3;

/// Result type alias for SendGrid operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
