//! File attachments.

use serde::{Deserialize, Serialize};

/// How a mail client should present an attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Shown as a downloadable file.
    Attachment,
    /// Embedded in the HTML body, referenced by content id.
    Inline,
}

/// A file attached to a message.
///
/// Every field is optional here. The remote service rejects attachments
/// without `content` and `filename`, but this type only carries the values.
///
/// # Examples
/// ```
/// use sendgrid_client::{Attachment, Disposition};
///
/// let logo = Attachment::new()
///     .set_content("iVBORw0KGgo=")
///     .set_type("image/png")
///     .set_filename("logo.png")
///     .set_disposition(Disposition::Inline)
///     .set_content_id("logo");
/// assert_eq!(logo.filename, "logo.png");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Base64 encoded file content.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    /// MIME type of the file.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disposition: Option<Disposition>,
    /// Referenced from HTML as `cid:<content_id>` when inline.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_id: String,
}

impl Attachment {
    /// Create an empty attachment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base64 encoded content.
    pub fn set_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the MIME type.
    pub fn set_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn set_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn set_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = Some(disposition);
        self
    }

    pub fn set_content_id(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = content_id.into();
        self
    }
}
