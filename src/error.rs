//! Error types for the SendGrid client.

use thiserror::Error;

/// Errors produced by the client and the mail document model.
#[derive(Error, Debug)]
pub enum Error {
    /// A string could not be parsed as an RFC 822 mailbox.
    #[error("invalid email address {input:?}: {reason}")]
    Address {
        /// The raw string that was rejected.
        input: String,
        /// Why the mailbox parser rejected it.
        reason: String,
    },

    /// Building, sending, or reading an HTTP request failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A body could not be encoded to, or decoded from, JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API key or user agent is not a valid HTTP header value.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The API key environment variable was not set.
    #[error("environment variable {0} is not set")]
    MissingApiKey(&'static str),
}
