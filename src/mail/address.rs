//! Sender and recipient addresses.

use crate::{Error, Result};
use lettre::message::Mailbox;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A named email endpoint: an optional display name and an address.
///
/// Serializes as `{"name": ..., "email": ...}`, with an empty name omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Display name, e.g. `"Jane Doe"`. Empty when the address is bare.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// The mailbox address, e.g. `"jane@example.com"`.
    #[serde(rename = "email", default, skip_serializing_if = "String::is_empty")]
    pub address: String,
}

impl Email {
    /// Create an address from a display name and a mailbox address.
    ///
    /// No validation is performed; use [`Email::parse`] for untrusted input.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// Parse an RFC 822 formatted mailbox.
    ///
    /// Accepts both `"Display Name <user@example.com>"` and a bare
    /// `"user@example.com"`.
    ///
    /// # Errors
    /// Returns [`Error::Address`] when `raw` is not a valid mailbox.
    ///
    /// # Examples
    /// ```
    /// use sendgrid_client::Email;
    ///
    /// let email = Email::parse("Jane Doe <jane@example.com>").unwrap();
    /// assert_eq!(email, Email::new("Jane Doe", "jane@example.com"));
    /// assert!(Email::parse("not-an-email").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let mailbox: Mailbox = raw.parse().map_err(|e| Error::Address {
            input: raw.to_string(),
            reason: format!("{e}"),
        })?;

        Ok(Self {
            name: mailbox.name.unwrap_or_default(),
            address: mailbox.email.to_string(),
        })
    }
}

impl FromStr for Email {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
