//! Raw API responses.

use crate::Result;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::Deserialize;
use serde::de::{self, DeserializeOwned, Unexpected};
use serde_json::Value;

/// One entry of the `errors` array returned by the v3 API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDetails {
    /// The offending request field, or `None` for request-level errors.
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// The response to a v3 API call.
///
/// Non-2xx statuses are not turned into errors; inspect
/// [`Response::status_code`] and [`Response::errors`] instead.
#[derive(Debug, Clone)]
pub struct Response {
    pub raw_body: Vec<u8>,
    pub status_code: StatusCode,
    pub headers: HeaderMap,
    /// Populated by [`Client::get`](crate::Client::get) only. Responses to
    /// POST requests keep the body unparsed.
    pub errors: Vec<ErrorDetails>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ErrorDetails>,
}

impl Response {
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self> {
        let status_code = response.status();
        let headers = response.headers().clone();
        let raw_body = response.bytes().await?.to_vec();

        Ok(Self {
            raw_body,
            status_code,
            headers,
            errors: Vec::new(),
        })
    }

    /// Parse the body as the `{"errors": [...]}` envelope and store the list.
    ///
    /// Only a JSON object is accepted. Arrays and scalars are rejected even
    /// though a derived struct would otherwise decode some arrays.
    pub(crate) fn decode_errors(&mut self) -> Result<()> {
        let body: Value = serde_json::from_slice(&self.raw_body)?;
        let unexpected = match &body {
            Value::Object(_) => None,
            Value::Array(_) => Some(Unexpected::Seq),
            Value::Null => Some(Unexpected::Unit),
            Value::Bool(b) => Some(Unexpected::Bool(*b)),
            Value::Number(_) => Some(Unexpected::Other("number")),
            Value::String(s) => Some(Unexpected::Str(s)),
        };
        if let Some(unexpected) = unexpected {
            let err = <serde_json::Error as de::Error>::invalid_type(unexpected, &"a JSON object");
            return Err(err.into());
        }

        let envelope: ErrorEnvelope = serde_json::from_value(body)?;
        self.errors = envelope.errors;
        Ok(())
    }

    /// `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        self.status_code.is_success()
    }

    /// Decode the raw body into a caller-chosen type.
    ///
    /// # Errors
    /// Returns [`Error::Json`](crate::Error::Json) if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.raw_body)?)
    }
}
