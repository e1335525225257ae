//! SendGrid v3 async client implementation.

use crate::{Error, Mail, Response, Result, VERSION};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Base URL of the v3 API.
pub const API_BASE_URL: &str = "https://api.sendgrid.com/v3";

/// Environment variable read by [`Client::from_env`].
pub const API_KEY_ENV: &str = "SENDGRID_API_KEY";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Async client for the SendGrid v3 API.
///
/// Every request carries the same bearer token, user agent and
/// `Accept: application/json` headers, fixed when the client is built.
/// Requests are sent once, with no retry.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    headers: HeaderMap,
    base_url: String,
    proxy: Option<String>,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Create a client with default settings.
    ///
    /// # Examples
    /// ```no_run
    /// # use sendgrid_client::Client;
    /// let client = Client::new("SG.xxxxx")?;
    /// # Ok::<(), sendgrid_client::Error>(())
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// Create a client with default settings, reading the API key from
    /// the `SENDGRID_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| Error::MissingApiKey(API_KEY_ENV))?;
        Self::new(api_key)
    }

    /// The base URL endpoints are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the proxy URL if one was configured.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Send a mail document to `mail/send`.
    ///
    /// A `202 Accepted` status means the message was queued for delivery.
    ///
    /// # Examples
    /// ```no_run
    /// # use sendgrid_client::{Client, Email, Mail, Personalization};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), sendgrid_client::Error> {
    /// let client = Client::from_env()?;
    ///
    /// let mut to = Personalization::new();
    /// to.add_tos([Email::parse("Bob <bob@example.com>")?]);
    ///
    /// let mut mail = Mail::new();
    /// mail.set_from(Email::new("Alice", "alice@example.com"))
    ///     .set_subject("Hello")
    ///     .add_personalizations([to])
    ///     .set_text_content("Hi Bob");
    ///
    /// let response = client.send(&mail).await?;
    /// println!("{}", response.status_code);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send(&self, mail: &Mail) -> Result<Response> {
        let body = mail.to_json()?;
        self.post("mail/send", body).await
    }

    /// Make a GET call to any v3 endpoint.
    ///
    /// The body is parsed as the `{"errors": [...]}` envelope and the list
    /// is stored in [`Response::errors`]; if it is empty, decode the body
    /// with [`Response::json`].
    ///
    /// # Errors
    /// Returns [`Error::Request`] if the call or body read fails, and
    /// [`Error::Json`] if the body is not a JSON object.
    #[tracing::instrument(name = "sendgrid.get", skip_all, fields(endpoint = %endpoint), err)]
    pub async fn get<P>(&self, endpoint: &str, params: &P) -> Result<Response>
    where
        P: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint);
        debug!(%url, "sending GET request");

        let response = self
            .http
            .get(&url)
            .query(params)
            .headers(self.headers.clone())
            .send()
            .await?;

        let mut response = Response::read(response).await?;
        debug!(status = %response.status_code, "received response");

        response.decode_errors()?;
        Ok(response)
    }

    /// Make a POST call to any v3 endpoint with a JSON body.
    ///
    /// Unlike [`Client::get`], the body is returned unparsed and
    /// [`Response::errors`] stays empty.
    ///
    /// # Errors
    /// Returns [`Error::Request`] if the call or body read fails.
    #[tracing::instrument(
        name = "sendgrid.post",
        skip_all,
        fields(endpoint = %endpoint, body_len = body.len()),
        err
    )]
    pub async fn post(&self, endpoint: &str, body: Vec<u8>) -> Result<Response> {
        let url = self.endpoint_url(endpoint);
        debug!(%url, "sending POST request");

        let mut headers = self.headers.clone();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let response = self
            .http
            .post(&url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let response = Response::read(response).await?;
        debug!(status = %response.status_code, "received response");
        Ok(response)
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

fn default_user_agent() -> String {
    format!("sendgrid-rust/v{VERSION}")
}

/// Builder for configuring a SendGrid client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Clone)]
pub struct ClientBuilder {
    api_key: String,
    proxy: Option<String>,
    user_agent: String,
    base_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - No proxy
    /// - 30 second overall request timeout
    /// - `sendgrid-rust/v<version>` user agent
    /// - `https://api.sendgrid.com/v3` base URL
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            proxy: None,
            user_agent: default_user_agent(),
            base_url: API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080").
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the API base URL.
    ///
    /// Useful for testing against a local mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the overall per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHeader`] if the API key or user agent cannot
    /// be sent as a header, and [`Error::Request`] if the proxy URL is
    /// invalid or the HTTP client cannot be initialised.
    ///
    /// # Examples
    /// ```no_run
    /// # use sendgrid_client::Client;
    /// # use std::time::Duration;
    /// let client = Client::builder("SG.xxxxx")
    ///     .user_agent("my-app/1.0")
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// # Ok::<(), sendgrid_client::Error>(())
    /// ```
    pub fn build(self) -> Result<Client> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let http = builder.build()?;

        Ok(Client {
            http,
            headers: self.headers()?,
            base_url: self.base_url,
            proxy: self.proxy,
        })
    }

    /// Build the fixed header set sent with every request.
    fn headers(&self) -> Result<HeaderMap> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", self.api_key))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_key", &"<redacted>")
            .field("proxy", &self.proxy)
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
