use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::config::ProviderCredentials;

pub const DEFAULT_BASE_URL: &str = "https://api.mailerlite.com/api/2/";
pub const API_KEY_HEADER: &str = "X-MailerLite-Apikey";

/// Anything that can hand an email over to the mailing-list provider.
///
/// The router only ever talks to this trait, the response is returned as is
/// and interpreting it is left to the caller.
#[async_trait]
pub trait SubscriberClient: Send + Sync {
    async fn submit(&self, email: &str) -> Result<ProviderResponse>;
}

/// Raw outcome of a call to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ProviderResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        ProviderResponse {
            status,
            body: body.into(),
        }
    }
}

#[derive(Debug)]
pub struct MailerLiteClient {
    pub http_client: Client,
    pub base_url: reqwest::Url,
    credentials: ProviderCredentials,
}

impl MailerLiteClient {
    /// Without a `timeout` the request waits as long as the `reqwest` default allows.
    pub fn new<S: AsRef<str>>(
        base_url: S,
        credentials: ProviderCredentials,
        timeout: Option<std::time::Duration>,
    ) -> Result<Self> {
        // `Url::join` drops the last segment of a base without a trailing slash.
        let mut base_url = base_url.as_ref().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url =
            reqwest::Url::parse(&base_url).map_err(|e| Error::UrlParsing(e.to_string()))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(MailerLiteClient {
            http_client,
            base_url,
            credentials,
        })
    }

    /// `{base_url}groups/{group_id}/subscribers`, the group id goes in as is.
    pub fn subscribers_url(&self) -> Result<reqwest::Url> {
        self.base_url
            .join(&format!("groups/{}/subscribers", self.credentials.group_id))
            .map_err(|e| Error::UrlParsing(e.to_string()))
    }
}

#[async_trait]
impl SubscriberClient for MailerLiteClient {
    #[tracing::instrument(
        name = "Submitting subscriber to MailerLite",
        skip(self, email),
        fields(group_id = %self.credentials.group_id)
    )]
    async fn submit(&self, email: &str) -> Result<ProviderResponse> {
        let url = self.subscribers_url()?;

        let new_subscriber = NewSubscriber {
            email,
            kind: SubscriberType::Unconfirmed,
        };

        let resp = self
            .http_client
            .post(url)
            .header(API_KEY_HEADER, self.credentials.api_token.expose_secret())
            .json(&new_subscriber)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!("{:<12} - provider answered with: {status}", "SUBMIT");

        Ok(ProviderResponse::new(status, body))
    }
}

/// Request body, serializes to `{"email": ..., "type": "unconfirmed"}`.
#[derive(Serialize)]
pub struct NewSubscriber<'a> {
    pub email: &'a str,
    #[serde(rename = "type")]
    pub kind: SubscriberType,
}

#[derive(Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberType {
    Unconfirmed,
}

// ###################################
// ->   ERROR & RESULT
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, derive_more::From)]
pub enum Error {
    UrlParsing(String),
    #[from]
    Reqwest(reqwest::Error),
}
// Error Boilerplate
impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
