use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use thiserror::Error;

/// Transport-level failure: the request never produced an HTTP status
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

/// A completed HTTP exchange with the upstream data source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    /// Reason phrase, e.g. `Not Found`
    pub status_text: String,
    /// Body text; left empty for non-success responses
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Seam between the client and the network.
///
/// [`HttpUpstream`] is the real implementation; tests plug in scripted ones.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn get(&self, url: &Url) -> Result<UpstreamResponse, TransportError>;
}

/// [`Upstream`] backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    /// Build the HTTP client. Without a timeout the transport defaults apply.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn get(&self, url: &Url) -> Result<UpstreamResponse, TransportError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        let status_text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());

        let body = if status.is_success() {
            response.text().await?
        } else {
            String::new()
        };

        Ok(UpstreamResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}
