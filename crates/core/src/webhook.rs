use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::{PanelError, Result};

/// The remote summarizer. Implementations perform exactly one request per call.
#[async_trait]
pub trait SummaryWebhook: Send + Sync {
    /// Send `url` to the summarizer and return its decoded JSON body.
    async fn summarize(&self, url: &str) -> Result<Value>;
}

#[derive(Serialize)]
struct SummaryRequest<'a> {
    url: &'a str,
}

/// `SummaryWebhook` over HTTP: `POST {"url": ...}` to a fixed endpoint.
///
/// No timeout is configured; a request runs until the server answers or the
/// connection fails.
#[derive(Clone, Debug)]
pub struct HttpWebhook {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpWebhook {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SummaryWebhook for HttpWebhook {
    async fn summarize(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&SummaryRequest { url })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), endpoint = %self.endpoint, "webhook responded");

        if !status.is_success() {
            return Err(PanelError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
#[path = "webhook_test.rs"]
mod tests;
