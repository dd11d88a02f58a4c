use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

use crate::{config::Config, error::TransportError};

/// Raw JSON exchange with one remote API. Gateways only ever talk to this
/// trait so their mapping logic can run against a fake.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, TransportError>;

    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError>;
}

/// Request client bound to a fixed base URL and timeout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Connect(format!("Failed to build client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn sports(config: &Config) -> Result<Self, TransportError> {
        Self::new(&config.sports_api_base_url, config.http_timeout)
    }

    pub fn auth(config: &Config) -> Result<Self, TransportError> {
        Self::new(&config.auth_api_base_url, config.http_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json(response: Response) -> Result<Value, TransportError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "upstream returned error status");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, TransportError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).query(query).send().await?;
        Self::read_json(response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        Self::read_json(response).await
    }
}
