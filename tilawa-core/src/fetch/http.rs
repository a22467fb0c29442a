//! reqwest-backed fetcher

use super::{FetchResult, Fetcher};
use crate::config::ResolverConfig;
use crate::error::ResolveError;
use async_trait::async_trait;
use reqwest::header::ACCEPT;

/// HTTP client for the remote content sources
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher using the request timeout and user agent from the config
    pub fn new(config: &ResolverConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self { client }
    }
}

fn transport(url: &str, err: reqwest::Error) -> ResolveError {
    let reason = if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        err.to_string()
    };
    ResolveError::Transport {
        url: url.to_string(),
        reason,
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> FetchResult<serde_json::Value> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Transport {
                url: url.to_string(),
                reason: format!("HTTP error! status: {}", status.as_u16()),
            });
        }

        let body = response.text().await.map_err(|e| transport(url, e))?;
        serde_json::from_str(&body).map_err(|e| ResolveError::MalformedResponse {
            url: url.to_string(),
            reason: format!("body is not JSON: {}", e),
        })
    }

    async fn probe(&self, url: &str) -> FetchResult<()> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| transport(url, e))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ResolveError::Transport {
                url: url.to_string(),
                reason: format!("HTTP error! status: {}", response.status().as_u16()),
            })
        }
    }
}
