//! In-memory fetcher (for testing)

use super::{FetchResult, Fetcher};
use crate::error::ResolveError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Canned answer for one URL
#[derive(Debug, Clone)]
pub enum MemoryResponse {
    /// 200 with a JSON body
    Json(serde_json::Value),
    /// 200 with a raw body that may not be JSON
    Body(String),
    /// Non-success HTTP status
    Status(u16),
    /// Never answers within the given duration, then fails as a timeout
    Stall(Duration),
}

/// Fetcher answering from a URL map and recording every request
///
/// URLs without a registered response fail with a transport error.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    responses: std::sync::RwLock<HashMap<String, MemoryResponse>>,
    calls: std::sync::Mutex<Vec<String>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response for a URL
    pub fn insert(&self, url: impl Into<String>, response: MemoryResponse) {
        self.responses.write().unwrap().insert(url.into(), response);
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(self, url: impl Into<String>, response: MemoryResponse) -> Self {
        self.insert(url, response);
        self
    }

    /// Register a JSON body for a URL
    pub fn with_json(self, url: impl Into<String>, body: serde_json::Value) -> Self {
        self.with(url, MemoryResponse::Json(body))
    }

    /// Every URL requested so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, url: &str) -> Option<MemoryResponse> {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses.read().unwrap().get(url).cloned()
    }
}

#[async_trait]
impl Fetcher for MemoryFetcher {
    async fn get_json(&self, url: &str) -> FetchResult<serde_json::Value> {
        match self.record(url) {
            Some(MemoryResponse::Json(value)) => Ok(value),
            Some(MemoryResponse::Body(body)) => {
                serde_json::from_str(&body).map_err(|e| ResolveError::MalformedResponse {
                    url: url.to_string(),
                    reason: format!("body is not JSON: {}", e),
                })
            }
            Some(MemoryResponse::Status(status)) => Err(ResolveError::Transport {
                url: url.to_string(),
                reason: format!("HTTP error! status: {}", status),
            }),
            Some(MemoryResponse::Stall(duration)) => {
                tokio::time::sleep(duration).await;
                Err(ResolveError::Timeout { after: duration })
            }
            None => Err(ResolveError::Transport {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            }),
        }
    }

    async fn probe(&self, url: &str) -> FetchResult<()> {
        match self.record(url) {
            Some(MemoryResponse::Json(_)) | Some(MemoryResponse::Body(_)) => Ok(()),
            Some(MemoryResponse::Stall(duration)) => {
                tokio::time::sleep(duration).await;
                Err(ResolveError::Timeout { after: duration })
            }
            Some(MemoryResponse::Status(status)) => Err(ResolveError::Transport {
                url: url.to_string(),
                reason: format!("HTTP error! status: {}", status),
            }),
            None => Err(ResolveError::Transport {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            }),
        }
    }
}
