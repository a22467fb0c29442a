//! Remote JSON fetching
//!
//! The resolver only talks to the network through [`Fetcher`], so tests and
//! offline runs can swap the HTTP client for [`MemoryFetcher`] or
//! [`OfflineFetcher`].

mod http;
mod memory;

pub use http::HttpFetcher;
pub use memory::{MemoryFetcher, MemoryResponse};

use crate::error::ResolveError;
use async_trait::async_trait;

/// Result type for fetch operations
pub type FetchResult<T> = std::result::Result<T, ResolveError>;

/// Abstract remote source client
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET a URL and parse the body as JSON
    ///
    /// Fails with `Transport` on connection errors and non-success statuses,
    /// and with `MalformedResponse` when the body is not JSON.
    async fn get_json(&self, url: &str) -> FetchResult<serde_json::Value>;

    /// Check that a URL answers with a success status without reading the body
    async fn probe(&self, url: &str) -> FetchResult<()>;
}

/// Fetcher that never reaches the network
///
/// Every request fails with a transport error, which drives every resolution
/// to its offline fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineFetcher;

impl OfflineFetcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Fetcher for OfflineFetcher {
    async fn get_json(&self, url: &str) -> FetchResult<serde_json::Value> {
        Err(offline(url))
    }

    async fn probe(&self, url: &str) -> FetchResult<()> {
        Err(offline(url))
    }
}

fn offline(url: &str) -> ResolveError {
    ResolveError::Transport {
        url: url.to_string(),
        reason: "offline mode".to_string(),
    }
}
