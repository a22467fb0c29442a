//! Application state

use anyhow::{Context, Result};
use axum::http::{header, HeaderMap};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tilawa_core::{ChapterId, ContentResolver, ResolverConfig, UserStateStore};
use tokio::sync::RwLock;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Chapter and verse resolution
    pub resolver: Arc<ContentResolver>,

    /// Bookmarks and theme
    pub store: Arc<RwLock<UserStateStore>>,

    /// Reader position and playback
    pub session: Arc<RwLock<Session>>,

    /// Public base URL for share links; derived from the Host header when unset
    pub base_url: Option<String>,
}

/// What the reader is currently doing
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Session {
    /// Last chapter opened
    pub current_chapter: Option<ChapterId>,

    /// Chapter whose recitation is playing
    pub now_playing: Option<ChapterId>,
}

impl Session {
    /// Start playing `id`, or stop if it is already playing
    ///
    /// Returns whether `id` is playing afterwards.
    pub fn toggle_playing(&mut self, id: ChapterId) -> bool {
        if self.now_playing == Some(id) {
            self.now_playing = None;
            false
        } else {
            self.now_playing = Some(id);
            true
        }
    }
}

impl AppState {
    /// Create application state from `TILAWA_*` environment variables
    pub async fn new() -> Result<Self> {
        let data_path =
            std::env::var("TILAWA_DATA_PATH").unwrap_or_else(|_| "./tilawa_data".to_string());
        let data_path = PathBuf::from(data_path);

        let config = ResolverConfig::from_env();
        let offline = std::env::var("TILAWA_OFFLINE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let resolver = if offline {
            tracing::info!("Offline mode: remote sources disabled");
            ContentResolver::offline(config)
        } else {
            ContentResolver::http(config)
        };

        let store = UserStateStore::open_dir(&data_path)
            .await
            .with_context(|| format!("Failed to load user state from {}", data_path.display()))?;

        let base_url = std::env::var("TILAWA_BASE_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_string());

        Ok(Self::with_parts(resolver, store, base_url))
    }

    /// Assemble state from already-built parts
    pub fn with_parts(
        resolver: ContentResolver,
        store: UserStateStore,
        base_url: Option<String>,
    ) -> Self {
        Self {
            resolver: Arc::new(resolver),
            store: Arc::new(RwLock::new(store)),
            session: Arc::new(RwLock::new(Session::default())),
            base_url,
        }
    }

    /// Base URL for share links: configured value, else the Host header
    pub fn base_url(&self, headers: &HeaderMap) -> String {
        if let Some(ref base_url) = self.base_url {
            return base_url.clone();
        }

        if let Some(host) = headers.get(header::HOST).and_then(|h| h.to_str().ok()) {
            let scheme = if host.starts_with("localhost") || host.starts_with("127.0.0.1") {
                "http"
            } else {
                "https"
            };
            return format!("{}://{}", scheme, host);
        }

        "http://localhost:3000".to_string()
    }
}
