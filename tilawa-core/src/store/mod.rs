//! User state: bookmarks and theme
//!
//! State is loaded once when the store is opened and written back in full on
//! every mutation.

mod backend;

pub use backend::{FileBackend, MemoryBackend, StateBackend, StoreResult};

use crate::error::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Backend key holding the JSON array of bookmark strings
pub const BOOKMARKS_KEY: &str = "quranBookmarks";

/// Backend key holding `"true"`/`"false"` for night mode
pub const NIGHT_MODE_KEY: &str = "nightMode";

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn from_flag(flag: &str) -> Self {
        if flag.trim() == "true" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn flag(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }
}

/// What a bookmark toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkToggle {
    Added,
    Removed,
}

/// Exported bookmark file contents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkExport {
    pub bookmarks: Vec<String>,
    pub export_date: DateTime<Utc>,
    pub total_count: usize,
}

impl BookmarkExport {
    /// Download file name, e.g. `quran-bookmarks-2024-05-01.json`
    pub fn file_name(&self) -> String {
        format!("quran-bookmarks-{}.json", self.export_date.format("%Y-%m-%d"))
    }
}

/// Bookmarks and theme, persisted through a [`StateBackend`]
pub struct UserStateStore {
    backend: Arc<dyn StateBackend>,
    bookmarks: Vec<String>,
    theme: Theme,
}

impl UserStateStore {
    /// Load persisted state
    ///
    /// An unreadable bookmark value is logged and replaced by an empty set.
    pub async fn open(backend: Arc<dyn StateBackend>) -> StoreResult<Self> {
        let bookmarks = match backend.get(BOOKMARKS_KEY).await? {
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(list) => {
                    let mut unique: Vec<String> = Vec::with_capacity(list.len());
                    for key in list {
                        if !unique.contains(&key) {
                            unique.push(key);
                        }
                    }
                    unique
                }
                Err(e) => {
                    tracing::warn!("Failed to load bookmarks, starting fresh: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let theme = backend
            .get(NIGHT_MODE_KEY)
            .await?
            .map(|flag| Theme::from_flag(&flag))
            .unwrap_or_default();

        tracing::debug!("Loaded {} bookmarks, theme {:?}", bookmarks.len(), theme);

        Ok(Self {
            backend,
            bookmarks,
            theme,
        })
    }

    /// Open a file-backed store under `dir`, creating the directory if needed
    pub async fn open_dir(dir: impl AsRef<Path>) -> crate::Result<Self> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;
        let store = Self::open(Arc::new(FileBackend::new(dir))).await?;
        Ok(store)
    }

    /// Remove the key if present, else append it; then persist the collection
    ///
    /// If persisting fails the change is rolled back.
    pub async fn toggle_bookmark(&mut self, key: &str) -> StoreResult<BookmarkToggle> {
        let position = self.bookmarks.iter().position(|b| b == key);
        let change = match position {
            Some(index) => {
                self.bookmarks.remove(index);
                BookmarkToggle::Removed
            }
            None => {
                self.bookmarks.push(key.to_string());
                BookmarkToggle::Added
            }
        };

        if let Err(e) = self.persist_bookmarks().await {
            match position {
                Some(index) => self.bookmarks.insert(index, key.to_string()),
                None => {
                    self.bookmarks.pop();
                }
            }
            tracing::error!("Failed to save bookmarks: {}", e);
            return Err(e);
        }

        tracing::info!("Bookmark {:?}: {} (total {})", change, key, self.bookmarks.len());
        Ok(change)
    }

    pub fn is_bookmarked(&self, key: &str) -> bool {
        self.bookmarks.iter().any(|b| b == key)
    }

    /// Bookmarks in insertion order
    pub fn bookmarks(&self) -> &[String] {
        &self.bookmarks
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Persist and apply a theme
    pub async fn set_theme(&mut self, theme: Theme) -> StoreResult<()> {
        self.backend.set(NIGHT_MODE_KEY, theme.flag()).await?;
        self.theme = theme;
        Ok(())
    }

    /// Flip between light and dark, returning the new theme
    pub async fn toggle_theme(&mut self) -> StoreResult<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next).await?;
        Ok(next)
    }

    /// Snapshot of the bookmarks for export
    pub fn export(&self) -> BookmarkExport {
        BookmarkExport {
            bookmarks: self.bookmarks.clone(),
            export_date: Utc::now(),
            total_count: self.bookmarks.len(),
        }
    }

    async fn persist_bookmarks(&self) -> StoreResult<()> {
        let data = serde_json::to_string(&self.bookmarks).map_err(StoreError::from)?;
        self.backend.set(BOOKMARKS_KEY, &data).await
    }
}
