//! CLI command implementations

mod audio;
mod bookmarks;
mod diagnostics;
mod list;
mod read;

pub use audio::audio;
pub use bookmarks::{bookmark, bookmarks, theme};
pub use diagnostics::{check, verify};
pub use list::list;
pub use read::read;

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::PathBuf;
use tilawa_core::{ContentResolver, Language, ResolverConfig, UserStateStore};

/// Translation selection for `read`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LangArg {
    English,
    Urdu,
    Both,
}

impl LangArg {
    pub fn languages(self) -> &'static [Language] {
        match self {
            LangArg::English => &[Language::English],
            LangArg::Urdu => &[Language::Urdu],
            LangArg::Both => &Language::ALL,
        }
    }
}

/// Theme argument for `theme`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

/// Shared state for every command
pub struct AppContext {
    pub resolver: ContentResolver,
    pub data_dir: PathBuf,
}

impl AppContext {
    pub fn new(offline: bool, data_dir: Option<PathBuf>) -> Result<Self> {
        let config = ResolverConfig::from_env();
        let resolver = if offline {
            tracing::debug!("Offline mode: remote sources disabled");
            ContentResolver::offline(config)
        } else {
            ContentResolver::http(config)
        };

        let data_dir = match data_dir {
            Some(dir) => dir,
            None => directories::ProjectDirs::from("org", "tilawa", "tilawa")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .context("Could not determine a data directory; pass --data-dir")?,
        };

        Ok(Self { resolver, data_dir })
    }

    /// Open the bookmark and theme store, creating the data directory if needed
    pub async fn open_store(&self) -> Result<UserStateStore> {
        UserStateStore::open_dir(&self.data_dir)
            .await
            .with_context(|| format!("Failed to load user state from {}", self.data_dir.display()))
    }
}
