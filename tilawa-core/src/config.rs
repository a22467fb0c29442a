//! Resolver configuration
//!
//! Source lists are URL templates: `{id}` expands to the chapter number and
//! `{id:03}` to its zero-padded three digit form.

use crate::types::{ChapterId, Language};
use std::time::Duration;

/// Default minimum size of an acceptable bulk chapter list
pub const DEFAULT_MIN_CHAPTER_COUNT: usize = 100;

/// Translation sources for one language
#[derive(Debug, Clone)]
pub struct TranslationSource {
    pub language: Language,
    pub urls: Vec<String>,
}

/// Configuration for the content resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Bulk "all chapters" endpoints, in priority order
    pub chapter_list_sources: Vec<String>,

    /// Single chapter metadata endpoints
    pub chapter_sources: Vec<String>,

    /// Original-text verse endpoints
    pub verse_sources: Vec<String>,

    /// One source chain per translation language
    pub translation_sources: Vec<TranslationSource>,

    /// Recitation audio streams
    pub audio_sources: Vec<String>,

    /// Deadline for the whole bulk chapter list chain
    pub list_timeout: Duration,

    /// Per-request deadline applied by the HTTP client
    pub request_timeout: Duration,

    /// A bulk list shorter than this is treated as malformed
    pub min_chapter_count: usize,

    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            chapter_list_sources: vec![
                "https://api.quran.com/api/v4/chapters?language=en".to_string(),
                "https://cdn.jsdelivr.net/gh/risan/quran-json@main/dist/chapters.json".to_string(),
                "https://raw.githubusercontent.com/semarketir/quraan-corpus/master/QuranicArabicCorpus.json"
                    .to_string(),
            ],
            chapter_sources: vec![
                "https://api.quran.com/api/v4/chapters/{id}?language=en".to_string(),
                "https://cdn.jsdelivr.net/gh/risan/quran-json@main/dist/chapters.json".to_string(),
            ],
            verse_sources: vec![
                "https://api.quran.com/api/v4/quran/verses/uthmani?chapter_number={id}".to_string(),
                "https://cdn.jsdelivr.net/gh/risan/quran-json@main/dist/verses/{id}.json".to_string(),
            ],
            translation_sources: vec![
                TranslationSource {
                    language: Language::English,
                    urls: vec![
                        "https://api.quran.com/api/v4/quran/translations/20?chapter_number={id}"
                            .to_string(),
                        "https://cdn.jsdelivr.net/gh/risan/quran-json@main/dist/translations/en/{id}.json"
                            .to_string(),
                    ],
                },
                TranslationSource {
                    language: Language::Urdu,
                    urls: vec![
                        "https://api.quran.com/api/v4/quran/translations/158?chapter_number={id}"
                            .to_string(),
                        "https://cdn.jsdelivr.net/gh/risan/quran-json@main/dist/translations/ur/{id}.json"
                            .to_string(),
                    ],
                },
            ],
            audio_sources: vec![
                "https://server8.mp3quran.net/afs/{id:03}.mp3".to_string(),
                "https://cdn.islamic.network/quran/audio-surah/128/ar.alafasy/{id}.mp3".to_string(),
            ],
            list_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(10),
            min_chapter_count: DEFAULT_MIN_CHAPTER_COUNT,
            user_agent: format!("tilawa/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ResolverConfig {
    /// Defaults with overrides from `TILAWA_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults with overrides read through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        match parse_var::<usize>(&lookup, "TILAWA_MIN_CHAPTERS") {
            Some(0) => tracing::warn!("Ignoring TILAWA_MIN_CHAPTERS=0: an empty list is never usable"),
            Some(n) => config.min_chapter_count = n,
            None => {}
        }
        if let Some(secs) = parse_var::<u64>(&lookup, "TILAWA_LIST_TIMEOUT_SECS") {
            config.list_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var::<u64>(&lookup, "TILAWA_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(secs);
        }

        config
    }

    /// Set the bulk list acceptance threshold, at least one chapter
    pub fn with_min_chapter_count(mut self, n: usize) -> Self {
        self.min_chapter_count = n.max(1);
        self
    }

    /// Set the bulk list deadline
    pub fn with_list_timeout(mut self, timeout: Duration) -> Self {
        self.list_timeout = timeout;
        self
    }
}

fn parse_var<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a valid value", name, raw);
            None
        }
    }
}

/// Expand `{id}` / `{id:03}` in a URL template
pub fn expand(template: &str, id: ChapterId) -> String {
    template
        .replace("{id:03}", &id.padded())
        .replace("{id}", &id.to_string())
}

/// Expand every template in a list
pub fn expand_all(templates: &[String], id: ChapterId) -> Vec<String> {
    templates.iter().map(|t| expand(t, id)).collect()
}
