//! Content resolver
//!
//! Produces chapters and verses for a chapter id, preferring live remote data
//! and degrading to the embedded dataset. Nothing is cached; every call goes
//! back to the sources.

use crate::config::{expand_all, ResolverConfig};
use crate::dataset;
use crate::error::ResolveError;
use crate::fetch::{Fetcher, HttpFetcher, OfflineFetcher};
use crate::parse;
use crate::source::{Origin, Resolved, SourceChain};
use crate::types::{Chapter, ChapterId, Language, Verse, VerseKind};
use futures::future::{join, join_all};
use serde::Serialize;
use std::sync::Arc;

/// A chapter with its verses, as shown on a chapter page
#[derive(Debug, Clone, Serialize)]
pub struct ChapterContent {
    pub chapter: Chapter,
    pub chapter_origin: Origin,
    pub verses: Vec<Verse>,
    pub verses_origin: Origin,
    /// Languages whose translation chain failed for this load
    pub missing_translations: Vec<Language>,
}

/// Outcome of a verse resolution, including per-language translation failures
#[derive(Debug)]
pub struct VerseResolution {
    pub verses: Resolved<Vec<Verse>>,
    pub missing_translations: Vec<Language>,
}

/// Resolves chapter metadata and verses through prioritized source chains
pub struct ContentResolver {
    fetcher: Arc<dyn Fetcher>,
    config: ResolverConfig,
}

impl ContentResolver {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: ResolverConfig) -> Self {
        Self { fetcher, config }
    }

    /// Resolver backed by the real HTTP client
    pub fn http(config: ResolverConfig) -> Self {
        let fetcher = Arc::new(HttpFetcher::new(&config));
        Self::new(fetcher, config)
    }

    /// Resolver that never touches the network
    pub fn offline(config: ResolverConfig) -> Self {
        Self::new(Arc::new(OfflineFetcher::new()), config)
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &dyn Fetcher {
        self.fetcher.as_ref()
    }

    /// Every chapter, from the bulk list sources or the dataset
    ///
    /// The whole chain runs under `list_timeout`. Responses with fewer than
    /// `min_chapter_count` chapters are rejected as malformed.
    pub async fn list_chapters(&self) -> Resolved<Vec<Chapter>> {
        let chain = SourceChain::new(
            "chapter list",
            self.fetcher.as_ref(),
            self.config.chapter_list_sources.clone(),
        );
        let min_count = self.config.min_chapter_count.max(1);
        let timeout = self.config.list_timeout;

        let attempt = chain.first_valid(|body| parse::chapter_list(body, min_count));
        let cause = match tokio::time::timeout(timeout, attempt).await {
            Ok(Ok(resolved)) => {
                tracing::info!("Loaded {} chapters from remote source", resolved.value.len());
                return resolved;
            }
            Ok(Err(e)) => e,
            Err(_) => {
                tracing::warn!("Chapter list timed out after {:?}", timeout);
                ResolveError::Timeout { after: timeout }
            }
        };

        tracing::info!("Loading full offline chapter list");
        Resolved::offline(dataset::chapters(), Origin::Dataset, cause)
    }

    /// The popular chapters from the dataset; never touches the network
    pub fn popular_chapters(&self) -> Vec<Chapter> {
        dataset::popular_chapters()
    }

    /// Metadata for one chapter; total over valid ids
    pub async fn resolve_chapter(&self, id: ChapterId) -> Resolved<Chapter> {
        let chain = SourceChain::new(
            format!("chapter {} info", id),
            self.fetcher.as_ref(),
            expand_all(&self.config.chapter_sources, id),
        );

        chain
            .resolve_or_else(
                |body| parse::chapter(body, id),
                |cause| Resolved::offline(dataset::chapter(id), Origin::Dataset, cause),
            )
            .await
    }

    /// Verses with translations for one chapter
    ///
    /// The original-text chain and one chain per translation language run
    /// concurrently. A failed translation chain leaves that language missing;
    /// a failed text chain falls back to curated verses, then placeholders.
    pub async fn resolve_verses(&self, id: ChapterId) -> VerseResolution {
        let fetcher = self.fetcher.as_ref();

        let text_chain = SourceChain::new(
            format!("chapter {} verses", id),
            fetcher,
            expand_all(&self.config.verse_sources, id),
        );
        let translation_chains: Vec<(Language, SourceChain<'_>)> = self
            .config
            .translation_sources
            .iter()
            .map(|source| {
                (
                    source.language,
                    SourceChain::new(
                        format!("chapter {} {:?} translation", id, source.language),
                        fetcher,
                        expand_all(&source.urls, id),
                    ),
                )
            })
            .collect();

        let (text, translations) = join(
            text_chain.first_valid(|body| parse::verses(body, id)),
            join_all(
                translation_chains
                    .iter()
                    .map(|(_, chain)| chain.first_valid(parse::translations)),
            ),
        )
        .await;

        let mut resolved = match text {
            Ok(resolved) => resolved,
            Err(cause) => {
                tracing::info!("Loading offline verses for chapter {}", id);
                let (verses, kind) = dataset::fallback_verses(id);
                let origin = match kind {
                    VerseKind::Text => Origin::Curated,
                    _ => Origin::Placeholder,
                };
                tracing::info!("Using {} offline verses for chapter {}", verses.len(), id);
                return VerseResolution {
                    verses: Resolved::offline(verses, origin, cause),
                    missing_translations: Vec::new(),
                };
            }
        };

        let mut missing_translations = Vec::new();
        for ((language, _), result) in translation_chains.iter().zip(translations) {
            match result {
                Ok(texts) => {
                    for (verse, text) in resolved.value.iter_mut().zip(texts.value) {
                        if let Some(text) = text {
                            verse.translations.insert(*language, text);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("{:?} translation unavailable for chapter {}: {}", language, id, e);
                    missing_translations.push(*language);
                }
            }
        }

        tracing::info!("Loaded {} verses for chapter {}", resolved.value.len(), id);
        VerseResolution {
            verses: resolved,
            missing_translations,
        }
    }

    /// Parse raw input as a chapter id and resolve everything a chapter page needs
    ///
    /// Invalid input fails with `InvalidInput` before any request is made; every
    /// other failure is absorbed by the fallbacks.
    pub async fn load_chapter(&self, input: &str) -> Result<ChapterContent, ResolveError> {
        let id: ChapterId = input.parse()?;
        Ok(self.load(id).await)
    }

    /// Resolve metadata and verses for a validated id
    pub async fn load(&self, id: ChapterId) -> ChapterContent {
        tracing::debug!("Opening chapter {}", id);

        let chapter = self.resolve_chapter(id).await;
        let verses = self.resolve_verses(id).await;

        ChapterContent {
            chapter: chapter.value,
            chapter_origin: chapter.origin,
            verses: verses.verses.value,
            verses_origin: verses.verses.origin,
            missing_translations: verses.missing_translations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MemoryFetcher;

    #[tokio::test]
    async fn test_offline_resolver_is_total() {
        let resolver = ContentResolver::offline(ResolverConfig::default());
        for id in ChapterId::all() {
            let chapter = resolver.resolve_chapter(id).await;
            assert_eq!(chapter.value.id, id);
            assert_eq!(chapter.origin, Origin::Dataset);
        }
    }

    #[tokio::test]
    async fn test_invalid_input_never_fetches() {
        let fetcher = Arc::new(MemoryFetcher::new());
        let resolver = ContentResolver::new(fetcher.clone(), ResolverConfig::default());

        for bad in ["0", "115", "-1", "abc"] {
            let err = resolver.load_chapter(bad).await.unwrap_err();
            assert!(matches!(err, ResolveError::InvalidInput(_)));
        }
        assert_eq!(fetcher.call_count(), 0);
    }
}
