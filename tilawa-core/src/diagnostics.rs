//! System checks: source reachability and a full chapter sweep

use crate::config::expand;
use crate::resolver::ContentResolver;
use crate::types::{ChapterId, VerseKind};
use serde::Serialize;
use std::time::Duration;

/// Deadline for a single reachability probe
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Results of the reachability checks
#[derive(Debug, Clone, Serialize)]
pub struct SystemCheck {
    /// First chapter endpoint that answered, if any
    pub api: Option<String>,
    /// Whether the primary audio stream answered
    pub audio: bool,
}

impl SystemCheck {
    pub fn all_passed(&self) -> bool {
        self.api.is_some() && self.audio
    }
}

/// Outcome of resolving one chapter during a sweep
#[derive(Debug, Clone, Serialize)]
pub struct ChapterCheck {
    pub id: ChapterId,
    pub name_arabic: String,
    pub verses: usize,
    /// Metadata and verses both came from remote sources
    pub remote: bool,
}

/// Summary of a sweep over chapters
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerificationReport {
    pub successful: Vec<ChapterId>,
    pub fallback: Vec<ChapterId>,
    pub total: usize,
}

impl VerificationReport {
    pub fn from_checks(checks: &[ChapterCheck]) -> Self {
        let (remote, offline): (Vec<&ChapterCheck>, Vec<&ChapterCheck>) =
            checks.iter().partition(|c| c.remote);
        Self {
            successful: remote.into_iter().map(|c| c.id).collect(),
            fallback: offline.into_iter().map(|c| c.id).collect(),
            total: checks.len(),
        }
    }
}

/// Probe the chapter endpoints until one answers
pub async fn check_api_connectivity(resolver: &ContentResolver) -> Option<String> {
    let first = ChapterId::new(1).ok()?;
    let mut candidates: Vec<String> = Vec::new();
    for template in &resolver.config().chapter_sources {
        let url = expand(template, first);
        if !candidates.contains(&url) {
            candidates.push(url);
        }
    }

    for url in candidates {
        if probe(resolver, &url).await {
            tracing::info!("API connectivity confirmed: {}", url);
            return Some(url);
        }
    }

    tracing::warn!("All API sources failed, offline data will be used");
    None
}

/// Probe the first audio stream of chapter 1
pub async fn check_audio_connectivity(resolver: &ContentResolver) -> bool {
    let Ok(first) = ChapterId::new(1) else {
        return false;
    };
    let Some(url) = resolver
        .config()
        .audio_sources
        .first()
        .map(|t| expand(t, first))
    else {
        return false;
    };

    let ok = probe(resolver, &url).await;
    if ok {
        tracing::info!("Audio connectivity confirmed: {}", url);
    } else {
        tracing::warn!("Audio connectivity test failed: {}", url);
    }
    ok
}

/// Run both reachability checks
pub async fn run_system_checks(resolver: &ContentResolver) -> SystemCheck {
    let api = check_api_connectivity(resolver).await;
    let audio = check_audio_connectivity(resolver).await;
    SystemCheck { api, audio }
}

/// Resolve one chapter end to end
pub async fn verify_chapter(resolver: &ContentResolver, id: ChapterId) -> ChapterCheck {
    let content = resolver.load(id).await;
    let text_verses = content
        .verses
        .iter()
        .filter(|v| v.kind != VerseKind::Notice)
        .count();
    let remote = content.chapter_origin.is_remote() && content.verses_origin.is_remote();

    if remote {
        tracing::info!("Chapter {}: {} - {} verses", id, content.chapter.name_arabic, text_verses);
    } else {
        tracing::warn!("Chapter {}: using offline data ({} verses)", id, text_verses);
    }

    ChapterCheck {
        id,
        name_arabic: content.chapter.name_arabic,
        verses: text_verses,
        remote,
    }
}

/// Resolve every chapter and report which needed the offline fallback
pub async fn verify_all_chapters(resolver: &ContentResolver) -> VerificationReport {
    let mut checks = Vec::with_capacity(crate::types::CHAPTER_COUNT as usize);
    for id in ChapterId::all() {
        checks.push(verify_chapter(resolver, id).await);
    }

    let report = VerificationReport::from_checks(&checks);
    tracing::info!(
        "Chapter sweep: {}/{} remote, {} fallback",
        report.successful.len(),
        report.total,
        report.fallback.len()
    );
    report
}

async fn probe(resolver: &ContentResolver, url: &str) -> bool {
    match tokio::time::timeout(PROBE_TIMEOUT, resolver.fetcher().probe(url)).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::warn!("Probe failed for {}: {}", url, e);
            false
        }
        Err(_) => {
            tracing::warn!("Probe timed out for {}", url);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverConfig;
    use crate::fetch::{MemoryFetcher, MemoryResponse};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_offline_checks_fail_cleanly() {
        let resolver = ContentResolver::offline(ResolverConfig::default());
        let check = run_system_checks(&resolver).await;
        assert_eq!(check.api, None);
        assert!(!check.audio);
        assert!(!check.all_passed());
    }

    #[tokio::test]
    async fn test_api_probe_falls_through_to_mirror() {
        let fetcher = Arc::new(
            MemoryFetcher::new()
                .with(
                    "https://api.quran.com/api/v4/chapters/1?language=en",
                    MemoryResponse::Status(500),
                )
                .with_json(
                    "https://cdn.jsdelivr.net/gh/risan/quran-json@main/dist/chapters.json",
                    serde_json::json!([]),
                ),
        );
        let resolver = ContentResolver::new(fetcher, ResolverConfig::default());

        let api = check_api_connectivity(&resolver).await;
        assert_eq!(
            api.as_deref(),
            Some("https://cdn.jsdelivr.net/gh/risan/quran-json@main/dist/chapters.json")
        );
    }

    #[tokio::test]
    async fn test_offline_sweep_reports_fallbacks() {
        let resolver = ContentResolver::offline(ResolverConfig::default());
        let check = verify_chapter(&resolver, ChapterId::new(1).unwrap()).await;
        assert!(!check.remote);
        assert_eq!(check.verses, 7);

        let report = VerificationReport::from_checks(&[check]);
        assert_eq!(report.total, 1);
        assert_eq!(report.fallback.len(), 1);
        assert!(report.successful.is_empty());
    }
}
