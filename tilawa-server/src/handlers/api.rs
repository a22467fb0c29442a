//! JSON API handlers

use crate::state::{AppState, Session};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tilawa_core::diagnostics::{self, SystemCheck, VerificationReport};
use tilawa_core::search;
use tilawa_core::{
    links, BookmarkToggle, Chapter, ChapterContent, ChapterId, Origin, ResolveError, Theme,
};

/// Longest bookmark key accepted through the API
const MAX_BOOKMARK_KEY_LEN: usize = 64;

/// Error body
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn api_error(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (
        status,
        Json(ApiError {
            error: message.into(),
        }),
    )
}

fn parse_id(raw: &str) -> Result<ChapterId, (StatusCode, Json<ApiError>)> {
    raw.parse().map_err(|e: ResolveError| match e {
        ResolveError::InvalidInput(msg) => api_error(StatusCode::BAD_REQUEST, msg),
        other => api_error(StatusCode::BAD_REQUEST, other.to_string()),
    })
}

fn store_error(e: tilawa_core::StoreError) -> (StatusCode, Json<ApiError>) {
    tracing::error!("Failed to persist user state: {}", e);
    api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

/// Query parameters for the chapter list
#[derive(Debug, Deserialize)]
pub struct ChapterListQuery {
    /// `1` returns only the popular chapters, without touching the network
    pub popular: Option<String>,
}

/// Chapter list response
#[derive(Debug, Serialize)]
pub struct ChapterListResponse {
    pub chapters: Vec<Chapter>,
    pub total: usize,
    pub origin: Origin,
    /// Why the offline list was used
    pub fallback_reason: Option<String>,
}

/// List chapters
pub async fn list_chapters(
    State(state): State<AppState>,
    Query(query): Query<ChapterListQuery>,
) -> Json<ChapterListResponse> {
    if query.popular.as_deref() == Some("1") {
        let chapters = state.resolver.popular_chapters();
        return Json(ChapterListResponse {
            total: chapters.len(),
            chapters,
            origin: Origin::Dataset,
            fallback_reason: None,
        });
    }

    let list = state.resolver.list_chapters().await;
    Json(ChapterListResponse {
        total: list.value.len(),
        chapters: list.value,
        origin: list.origin,
        fallback_reason: list.cause.map(|e| e.to_string()),
    })
}

/// Single chapter response
#[derive(Debug, Serialize)]
pub struct ChapterResponse {
    pub chapter: Chapter,
    pub origin: Origin,
    pub audio_sources: Vec<String>,
    pub quran_com_url: String,
}

/// Get one chapter's metadata
pub async fn get_chapter(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ChapterResponse> {
    let id = parse_id(&id)?;
    let resolved = state.resolver.resolve_chapter(id).await;

    Ok(Json(ChapterResponse {
        chapter: resolved.value,
        origin: resolved.origin,
        audio_sources: links::audio_sources(state.resolver.config(), id),
        quran_com_url: links::quran_com_url(id),
    }))
}

/// Query parameters for verses
#[derive(Debug, Deserialize)]
pub struct VersesQuery {
    /// Only return verses matching this text
    pub q: Option<String>,
}

/// Get a chapter with its verses
pub async fn get_verses(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<VersesQuery>,
) -> ApiResult<ChapterContent> {
    let id = parse_id(&id)?;
    let mut content = state.resolver.load(id).await;

    if let Some(q) = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        content.verses.retain(|v| search::matches(v, q));
    }

    state.session.write().await.current_chapter = Some(id);
    Ok(Json(content))
}

/// Bookmark list response
#[derive(Debug, Serialize)]
pub struct BookmarksResponse {
    pub bookmarks: Vec<String>,
    pub total: usize,
}

/// List bookmarks
pub async fn list_bookmarks(State(state): State<AppState>) -> Json<BookmarksResponse> {
    let store = state.store.read().await;
    Json(BookmarksResponse {
        bookmarks: store.bookmarks().to_vec(),
        total: store.bookmarks().len(),
    })
}

/// Bookmark toggle response
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub key: String,
    pub change: BookmarkToggle,
    pub bookmarked: bool,
}

/// Toggle any bookmark key
pub async fn toggle_bookmark(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<ToggleResponse> {
    let key = key.trim().to_string();
    if key.is_empty() || key.len() > MAX_BOOKMARK_KEY_LEN {
        return Err(api_error(StatusCode::BAD_REQUEST, "Invalid bookmark key"));
    }

    let mut store = state.store.write().await;
    let change = store.toggle_bookmark(&key).await.map_err(store_error)?;
    let bookmarked = store.is_bookmarked(&key);

    Ok(Json(ToggleResponse {
        key,
        change,
        bookmarked,
    }))
}

/// Download bookmarks as a dated JSON file
pub async fn export_bookmarks(State(state): State<AppState>) -> Response {
    let export = state.store.read().await.export();
    let filename = export.file_name();

    match serde_json::to_string_pretty(&export) {
        Ok(body) => (
            [
                (header::CONTENT_TYPE, "application/json".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize bookmark export: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Theme body for get and put
#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeBody {
    pub theme: Theme,
}

/// Current theme
pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: state.store.read().await.theme(),
    })
}

/// Persist a theme
pub async fn put_theme(
    State(state): State<AppState>,
    Json(body): Json<ThemeBody>,
) -> ApiResult<ThemeBody> {
    state
        .store
        .write()
        .await
        .set_theme(body.theme)
        .await
        .map_err(store_error)?;
    Ok(Json(body))
}

/// Current session
pub async fn get_session(State(state): State<AppState>) -> Json<Session> {
    Json(*state.session.read().await)
}

/// Query parameters for diagnostics
#[derive(Debug, Deserialize)]
pub struct DiagnosticsQuery {
    /// `1` also resolves every chapter
    pub verify: Option<String>,
}

/// Diagnostics response
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    #[serde(flatten)]
    pub checks: SystemCheck,
    pub chapters: Option<VerificationReport>,
}

/// Reachability checks, optionally with a full chapter sweep
pub async fn run_diagnostics(
    State(state): State<AppState>,
    Query(query): Query<DiagnosticsQuery>,
) -> Json<DiagnosticsResponse> {
    let checks = diagnostics::run_system_checks(&state.resolver).await;
    let chapters = if query.verify.as_deref() == Some("1") {
        Some(diagnostics::verify_all_chapters(&state.resolver).await)
    } else {
        None
    };

    Json(DiagnosticsResponse { checks, chapters })
}
