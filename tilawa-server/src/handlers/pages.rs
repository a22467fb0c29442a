//! HTML page handlers: the reader itself

use super::{redirect_with_notice, safe_return_path};
use crate::state::AppState;
use crate::view::{self, Banner, ChapterPage, Layout, ListingKind, Notice, TranslationMode};
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tilawa_core::{links, BookmarkKey, BookmarkToggle, ChapterId, ResolveError, Theme, VerseKey};

/// Query parameters for the home page
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    /// Open this chapter directly
    pub surah: Option<String>,

    /// `1` shows every chapter instead of the popular ones
    pub all: Option<String>,

    pub notice: Option<String>,
}

/// Query parameters for a chapter page
#[derive(Debug, Deserialize)]
pub struct ChapterQuery {
    /// Translation mode: english, urdu or both
    pub lang: Option<String>,

    /// Search within the chapter
    pub q: Option<String>,

    pub notice: Option<String>,
}

/// Query parameters for pages that only show notices
#[derive(Debug, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

/// Form body of state-changing posts
#[derive(Debug, Default, Deserialize)]
pub struct ReturnForm {
    pub return_to: Option<String>,
}

/// Form body of the theme toggle
#[derive(Debug, Default, Deserialize)]
pub struct ThemeForm {
    /// `light` or `dark`; absent flips the current theme
    pub theme: Option<String>,
    pub return_to: Option<String>,
}

fn notice_banner(code: Option<&str>) -> Vec<Banner> {
    code.and_then(Notice::from_code)
        .map(|n| vec![Banner::from(n)])
        .unwrap_or_default()
}

async fn render(
    state: &AppState,
    title: &str,
    path: &str,
    banners: Vec<Banner>,
    body: &str,
) -> Html<String> {
    let theme = state.store.read().await.theme();
    let layout = Layout {
        title,
        theme,
        path,
        banners,
    };
    Html(view::render_page(&layout, body))
}

fn store_failure(e: tilawa_core::StoreError) -> Response {
    tracing::error!("Failed to persist user state: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to save your changes".to_string(),
    )
        .into_response()
}

/// Home page: popular chapters, every chapter with `?all=1`, or a redirect
/// to the chapter named by `?surah=`
pub async fn home(State(state): State<AppState>, Query(query): Query<HomeQuery>) -> Response {
    if let Some(surah) = query.surah.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        return Redirect::to(&format!("/surah/{}", urlencoding::encode(surah))).into_response();
    }

    let mut banners = notice_banner(query.notice.as_deref());
    let all = query.all.as_deref() == Some("1");

    let (kind, chapters, path) = if all {
        let list = state.resolver.list_chapters().await;
        banners.push(view::list_banner(&list));
        (ListingKind::All, list.value, "/?all=1")
    } else {
        (ListingKind::Popular, state.resolver.popular_chapters(), "/")
    };

    let grid = {
        let store = state.store.read().await;
        view::chapter_grid(&chapters, |key| store.is_bookmarked(key), path)
    };
    let body = view::home_page(kind, &grid);
    render(&state, "Holy Quran Reader", path, banners, &body)
        .await
        .into_response()
}

/// Every chapter, with a banner saying where the list came from
pub async fn list_chapters_page(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Html<String> {
    let list = state.resolver.list_chapters().await;

    let mut banners = notice_banner(query.notice.as_deref());
    banners.push(view::list_banner(&list));

    let grid = {
        let store = state.store.read().await;
        view::chapter_grid(&list.value, |key| store.is_bookmarked(key), "/surahs")
    };
    let body = view::home_page(ListingKind::All, &grid);
    render(&state, "All Surahs", "/surahs", banners, &body).await
}

/// Chapter page; invalid ids get an error panel with a 400 status
pub async fn chapter_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ChapterQuery>,
    headers: HeaderMap,
) -> Response {
    let content = match state.resolver.load_chapter(&id).await {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Cannot open chapter {:?}: {}", id, e);
            let message = match e {
                ResolveError::InvalidInput(msg) => msg,
                other => other.to_string(),
            };
            let body = view::error_panel(&id, &message);
            let page = render(&state, "Error Loading Surah", "/", Vec::new(), &body).await;
            return (StatusCode::BAD_REQUEST, page).into_response();
        }
    };

    let chapter_id = content.chapter.id;
    let now_playing = {
        let mut session = state.session.write().await;
        session.current_chapter = Some(chapter_id);
        session.now_playing == Some(chapter_id)
    };

    let mode = TranslationMode::parse(query.lang.as_deref());
    let search = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty());
    let mut return_to = format!("/surah/{}?lang={}", chapter_id, mode.code());
    if let Some(q) = search {
        return_to.push_str("&q=");
        return_to.push_str(&urlencoding::encode(q));
    }

    let audio_sources = links::audio_sources(state.resolver.config(), chapter_id);
    let share_url = links::share_url(&state.base_url(&headers), chapter_id);
    let quran_com_url = links::quran_com_url(chapter_id);
    let bookmarks = state.store.read().await.bookmarks().to_vec();

    let body = view::chapter_page(&ChapterPage {
        content: &content,
        mode,
        query: search,
        bookmarks: &bookmarks,
        audio_sources: &audio_sources,
        share_url: &share_url,
        quran_com_url: &quran_com_url,
        now_playing,
        return_to: &return_to,
    });

    let title = format!("{} - {}", content.chapter.name, content.chapter.name_arabic);
    render(
        &state,
        &title,
        &return_to,
        notice_banner(query.notice.as_deref()),
        &body,
    )
    .await
    .into_response()
}

/// Bookmark list page
pub async fn bookmarks_page(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Html<String> {
    let bookmarks = state.store.read().await.bookmarks().to_vec();
    let body = view::bookmarks_page(&bookmarks);
    render(
        &state,
        "Bookmarks",
        "/bookmarks",
        notice_banner(query.notice.as_deref()),
        &body,
    )
    .await
}

/// Toggle a whole-chapter bookmark
pub async fn toggle_chapter_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ReturnForm>,
) -> Result<Redirect, Response> {
    let id: ChapterId = id
        .parse()
        .map_err(|e: ResolveError| (StatusCode::BAD_REQUEST, e.to_string()).into_response())?;
    let key = BookmarkKey::Chapter(id).to_string();

    let change = state
        .store
        .write()
        .await
        .toggle_bookmark(&key)
        .await
        .map_err(store_failure)?;

    let notice = match change {
        BookmarkToggle::Added => Notice::ChapterBookmarked,
        BookmarkToggle::Removed => Notice::ChapterBookmarkRemoved,
    };
    let target = safe_return_path(form.return_to.as_deref(), &format!("/surah/{}", id));
    Ok(redirect_with_notice(&target, notice))
}

/// Toggle a verse bookmark; the key is `chapter:verse`
pub async fn toggle_verse_bookmark(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Form(form): Form<ReturnForm>,
) -> Result<Redirect, Response> {
    let key: VerseKey = key
        .parse()
        .map_err(|e: ResolveError| (StatusCode::BAD_REQUEST, e.to_string()).into_response())?;
    let verses_count = tilawa_core::dataset::chapter(key.chapter).verses_count;
    if key.verse > verses_count {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Surah {} has only {} verses", key.chapter, verses_count),
        )
            .into_response());
    }

    let change = state
        .store
        .write()
        .await
        .toggle_bookmark(&key.to_string())
        .await
        .map_err(store_failure)?;

    let notice = match change {
        BookmarkToggle::Added => Notice::BookmarkAdded,
        BookmarkToggle::Removed => Notice::BookmarkRemoved,
    };
    let default = format!("/surah/{}", key.chapter);
    let target = safe_return_path(form.return_to.as_deref(), &default);
    Ok(redirect_with_notice(&target, notice))
}

/// Set or flip the theme
pub async fn set_theme(
    State(state): State<AppState>,
    Form(form): Form<ThemeForm>,
) -> Result<Redirect, Response> {
    let requested = match form.theme.as_deref().map(|t| t.trim().to_lowercase()) {
        Some(t) if t == "dark" => Some(Theme::Dark),
        Some(t) if t == "light" => Some(Theme::Light),
        Some(other) => {
            return Err(
                (StatusCode::BAD_REQUEST, format!("Unknown theme: {}", other)).into_response(),
            )
        }
        None => None,
    };

    let theme = {
        let mut store = state.store.write().await;
        let result = match requested {
            Some(theme) => store.set_theme(theme).await.map(|_| theme),
            None => store.toggle_theme().await,
        };
        result.map_err(store_failure)?
    };

    let notice = if theme.is_dark() {
        Notice::ThemeDark
    } else {
        Notice::ThemeLight
    };
    let target = safe_return_path(form.return_to.as_deref(), "/");
    Ok(redirect_with_notice(&target, notice))
}

/// Start or stop the chapter's recitation
pub async fn toggle_playback(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ReturnForm>,
) -> Result<Redirect, Response> {
    let id: ChapterId = id
        .parse()
        .map_err(|e: ResolveError| (StatusCode::BAD_REQUEST, e.to_string()).into_response())?;

    let playing = state.session.write().await.toggle_playing(id);
    tracing::info!(
        "Recitation of chapter {} {}",
        id,
        if playing { "started" } else { "stopped" }
    );

    let notice = if playing {
        Notice::Playing
    } else {
        Notice::Stopped
    };
    let target = safe_return_path(form.return_to.as_deref(), &format!("/surah/{}", id));
    Ok(redirect_with_notice(&target, notice))
}
