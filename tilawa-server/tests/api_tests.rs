//! Integration tests for the Tilawa server: pages, redirects and the JSON API

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use tilawa_core::fetch::{Fetcher, MemoryFetcher, OfflineFetcher};
use tilawa_core::store::MemoryBackend;
use tilawa_core::{ContentResolver, ResolverConfig, UserStateStore};
use tilawa_server::routes::create_router;
use tilawa_server::state::AppState;

/// Create a test app state with in-memory user state
async fn create_test_state(fetcher: Arc<dyn Fetcher>) -> AppState {
    let store = UserStateStore::open(Arc::new(MemoryBackend::new()))
        .await
        .expect("Failed to open store");
    let resolver = ContentResolver::new(fetcher, ResolverConfig::default());
    AppState::with_parts(resolver, store, Some("http://reader.test".to_string()))
}

/// Create a test server that never reaches the network
async fn create_test_server() -> TestServer {
    create_server_with(Arc::new(OfflineFetcher::new())).await
}

async fn create_server_with(fetcher: Arc<dyn Fetcher>) -> TestServer {
    let state = create_test_state(fetcher).await;
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

fn location(response: &axum_test::TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .expect("location is ASCII")
        .to_string()
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_home_shows_popular_chapters() {
    let server = create_test_server().await;

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Popular Surahs"));
    assert_eq!(html.matches("class=\"surah-card\"").count(), 9);
    assert!(html.contains("href=\"/?all=1\""));
}

#[tokio::test]
async fn test_surah_param_redirects_to_chapter() {
    let server = create_test_server().await;

    let response = server.get("/").add_query_param("surah", "18").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/surah/18");
}

#[tokio::test]
async fn test_all_param_lists_offline_chapters() {
    let server = create_test_server().await;

    let response = server.get("/").add_query_param("all", "1").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Loaded all 114 Surahs from offline database"));
    assert_eq!(html.matches("class=\"surah-card\"").count(), 114);
}

#[tokio::test]
async fn test_remote_chapter_list_banner() {
    let records: Vec<Value> = (1..=114)
        .map(|n| json!({ "id": n, "name_simple": format!("Chapter {}", n), "verses_count": 5 }))
        .collect();
    let fetcher = MemoryFetcher::new().with_json(
        "https://api.quran.com/api/v4/chapters?language=en",
        json!({ "chapters": records }),
    );
    let server = create_server_with(Arc::new(fetcher)).await;

    let response = server.get("/surahs").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Loaded 114 Surahs successfully"));
    assert!(html.contains("Chapter 114"));
}

#[tokio::test]
async fn test_chapter_page_offline() {
    let server = create_test_server().await;

    let response = server.get("/surah/1").await;

    response.assert_status_ok();
    let html = response.text();
    assert_eq!(html.matches("class=\"ayah-container\"").count(), 7);
    assert!(html.contains("http://reader.test/?surah=1"));
    assert!(html.contains("https://quran.com/1"));
    assert!(html.contains("https://server8.mp3quran.net/afs/001.mp3"));
    assert!(html.contains("7 verses · Makki"));
}

#[tokio::test]
async fn test_chapter_page_search() {
    let server = create_test_server().await;

    let response = server
        .get("/surah/1")
        .add_query_param("q", "merciful")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Found 2 verses matching"));
    assert!(html.contains("<mark>Merciful</mark>"));
}

#[tokio::test]
async fn test_chapter_page_urdu_mode() {
    let server = create_test_server().await;

    let response = server
        .get("/surah/112")
        .add_query_param("lang", "urdu")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("translation-text-ur"));
    assert!(!html.contains("translation-text-en"));
}

#[tokio::test]
async fn test_invalid_chapter_renders_error_panel() {
    let server = create_test_server().await;

    for id in ["0", "115", "abc"] {
        let response = server.get(&format!("/surah/{}", id)).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let html = response.text();
        assert!(html.contains(&format!("Error Loading Surah {}", id)));
        assert!(html.contains("Invalid Surah ID"));
        assert!(html.contains("Retry"));
        assert!(html.contains("Back to Home"));
    }
}

// =============================================================================
// State-changing posts
// =============================================================================

#[tokio::test]
async fn test_verse_bookmark_toggle_round_trip() {
    let server = create_test_server().await;

    let response = server
        .post("/verse/1:1/bookmark")
        .form(&[("return_to", "/surah/1?lang=both")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/surah/1?lang=both&notice=bookmark-added");

    let body: Value = server.get("/api/v1/bookmarks").await.json();
    assert_eq!(body["bookmarks"], json!(["1:1"]));

    let page = server.get("/surah/1").add_query_param("notice", "bookmark-added").await;
    assert!(page.text().contains("Bookmark added"));

    let response = server
        .post("/verse/1:1/bookmark")
        .form(&[("return_to", "/surah/1?lang=both&notice=bookmark-added")])
        .await;
    assert_eq!(location(&response), "/surah/1?lang=both&notice=bookmark-removed");

    let body: Value = server.get("/api/v1/bookmarks").await.json();
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_verse_bookmark_rejects_bad_keys() {
    let server = create_test_server().await;

    let response = server
        .post("/verse/1:8/bookmark")
        .form(&[("return_to", "/")])
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/verse/115:1/bookmark")
        .form(&[("return_to", "/")])
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unsendable_return_path_falls_back_to_chapter() {
    let server = create_test_server().await;

    let response = server
        .post("/verse/1:1/bookmark")
        .form(&[("return_to", "/surah/1\nX-Injected: 1")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/surah/1?notice=bookmark-added");

    let response = server
        .post("/verse/1:2/bookmark")
        .form(&[("return_to", "/سورة")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/surah/1?notice=bookmark-added");

    let body: Value = server.get("/api/v1/bookmarks").await.json();
    assert_eq!(body["bookmarks"], json!(["1:1", "1:2"]));
}

#[tokio::test]
async fn test_chapter_bookmark_shows_on_bookmarks_page() {
    let server = create_test_server().await;

    let response = server
        .post("/surah/18/bookmark")
        .form(&[("return_to", "/?all=1")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?all=1&notice=surah-bookmarked");

    let html = server.get("/bookmarks").await.text();
    assert!(html.contains("href=\"/surah/18\""));
    assert!(html.contains("Bookmarks (1)"));
}

#[tokio::test]
async fn test_theme_toggle_and_open_redirect_guard() {
    let server = create_test_server().await;

    let response = server
        .post("/theme")
        .form(&[("return_to", "//evil.example/")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?notice=theme-dark");

    let body: Value = server.get("/api/v1/theme").await.json();
    assert_eq!(body["theme"], "dark");
    assert!(server.get("/").await.text().contains("<body class=\"dark\">"));

    let response = server
        .post("/theme")
        .form(&[("theme", "light"), ("return_to", "/bookmarks")])
        .await;
    assert_eq!(location(&response), "/bookmarks?notice=theme-light");
}

#[tokio::test]
async fn test_play_toggles_session() {
    let server = create_test_server().await;

    let response = server
        .post("/surah/36/play")
        .form(&[("return_to", "/surah/36")])
        .await;
    assert_eq!(location(&response), "/surah/36?notice=playing");

    let session: Value = server.get("/api/v1/session").await.json();
    assert_eq!(session["now_playing"], 36);

    let html = server.get("/surah/36").await.text();
    assert!(html.contains("autoplay"));

    let response = server
        .post("/surah/36/play")
        .form(&[("return_to", "/surah/36")])
        .await;
    assert_eq!(location(&response), "/surah/36?notice=stopped");

    let session: Value = server.get("/api/v1/session").await.json();
    assert!(session["now_playing"].is_null());
    assert_eq!(session["current_chapter"], 36);
}

// =============================================================================
// JSON API
// =============================================================================

#[tokio::test]
async fn test_api_chapter_validation() {
    let server = create_test_server().await;

    let response = server.get("/api/v1/chapters/0").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Invalid Surah ID"));

    let response = server.get("/api/v1/chapters/112").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["chapter"]["verses_count"], 4);
    assert_eq!(body["origin"]["kind"], "dataset");
    assert_eq!(body["quran_com_url"], "https://quran.com/112");
}

#[tokio::test]
async fn test_api_chapter_list() {
    let server = create_test_server().await;

    let body: Value = server.get("/api/v1/chapters").await.json();
    assert_eq!(body["total"], 114);
    assert!(body["fallback_reason"].is_string());

    let body: Value = server
        .get("/api/v1/chapters")
        .add_query_param("popular", "1")
        .await
        .json();
    assert_eq!(body["total"], 9);
}

#[tokio::test]
async fn test_api_placeholder_verses() {
    let server = create_test_server().await;

    let body: Value = server.get("/api/v1/chapters/50/verses").await.json();
    let verses = body["verses"].as_array().unwrap();
    assert_eq!(verses.len(), 6);
    assert_eq!(verses[5]["kind"], "notice");
    assert_eq!(body["verses_origin"]["kind"], "placeholder");
}

#[tokio::test]
async fn test_api_bookmark_toggle_and_export() {
    let server = create_test_server().await;

    let body: Value = server.post("/api/v1/bookmarks/2:255").await.json();
    assert_eq!(body["change"], "added");
    assert_eq!(body["bookmarked"], true);

    let response = server.get("/api/v1/bookmarks/export").await;
    response.assert_status_ok();
    let disposition = response.header("content-disposition");
    assert!(disposition.to_str().unwrap().contains("quran-bookmarks-"));
    let body: Value = response.json();
    assert_eq!(body["totalCount"], 1);
    assert_eq!(body["bookmarks"], json!(["2:255"]));
}

#[tokio::test]
async fn test_api_put_theme() {
    let server = create_test_server().await;

    let response = server
        .put("/api/v1/theme")
        .json(&json!({ "theme": "dark" }))
        .await;
    response.assert_status_ok();

    let body: Value = server.get("/api/v1/theme").await.json();
    assert_eq!(body["theme"], "dark");
}

#[tokio::test]
async fn test_api_diagnostics_offline() {
    let server = create_test_server().await;

    let body: Value = server.get("/api/v1/diagnostics").await.json();
    assert!(body["api"].is_null());
    assert_eq!(body["audio"], false);
    assert!(body["chapters"].is_null());
}
