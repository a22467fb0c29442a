//! Request handlers

mod api;
mod pages;

pub use api::*;
pub use pages::*;

use crate::view::Notice;
use axum::response::Redirect;
use axum::Json;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Accept a client-supplied return path only if it stays on this site
///
/// The path must also be visible ASCII so it can go into a `Location` header.
fn safe_return_path(raw: Option<&str>, default: &str) -> String {
    match raw.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && path.chars().all(|c| c.is_ascii_graphic()) =>
        {
            path.to_string()
        }
        _ => default.to_string(),
    }
}

/// 303 redirect to `target` carrying a one-shot notice
fn redirect_with_notice(target: &str, notice: Notice) -> Redirect {
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    let mut params: Vec<&str> = query
        .split('&')
        .filter(|p| !p.is_empty() && !p.starts_with("notice="))
        .collect();
    let notice_param = format!("notice={}", notice.code());
    params.push(&notice_param);

    Redirect::to(&format!("{}?{}", path, params.join("&")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_return_path() {
        assert_eq!(safe_return_path(Some("/surah/2?lang=urdu"), "/"), "/surah/2?lang=urdu");
        assert_eq!(safe_return_path(Some("//evil.example"), "/"), "/");
        assert_eq!(safe_return_path(Some("https://evil.example"), "/"), "/");
        assert_eq!(safe_return_path(Some("/\\evil"), "/bookmarks"), "/bookmarks");
        assert_eq!(safe_return_path(None, "/surah/1"), "/surah/1");
        assert_eq!(safe_return_path(Some("/surah/1\nX-Injected: 1"), "/"), "/");
        assert_eq!(safe_return_path(Some("/surah/1 x"), "/"), "/");
        assert_eq!(safe_return_path(Some("/سورة"), "/bookmarks"), "/bookmarks");
    }
}
