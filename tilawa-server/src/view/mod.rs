//! HTML projection of application state
//!
//! Every function here is pure: it takes resolver results and store snapshots
//! and returns markup. Handlers decide what to show; views decide how.

mod chapter;
mod grid;

pub use chapter::{chapter_page, error_panel, ChapterPage, TranslationMode};
pub use grid::{bookmarks_page, chapter_grid, home_page, list_banner, ListingKind};

use tilawa_core::search::escape_html;
use tilawa_core::Theme;

/// One-shot notification carried across a redirect in the `notice` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    BookmarkAdded,
    BookmarkRemoved,
    ChapterBookmarked,
    ChapterBookmarkRemoved,
    ThemeLight,
    ThemeDark,
    Playing,
    Stopped,
}

impl Notice {
    /// Query parameter value
    pub fn code(self) -> &'static str {
        match self {
            Notice::BookmarkAdded => "bookmark-added",
            Notice::BookmarkRemoved => "bookmark-removed",
            Notice::ChapterBookmarked => "surah-bookmarked",
            Notice::ChapterBookmarkRemoved => "surah-bookmark-removed",
            Notice::ThemeLight => "theme-light",
            Notice::ThemeDark => "theme-dark",
            Notice::Playing => "playing",
            Notice::Stopped => "stopped",
        }
    }

    /// Parse a query parameter value; unknown codes are ignored
    pub fn from_code(code: &str) -> Option<Self> {
        let notice = match code {
            "bookmark-added" => Notice::BookmarkAdded,
            "bookmark-removed" => Notice::BookmarkRemoved,
            "surah-bookmarked" => Notice::ChapterBookmarked,
            "surah-bookmark-removed" => Notice::ChapterBookmarkRemoved,
            "theme-light" => Notice::ThemeLight,
            "theme-dark" => Notice::ThemeDark,
            "playing" => Notice::Playing,
            "stopped" => Notice::Stopped,
            _ => return None,
        };
        Some(notice)
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::BookmarkAdded => "Bookmark added",
            Notice::BookmarkRemoved => "Bookmark removed",
            Notice::ChapterBookmarked => "Surah bookmarked",
            Notice::ChapterBookmarkRemoved => "Surah bookmark removed",
            Notice::ThemeLight => "Light mode enabled",
            Notice::ThemeDark => "Night mode enabled",
            Notice::Playing => "Playing recitation",
            Notice::Stopped => "Recitation stopped",
        }
    }
}

/// Banner severity, used as a CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Warning,
    Info,
}

impl BannerKind {
    fn class(self) -> &'static str {
        match self {
            BannerKind::Success => "banner-success",
            BannerKind::Warning => "banner-warning",
            BannerKind::Info => "banner-info",
        }
    }
}

/// A notification banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn new(kind: BannerKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<Notice> for Banner {
    fn from(notice: Notice) -> Self {
        Banner::new(BannerKind::Success, notice.message())
    }
}

/// Everything the page shell needs
pub struct Layout<'a> {
    pub title: &'a str,
    pub theme: Theme,
    /// Where the theme toggle should send the visitor back to
    pub path: &'a str,
    pub banners: Vec<Banner>,
}

/// Wrap body markup in the page shell: head, navigation, theme toggle, banners
pub fn render_page(layout: &Layout<'_>, body: &str) -> String {
    let theme_class = if layout.theme.is_dark() { "dark" } else { "light" };
    let toggle_label = if layout.theme.is_dark() {
        "Light mode"
    } else {
        "Night mode"
    };

    let banners: String = layout
        .banners
        .iter()
        .map(|b| {
            format!(
                "<div class=\"banner {}\" role=\"status\">{}</div>\n",
                b.kind.class(),
                escape_html(&b.message)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="{theme}">
<head>
    <meta charset="UTF-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1"/>
    <title>{title}</title>
</head>
<body class="{theme}">
<nav>
    <a href="/">Home</a>
    <a href="/surahs">All Surahs</a>
    <a href="/bookmarks">Bookmarks</a>
    <form method="post" action="/theme">
        <input type="hidden" name="return_to" value="{path}"/>
        <button type="submit" id="theme-toggle">{toggle}</button>
    </form>
</nav>
{banners}<main>
{body}
</main>
</body>
</html>"#,
        theme = theme_class,
        title = escape_html(layout.title),
        path = escape_html(layout.path),
        toggle = toggle_label,
        banners = banners,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_codes_round_trip() {
        for notice in [
            Notice::BookmarkAdded,
            Notice::BookmarkRemoved,
            Notice::ChapterBookmarked,
            Notice::ChapterBookmarkRemoved,
            Notice::ThemeLight,
            Notice::ThemeDark,
            Notice::Playing,
            Notice::Stopped,
        ] {
            assert_eq!(Notice::from_code(notice.code()), Some(notice));
        }
        assert_eq!(Notice::from_code("<script>"), None);
    }

    #[test]
    fn test_layout_escapes_and_themes() {
        let layout = Layout {
            title: "<Home>",
            theme: Theme::Dark,
            path: "/surah/1?lang=urdu&q=x",
            banners: vec![Notice::BookmarkAdded.into()],
        };
        let html = render_page(&layout, "<p>body</p>");

        assert!(html.contains("<title>&lt;Home&gt;</title>"));
        assert!(html.contains("class=\"dark\""));
        assert!(html.contains("Light mode"));
        assert!(html.contains("value=\"/surah/1?lang=urdu&amp;q=x\""));
        assert!(html.contains("Bookmark added"));
        assert!(html.contains("<p>body</p>"));
    }
}
