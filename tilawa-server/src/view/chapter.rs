//! Chapter page and error panel

use tilawa_core::search::{self, escape_html, highlight};
use tilawa_core::{BookmarkKey, ChapterContent, Language, Verse, VerseKind};

/// Which translations the verse cards show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationMode {
    #[default]
    English,
    Urdu,
    Both,
}

impl TranslationMode {
    pub const ALL: [TranslationMode; 3] = [
        TranslationMode::English,
        TranslationMode::Urdu,
        TranslationMode::Both,
    ];

    /// Parse the `lang` query parameter; unknown values fall back to English
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("urdu") | Some("ur") => TranslationMode::Urdu,
            Some("both") => TranslationMode::Both,
            _ => TranslationMode::English,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            TranslationMode::English => "english",
            TranslationMode::Urdu => "urdu",
            TranslationMode::Both => "both",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TranslationMode::English => "English",
            TranslationMode::Urdu => "اردو",
            TranslationMode::Both => "Both",
        }
    }

    /// Languages shown, in display order
    pub fn languages(self) -> &'static [Language] {
        match self {
            TranslationMode::English => &[Language::English],
            TranslationMode::Urdu => &[Language::Urdu],
            TranslationMode::Both => &Language::ALL,
        }
    }
}

/// Inputs for one chapter page
pub struct ChapterPage<'a> {
    pub content: &'a ChapterContent,
    pub mode: TranslationMode,
    /// Search query, when the visitor is searching within the chapter
    pub query: Option<&'a str>,
    pub bookmarks: &'a [String],
    pub audio_sources: &'a [String],
    pub share_url: &'a str,
    pub quran_com_url: &'a str,
    pub now_playing: bool,
    /// Current path and query, for forms that redirect back here
    pub return_to: &'a str,
}

impl ChapterPage<'_> {
    fn is_bookmarked(&self, key: &str) -> bool {
        self.bookmarks.iter().any(|b| b == key)
    }
}

/// Chapter page body
pub fn chapter_page(page: &ChapterPage<'_>) -> String {
    let query = page.query.map(str::trim).filter(|q| !q.is_empty());

    let mut out = String::new();
    out.push_str("<section id=\"surah-page\">\n<a href=\"/\" class=\"back-link\">Back to Home</a>\n");
    out.push_str(&header(page));
    out.push_str(&audio_player(page));
    out.push_str(&mode_switch(page, query));
    out.push_str(&search_form(page, query));

    let shown: Vec<&Verse> = match query {
        Some(q) => search::search_verses(&page.content.verses, q),
        None => page.content.verses.iter().collect(),
    };
    if let Some(q) = query {
        out.push_str(&format!(
            "<div id=\"search-results\">{}</div>\n",
            escape_html(&search::summary(shown.len(), q))
        ));
    }

    out.push_str("<div id=\"surah-content\">\n");
    for verse in shown {
        out.push_str(&verse_card(page, verse, query.unwrap_or("")));
    }
    out.push_str("</div>\n</section>");
    out
}

fn header(page: &ChapterPage<'_>) -> String {
    let chapter = &page.content.chapter;
    let chapter_key = BookmarkKey::Chapter(chapter.id).to_string();
    let bookmarked = page.is_bookmarked(&chapter_key);

    let mut notes = String::new();
    if !page.content.verses_origin.is_remote() {
        notes.push_str(
            "<p class=\"offline-note\">Showing offline content. Connect to the internet for complete verses.</p>\n",
        );
    }
    for language in &page.content.missing_translations {
        notes.push_str(&format!(
            "<p class=\"offline-note\">{} translation could not be loaded.</p>\n",
            language.label()
        ));
    }

    format!(
        r#"<div id="surah-header">
    <h1 class="arabic-name" dir="rtl">{arabic}</h1>
    <h2>{id}. {name}</h2>
    <p class="surah-meta">{count} verses · {place}</p>
{notes}    <div class="surah-actions">
        <form method="post" action="/surah/{id}/play">
            <input type="hidden" name="return_to" value="{return_to}"/>
            <button type="submit">{play}</button>
        </form>
        <form method="post" action="/surah/{id}/bookmark">
            <input type="hidden" name="return_to" value="{return_to}"/>
            <button type="submit" class="bookmark-btn{marked_class}">{bookmark}</button>
        </form>
        <a href="{share}" class="share-link">Share</a>
        <a href="{quran_com}" target="_blank" rel="noopener">Read on Quran.com</a>
    </div>
</div>
"#,
        arabic = escape_html(&chapter.name_arabic),
        id = chapter.id,
        name = escape_html(&chapter.name),
        count = chapter.verses_count,
        place = chapter.revelation_place.label(),
        notes = notes,
        return_to = escape_html(page.return_to),
        play = if page.now_playing { "Stop" } else { "Play" },
        marked_class = if bookmarked { " bookmarked" } else { "" },
        bookmark = if bookmarked { "Bookmarked" } else { "Bookmark Surah" },
        share = escape_html(page.share_url),
        quran_com = escape_html(page.quran_com_url),
    )
}

fn audio_player(page: &ChapterPage<'_>) -> String {
    let sources: String = page
        .audio_sources
        .iter()
        .map(|src| format!("    <source src=\"{}\" type=\"audio/mpeg\"/>\n", escape_html(src)))
        .collect();

    format!(
        "<audio id=\"surah-audio-{}\" controls preload=\"none\"{}>\n{}    Your browser does not support the audio element.\n</audio>\n",
        page.content.chapter.id,
        if page.now_playing { " autoplay" } else { "" },
        sources
    )
}

fn mode_switch(page: &ChapterPage<'_>, query: Option<&str>) -> String {
    let id = page.content.chapter.id;
    let links: String = TranslationMode::ALL
        .iter()
        .map(|mode| {
            let mut href = format!("/surah/{}?lang={}", id, mode.code());
            if let Some(q) = query {
                href.push_str("&q=");
                href.push_str(&urlencoding::encode(q));
            }
            format!(
                "<a href=\"{}\" class=\"translation-toggle{}\" data-lang=\"{}\">{}</a>",
                escape_html(&href),
                if *mode == page.mode { " active" } else { "" },
                mode.code(),
                mode.label()
            )
        })
        .collect();

    format!("<div class=\"translation-controls\">{}</div>\n", links)
}

fn search_form(page: &ChapterPage<'_>, query: Option<&str>) -> String {
    format!(
        r#"<form method="get" action="/surah/{id}" class="search-container">
    <input type="hidden" name="lang" value="{lang}"/>
    <input type="text" id="ayah-search" name="q" value="{q}" placeholder="Search within this Surah..."/>
    <button type="submit">Search</button>
</form>
"#,
        id = page.content.chapter.id,
        lang = page.mode.code(),
        q = escape_html(query.unwrap_or("")),
    )
}

fn verse_card(page: &ChapterPage<'_>, verse: &Verse, query: &str) -> String {
    let key = verse.key().to_string();
    let kind_class = match verse.kind {
        VerseKind::Text => "",
        VerseKind::Placeholder => " placeholder",
        VerseKind::Notice => " notice",
    };

    let bookmark = if verse.kind == VerseKind::Notice {
        String::new()
    } else {
        let marked = page.is_bookmarked(&key);
        format!(
            r#"<form method="post" action="/verse/{key}/bookmark">
        <input type="hidden" name="return_to" value="{return_to}"/>
        <button type="submit" class="bookmark-btn{marked_class}" title="Bookmark this verse">{label}</button>
    </form>"#,
            key = key,
            return_to = escape_html(page.return_to),
            marked_class = if marked { " bookmarked" } else { "" },
            label = if marked { "Bookmarked" } else { "Bookmark" },
        )
    };

    let translations: String = page
        .mode
        .languages()
        .iter()
        .map(|&language| {
            let dir = if language.is_rtl() { " dir=\"rtl\"" } else { "" };
            format!(
                "    <div class=\"translation-text-{code}\"{dir}><span class=\"translation-label\">{label}:</span><p>{text}</p></div>\n",
                code = language.code(),
                dir = dir,
                label = language.label(),
                text = highlight(verse.translation(language), query),
            )
        })
        .collect();

    format!(
        r#"<div class="ayah-container{kind_class}" id="verse-{chapter}-{number}" data-verse="{key}">
    <span class="ayah-number">{number}</span>
    {bookmark}
    <div class="arabic-text" dir="rtl">{text}</div>
{translations}</div>
"#,
        kind_class = kind_class,
        chapter = verse.chapter,
        number = verse.number,
        key = key,
        bookmark = bookmark,
        text = highlight(&verse.text, query),
        translations = translations,
    )
}

/// Error panel for a chapter that could not be opened
pub fn error_panel(input: &str, message: &str) -> String {
    format!(
        r#"<section id="surah-page" class="error-panel">
    <h1>Error Loading Surah {input}</h1>
    <p class="error-message">{message}</p>
    <div class="error-actions">
        <a href="/surah/{retry}" class="retry">Retry</a>
        <a href="/" class="back-link">Back to Home</a>
        <a href="https://quran.com" target="_blank" rel="noopener">Read on Quran.com</a>
    </div>
    <h2>Troubleshooting Tips:</h2>
    <ul>
        <li>Check your internet connection</li>
        <li>Try refreshing the page</li>
        <li>Try a different Surah first</li>
        <li>Use the "Read on Quran.com" link above for guaranteed access</li>
    </ul>
</section>"#,
        input = escape_html(input),
        message = escape_html(message),
        retry = escape_html(&urlencoding::encode(input)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilawa_core::{ContentResolver, ResolverConfig};

    async fn offline_content(id: &str) -> ChapterContent {
        ContentResolver::offline(ResolverConfig::default())
            .load_chapter(id)
            .await
            .unwrap()
    }

    fn page<'a>(content: &'a ChapterContent, bookmarks: &'a [String]) -> ChapterPage<'a> {
        ChapterPage {
            content,
            mode: TranslationMode::English,
            query: None,
            bookmarks,
            audio_sources: &[],
            share_url: "http://localhost:3000/?surah=1",
            quran_com_url: "https://quran.com/1",
            now_playing: false,
            return_to: "/surah/1",
        }
    }

    #[test]
    fn test_translation_mode_parse() {
        assert_eq!(TranslationMode::parse(Some("urdu")), TranslationMode::Urdu);
        assert_eq!(TranslationMode::parse(Some("BOTH")), TranslationMode::Both);
        assert_eq!(TranslationMode::parse(Some("klingon")), TranslationMode::English);
        assert_eq!(TranslationMode::parse(None), TranslationMode::English);
    }

    #[tokio::test]
    async fn test_chapter_page_cards() {
        let content = offline_content("1").await;
        let bookmarks = vec!["1:2".to_string()];
        let html = chapter_page(&page(&content, &bookmarks));

        assert_eq!(html.matches("class=\"ayah-container\"").count(), 7);
        assert!(html.contains("id=\"verse-1-7\""));
        assert_eq!(html.matches("bookmark-btn bookmarked").count(), 1);
        assert!(html.contains("translation-text-en"));
        assert!(!html.contains("translation-text-ur"));
        assert!(html.contains("Showing offline content"));
    }

    #[tokio::test]
    async fn test_both_mode_shows_placeholder_for_missing_translation() {
        let mut content = offline_content("112").await;
        content.verses[0].translations.remove(&Language::Urdu);
        let mut view = page(&content, &[]);
        view.mode = TranslationMode::Both;
        let html = chapter_page(&view);

        assert!(html.contains("translation-text-ur"));
        assert!(html.contains("اردو ترجمہ دستیاب نہیں"));
    }

    #[tokio::test]
    async fn test_search_filters_and_highlights() {
        let content = offline_content("1").await;
        let mut view = page(&content, &[]);
        view.query = Some("merciful");
        let html = chapter_page(&view);

        assert!(html.contains("<mark>"));
        assert!(html.contains("Found 2 verses matching"));
        assert_eq!(html.matches("class=\"ayah-container\"").count(), 2);
    }

    #[tokio::test]
    async fn test_notice_verse_has_no_bookmark() {
        let content = offline_content("50").await;
        let html = chapter_page(&page(&content, &[]));

        assert_eq!(html.matches("class=\"ayah-container notice\"").count(), 1);
        assert!(!html.contains("action=\"/verse/50:6/bookmark\""));
    }

    #[test]
    fn test_error_panel_escapes_input() {
        let html = error_panel("<x>", "Invalid Surah ID");
        assert!(html.contains("Error Loading Surah &lt;x&gt;"));
        assert!(html.contains("href=\"/surah/%3Cx%3E\""));
        assert!(html.contains("Back to Home"));
        assert!(html.contains("https://quran.com"));
    }
}
