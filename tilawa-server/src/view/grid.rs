//! Chapter grids, the home page and the bookmark list

use super::{Banner, BannerKind};
use tilawa_core::search::escape_html;
use tilawa_core::source::{Origin, Resolved};
use tilawa_core::types::CHAPTER_COUNT;
use tilawa_core::{BookmarkKey, Chapter, ChapterId};

/// Which chapter listing the home page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Popular,
    All,
}

/// Banner describing where a bulk chapter list came from
pub fn list_banner(list: &Resolved<Vec<Chapter>>) -> Banner {
    match (&list.origin, &list.cause) {
        (Origin::Remote { .. }, _) => Banner::new(
            BannerKind::Success,
            format!("Loaded {} Surahs successfully", list.value.len()),
        ),
        (_, Some(cause)) if cause.is_timeout() => Banner::new(
            BannerKind::Warning,
            "Connection timeout. Loading offline Surahs...",
        ),
        _ => Banner::new(
            BannerKind::Info,
            format!("Loaded all {} Surahs from offline database", CHAPTER_COUNT),
        ),
    }
}

/// One card per chapter, linking to its page, with a chapter bookmark toggle
pub fn chapter_grid(
    chapters: &[Chapter],
    is_bookmarked: impl Fn(&str) -> bool,
    return_to: &str,
) -> String {
    let mut out = String::from("<div id=\"surah-grid\" class=\"surah-grid\">\n");

    for chapter in chapters {
        let key = BookmarkKey::Chapter(chapter.id).to_string();
        let marked = is_bookmarked(&key);
        out.push_str(&format!(
            r#"<div class="surah-card" data-surah="{id}">
    <a href="/surah/{id}">
        <span class="surah-number">{id}</span>
        <span class="arabic-name" dir="rtl">{arabic}</span>
        <span class="surah-name">{name}</span>
        <span class="surah-meta">{count} verses · {place}</span>
    </a>
    <form method="post" action="/surah/{id}/bookmark">
        <input type="hidden" name="return_to" value="{return_to}"/>
        <button type="submit" class="bookmark-btn{marked_class}" title="Bookmark this Surah">{label}</button>
    </form>
</div>
"#,
            id = chapter.id,
            arabic = escape_html(&chapter.name_arabic),
            name = escape_html(&chapter.name),
            count = chapter.verses_count,
            place = chapter.revelation_place.label(),
            return_to = escape_html(return_to),
            marked_class = if marked { " bookmarked" } else { "" },
            label = if marked { "Bookmarked" } else { "Bookmark" },
        ));
    }

    out.push_str("</div>");
    out
}

/// Home page body: jump-to-chapter form, listing switch and the grid
pub fn home_page(kind: ListingKind, grid: &str) -> String {
    let (heading, switch) = match kind {
        ListingKind::Popular => (
            "Popular Surahs",
            "<a id=\"load-all-surahs\" href=\"/?all=1\">Load all Surahs</a>",
        ),
        ListingKind::All => (
            "All Surahs",
            "<a id=\"load-popular-surahs\" href=\"/\">Show popular Surahs</a>",
        ),
    };

    format!(
        r#"<section id="home">
    <h1>Read the Holy Quran</h1>
    <form method="get" action="/" class="jump-form">
        <label for="surah">Go to Surah</label>
        <input type="number" id="surah" name="surah" min="1" max="{max}"/>
        <button type="submit">Open</button>
    </form>
</section>
<section id="surahs">
    <h2>{heading}</h2>
    {switch}
{grid}
</section>"#,
        max = CHAPTER_COUNT,
        heading = heading,
        switch = switch,
        grid = grid,
    )
}

/// Bookmark list with links back into the reader and per-entry removal
pub fn bookmarks_page(bookmarks: &[String]) -> String {
    let mut out = format!(
        "<section id=\"bookmarks\">\n<h1>Bookmarks ({})</h1>\n",
        bookmarks.len()
    );

    if bookmarks.is_empty() {
        out.push_str("<p class=\"empty\">No bookmarks yet.</p>\n");
    } else {
        out.push_str("<a href=\"/api/v1/bookmarks/export\" download>Export bookmarks</a>\n<ul>\n");
        for raw in bookmarks {
            out.push_str(&bookmark_item(raw));
        }
        out.push_str("</ul>\n");
    }

    out.push_str("</section>");
    out
}

fn bookmark_item(raw: &str) -> String {
    let (link, action) = match BookmarkKey::parse(raw) {
        Some(BookmarkKey::Verse(key)) => (
            format!(
                "<a href=\"/surah/{}#verse-{}-{}\">Verse {}</a>",
                key.chapter, key.chapter, key.verse, key
            ),
            Some(format!("/verse/{}/bookmark", key)),
        ),
        Some(BookmarkKey::Chapter(id)) => (
            format!("<a href=\"/surah/{}\">Surah {}</a>", id, chapter_label(id)),
            Some(format!("/surah/{}/bookmark", id)),
        ),
        None => (escape_html(raw), None),
    };

    let remove = action
        .map(|action| {
            format!(
                r#" <form method="post" action="{}"><input type="hidden" name="return_to" value="/bookmarks"/><button type="submit">Remove</button></form>"#,
                action
            )
        })
        .unwrap_or_default();

    format!("<li>{}{}</li>\n", link, remove)
}

fn chapter_label(id: ChapterId) -> String {
    let chapter = tilawa_core::dataset::chapter(id);
    format!("{}: {}", id, escape_html(&chapter.name))
}
