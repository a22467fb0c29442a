//! In-chapter verse search and match highlighting

use crate::types::Verse;
use regex::RegexBuilder;

/// Whether a verse matches a query
///
/// Text and translations match case-insensitively; the verse number matches
/// when its decimal form contains the query. An empty query matches everything.
pub fn matches(verse: &Verse, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    let lower = query.to_lowercase();
    verse.text.to_lowercase().contains(&lower)
        || verse
            .translations
            .values()
            .any(|t| t.to_lowercase().contains(&lower))
        || verse.number.to_string().contains(query)
}

/// Verses matching a query, in chapter order
pub fn search_verses<'a>(verses: &'a [Verse], query: &str) -> Vec<&'a Verse> {
    verses.iter().filter(|v| matches(v, query)).collect()
}

/// Summary line for a search, e.g. `Found 3 verses matching "mercy"`
pub fn summary(count: usize, query: &str) -> String {
    format!(
        "Found {} verse{} matching \"{}\"",
        count,
        if count == 1 { "" } else { "s" },
        query.trim()
    )
}

/// HTML-escape `text`, wrapping each case-insensitive occurrence of `query`
/// in `<mark>`
///
/// The query is matched literally, never as a pattern.
pub fn highlight(text: &str, query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return escape_html(text);
    }

    let pattern = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!("Unusable search query {:?}: {}", query, e);
            return escape_html(text);
        }
    };

    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for m in pattern.find_iter(text) {
        out.push_str(&escape_html(&text[last..m.start()]));
        out.push_str("<mark>");
        out.push_str(&escape_html(m.as_str()));
        out.push_str("</mark>");
        last = m.end();
    }
    out.push_str(&escape_html(&text[last..]));
    out
}

/// Escape text for HTML element and attribute content
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
