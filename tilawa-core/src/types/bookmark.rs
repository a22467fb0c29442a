//! Bookmark identifiers
//!
//! The store treats bookmarks as opaque strings; these helpers build the two
//! shapes the reader produces.

use super::{ChapterId, VerseKey};
use std::fmt;

/// Prefix of whole-chapter bookmarks (`surah-18`)
pub const CHAPTER_BOOKMARK_PREFIX: &str = "surah-";

/// A typed view of a bookmark string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkKey {
    Verse(VerseKey),
    Chapter(ChapterId),
}

impl BookmarkKey {
    /// Interpret a stored bookmark string; unknown shapes yield `None`
    pub fn parse(raw: &str) -> Option<Self> {
        if let Some(rest) = raw.strip_prefix(CHAPTER_BOOKMARK_PREFIX) {
            return rest.parse().ok().map(BookmarkKey::Chapter);
        }
        raw.parse().ok().map(BookmarkKey::Verse)
    }

    /// Chapter the bookmark points into
    pub fn chapter(&self) -> ChapterId {
        match self {
            BookmarkKey::Verse(key) => key.chapter,
            BookmarkKey::Chapter(id) => *id,
        }
    }
}

impl fmt::Display for BookmarkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkKey::Verse(key) => write!(f, "{}", key),
            BookmarkKey::Chapter(id) => write!(f, "{}{}", CHAPTER_BOOKMARK_PREFIX, id),
        }
    }
}

impl From<VerseKey> for BookmarkKey {
    fn from(key: VerseKey) -> Self {
        BookmarkKey::Verse(key)
    }
}

impl From<ChapterId> for BookmarkKey {
    fn from(id: ChapterId) -> Self {
        BookmarkKey::Chapter(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmark_shapes() {
        let chapter = ChapterId::new(18).unwrap();
        assert_eq!(BookmarkKey::from(chapter).to_string(), "surah-18");
        assert_eq!(BookmarkKey::parse("surah-18"), Some(BookmarkKey::Chapter(chapter)));

        let verse = BookmarkKey::parse("18:10").unwrap();
        assert_eq!(verse.chapter(), chapter);
        assert_eq!(verse.to_string(), "18:10");

        assert_eq!(BookmarkKey::parse("anything"), None);
    }
}
