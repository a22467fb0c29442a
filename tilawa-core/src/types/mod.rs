//! Core types for chapters, verses and bookmarks

mod bookmark;
mod chapter;
mod verse;

pub use bookmark::{BookmarkKey, CHAPTER_BOOKMARK_PREFIX};
pub use chapter::{Chapter, ChapterId, RevelationPlace, CHAPTER_COUNT};
pub use verse::{Language, Verse, VerseKey, VerseKind};
