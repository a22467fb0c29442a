//! Tilawa Core Library
//!
//! Chapter and verse resolution for the Quran reader. Content comes from
//! prioritized remote sources and always degrades to the embedded dataset, so
//! every valid chapter id resolves to something displayable. User state
//! (bookmarks, theme) lives in [`store::UserStateStore`].

pub mod config;
pub mod dataset;
pub mod diagnostics;
pub mod error;
pub mod fetch;
pub mod links;
pub mod parse;
pub mod resolver;
pub mod search;
pub mod source;
pub mod store;
pub mod types;

pub use config::ResolverConfig;
pub use error::{ResolveError, Result, StoreError, TilawaError};
pub use resolver::{ChapterContent, ContentResolver};
pub use source::{Origin, Resolved};
pub use store::{BookmarkExport, BookmarkToggle, Theme, UserStateStore};
pub use types::{
    BookmarkKey, Chapter, ChapterId, Language, RevelationPlace, Verse, VerseKey, VerseKind,
};
