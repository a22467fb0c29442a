//! Verse type, verse keys and translation languages

use super::ChapterId;
use crate::error::ResolveError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Translation languages shown next to the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Urdu,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Urdu];

    /// Text shown in place of a translation that could not be fetched
    pub fn unavailable_text(self) -> &'static str {
        match self {
            Language::English => "English translation not available",
            Language::Urdu => "اردو ترجمہ دستیاب نہیں",
        }
    }

    /// Label in the language itself
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Urdu => "اردو",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Urdu => "ur",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Urdu)
    }
}

impl FromStr for Language {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "urdu" | "ur" => Ok(Language::Urdu),
            other => Err(ResolveError::InvalidInput(format!(
                "Unknown language: {}",
                other
            ))),
        }
    }
}

/// A `chapter:verse` reference such as `2:255`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VerseKey {
    pub chapter: ChapterId,
    pub verse: u16,
}

impl VerseKey {
    pub fn new(chapter: ChapterId, verse: u16) -> Self {
        Self { chapter, verse }
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

impl FromStr for VerseKey {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ResolveError::InvalidInput(format!("Invalid verse key: {}", s));
        let (chapter, verse) = s.split_once(':').ok_or_else(invalid)?;
        let chapter: ChapterId = chapter.parse()?;
        let verse: u16 = verse.trim().parse().map_err(|_| invalid())?;
        if verse == 0 {
            return Err(invalid());
        }
        Ok(Self { chapter, verse })
    }
}

/// What a verse record actually holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerseKind {
    /// Real verse text from a remote source or the curated set
    Text,
    /// Synthesized stand-in for a verse that could not be loaded
    Placeholder,
    /// Trailing "connect to internet" notice after placeholders
    Notice,
}

/// A single verse with its translations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Verse {
    pub chapter: ChapterId,

    /// 1-based position within the chapter
    pub number: u16,

    /// Original-script text
    pub text: String,

    /// Translations keyed by language; missing entries were not available
    #[serde(default)]
    pub translations: BTreeMap<Language, String>,

    pub kind: VerseKind,
}

impl Verse {
    /// Create a verse of real text with no translations yet
    pub fn new(chapter: ChapterId, number: u16, text: impl Into<String>) -> Self {
        Self {
            chapter,
            number,
            text: text.into(),
            translations: BTreeMap::new(),
            kind: VerseKind::Text,
        }
    }

    /// Set the kind
    pub fn with_kind(mut self, kind: VerseKind) -> Self {
        self.kind = kind;
        self
    }

    /// Add a translation
    pub fn with_translation(mut self, language: Language, text: impl Into<String>) -> Self {
        self.translations.insert(language, text.into());
        self
    }

    pub fn key(&self) -> VerseKey {
        VerseKey::new(self.chapter, self.number)
    }

    /// Translation text, or the language's "not available" placeholder
    pub fn translation(&self, language: Language) -> &str {
        self.translations
            .get(&language)
            .map(|s| s.as_str())
            .unwrap_or_else(|| language.unavailable_text())
    }

    pub fn has_translation(&self, language: Language) -> bool {
        self.translations.contains_key(&language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verse_key_round_trip() {
        let key: VerseKey = "2:255".parse().unwrap();
        assert_eq!(key.chapter.get(), 2);
        assert_eq!(key.verse, 255);
        assert_eq!(key.to_string(), "2:255");
    }

    #[test]
    fn test_verse_key_rejects_garbage() {
        for bad in ["2", "0:1", "115:1", "1:0", "1:x", "surah-1"] {
            assert!(bad.parse::<VerseKey>().is_err(), "{bad}");
        }
    }

    #[test]
    fn test_missing_translation_placeholder() {
        let chapter = ChapterId::new(1).unwrap();
        let verse = Verse::new(chapter, 1, "text").with_translation(Language::English, "In the name");
        assert_eq!(verse.translation(Language::English), "In the name");
        assert_eq!(
            verse.translation(Language::Urdu),
            Language::Urdu.unavailable_text()
        );
        assert_eq!(verse.key().to_string(), "1:1");
    }
}
