//! Embedded reference dataset
//!
//! Total over chapters 1..=114, so every resolution can terminate here when the
//! remote sources are unreachable.

mod chapters;
mod curated;

use crate::types::{Chapter, ChapterId, Language, RevelationPlace, Verse, VerseKind};

/// Maximum number of placeholder verses synthesized for an uncurated chapter
pub const MAX_PLACEHOLDER_VERSES: u16 = 5;

/// Chapters shown on the home page before the full list is requested
pub const POPULAR_CHAPTERS: [u8; 9] = [1, 2, 18, 36, 55, 67, 112, 113, 114];

const PLACEHOLDER_TEXT: &str = "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ";
const NOTICE_TEXT: &str = "• وصل بالإنترنت لتحميل جميع الآيات •";
const NOTICE_ENGLISH: &str = "• Connect to internet to load all verses with complete translations •";
const NOTICE_URDU: &str = "• تمام آیات اور مکمل ترجمے کے لیے انٹرنیٹ سے جڑیں •";

struct ChapterRecord {
    id: u8,
    name_arabic: &'static str,
    name: &'static str,
    verses_count: u16,
    revelation_place: RevelationPlace,
}

struct CuratedVerse {
    chapter: u8,
    number: u16,
    text: &'static str,
    english: &'static str,
    urdu: &'static str,
}

impl ChapterRecord {
    fn to_chapter(&self, id: ChapterId) -> Chapter {
        debug_assert_eq!(self.id, id.get());
        Chapter {
            id,
            name_arabic: self.name_arabic.to_string(),
            name: self.name.to_string(),
            verses_count: self.verses_count,
            revelation_place: self.revelation_place,
        }
    }
}

/// Every chapter, ordered by id
pub fn chapters() -> Vec<Chapter> {
    ChapterId::all()
        .zip(chapters::CHAPTERS.iter())
        .map(|(id, record)| record.to_chapter(id))
        .collect()
}

/// The record for one chapter
pub fn chapter(id: ChapterId) -> Chapter {
    chapters::CHAPTERS[(id.get() - 1) as usize].to_chapter(id)
}

/// The popular chapters, in display order
pub fn popular_chapters() -> Vec<Chapter> {
    POPULAR_CHAPTERS
        .iter()
        .filter_map(|&id| ChapterId::new(id as i64).ok())
        .map(chapter)
        .collect()
}

/// Hand-transcribed verses for the chapter, if any exist
pub fn curated_verses(id: ChapterId) -> Option<Vec<Verse>> {
    let verses: Vec<Verse> = curated::CURATED_VERSES
        .iter()
        .filter(|v| v.chapter == id.get())
        .map(|v| {
            Verse::new(id, v.number, v.text)
                .with_translation(Language::English, v.english)
                .with_translation(Language::Urdu, v.urdu)
        })
        .collect();

    if verses.is_empty() {
        None
    } else {
        Some(verses)
    }
}

/// Up to five placeholder verses followed by one trailing notice verse
pub fn placeholder_verses(id: ChapterId) -> Vec<Verse> {
    let info = chapter(id);
    let count = info.verses_count.min(MAX_PLACEHOLDER_VERSES);

    let mut verses: Vec<Verse> = (1..=count)
        .map(|n| {
            Verse::new(id, n, PLACEHOLDER_TEXT)
                .with_kind(VerseKind::Placeholder)
                .with_translation(
                    Language::English,
                    format!(
                        "This is verse {} of Surah {}. Please connect to the internet to load complete verses with accurate translations.",
                        n, info.name
                    ),
                )
                .with_translation(
                    Language::Urdu,
                    format!(
                        "یہ سورہ {} کی آیت {} ہے۔ مکمل آیات اور درست ترجمے کے لیے برائے کرم انٹرنیٹ سے جڑیں۔",
                        info.name, n
                    ),
                )
        })
        .collect();

    verses.push(
        Verse::new(id, count + 1, NOTICE_TEXT)
            .with_kind(VerseKind::Notice)
            .with_translation(Language::English, NOTICE_ENGLISH)
            .with_translation(Language::Urdu, NOTICE_URDU),
    );

    verses
}

/// Offline verses: curated when available, placeholders otherwise
pub fn fallback_verses(id: ChapterId) -> (Vec<Verse>, VerseKind) {
    match curated_verses(id) {
        Some(verses) => (verses, VerseKind::Text),
        None => (placeholder_verses(id), VerseKind::Placeholder),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: i64) -> ChapterId {
        ChapterId::new(n).unwrap()
    }

    #[test]
    fn test_dataset_is_total_and_ordered() {
        let all = chapters();
        assert_eq!(all.len(), 114);
        for (i, c) in all.iter().enumerate() {
            assert_eq!(c.id.get() as usize, i + 1);
            assert!(c.verses_count > 0);
            assert!(!c.name_arabic.is_empty());
        }
    }

    #[test]
    fn test_total_verse_count() {
        let total: u32 = chapters().iter().map(|c| c.verses_count as u32).sum();
        assert_eq!(total, 6236);
    }

    #[test]
    fn test_known_records() {
        let fatihah = chapter(id(1));
        assert_eq!(fatihah.name, "Al-Fatihah (The Opening)");
        assert_eq!(fatihah.verses_count, 7);
        assert_eq!(fatihah.revelation_place, RevelationPlace::Makkah);

        let baqarah = chapter(id(2));
        assert_eq!(baqarah.verses_count, 286);
        assert_eq!(baqarah.revelation_place, RevelationPlace::Madinah);
    }

    #[test]
    fn test_curated_opening_chapter() {
        let verses = curated_verses(id(1)).unwrap();
        let keys: Vec<String> = verses.iter().map(|v| v.key().to_string()).collect();
        assert_eq!(keys, ["1:1", "1:2", "1:3", "1:4", "1:5", "1:6", "1:7"]);
        assert!(verses.iter().all(|v| v.has_translation(Language::Urdu)));
    }

    #[test]
    fn test_placeholders_are_bounded() {
        let verses = placeholder_verses(id(50));
        assert_eq!(verses.len(), 6);
        assert!(verses[..5].iter().all(|v| v.kind == VerseKind::Placeholder));
        assert_eq!(verses[5].kind, VerseKind::Notice);
        assert_eq!(verses[5].number, 6);
        assert!(verses[0].translation(Language::English).contains("Surah Qaf"));
    }

    #[test]
    fn test_placeholders_for_short_chapter() {
        // Al-Kawthar has three verses
        let verses = placeholder_verses(id(108));
        assert_eq!(verses.len(), 4);
        assert_eq!(verses.last().unwrap().kind, VerseKind::Notice);
    }

    #[test]
    fn test_popular_chapters() {
        let popular = popular_chapters();
        assert_eq!(popular.len(), 9);
        assert_eq!(popular[2].id.get(), 18);
    }
}
