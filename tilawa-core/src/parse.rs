//! Validators for the remote response shapes
//!
//! Each function takes a parsed JSON body and either produces domain values or
//! explains why the body is unacceptable. They are plugged into
//! [`SourceChain`](crate::source::SourceChain) as validators.

use crate::dataset;
use crate::types::{Chapter, ChapterId, RevelationPlace, Verse};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;

#[derive(Debug, Deserialize)]
struct TranslatedName {
    name: Option<String>,
}

/// Chapter record as served by quran.com (`name_arabic`, `translated_name`,
/// `verses_count`, `revelation_place`) or quran-json (`name`, `translation`,
/// `total_verses`, `type`)
#[derive(Debug, Deserialize)]
struct RemoteChapter {
    id: i64,
    #[serde(alias = "name")]
    name_arabic: Option<String>,
    #[serde(alias = "transliteration")]
    name_simple: Option<String>,
    translated_name: Option<TranslatedName>,
    translation: Option<String>,
    #[serde(alias = "total_verses")]
    verses_count: Option<u16>,
    #[serde(alias = "type")]
    revelation_place: Option<String>,
}

impl RemoteChapter {
    /// Build a chapter, completing missing fields from the dataset record
    fn into_chapter(self) -> Result<Chapter, String> {
        let id = ChapterId::new(self.id).map_err(|e| e.to_string())?;
        let known = dataset::chapter(id);

        let translated = self
            .translated_name
            .and_then(|t| t.name)
            .or(self.translation)
            .filter(|s| !s.trim().is_empty());
        let simple = self.name_simple.filter(|s| !s.trim().is_empty());
        let name = match (simple, translated) {
            (Some(simple), Some(translated)) => format!("{} ({})", simple, translated),
            (Some(one), None) | (None, Some(one)) => one,
            (None, None) => known.name,
        };

        Ok(Chapter {
            id,
            name_arabic: self
                .name_arabic
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(known.name_arabic),
            name,
            verses_count: self.verses_count.filter(|n| *n > 0).unwrap_or(known.verses_count),
            revelation_place: self
                .revelation_place
                .as_deref()
                .and_then(RevelationPlace::parse)
                .unwrap_or(known.revelation_place),
        })
    }
}

fn chapter_from_value(value: Value) -> Result<Chapter, String> {
    serde_json::from_value::<RemoteChapter>(value)
        .map_err(|e| format!("unrecognized chapter record: {}", e))?
        .into_chapter()
}

/// Locate the chapter array in one of the three tolerated envelopes:
/// `{ "chapters": [...] }`, a bare array, or `{ "data": [...] }`
fn chapter_array(value: Value) -> Result<Vec<Value>, String> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => {
            for field in ["chapters", "data"] {
                if let Some(Value::Array(items)) = map.remove(field) {
                    return Ok(items);
                }
            }
            Err("expected an array of chapters".to_string())
        }
        other => Err(format!("expected an array of chapters, got {}", type_name(&other))),
    }
}

/// Validator for the bulk chapter list
///
/// Records that do not parse are skipped; the list as a whole is rejected when
/// fewer than `min_count` chapters remain.
pub fn chapter_list(value: Value, min_count: usize) -> Result<Vec<Chapter>, String> {
    let items = chapter_array(value)?;
    let total = items.len();

    let mut chapters: Vec<Chapter> = items
        .into_iter()
        .filter_map(|item| chapter_from_value(item).ok())
        .collect();
    chapters.sort_by_key(|c| c.id);
    chapters.dedup_by_key(|c| c.id);

    if chapters.len() < min_count {
        return Err(format!(
            "insufficient data: {} usable chapters out of {} records, expected at least {}",
            chapters.len(),
            total,
            min_count
        ));
    }
    Ok(chapters)
}

/// Validator for single chapter metadata
///
/// Accepts `{ "chapter": {...} }`, an array searched by id, or a bare record.
pub fn chapter(value: Value, id: ChapterId) -> Result<Chapter, String> {
    let record = match value {
        Value::Object(mut map) if map.contains_key("chapter") => map
            .remove("chapter")
            .ok_or_else(|| "missing chapter field".to_string())?,
        Value::Array(items) => items
            .into_iter()
            .find(|item| item.get("id").and_then(Value::as_i64) == Some(id.get() as i64))
            .ok_or_else(|| format!("chapter {} not present in list", id))?,
        value @ Value::Object(_) if value.get("id").is_some() => value,
        other => return Err(format!("unrecognized chapter response: {}", type_name(&other))),
    };

    let chapter = chapter_from_value(record)?;
    if chapter.id != id {
        return Err(format!("asked for chapter {}, got {}", id, chapter.id));
    }
    Ok(chapter)
}

#[derive(Debug, Deserialize)]
struct RemoteVerse {
    verse_key: Option<String>,
    verse_number: Option<u16>,
    #[serde(alias = "text")]
    text_uthmani: Option<String>,
}

/// Validator for original-text verses
///
/// Accepts `{ "verses": [...] }` or a bare array. Verse numbers come from
/// `verse_number`, else the `verse_key` suffix, else the position. The numbers
/// must run 1, 2, 3.. in order, and any `verse_key` must name chapter `id`.
pub fn verses(value: Value, id: ChapterId) -> Result<Vec<Verse>, String> {
    let items = match value {
        Value::Object(mut map) => match map.remove("verses") {
            Some(Value::Array(items)) => items,
            _ => return Err("missing verses array".to_string()),
        },
        Value::Array(items) => items,
        other => return Err(format!("invalid verse data format: {}", type_name(&other))),
    };

    if items.is_empty() {
        return Err("no verses in response".to_string());
    }
    let max = dataset::chapter(id).verses_count;
    if items.len() > max as usize {
        return Err(format!(
            "{} verses in response, chapter {} has {}",
            items.len(),
            id,
            max
        ));
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let position = index as u16 + 1;
            let remote: RemoteVerse = serde_json::from_value(item)
                .map_err(|e| format!("unrecognized verse record {}: {}", position, e))?;
            let text = remote
                .text_uthmani
                .filter(|t| !t.trim().is_empty())
                .ok_or_else(|| format!("verse {} has no text", position))?;

            let key_number = match remote.verse_key.as_deref() {
                Some(key) => {
                    let (chapter, number) = key
                        .split_once(':')
                        .ok_or_else(|| format!("malformed verse key {:?}", key))?;
                    if chapter.trim().parse::<i64>().ok() != Some(id.get() as i64) {
                        return Err(format!("verse key {} does not belong to chapter {}", key, id));
                    }
                    Some(
                        number
                            .trim()
                            .parse::<u16>()
                            .map_err(|_| format!("malformed verse key {:?}", key))?,
                    )
                }
                None => None,
            };

            let number = remote.verse_number.or(key_number).unwrap_or(position);
            if number != position {
                return Err(format!(
                    "verse numbers must run from 1 without gaps: found {} at position {}",
                    number, position
                ));
            }
            Ok(Verse::new(id, number, text))
        })
        .collect()
}

/// Validator for one language's translations, aligned with verse positions
///
/// Accepts `{ "translations": [{ "text": .. }] }` or `[{ "text": .. }]`.
/// Entries without text stay `None` so positions remain aligned.
pub fn translations(value: Value) -> Result<Vec<Option<String>>, String> {
    let items = match value {
        Value::Object(mut map) => match map.remove("translations") {
            Some(Value::Array(items)) => items,
            _ => return Err("missing translations array".to_string()),
        },
        Value::Array(items) => items,
        other => return Err(format!("invalid translation format: {}", type_name(&other))),
    };

    if items.is_empty() {
        return Err("no translations in response".to_string());
    }

    Ok(items
        .iter()
        .map(|item| {
            item.get("text")
                .or_else(|| item.get("translation"))
                .and_then(Value::as_str)
                .map(strip_markup)
                .filter(|t| !t.is_empty())
        })
        .collect())
}

/// Remove footnote markers and any other markup from translation text
pub fn strip_markup(text: &str) -> String {
    static FOOTNOTE: OnceLock<Regex> = OnceLock::new();
    static TAG: OnceLock<Regex> = OnceLock::new();

    let footnote = FOOTNOTE.get_or_init(|| Regex::new(r"(?s)<sup[^>]*>.*?</sup>").unwrap());
    let tag = TAG.get_or_init(|| Regex::new(r"<[^>]+>").unwrap());

    let without_notes = footnote.replace_all(text, "");
    tag.replace_all(&without_notes, "").trim().to_string()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
