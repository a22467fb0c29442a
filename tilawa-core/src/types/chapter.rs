//! Chapter type and its validated identifier

use crate::error::ResolveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of chapters in the text
pub const CHAPTER_COUNT: u8 = 114;

/// A validated chapter number in `1..=114`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ChapterId(u8);

impl ChapterId {
    /// Create a chapter id, rejecting anything outside `1..=114`
    pub fn new(id: i64) -> Result<Self, ResolveError> {
        if (1..=CHAPTER_COUNT as i64).contains(&id) {
            Ok(Self(id as u8))
        } else {
            Err(ResolveError::InvalidInput(format!(
                "Invalid Surah ID: {}. Must be between 1-{}.",
                id, CHAPTER_COUNT
            )))
        }
    }

    /// The raw chapter number
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-padded three digit form used by audio URLs (`001`)
    pub fn padded(self) -> String {
        format!("{:03}", self.0)
    }

    /// Iterate over every chapter id in order
    pub fn all() -> impl Iterator<Item = ChapterId> {
        (1..=CHAPTER_COUNT).map(ChapterId)
    }
}

impl FromStr for ChapterId {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let id: i64 = trimmed.parse().map_err(|_| {
            ResolveError::InvalidInput(format!(
                "Invalid Surah ID: {}. Must be between 1-{}.",
                trimmed, CHAPTER_COUNT
            ))
        })?;
        Self::new(id)
    }
}

impl TryFrom<i64> for ChapterId {
    type Error = ResolveError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChapterId> for u8 {
    fn from(id: ChapterId) -> Self {
        id.0
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a chapter was revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevelationPlace {
    Makkah,
    Madinah,
}

impl RevelationPlace {
    /// Parse the spellings used by the remote sources
    /// (`makkah`/`madinah` on quran.com, `meccan`/`medinan` on quran-json)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "makkah" | "mecca" | "meccan" | "makki" | "makkiyah" => Some(Self::Makkah),
            "madinah" | "medina" | "medinan" | "madani" | "madaniyah" => Some(Self::Madinah),
            _ => None,
        }
    }

    /// Short adjective shown next to the verse count
    pub fn label(self) -> &'static str {
        match self {
            Self::Makkah => "Makki",
            Self::Madinah => "Madani",
        }
    }
}

/// A single chapter of the text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    pub id: ChapterId,

    /// Name in the original script
    pub name_arabic: String,

    /// Translated / display name
    pub name: String,

    pub verses_count: u16,

    pub revelation_place: RevelationPlace,
}
