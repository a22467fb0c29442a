//! Outbound links: recitation audio, quran.com, share links

use crate::config::{expand_all, ResolverConfig};
use crate::types::ChapterId;

/// Recitation audio URLs for a chapter, in preference order
pub fn audio_sources(config: &ResolverConfig, id: ChapterId) -> Vec<String> {
    expand_all(&config.audio_sources, id)
}

/// External reading link on quran.com
pub fn quran_com_url(id: ChapterId) -> String {
    format!("https://quran.com/{}", id)
}

/// Link that opens the chapter directly, e.g. `https://host/?surah=18`
pub fn share_url(base_url: &str, id: ChapterId) -> String {
    format!("{}/?surah={}", base_url.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links() {
        let id = ChapterId::new(18).unwrap();
        assert_eq!(quran_com_url(id), "https://quran.com/18");
        assert_eq!(share_url("http://localhost:3000/", id), "http://localhost:3000/?surah=18");

        let audio = audio_sources(&ResolverConfig::default(), id);
        assert_eq!(audio[0], "https://server8.mp3quran.net/afs/018.mp3");
        assert!(audio[1].ends_with("/ar.alafasy/18.mp3"));
    }
}
