//! Audio command implementation

use super::AppContext;
use anyhow::Result;
use tilawa_core::{links, ChapterId};

/// Print the recitation sources and the quran.com page for a chapter
pub fn audio(ctx: &AppContext, chapter: &str) -> Result<()> {
    let id: ChapterId = chapter.parse()?;
    let chapter = tilawa_core::dataset::chapter(id);

    println!("{}. {}  {}", id, chapter.name, chapter.name_arabic);
    for (i, url) in links::audio_sources(ctx.resolver.config(), id)
        .iter()
        .enumerate()
    {
        println!("  Source {}: {}", i + 1, url);
    }
    println!("  Read online: {}", links::quran_com_url(id));
    Ok(())
}
