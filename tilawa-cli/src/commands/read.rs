//! Read command implementation

use super::{AppContext, LangArg};
use anyhow::Result;
use tilawa_core::search;
use tilawa_core::{ChapterContent, Verse, VerseKind};

/// Print a chapter with the selected translations
pub async fn read(
    ctx: &AppContext,
    chapter: &str,
    lang: LangArg,
    query: Option<&str>,
    json: bool,
) -> Result<()> {
    let mut content = ctx.resolver.load_chapter(chapter).await?;
    let query = query.map(str::trim).filter(|q| !q.is_empty());

    if let Some(q) = query {
        content.verses.retain(|v| search::matches(v, q));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&content)?);
        return Ok(());
    }

    print_header(&content);
    if let Some(q) = query {
        println!("{}\n", search::summary(content.verses.len(), q));
    }
    for verse in &content.verses {
        print_verse(verse, lang);
    }

    Ok(())
}

fn print_header(content: &ChapterContent) {
    let chapter = &content.chapter;
    println!("{}. {}  {}", chapter.id, chapter.name, chapter.name_arabic);
    println!(
        "{} verses · {}",
        chapter.verses_count,
        chapter.revelation_place.label()
    );

    if !content.verses_origin.is_remote() {
        println!("(Showing offline content)");
    }
    for language in &content.missing_translations {
        println!("({})", language.unavailable_text());
    }
    println!();
}

fn print_verse(verse: &Verse, lang: LangArg) {
    if verse.kind == VerseKind::Notice {
        println!("  {}\n", verse.text);
        return;
    }

    println!("[{}] {}", verse.key(), verse.text);
    for &language in lang.languages() {
        println!("    {}: {}", language.label(), verse.translation(language));
    }
    println!();
}
