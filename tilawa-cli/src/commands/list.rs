//! List command implementation

use super::AppContext;
use anyhow::Result;
use serde::Serialize;
use tilawa_core::{Chapter, Origin};

/// Chapter list output
#[derive(Serialize)]
struct ChapterList {
    chapters: Vec<Chapter>,
    origin: Origin,
    fallback_reason: Option<String>,
}

/// List the popular chapters, or all of them
pub async fn list(ctx: &AppContext, all: bool, json: bool) -> Result<()> {
    let output = if all {
        let resolved = ctx.resolver.list_chapters().await;
        ChapterList {
            chapters: resolved.value,
            origin: resolved.origin,
            fallback_reason: resolved.cause.map(|e| e.to_string()),
        }
    } else {
        ChapterList {
            chapters: ctx.resolver.popular_chapters(),
            origin: Origin::Dataset,
            fallback_reason: None,
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(reason) = &output.fallback_reason {
        eprintln!("Using offline chapter list ({})", reason);
    }
    for chapter in &output.chapters {
        println!(
            "{:>3}. {:<40} {:>20}  {:>3} verses · {}",
            chapter.id,
            chapter.name,
            chapter.name_arabic,
            chapter.verses_count,
            chapter.revelation_place.label()
        );
    }
    if all {
        println!("\n{} chapters", output.chapters.len());
    }

    Ok(())
}
