//! Bookmark and theme commands

use super::{AppContext, ThemeArg};
use anyhow::{bail, Context, Result};
use std::path::Path;
use tilawa_core::{BookmarkKey, BookmarkToggle, Theme};

/// Toggle a verse or chapter bookmark
pub async fn bookmark(ctx: &AppContext, key: &str) -> Result<()> {
    let key = match BookmarkKey::parse(key.trim()) {
        Some(key) => key,
        None => bail!("Invalid bookmark key: {} (expected e.g. 2:255 or surah-18)", key),
    };

    if let BookmarkKey::Verse(verse) = key {
        let verses_count = tilawa_core::dataset::chapter(verse.chapter).verses_count;
        if verse.verse > verses_count {
            bail!("Surah {} has only {} verses", verse.chapter, verses_count);
        }
    }

    let mut store = ctx.open_store().await?;
    let change = store.toggle_bookmark(&key.to_string()).await?;

    match change {
        BookmarkToggle::Added => println!("Bookmark added: {}", key),
        BookmarkToggle::Removed => println!("Bookmark removed: {}", key),
    }
    Ok(())
}

/// List bookmarks, or write them to an export file
pub async fn bookmarks(ctx: &AppContext, export: Option<&Path>, json: bool) -> Result<()> {
    let store = ctx.open_store().await?;
    let export_data = store.export();

    if let Some(target) = export {
        let path = if target.is_dir() {
            target.join(export_data.file_name())
        } else {
            target.to_path_buf()
        };
        let body = serde_json::to_string_pretty(&export_data)?;
        tokio::fs::write(&path, body)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!(
            "Exported {} bookmarks to {}",
            export_data.total_count,
            path.display()
        );
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&export_data)?);
        return Ok(());
    }

    if export_data.bookmarks.is_empty() {
        println!("No bookmarks yet");
        return Ok(());
    }
    for key in &export_data.bookmarks {
        match BookmarkKey::parse(key) {
            Some(BookmarkKey::Chapter(id)) => {
                let chapter = tilawa_core::dataset::chapter(id);
                println!("{:<10} {}", key, chapter.name);
            }
            _ => println!("{}", key),
        }
    }
    println!("\n{} bookmarks", export_data.total_count);
    Ok(())
}

fn theme_name(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "dark"
    } else {
        "light"
    }
}

/// Print or change the theme
pub async fn theme(ctx: &AppContext, mode: Option<ThemeArg>) -> Result<()> {
    let mut store = ctx.open_store().await?;

    let theme = match mode {
        None => store.theme(),
        Some(ThemeArg::Toggle) => store.toggle_theme().await?,
        Some(ThemeArg::Light) => {
            store.set_theme(Theme::Light).await?;
            Theme::Light
        }
        Some(ThemeArg::Dark) => {
            store.set_theme(Theme::Dark).await?;
            Theme::Dark
        }
    };

    println!("Theme: {}", theme_name(theme));
    Ok(())
}
