//! Tilawa CLI - read the Holy Quran from the terminal

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{LangArg, ThemeArg};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tilawa")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Never contact remote sources; use the built-in data only
    #[arg(long, global = true)]
    offline: bool,

    /// Directory holding bookmarks and settings
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List chapters (the popular ones unless --all)
    List {
        /// List all 114 chapters
        #[arg(long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read a chapter
    Read {
        /// Chapter number (1-114)
        chapter: String,

        /// Translation to show
        #[arg(short, long, value_enum, default_value = "english")]
        lang: LangArg,

        /// Only show verses containing this text
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle a bookmark (`2:255` for a verse, `surah-18` for a chapter)
    Bookmark {
        /// Bookmark key
        key: String,
    },

    /// Show or export bookmarks
    Bookmarks {
        /// Write a dated export file to this path (a directory gets the default name)
        #[arg(long, value_name = "PATH")]
        export: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change the reading theme
    Theme {
        /// light, dark or toggle; prints the current theme when omitted
        #[arg(value_enum)]
        mode: Option<ThemeArg>,
    },

    /// Show recitation and reference links for a chapter
    Audio {
        /// Chapter number (1-114)
        chapter: String,
    },

    /// Check that the remote sources are reachable
    Check,

    /// Resolve every chapter and report which fell back to offline data
    Verify {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let filter = if cli.verbose {
        "tilawa_cli=debug,tilawa_core=debug"
    } else {
        "tilawa_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ctx = commands::AppContext::new(cli.offline, cli.data_dir)?;

    match cli.command {
        Commands::List { all, json } => commands::list(&ctx, all, json).await,

        Commands::Read {
            chapter,
            lang,
            search,
            json,
        } => commands::read(&ctx, &chapter, lang, search.as_deref(), json).await,

        Commands::Bookmark { key } => commands::bookmark(&ctx, &key).await,

        Commands::Bookmarks { export, json } => {
            commands::bookmarks(&ctx, export.as_deref(), json).await
        }

        Commands::Theme { mode } => commands::theme(&ctx, mode).await,

        Commands::Audio { chapter } => commands::audio(&ctx, &chapter),

        Commands::Check => commands::check(&ctx).await,

        Commands::Verify { json } => commands::verify(&ctx, json).await,
    }
}
