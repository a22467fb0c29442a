//! Check and verify commands

use super::AppContext;
use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tilawa_core::diagnostics::{self, VerificationReport};
use tilawa_core::ChapterId;

/// Probe the chapter API and the audio host
pub async fn check(ctx: &AppContext) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb.set_message("Testing API connectivity...");

    let result = diagnostics::run_system_checks(&ctx.resolver).await;
    pb.finish_and_clear();

    match &result.api {
        Some(url) => println!("API connectivity:   OK ({})", url),
        None => println!("API connectivity:   FAILED (all API endpoints unreachable)"),
    }
    println!(
        "Audio connectivity: {}",
        if result.audio { "OK" } else { "FAILED" }
    );

    if !result.all_passed() {
        bail!("Some system checks failed");
    }
    Ok(())
}

/// Resolve all chapters with a progress bar and summarize the outcome
pub async fn verify(ctx: &AppContext, json: bool) -> Result<()> {
    let ids: Vec<ChapterId> = ChapterId::all().collect();

    let pb = ProgressBar::new(ids.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>3}/{len:3} {msg}")?
            .progress_chars("##-"),
    );

    let mut checks = Vec::with_capacity(ids.len());
    for id in ids {
        pb.set_message(format!("Surah {}", id));
        checks.push(diagnostics::verify_chapter(&ctx.resolver, id).await);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let report = VerificationReport::from_checks(&checks);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Verification complete:");
    println!("  Remote:   {}/{}", report.successful.len(), report.total);
    println!("  Fallback: {}", report.fallback.len());
    if !report.fallback.is_empty() {
        let ids: Vec<String> = report.fallback.iter().map(|id| id.to_string()).collect();
        println!("  Offline chapters: {}", ids.join(", "));
    }
    Ok(())
}
