//! Application entry point and dispatch.

use std::path::Path;

use anyhow::{Context, Result};

use folio_core::{CancellationToken, PortfolioEngine, SiteContent, ViewPolicy};
use folio_tui::{TuiApp, TuiMessage};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let content = load_content(config)?;

    if config.check {
        print_summary(&content, config.quiet);
        return Ok(());
    }

    run_tui(config, content)
}

/// Load the site content from the configured path, or the embedded
/// default when none is given.
fn load_content(config: &AppConfig) -> Result<SiteContent> {
    match &config.content {
        Some(path) => SiteContent::from_path(Path::new(path))
            .with_context(|| format!("failed to load content from {path}")),
        None => Ok(SiteContent::embedded()),
    }
}

fn print_summary(content: &SiteContent, quiet: bool) {
    println!("{}: content OK", content.name);
    if quiet {
        return;
    }
    println!("  sections: {}", content.sections.len());
    println!("  typing phrases: {}", content.typing_phrases.len());
    println!("  stats: {}", content.stats.len());
    println!(
        "  skills: {}",
        content
            .skill_groups
            .iter()
            .map(|g| g.skills.len())
            .sum::<usize>()
    );
    println!("  projects: {}", content.projects.len());
}

fn run_tui(config: &AppConfig, content: SiteContent) -> Result<()> {
    let engine = PortfolioEngine::new(content, ViewPolicy::terminal(), config.reduced_motion);
    engine.subscribe(std::sync::Arc::new(folio_core::events::TracingObserver));

    let cancel = CancellationToken::new();
    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();

    // Ctrl+C inside the TUI is handled by the keymap; this covers
    // SIGINT delivered while the terminal is being set up or torn down.
    let cancel_clone = cancel.clone();
    let quit_tx = tx.clone();
    ctrlc::set_handler(move || {
        cancel_clone.cancel();
        let _ = quit_tx.send(TuiMessage::Quit);
    })
    .context("failed to set Ctrl+C handler")?;

    let mut app = TuiApp::new(engine, rx, config.tick_rate_duration());
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    if cancel.is_cancelled() {
        tracing::info!("cancelled by user");
    }
    Ok(())
}
