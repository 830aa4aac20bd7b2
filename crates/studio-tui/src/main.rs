//! Creator studio terminal binary.
//!
//! Hosts the orchestrator behind a ratatui surface, or runs one generation
//! headless and prints the session snapshot as JSON.

mod app;
mod input;
mod view;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use studio_application::StudioUseCase;
use studio_core::catalog::{Niche, Platform};
use studio_core::config::StudioConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Prompt-to-concept demo studio: three placeholder image previews and
/// three influencer personas from one prompt.
#[derive(Parser, Debug)]
#[command(name = "studio", version, about)]
struct Cli {
    /// Path to a config file; defaults to the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run one generation without the terminal UI and print the session
    /// snapshot as JSON.
    #[arg(long)]
    headless: bool,

    /// Prompt to preload into the session.
    #[arg(long)]
    prompt: Option<String>,

    /// Platform to preselect (catalog label, e.g. "TikTok").
    #[arg(long)]
    platform: Option<Platform>,

    /// Niche to preselect (catalog label, e.g. "Tech & Gaming").
    #[arg(long)]
    niche: Option<Niche>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_tracing(cli.headless);

    let config = match &cli.config {
        Some(path) => StudioConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => StudioConfig::load(),
    };

    let session = Arc::new(StudioUseCase::new(Duration::from_millis(
        config.generation_delay_ms,
    )));
    if let Some(prompt) = &cli.prompt {
        session.set_prompt(prompt.clone()).await;
    }
    if let Some(platform) = cli.platform {
        session.set_platform(platform).await;
    }
    if let Some(niche) = cli.niche {
        session.set_niche(niche).await;
    }

    if cli.headless {
        return run_headless(&session).await;
    }

    run_tui(config, session).await
}

async fn run_headless(session: &StudioUseCase) -> anyhow::Result<()> {
    let outcome = session.generate().await;
    tracing::info!("[Headless] Generation outcome: {:?}", outcome);

    let snapshot = session.snapshot().await;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

async fn run_tui(config: StudioConfig, session: Arc<StudioUseCase>) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = app::StudioApp::new(config, session).await;
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Sends logs to a file under the user data dir so the alternate screen
/// stays clean; headless runs log to stderr instead.
fn init_tracing(headless: bool) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if !headless {
        if let Some(data_dir) = dirs::data_dir() {
            let log_dir = data_dir.join("creator-studio").join("logs");
            if std::fs::create_dir_all(&log_dir).is_ok() {
                let appender = tracing_appender::rolling::daily(log_dir, "studio.log");
                let (writer, guard) = tracing_appender::non_blocking(appender);
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(false)
                    .init();
                return Some(guard);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    None
}
