mod api;
mod app;
mod bootstrap;
mod cli;
mod config;
mod logging;
mod runtime;
mod store;
mod time_utils;
mod types;
mod ui;

use anyhow::{Context, Result};
use api::{ApiClient, DevBackend, TimerGateway};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::TimersConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = TimersConfig::load()?;

    let gateway: Arc<dyn TimerGateway> = match cli.command() {
        Commands::ConfigPath => {
            let path = TimersConfig::ensure_default_file()?;
            println!("{}", path.display());
            return Ok(());
        }
        Commands::Dev { latency_ms } => {
            println!("Running in dev mode with an in-memory backend.");
            Arc::new(DevBackend::seeded().with_latency(Duration::from_millis(latency_ms)))
        }
        Commands::Run { api_url } => {
            if let Some(api_url) = api_url {
                cfg.api_url = api_url;
            }
            let client = ApiClient::new(&cfg.api_url, cfg.request_timeout())?;
            println!("Connecting to {}", client.base_url());
            Arc::new(client)
        }
    };

    let log_path = TimersConfig::log_path()?;
    logging::init(&log_path)?;
    tracing::info!(api_url = %cfg.api_url, "starting timers-tui");

    let mut app = App::new();
    bootstrap::initialize_app_state(&mut app, gateway.as_ref()).await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to initialize terminal")?;

    let res = runtime::run_app(&mut terminal, &mut app, gateway, cfg.refresh_interval()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    tracing::info!("exiting");
    Ok(())
}
