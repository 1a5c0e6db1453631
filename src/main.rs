use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::sync::{broadcast, mpsc};

mod app;
mod config;
mod data;
mod logging;
mod models;
mod table;
mod ui;
mod utils;

use app::state::AppState;
use config::settings::Settings;
use ui::app::TuiApp;

#[derive(Parser, Debug)]
#[command(name = "tracknstock-tui")]
#[command(about = "Terminal admin dashboard for shipments, inventory, orders and users")]
#[command(version)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Rows per page on first display
    #[arg(short, long)]
    page_size: Option<usize>,

    /// Start with the light theme
    #[arg(long)]
    light: bool,

    /// Simulated data source latency in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,
}

impl Args {
    /// Command-line values take precedence over the settings file
    fn apply(&self, settings: &mut Settings) -> Result<()> {
        if let Some(size) = self.page_size {
            settings.table.default_page_size = size;
        }
        if self.light {
            settings.appearance.dark_mode = false;
        }
        if let Some(ms) = self.latency_ms {
            settings.fetch_latency_ms = ms;
        }
        if let Some(path) = &self.log_file {
            settings.log_file = Some(path.display().to_string());
        }
        settings.validate()?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load settings
    let mut settings = Settings::load(args.config.as_deref())?;
    args.apply(&mut settings)?;

    logging::init_logging(&settings.log_level, &settings.log_path())?;
    tracing::info!("Starting tracknstock-tui {}", env!("CARGO_PKG_VERSION"));

    // Panics would otherwise print into the alternate screen
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {}", info);
    }));

    // Create channels for communication
    let (state_tx, state_rx) = mpsc::channel(100);
    let (ui_update_tx, _) = broadcast::channel(100);

    // Create shared application state
    let latency = Duration::from_millis(settings.fetch_latency_ms);
    let state = Arc::new(AppState::new(ui_update_tx.clone(), latency));

    // Start state manager
    let state_clone = state.clone();
    let manager_tx = state_tx.clone();
    let state_manager_handle = tokio::spawn(async move {
        app::state::run_state_manager(state_clone, state_rx, manager_tx, ui_update_tx).await;
    });

    data::loader::spawn_initial_load(latency, &state_tx);

    // Run TUI (blocks until user quits)
    let mut tui = TuiApp::new(state, state_tx, settings, args.config)?;
    let result = tui.run().await;
    drop(tui);

    // Cleanup
    state_manager_handle.abort();

    if let Err(e) = &result {
        tracing::error!("TUI exited with error: {:#}", e);
    }
    tracing::info!("Shutdown complete");

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_settings() {
        let args = Args::parse_from(["tracknstock-tui", "--page-size", "25", "--light", "--latency-ms", "0"]);
        let mut settings = Settings::default();
        settings.appearance.dark_mode = true;
        args.apply(&mut settings).unwrap();

        assert_eq!(settings.table.default_page_size, 25);
        assert!(!settings.appearance.dark_mode);
        assert_eq!(settings.fetch_latency_ms, 0);
        assert!(settings.page_sizes().contains(&25));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let args = Args::parse_from(["tracknstock-tui", "--page-size", "0"]);
        assert!(args.apply(&mut Settings::default()).is_err());
    }
}
