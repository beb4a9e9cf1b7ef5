use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

use code_explorer::app::{action::Action, r#loop::run_loop, reducer, state::AppState};
use code_explorer::config::{self, AppConfig};
use code_explorer::logging;

/// Terminal dashboard for exploring a codebase.
#[derive(Debug, Parser)]
#[command(name = "code-explorer", version, about)]
struct Cli {
    /// Route to open after sign-in, e.g. `/settings`.
    #[arg(long)]
    route: Option<String>,

    /// Config file to read instead of the default one.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file to write instead of the default one.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Go straight to the dashboard.
    #[arg(long)]
    skip_landing: bool,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

fn load_config(cli: &Cli) -> (AppConfig, Option<String>) {
    let loaded = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let (config, mut warning) = match loaded {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err.to_string())),
    };

    let Some(route) = &cli.route else {
        return (config, warning);
    };
    match config.clone().with_start_route(route) {
        Ok(config) => (config, warning),
        Err(err) => {
            if warning.is_none() {
                warning = Some(err.to_string());
            }
            (config, warning)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config and logging come up before the terminal is touched, so a
    // failure here never leaves it in raw mode.
    let (config, warning) = load_config(&cli);
    let log_path = cli
        .log_file
        .clone()
        .or_else(logging::default_log_path)
        .unwrap_or_else(|| PathBuf::from(format!("{}.log", config::APP_DIR)));
    let _log_guard = logging::init(&log_path, &config.log_level)?;

    let mut app_state = AppState::new(config);
    if let Some(warning) = warning {
        tracing::warn!(%warning, "config not applied, using defaults");
        app_state.set_status(format!("Config: {warning}"));
    }
    if cli.skip_landing {
        reducer::update(&mut app_state, Action::SignIn);
    }

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "run loop failed");
    }
    res
}
