//! Counter - tally demo
//!
//! Event -> Keybindings -> Action -> Store -> Observers -> Render
//!
//! Keys (defaults): k/Up/+ = +1, j/Down/- = -1, 5 = +5, 3 = -3, 0 = +10,
//! 1 = -15, r = reset, t/Space = show/hide, q/Esc = quit
//!
//! # Usage
//!
//! ```sh
//! # Interactive
//! cargo run -p redux-counter
//!
//! # Rebind keys and log to a file
//! cargo run -p redux-counter -- --config counter.json --log-file counter.log
//!
//! # Headless: one JSON action message per line in, one JSON state per line out
//! cargo run -p redux-counter -- --script actions.jsonl
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use redux_counter::components::{Component, CounterView, CounterViewProps};
use redux_counter::config::{AppConfig, ConfigError};
use redux_counter::script::{run_script, ScriptError};
use redux_counter::{transition, CounterAction, CounterState};
use tally::{
    process_raw_event, spawn_event_poller, EventKind, Keybindings, LoggingMiddleware, RawEvent,
    StoreWithMiddleware,
};

/// Counter - a reducer-backed store driving a terminal view
#[derive(Parser, Debug)]
#[command(name = "counter")]
#[command(about = "A counter demonstrating the tally store")]
struct Args {
    /// JSON config file with keybinding overrides
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Run headless: dispatch the action messages in this file and print states
    #[arg(long, short)]
    script: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("script {}: {source}", path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: ScriptError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let result = match init_logging(&args) {
        Ok(()) => run(args).await,
        Err(e) => Err(AppError::Io(e)),
    };
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    // Script mode never reads the config
    if let Some(path) = &args.script {
        return run_script_file(path);
    }

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let keybindings = config.keybindings();

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, keybindings).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map_err(AppError::from)
}

/// Logs go to `--log-file` when given. Script mode falls back to stderr;
/// the interactive view owns the terminal, so without a file nothing is logged.
fn init_logging(args: &Args) -> io::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if args.script.is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn run_script_file(path: &Path) -> Result<(), AppError> {
    let script_error = |source: ScriptError| AppError::Script {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(|e| script_error(ScriptError::Io(e)))?;
    let state = run_script(BufReader::new(file), io::stdout().lock()).map_err(script_error)?;
    debug!(?state, "Final state");
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    keybindings: Keybindings,
) -> io::Result<()> {
    // Store = state + transition function, with dispatch logging
    let mut store = StoreWithMiddleware::new(
        CounterState::default(),
        transition,
        LoggingMiddleware::new(),
    );
    store.subscribe(|state: &CounterState| {
        debug!(counter = state.counter, show_counter = state.show_counter, "State");
    });

    let mut view = CounterView;

    // Event poller
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    info!("Counter started");
    let mut should_render = true;

    loop {
        if should_render {
            let state = store.state();
            terminal.draw(|frame| {
                let area = frame.area();
                let props = CounterViewProps {
                    state,
                    keybindings: &keybindings,
                };
                view.render(frame, area, props);
            })?;
            should_render = false;
        }

        let Some(raw_event) = event_rx.recv().await else {
            break;
        };

        let event = process_raw_event(raw_event);
        if let EventKind::Resize(_, _) = event {
            should_render = true;
            continue;
        }

        let props = CounterViewProps {
            state: store.state(),
            keybindings: &keybindings,
        };
        let actions: Vec<CounterAction> = view.handle_event(&event, props).into_iter().collect();
        for action in actions {
            if matches!(action, CounterAction::Quit) {
                info!("Quit requested");
                cancel_token.cancel();
                return Ok(());
            }
            should_render |= store.dispatch(action);
        }
    }

    cancel_token.cancel();
    Ok(())
}
