//! TradeWatch TUI: alert investigation dashboard.
//!
//! Views, one per investigation step:
//! 1. Data Gathering: source overview and data-quality check
//! 2. Pattern Analysis: headline metrics and trading activity chart
//! 3. Risk Assessment: AI reasoning and tabbed evidence charts
//! 4. Recommendation: verdict, findings, risk factors and actions

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use tradewatch_core::{DashboardConfig, InvestigationStep};
use tradewatch_tui::{input, logging, ui, AppState};

#[derive(Parser)]
#[command(name = "tradewatch-tui", about = "Market surveillance alert investigation dashboard")]
struct Args {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial step, overriding the configuration (e.g. risk_assessment)
    #[arg(long)]
    step: Option<InvestigationStep>,

    /// Master seed for chart tables, overriding the configuration
    #[arg(long)]
    seed: Option<u64>,
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tradewatch")
        .join("config.toml")
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(default_config_path);
    let mut config = DashboardConfig::load(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    if let Some(step) = args.step {
        config.initial_step = step;
    }
    if let Some(seed) = args.seed {
        config.master_seed = seed;
    }

    let log_file = config.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_file, &config.log_level)?;

    let master_seed = config.effective_seed(clock_seed());
    tracing::info!(
        seed = master_seed,
        initial_step = config.initial_step.slug(),
        config = %config_path.display(),
        "dashboard starting"
    );

    // Restore the terminal before the default hook prints the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut app = AppState::new(config.initial_step, master_seed);
    let tick = Duration::from_millis(config.tick_rate_ms.max(1));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, tick);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => tracing::info!(cycles = app.cycle, "dashboard stopped"),
        Err(err) => tracing::error!(error = %err, "dashboard stopped with error"),
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    tick: Duration,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }
    }
    Ok(())
}
