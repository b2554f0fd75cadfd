//! Matchday terminal front-end.
//!
//! Wires the headless simulation crate to a ratatui screen: config and
//! CLI overrides, file logging, terminal lifecycle, and the tick/poll
//! event loop that paces the nine simulated rounds.

mod app;
mod logging;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use matchday_core::Config;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{stdout, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::app::App;

#[derive(Parser)]
#[command(name = "matchday")]
#[command(about = "Simulate a nine-round football match between two random teams", long_about = None)]
struct Cli {
    /// Config TOML file; a missing file falls back to defaults
    #[arg(long, default_value = "matchday.toml")]
    config: PathBuf,

    /// Player roster CSV (overrides config)
    #[arg(long)]
    roster: Option<PathBuf>,

    /// SQLite results database (overrides config)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Players per team (overrides config)
    #[arg(long)]
    team_size: Option<usize>,

    /// Delay between simulated rounds in milliseconds (overrides config)
    #[arg(long)]
    round_delay_ms: Option<u64>,

    /// Fixed RNG seed for a reproducible draw and match
    #[arg(long)]
    seed: Option<u64>,
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = if cli.config.exists() {
        Config::load(&cli.config).with_context(|| format!("loading {}", cli.config.display()))?
    } else {
        Config::default()
    };

    if let Some(roster) = &cli.roster {
        config.roster_path = roster.display().to_string();
    }
    if let Some(db) = &cli.db {
        config.database_path = db.display().to_string();
    }
    if let Some(team_size) = cli.team_size {
        config.team_size = team_size;
    }
    if let Some(round_delay_ms) = cli.round_delay_ms {
        config.round_delay_ms = round_delay_ms;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let _log_guard = logging::init(&config).context("initializing logging")?;

    tracing::info!(version = matchday_core::VERSION, "matchday starting");

    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(config, cli.seed);
    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = app
            .tick_rate()
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key)?;
            }
        }

        if last_tick.elapsed() >= app.tick_rate() {
            app.on_tick()?;
            last_tick = Instant::now();
        }
    }
    Ok(())
}
