mod app;
mod command_widget;
mod commands;
mod config;
mod entry;
mod error;
mod planner;
mod types;
mod views;
use crate::error::Result;
use crate::{config::Config, planner::Planner, types::DateKey};
use chrono::Local;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use log::debug;
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};

fn main() -> Result<()> {
    env_logger::init();
    debug!("Loading config...");
    let config = Config::load()?;
    let mut planner = Planner::new(DateKey::new(Local::now().date_naive()));

    in_terminal(
        setup_terminal,
        |mut terminal| app::run(&mut terminal, &mut planner, &config),
        restore_terminal,
    )
}

/// Runs `body` on the terminal from `setup`, then always calls `restore`.
/// The first error wins.
fn in_terminal<T>(
    setup: impl FnOnce() -> Result<T>,
    body: impl FnOnce(T) -> Result<()>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<()> {
    let result = setup().and_then(body);
    let restored = restore();
    result.and(restored)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    Ok(Terminal::new(CrosstermBackend::new(stdout()))?)
}

/// Undoes every step of `setup_terminal`, even after one of them fails.
fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    let mouse = stdout().execute(DisableMouseCapture).map(|_| ());
    let screen = stdout().execute(LeaveAlternateScreen).map(|_| ());
    Ok(raw.and(mouse).and(screen)?)
}
