use crate::{
    config::Config,
    error::Result,
    planner::{EntryRequest, Planner},
    views::{
        entry::render_entry,
        home::{render_home, HomeView},
    },
};
use log::{debug, info};
use ratatui::{backend::Backend, Terminal};

pub(crate) enum AppState {
    Home,
    /// The entry screen is open; its result belongs to the request's date.
    Entry(EntryRequest),
    Exit,
}

/// Moves between the screens until the user quits.
pub(crate) fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    planner: &mut Planner,
    config: &Config,
) -> Result<()> {
    let mut home = HomeView::new();
    let mut next = AppState::Home;
    loop {
        match next {
            AppState::Home => next = render_home(terminal, &mut home, planner, config)?,
            AppState::Entry(request) => {
                debug!("Opening entry screen for {}", request.date);
                let outcome = render_entry(terminal, request, config)?;
                if planner.on_entry_result(request, outcome) {
                    info!("Added task on {}", request.date);
                }
                next = AppState::Home;
            }
            AppState::Exit => break,
        }
    }
    Ok(())
}
