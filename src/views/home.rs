use crate::{
    app::AppState,
    command_widget::CommandBar,
    commands::{parse_home_command, HomeCommand},
    config::Config,
    error::Result,
    planner::Planner,
    types::DateKey,
    views::calendar::{MonthGrid, GRID_WIDTH},
};
use crossterm::event::{self, Event, MouseButton, MouseEvent, MouseEventKind};
use log::{debug, warn};
use ratatui::{
    prelude::*,
    style::Style,
    widgets::{Block, Borders, List, ListState, Paragraph},
    Frame,
};
use tui_textarea::{Input, Key};

const HELP: &str = "h/l day  j/k week  [/] month  t today  n new event  : command  q quit";

/// State of the main screen that outlives a trip to the entry screen.
#[derive(Default)]
pub(crate) struct HomeView {
    command_bar: CommandBar,
    /// Where the month grid was last drawn, for mouse hits.
    calendar_area: Rect,
}

impl HomeView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame, planner: &Planner, config: &Config) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(frame.area());
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GRID_WIDTH + 2), Constraint::Min(10)])
            .split(rows[1]);

        let label = Paragraph::new(format!("Selected Date: {}", planner.selected()))
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(label, rows[0]);
        self.calendar_area = body[0];
        frame.render_widget(MonthGrid::new(planner, config), body[0]);

        let tasks = planner.visible_tasks();
        let list = List::new(tasks.iter().map(str::to_string))
            .block(
                Block::default()
                    .title(format!("tasks ({})", tasks.len()))
                    .borders(Borders::ALL),
            )
            .style(Style::default().fg(Color::White));
        // Keep the newest entries in view.
        let height = body[1].height.saturating_sub(2) as usize;
        let mut state = ListState::default().with_offset(tasks.len().saturating_sub(height));
        frame.render_stateful_widget(list, body[1], &mut state);

        frame.render_widget(&self.command_bar, rows[2]);
        frame.render_widget(
            Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
            rows[3],
        );
    }

    /// Selects the day under a mouse click on the month grid.
    pub(crate) fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        planner: &mut Planner,
        config: &Config,
    ) {
        let hit = MonthGrid::new(planner, config).day_at(self.calendar_area, column, row);
        if let Some((year, month_index, day)) = hit {
            if let Err(e) = planner.on_date_changed(year, month_index, day) {
                warn!("{e}");
            }
        }
    }

    /// Handles one key. Returns the next state when the home view should
    /// hand over control.
    pub(crate) fn handle_input(&mut self, input: Input, planner: &mut Planner) -> Option<AppState> {
        if self.command_bar.is_focused() {
            return self.handle_command_input(input, planner);
        }
        match input {
            Input { key: Key::Esc, .. }
            | Input {
                key: Key::Char('q'),
                ..
            } => return Some(AppState::Exit),
            Input {
                key: Key::Char('h'),
                ..
            }
            | Input { key: Key::Left, .. } => planner.move_days(-1),
            Input {
                key: Key::Char('l'),
                ..
            }
            | Input {
                key: Key::Right, ..
            } => planner.move_days(1),
            Input {
                key: Key::Char('k'),
                ..
            }
            | Input { key: Key::Up, .. } => planner.move_days(-7),
            Input {
                key: Key::Char('j'),
                ..
            }
            | Input { key: Key::Down, .. } => planner.move_days(7),
            Input {
                key: Key::Char('['),
                ..
            } => planner.move_months(-1),
            Input {
                key: Key::Char(']'),
                ..
            } => planner.move_months(1),
            Input {
                key: Key::Char('t'),
                ..
            } => planner.select_today(),
            Input {
                key: Key::Char('n'),
                ..
            }
            | Input {
                key: Key::Enter, ..
            } => return Some(AppState::Entry(planner.request_entry())),
            Input {
                key: Key::Char(':'),
                ..
            } => {
                self.command_bar.reset_message();
                self.command_bar.set_focused(true);
            }
            _ => {}
        }
        None
    }

    fn handle_command_input(&mut self, input: Input, planner: &mut Planner) -> Option<AppState> {
        match input {
            Input { key: Key::Esc, .. } => {
                self.command_bar.clear();
                self.command_bar.reset_message();
                self.command_bar.set_focused(false);
            }
            Input {
                key: Key::Char('q'),
                ctrl: true,
                ..
            } => return Some(AppState::Exit),
            Input {
                key: Key::Enter, ..
            } => {
                let line = self.command_bar.take();
                self.command_bar.set_focused(false);
                match parse_home_command(&line) {
                    Some(command) => return self.run_command(command, planner),
                    None => self.command_bar.set_message("Error parsing command"),
                }
            }
            input => {
                self.command_bar.input(input);
            }
        }
        None
    }

    fn run_command(&mut self, command: HomeCommand, planner: &mut Planner) -> Option<AppState> {
        debug!("Running {command:?}");
        match command {
            HomeCommand::Add(text) => {
                if planner.add_to_selected(&text) {
                    self.command_bar
                        .set_message(format!("Added to {}", planner.selected()));
                } else {
                    self.command_bar.reset_message();
                }
            }
            HomeCommand::New => return Some(AppState::Entry(planner.request_entry())),
            HomeCommand::Goto { year, month, day } => match DateKey::from_ymd(year, month, day) {
                Ok(key) => {
                    planner.select(key);
                    self.command_bar.reset_message();
                }
                Err(e) => {
                    warn!("{e}");
                    self.command_bar.set_message(e.to_string());
                }
            },
            HomeCommand::Today => {
                planner.select_today();
                self.command_bar.reset_message();
            }
            HomeCommand::Quit => return Some(AppState::Exit),
        }
        None
    }
}

pub(crate) fn render_home<B>(
    term: &mut Terminal<B>,
    view: &mut HomeView,
    planner: &mut Planner,
    config: &Config,
) -> Result<AppState>
where
    B: Backend,
{
    loop {
        term.draw(|frame| view.draw(frame, planner, config))?;
        match event::read()? {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => view.handle_click(column, row, planner, config),
            event => {
                if let Some(next) = view.handle_input(event.into(), planner) {
                    return Ok(next);
                }
            }
        }
    }
}
