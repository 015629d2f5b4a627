use crate::{
    config::Config,
    entry::{EntryForm, EntryOutcome},
    error::Result,
    planner::EntryRequest,
};
use log::debug;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::{Input, Key, TextArea};

/// Full-screen prompt for one line of event text.
pub(crate) struct EntryView {
    request: EntryRequest,
    form: EntryForm,
    editor: TextArea<'static>,
}

impl EntryView {
    pub(crate) fn new(request: EntryRequest, config: &Config) -> Self {
        let mut editor = TextArea::default();
        editor.set_cursor_line_style(Style::default());
        editor.set_placeholder_text("Describe the event...");
        editor.set_block(
            Block::default()
                .title(format!("New event for {}", request.date))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.accent_color())),
        );
        EntryView {
            request,
            form: EntryForm::new(),
            editor,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(frame.area());
        frame.render_widget(&self.editor, rows[0]);
        frame.render_widget(
            Paragraph::new("Enter save  Esc cancel").style(Style::default().fg(Color::DarkGray)),
            rows[1],
        );
    }

    /// Returns `true` once the form has closed.
    pub(crate) fn handle_input(&mut self, input: Input) -> bool {
        match input {
            Input {
                key: Key::Enter, ..
            } => {
                let text = self.editor.lines().first().cloned().unwrap_or_default();
                if !self.form.save(&text) {
                    debug!("Ignoring blank entry for {}", self.request.date);
                }
            }
            Input { key: Key::Esc, .. } => self.form.cancel(),
            Input {
                key: Key::Char('m'),
                ctrl: true,
                ..
            } => {}
            input => {
                self.editor.input(input);
            }
        }
        !self.form.is_open()
    }

    /// An entry screen closed by any other means counts as cancelled.
    pub(crate) fn into_outcome(self) -> EntryOutcome {
        self.form.into_outcome().unwrap_or(EntryOutcome::Cancelled)
    }
}

pub(crate) fn render_entry<B>(
    term: &mut Terminal<B>,
    request: EntryRequest,
    config: &Config,
) -> Result<EntryOutcome>
where
    B: Backend,
{
    let mut view = EntryView::new(request, config);
    loop {
        term.draw(|frame| view.draw(frame))?;
        if view.handle_input(crossterm::event::read()?.into()) {
            return Ok(view.into_outcome());
        }
    }
}
