use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use tui_textarea::{CursorMove, Input, TextArea};

const PLACEHOLDER: &str = "Press : to enter a command...";

/// Single-line command editor shown under the home view.
pub(crate) struct CommandBar {
    editor: TextArea<'static>,
    focused: bool,
}

impl Default for CommandBar {
    fn default() -> Self {
        let mut editor = TextArea::default();
        editor.set_cursor_line_style(Style::default());
        editor.set_placeholder_text(PLACEHOLDER);
        editor.set_style(Style::default().fg(Color::White));
        let mut bar = CommandBar {
            editor,
            focused: false,
        };
        bar.set_focused(false);
        bar
    }
}

impl CommandBar {
    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let cursor = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.editor.set_cursor_style(cursor);
        self.editor.set_block(
            Block::default()
                .title("command")
                .borders(Borders::ALL)
                .border_style(border),
        );
    }

    pub(crate) fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn input(&mut self, input: Input) -> bool {
        self.editor.input(input)
    }

    /// Shown while the line is empty.
    pub(crate) fn set_message(&mut self, message: impl Into<String>) {
        self.editor.set_placeholder_text(message);
    }

    pub(crate) fn reset_message(&mut self) {
        self.set_message(PLACEHOLDER);
    }

    /// Returns the typed line and clears the editor.
    pub(crate) fn take(&mut self) -> String {
        let line = self.editor.lines().first().cloned().unwrap_or_default();
        self.clear();
        line
    }

    pub(crate) fn clear(&mut self) {
        self.editor.move_cursor(CursorMove::End);
        self.editor.delete_line_by_head();
    }

    #[cfg(test)]
    pub(crate) fn text(&self) -> &str {
        self.editor.lines().first().map(String::as_str).unwrap_or("")
    }
}

impl Widget for &CommandBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self.editor).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_textarea::Key;

    fn type_str(bar: &mut CommandBar, s: &str) {
        for c in s.chars() {
            bar.input(Input {
                key: Key::Char(c),
                ..Default::default()
            });
        }
    }

    #[test]
    fn take_returns_line_and_clears() {
        let mut bar = CommandBar::default();
        type_str(&mut bar, "add milk");
        assert_eq!(bar.text(), "add milk");
        assert_eq!(bar.take(), "add milk");
        assert_eq!(bar.text(), "");
    }

    #[test]
    fn clear_works_with_cursor_mid_line() {
        let mut bar = CommandBar::default();
        type_str(&mut bar, "today");
        bar.input(Input {
            key: Key::Left,
            ..Default::default()
        });
        bar.clear();
        assert_eq!(bar.text(), "");
    }

    #[test]
    fn focus_toggles() {
        let mut bar = CommandBar::default();
        assert!(!bar.is_focused());
        bar.set_focused(true);
        assert!(bar.is_focused());
    }
}
