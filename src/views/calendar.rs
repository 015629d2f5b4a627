use crate::{config::Config, planner::Planner, types::DateKey};
use chrono::{Datelike, NaiveDate, Weekday};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Seven three-column cells.
pub(crate) const GRID_WIDTH: u16 = 21;

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const TASK_MARKER: &str = "•";

/// The month containing the selected date.
pub(crate) struct MonthGrid<'a> {
    planner: &'a Planner,
    week_start: Weekday,
    mark_tasks: bool,
    accent: Color,
}

impl<'a> MonthGrid<'a> {
    pub(crate) fn new(planner: &'a Planner, config: &Config) -> Self {
        MonthGrid {
            planner,
            week_start: config.week_start.into(),
            mark_tasks: config.mark_days_with_tasks,
            accent: config.accent_color(),
        }
    }

    fn header(&self) -> Line<'static> {
        let start = self.week_start.num_days_from_sunday() as usize;
        let names: Vec<&str> = (0..7).map(|i| WEEKDAYS[(start + i) % 7]).collect();
        Line::from(names.join(" "))
    }

    fn day_style(&self, key: &DateKey) -> Style {
        let mut style = Style::default();
        if *key == self.planner.today() {
            style = style.fg(self.accent).add_modifier(Modifier::BOLD);
        }
        if self.mark_tasks && self.planner.has_tasks(key) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if *key == self.planner.selected() {
            style = style.fg(Color::Black).bg(self.accent);
        }
        style
    }

    fn first_of_month(&self) -> NaiveDate {
        let selected = self.planner.selected().date();
        selected.with_day(1).unwrap_or(selected)
    }

    /// Blank cells before the first of the month.
    fn lead(&self, first: NaiveDate) -> u32 {
        (first.weekday().num_days_from_sunday() + 7 - self.week_start.num_days_from_sunday()) % 7
    }

    /// Maps a terminal cell inside `area` to the day drawn there, reported the
    /// way a calendar widget does: `(year, month index from zero, day)`.
    pub(crate) fn day_at(&self, area: Rect, column: u16, row: u16) -> Option<(i32, u32, u32)> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        // Title and weekday header come first.
        let first_week_row = inner.y + 2;
        if column < inner.x
            || column >= inner.right()
            || row < first_week_row
            || row >= inner.bottom()
        {
            return None;
        }
        let col = u32::from((column - inner.x) / 3);
        if col >= 7 {
            return None;
        }
        let first = self.first_of_month();
        let index = u32::from(row - first_week_row) * 7 + col;
        let lead = self.lead(first);
        if index < lead {
            return None;
        }
        let day = index - lead + 1;
        NaiveDate::from_ymd_opt(first.year(), first.month(), day)?;
        Some((first.year(), first.month0(), day))
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let first = self.first_of_month();
        let (year, month) = (first.year(), first.month());
        let lead = self.lead(first);

        let title = first.format("%B %Y").to_string();
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{title:^21}"),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            self.header(),
        ];

        let mut spans = vec![Span::raw("   "); lead as usize];
        let mut col = lead;
        for day in 1..=31 {
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                break;
            };
            let key = DateKey::new(date);
            let marker = if self.mark_tasks && self.planner.has_tasks(&key) {
                TASK_MARKER
            } else {
                " "
            };
            spans.push(Span::styled(format!("{day:>2}"), self.day_style(&key)));
            spans.push(Span::raw(marker));
            col += 1;
            if col == 7 {
                lines.push(Line::from(std::mem::take(&mut spans)));
                col = 0;
            }
        }
        if !spans.is_empty() {
            lines.push(Line::from(spans));
        }
        lines
    }
}

impl Widget for MonthGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .block(Block::default().title("calendar").borders(Borders::ALL))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeekStart;

    fn text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    fn planner(y: i32, m: u32, d: u32) -> Planner {
        Planner::new(DateKey::from_ymd(y, m, d).unwrap())
    }

    #[test]
    fn sunday_first_layout() {
        // 2024-01-01 is a Monday.
        let planner = planner(2024, 1, 5);
        let grid = MonthGrid::new(&planner, &Config::default());
        let lines = text(&grid.lines());
        assert_eq!(lines[0].trim(), "January 2024");
        assert_eq!(lines[1], "Su Mo Tu We Th Fr Sa");
        assert!(lines[2].starts_with("    1  2  3"));
        assert!(lines.last().unwrap().contains("28 29 30 31"));
    }

    #[test]
    fn monday_first_layout() {
        let planner = planner(2024, 1, 5);
        let config = Config {
            week_start: WeekStart::Monday,
            ..Config::default()
        };
        let lines = text(&MonthGrid::new(&planner, &config).lines());
        assert_eq!(lines[1], "Mo Tu We Th Fr Sa Su");
        assert!(lines[2].starts_with(" 1  2  3"));
    }

    #[test]
    fn marks_days_with_tasks() {
        let mut planner = planner(2024, 1, 5);
        planner.add_to_selected("Buy milk");
        let lines = text(&MonthGrid::new(&planner, &Config::default()).lines());
        assert!(lines.iter().any(|l| l.contains(" 5•")));

        let config = Config {
            mark_days_with_tasks: false,
            ..Config::default()
        };
        let lines = text(&MonthGrid::new(&planner, &config).lines());
        assert!(!lines.iter().any(|l| l.contains(TASK_MARKER)));
    }

    #[test]
    fn clicks_map_to_widget_fields() {
        let planner = planner(2024, 1, 5);
        let grid = MonthGrid::new(&planner, &Config::default());
        let area = Rect::new(0, 0, GRID_WIDTH + 2, 10);
        // Borders take the first column and row, then title and header.
        assert_eq!(grid.day_at(area, 16, 3), Some((2024, 0, 5)));
        assert_eq!(grid.day_at(area, 17, 3), Some((2024, 0, 5)));
        assert_eq!(grid.day_at(area, 4, 3), Some((2024, 0, 1)));
        assert_eq!(grid.day_at(area, 10, 7), Some((2024, 0, 31)));
        assert_eq!(grid.day_at(area, 1, 3), None);
        assert_eq!(grid.day_at(area, 13, 7), None);
        assert_eq!(grid.day_at(area, 4, 2), None);
        assert_eq!(grid.day_at(area, 0, 3), None);
    }

    #[test]
    fn selected_day_is_highlighted() {
        let mut planner = planner(2024, 1, 5);
        planner.on_date_changed(2024, 0, 9).unwrap();
        let grid = MonthGrid::new(&planner, &Config::default());
        let selected = DateKey::from_ymd(2024, 1, 9).unwrap();
        assert_eq!(grid.day_style(&selected).bg, Some(Color::Cyan));
        let today = planner.today();
        assert!(grid
            .day_style(&today)
            .add_modifier
            .contains(Modifier::BOLD));
    }
}
