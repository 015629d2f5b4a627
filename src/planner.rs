use crate::{
    entry::{accept_text, EntryOutcome},
    error::Result,
    types::{DateKey, TaskList, TaskMap},
};
use log::debug;

/// Issued when the entry screen opens. The result is always applied to the
/// date captured here, whatever is selected by the time it comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EntryRequest {
    pub(crate) date: DateKey,
}

/// Owns the task map and the selected date for the main screen.
#[derive(Debug)]
pub(crate) struct Planner {
    tasks: TaskMap,
    selected: DateKey,
    today: DateKey,
}

impl Planner {
    pub(crate) fn new(today: DateKey) -> Self {
        let mut tasks = TaskMap::default();
        tasks.ensure(today);
        debug!("Planner initialized on {today}");
        Planner {
            tasks,
            selected: today,
            today,
        }
    }

    /// Handles a date reported by the calendar widget (month index starts at
    /// zero).
    pub(crate) fn on_date_changed(&mut self, year: i32, month_index: u32, day: u32) -> Result<()> {
        let key = DateKey::from_widget(year, month_index, day)?;
        self.select(key);
        Ok(())
    }

    pub(crate) fn select(&mut self, key: DateKey) {
        self.tasks.ensure(key);
        self.selected = key;
    }

    pub(crate) fn select_today(&mut self) {
        self.select(self.today);
    }

    pub(crate) fn move_days(&mut self, days: i64) {
        self.select(self.selected.offset_days(days));
    }

    pub(crate) fn move_months(&mut self, months: i32) {
        self.select(self.selected.offset_months(months));
    }

    pub(crate) fn request_entry(&self) -> EntryRequest {
        EntryRequest {
            date: self.selected,
        }
    }

    /// Applies what the entry screen returned. Returns whether a task was
    /// added.
    pub(crate) fn on_entry_result(&mut self, request: EntryRequest, outcome: EntryOutcome) -> bool {
        match outcome {
            EntryOutcome::Saved(text) if !text.is_empty() => {
                debug!("Adding task to {}", request.date);
                self.tasks.ensure(request.date).push(text);
                true
            }
            _ => false,
        }
    }

    /// Appends to the selected date directly, as the inline add command does.
    pub(crate) fn add_to_selected(&mut self, text: &str) -> bool {
        match accept_text(text) {
            Some(task) => {
                self.tasks.ensure(self.selected).push(task);
                true
            }
            None => false,
        }
    }

    pub(crate) fn selected(&self) -> DateKey {
        self.selected
    }

    pub(crate) fn today(&self) -> DateKey {
        self.today
    }

    pub(crate) fn visible_tasks(&self) -> &TaskList {
        // `select` always ensures an entry before the date becomes visible.
        static EMPTY: TaskList = TaskList::EMPTY;
        self.tasks.get(&self.selected).unwrap_or(&EMPTY)
    }

    pub(crate) fn has_tasks(&self, key: &DateKey) -> bool {
        self.tasks.has_tasks(key)
    }

    #[cfg(test)]
    pub(crate) fn tasks(&self) -> &TaskMap {
        &self.tasks
    }
}
