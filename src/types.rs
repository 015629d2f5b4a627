use std::{collections::BTreeMap, fmt::Display};

use crate::error::{Error, Result};
use chrono::{Datelike, Days, Months, NaiveDate};

/// Years that render as exactly four digits.
const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// A calendar day used to index the task map. Rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct DateKey(NaiveDate);

impl DateKey {
    pub(crate) fn new(date: NaiveDate) -> Self {
        DateKey(date)
    }

    /// Builds a key from a one-based month.
    pub(crate) fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .filter(|d| YEARS.contains(&d.year()))
            .map(DateKey)
            .ok_or(Error::InvalidDate { year, month, day })
    }

    /// Builds a key from the fields a calendar widget reports, where the month
    /// is an index starting at zero.
    pub(crate) fn from_widget(year: i32, month_index: u32, day: u32) -> Result<Self> {
        let month = month_index.checked_add(1).ok_or(Error::InvalidDate {
            year,
            month: month_index,
            day,
        })?;
        Self::from_ymd(year, month, day)
    }

    pub(crate) fn date(&self) -> NaiveDate {
        self.0
    }

    /// Moves by a signed number of days. Stays put when the result would
    /// leave years 0000-9999.
    pub(crate) fn offset_days(self, days: i64) -> Self {
        let moved = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        moved
            .filter(|d| YEARS.contains(&d.year()))
            .map(DateKey)
            .unwrap_or(self)
    }

    /// Moves by a signed number of months, clamping the day to the length of
    /// the target month. Stays put outside years 0000-9999.
    pub(crate) fn offset_months(self, months: i32) -> Self {
        let moved = if months >= 0 {
            self.0.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.0.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        moved
            .filter(|d| YEARS.contains(&d.year()))
            .map(DateKey)
            .unwrap_or(self)
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Entries for a single day, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TaskList(Vec<String>);

impl TaskList {
    pub(crate) const EMPTY: TaskList = TaskList(Vec::new());

    pub(crate) fn push(&mut self, task: String) {
        self.0.push(task);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Every day that has been visited, with its tasks. Entries are only ever
/// added.
#[derive(Debug, Default)]
pub(crate) struct TaskMap {
    days: BTreeMap<DateKey, TaskList>,
}

impl TaskMap {
    /// Returns the list for `key`, creating an empty one on first access.
    pub(crate) fn ensure(&mut self, key: DateKey) -> &mut TaskList {
        self.days.entry(key).or_default()
    }

    pub(crate) fn get(&self, key: &DateKey) -> Option<&TaskList> {
        self.days.get(key)
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, key: &DateKey) -> bool {
        self.days.contains_key(key)
    }

    pub(crate) fn has_tasks(&self, key: &DateKey) -> bool {
        self.days.get(key).is_some_and(|l| !l.is_empty())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.days.len()
    }
}
