/// What the entry screen hands back to the main screen when it closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EntryOutcome {
    Saved(String),
    Cancelled,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum EntryState {
    Open,
    Closed(EntryOutcome),
}

/// Trims `text` and keeps it only if something is left.
pub(crate) fn accept_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Captures a single line of free text.
#[derive(Debug)]
pub(crate) struct EntryForm {
    state: EntryState,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            state: EntryState::Open,
        }
    }
}

impl EntryForm {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Closes the form with the trimmed text. Blank input leaves it open.
    pub(crate) fn save(&mut self, text: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        match accept_text(text) {
            Some(event) => {
                self.state = EntryState::Closed(EntryOutcome::Saved(event));
                true
            }
            None => false,
        }
    }

    pub(crate) fn cancel(&mut self) {
        if self.is_open() {
            self.state = EntryState::Closed(EntryOutcome::Cancelled);
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state == EntryState::Open
    }

    /// `None` while the form is still open.
    pub(crate) fn into_outcome(self) -> Option<EntryOutcome> {
        match self.state {
            EntryState::Open => None,
            EntryState::Closed(outcome) => Some(outcome),
        }
    }
}
