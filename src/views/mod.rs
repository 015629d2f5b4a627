pub(crate) mod calendar;
pub(crate) mod entry;
pub(crate) mod home;

#[cfg(test)]
pub(crate) mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    /// Flattens the last drawn frame into lines of text.
    pub(crate) fn screen(term: &Terminal<TestBackend>) -> String {
        let buffer = term.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
