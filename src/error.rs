use std::io::Error as IOError;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("Could not access configuration: {0}")]
    Config(#[from] xdg::BaseDirectoriesError),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid date {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] IOError),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_display() {
        let e = Error::InvalidDate {
            year: 2023,
            month: 2,
            day: 30,
        };
        assert_eq!(e.to_string(), "Invalid date 2023-2-30");
    }

    #[test]
    fn io_error_converts() {
        let e: Error = IOError::new(std::io::ErrorKind::Other, "boom").into();
        assert!(matches!(e, Error::Io(_)));
        assert_eq!(e.to_string(), "I/O error: boom");
    }
}
