use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Roster too small: need {needed} players for two teams, found {found}")]
    RosterTooSmall { needed: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, SimError>;
