use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Unknown block '{name}'")]
    UnknownBlock { name: String },

    #[error("All {capacity} worker ids are taken")]
    IdSpaceExhausted { capacity: usize },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Local time {date} {time} does not exist in {zone}")]
    NonexistentLocalTime {
        date: chrono::NaiveDate,
        time: chrono::NaiveTime,
        zone: String,
    },

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GenError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput { reason: reason.into() }
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig { reason: reason.into() }
    }
}

pub type GenResult<T> = Result<T, GenError>;
