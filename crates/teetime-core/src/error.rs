use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid time format: '{0}' (expected a 12-hour time like '9:00 AM')")]
    Format(String),

    #[error("No available tee time at or after {target}")]
    NoCandidate { target: String },

    #[error("Unknown selection policy: '{0}' (supported: after)")]
    UnknownPolicy(String),

    #[error("Invalid slot payload: {0}")]
    Payload(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
