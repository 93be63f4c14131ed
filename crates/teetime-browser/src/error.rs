use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("CDP error: {0}")]
    Cdp(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] teetime_core::Error),

    #[error("No tee times fetched yet - fetch available times first")]
    NotFetched,

    #[error("No target time set - set a target time before booking")]
    NoTarget,

    #[error("Element '{selector}' did not appear within {timeout_ms} ms")]
    Timeout { selector: String, timeout_ms: u128 },

    #[error("Element not found: {0}")]
    ElementNotFound(String),
}

impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
