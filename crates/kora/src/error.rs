use thiserror::Error;

/// Errors returned by kora session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KoraError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid currency: {0}")]
    InvalidCurrency(String),
}
