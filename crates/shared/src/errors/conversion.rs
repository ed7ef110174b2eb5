use thiserror::Error;

/// Failures while turning a wire request into a domain value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("invalid date format {0}: expected MM-YYYY")]
    DateFormat(String),

    #[error("date is required")]
    DateRequired,

    #[error("subscription cannot be empty")]
    EmptySubscription,

    #[error("invalid id {0}")]
    InvalidId(String),

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
