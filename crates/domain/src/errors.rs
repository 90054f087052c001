use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Netblock request for {name} failed: {reason}")]
    NetworkError { name: String, reason: String },

    #[error("Failed to read netblock record for {name}: {reason}")]
    ReadError { name: String, reason: String },

    #[error("Unknown range_type: {0}")]
    UnknownRangeType(String),
}
