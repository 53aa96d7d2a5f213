use thiserror::Error;

pub type StorefrontResult<T> = Result<T, StorefrontError>;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown ad tier: {0}")]
    UnknownTier(String),

    #[error("Unknown category key: {0}")]
    UnknownCategory(String),

    #[error("Unknown ad slot: {0}")]
    UnknownSlot(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
