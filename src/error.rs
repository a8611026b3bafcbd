use thiserror::Error;

/// Failures surfaced by the wallet workflows. Store mutations themselves never fail.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
    #[error("job title must not be empty")]
    EmptyJobTitle,
    #[error("no collaboration with id {0}")]
    UnknownCollaboration(u64),
    #[error("the wallet store is no longer available")]
    StoreUnavailable,
    #[error("could not copy to clipboard: {0}")]
    Clipboard(String),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("invalid wallet config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(String),
}
