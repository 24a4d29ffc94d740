use thiserror::Error;

/// Result type for miner operations
pub type Result<T> = std::result::Result<T, MinerError>;

/// Errors that can occur while loading mining data
#[derive(Error, Debug)]
pub enum MinerError {
    /// The embedded fallback table is not valid TOML
    #[error("Invalid fallback table: {0}")]
    FallbackTable(#[from] toml::de::Error),

    /// The fallback table lists the same package twice
    #[error("Duplicate fallback entry: {0}")]
    DuplicateEntry(String),
}
