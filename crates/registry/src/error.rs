use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Package identifier is empty")]
    EmptyIdentifier,

    #[error("Registry response has no package entry for {0}")]
    MissingPackage(String),

    #[error("No README provider recognizes {0}")]
    UnsupportedHost(String),

    #[error("Cannot extract a project path from {0}")]
    InvalidRepositoryUrl(String),

    #[error("{0}")]
    Other(String),
}
