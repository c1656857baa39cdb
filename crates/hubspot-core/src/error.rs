use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

/// Failure to turn a registry entry into a stream instance.
///
/// `UnknownKey` and `Unresolved` entries are skipped by discovery, `Construction` failures abort it.
#[derive(Error, Debug)]
pub enum StreamBuildError {
    #[error("Stream '{key}' is not in the registry")]
    UnknownKey { key: String },

    #[error("Stream implementation '{implementation}' for '{key}' is not registered")]
    Unresolved { key: String, implementation: String },

    #[error("Error instantiating stream '{implementation}' for '{key}': {source}")]
    Construction {
        key: String,
        implementation: String,
        #[source]
        source: Error,
    },
}

impl StreamBuildError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, StreamBuildError::Construction { .. })
    }

    pub fn key(&self) -> &str {
        match self {
            StreamBuildError::UnknownKey { key } => key,
            StreamBuildError::Unresolved { key, .. } => key,
            StreamBuildError::Construction { key, .. } => key,
        }
    }
}
