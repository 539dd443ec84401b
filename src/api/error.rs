use thiserror::Error;

use crate::store::StoreError;

/// Failure categories the rest of the client reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkFailure,
    TranslationFailure,
    /// Reserved: the client validates nothing beyond empty input.
    ValidationFailure,
    AuthFailure,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to connect to {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{detail} (HTTP {status})")]
    Http { status: u16, detail: String },

    #[error("Unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Translation failed: {0}")]
    Translation(String),

    #[error("Authentication failed: {0}\n\nRun 'medichat login' to sign in.")]
    Auth(String),

    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Translation(_) => ErrorKind::TranslationFailure,
            Self::Auth(_) => ErrorKind::AuthFailure,
            Self::Network { .. }
            | Self::Http { .. }
            | Self::Decode { .. }
            | Self::Storage(_)
            | Self::Client(_) => ErrorKind::NetworkFailure,
        }
    }
}
