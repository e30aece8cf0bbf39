use thiserror::Error;

/// Failures of the on-device key-value store.
#[derive(Debug, Error)]
pub(crate) enum StoreError {
    /// The stored value is not valid JSON, or not an array of joke records.
    #[error("stored value could not be decoded: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The host storage rejected a read or write (quota, I/O, security).
    #[error("storage operation failed: {0}")]
    Persistence(String),

    /// No storage backend is reachable (no window, storage disabled).
    #[error("storage is unavailable")]
    Unavailable,
}

pub(crate) type StoreResult<T> = Result<T, StoreError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    pub(crate) fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    pub(crate) fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;
