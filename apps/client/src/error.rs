use thiserror::Error;

/// Application-level errors surfaced by the API client, configuration
/// loading, and token storage writes.
///
/// Session claim queries never return this type: they degrade to fail-closed
/// defaults instead (see `auth::session`).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("HTTP transport error: {detail}")]
    Http { detail: String },
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },
    #[error("Storage error: {detail}")]
    Storage { detail: String },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn http(detail: impl Into<String>) -> Self {
        Self::Http {
            detail: detail.into(),
        }
    }

    pub fn api(status: u16, detail: impl Into<String>) -> Self {
        Self::Api {
            status,
            detail: detail.into(),
        }
    }

    pub fn storage(detail: impl Into<String>) -> Self {
        Self::Storage {
            detail: detail.into(),
        }
    }

    /// HTTP status of the API response that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => AppError::api(status.as_u16(), e.to_string()),
            None => AppError::http(e.to_string()),
        }
    }
}
