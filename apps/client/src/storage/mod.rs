//! Process-wide key-value storage for the bearer token.
//!
//! The session interpreter only ever reads the `"token"` slot; writing and
//! clearing it belongs to the authentication flow (login/logout), which this
//! crate treats as an external collaborator.

pub mod file;
pub mod memory;

use crate::error::AppError;

/// Storage key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "token";

/// Read/write access to persisted key-value storage.
///
/// `get` is infallible by contract: implementations that can fail internally
/// (e.g. an unreadable backing file) must degrade to `None` and log, so that
/// session queries stay fail-closed rather than error-propagating.
pub trait TokenStore: Send + Sync {
    /// Read a value. Empty stored values are reported as absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Remove a value if present.
    fn clear(&self, key: &str) -> Result<(), AppError>;
}
