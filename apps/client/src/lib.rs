#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Client-side library for the movie catalog web application: session
//! claims interpretation, token storage, a thin REST client for
//! user-related actions, route definitions, and the movie data shapes.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod storage;

// Re-exports for public API
pub use api::users::{is_favorite, UserApi};
pub use auth::claims::{decode_payload, ClaimsError, TokenClaims};
pub use auth::session::Session;
pub use config::Config;
pub use error::AppError;
pub use models::movie::{Genre, Movie, MovieForm};
pub use models::user::{FavoriteMovie, Review};
pub use routes::{find_route, guard, Access, GuardDecision, Route, ROUTES};
pub use storage::file::FileTokenStore;
pub use storage::memory::MemoryTokenStore;
pub use storage::{TokenStore, TOKEN_KEY};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    client_test_support::logging::init();
}
