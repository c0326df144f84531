//! Thin REST client for the catalog backend.

pub mod users;
