//! Wire data shapes exchanged with the catalog backend.

pub mod movie;
pub mod user;
