//! Session-state derivation from the persisted bearer token.

pub mod claims;
pub mod session;
