//! Session claims interpreter.
//!
//! Derives session state from the persisted token alone, without contacting
//! the network. Every query re-reads storage and re-decodes the payload.
//! A malformed token is never an error to callers: each query degrades to
//! its fail-closed default and logs one diagnostic.

use std::sync::Arc;

use crate::auth::claims::{decode_payload, TokenClaims};
use crate::storage::{TokenStore, TOKEN_KEY};

/// Read-only view over the persisted session token.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Decode the stored token's claims, logging at most one diagnostic.
    fn claims(&self) -> Option<TokenClaims> {
        let token = self.token()?;
        match decode_payload(&token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                tracing::warn!(error = %e, "failed to decode session token");
                None
            }
        }
    }

    /// True iff a non-empty token is present in storage. Never decodes.
    pub fn has_session(&self) -> bool {
        self.token().is_some()
    }

    /// Alias of [`has_session`](Self::has_session).
    pub fn is_authenticated(&self) -> bool {
        self.has_session()
    }

    /// Identity of the current session: `sub` if present and non-empty,
    /// else `username`, else `None`. Decode failures read as `None`.
    pub fn current_identity(&self) -> Option<String> {
        let claims = self.claims()?;
        claims
            .get_str("sub")
            .filter(|s| !s.is_empty())
            .or_else(|| claims.get_str("username").filter(|s| !s.is_empty()))
            .map(str::to_string)
    }

    /// True iff the session's claims carry an admin marker.
    ///
    /// Fail-closed: an absent or undecodable token is never privileged.
    pub fn is_privileged(&self) -> bool {
        match self.claims() {
            Some(claims) => claims.role_markers().grants_admin(),
            None => false,
        }
    }

    /// True iff the current identity equals `candidate` exactly.
    pub fn is_same_identity(&self, candidate: &str) -> bool {
        self.current_identity().as_deref() == Some(candidate)
    }

    /// `Authorization` header value for outgoing requests, if a token is
    /// present. Pure formatting, no decoding.
    pub fn authorization_header_value(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {token}"))
    }

    /// Log the role/authority shape carried by the current token.
    ///
    /// Debugging aid only; nothing downstream consumes the result, and
    /// decode failures are logged rather than surfaced.
    pub fn inspect_and_log(&self) {
        let Some(token) = self.token() else {
            tracing::debug!("no session token in storage");
            return;
        };
        match decode_payload(&token) {
            Ok(claims) => {
                tracing::debug!(markers = ?claims.role_markers(), "session token decoded");
            }
            Err(e) => {
                tracing::warn!(error = %e, "session token could not be inspected");
            }
        }
    }
}
