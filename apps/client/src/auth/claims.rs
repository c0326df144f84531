//! Unverified decoding of a bearer token's claims payload.
//!
//! The client never checks the token's signature: the backend does that on
//! every authenticated request. Here the token is only an opaque bag of
//! claims consulted for routing and rendering decisions.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde_json::{Map, Value};
use thiserror::Error;

/// Role markers that grant administrative privilege.
pub const ADMIN_MARKERS: [&str; 2] = ["ADMIN", "ROLE_ADMIN"];

/// Why a token's payload segment could not be decoded.
#[derive(Error, Debug)]
pub enum ClaimsError {
    #[error("token does not have three dot-separated segments")]
    MalformedToken,
    #[error("payload segment is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// Decoded claims from a token payload.
///
/// Accessors tolerate any payload shape: a missing key or a value of the
/// wrong type reads as `None`, never as an error.
#[derive(Debug, Clone)]
pub struct TokenClaims(Map<String, Value>);

impl TokenClaims {
    /// String claim, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Array claim, if present and an array. Presence of the key as an
    /// array is significant on its own (see `role_markers`), so the raw
    /// elements are returned rather than a filtered string list.
    pub fn get_array(&self, key: &str) -> Option<&Vec<Value>> {
        self.0.get(key).and_then(Value::as_array)
    }

    /// The role/authority shape carried by this payload, used for both
    /// privilege checks and diagnostics.
    ///
    /// Checks `authorities`, then `roles`, then `role`, and stops at the
    /// first key that is present and well-typed — later keys are never
    /// consulted even when the earlier one is empty or non-matching. Tokens
    /// from different issuers carry different role formats, and mixing them
    /// within one token is not supported.
    pub fn role_markers(&self) -> RoleMarkers<'_> {
        if let Some(authorities) = self.get_array("authorities") {
            return RoleMarkers::Authorities(authorities);
        }
        if let Some(roles) = self.get_array("roles") {
            return RoleMarkers::Roles(roles);
        }
        if let Some(role) = self.get_str("role") {
            return RoleMarkers::Role(role);
        }
        RoleMarkers::None
    }
}

/// Privilege-bearing claim shape found in a payload.
#[derive(Debug, Clone, Copy)]
pub enum RoleMarkers<'a> {
    Authorities(&'a [Value]),
    Roles(&'a [Value]),
    Role(&'a str),
    None,
}

impl RoleMarkers<'_> {
    /// True iff the markers grant administrative privilege.
    pub fn grants_admin(&self) -> bool {
        match self {
            RoleMarkers::Authorities(values) | RoleMarkers::Roles(values) => values
                .iter()
                .filter_map(Value::as_str)
                .any(|role| ADMIN_MARKERS.contains(&role)),
            RoleMarkers::Role(role) => ADMIN_MARKERS.contains(role),
            RoleMarkers::None => false,
        }
    }
}

/// Decode the payload segment of a three-segment bearer token.
///
/// Claims are reconstructed fresh on every call; nothing is cached.
pub fn decode_payload(token: &str) -> Result<TokenClaims, ClaimsError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(ClaimsError::MalformedToken);
    };

    // JWT payloads are base64url without padding; tokens minted by
    // btoa-style issuers use the standard alphabet instead.
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD.decode(payload))?;

    let value: Value = serde_json::from_slice(&bytes)?;
    match value {
        Value::Object(map) => Ok(TokenClaims(map)),
        _ => Err(ClaimsError::NotAnObject),
    }
}
