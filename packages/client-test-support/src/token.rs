//! Fabrication of unsigned bearer tokens for tests.
//!
//! The client never verifies signatures, so tests only need tokens whose
//! payload segment decodes to the desired claims. These helpers produce
//! three-segment `header.payload.signature` strings with a throwaway header
//! and signature.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;

/// Build an unsigned token whose payload segment encodes `payload`.
pub fn unsigned_token(payload: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.sig")
}

/// Build a token whose payload segment is `raw`, verbatim.
///
/// Useful for fixtures with invalid base64 or non-JSON payloads.
pub fn token_with_raw_payload(raw: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    format!("{header}.{raw}.sig")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unsigned_token_has_three_segments() {
        let token = unsigned_token(&json!({"sub": "alice"}));
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn payload_segment_round_trips() {
        let payload = json!({"sub": "alice", "roles": ["ADMIN"]});
        let token = unsigned_token(&payload);
        let segment = token.split('.').nth(1).unwrap();
        let bytes = URL_SAFE_NO_PAD.decode(segment).unwrap();
        let decoded: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, payload);
    }
}
