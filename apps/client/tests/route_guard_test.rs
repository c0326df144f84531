//! Navigation guard decisions across session states.

use std::sync::Arc;

use client::{guard, GuardDecision, MemoryTokenStore, Session, TokenStore, TOKEN_KEY};
use client_test_support::token::{token_with_raw_payload, unsigned_token};
use serde_json::json;

fn init() {
    client_test_support::logging::init();
}

fn anonymous() -> Session {
    Session::new(Arc::new(MemoryTokenStore::new()))
}

fn session_with_token(token: &str) -> Session {
    let store = Arc::new(MemoryTokenStore::new());
    store.set(TOKEN_KEY, token).unwrap();
    Session::new(store)
}

#[test]
fn anonymous_navigation() {
    init();
    let session = anonymous();

    assert_eq!(guard("/", &session), GuardDecision::Allow);
    assert_eq!(guard("/filme/42", &session), GuardDecision::Allow);
    assert_eq!(guard("/login", &session), GuardDecision::Allow);
    assert_eq!(guard("/favoritos", &session), GuardDecision::RedirectToLogin);
    assert_eq!(
        guard("/admin/filmes", &session),
        GuardDecision::RedirectToLogin
    );
    assert_eq!(guard("/nao-existe", &session), GuardDecision::NotFound);
}

#[test]
fn regular_user_navigation() {
    init();
    let session = session_with_token(&unsigned_token(&json!({
        "sub": "alice",
        "roles": ["USER"],
    })));

    assert_eq!(guard("/favoritos", &session), GuardDecision::Allow);
    assert_eq!(guard("/admin/filmes", &session), GuardDecision::Forbidden);
}

#[test]
fn admin_navigation() {
    init();
    let session = session_with_token(&unsigned_token(&json!({
        "sub": "root",
        "authorities": ["ROLE_ADMIN"],
    })));

    assert_eq!(guard("/favoritos", &session), GuardDecision::Allow);
    assert_eq!(guard("/admin/filmes", &session), GuardDecision::Allow);
}

#[test]
fn corrupt_token_still_counts_as_a_session_but_never_as_admin() {
    init();
    // has_session only checks presence, so authenticated routes open;
    // privilege decodes and fails closed, so admin routes do not.
    let session = session_with_token(&token_with_raw_payload("%%%"));

    assert_eq!(guard("/favoritos", &session), GuardDecision::Allow);
    assert_eq!(guard("/admin/filmes", &session), GuardDecision::Forbidden);
}
