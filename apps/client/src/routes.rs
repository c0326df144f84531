//! Client route table and navigation guards.
//!
//! The paths mirror the shipped web client (Portuguese slugs included).
//! Guards only consult the session interpreter, so an undecodable token
//! flows through as "not authenticated / not privileged" here too.

use crate::auth::session::Session;

/// Access level required to enter a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Admin,
}

/// A client-side route definition.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    /// Path pattern; `:name` segments match any single segment.
    pub path: &'static str,
    /// View name, used by the embedding shell to pick a component.
    pub name: &'static str,
    pub access: Access,
}

/// Every route the client knows.
pub const ROUTES: [Route; 6] = [
    Route {
        path: "/",
        name: "movie-list",
        access: Access::Public,
    },
    Route {
        path: "/filme/:id",
        name: "movie-detail",
        access: Access::Public,
    },
    Route {
        path: "/favoritos",
        name: "favorites",
        access: Access::Authenticated,
    },
    Route {
        path: "/login",
        name: "login",
        access: Access::Public,
    },
    Route {
        path: "/cadastro",
        name: "register",
        access: Access::Public,
    },
    Route {
        path: "/admin/filmes",
        name: "admin-movies",
        access: Access::Admin,
    },
];

/// Outcome of a navigation guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    Forbidden,
    NotFound,
}

/// Find the route matching `path`, if any.
pub fn find_route(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| matches(route.path, path))
}

/// Decide whether the current session may navigate to `path`.
pub fn guard(path: &str, session: &Session) -> GuardDecision {
    let Some(route) = find_route(path) else {
        return GuardDecision::NotFound;
    };

    match route.access {
        Access::Public => GuardDecision::Allow,
        Access::Authenticated => {
            if session.is_authenticated() {
                GuardDecision::Allow
            } else {
                GuardDecision::RedirectToLogin
            }
        }
        Access::Admin => {
            if !session.is_authenticated() {
                GuardDecision::RedirectToLogin
            } else if session.is_privileged() {
                GuardDecision::Allow
            } else {
                GuardDecision::Forbidden
            }
        }
    }
}

/// Segment-wise pattern match; `:name` segments match any non-empty segment.
fn matches(pattern: &str, path: &str) -> bool {
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };

    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(expected), Some(actual)) => {
                if expected.starts_with(':') {
                    if actual.is_empty() {
                        return false;
                    }
                } else if expected != actual {
                    return false;
                }
            }
            _ => return false,
        }
    }
}
