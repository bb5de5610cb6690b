// ============================================================================
// Pathfinder API - Auth Middleware
// File: crates/pathfinder-api/src/middleware/auth.rs
// ============================================================================
//! Resolves the session cookie into an [`AuthContext`] request extension.
//!
//! Both middlewares always insert an `AuthContext` and a [`SessionToken`]
//! before calling the next handler, so handlers can extract them directly.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use pathfinder_core::AuthContext;
use pathfinder_shared::constants::SESSION_COOKIE;

use crate::state::AppState;

/// Raw session token from the request cookie, forwarded to the auth service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionToken(pub Option<String>);

/// Value of the session cookie, if the request carries a non-empty one.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

fn proceed_with(request: &mut Request, ctx: AuthContext, token: Option<String>) {
    request.extensions_mut().insert(ctx);
    request.extensions_mut().insert(SessionToken(token));
}

/// Pages that render for anonymous visitors too. With auth enabled, a
/// request without a session cookie is sent to the login page; a cookie
/// the auth service does not accept continues anonymously.
pub async fn optional_auth(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    if !state.config.auth.enabled {
        proceed_with(&mut request, AuthContext::disabled(), None);
        return next.run(request).await;
    }

    let Some(token) = session_token(request.headers()) else {
        return Redirect::to("/login").into_response();
    };

    let ctx = match state.auth_service.current_user(&token).await {
        Some(user) => AuthContext::authenticated(user),
        None => {
            debug!("Session not verified; continuing anonymously");
            AuthContext::anonymous()
        }
    };
    proceed_with(&mut request, ctx, Some(token));
    next.run(request).await
}

/// Pages that need a verified session when auth is enabled.
pub async fn require_auth(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    if !state.config.auth.enabled {
        proceed_with(&mut request, AuthContext::disabled(), None);
        return next.run(request).await;
    }

    let Some(token) = session_token(request.headers()) else {
        return Redirect::to("/login").into_response();
    };

    match state.auth_service.current_user(&token).await {
        Some(user) => {
            proceed_with(&mut request, AuthContext::authenticated(user), Some(token));
            next.run(request).await
        }
        None => Redirect::to("/login").into_response(),
    }
}
