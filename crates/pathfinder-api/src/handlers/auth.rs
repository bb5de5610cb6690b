// ============================================================================
// Pathfinder API - Auth Handlers
// File: crates/pathfinder-api/src/handlers/auth.rs
// ============================================================================
//! Login, registration and logout pages, delegated to the auth service

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde_json::json;
use tracing::warn;

use pathfinder_core::services::Credentials;
use pathfinder_core::{DomainError, RegisterOutcome};
use pathfinder_shared::constants::SESSION_COOKIE;

use crate::middleware::auth::session_token;
use crate::state::AppState;

const AWAITING_VERIFICATION: &str =
    "Registration successful! Please wait for admin verification before logging in.";

/// Message shown on the form for a failed auth call.
pub(crate) fn user_message(error: &DomainError, fallback: &str) -> String {
    match error {
        DomainError::InvalidCredentials => "Invalid credentials".to_string(),
        DomainError::AuthRejected(msg) | DomainError::ValidationError(msg) => msg.clone(),
        _ => fallback.to_string(),
    }
}

/// Redirect that forwards the auth service's session cookie to the browser.
pub(crate) fn redirect_with_cookie(to: &str, cookie: Option<String>) -> Response {
    let mut response = Redirect::to(to).into_response();
    if let Some(cookie) = cookie {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => warn!("Dropping unusable session cookie: {}", e),
        }
    }
    response
}

/// Redirect that expires the session cookie.
pub(crate) fn redirect_clearing_session(to: &str) -> Response {
    let expired = format!("{}=; Path=/; Max-Age=0; HttpOnly", SESSION_COOKIE);
    redirect_with_cookie(to, Some(expired))
}

fn auth_form(state: &AppState, template: &str, error: Option<String>, message: Option<&str>) -> Response {
    state.page(template, None, json!({ "error": error, "message": message }))
}

/// GET /login
pub async fn login_page(State(state): State<AppState>) -> Response {
    if !state.config.auth.enabled {
        return Redirect::to("/").into_response();
    }
    auth_form(&state, "login", None, None)
}

/// POST /login
pub async fn login(State(state): State<AppState>, Form(credentials): Form<Credentials>) -> Response {
    if !state.config.auth.enabled {
        return Redirect::to("/").into_response();
    }
    match state.auth_service.login(&credentials).await {
        Ok(outcome) => redirect_with_cookie("/", outcome.session_cookie),
        Err(e) => auth_form(&state, "login", Some(user_message(&e, "Login failed")), None),
    }
}

/// GET /register
pub async fn register_page(State(state): State<AppState>) -> Response {
    if !state.config.auth.enabled {
        return Redirect::to("/").into_response();
    }
    auth_form(&state, "register", None, None)
}

/// POST /register
pub async fn register(State(state): State<AppState>, Form(credentials): Form<Credentials>) -> Response {
    if !state.config.auth.enabled {
        return Redirect::to("/").into_response();
    }
    match state.auth_service.register(&credentials).await {
        Ok(RegisterOutcome::AwaitingVerification) => {
            auth_form(&state, "login", None, Some(AWAITING_VERIFICATION))
        }
        Ok(RegisterOutcome::SignedIn(outcome)) => redirect_with_cookie("/", outcome.session_cookie),
        Err(e) => auth_form(&state, "register", Some(user_message(&e, "Registration failed")), None),
    }
}

/// POST /logout - remote logout is best effort
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let token = session_token(&headers);
    state.auth_service.logout(token.as_deref()).await;
    redirect_clearing_session("/login")
}
