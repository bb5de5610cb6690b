//! Health check handler

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": state.config.branding.title(),
        "auth_enabled": state.config.auth.enabled,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
