//! Account pages (session required when auth is enabled)

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    Extension, Form,
};
use serde_json::json;
use tracing::error;

use pathfinder_core::services::PasswordChange;
use pathfinder_core::AuthContext;

use crate::handlers::auth::{redirect_clearing_session, user_message};
use crate::middleware::SessionToken;
use crate::state::AppState;

/// GET /account-settings
pub async fn settings_page(State(state): State<AppState>, Extension(ctx): Extension<AuthContext>) -> Response {
    state.page("account-settings", ctx.user.as_ref(), json!({}))
}

/// GET /change-password
pub async fn change_password_page(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
) -> Response {
    state.page("change-password", ctx.user.as_ref(), json!({ "error": null, "success": null }))
}

/// POST /change-password
pub async fn change_password(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Form(change): Form<PasswordChange>,
) -> Response {
    let result = match token.as_deref() {
        Some(token) => state.auth_service.change_password(token, &change).await,
        None => {
            return state.page(
                "change-password",
                ctx.user.as_ref(),
                json!({ "error": "Not signed in", "success": null }),
            )
        }
    };

    let data = match result {
        Ok(()) => json!({ "error": null, "success": "Password changed successfully" }),
        Err(e) => json!({ "error": user_message(&e, "Failed to change password"), "success": null }),
    };
    state.page("change-password", ctx.user.as_ref(), data)
}

/// POST /delete-account
pub async fn delete_account(
    State(state): State<AppState>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> Response {
    let Some(token) = token else {
        return state.error_page(StatusCode::BAD_REQUEST, "Not signed in");
    };

    match state.auth_service.delete_account(&token).await {
        Ok(()) => redirect_clearing_session("/login"),
        Err(e) => {
            error!("Account deletion failed: {}", e);
            state.error_page(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete account")
        }
    }
}
