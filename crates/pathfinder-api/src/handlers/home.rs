//! Menu pages

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Extension,
};
use serde_json::json;
use tracing::error;

use pathfinder_core::AuthContext;

use crate::error::status_for;
use crate::state::AppState;

/// GET / - root level of the menu
pub async fn index(State(state): State<AppState>, Extension(ctx): Extension<AuthContext>) -> Response {
    match state.menu_service.full_tree(&ctx).await {
        Ok(menu_tree) => state.page("index", ctx.user.as_ref(), json!({ "menu_tree": menu_tree })),
        Err(e) => {
            error!("Failed to build menu: {}", e);
            state.error_page(status_for(&e), &e.to_string())
        }
    }
}

/// GET /submenu/{id} - children of one submenu; unknown ids render empty
pub async fn submenu(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<String>,
) -> Response {
    match state.menu_service.subtree(&ctx, &id).await {
        Ok(subtree) => state.page(
            "submenu",
            ctx.user.as_ref(),
            json!({ "menu_tree": subtree.children, "parent_item": subtree.parent }),
        ),
        Err(e) => {
            error!("Failed to build submenu {}: {}", id, e);
            state.error_page(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}
