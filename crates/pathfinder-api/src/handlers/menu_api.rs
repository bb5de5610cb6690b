//! JSON menu endpoints

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use pathfinder_core::{AuthContext, MenuNode, Subtree};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/menu
pub async fn full_tree(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
) -> Result<Json<ApiResponse<Vec<MenuNode>>>, ApiError> {
    let tree = state.menu_service.full_tree(&ctx).await?;
    Ok(Json(ApiResponse::success(tree)))
}

/// GET /api/menu/{id}
pub async fn subtree(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Subtree>>, ApiError> {
    let subtree = state.menu_service.subtree(&ctx, &id).await?;
    Ok(Json(ApiResponse::success(subtree)))
}
