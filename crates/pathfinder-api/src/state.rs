use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::{json, Value};
use tracing::error;

use pathfinder_core::services::{AuthService, MenuService};
use pathfinder_core::AuthUser;
use pathfinder_shared::config::AppConfig;

use crate::views::Views;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub menu_service: Arc<MenuService>,
    pub auth_service: Arc<AuthService>,
    pub views: Arc<Views>,
}

impl AppState {
    /// Renders a page; a template failure becomes the error page.
    pub fn page(&self, template: &str, user: Option<&AuthUser>, data: Value) -> Response {
        match self.views.render(template, &self.config, user, data) {
            Ok(html) => html.into_response(),
            Err(e) => {
                error!("Failed to render {}: {}", template, e);
                self.error_page(StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page")
            }
        }
    }

    pub fn error_page(&self, status: StatusCode, message: &str) -> Response {
        match self.views.render("error", &self.config, None, json!({ "error": message })) {
            Ok(html) => (status, html).into_response(),
            Err(e) => {
                error!("Failed to render error page: {}", e);
                (status, Html(format!("<h1>Error</h1><p>{}</p>", status))).into_response()
            }
        }
    }
}
