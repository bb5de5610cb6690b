//! Route table

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers::{account, auth, health, home, menu_api};
use crate::middleware::{optional_auth, require_auth};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let menu_routes = Router::new()
        .route("/", get(home::index))
        .route("/submenu/{id}", get(home::submenu))
        .route("/api/menu", get(menu_api::full_tree))
        .route("/api/menu/{id}", get(menu_api::subtree))
        .route_layer(from_fn_with_state(state.clone(), optional_auth));

    let account_routes = Router::new()
        .route("/account-settings", get(account::settings_page))
        .route(
            "/change-password",
            get(account::change_password_page).post(account::change_password),
        )
        .route("/delete-account", post(account::delete_account))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    let public_routes = Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
        .route("/health", get(health::health_check));

    // Anything unrouted is looked up in the public directory.
    let static_files = ServeDir::new(&state.config.server.public_dir);

    Router::new()
        .merge(menu_routes)
        .merge(account_routes)
        .merge(public_routes)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use pathfinder_core::repositories::{AuthGateway, LinkRepository, StaticMenuSource};
    use pathfinder_core::services::{AuthService, MenuService};
    use pathfinder_core::{
        AuthOutcome, AuthUser, DomainError, LinkRecord, MenuItemConfig, RegisterOutcome,
    };
    use pathfinder_shared::AppConfig;

    use crate::views::Views;

    const NO_AUTH: &str = "[server]\npublic_dir = \"/nonexistent\"\n";
    const WITH_AUTH: &str = r#"
        [server]
        public_dir = "/nonexistent"
        [auth]
        enabled = true
        authServerUrl = "http://auth.test"
        [database]
        url = "postgres://unused"
    "#;

    struct FixedLinks(Result<Vec<LinkRecord>, DomainError>);

    #[async_trait]
    impl LinkRepository for FixedLinks {
        async fn get_visible_links(&self, user_id: Option<i32>) -> Result<Vec<LinkRecord>, DomainError> {
            // Links under 100 are public; user 7 also sees 100.
            self.0.clone().map(|links| {
                links
                    .into_iter()
                    .filter(|l| l.id < 100 || user_id == Some(7))
                    .collect()
            })
        }
    }

    /// Accepts the token "good" as user 7 and the password "pw".
    struct FakeGateway;

    #[async_trait]
    impl AuthGateway for FakeGateway {
        async fn verify(&self, token: &str) -> Result<Option<AuthUser>, DomainError> {
            Ok((token == "good").then(|| AuthUser {
                id: 7,
                email: "ana@example.com".into(),
                is_admin: false,
            }))
        }

        async fn login(&self, _email: &str, password: &str) -> Result<AuthOutcome, DomainError> {
            if password == "pw" {
                Ok(AuthOutcome { session_cookie: Some("token=good; Path=/; HttpOnly".into()) })
            } else {
                Err(DomainError::InvalidCredentials)
            }
        }

        async fn register(&self, _email: &str, _password: &str) -> Result<RegisterOutcome, DomainError> {
            Ok(RegisterOutcome::AwaitingVerification)
        }

        async fn logout(&self, _token: &str) -> Result<(), DomainError> {
            Err(DomainError::AuthServiceUnavailable("down".into()))
        }

        async fn change_password(&self, _token: &str, current: &str, _new: &str) -> Result<(), DomainError> {
            if current == "old" {
                Ok(())
            } else {
                Err(DomainError::AuthRejected("Current password is incorrect".into()))
            }
        }

        async fn delete_account(&self, _token: &str) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn menu_items() -> Vec<MenuItemConfig> {
        vec![
            MenuItemConfig::link("a", "Alpha", Some("http://x")),
            MenuItemConfig::submenu(
                "b",
                "Bravo",
                Some(vec![MenuItemConfig::link("c", "Charlie", Some("http://y"))]),
            ),
        ]
    }

    fn links() -> Vec<LinkRecord> {
        vec![
            LinkRecord::new(1, "Root").as_submenu(),
            LinkRecord::new(2, "Leaf").under(1).with_url("http://z"),
            LinkRecord::new(100, "Private").with_url("http://secret"),
        ]
    }

    fn app_with(config: &str, items: Vec<MenuItemConfig>, links: Result<Vec<LinkRecord>, DomainError>) -> Router {
        let menu_service = MenuService::new(
            Arc::new(StaticMenuSource::new(items)),
            Some(Arc::new(FixedLinks(links))),
        );
        build_router(AppState {
            config: Arc::new(AppConfig::from_toml_str(config).unwrap()),
            menu_service: Arc::new(menu_service),
            auth_service: Arc::new(AuthService::new(Arc::new(FakeGateway))),
            views: Arc::new(Views::new().unwrap()),
        })
    }

    fn no_auth_app() -> Router {
        app_with(NO_AUTH, menu_items(), Ok(Vec::new()))
    }

    fn auth_app() -> Router {
        app_with(WITH_AUTH, Vec::new(), Ok(links()))
    }

    async fn get(app: Router, uri: &str, cookie: Option<&str>) -> Response {
        let mut request = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        app.oneshot(request.body(Body::empty()).unwrap()).await.unwrap()
    }

    async fn post_form(app: Router, uri: &str, body: &str, cookie: Option<&str>) -> Response {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        app.oneshot(request.body(Body::from(body.to_string())).unwrap()).await.unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_home_renders_configured_menu() {
        let response = get(no_auth_app(), "/", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains(r#"href="http://x""#));
        assert!(html.contains(r#"href="/submenu/b""#));
        assert!(!html.contains("Charlie"));
    }

    #[tokio::test]
    async fn test_submenu_page_shows_children() {
        let html = body_text(get(no_auth_app(), "/submenu/b", None).await).await;
        assert!(html.contains("Bravo"));
        assert!(html.contains(r#"href="http://y""#));
    }

    #[tokio::test]
    async fn test_unknown_submenu_renders_empty() {
        let response = get(no_auth_app(), "/submenu/999", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Nothing to show here"));
    }

    #[tokio::test]
    async fn test_malformed_menu_fails_page() {
        let app = app_with(NO_AUTH, vec![MenuItemConfig::link("a", "", None)], Ok(Vec::new()));
        let response = get(app, "/", None).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(response).await.contains("Menu.Item[0]"));
    }

    #[tokio::test]
    async fn test_menu_json_shape() {
        let response = get(no_auth_app(), "/api/menu", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["success"], true);
        let tree = body["data"].as_array().unwrap();
        assert!(tree[0].get("children").is_none());
        assert_eq!(tree[1]["children"][0]["url"], "http://y");
    }

    #[tokio::test]
    async fn test_subtree_json_for_missing_id() {
        let body: Value =
            serde_json::from_str(&body_text(get(no_auth_app(), "/api/menu/999", None).await).await).unwrap();
        assert_eq!(body["data"]["parent"], Value::Null);
        assert_eq!(body["data"]["children"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_auth_without_cookie_redirects_to_login() {
        let response = get(auth_app(), "/", None).await;
        assert!(response.status().is_redirection());
        assert_eq!(location(&response), "/login");
    }

    #[tokio::test]
    async fn test_invalid_cookie_sees_public_links_only() {
        let html = body_text(get(auth_app(), "/", Some("token=stale")).await).await;
        assert!(html.contains(r#"href="/submenu/1""#));
        assert!(!html.contains("http://secret"));
    }

    #[tokio::test]
    async fn test_verified_user_sees_granted_links() {
        let html = body_text(get(auth_app(), "/", Some("token=good")).await).await;
        assert!(html.contains("http://secret"));
        assert!(html.contains("ana@example.com"));
    }

    #[tokio::test]
    async fn test_database_failure_still_renders_page() {
        let app = app_with(WITH_AUTH, Vec::new(), Err(DomainError::DatabaseError("down".into())));
        let response = get(app, "/", Some("token=good")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Nothing to show here"));
    }

    #[tokio::test]
    async fn test_login_page_redirects_home_when_auth_disabled() {
        let response = get(no_auth_app(), "/login", None).await;
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn test_login_forwards_session_cookie() {
        let response = post_form(auth_app(), "/login", "email=ana%40example.com&password=pw", None).await;
        assert_eq!(location(&response), "/");
        assert_eq!(
            response.headers()[header::SET_COOKIE].to_str().unwrap(),
            "token=good; Path=/; HttpOnly"
        );
    }

    #[tokio::test]
    async fn test_login_failure_rerenders_form() {
        let response = post_form(auth_app(), "/login", "email=ana%40example.com&password=nope", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_register_awaiting_verification_shows_login() {
        let response = post_form(auth_app(), "/register", "email=new%40example.com&password=pw", None).await;
        let html = body_text(response).await;
        assert!(html.contains("wait for admin verification"));
        assert!(html.contains(r#"action="/login""#));
    }

    #[tokio::test]
    async fn test_logout_clears_cookie_even_if_remote_fails() {
        let response = post_form(auth_app(), "/logout", "", Some("token=good")).await;
        assert_eq!(location(&response), "/login");
        assert!(response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .starts_with("token=; "));
    }

    #[tokio::test]
    async fn test_account_pages_require_verified_session() {
        let response = get(auth_app(), "/account-settings", Some("token=stale")).await;
        assert_eq!(location(&response), "/login");

        let response = get(auth_app(), "/account-settings", Some("token=good")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_change_password_messages() {
        let ok = post_form(
            auth_app(),
            "/change-password",
            "currentPassword=old&newPassword=new",
            Some("token=good"),
        )
        .await;
        assert!(body_text(ok).await.contains("Password changed successfully"));

        let rejected = post_form(
            auth_app(),
            "/change-password",
            "currentPassword=wrong&newPassword=new",
            Some("token=good"),
        )
        .await;
        assert!(body_text(rejected).await.contains("Current password is incorrect"));
    }

    #[tokio::test]
    async fn test_delete_account_signs_out() {
        let response = post_form(auth_app(), "/delete-account", "", Some("token=good")).await;
        assert_eq!(location(&response), "/login");
    }

    #[tokio::test]
    async fn test_health() {
        let body: Value = serde_json::from_str(&body_text(get(no_auth_app(), "/health", None).await).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["auth_enabled"], false);
    }
}
