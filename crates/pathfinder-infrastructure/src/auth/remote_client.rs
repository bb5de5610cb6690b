// ============================================================================
// Pathfinder Infrastructure - Remote Auth Client
// File: crates/pathfinder-infrastructure/src/auth/remote_client.rs
// Description: HTTP client for the external authentication service
// ============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, warn};

use pathfinder_core::domain::{AuthOutcome, AuthUser, RegisterOutcome};
use pathfinder_core::error::DomainError;
use pathfinder_core::repositories::AuthGateway;
use pathfinder_shared::constants::SESSION_COOKIE;

/// Body shape shared by every auth service endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    user: Option<AuthUser>,
    #[serde(default)]
    requires_verification: bool,
    #[serde(default)]
    error: Option<String>,
}

pub struct RemoteAuthClient {
    client: Client,
    base_url: String,
}

impl RemoteAuthClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::AuthServiceUnavailable(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/auth/{}", self.base_url, path)
    }

    fn session_header(token: &str) -> String {
        format!("{}={}", SESSION_COOKIE, token)
    }

    /// The `Set-Cookie` value carrying the session token, if any.
    fn session_cookie(response: &Response) -> Option<String> {
        let prefix = format!("{}=", SESSION_COOKIE);
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with(&prefix))
            .map(str::to_string)
    }

    async fn send(&self, request: reqwest::RequestBuilder, action: &str) -> Result<Response, DomainError> {
        request.send().await.map_err(|e| {
            error!("Auth service unreachable during {}: {}", action, e);
            DomainError::AuthServiceUnavailable(e.to_string())
        })
    }

    /// Parses the envelope of a response, turning non-2xx statuses into errors.
    async fn envelope(response: Response, action: &str) -> Result<AuthEnvelope, DomainError> {
        let status = response.status();
        let body: AuthEnvelope = response.json().await.unwrap_or_default();

        if status.is_server_error() {
            error!("Auth service returned {} during {}", status, action);
            return Err(DomainError::AuthServiceUnavailable(format!("{action}: HTTP {status}")));
        }
        if !status.is_success() {
            warn!("Auth service rejected {} with {}", action, status);
            let message = body.error.unwrap_or_else(|| format!("{action} failed"));
            return Err(DomainError::AuthRejected(message));
        }
        Ok(body)
    }

    async fn post_with_session(
        &self,
        path: &str,
        token: &str,
        body: serde_json::Value,
        action: &str,
    ) -> Result<(), DomainError> {
        let request = self
            .client
            .post(self.url(path))
            .header(header::COOKIE, Self::session_header(token))
            .json(&body);
        let response = self.send(request, action).await?;
        Self::envelope(response, action).await.map(|_| ())
    }
}

#[async_trait]
impl AuthGateway for RemoteAuthClient {
    async fn verify(&self, token: &str) -> Result<Option<AuthUser>, DomainError> {
        let request = self
            .client
            .get(self.url("verify"))
            .header(header::COOKIE, Self::session_header(token));
        let response = self.send(request, "verify").await?;

        if matches!(response.status(), StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            debug!("Session token rejected by auth service");
            return Ok(None);
        }

        let body = Self::envelope(response, "verify").await?;
        Ok(if body.success { body.user } else { None })
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome, DomainError> {
        let request = self
            .client
            .post(self.url("login"))
            .json(&json!({ "email": email, "password": password }));
        let response = self.send(request, "login").await?;
        let session_cookie = Self::session_cookie(&response);

        let body = Self::envelope(response, "login").await?;
        if !body.success {
            return Err(DomainError::InvalidCredentials);
        }
        Ok(AuthOutcome { session_cookie })
    }

    async fn register(&self, email: &str, password: &str) -> Result<RegisterOutcome, DomainError> {
        let request = self
            .client
            .post(self.url("register"))
            .json(&json!({ "email": email, "password": password }));
        let response = self.send(request, "register").await?;
        let session_cookie = Self::session_cookie(&response);

        let body = Self::envelope(response, "register").await?;
        if !body.success {
            return Err(DomainError::AuthRejected("Registration failed".into()));
        }
        if body.requires_verification {
            return Ok(RegisterOutcome::AwaitingVerification);
        }
        Ok(RegisterOutcome::SignedIn(AuthOutcome { session_cookie }))
    }

    async fn logout(&self, token: &str) -> Result<(), DomainError> {
        self.post_with_session("logout", token, json!({}), "logout").await
    }

    async fn change_password(
        &self,
        token: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        let body = json!({ "currentPassword": current_password, "newPassword": new_password });
        self.post_with_session("change-password", token, body, "change password").await
    }

    async fn delete_account(&self, token: &str) -> Result<(), DomainError> {
        self.post_with_session("delete-account", token, json!({}), "delete account").await
    }
}
