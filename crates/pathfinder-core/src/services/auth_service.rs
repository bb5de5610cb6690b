// ============================================================================
// Pathfinder Core - Authentication Service
// File: crates/pathfinder-core/src/services/auth_service.rs
// ============================================================================
//! Account flows delegated to the remote auth service

use std::sync::Arc;
use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::{AuthOutcome, AuthUser, RegisterOutcome};
use crate::error::DomainError;
use crate::repositories::AuthGateway;

/// Login / register form payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Credentials {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Change-password form payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

fn check<T: Validate>(payload: &T) -> Result<(), DomainError> {
    payload
        .validate()
        .map_err(|e| DomainError::ValidationError(e.to_string()))
}

/// Thin wrapper over the [`AuthGateway`] that validates input and logs.
pub struct AuthService {
    gateway: Arc<dyn AuthGateway>,
}

impl AuthService {
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self { gateway }
    }

    /// Resolves a session token. Rejected tokens and an unreachable auth
    /// service both yield `None`.
    pub async fn current_user(&self, token: &str) -> Option<AuthUser> {
        match self.gateway.verify(token).await {
            Ok(user) => user,
            Err(e) => {
                warn!("Token verification failed: {}", e);
                None
            }
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthOutcome, DomainError> {
        check(credentials)?;
        info!("Login attempt for email: {}", credentials.email);

        let outcome = self
            .gateway
            .login(&credentials.email, &credentials.password)
            .await
            .inspect_err(|e| warn!("Login failed for {}: {}", credentials.email, e))?;

        info!("Login successful for: {}", credentials.email);
        Ok(outcome)
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<RegisterOutcome, DomainError> {
        check(credentials)?;
        info!("Registration attempt for email: {}", credentials.email);

        let outcome = self
            .gateway
            .register(&credentials.email, &credentials.password)
            .await
            .inspect_err(|e| warn!("Registration failed for {}: {}", credentials.email, e))?;

        if outcome == RegisterOutcome::AwaitingVerification {
            info!("Registration for {} awaits admin verification", credentials.email);
        }
        Ok(outcome)
    }

    /// Best effort: the local session is cleared regardless.
    pub async fn logout(&self, token: Option<&str>) {
        let Some(token) = token else { return };
        if let Err(e) = self.gateway.logout(token).await {
            warn!("Remote logout failed, ignoring: {}", e);
        }
    }

    pub async fn change_password(&self, token: &str, change: &PasswordChange) -> Result<(), DomainError> {
        check(change)?;
        self.gateway
            .change_password(token, &change.current_password, &change.new_password)
            .await
            .inspect_err(|e| warn!("Password change failed: {}", e))?;
        info!("Password changed");
        Ok(())
    }

    pub async fn delete_account(&self, token: &str) -> Result<(), DomainError> {
        self.gateway.delete_account(token).await?;
        info!("Account deleted");
        Ok(())
    }
}
