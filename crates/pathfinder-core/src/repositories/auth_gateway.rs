//! Remote authentication service trait (port)
//!
//! Every call that acts on an existing session takes the raw session
//! token, which the implementation forwards as the `token` cookie.

use async_trait::async_trait;
use crate::domain::{AuthOutcome, AuthUser, RegisterOutcome};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// `Ok(None)` when the service does not accept the token.
    async fn verify(&self, token: &str) -> Result<Option<AuthUser>, DomainError>;
    async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome, DomainError>;
    async fn register(&self, email: &str, password: &str) -> Result<RegisterOutcome, DomainError>;
    async fn logout(&self, token: &str) -> Result<(), DomainError>;
    async fn change_password(
        &self,
        token: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError>;
    async fn delete_account(&self, token: &str) -> Result<(), DomainError>;
}
