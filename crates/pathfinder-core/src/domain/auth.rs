//! Identity as reported by the remote auth service

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Per-request authentication state handed to the menu service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthContext {
    pub auth_enabled: bool,
    pub user: Option<AuthUser>,
}

impl AuthContext {
    pub fn disabled() -> Self {
        Self { auth_enabled: false, user: None }
    }

    pub fn anonymous() -> Self {
        Self { auth_enabled: true, user: None }
    }

    pub fn authenticated(user: AuthUser) -> Self {
        Self { auth_enabled: true, user: Some(user) }
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user.as_ref().map(|u| u.id)
    }
}

/// Successful login. `session_cookie` is the raw `Set-Cookie` value for
/// the session token, to be forwarded to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub session_cookie: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// An administrator must approve the account before it can log in.
    AwaitingVerification,
    SignedIn(AuthOutcome),
}
