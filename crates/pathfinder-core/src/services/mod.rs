//! Domain services (business logic)

pub mod menu_service;
pub mod auth_service;

pub use menu_service::MenuService;
pub use auth_service::{AuthService, Credentials, PasswordChange};
