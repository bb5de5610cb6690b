//! # Pathfinder Infrastructure
//! 
//! Adapters for the core ports: PostgreSQL link storage, the menu file,
//! and the remote auth service.

pub mod database;
pub mod auth;
pub mod menu_file;

pub use database::{create_pool, run_migrations, PgLinkRepository};
pub use auth::RemoteAuthClient;
pub use menu_file::FileMenuSource;
