//! PostgreSQL repository implementations

pub mod link_repo_impl;

pub use link_repo_impl::PgLinkRepository;
