//! Repository traits (ports)

pub mod link_repository;
pub mod menu_source;
pub mod auth_gateway;

pub use link_repository::LinkRepository;
pub use menu_source::{MenuSource, StaticMenuSource};
pub use auth_gateway::AuthGateway;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use menu_source::MockMenuSource;
#[cfg(test)]
pub use auth_gateway::MockAuthGateway;
