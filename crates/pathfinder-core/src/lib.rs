//! # Pathfinder Core
//! 
//! Menu tree model, the config and record tree builders, tree lookup,
//! and the services the HTTP layer talks to.

pub mod domain;
pub mod menu;
pub mod repositories;
pub mod services;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
