//! # Pathfinder API
//! 
//! HTTP handlers, auth middleware, views, and the router.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod error;
pub mod views;
pub mod state;
pub mod router;

pub use router::build_router;
pub use state::AppState;
