//! # Pathfinder Core - Domain Module
//! 
//! The normalized menu tree and the two shapes it is built from.

pub mod menu_node;
pub mod menu_item;
pub mod link;
pub mod auth;

pub use menu_node::{MenuKind, MenuNode, Subtree};
pub use menu_item::{MenuItemConfig, MenuItemType};
pub use link::LinkRecord;
pub use auth::{AuthContext, AuthOutcome, AuthUser, RegisterOutcome};
