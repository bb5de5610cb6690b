//! Menu tree construction and lookup

pub mod config_tree;
pub mod record_tree;
pub mod locator;

pub use config_tree::build_config_tree;
pub use record_tree::build_record_tree;
pub use locator::{children_of, find_node, locate_subtree};
