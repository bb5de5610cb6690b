// ============================================================================
// Pathfinder Core - Config Tree Builder
// File: crates/pathfinder-core/src/menu/config_tree.rs
// Description: Declared `[[Menu.Item]]` lists -> MenuNode forest
// ============================================================================

use tracing::warn;
use validator::Validate;

use crate::domain::{MenuItemConfig, MenuItemType, MenuNode};
use crate::error::DomainError;

const ROOT_PATH: &str = "Menu.Item";

/// Builds one `MenuNode` per declared item, in declaration order.
///
/// Any item without an `Id` or `Name` fails the whole build; the error names
/// the item's position, e.g. `Menu.Item[1].Children[0]`.
pub fn build_config_tree(items: &[MenuItemConfig]) -> Result<Vec<MenuNode>, DomainError> {
    build_level(items, ROOT_PATH)
}

fn build_level(items: &[MenuItemConfig], path: &str) -> Result<Vec<MenuNode>, DomainError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| build_item(item, &format!("{path}[{index}]")))
        .collect()
}

fn build_item(item: &MenuItemConfig, path: &str) -> Result<MenuNode, DomainError> {
    item.validate().map_err(|e| DomainError::InvalidMenuItem {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    let node = match item.item_type {
        MenuItemType::Link => {
            if item.children.as_ref().is_some_and(|c| !c.is_empty()) {
                warn!("Menu item {} ({}) is a link; ignoring its Children", item.id, path);
            }
            MenuNode::link(&item.id, &item.name, item.link.clone())
        }
        MenuItemType::Submenu => {
            let children = match &item.children {
                Some(children) => build_level(children, &format!("{path}.Children"))?,
                None => Vec::new(),
            };
            MenuNode::submenu(&item.id, &item.name, children)
        }
    };

    Ok(node.annotated(
        item.description.clone(),
        item.password.clone(),
        item.disclaimer.clone(),
    ))
}
