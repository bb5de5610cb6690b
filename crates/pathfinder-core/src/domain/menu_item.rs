// ============================================================================
// Pathfinder Core - Menu Item Config
// File: crates/pathfinder-core/src/domain/menu_item.rs
// Description: `[[Menu.Item]]` entries declared in the configuration file
// ============================================================================

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemType {
    Link,
    Submenu,
}

/// A configuration-declared menu item.
///
/// `Id` and `Name` default to empty so that a missing key reaches the
/// builder and fails there with the item's position, instead of failing
/// deserialization of the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct MenuItemConfig {
    #[serde(rename = "Id", alias = "id", default)]
    #[validate(length(min = 1, message = "Id is required"))]
    pub id: String,

    #[serde(rename = "Name", alias = "name", default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(rename = "Type", alias = "type")]
    pub item_type: MenuItemType,

    #[serde(rename = "Link", alias = "link", default)]
    pub link: Option<String>,

    #[serde(rename = "Description", alias = "description", default)]
    pub description: Option<String>,

    #[serde(rename = "Password", alias = "password", default)]
    pub password: Option<String>,

    #[serde(rename = "Disclaimer", alias = "disclaimer", default)]
    pub disclaimer: Option<String>,

    #[serde(rename = "Children", alias = "children", default)]
    pub children: Option<Vec<MenuItemConfig>>,
}

impl MenuItemConfig {
    pub fn link(id: impl Into<String>, name: impl Into<String>, link: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            item_type: MenuItemType::Link,
            link: link.map(str::to_string),
            description: None,
            password: None,
            disclaimer: None,
            children: None,
        }
    }

    pub fn submenu(
        id: impl Into<String>,
        name: impl Into<String>,
        children: Option<Vec<MenuItemConfig>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            item_type: MenuItemType::Submenu,
            link: None,
            description: None,
            password: None,
            disclaimer: None,
            children,
        }
    }
}
