//! Menu declared in the TOML configuration file
//!
//! The file is read again on every call so that edits to `[[Menu.Item]]`
//! show up on the next page load without a restart.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, error};

use pathfinder_core::domain::MenuItemConfig;
use pathfinder_core::error::DomainError;
use pathfinder_core::repositories::MenuSource;

#[derive(Debug, Deserialize)]
struct MenuFile {
    #[serde(rename = "Menu", alias = "menu", default)]
    menu: Option<MenuSection>,
}

#[derive(Debug, Deserialize)]
struct MenuSection {
    #[serde(rename = "Item", alias = "item", default)]
    item: Vec<MenuItemConfig>,
}

pub struct FileMenuSource {
    path: PathBuf,
}

impl FileMenuSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `name` as used for the app config: `config` means `config.toml`.
    pub fn from_config_name(name: &str) -> Self {
        let path = Path::new(name);
        if path.extension().is_some() {
            Self::new(path)
        } else {
            Self::new(path.with_extension("toml"))
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MenuSource for FileMenuSource {
    fn load_menu(&self) -> Result<Vec<MenuItemConfig>, DomainError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No menu file at {}; menu is empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                error!("Failed to read menu file {}: {}", self.path.display(), e);
                return Err(DomainError::MenuSourceError(e.to_string()));
            }
        };

        let file: MenuFile = toml::from_str(&content).map_err(|e| {
            error!("Failed to parse menu file {}: {}", self.path.display(), e);
            DomainError::MenuSourceError(e.to_string())
        })?;

        Ok(file.menu.map(|m| m.item).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathfinder_core::domain::MenuItemType;
    use std::io::Write;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_nested_items_in_order() {
        let file = write_config(
            r#"
            [server]
            port = 3000

            [[Menu.Item]]
            Id = "mail"
            Name = "Mail"
            Type = "link"
            Link = "https://mail.example.com"

            [[Menu.Item]]
            Id = "dev"
            Name = "Development"
            Type = "submenu"

            [[Menu.Item.Children]]
            Id = "ci"
            Name = "CI"
            Type = "link"
            Link = "https://ci.example.com"
            Password = "ask ops"
            "#,
        );

        let items = FileMenuSource::new(file.path()).load_menu().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "mail");
        assert_eq!(items[1].item_type, MenuItemType::Submenu);
        let children = items[1].children.as_ref().unwrap();
        assert_eq!(children[0].id, "ci");
        assert_eq!(children[0].password.as_deref(), Some("ask ops"));
    }

    #[test]
    fn test_edits_are_picked_up_on_next_call() {
        let mut file = write_config("[[Menu.Item]]\nId = \"a\"\nName = \"A\"\nType = \"link\"\n");
        let source = FileMenuSource::new(file.path());
        assert_eq!(source.load_menu().unwrap().len(), 1);

        file.write_all(b"\n[[Menu.Item]]\nId = \"b\"\nName = \"B\"\nType = \"link\"\n").unwrap();
        assert_eq!(source.load_menu().unwrap().len(), 2);
    }

    #[test]
    fn test_no_menu_section_is_empty() {
        let file = write_config("[auth]\nenabled = false\n");
        assert!(FileMenuSource::new(file.path()).load_menu().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let source = FileMenuSource::new("/nonexistent/pathfinder/config.toml");
        assert!(source.load_menu().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_type_is_source_error() {
        let file = write_config("[[Menu.Item]]\nId = \"a\"\nName = \"A\"\nType = \"folder\"\n");
        assert!(matches!(
            FileMenuSource::new(file.path()).load_menu(),
            Err(DomainError::MenuSourceError(_))
        ));
    }

    #[test]
    fn test_config_name_gets_toml_extension() {
        assert_eq!(FileMenuSource::from_config_name("config").path(), Path::new("config.toml"));
        assert_eq!(
            FileMenuSource::from_config_name("/etc/pathfinder.toml").path(),
            Path::new("/etc/pathfinder.toml")
        );
    }
}
