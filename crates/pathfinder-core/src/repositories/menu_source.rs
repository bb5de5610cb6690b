//! Configured menu trait (port)

use crate::domain::MenuItemConfig;
use crate::error::DomainError;

/// Supplies the declared menu. Called on every request; implementations
/// decide whether to re-read or cache.
#[cfg_attr(test, mockall::automock)]
pub trait MenuSource: Send + Sync {
    /// An empty list when no menu is declared.
    fn load_menu(&self) -> Result<Vec<MenuItemConfig>, DomainError>;
}

/// A fixed snapshot of menu items.
#[derive(Debug, Clone, Default)]
pub struct StaticMenuSource {
    items: Vec<MenuItemConfig>,
}

impl StaticMenuSource {
    pub fn new(items: Vec<MenuItemConfig>) -> Self {
        Self { items }
    }
}

impl MenuSource for StaticMenuSource {
    fn load_menu(&self) -> Result<Vec<MenuItemConfig>, DomainError> {
        Ok(self.items.clone())
    }
}
