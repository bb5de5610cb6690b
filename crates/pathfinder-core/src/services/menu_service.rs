// ============================================================================
// Pathfinder Core - Menu Service
// File: crates/pathfinder-core/src/services/menu_service.rs
// ============================================================================
//! Picks the menu data source for a request and builds the tree from it

use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::domain::{AuthContext, MenuNode, Subtree};
use crate::error::DomainError;
use crate::menu::{build_config_tree, build_record_tree, locate_subtree};
use crate::repositories::{LinkRepository, MenuSource};

/// Menu assembly for the presentation layer.
///
/// With auth enabled the tree comes from the link storage, scoped to the
/// requesting user; otherwise from the configured menu. Storage failures
/// are logged and degrade to an empty tree. Only a malformed configured
/// menu is returned as an error.
pub struct MenuService {
    menu_source: Arc<dyn MenuSource>,
    link_repo: Option<Arc<dyn LinkRepository>>,
}

impl MenuService {
    /// `link_repo` may be `None` when auth is disabled and no database is
    /// configured.
    pub fn new(menu_source: Arc<dyn MenuSource>, link_repo: Option<Arc<dyn LinkRepository>>) -> Self {
        Self { menu_source, link_repo }
    }

    pub async fn full_tree(&self, ctx: &AuthContext) -> Result<Vec<MenuNode>, DomainError> {
        if ctx.auth_enabled {
            return Ok(self.tree_from_links(ctx.user_id()).await);
        }

        let items = self.menu_source.load_menu()?;
        build_config_tree(&items)
    }

    pub async fn subtree(&self, ctx: &AuthContext, target_id: &str) -> Result<Subtree, DomainError> {
        let forest = self.full_tree(ctx).await?;
        let subtree = locate_subtree(&forest, target_id);
        if subtree.parent.is_none() {
            debug!("Submenu {} not found in menu tree", target_id);
        }
        Ok(subtree)
    }

    async fn tree_from_links(&self, user_id: Option<i32>) -> Vec<MenuNode> {
        let Some(repo) = &self.link_repo else {
            warn!("Auth is enabled but no link storage is configured; rendering empty menu");
            return Vec::new();
        };

        match repo.get_visible_links(user_id).await {
            Ok(links) => {
                debug!("Loaded {} visible links for user {:?}", links.len(), user_id);
                build_record_tree(&links, None)
            }
            Err(e) => {
                error!("Error loading links from database: {}", e);
                Vec::new()
            }
        }
    }
}
