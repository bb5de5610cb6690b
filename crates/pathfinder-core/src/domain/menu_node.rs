// ============================================================================
// Pathfinder Core - Menu Node
// File: crates/pathfinder-core/src/domain/menu_node.rs
// Description: Normalized menu tree shared by both builders
// ============================================================================

use serde::Serialize;

/// One entry of the rendered menu.
///
/// Serializes flat, the way templates and the JSON API consume it:
/// `{"id", "name", "type": "link", "url"}` for links and
/// `{"id", "name", "type": "submenu", "children": [...]}` for submenus.
/// A link never has a `children` key; a submenu always has one, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuNode {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "password", skip_serializing_if = "Option::is_none")]
    pub password_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
    #[serde(flatten)]
    pub kind: MenuKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MenuKind {
    /// `url` is `None` for placeholder links.
    Link {
        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    Submenu { children: Vec<MenuNode> },
}

impl MenuNode {
    pub fn link(id: impl Into<String>, name: impl Into<String>, url: Option<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            password_hint: None,
            disclaimer: None,
            kind: MenuKind::Link { url },
        }
    }

    pub fn submenu(id: impl Into<String>, name: impl Into<String>, children: Vec<MenuNode>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            password_hint: None,
            disclaimer: None,
            kind: MenuKind::Submenu { children },
        }
    }

    /// Attaches the presentation-only annotations, unmodified.
    pub fn annotated(
        mut self,
        description: Option<String>,
        password_hint: Option<String>,
        disclaimer: Option<String>,
    ) -> Self {
        self.description = description;
        self.password_hint = password_hint;
        self.disclaimer = disclaimer;
        self
    }

    pub fn is_submenu(&self) -> bool {
        matches!(self.kind, MenuKind::Submenu { .. })
    }

    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            MenuKind::Link { url } => url.as_deref(),
            MenuKind::Submenu { .. } => None,
        }
    }

    /// `None` for links, `Some` (possibly empty) for submenus.
    pub fn children(&self) -> Option<&[MenuNode]> {
        match &self.kind {
            MenuKind::Link { .. } => None,
            MenuKind::Submenu { children } => Some(children),
        }
    }
}

/// Result of a drill-down lookup: the matched node (if any) and the
/// children to display under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Subtree {
    pub parent: Option<MenuNode>,
    pub children: Vec<MenuNode>,
}
