//! Link record entity, as returned by the link storage

use serde::{Deserialize, Serialize};

/// A persisted link. `parent_id == None` places it at the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub id: i32,
    pub title: String,
    pub url: Option<String>,
    pub submenu: bool,
    pub parent_id: Option<i32>,
    pub description: Option<String>,
    pub password: Option<String>,
    pub disclaimer: Option<String>,
}

impl LinkRecord {
    pub fn new(id: i32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: None,
            submenu: false,
            parent_id: None,
            description: None,
            password: None,
            disclaimer: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn under(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn as_submenu(mut self) -> Self {
        self.submenu = true;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
