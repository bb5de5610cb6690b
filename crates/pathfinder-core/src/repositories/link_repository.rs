//! Link storage trait (port)

use async_trait::async_trait;
use crate::domain::LinkRecord;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Every link `user_id` may see (`None` = anonymous), in display order.
    /// Visibility is decided entirely by the storage.
    async fn get_visible_links(&self, user_id: Option<i32>) -> Result<Vec<LinkRecord>, DomainError>;
}
