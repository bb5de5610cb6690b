// ============================================================================
// Pathfinder Infrastructure - PostgreSQL Link Repository
// File: crates/pathfinder-infrastructure/src/database/postgres/link_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error};

use pathfinder_core::domain::LinkRecord;
use pathfinder_core::error::DomainError;
use pathfinder_core::repositories::LinkRepository;

pub struct PgLinkRepository {
    pool: PgPool,
}

impl PgLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct LinkRow {
    pub id: i32,
    pub title: String,
    pub url: Option<String>,
    pub submenu: bool,
    pub parent_id: Option<i32>,
    pub description: Option<String>,
    pub password: Option<String>,
    pub disclaimer: Option<String>,
}

impl From<LinkRow> for LinkRecord {
    fn from(row: LinkRow) -> Self {
        LinkRecord {
            id: row.id,
            title: row.title,
            url: row.url,
            submenu: row.submenu,
            parent_id: row.parent_id,
            description: row.description,
            password: row.password,
            disclaimer: row.disclaimer,
        }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    /// Public links, plus links granted to `user_id` through
    /// `link_visibility`. Ordered for display.
    async fn get_visible_links(&self, user_id: Option<i32>) -> Result<Vec<LinkRecord>, DomainError> {
        let rows: Vec<LinkRow> = sqlx::query_as(
            r#"
            SELECT
                l.id, l.title, l.url, l.submenu, l.parent_id,
                l.description, l.password, l.disclaimer
            FROM links l
            WHERE l.is_public
               OR ($1::INT4 IS NOT NULL AND EXISTS (
                    SELECT 1 FROM link_visibility v
                    WHERE v.link_id = l.id AND v.user_id = $1::INT4
               ))
            ORDER BY l.sort_order, l.id
            "#
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error loading visible links: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!("Fetched {} visible links for user {:?}", rows.len(), user_id);
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
