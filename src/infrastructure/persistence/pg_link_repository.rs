//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape of the `links` table.
#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    id: Uuid,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    is_deleted: bool,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(r.id, r.original_url, r.short_code, r.created_at, r.is_deleted)
    }
}

const INSERT_LINK: &str = r#"
    INSERT INTO links (id, original_url, short_code)
    VALUES ($1, $2, $3)
    RETURNING id, original_url, short_code, created_at, is_deleted
"#;

/// PostgreSQL repository for link storage and retrieval.
///
/// Writes run inside a transaction taken from the pool; if an error returns
/// early the transaction is dropped, which rolls it back and releases the
/// connection.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert_link(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, LinkRow>(INSERT_LINK)
            .bind(new_link.id)
            .bind(&new_link.original_url)
            .bind(&new_link.short_code)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn insert_links(&self, new_links: Vec<NewLink>) -> Result<Vec<Link>, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut links = Vec::with_capacity(new_links.len());

        for new_link in &new_links {
            let row = sqlx::query_as::<_, LinkRow>(INSERT_LINK)
                .bind(new_link.id)
                .bind(&new_link.original_url)
                .bind(&new_link.short_code)
                .fetch_one(&mut *tx)
                .await?;
            links.push(row.into());
        }

        tx.commit().await?;

        Ok(links)
    }

    async fn find_active_link(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, original_url, short_code, created_at, is_deleted
            FROM links
            WHERE short_code = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_any_link(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, original_url, short_code, created_at, is_deleted
            FROM links
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn soft_delete(&self, link: &Link) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE links SET is_deleted = TRUE WHERE id = $1")
            .bind(link.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn ping(&self) -> bool {
        match sqlx::query("SELECT 1").execute(self.pool.as_ref()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database ping failed");
                false
            }
        }
    }
}
