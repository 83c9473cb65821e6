//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{ClickRecord, Link};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct ClickRow {
    id: Uuid,
    link_id: Uuid,
    created_at: DateTime<Utc>,
    client_descriptor: String,
}

/// PostgreSQL repository for the click log.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn insert_click(&self, link: &Link, client_descriptor: &str) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO link_clicks (id, link_id, client_descriptor)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(link.id)
        .bind(client_descriptor)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn paginate_clicks(
        &self,
        link: &Link,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ClickRecord>, AppError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, link_id, created_at, client_descriptor
            FROM link_clicks
            WHERE link_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(link.id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ClickRecord::new(r.id, r.link_id, r.created_at, r.client_descriptor))
            .collect())
    }
}
