//! In-process store implementing both repository traits.
//!
//! Mirrors the PostgreSQL schema rules that matter to the service: unique
//! short codes across all rows, soft deletion, newest-first click pages and
//! all-or-nothing batch inserts. Used by the test-suites and anywhere a
//! database is not wanted.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{ClickRecord, Link, NewLink};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

#[derive(Default)]
struct Tables {
    links: Vec<Link>,
    /// Append-only, so insertion order is chronological.
    clicks: Vec<ClickRecord>,
}

impl Tables {
    fn check_unique(&self, new_link: &NewLink) -> Result<(), AppError> {
        if self
            .links
            .iter()
            .any(|l| l.short_code == new_link.short_code || l.id == new_link.id)
        {
            return Err(unique_violation());
        }
        Ok(())
    }

    fn push_link(&mut self, new_link: NewLink) -> Link {
        let link = Link::new(
            new_link.id,
            new_link.original_url,
            new_link.short_code,
            Utc::now(),
            false,
        );
        self.links.push(link.clone());
        link
    }
}

/// Thread-safe in-memory link and click store.
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    available: AtomicBool,
}

impl InMemoryStore {
    /// Creates an empty, reachable store.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            available: AtomicBool::new(true),
        }
    }

    /// Toggles reachability. While unavailable every operation fails as a
    /// storage error and [`LinkRepository::ping`] reports `false`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of stored link rows, deleted ones included.
    pub async fn link_count(&self) -> usize {
        self.tables.read().await.links.len()
    }

    /// Number of stored click rows.
    pub async fn click_count(&self) -> usize {
        self.tables.read().await.clicks.len()
    }

    fn ensure_available(&self) -> Result<(), AppError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::internal(
                "Database error",
                json!({ "reason": "store unavailable" }),
            ))
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn unique_violation() -> AppError {
    AppError::conflict(
        "Unique constraint violation",
        json!({ "constraint": "links_short_code_key" }),
    )
}

#[async_trait]
impl LinkRepository for InMemoryStore {
    async fn insert_link(&self, new_link: NewLink) -> Result<Link, AppError> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;

        tables.check_unique(&new_link)?;
        Ok(tables.push_link(new_link))
    }

    async fn insert_links(&self, new_links: Vec<NewLink>) -> Result<Vec<Link>, AppError> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;

        let mut batch_codes = HashSet::with_capacity(new_links.len());
        for new_link in &new_links {
            tables.check_unique(new_link)?;
            if !batch_codes.insert(new_link.short_code.as_str()) {
                return Err(unique_violation());
            }
        }

        Ok(new_links
            .into_iter()
            .map(|new_link| tables.push_link(new_link))
            .collect())
    }

    async fn find_active_link(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        self.ensure_available()?;
        let tables = self.tables.read().await;

        Ok(tables
            .links
            .iter()
            .find(|l| l.short_code == short_code && l.is_active())
            .cloned())
    }

    async fn find_any_link(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        self.ensure_available()?;
        let tables = self.tables.read().await;

        Ok(tables
            .links
            .iter()
            .find(|l| l.short_code == short_code)
            .cloned())
    }

    async fn soft_delete(&self, link: &Link) -> Result<(), AppError> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;

        if let Some(stored) = tables.links.iter_mut().find(|l| l.id == link.id) {
            stored.is_deleted = true;
        }
        Ok(())
    }

    async fn ping(&self) -> bool {
        self.ensure_available().is_ok()
    }
}

#[async_trait]
impl ClickRepository for InMemoryStore {
    async fn insert_click(&self, link: &Link, client_descriptor: &str) -> Result<(), AppError> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;

        if !tables.links.iter().any(|l| l.id == link.id) {
            return Err(AppError::internal(
                "Database error",
                json!({ "reason": "link does not exist" }),
            ));
        }

        tables.clicks.push(ClickRecord::new(
            Uuid::new_v4(),
            link.id,
            Utc::now(),
            client_descriptor.to_string(),
        ));
        Ok(())
    }

    async fn paginate_clicks(
        &self,
        link: &Link,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ClickRecord>, AppError> {
        self.ensure_available()?;
        let tables = self.tables.read().await;

        Ok(tables
            .clicks
            .iter()
            .rev()
            .filter(|c| c.link_id == link.id)
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }
}
