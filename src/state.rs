//! Shared application state handed to every HTTP handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::infrastructure::persistence::{InMemoryStore, PgClickRepository, PgLinkRepository};

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        click_repository: Arc<dyn ClickRepository>,
        config: &Config,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository, click_repository, config)),
        }
    }

    /// State backed by PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: Arc<PgPool>, config: &Config) -> Self {
        Self::new(
            Arc::new(PgLinkRepository::new(pool.clone())),
            Arc::new(PgClickRepository::new(pool)),
            config,
        )
    }

    /// State backed by a single in-memory store.
    pub fn in_memory(store: Arc<InMemoryStore>, config: &Config) -> Self {
        Self::new(store.clone(), store, config)
    }
}
