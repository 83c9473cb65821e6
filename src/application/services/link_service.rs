//! Link shortening, resolution and click statistics service.

use std::sync::Arc;

use serde_json::json;
use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::domain::entities::{ClickRecord, ClientData, Link, NewLink};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Service composing repository calls into the user-facing link operations.
///
/// Generic over the repositories so unit tests can plug in mocks directly;
/// the defaults are trait objects, which is what the HTTP state holds.
pub struct LinkService<L: ?Sized = dyn LinkRepository, C: ?Sized = dyn ClickRepository> {
    link_repository: Arc<L>,
    click_repository: Arc<C>,
    url_prefix: String,
    code_generation_attempts: usize,
}

impl<L, C> LinkService<L, C>
where
    L: LinkRepository + ?Sized,
    C: ClickRepository + ?Sized,
{
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, click_repository: Arc<C>, config: &Config) -> Self {
        Self {
            link_repository,
            click_repository,
            url_prefix: config.url_prefix.clone(),
            code_generation_attempts: config.code_generation_attempts.max(1),
        }
    }

    /// Shortens a single URL and returns the full short URL.
    ///
    /// The URL is stored verbatim. On a short code collision a fresh code is
    /// generated and the insert retried, up to the configured number of attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `url` is empty.
    /// Returns [`AppError::Internal`] on storage errors or when every attempt collided.
    pub async fn shorten(&self, url: &str) -> Result<String, AppError> {
        ensure_not_empty(url)?;

        let link_repository = &self.link_repository;
        let link = self
            .with_collision_retry(|| async move {
                link_repository.insert_link(new_link(url)?).await
            })
            .await?;

        info!(code = %link.short_code, "Short link created");
        Ok(self.short_url(&link.short_code))
    }

    /// Shortens several URLs, preserving order.
    ///
    /// The batch is all-or-nothing: links are inserted in a single unit of
    /// work, and if any of them fails nothing is stored. A collision
    /// regenerates codes for the whole batch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any URL is empty; nothing is stored.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn shorten_batch(&self, urls: &[String]) -> Result<Vec<String>, AppError> {
        if let Some(index) = urls.iter().position(|url| url.is_empty()) {
            return Err(AppError::bad_request(
                "URL must not be empty",
                json!({ "index": index }),
            ));
        }

        if urls.is_empty() {
            return Ok(Vec::new());
        }

        let link_repository = &self.link_repository;
        let links = self
            .with_collision_retry(|| async move {
                let new_links = urls
                    .iter()
                    .map(|url| new_link(url))
                    .collect::<Result<Vec<_>, _>>()?;
                link_repository.insert_links(new_links).await
            })
            .await?;

        info!(count = links.len(), "Short links created");
        Ok(links
            .iter()
            .map(|link| self.short_url(&link.short_code))
            .collect())
    }

    /// Resolves a short code to its original URL, recording a click on hit.
    ///
    /// Returns `Ok(None)` when the code is unknown or deleted; no click is
    /// recorded in that case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(
        &self,
        short_code: &str,
        client: &ClientData,
    ) -> Result<Option<String>, AppError> {
        let Some(link) = self.link_repository.find_active_link(short_code).await? else {
            debug!(code = short_code, "Short code not found");
            return Ok(None);
        };

        self.click_repository
            .insert_click(&link, &client.to_string())
            .await?;
        debug!(code = short_code, "Click recorded");

        Ok(Some(link.original_url))
    }

    /// Soft-deletes a link.
    ///
    /// Unknown and already deleted codes are a silent success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn remove(&self, short_code: &str) -> Result<(), AppError> {
        match self.link_repository.find_any_link(short_code).await? {
            Some(link) if link.is_active() => {
                self.link_repository.soft_delete(&link).await?;
                info!(code = short_code, "Short link deleted");
            }
            Some(_) => debug!(code = short_code, "Short link already deleted"),
            None => debug!(code = short_code, "Delete of unknown short code ignored"),
        }

        Ok(())
    }

    /// Returns clicks of an active link, newest first.
    ///
    /// Unknown or deleted codes yield an empty list. Negative bounds are
    /// treated as zero; request-level bounds are enforced by the API layer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn status(
        &self,
        short_code: &str,
        max_results: i64,
        offset: i64,
    ) -> Result<Vec<ClickRecord>, AppError> {
        let Some(link) = self.link_repository.find_active_link(short_code).await? else {
            return Ok(Vec::new());
        };

        self.click_repository
            .paginate_clicks(&link, max_results.max(0), offset.max(0))
            .await
    }

    /// Reports whether the store is reachable.
    pub async fn ping(&self) -> bool {
        let healthy = self.link_repository.ping().await;
        if !healthy {
            warn!("Store health probe failed");
        }
        healthy
    }

    /// Finds the link behind a short code, deleted or not.
    ///
    /// Used by the admin tool to show what a code points to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn lookup(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        self.link_repository.find_any_link(short_code).await
    }

    /// Composes the public short URL for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}{}", self.url_prefix, short_code)
    }

    /// Runs `insert` until it stops failing with a conflict or attempts run out.
    async fn with_collision_retry<T, F, Fut>(&self, insert: F) -> Result<T, AppError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let strategy = FixedInterval::from_millis(0).take(self.code_generation_attempts - 1);

        let result = RetryIf::spawn(strategy, insert, |err: &AppError| {
            let collided = matches!(err, AppError::Conflict { .. });
            if collided {
                warn!("Short code collision, regenerating");
            }
            collided
        })
        .await;

        result.map_err(|err| match err {
            AppError::Conflict { .. } => AppError::internal(
                "Failed to generate unique short code",
                json!({ "attempts": self.code_generation_attempts }),
            ),
            other => other,
        })
    }
}

/// Builds the insert payload for `url` with a fresh id and code.
fn new_link(url: &str) -> Result<NewLink, AppError> {
    Ok(NewLink {
        id: Uuid::new_v4(),
        original_url: url.to_string(),
        short_code: generate_code()?,
    })
}

fn ensure_not_empty(url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::bad_request("URL must not be empty", json!({})));
    }
    Ok(())
}
