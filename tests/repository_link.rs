use link_shortener::domain::entities::NewLink;
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::error::AppError;
use link_shortener::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

fn new_link(code: &str, url: &str) -> NewLink {
    NewLink {
        id: Uuid::new_v4(),
        original_url: url.to_string(),
        short_code: code.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .insert_link(new_link("test123", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(link.short_code, "test123");
    assert_eq!(link.original_url, "https://example.com");
    assert!(!link.is_deleted);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_code_is_conflict(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.insert_link(new_link("dup", "https://a.example"))
        .await
        .unwrap();

    let result = repo.insert_link(new_link("dup", "https://b.example")).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_batch_insert_rolls_back_on_conflict(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));
    repo.insert_link(new_link("taken", "https://a.example"))
        .await
        .unwrap();

    let result = repo
        .insert_links(vec![
            new_link("fresh", "https://b.example"),
            new_link("taken", "https://c.example"),
        ])
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_soft_delete_hides_active_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let link = repo
        .insert_link(new_link("gone", "https://example.com"))
        .await
        .unwrap();

    repo.soft_delete(&link).await.unwrap();

    assert!(repo.find_active_link("gone").await.unwrap().is_none());
    let row = repo.find_any_link("gone").await.unwrap().unwrap();
    assert!(row.is_deleted);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_unknown_code(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.find_active_link("notfound").await.unwrap().is_none());
    assert!(repo.find_any_link("notfound").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.ping().await);
}
