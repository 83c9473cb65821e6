use link_shortener::domain::entities::NewLink;
use link_shortener::domain::repositories::{ClickRepository, LinkRepository};
use link_shortener::infrastructure::persistence::{PgClickRepository, PgLinkRepository};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_clicks_paginated_newest_first(pool: PgPool) {
    let pool = Arc::new(pool);
    let links = PgLinkRepository::new(pool.clone());
    let clicks = PgClickRepository::new(pool);

    let link = links
        .insert_link(NewLink {
            id: Uuid::new_v4(),
            original_url: "https://example.com".to_string(),
            short_code: "abc123".to_string(),
        })
        .await
        .unwrap();

    for i in 0..5 {
        clicks
            .insert_click(&link, &format!("client-{i}"))
            .await
            .unwrap();
    }

    let all = clicks.paginate_clicks(&link, 10, 0).await.unwrap();
    assert_eq!(all.len(), 5);
    assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));

    let page = clicks.paginate_clicks(&link, 2, 1).await.unwrap();
    assert_eq!(page.len(), 2);
    assert!(page.iter().all(|c| c.link_id == link.id));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_clicks_of_other_links_are_excluded(pool: PgPool) {
    let pool = Arc::new(pool);
    let links = PgLinkRepository::new(pool.clone());
    let clicks = PgClickRepository::new(pool);

    let mut created = Vec::new();
    for code in ["first", "second"] {
        created.push(
            links
                .insert_link(NewLink {
                    id: Uuid::new_v4(),
                    original_url: format!("https://{code}.example"),
                    short_code: code.to_string(),
                })
                .await
                .unwrap(),
        );
    }

    clicks.insert_click(&created[0], "a").await.unwrap();
    clicks.insert_click(&created[1], "b").await.unwrap();

    let page = clicks.paginate_clicks(&created[0], 10, 0).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].client_descriptor, "a");
}
