use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use cb_core::{Article, ArticleId, ArticleStore, Error, Result};
use cb_storage::InMemoryStore;
use cb_web::{create_app, AppState};
use chrono::{Duration, NaiveDate};
use std::sync::Arc;
use tower::ServiceExt;

fn article(id: i64, title: &str, (y, m, d): (i32, u32, u32)) -> Article {
    let created_at = NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    Article {
        id: ArticleId::new(id).unwrap(),
        title: title.to_string(),
        authors: "Test Author".to_string(),
        url: format!("https://example.com/{}", id),
        summary: format!("Summary of {}", title),
        created_at,
        scraped_at: created_at + Duration::hours(1),
    }
}

fn app_with(articles: Vec<Article>) -> Router {
    create_app(AppState::new(Arc::new(InMemoryStore::with_articles(articles))))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Store whose backing database is unreachable.
struct BrokenStore;

#[async_trait]
impl ArticleStore for BrokenStore {
    fn name(&self) -> &'static str {
        "broken"
    }

    async fn list_recent(&self, _limit: usize) -> Result<Vec<Article>> {
        Err(Error::Database("connection refused to db.internal:3306".to_string()))
    }

    async fn get_by_id(&self, _id: ArticleId) -> Result<Option<Article>> {
        Err(Error::Database("connection refused to db.internal:3306".to_string()))
    }
}

#[tokio::test]
async fn test_list_orders_newest_first() {
    let app = app_with(vec![
        article(1, "Title A", (2024, 1, 1)),
        article(2, "Title B", (2024, 2, 1)),
    ]);

    let (status, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    let b = body.find("Title B").unwrap();
    let a = body.find("Title A").unwrap();
    assert!(b < a, "newer article should come first");
    assert!(body.contains(r#"href="/article?id=2""#));
    assert!(body.contains(r#"href="/article?id=1""#));
}

#[tokio::test]
async fn test_list_caps_at_fifty() {
    let articles = (1..=60)
        .map(|i| article(i, &format!("Story {}", i), (2024, 1, 1)))
        .collect();

    let (status, body) = get(app_with(articles), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches(r#"class="article-card""#).count(), 50);
}

#[tokio::test]
async fn test_list_empty_store() {
    let (status, body) = get(app_with(vec![]), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("articles-grid"));
    assert!(!body.contains("article-card"));
}

#[tokio::test]
async fn test_legacy_paths() {
    let app = app_with(vec![article(4, "Legacy", (2024, 1, 1))]);
    let (status, body) = get(app.clone(), "/index.php").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Legacy"));

    let (status, body) = get(app, "/article.php?id=4").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Legacy"));
}

#[tokio::test]
async fn test_detail_found() {
    let app = app_with(vec![article(1, "<b>Bold</b> claims", (2024, 1, 1))]);

    let (status, body) = get(app, "/article?id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("&lt;b&gt;Bold&lt;/b&gt; claims"));
    assert!(!body.contains("<b>Bold</b>"));
    assert!(body.contains("2024-01-01 00:00:00"));
    assert!(body.contains("2024-01-01 01:00:00"));
    assert!(body.contains(r#"href="https://example.com/1""#));
}

#[tokio::test]
async fn test_detail_missing_article() {
    let app = app_with(vec![article(1, "Only", (2024, 1, 1))]);

    let (status, body) = get(app, "/article?id=999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Article does not exist.");
}

#[tokio::test]
async fn test_detail_unusable_ids() {
    let app = app_with(vec![article(1, "Only", (2024, 1, 1))]);

    for uri in [
        "/article?id=abc",
        "/article?id=0",
        "/article?id=-1",
        "/article?id=",
        "/article?id=1%20OR%201%3D1",
        "/article?id=1&id=2",
    ] {
        let (status, body) = get(app.clone(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, "Article does not exist.", "{uri}");
    }
}

#[tokio::test]
async fn test_detail_without_id() {
    let (status, body) = get(app_with(vec![]), "/article").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Article not found.");
}

#[tokio::test]
async fn test_store_failure_is_generic() {
    let app = create_app(AppState::new(Arc::new(BrokenStore)));

    for uri in ["/", "/article?id=1"] {
        let (status, body) = get(app.clone(), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert!(!body.contains("db.internal"), "{uri}");
        assert!(!body.contains("<html"), "{uri}");
    }
}

#[tokio::test]
async fn test_assets_served_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("css")).unwrap();
    std::fs::write(dir.path().join("css/style.css"), "body { color: black; }").unwrap();

    let state = AppState::new(Arc::new(InMemoryStore::new())).with_assets_dir(dir.path());
    let app = create_app(state);
    let (status, body) = get(app.clone(), "/assets/css/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body { color: black; }");

    let (_, page) = get(app, "/").await;
    assert!(page.contains(r#"href="/assets/css/style.css""#));

    let (status, _) = get(app_with(vec![]), "/assets/css/style.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pages_skip_asset_links_without_assets_dir() {
    let app = app_with(vec![article(1, "Plain", (2024, 1, 1))]);

    for uri in ["/", "/article?id=1"] {
        let (status, body) = get(app.clone(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(!body.contains("/assets/"), "{uri}");
    }
}
