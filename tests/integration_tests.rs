//! Integration tests for the site's HTTP surface
//!
//! These tests drive the full router in-process with `tower::ServiceExt`,
//! using the embedded translation catalog and fixture blog data.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use std::collections::BTreeMap;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use living_textbook_site::blog::{BlogPostMeta, BlogStore, FileBlogSource, StaticBlogSource};
use living_textbook_site::config::Config;
use living_textbook_site::i18n::{Catalog, CatalogValidator};
use living_textbook_site::pages;
use living_textbook_site::server::{router, AppState};

// ==================== Test Helpers ====================

const LOCALES: [&str; 3] = ["en", "ja", "ko"];
const PAGE_PATHS: [&str; 6] = ["", "/features", "/for-educators", "/for-learners", "/blog", "?tab=learner"];

fn fixture_post() -> BlogPostMeta {
    let mut slugs = BTreeMap::new();
    slugs.insert("ja".to_string(), "キャンバス入門".to_string());
    BlogPostMeta {
        id: "loka-1771200000".to_string(),
        slug: "canvas-101".to_string(),
        slugs,
        date: "2026-02-15".to_string(),
        category: "Platform".to_string(),
        read_time: "5 min read".to_string(),
        author: "Loka Team".to_string(),
        hero_image: None,
    }
}

fn test_config() -> Config {
    Config {
        base_url: "http://localhost:8080".to_string(),
        admin_api_key: Some("test-api-key".to_string()),
        ..Config::default()
    }
}

fn create_app(config: Config, blog: BlogStore) -> Router {
    let catalog = Catalog::embedded().expect("embedded catalog");
    router(Arc::new(AppState::new(config, catalog, Arc::new(blog))))
}

fn create_test_app() -> Router {
    let blog = BlogStore::load(StaticBlogSource::new(vec![fixture_post()])).expect("blog");
    create_app(test_config(), blog)
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

// ==================== Page Tests ====================

#[tokio::test]
async fn test_every_page_renders_in_every_locale() {
    for locale in LOCALES {
        for path in PAGE_PATHS {
            let uri = format!("/{}{}", locale, path);
            let (status, body) = get(create_test_app(), &uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert!(body.contains(&format!("<html lang=\"{}\">", locale)), "{}", uri);
        }
    }
}

#[tokio::test]
async fn test_unknown_locale_is_english_404() {
    let (status, body) = get(create_test_app(), "/fr/features").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<html lang=\"en\">"));
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let (status, _) = get(create_test_app(), "/en/pricing/enterprise").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_canonical_uses_configured_base_url() {
    let (_, body) = get(create_test_app(), "/ko/for-learners").await;
    assert!(body.contains("<link rel=\"canonical\" href=\"http://localhost:8080/ko/for-learners\">"));
}

#[tokio::test]
async fn test_unknown_tab_falls_back_to_educator() {
    let (status, body) = get(create_test_app(), "/en?tab=admin").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-tab=\"educator\""));
}

// ==================== Redirect Tests ====================

#[tokio::test]
async fn test_root_redirects_by_accept_language() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ACCEPT_LANGUAGE, "ko-KR,ko;q=0.9,en;q=0.8")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/ko");
}

#[tokio::test]
async fn test_root_redirect_defaults_to_english() {
    let response = create_test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.headers()[header::LOCATION], "/en");
}

// ==================== Blog Tests ====================

#[tokio::test]
async fn test_blog_post_by_base_slug() {
    let (status, body) = get(create_test_app(), "/ko/blog/canvas-101").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"@type\":\"BlogPosting\""));
}

#[tokio::test]
async fn test_blog_post_by_encoded_localized_slug() {
    let uri = "/ja/blog/%E3%82%AD%E3%83%A3%E3%83%B3%E3%83%90%E3%82%B9%E5%85%A5%E9%96%80";
    let (status, _) = get(create_test_app(), uri).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_localized_slug_not_valid_in_english() {
    let uri = "/en/blog/%E3%82%AD%E3%83%A3%E3%83%B3%E3%83%90%E3%82%B9%E5%85%A5%E9%96%80";
    let (status, _) = get(create_test_app(), uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_blog_slug_is_localized_404() {
    let (status, body) = get(create_test_app(), "/ja/blog/missing-post").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<html lang=\"ja\">"));
}

#[tokio::test]
async fn test_blog_index_links_localized_slug() {
    let (_, body) = get(create_test_app(), "/ja/blog").await;
    assert!(body.contains("href=\"/ja/blog/%E3%82%AD"));
}

// ==================== Admin Reload Tests ====================

async fn post_reload(app: Router, key: Option<&str>) -> StatusCode {
    let mut request = Request::builder().method("POST").uri("/admin/blog/reload");
    if let Some(key) = key {
        request = request.header("X-API-Key", key);
    }
    app.oneshot(request.body(Body::empty()).expect("request"))
        .await
        .expect("response")
        .status()
}

#[tokio::test]
async fn test_reload_requires_api_key() {
    assert_eq!(post_reload(create_test_app(), None).await, StatusCode::UNAUTHORIZED);
    assert_eq!(
        post_reload(create_test_app(), Some("wrong")).await,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        post_reload(create_test_app(), Some("test-api-key")).await,
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_reload_disabled_without_configured_key() {
    let blog = BlogStore::load(StaticBlogSource::new(Vec::new())).expect("blog");
    let config = Config {
        admin_api_key: None,
        ..test_config()
    };
    let app = create_app(config, blog);

    assert_eq!(post_reload(app, Some("anything")).await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reload_picks_up_new_posts() {
    let temp_dir = TempDir::new().expect("temp dir");
    let posts_file = temp_dir.path().join("blog-posts.json");
    let blog = Arc::new(BlogStore::load(FileBlogSource::new(&posts_file)).expect("blog"));
    let catalog = Catalog::embedded().expect("catalog");
    let app = router(Arc::new(AppState::new(test_config(), catalog, Arc::clone(&blog))));

    let (status, _) = get(app.clone(), "/en/blog/canvas-101").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    std::fs::write(
        &posts_file,
        serde_json::to_string(&vec![fixture_post()]).expect("serialize"),
    )
    .expect("write posts");
    assert_eq!(post_reload(app.clone(), Some("test-api-key")).await, StatusCode::OK);

    let (status, _) = get(app, "/en/blog/canvas-101").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(blog.snapshot().len(), 1);
}

// ==================== Sitemap & Static Tests ====================

#[tokio::test]
async fn test_sitemap_has_twelve_entries() {
    let (status, body) = get(create_test_app(), "/sitemap.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("<url>").count(), 12);
    assert!(body.contains("<loc>http://localhost:8080/ko</loc>"));
}

#[tokio::test]
async fn test_robots_points_at_sitemap() {
    let (status, body) = get(create_test_app(), "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Sitemap: http://localhost:8080/sitemap.xml"));
}

#[tokio::test]
async fn test_stylesheet_served() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .uri("/assets/site.css")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css; charset=utf-8");
}

#[tokio::test]
async fn test_health_reports_state() {
    let (status, body) = get(create_test_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).expect("json");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["locales"], serde_json::json!(["en", "ja", "ko"]));
    assert_eq!(json["blog_posts"], 1);
    assert!(json["translations"]["lookups"].is_number());
}

// ==================== Catalog Tests ====================

#[test]
fn test_embedded_catalog_validates_clean() {
    let catalog = Catalog::embedded().expect("embedded catalog");
    let report = CatalogValidator::validate(&catalog, &pages::required_keys());
    assert!(report.is_clean(), "{:?}", report);
}
