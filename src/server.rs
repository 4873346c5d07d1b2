//! HTTP surface: localized pages, sitemap, health and admin endpoints.

use crate::blog::BlogStore;
use crate::config::Config;
use crate::error::AppError;
use crate::i18n::{Catalog, Locale, TranslationMetrics};
use crate::pages::{self, blog, not_found, HomeTab, Links, PageContext};
use crate::scheduler::run_reload_job;
use crate::security::verify_api_key;
use crate::seo::{PageKey, SiteConfig};
use crate::sitemap;
use axum::extract::{Path, Query, RawPathParams, State};
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

pub const STYLESHEET: &str = include_str!("../assets/site.css");

/// Shared, read-only request state. The blog store is the only part that
/// changes at runtime, through its own reload boundary.
pub struct AppState {
    pub config: Config,
    pub site: SiteConfig,
    pub catalog: Catalog,
    pub links: Links,
    pub blog: Arc<BlogStore>,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog, blog: Arc<BlogStore>) -> Self {
        Self {
            site: SiteConfig::with_base_url(&config.base_url),
            links: Links::from(&config),
            config,
            catalog,
            blog,
        }
    }

    pub fn page_context(&self, locale: Locale) -> PageContext<'_> {
        PageContext {
            site: &self.site,
            catalog: &self.catalog,
            links: &self.links,
            locale,
        }
    }

    /// The localized 404 page as an error response.
    fn not_found(&self, locale: Locale) -> AppError {
        match not_found::render(&self.page_context(locale)) {
            Ok(markup) => AppError::NotFound(markup.into_string()),
            Err(err) => AppError::Internal(err),
        }
    }

    /// Validate the `{locale}` path segment; unknown codes get the
    /// canonical-locale 404 page.
    fn locale(&self, code: &str) -> Result<Locale, AppError> {
        Locale::from_code(code).map_err(|err| {
            debug!("Rejected locale segment: {}", err);
            self.not_found(Locale::canonical())
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/robots.txt", get(robots_txt))
        .route("/assets/site.css", get(stylesheet))
        .route("/admin/blog/reload", post(reload_blog))
        .route("/:locale", get(home))
        .route("/:locale/features", get(features))
        .route("/:locale/for-educators", get(educators))
        .route("/:locale/for-learners", get(learners))
        .route("/:locale/blog", get(blog_index))
        .route("/:locale/blog/:slug", get(blog_post))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root(headers: HeaderMap) -> Redirect {
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let locale = Locale::negotiate(accept_language);
    Redirect::temporary(&format!("/{}", locale))
}

#[derive(Debug, Deserialize)]
struct HomeQuery {
    tab: Option<String>,
}

async fn home(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
    Query(query): Query<HomeQuery>,
) -> Result<Html<String>, AppError> {
    let tab = HomeTab::parse(query.tab.as_deref());
    render_page(&state, &locale, PageKey::Home, tab)
}

async fn features(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
) -> Result<Html<String>, AppError> {
    render_page(&state, &locale, PageKey::Features, HomeTab::default())
}

async fn educators(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
) -> Result<Html<String>, AppError> {
    render_page(&state, &locale, PageKey::Educators, HomeTab::default())
}

async fn learners(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
) -> Result<Html<String>, AppError> {
    render_page(&state, &locale, PageKey::Learners, HomeTab::default())
}

fn render_page(
    state: &AppState,
    code: &str,
    page: PageKey,
    tab: HomeTab,
) -> Result<Html<String>, AppError> {
    let locale = state.locale(code)?;
    let markup = pages::render_page(&state.page_context(locale), page, tab)?;
    Ok(Html(markup.into_string()))
}

async fn blog_index(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
) -> Result<Html<String>, AppError> {
    let locale = state.locale(&locale)?;
    let posts = state.blog.snapshot();
    let markup = blog::render_index(&state.page_context(locale), &posts)?;
    Ok(Html(markup.into_string()))
}

/// Raw params keep the slug percent-encoded; slug lookup decodes it once.
async fn blog_post(
    State(state): State<Arc<AppState>>,
    params: RawPathParams,
) -> Result<Html<String>, AppError> {
    let mut locale = "";
    let mut slug = "";
    for (key, value) in &params {
        match key {
            "locale" => locale = value,
            "slug" => slug = value,
            _ => {}
        }
    }

    let locale = state.locale(locale)?;
    let posts = state.blog.snapshot();
    let post = crate::blog::get_blog_post(&posts, slug, locale.code())
        .ok_or_else(|| state.not_found(locale))?;

    let markup = blog::render_post(&state.page_context(locale), post)?;
    Ok(Html(markup.into_string()))
}

async fn sitemap_xml(State(state): State<Arc<AppState>>) -> Response {
    let entries = sitemap::sitemap(&state.site, Utc::now());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap::sitemap_xml(&entries),
    )
        .into_response()
}

async fn robots_txt(State(state): State<Arc<AppState>>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        sitemap::robots_txt(&state.site),
    )
        .into_response()
}

async fn stylesheet() -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        STYLESHEET,
    )
        .into_response()
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let locales: Vec<&str> = Locale::all().iter().map(|l| l.code()).collect();

    Json(json!({
        "status": "ok",
        "locales": locales,
        "blog_posts": state.blog.snapshot().len(),
        "translations": TranslationMetrics::global().report(),
    }))
}

async fn reload_blog(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let Some(expected) = state.config.admin_api_key.as_deref() else {
        return Err(AppError::Disabled);
    };
    if !verify_api_key(&headers, expected) {
        return Err(AppError::Unauthorized);
    }

    let count = run_reload_job(&state.blog).await?;
    info!("Blog reloaded on request: {} post(s)", count);
    Ok(Json(json!({ "status": "ok", "posts": count })))
}

async fn fallback(State(state): State<Arc<AppState>>) -> AppError {
    state.not_found(Locale::canonical())
}
