use anyhow::{Context, Result};
use living_textbook_site::blog::{BlogStore, FileBlogSource};
use living_textbook_site::config::Config;
use living_textbook_site::pages;
use living_textbook_site::scheduler;
use living_textbook_site::server::{self, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("living_textbook_site=info".parse()?),
        )
        .init();

    info!("Starting The Living Textbook site");

    let config = Config::from_env()?;
    let catalog = pages::load_catalog(config.messages_dir.as_deref())?;

    let blog = BlogStore::new(FileBlogSource::new(&config.blog_posts_file))
        .with_catalog(Arc::new(catalog.clone()));
    blog.reload().context("Failed to load blog posts")?;
    let blog = Arc::new(blog);
    let _scheduler = scheduler::start_scheduler(&config.blog_reload_schedule, Arc::clone(&blog))
        .await
        .context("Failed to start blog reload scheduler")?;

    if config.admin_api_key.is_none() {
        info!("ADMIN_API_KEY not set, blog reload endpoint disabled");
    }

    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState::new(config, catalog, blog));
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
