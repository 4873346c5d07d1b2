//! Static export: writes every page in every locale, the blog, the sitemap
//! and robots.txt into `EXPORT_DIR` (or the directory given as the first
//! argument).

use anyhow::{bail, Context, Result};
use chrono::Utc;
use living_textbook_site::blog::{get_localized_slug, BlogStore, FileBlogSource};
use living_textbook_site::config::Config;
use living_textbook_site::i18n::Locale;
use living_textbook_site::pages::{self, blog, not_found, HomeTab, Links, PageContext};
use living_textbook_site::seo::{PageKey, SiteConfig};
use living_textbook_site::server::STYLESHEET;
use living_textbook_site::sitemap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("living_textbook_site=info".parse()?)
                .add_directive("export=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.export_dir.clone());

    let catalog = pages::load_catalog(config.messages_dir.as_deref())?;
    let blog_store = BlogStore::new(FileBlogSource::new(&config.blog_posts_file))
        .with_catalog(Arc::new(catalog.clone()));
    blog_store.reload().context("Failed to load blog posts")?;
    let posts = blog_store.snapshot();
    let site = SiteConfig::with_base_url(&config.base_url);
    let links = Links::from(&config);

    info!("Exporting site to {}", out_dir.display());
    let mut written = 0;

    for locale in Locale::all() {
        let ctx = PageContext {
            site: &site,
            catalog: &catalog,
            links: &links,
            locale,
        };

        for page in PageKey::ALL {
            let markup = pages::render_page(&ctx, page, HomeTab::default())?;
            let dir = out_dir.join(locale.code()).join(page.path().trim_start_matches('/'));
            write_file(&dir.join("index.html"), &markup.into_string())?;
            written += 1;
        }

        let blog_dir = out_dir.join(locale.code()).join("blog");
        write_file(
            &blog_dir.join("index.html"),
            &blog::render_index(&ctx, &posts)?.into_string(),
        )?;
        written += 1;

        for post in posts.iter() {
            let slug = get_localized_slug(post, locale.code());
            let post_dir = slug_dir(&blog_dir, slug)
                .with_context(|| format!("Refusing to export post {}", post.id))?;
            write_file(
                &post_dir.join("index.html"),
                &blog::render_post(&ctx, post)?.into_string(),
            )?;
            written += 1;
        }

        if locale.is_canonical() {
            write_file(&out_dir.join("404.html"), &not_found::render(&ctx)?.into_string())?;
        }
    }

    let entries = sitemap::sitemap(&site, Utc::now());
    write_file(&out_dir.join("sitemap.xml"), &sitemap::sitemap_xml(&entries))?;
    write_file(&out_dir.join("robots.txt"), &sitemap::robots_txt(&site))?;
    write_file(&out_dir.join("assets").join("site.css"), STYLESHEET)?;
    write_file(&out_dir.join("index.html"), &root_redirect())?;

    info!(
        "✓ Exported {} page(s), {} sitemap entries to {}",
        written,
        entries.len(),
        out_dir.display()
    );
    Ok(())
}

/// The directory for one post. The slug must be exactly one plain path
/// component so a post can never land outside `blog_dir`.
fn slug_dir(blog_dir: &Path, slug: &str) -> Result<PathBuf> {
    let mut components = Path::new(slug).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == slug && !slug.contains('\\') => {
            Ok(blog_dir.join(name))
        }
        _ => bail!("slug '{}' is not a single path component", slug.escape_debug()),
    }
}

/// Static hosts cannot negotiate; send `/` to the canonical locale.
fn root_redirect() -> String {
    let target = format!("/{}", Locale::canonical());
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\
         <meta http-equiv=\"refresh\" content=\"0; url={0}\">\
         <link rel=\"canonical\" href=\"{0}\"></head>\
         <body><a href=\"{0}\">{0}</a></body></html>",
        target
    )
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Slug Directory Tests ====================

    #[test]
    fn test_slug_dir_plain() {
        let dir = slug_dir(Path::new("out/ja/blog"), "キャンバス入門").expect("valid slug");
        assert_eq!(dir, Path::new("out/ja/blog/キャンバス入門"));
    }

    #[test]
    fn test_slug_dir_rejects_traversal() {
        assert!(slug_dir(Path::new("out/en/blog"), "..").is_err());
        assert!(slug_dir(Path::new("out/en/blog"), ".").is_err());
        assert!(slug_dir(Path::new("out/en/blog"), "a/b").is_err());
        assert!(slug_dir(Path::new("out/en/blog"), "a\\b").is_err());
        assert!(slug_dir(Path::new("out/en/blog"), "/abs").is_err());
        assert!(slug_dir(Path::new("out/en/blog"), "").is_err());
    }
}
