//! Blog post metadata and slug resolution.
//!
//! Post metadata is written by an external publishing pipeline, newest post
//! first. The site only reads it: a [`BlogStore`] holds an immutable snapshot
//! and replaces it wholesale on [`BlogStore::reload`].

use crate::error::SiteError;
use crate::i18n::{Catalog, Locale};
use chrono::NaiveDate;
use percent_encoding::percent_decode_str;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, RwLock};
use tracing::{debug, info, warn};

/// Summary of one blog post. Title, excerpt and body live in the
/// translation catalog under `blog.posts.{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostMeta {
    /// Format: `loka-{timestamp}`
    pub id: String,
    /// URL-safe base slug, valid in every locale
    pub slug: String,
    /// Optional per-locale slugs
    #[serde(default, alias = "localizedSlugs", skip_serializing_if = "BTreeMap::is_empty")]
    pub slugs: BTreeMap<String, String>,
    /// ISO date (`YYYY-MM-DD`)
    pub date: String,
    pub category: String,
    pub read_time: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
}

/// The slug to link to in `locale`.
pub fn get_localized_slug<'a>(post: &'a BlogPostMeta, locale: &str) -> &'a str {
    if locale == "en" {
        return &post.slug;
    }
    post.slugs
        .get(locale)
        .filter(|slug| !slug.is_empty())
        .map(String::as_str)
        .unwrap_or(&post.slug)
}

/// Find a post by a (possibly percent-encoded) slug.
///
/// In `en` only base slugs match. Elsewhere the locale's own slug or the base
/// slug match. A slug that does not decode to UTF-8 matches nothing.
pub fn get_blog_post<'a>(
    posts: &'a [BlogPostMeta],
    slug: &str,
    locale: &str,
) -> Option<&'a BlogPostMeta> {
    let decoded = match percent_decode_str(slug).decode_utf8() {
        Ok(decoded) => decoded,
        Err(err) => {
            debug!("Undecodable blog slug '{}': {}", slug, err);
            return None;
        }
    };

    posts.iter().find(|post| {
        if locale == "en" {
            return post.slug == decoded;
        }
        post.slugs.get(locale).is_some_and(|s| *s == decoded) || post.slug == decoded
    })
}

static ID_REGEX: OnceLock<Regex> = OnceLock::new();

fn id_regex() -> &'static Regex {
    ID_REGEX.get_or_init(|| Regex::new(r"^loka-\d+$").expect("valid id regex"))
}

/// A slug is used as one URL segment and one directory name on export, so it
/// may not be a relative path step or contain separators or control characters.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.chars().any(|c| c == '/' || c == '\\' || c.is_control())
}

/// Check a post list before it replaces the current snapshot.
///
/// Empty ids or slugs and slugs that are not a single path segment are
/// errors. Other irregularities are returned as warnings and do not block
/// the reload.
pub fn validate_posts(posts: &[BlogPostMeta]) -> Result<Vec<String>, SiteError> {
    let mut warnings = Vec::new();
    let mut seen_slugs = HashSet::new();

    for (index, post) in posts.iter().enumerate() {
        if post.id.trim().is_empty() || post.slug.trim().is_empty() {
            return Err(SiteError::InvalidBlogData(format!(
                "post #{} has an empty id or slug",
                index
            )));
        }
        let localized = post.slugs.values().filter(|slug| !slug.is_empty());
        if let Some(slug) = std::iter::once(&post.slug)
            .chain(localized)
            .find(|slug| !is_valid_slug(slug))
        {
            return Err(SiteError::InvalidBlogData(format!(
                "{}: slug '{}' is not a single path segment",
                post.id,
                slug.escape_debug()
            )));
        }
        if !id_regex().is_match(&post.id) {
            warnings.push(format!("{}: id is not in loka-<timestamp> form", post.id));
        }
        if NaiveDate::parse_from_str(&post.date, "%Y-%m-%d").is_err() {
            warnings.push(format!("{}: date '{}' is not YYYY-MM-DD", post.id, post.date));
        }
        let own: BTreeSet<&str> = std::iter::once(post.slug.as_str())
            .chain(post.slugs.values().map(String::as_str))
            .filter(|slug| !slug.is_empty())
            .collect();
        for slug in own {
            if !seen_slugs.insert(slug) {
                warnings.push(format!("{}: slug '{}' is used by another post", post.id, slug));
            }
        }
    }

    Ok(warnings)
}

/// Posts whose title is missing from the canonical locale's messages under
/// `blog.posts.{id}.title`. Such posts still render, with the key as text.
pub fn missing_post_text(posts: &[BlogPostMeta], catalog: &Catalog) -> Vec<String> {
    let canonical = Locale::canonical();
    posts
        .iter()
        .filter(|post| {
            let key = format!("blog.posts.{}.title", post.id);
            !catalog
                .lookup(canonical.code(), &key)
                .is_some_and(|value| value.as_str().is_some_and(|s| !s.is_empty()))
        })
        .map(|post| format!("{}: no '{}' title in blog.posts", post.id, canonical))
        .collect()
}

/// Where post metadata comes from.
pub trait BlogSource: Send + Sync {
    fn load(&self) -> Result<Vec<BlogPostMeta>, SiteError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// A JSON array of [`BlogPostMeta`] on disk. A missing file is an empty list.
pub struct FileBlogSource {
    path: PathBuf,
}

impl FileBlogSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl BlogSource for FileBlogSource {
    fn load(&self) -> Result<Vec<BlogPostMeta>, SiteError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No blog posts file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(SiteError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| SiteError::Json {
            origin: self.path.display().to_string(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A fixed in-memory list.
pub struct StaticBlogSource {
    posts: Vec<BlogPostMeta>,
}

impl StaticBlogSource {
    pub fn new(posts: Vec<BlogPostMeta>) -> Self {
        Self { posts }
    }
}

impl BlogSource for StaticBlogSource {
    fn load(&self) -> Result<Vec<BlogPostMeta>, SiteError> {
        Ok(self.posts.clone())
    }

    fn describe(&self) -> String {
        format!("{} static post(s)", self.posts.len())
    }
}

/// Read-only view of the post list with an explicit reload boundary.
pub struct BlogStore {
    source: Box<dyn BlogSource>,
    catalog: Option<Arc<Catalog>>,
    posts: RwLock<Arc<Vec<BlogPostMeta>>>,
}

impl BlogStore {
    /// A store with an empty snapshot; call [`reload`](Self::reload) to fill it.
    pub fn new(source: impl BlogSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            catalog: None,
            posts: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Check post text against `catalog` on every reload.
    pub fn with_catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Create a store and load the source once.
    pub fn load(source: impl BlogSource + 'static) -> Result<Self, SiteError> {
        let store = Self::new(source);
        store.reload()?;
        Ok(store)
    }

    /// The current post list. Cheap; callers keep it for the whole request.
    pub fn snapshot(&self) -> Arc<Vec<BlogPostMeta>> {
        let guard = self.posts.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Re-read the source and swap in the new list.
    ///
    /// On error the previous snapshot stays in place.
    pub fn reload(&self) -> Result<usize, SiteError> {
        let posts = self.source.load()?;
        for warning in validate_posts(&posts)? {
            warn!("Blog data: {}", warning);
        }
        if let Some(catalog) = &self.catalog {
            for warning in missing_post_text(&posts, catalog) {
                warn!("Blog text: {}", warning);
            }
        }

        let count = posts.len();
        let mut guard = self.posts.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(posts);
        info!("Loaded {} blog post(s) from {}", count, self.source.describe());
        Ok(count)
    }

    pub fn find(&self, slug: &str, locale: &str) -> Option<BlogPostMeta> {
        get_blog_post(&self.snapshot(), slug, locale).cloned()
    }
}
