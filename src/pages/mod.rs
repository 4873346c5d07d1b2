//! Server-rendered pages.
//!
//! Each page reads its translations into a plain model struct and renders
//! that model with maud. Every key a page reads is declared in its
//! `REQUIRED` list so the catalog can be checked before the server starts.

pub mod blog;
pub mod components;
pub mod educators;
pub mod features;
pub mod home;
pub mod layout;
pub mod learners;
pub mod not_found;

use crate::config::Config;
use crate::error::SiteError;
use crate::i18n::{Catalog, CatalogValidator, KeySpec, Locale, Translator};
use crate::seo::{normalize_path, PageKey, SiteConfig};
use anyhow::Result;
use maud::Markup;
use std::path::Path;
use tracing::{info, warn};

pub use home::HomeTab;

/// Outbound links that differ between deployments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    pub login_url: String,
    pub contact_url: String,
}

impl Default for Links {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for Links {
    fn from(config: &Config) -> Self {
        Self {
            login_url: config.login_url.clone(),
            contact_url: config.contact_url.clone(),
        }
    }
}

/// Everything a page render needs.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub site: &'a SiteConfig,
    pub catalog: &'a Catalog,
    pub links: &'a Links,
    pub locale: Locale,
}

impl<'a> PageContext<'a> {
    pub fn translator(&self, namespace: &'a str) -> Translator<'a> {
        self.catalog.translator(self.locale, namespace)
    }

    /// Site-relative URL of a path in the current locale.
    pub fn href(&self, path: &str) -> String {
        format!("/{}{}", self.locale.code(), normalize_path(path))
    }
}

/// Every translation key read by any page, for load-time validation.
pub fn required_keys() -> Vec<KeySpec> {
    [
        layout::REQUIRED,
        home::REQUIRED,
        features::REQUIRED,
        educators::REQUIRED,
        learners::REQUIRED,
        blog::REQUIRED,
        not_found::REQUIRED,
    ]
    .concat()
}

/// Load the catalog (embedded, or from `messages_dir`) and check it against
/// [`required_keys`]. Gaps in the canonical locale are fatal; other gaps are
/// logged.
pub fn load_catalog(messages_dir: Option<&Path>) -> Result<Catalog, SiteError> {
    let catalog = match messages_dir {
        Some(dir) => {
            info!("Loading messages from {}", dir.display());
            Catalog::from_dir(dir)?
        }
        None => Catalog::embedded()?,
    };

    let report = CatalogValidator::validate(&catalog, &required_keys());
    for warning in &report.warnings {
        warn!("Translation gap: {}", warning);
    }
    if report.has_errors() {
        return Err(SiteError::InvalidCatalog(report.errors));
    }

    info!("✓ Translation catalog validated");
    Ok(catalog)
}

/// Render one of the static marketing pages.
pub fn render_page(ctx: &PageContext, page: PageKey, tab: HomeTab) -> Result<Markup> {
    match page {
        PageKey::Home => home::render(ctx, tab),
        PageKey::Features => features::render(ctx),
        PageKey::Educators => educators::render(ctx),
        PageKey::Learners => learners::render(ctx),
    }
}
