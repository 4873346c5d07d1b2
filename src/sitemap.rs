//! Sitemap generation for the static marketing pages.

use crate::i18n::Locale;
use crate::seo::{AlternateLink, PageKey, SiteConfig};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    pub alternates: SitemapAlternates,
}

/// One link per supported locale, for the same path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapAlternates {
    /// Serialized as an ordered `{hreflang: href}` map
    #[serde(serialize_with = "crate::seo::serialize_links")]
    pub languages: Vec<AlternateLink>,
}

/// One entry per (page, locale), pages in sitemap order, locales in
/// registry order. The root page is crawled weekly with top priority.
pub fn sitemap(site: &SiteConfig, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let locales = Locale::all();
    let mut entries = Vec::with_capacity(PageKey::ALL.len() * locales.len());

    for page in PageKey::ALL {
        let path = page.path();
        let is_root = path.is_empty();

        let alternates = SitemapAlternates {
            languages: locales
                .iter()
                .map(|locale| AlternateLink {
                    hreflang: locale.code().to_string(),
                    href: site.locale_url(locale.code(), path),
                })
                .collect(),
        };

        for locale in &locales {
            entries.push(SitemapEntry {
                url: site.locale_url(locale.code(), path),
                last_modified: now,
                change_frequency: if is_root {
                    ChangeFrequency::Weekly
                } else {
                    ChangeFrequency::Monthly
                },
                priority: if is_root { 1.0 } else { 0.8 },
                alternates: alternates.clone(),
            });
        }
    }

    entries
}

/// Render entries as a sitemaps.org `urlset` with `xhtml:link` alternates.
pub fn sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for entry in entries {
        // Writing into a String cannot fail
        let _ = write!(
            xml,
            "<url>\n<loc>{}</loc>\n<lastmod>{}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{:.1}</priority>\n",
            escape_xml(&entry.url),
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            entry.change_frequency.as_str(),
            entry.priority,
        );
        for link in &entry.alternates.languages {
            let _ = writeln!(
                xml,
                "<xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>",
                escape_xml(&link.hreflang),
                escape_xml(&link.href),
            );
        }
        xml.push_str("</url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// `robots.txt` allowing all crawlers and advertising the sitemap.
pub fn robots_txt(site: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        site.url
    )
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
