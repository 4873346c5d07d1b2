//! Document shell shared by every page: `<head>` metadata, structured data,
//! header navigation with the language switcher, and the footer.

use crate::i18n::{KeySpec, Locale};
use crate::jsonld;
use crate::pages::PageContext;
use crate::seo::{Metadata, PageKey};
use anyhow::Result;
use chrono::{Datelike, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const STYLESHEET_PATH: &str = "/assets/site.css";

pub const REQUIRED: &[KeySpec] = &[
    KeySpec::text("common", "nav.home"),
    KeySpec::text("common", "nav.features"),
    KeySpec::text("common", "nav.educators"),
    KeySpec::text("common", "nav.learners"),
    KeySpec::text("common", "nav.blog"),
    KeySpec::text("common", "nav.login"),
    KeySpec::text("common", "nav.language"),
    KeySpec::text("common", "footer.tagline"),
    KeySpec::text("common", "footer.rights"),
];

/// Which navigation entry is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Page(PageKey),
    Blog,
}

/// A page body together with its head metadata.
#[derive(Debug, Clone)]
pub struct Document {
    pub metadata: Metadata,
    /// Page-specific JSON-LD, already serialized
    pub structured_data: Vec<String>,
    pub active: Option<NavSection>,
    /// Content of the robots meta tag
    pub robots: &'static str,
    pub body: Markup,
}

impl Document {
    pub fn new(metadata: Metadata, body: Markup) -> Self {
        Self {
            metadata,
            structured_data: Vec::new(),
            active: None,
            robots: "index, follow",
            body,
        }
    }

    pub fn active(mut self, section: NavSection) -> Self {
        self.active = Some(section);
        self
    }

    /// Keep the page out of search indexes.
    pub fn noindex(mut self) -> Self {
        self.robots = "noindex, follow";
        self
    }

    pub fn structured_data(mut self, json: String) -> Self {
        self.structured_data.push(json);
        self
    }
}

pub fn render(ctx: &PageContext, doc: Document) -> Result<Markup> {
    let graphs = jsonld::site_graphs(ctx.site, ctx.locale.code())?;

    Ok(html! {
        (DOCTYPE)
        html lang=(ctx.locale.code()) {
            head {
                (head(ctx, &doc))
                @for graph in graphs.iter().chain(doc.structured_data.iter()) {
                    script type="application/ld+json" { (PreEscaped(graph)) }
                }
            }
            body {
                (header(ctx, &doc))
                main { (doc.body) }
                (footer(ctx))
            }
        }
    })
}

fn head(ctx: &PageContext, doc: &Document) -> Markup {
    let site = ctx.site;
    let metadata = &doc.metadata;
    let og = &metadata.open_graph;

    html! {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=5";
        title { (site.format_title(&metadata.title)) }
        meta name="description" content=(metadata.description);
        meta name="keywords" content=(site.keywords.join(", "));
        meta name="author" content=(site.creator);
        meta name="creator" content=(site.creator);
        meta name="robots" content=(doc.robots);
        link rel="icon" href="/favicon.png";
        link rel="apple-touch-icon" href="/apple-touch-icon.png";
        link rel="stylesheet" href=(STYLESHEET_PATH);

        link rel="canonical" href=(metadata.alternates.canonical);
        @for link in &metadata.alternates.languages {
            link rel="alternate" hreflang=(link.hreflang) href=(link.href);
        }

        meta property="og:type" content=(og.kind);
        meta property="og:title" content=(og.title);
        meta property="og:description" content=(og.description);
        meta property="og:url" content=(og.url);
        meta property="og:site_name" content=(og.site_name);
        meta property="og:locale" content=(og.locale);
        @for image in &og.images {
            meta property="og:image" content=(image.url);
            meta property="og:image:width" content=(image.width);
            meta property="og:image:height" content=(image.height);
            meta property="og:image:alt" content=(image.alt);
        }

        meta name="twitter:card" content=(metadata.twitter.card);
        meta name="twitter:title" content=(metadata.twitter.title);
        meta name="twitter:description" content=(metadata.twitter.description);
        @for image in &metadata.twitter.images {
            meta name="twitter:image" content=(image);
        }
    }
}

fn header(ctx: &PageContext, doc: &Document) -> Markup {
    let t = ctx.translator("common");
    let nav_items = [
        (NavSection::Page(PageKey::Home), ctx.href(PageKey::Home.path()), t.text("nav.home")),
        (NavSection::Page(PageKey::Features), ctx.href(PageKey::Features.path()), t.text("nav.features")),
        (NavSection::Page(PageKey::Educators), ctx.href(PageKey::Educators.path()), t.text("nav.educators")),
        (NavSection::Page(PageKey::Learners), ctx.href(PageKey::Learners.path()), t.text("nav.learners")),
        (NavSection::Blog, ctx.href("/blog"), t.text("nav.blog")),
    ];

    html! {
        header class="site-header" {
            div class="container header-row" {
                a class="brand" href=(ctx.href("")) { (ctx.site.name) }
                nav class="site-nav" {
                    @for (section, href, label) in &nav_items {
                        @if doc.active == Some(*section) {
                            a href=(href) aria-current="page" class="active" { (label) }
                        } @else {
                            a href=(href) { (label) }
                        }
                    }
                }
                (language_switcher(ctx, doc, &t.text("nav.language")))
                a class="button button-accent login" href=(ctx.links.login_url) { (t.text("nav.login")) }
            }
        }
    }
}

/// Links to the current page in every locale, taken from the hreflang
/// alternates so localized blog slugs are preserved.
fn language_switcher(ctx: &PageContext, doc: &Document, label: &str) -> Markup {
    let links: Vec<(Locale, String)> = Locale::all()
        .into_iter()
        .filter_map(|locale| {
            let href = doc.metadata.alternates.language(locale.code())?;
            let relative = href.strip_prefix(ctx.site.url.as_str()).unwrap_or(href);
            Some((locale, relative.to_string()))
        })
        .collect();

    html! {
        nav class="language-switcher" aria-label=(label) {
            @for (locale, href) in &links {
                @if *locale == ctx.locale {
                    a href=(href) hreflang=(locale.code()) lang=(locale.code()) aria-current="true" class="active" {
                        (locale.native_name())
                    }
                } @else {
                    a href=(href) hreflang=(locale.code()) lang=(locale.code()) { (locale.native_name()) }
                }
            }
        }
    }
}

fn footer(ctx: &PageContext) -> Markup {
    let t = ctx.translator("common");
    let year = Utc::now().year();

    html! {
        footer class="site-footer" {
            div class="container" {
                p class="footer-tagline" { (t.text("footer.tagline")) }
                p class="footer-rights" {
                    "© " (year) " " (ctx.site.organization.name) ". " (t.text("footer.rights"))
                }
            }
        }
    }
}
