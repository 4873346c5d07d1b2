//! Blog index and post pages.
//!
//! Post metadata comes from the [`BlogStore`](crate::blog::BlogStore)
//! snapshot; post text comes from the catalog under `blog.posts.{id}`.

use crate::blog::{get_localized_slug, BlogPostMeta};
use crate::i18n::{KeySpec, Locale, Translator};
use crate::jsonld;
use crate::pages::components::{fade_in, icon, stagger, Icon};
use crate::pages::layout::{self, Document, NavSection};
use crate::pages::PageContext;
use crate::seo::{build_metadata, Metadata, OgImage};
use anyhow::Result;
use maud::{html, Markup};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

const NS: &str = "blog";

pub const INDEX_PATH: &str = "/blog";

/// Characters escaped in a slug path segment. Non-ASCII is always escaped.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub const REQUIRED: &[KeySpec] = &[
    KeySpec::text(NS, "pageTitle"),
    KeySpec::text(NS, "pageSubtitle"),
    KeySpec::text(NS, "backToBlog"),
    KeySpec::text(NS, "readMore"),
    KeySpec::text(NS, "noPosts"),
];

/// Path of a post below the locale segment, with its slug percent-encoded.
pub fn post_path(post: &BlogPostMeta, locale: &str) -> String {
    let slug = get_localized_slug(post, locale);
    format!("{}/{}", INDEX_PATH, utf8_percent_encode(slug, SEGMENT))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub href: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub category: String,
    pub read_time: String,
    pub author: String,
    pub hero_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogIndex {
    pub title: String,
    pub subtitle: String,
    pub read_more: String,
    pub no_posts: String,
    pub posts: Vec<PostSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPostPage {
    pub title: String,
    pub excerpt: String,
    pub paragraphs: Vec<String>,
    pub back_label: String,
    pub back_href: String,
    pub date: String,
    pub category: String,
    pub read_time: String,
    pub author: String,
    pub hero_image: Option<String>,
}

fn post_text(t: &Translator, post: &BlogPostMeta, field: &str) -> String {
    t.text(&format!("posts.{}.{}", post.id, field))
}

pub fn index_model(ctx: &PageContext, posts: &[BlogPostMeta]) -> BlogIndex {
    let t = ctx.translator(NS);

    BlogIndex {
        title: t.text("pageTitle"),
        subtitle: t.text("pageSubtitle"),
        read_more: t.text("readMore"),
        no_posts: t.text("noPosts"),
        posts: posts
            .iter()
            .map(|post| PostSummary {
                href: ctx.href(&post_path(post, ctx.locale.code())),
                title: post_text(&t, post, "title"),
                excerpt: post_text(&t, post, "excerpt"),
                date: post.date.clone(),
                category: post.category.clone(),
                read_time: post.read_time.clone(),
                author: post.author.clone(),
                hero_image: post.hero_image.clone(),
            })
            .collect(),
    }
}

pub fn post_model(ctx: &PageContext, post: &BlogPostMeta) -> BlogPostPage {
    let t = ctx.translator(NS);
    let content = post_text(&t, post, "content");

    BlogPostPage {
        title: post_text(&t, post, "title"),
        excerpt: post_text(&t, post, "excerpt"),
        paragraphs: content
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
            .map(str::to_string)
            .collect(),
        back_label: t.text("backToBlog"),
        back_href: ctx.href(INDEX_PATH),
        date: post.date.clone(),
        category: post.category.clone(),
        read_time: post.read_time.clone(),
        author: post.author.clone(),
        hero_image: post.hero_image.clone(),
    }
}

pub fn render_index(ctx: &PageContext, posts: &[BlogPostMeta]) -> Result<Markup> {
    let page = index_model(ctx, posts);
    let metadata = build_metadata(
        ctx.site,
        &page.title,
        &page.subtitle,
        ctx.locale.code(),
        INDEX_PATH,
    );

    let body = html! {
        section class="section section-hero" {
            div class="container center" {
                (fade_in(0, html! { h1 { (page.title) } }))
                (fade_in(100, html! { p class="hero-subtitle" { (page.subtitle) } }))
            }
        }
        section class="section" {
            div class="container" {
                @if page.posts.is_empty() {
                    p class="center muted" { (page.no_posts) }
                } @else {
                    div class="grid grid-3" {
                        @for (i, post) in page.posts.iter().enumerate() {
                            (fade_in(stagger(i, 100), post_card(post, &page.read_more)))
                        }
                    }
                }
            }
        }
    };

    layout::render(ctx, Document::new(metadata, body).active(NavSection::Blog))
}

fn post_card(post: &PostSummary, read_more: &str) -> Markup {
    html! {
        article class="card post-card" {
            @if let Some(image) = &post.hero_image {
                img class="post-image" src=(image) alt=(post.title) loading="lazy";
            }
            span class="eyebrow" { (post.category) }
            h3 { a href=(post.href) { (post.title) } }
            p { (post.excerpt) }
            p class="muted post-meta" {
                time datetime=(post.date) { (post.date) } " · " (post.read_time)
            }
            a class="read-more" href=(post.href) { (read_more) " " (icon(Icon::ArrowRight)) }
        }
    }
}

/// Metadata for a post, with each alternate pointing at that locale's slug.
fn post_metadata(ctx: &PageContext, post: &BlogPostMeta, page: &BlogPostPage) -> Metadata {
    let locale = ctx.locale.code();
    let mut metadata = build_metadata(
        ctx.site,
        &page.title,
        &page.excerpt,
        locale,
        &post_path(post, locale),
    );

    for link in metadata.alternates.languages.iter_mut() {
        let code = if link.hreflang == "x-default" {
            Locale::canonical().code()
        } else {
            link.hreflang.as_str()
        };
        link.href = ctx.site.locale_url(code, &post_path(post, code));
    }

    metadata.open_graph.kind = "article";
    if let Some(image) = &post.hero_image {
        metadata.open_graph.images = vec![OgImage {
            url: image.clone(),
            width: 1200,
            height: 630,
            alt: page.title.clone(),
        }];
        metadata.twitter.images = vec![image.clone()];
    }

    metadata
}

pub fn render_post(ctx: &PageContext, post: &BlogPostMeta) -> Result<Markup> {
    let page = post_model(ctx, post);
    let metadata = post_metadata(ctx, post, &page);
    let article = jsonld::to_script_json(&jsonld::blog_posting(
        ctx.site,
        post,
        &page.title,
        &page.excerpt,
        ctx.locale.code(),
        &metadata.alternates.canonical,
    ))?;

    let body = html! {
        article class="section post" {
            div class="container narrow" {
                a class="back-link" href=(page.back_href) { "← " (page.back_label) }
                header class="post-header" {
                    span class="eyebrow" { (page.category) }
                    h1 { (page.title) }
                    p class="muted post-meta" {
                        (page.author) " · "
                        time datetime=(page.date) { (page.date) }
                        " · " (page.read_time)
                    }
                }
                @if let Some(image) = &page.hero_image {
                    img class="post-hero" src=(image) alt=(page.title);
                }
                div class="post-body" {
                    @for paragraph in &page.paragraphs {
                        p { (paragraph) }
                    }
                }
            }
        }
    };

    let doc = Document::new(metadata, body)
        .active(NavSection::Blog)
        .structured_data(article);
    layout::render(ctx, doc)
}
