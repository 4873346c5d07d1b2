//! Localized 404 page.

use crate::i18n::KeySpec;
use crate::pages::components::{button_link, ButtonStyle};
use crate::pages::layout::{self, Document};
use crate::pages::PageContext;
use crate::seo::build_metadata;
use anyhow::Result;
use maud::{html, Markup};

pub const REQUIRED: &[KeySpec] = &[
    KeySpec::text("common", "notFound.title"),
    KeySpec::text("common", "notFound.description"),
    KeySpec::text("common", "notFound.backHome"),
];

pub fn render(ctx: &PageContext) -> Result<Markup> {
    let t = ctx.translator("common");
    let title = t.text("notFound.title");
    let description = t.text("notFound.description");
    let metadata = build_metadata(ctx.site, &title, &description, ctx.locale.code(), "");

    let body = html! {
        section class="section section-hero" {
            div class="container center" {
                p class="eyebrow" { "404" }
                h1 { (title) }
                p class="hero-subtitle" { (description) }
                (button_link(&ctx.href(""), &t.text("notFound.backHome"), ButtonStyle::Accent))
            }
        }
    };

    layout::render(ctx, Document::new(metadata, body).noindex())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Locale};
    use crate::pages::Links;
    use crate::seo::SiteConfig;

    #[test]
    fn test_not_found_is_localized_and_noindex() {
        let site = SiteConfig::default();
        let catalog = Catalog::embedded().expect("catalog");
        let links = Links::default();
        let ctx = PageContext {
            site: &site,
            catalog: &catalog,
            links: &links,
            locale: Locale::KOREAN,
        };

        let html = render(&ctx).expect("render").into_string();
        assert!(html.contains("페이지를 찾을 수 없습니다"));
        assert!(html.contains("<meta name=\"robots\" content=\"noindex, follow\">"));
        assert!(html.contains("href=\"/ko\""));
    }
}
