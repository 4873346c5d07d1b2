//! Features page: hero and a grid of feature cards.

use crate::i18n::KeySpec;
use crate::pages::components::{fade_in, hero, icon, icon_at, stagger, Icon};
use crate::pages::home::Card;
use crate::pages::layout::{self, Document, NavSection};
use crate::pages::PageContext;
use crate::seo::{get_page_seo, PageKey};
use anyhow::Result;
use maud::{html, Markup};

const NS: &str = "features";

pub const REQUIRED: &[KeySpec] = &[
    KeySpec::text(NS, "hero.title"),
    KeySpec::text(NS, "hero.subtitle"),
    KeySpec::records(NS, "cards", &["title", "description"]),
];

/// Icon for each card position; cards past the end get [`Icon::Code`].
pub const FEATURE_ICONS: [Icon; 9] = [
    Icon::PenLine,
    Icon::Brain,
    Icon::Users,
    Icon::Calendar,
    Icon::RefreshCw,
    Icon::Award,
    Icon::Globe,
    Icon::Key,
    Icon::Code,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturesPage {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<FeatureCard>,
}

pub fn model(ctx: &PageContext) -> FeaturesPage {
    let t = ctx.translator(NS);
    let cards: Vec<Card> = t.records("cards");

    FeaturesPage {
        title: t.text("hero.title"),
        subtitle: t.text("hero.subtitle"),
        cards: cards
            .into_iter()
            .enumerate()
            .map(|(i, card)| FeatureCard {
                icon: icon_at(&FEATURE_ICONS, i, Icon::Code),
                title: card.title,
                description: card.description,
            })
            .collect(),
    }
}

pub fn render(ctx: &PageContext) -> Result<Markup> {
    let page = model(ctx);
    let metadata = get_page_seo(ctx.site, PageKey::Features, ctx.locale.code(), None);

    let body = html! {
        (hero(&page.title, &page.subtitle))
        section class="section section-muted" {
            div class="container" {
                div class="grid grid-3" {
                    @for (i, card) in page.cards.iter().enumerate() {
                        (fade_in(stagger(i, 80), html! {
                            article class="card feature" {
                                div class="icon-tile" { (icon(card.icon)) }
                                h3 { (card.title) }
                                p { (card.description) }
                            }
                        }))
                    }
                }
            }
        }
    };

    layout::render(ctx, Document::new(metadata, body).active(NavSection::Page(PageKey::Features)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Locale};
    use crate::pages::Links;
    use crate::seo::SiteConfig;
    use serde_json::json;

    fn ctx_parts() -> (SiteConfig, Links) {
        (SiteConfig::default(), Links::default())
    }

    #[test]
    fn test_icons_follow_card_order() {
        let (site, links) = ctx_parts();
        let catalog = Catalog::embedded().expect("catalog");
        let ctx = PageContext {
            site: &site,
            catalog: &catalog,
            links: &links,
            locale: Locale::ENGLISH,
        };

        let page = model(&ctx);
        assert_eq!(page.cards.len(), 9);
        let icons: Vec<Icon> = page.cards.iter().map(|c| c.icon).collect();
        assert_eq!(icons, FEATURE_ICONS.to_vec());
    }

    #[test]
    fn test_extra_cards_use_default_icon() {
        let (site, links) = ctx_parts();
        let cards: Vec<_> = (0..11)
            .map(|i| json!({ "title": format!("Card {}", i), "description": "d" }))
            .collect();
        let catalog = Catalog::from_trees([(
            "en",
            json!({ "features": { "hero": { "title": "T", "subtitle": "S" }, "cards": cards } }),
        )]);
        let ctx = PageContext {
            site: &site,
            catalog: &catalog,
            links: &links,
            locale: Locale::ENGLISH,
        };

        let page = model(&ctx);
        assert_eq!(page.cards.len(), 11);
        assert_eq!(page.cards[9].icon, Icon::Code);
        assert_eq!(page.cards[10].icon, Icon::Code);
    }

    #[test]
    fn test_render_staggers_cards() {
        let (site, links) = ctx_parts();
        let catalog = Catalog::embedded().expect("catalog");
        let ctx = PageContext {
            site: &site,
            catalog: &catalog,
            links: &links,
            locale: Locale::JAPANESE,
        };

        let html = render(&ctx).expect("render").into_string();
        assert!(html.contains("data-delay=\"640\""));
        assert!(html.contains("data-icon=\"refresh-cw\""));
        assert!(html.contains("/ja/features"));
    }
}
