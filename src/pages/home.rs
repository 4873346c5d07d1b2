//! Home page.

use crate::i18n::{KeySpec, Translator};
use crate::jsonld::{self, FaqItem};
use crate::pages::components::{
    button_link, check_list, fade_in, fill_percent, icon, progress_bar, stagger, ButtonStyle, Icon,
};
use crate::pages::layout::{self, Document, NavSection};
use crate::pages::PageContext;
use crate::seo::{get_page_seo, PageKey};
use anyhow::Result;
use maud::{html, Markup};
use serde::Deserialize;

const NS: &str = "home";

const CARD_FIELDS: &[&str] = &["title", "description"];
const CANVAS_FIELDS: &[&str] = &["abbr", "title", "description"];
const DIMENSION_FIELDS: &[&str] = &["abbr", "title"];
const TESTIMONIAL_FIELDS: &[&str] = &["quote", "name", "title"];
const FAQ_FIELDS: &[&str] = &["question", "answer"];

pub const REQUIRED: &[KeySpec] = &[
    KeySpec::text(NS, "hero.title"),
    KeySpec::text(NS, "hero.subtitle"),
    KeySpec::text(NS, "hero.primaryCta"),
    KeySpec::text(NS, "hero.secondaryCta"),
    KeySpec::text(NS, "pillars.sectionTitle"),
    KeySpec::text(NS, "pillars.nurture.title"),
    KeySpec::text(NS, "pillars.nurture.subtitle"),
    KeySpec::text(NS, "pillars.nurture.description"),
    KeySpec::list(NS, "pillars.nurture.bullets"),
    KeySpec::text(NS, "pillars.guide.title"),
    KeySpec::text(NS, "pillars.guide.subtitle"),
    KeySpec::text(NS, "pillars.guide.description"),
    KeySpec::list(NS, "pillars.guide.bullets"),
    KeySpec::text(NS, "pillars.accelerate.title"),
    KeySpec::text(NS, "pillars.accelerate.subtitle"),
    KeySpec::text(NS, "pillars.accelerate.description"),
    KeySpec::list(NS, "pillars.accelerate.bullets"),
    KeySpec::text(NS, "byok.title"),
    KeySpec::text(NS, "byok.description"),
    KeySpec::records(NS, "byok.cards", CARD_FIELDS),
    KeySpec::text(NS, "byok.beta"),
    KeySpec::text(NS, "canvas.title"),
    KeySpec::records(NS, "canvas.items", CANVAS_FIELDS),
    KeySpec::text(NS, "canvas.message"),
    KeySpec::text(NS, "assessment.title"),
    KeySpec::text(NS, "assessment.description"),
    KeySpec::text(NS, "assessment.levels"),
    KeySpec::records(NS, "assessment.dimensions", DIMENSION_FIELDS),
    KeySpec::text(NS, "tabs.educatorTab"),
    KeySpec::text(NS, "tabs.learnerTab"),
    KeySpec::list(NS, "tabs.educator.items"),
    KeySpec::text(NS, "tabs.educator.cta"),
    KeySpec::list(NS, "tabs.learner.items"),
    KeySpec::text(NS, "tabs.learner.cta"),
    KeySpec::text(NS, "testimonials.title"),
    KeySpec::records(NS, "testimonials.items", TESTIMONIAL_FIELDS),
    KeySpec::text(NS, "faq.title"),
    KeySpec::records(NS, "faq.items", FAQ_FIELDS),
    KeySpec::text(NS, "finalCta.title"),
    KeySpec::text(NS, "finalCta.primaryCta"),
    KeySpec::text(NS, "finalCta.secondaryCta"),
];

/// Audience selected in the tabbed panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeTab {
    #[default]
    Educator,
    Learner,
}

impl HomeTab {
    /// Parse the `tab` query value; anything unrecognized selects the default.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("learner") => HomeTab::Learner,
            _ => HomeTab::Educator,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HomeTab::Educator => "educator",
            HomeTab::Learner => "learner",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Card {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CanvasItem {
    pub abbr: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dimension {
    pub abbr: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pillar {
    pub icon: Icon,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPanel {
    pub selected: HomeTab,
    pub educator_label: String,
    pub learner_label: String,
    pub items: Vec<String>,
    pub cta: String,
}

/// Resolved content of the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_primary_cta: String,
    pub hero_secondary_cta: String,
    pub pillars_title: String,
    pub pillars: Vec<Pillar>,
    pub byok_title: String,
    pub byok_description: String,
    pub byok_cards: Vec<Card>,
    pub byok_beta: String,
    pub canvas_title: String,
    pub canvas_items: Vec<CanvasItem>,
    pub canvas_message: String,
    pub assessment_title: String,
    pub assessment_description: String,
    pub assessment_levels: String,
    pub dimensions: Vec<Dimension>,
    pub tabs: TabPanel,
    pub testimonials_title: String,
    pub testimonials: Vec<Testimonial>,
    pub faq_title: String,
    pub faq: Vec<FaqItem>,
    pub final_title: String,
    pub final_primary_cta: String,
    pub final_secondary_cta: String,
}

const PILLARS: [(&str, Icon); 3] = [
    ("nurture", Icon::Heart),
    ("guide", Icon::Compass),
    ("accelerate", Icon::Zap),
];

fn pillar(t: &Translator, key: &str, icon: Icon) -> Pillar {
    Pillar {
        icon,
        title: t.text(&format!("pillars.{}.title", key)),
        subtitle: t.text(&format!("pillars.{}.subtitle", key)),
        description: t.text(&format!("pillars.{}.description", key)),
        bullets: t.list(&format!("pillars.{}.bullets", key)),
    }
}

pub fn model(ctx: &PageContext, tab: HomeTab) -> HomePage {
    let t = ctx.translator(NS);
    let selected = tab.as_str();

    HomePage {
        hero_title: t.text("hero.title"),
        hero_subtitle: t.text("hero.subtitle"),
        hero_primary_cta: t.text("hero.primaryCta"),
        hero_secondary_cta: t.text("hero.secondaryCta"),
        pillars_title: t.text("pillars.sectionTitle"),
        pillars: PILLARS
            .iter()
            .map(|(key, icon)| pillar(&t, key, *icon))
            .collect(),
        byok_title: t.text("byok.title"),
        byok_description: t.text("byok.description"),
        byok_cards: t.records("byok.cards"),
        byok_beta: t.text("byok.beta"),
        canvas_title: t.text("canvas.title"),
        canvas_items: t.records("canvas.items"),
        canvas_message: t.text("canvas.message"),
        assessment_title: t.text("assessment.title"),
        assessment_description: t.text("assessment.description"),
        assessment_levels: t.text("assessment.levels"),
        dimensions: t.records("assessment.dimensions"),
        tabs: TabPanel {
            selected: tab,
            educator_label: t.text("tabs.educatorTab"),
            learner_label: t.text("tabs.learnerTab"),
            items: t.list(&format!("tabs.{}.items", selected)),
            cta: t.text(&format!("tabs.{}.cta", selected)),
        },
        testimonials_title: t.text("testimonials.title"),
        testimonials: t.records("testimonials.items"),
        faq_title: t.text("faq.title"),
        faq: t.records("faq.items"),
        final_title: t.text("finalCta.title"),
        final_primary_cta: t.text("finalCta.primaryCta"),
        final_secondary_cta: t.text("finalCta.secondaryCta"),
    }
}

pub fn render(ctx: &PageContext, tab: HomeTab) -> Result<Markup> {
    let page = model(ctx, tab);
    let metadata = get_page_seo(ctx.site, PageKey::Home, ctx.locale.code(), None);
    let faq_json = jsonld::to_script_json(&jsonld::faq_page(&page.faq))?;

    let doc = Document::new(metadata, body(ctx, &page))
        .active(NavSection::Page(PageKey::Home))
        .structured_data(faq_json);
    layout::render(ctx, doc)
}

fn body(ctx: &PageContext, page: &HomePage) -> Markup {
    let login = ctx.links.login_url.as_str();

    html! {
        section class="section section-hero" {
            div class="container center" {
                (fade_in(0, html! { h1 { (page.hero_title) } }))
                (fade_in(100, html! { p class="hero-subtitle" { (page.hero_subtitle) } }))
                (fade_in(200, html! {
                    div class="button-row" {
                        (button_link(login, &page.hero_primary_cta, ButtonStyle::Accent))
                        (button_link(&ctx.href(PageKey::Features.path()), &page.hero_secondary_cta, ButtonStyle::Outline))
                    }
                }))
            }
        }

        section class="section section-muted" id="pillars" {
            div class="container" {
                (fade_in(0, html! { h2 class="center" { (page.pillars_title) } }))
                div class="grid grid-3" {
                    @for (i, pillar) in page.pillars.iter().enumerate() {
                        (fade_in(stagger(i, 100), html! {
                            article class="card pillar" {
                                div class="pillar-heading" {
                                    (icon(pillar.icon))
                                    div {
                                        span class="eyebrow" { (pillar.title) }
                                        p class="muted" { (pillar.subtitle) }
                                    }
                                }
                                p { (pillar.description) }
                                (check_list(&pillar.bullets))
                            }
                        }))
                    }
                }
            }
        }

        section class="section" id="byok" {
            div class="container" {
                (fade_in(0, html! {
                    div class="center" {
                        div class="eyebrow" { (icon(Icon::Key)) " BYOK" }
                        h2 { (page.byok_title) }
                        p { (page.byok_description) }
                    }
                }))
                div class="grid grid-3" {
                    @for (i, card) in page.byok_cards.iter().enumerate() {
                        (fade_in(stagger(i, 100), html! {
                            article class="card" {
                                h3 { (card.title) }
                                p { (card.description) }
                            }
                        }))
                    }
                }
                (fade_in(0, html! { p class="center muted note" { (page.byok_beta) } }))
            }
        }

        section class="section section-muted" id="canvas" {
            div class="container" {
                (fade_in(0, html! {
                    div class="center" {
                        (icon(Icon::PenLine))
                        h2 { (page.canvas_title) }
                    }
                }))
                div class="grid grid-4" {
                    @for (i, item) in page.canvas_items.iter().enumerate() {
                        (fade_in(stagger(i, 100), html! {
                            article class="card center" {
                                span class="badge" { (item.abbr) }
                                h4 { (item.title) }
                                p { (item.description) }
                            }
                        }))
                    }
                }
                (fade_in(0, html! { p class="center note" { (page.canvas_message) } }))
            }
        }

        section class="section" id="assessment" {
            div class="container narrow" {
                (fade_in(0, html! {
                    div class="center" {
                        (icon(Icon::Brain))
                        h2 { (page.assessment_title) }
                        p { (page.assessment_description) }
                        p class="accent" { (page.assessment_levels) }
                    }
                }))
                @for (i, dimension) in page.dimensions.iter().enumerate() {
                    (fade_in(stagger(i, 80), html! {
                        div class="dimension" {
                            span class="badge" { (dimension.abbr) }
                            span class="dimension-title" { (dimension.title) }
                            (progress_bar(fill_percent(65, 5, i)))
                        }
                    }))
                }
            }
        }

        (tab_panel(ctx, &page.tabs))

        section class="section" id="testimonials" {
            div class="container" {
                (fade_in(0, html! { h2 class="center" { (page.testimonials_title) } }))
                div class="grid grid-2" {
                    @for (i, item) in page.testimonials.iter().enumerate() {
                        (fade_in(stagger(i, 100), html! {
                            figure class="card testimonial" {
                                (icon(Icon::Quote))
                                blockquote { "“" (item.quote) "”" }
                                figcaption {
                                    strong { (item.name) }
                                    span class="muted" { (item.title) }
                                }
                            }
                        }))
                    }
                }
            }
        }

        section class="section section-muted" id="faq" {
            div class="container narrow" {
                (fade_in(0, html! { h2 class="center" { (page.faq_title) } }))
                div class="faq" {
                    @for item in &page.faq {
                        details {
                            summary { (item.question) }
                            p { (item.answer) }
                        }
                    }
                }
            }
        }

        section class="section section-cta" {
            div class="container center" {
                (fade_in(0, html! { h2 { (page.final_title) } }))
                (fade_in(100, html! {
                    div class="button-row" {
                        (button_link(login, &page.final_primary_cta, ButtonStyle::Accent))
                        (button_link(&ctx.links.contact_url, &page.final_secondary_cta, ButtonStyle::Ghost))
                    }
                }))
            }
        }
    }
}

fn tab_panel(ctx: &PageContext, tabs: &TabPanel) -> Markup {
    let options = [
        (HomeTab::Educator, &tabs.educator_label),
        (HomeTab::Learner, &tabs.learner_label),
    ];

    html! {
        section class="section section-muted" id="audience" {
            div class="container narrow" {
                div class="tabs" role="tablist" {
                    @for (tab, label) in options {
                        @let selected = tab == tabs.selected;
                        a role="tab"
                            class=(if selected { "tab active" } else { "tab" })
                            aria-selected=(if selected { "true" } else { "false" })
                            href={ (ctx.href("")) "?tab=" (tab.as_str()) "#audience" } {
                            (label)
                        }
                    }
                }
                div class="card" role="tabpanel" data-tab=(tabs.selected.as_str()) {
                    (check_list(&tabs.items))
                    (button_link(&ctx.links.login_url, &tabs.cta, ButtonStyle::Accent))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Locale};
    use crate::pages::Links;
    use crate::seo::SiteConfig;

    fn with_ctx<T>(locale: Locale, f: impl FnOnce(&PageContext) -> T) -> T {
        let site = SiteConfig::default();
        let catalog = Catalog::embedded().expect("catalog");
        let links = Links::default();
        let ctx = PageContext {
            site: &site,
            catalog: &catalog,
            links: &links,
            locale,
        };
        f(&ctx)
    }

    // ==================== Tab Tests ====================

    #[test]
    fn test_tab_parse() {
        assert_eq!(HomeTab::parse(None), HomeTab::Educator);
        assert_eq!(HomeTab::parse(Some("learner")), HomeTab::Learner);
        assert_eq!(HomeTab::parse(Some("educator")), HomeTab::Educator);
        assert_eq!(HomeTab::parse(Some("admin")), HomeTab::Educator);
        assert_eq!(HomeTab::default(), HomeTab::Educator);
    }

    #[test]
    fn test_selected_tab_supplies_items() {
        let educator = with_ctx(Locale::ENGLISH, |ctx| model(ctx, HomeTab::Educator));
        let learner = with_ctx(Locale::ENGLISH, |ctx| model(ctx, HomeTab::Learner));

        assert_eq!(educator.tabs.cta, "Start teaching");
        assert_eq!(learner.tabs.cta, "Start learning");
        assert_ne!(educator.tabs.items, learner.tabs.items);
    }

    // ==================== Model Tests ====================

    #[test]
    fn test_model_sections() {
        let page = with_ctx(Locale::KOREAN, |ctx| model(ctx, HomeTab::Educator));

        assert_eq!(page.hero_title, "당신에게서 배우는 커리큘럼");
        assert_eq!(page.pillars.len(), 3);
        assert_eq!(page.pillars[0].icon, Icon::Heart);
        assert_eq!(page.pillars[2].icon, Icon::Zap);
        assert_eq!(page.pillars[1].bullets.len(), 3);
        assert_eq!(page.byok_cards.len(), 3);
        assert_eq!(page.canvas_items[0].abbr, "CAP");
        assert_eq!(page.dimensions.len(), 5);
        assert_eq!(page.testimonials.len(), 2);
        assert_eq!(page.faq.len(), 4);
    }

    // ==================== Render Tests ====================

    #[test]
    fn test_render_home() {
        let html = with_ctx(Locale::ENGLISH, |ctx| render(ctx, HomeTab::Educator))
            .expect("render")
            .into_string();

        assert!(html.contains("href=\"/login\""));
        assert!(html.contains("href=\"/en/features\""));
        assert!(html.contains("href=\"https://lokalingo.com/en/contact\""));
        assert!(html.contains("\"@type\":\"FAQPage\""));
        assert_eq!(html.matches("application/ld+json").count(), 4);
    }

    #[test]
    fn test_render_progress_fills() {
        let html = with_ctx(Locale::ENGLISH, |ctx| render(ctx, HomeTab::Educator))
            .expect("render")
            .into_string();

        for width in [65, 70, 75, 80, 85] {
            assert!(html.contains(&format!("width: {}%", width)), "{}", width);
        }
    }

    #[test]
    fn test_render_tab_links() {
        let html = with_ctx(Locale::JAPANESE, |ctx| render(ctx, HomeTab::Learner))
            .expect("render")
            .into_string();

        assert!(html.contains("href=\"/ja?tab=educator#audience\""));
        assert!(html.contains("data-tab=\"learner\""));
    }
}
