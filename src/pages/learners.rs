//! For-learners page.

use crate::i18n::KeySpec;
use crate::pages::components::{
    button_link, check_list, cta_band, fade_in, fill_percent, hero, icon, progress_bar, stagger,
    ButtonStyle, Icon,
};
use crate::pages::layout::{self, Document, NavSection};
use crate::pages::PageContext;
use crate::seo::{get_page_seo, PageKey};
use anyhow::Result;
use maud::{html, Markup};
use serde::Deserialize;

const NS: &str = "learners";

pub const REQUIRED: &[KeySpec] = &[
    KeySpec::text(NS, "hero.title"),
    KeySpec::text(NS, "hero.subtitle"),
    KeySpec::text(NS, "learningFlow.title"),
    KeySpec::records(NS, "learningFlow.steps", &["label", "description"]),
    KeySpec::text(NS, "dashboardSection.title"),
    KeySpec::list(NS, "dashboardSection.items"),
    KeySpec::text(NS, "spacedRepSection.title"),
    KeySpec::text(NS, "spacedRepSection.description"),
    KeySpec::text(NS, "progressSection.title"),
    KeySpec::text(NS, "progressSection.description"),
    KeySpec::list(NS, "progressSection.dimensions"),
    KeySpec::text(NS, "cta.title"),
    KeySpec::text(NS, "cta.subtitle"),
    KeySpec::text(NS, "cta.button"),
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlowStep {
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnersPage {
    pub title: String,
    pub subtitle: String,
    pub flow_title: String,
    pub steps: Vec<FlowStep>,
    pub dashboard_title: String,
    pub dashboard_items: Vec<String>,
    pub spaced_title: String,
    pub spaced_description: String,
    pub progress_title: String,
    pub progress_description: String,
    pub dimensions: Vec<String>,
    pub cta_title: String,
    pub cta_subtitle: String,
    pub cta_button: String,
}

pub fn model(ctx: &PageContext) -> LearnersPage {
    let t = ctx.translator(NS);

    LearnersPage {
        title: t.text("hero.title"),
        subtitle: t.text("hero.subtitle"),
        flow_title: t.text("learningFlow.title"),
        steps: t.records("learningFlow.steps"),
        dashboard_title: t.text("dashboardSection.title"),
        dashboard_items: t.list("dashboardSection.items"),
        spaced_title: t.text("spacedRepSection.title"),
        spaced_description: t.text("spacedRepSection.description"),
        progress_title: t.text("progressSection.title"),
        progress_description: t.text("progressSection.description"),
        dimensions: t.list("progressSection.dimensions"),
        cta_title: t.text("cta.title"),
        cta_subtitle: t.text("cta.subtitle"),
        cta_button: t.text("cta.button"),
    }
}

pub fn render(ctx: &PageContext) -> Result<Markup> {
    let page = model(ctx);
    let metadata = get_page_seo(ctx.site, PageKey::Learners, ctx.locale.code(), None);

    let body = html! {
        (hero(&page.title, &page.subtitle))

        section class="section section-muted" {
            div class="container" {
                (fade_in(0, html! { h2 class="center" { (page.flow_title) } }))
                (learning_flow(&page.steps))
            }
        }

        section class="section" {
            div class="container narrow" {
                (fade_in(0, html! { h2 class="center" { (page.dashboard_title) } }))
                div class="card" { (check_list(&page.dashboard_items)) }
            }
        }

        section class="section section-muted" {
            div class="container narrow center" {
                (fade_in(0, html! {
                    h2 { (page.spaced_title) }
                    p class="lead" { (page.spaced_description) }
                }))
            }
        }

        section class="section" {
            div class="container narrow" {
                (fade_in(0, html! {
                    h2 class="center" { (page.progress_title) }
                    p class="center" { (page.progress_description) }
                }))
                @for (i, dimension) in page.dimensions.iter().enumerate() {
                    (fade_in(stagger(i, 80), html! {
                        div class="dimension" {
                            span class="dimension-title" { (dimension) }
                            (progress_bar(fill_percent(60, 7, i)))
                        }
                    }))
                }
            }
        }

        (cta_band(
            &page.cta_title,
            &page.cta_subtitle,
            button_link(&ctx.links.login_url, &page.cta_button, ButtonStyle::Accent),
        ))
    };

    layout::render(ctx, Document::new(metadata, body).active(NavSection::Page(PageKey::Learners)))
}

/// Numbered steps with an arrow between consecutive steps.
fn learning_flow(steps: &[FlowStep]) -> Markup {
    html! {
        ol class="grid grid-4 flow" {
            @for (i, step) in steps.iter().enumerate() {
                li {
                    (fade_in(stagger(i, 100), html! {
                        div class="card center" {
                            span class="step-number" { (i + 1) }
                            h4 { (step.label) }
                            p { (step.description) }
                        }
                        @if i + 1 < steps.len() {
                            span class="flow-arrow" { (icon(Icon::ArrowRight)) }
                        }
                    }))
                }
            }
        }
    }
}
