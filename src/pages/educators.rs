//! For-educators page.

use crate::i18n::KeySpec;
use crate::pages::components::{
    button_link, check_list, cta_band, fade_in, hero, icon, stagger, ButtonStyle, Icon,
};
use crate::pages::layout::{self, Document, NavSection};
use crate::pages::PageContext;
use crate::seo::{get_page_seo, PageKey};
use anyhow::Result;
use maud::{html, Markup};

const NS: &str = "educators";

/// Earnings column rendered with emphasis (net income).
pub const HIGHLIGHT_COLUMN: usize = 3;

pub const REQUIRED: &[KeySpec] = &[
    KeySpec::text(NS, "hero.title"),
    KeySpec::text(NS, "hero.subtitle"),
    KeySpec::text(NS, "canvasSection.title"),
    KeySpec::text(NS, "canvasSection.description"),
    KeySpec::list(NS, "canvasSection.items"),
    KeySpec::text(NS, "aiSection.title"),
    KeySpec::text(NS, "aiSection.description"),
    KeySpec::list(NS, "aiSection.dimensions"),
    KeySpec::text(NS, "managementSection.title"),
    KeySpec::list(NS, "managementSection.items"),
    KeySpec::text(NS, "earnings.title"),
    KeySpec::text(NS, "earnings.subtitle"),
    KeySpec::list(NS, "earnings.headers"),
    KeySpec::table(NS, "earnings.rows"),
    KeySpec::text(NS, "cta.title"),
    KeySpec::text(NS, "cta.subtitle"),
    KeySpec::text(NS, "cta.button"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducatorsPage {
    pub title: String,
    pub subtitle: String,
    pub canvas_title: String,
    pub canvas_description: String,
    pub canvas_items: Vec<String>,
    pub ai_title: String,
    pub ai_description: String,
    pub dimensions: Vec<String>,
    pub management_title: String,
    pub management_items: Vec<String>,
    pub earnings_title: String,
    pub earnings_subtitle: String,
    pub earnings_headers: Vec<String>,
    pub earnings_rows: Vec<Vec<String>>,
    pub cta_title: String,
    pub cta_subtitle: String,
    pub cta_button: String,
}

pub fn model(ctx: &PageContext) -> EducatorsPage {
    let t = ctx.translator(NS);

    EducatorsPage {
        title: t.text("hero.title"),
        subtitle: t.text("hero.subtitle"),
        canvas_title: t.text("canvasSection.title"),
        canvas_description: t.text("canvasSection.description"),
        canvas_items: t.list("canvasSection.items"),
        ai_title: t.text("aiSection.title"),
        ai_description: t.text("aiSection.description"),
        dimensions: t.list("aiSection.dimensions"),
        management_title: t.text("managementSection.title"),
        management_items: t.list("managementSection.items"),
        earnings_title: t.text("earnings.title"),
        earnings_subtitle: t.text("earnings.subtitle"),
        earnings_headers: t.list("earnings.headers"),
        earnings_rows: t.table("earnings.rows"),
        cta_title: t.text("cta.title"),
        cta_subtitle: t.text("cta.subtitle"),
        cta_button: t.text("cta.button"),
    }
}

pub fn render(ctx: &PageContext) -> Result<Markup> {
    let page = model(ctx);
    let metadata = get_page_seo(ctx.site, PageKey::Educators, ctx.locale.code(), None);

    let body = html! {
        (hero(&page.title, &page.subtitle))

        section class="section section-muted" {
            div class="container" {
                (fade_in(0, html! {
                    h2 class="center" { (page.canvas_title) }
                    p class="center lead" { (page.canvas_description) }
                }))
                div class="grid grid-2" {
                    @for (i, item) in page.canvas_items.iter().enumerate() {
                        (fade_in(stagger(i, 80), html! {
                            div class="check-tile" {
                                (icon(Icon::CheckCircle))
                                span { (item) }
                            }
                        }))
                    }
                }
            }
        }

        section class="section" {
            div class="container" {
                (fade_in(0, html! {
                    h2 class="center" { (page.ai_title) }
                    p class="center lead" { (page.ai_description) }
                }))
                div class="chips" {
                    @for (i, dimension) in page.dimensions.iter().enumerate() {
                        (fade_in(stagger(i, 60), html! { span class="chip" { (dimension) } }))
                    }
                }
            }
        }

        section class="section section-muted" {
            div class="container narrow" {
                (fade_in(0, html! { h2 class="center" { (page.management_title) } }))
                div class="card" { (check_list(&page.management_items)) }
            }
        }

        section class="section" {
            div class="container" {
                (fade_in(0, html! {
                    h2 class="center" { (page.earnings_title) }
                    p class="center" { (page.earnings_subtitle) }
                }))
                (fade_in(100, earnings_table(&page.earnings_headers, &page.earnings_rows)))
            }
        }

        (cta_band(
            &page.cta_title,
            &page.cta_subtitle,
            button_link(&ctx.links.login_url, &page.cta_button, ButtonStyle::Accent),
        ))
    };

    layout::render(ctx, Document::new(metadata, body).active(NavSection::Page(PageKey::Educators)))
}

fn earnings_table(headers: &[String], rows: &[Vec<String>]) -> Markup {
    html! {
        div class="table-scroll" {
            table class="earnings" {
                thead {
                    tr {
                        @for header in headers {
                            th scope="col" { (header) }
                        }
                    }
                }
                tbody {
                    @for row in rows {
                        tr {
                            @for (j, cell) in row.iter().enumerate() {
                                @if j == HIGHLIGHT_COLUMN {
                                    td class="highlight" { (cell) }
                                } @else {
                                    td { (cell) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
