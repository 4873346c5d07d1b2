//! Small markup building blocks shared by the pages.
//!
//! Presentation concerns such as icon glyphs and reveal animations are left
//! to the stylesheet; these helpers only emit class names and `data-*`
//! attributes for it.

use maud::{html, Markup};

/// Icons referenced by name; the stylesheet maps names to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Award,
    Brain,
    Calendar,
    CheckCircle,
    Code,
    Compass,
    Globe,
    Heart,
    Key,
    PenLine,
    Quote,
    RefreshCw,
    Users,
    Zap,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::ArrowRight => "arrow-right",
            Icon::Award => "award",
            Icon::Brain => "brain",
            Icon::Calendar => "calendar",
            Icon::CheckCircle => "check-circle",
            Icon::Code => "code",
            Icon::Compass => "compass",
            Icon::Globe => "globe",
            Icon::Heart => "heart",
            Icon::Key => "key",
            Icon::PenLine => "pen-line",
            Icon::Quote => "quote",
            Icon::RefreshCw => "refresh-cw",
            Icon::Users => "users",
            Icon::Zap => "zap",
        }
    }
}

/// Pick an icon by position, with a fallback past the end of the list.
pub fn icon_at(icons: &[Icon], index: usize, default: Icon) -> Icon {
    icons.get(index).copied().unwrap_or(default)
}

pub fn icon(icon: Icon) -> Markup {
    html! {
        span class={ "icon icon-" (icon.name()) } data-icon=(icon.name()) aria-hidden="true" {}
    }
}

/// Reveal delay for the `index`-th item of a staggered list.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

/// Fill of the `index`-th decorative progress bar: `base + index * step`.
pub fn fill_percent(base: usize, step: usize, index: usize) -> usize {
    base + index * step
}

pub fn fade_in(delay_ms: u32, content: Markup) -> Markup {
    html! {
        div class="fade-in" data-delay=(delay_ms) style={ "--fade-delay: " (delay_ms) "ms" } {
            (content)
        }
    }
}

/// The bar is clamped to its track; the fill value itself is not.
pub fn progress_bar(percent: usize) -> Markup {
    let width = percent.min(100);
    html! {
        div class="progress" role="presentation" {
            div class="progress-fill" style={ "width: " (width) "%" } {}
        }
    }
}

pub fn check_list(items: &[String]) -> Markup {
    html! {
        ul class="check-list" {
            @for item in items {
                li {
                    (icon(Icon::CheckCircle))
                    span { (item) }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Accent,
    Outline,
    Ghost,
}

impl ButtonStyle {
    fn class(&self) -> &'static str {
        match self {
            ButtonStyle::Accent => "button button-accent",
            ButtonStyle::Outline => "button button-outline",
            ButtonStyle::Ghost => "button button-ghost",
        }
    }
}

pub fn button_link(href: &str, label: &str, style: ButtonStyle) -> Markup {
    html! {
        a class=(style.class()) href=(href) { (label) }
    }
}

/// Closing call-to-action band used at the bottom of the audience pages.
pub fn cta_band(title: &str, subtitle: &str, button: Markup) -> Markup {
    html! {
        section class="section section-cta" {
            div class="container center" {
                (fade_in(0, html! {
                    h2 { (title) }
                    p class="cta-subtitle" { (subtitle) }
                }))
                (fade_in(100, button))
            }
        }
    }
}

/// Page hero with a title and subtitle.
pub fn hero(title: &str, subtitle: &str) -> Markup {
    html! {
        section class="section section-hero" {
            div class="container center" {
                (fade_in(0, html! { h1 { (title) } }))
                (fade_in(100, html! { p class="hero-subtitle" { (subtitle) } }))
            }
        }
    }
}
