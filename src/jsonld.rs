//! schema.org structured data embedded as `application/ld+json`.

use crate::blog::BlogPostMeta;
use crate::seo::SiteConfig;
use serde::{Deserialize, Serialize};

const SCHEMA_CONTEXT: &str = "https://schema.org";

const APP_DESCRIPTION: &str = "AI-powered language learning platform that builds a personalized curriculum from real conversations. Canvas system, 5-dimension AI assessment, CEFR-aligned progress tracking.";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebApplication {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub alternate_name: String,
    pub url: String,
    pub description: &'static str,
    pub application_category: &'static str,
    pub operating_system: &'static str,
    pub in_language: String,
    pub offers: Offer,
    pub creator: OrganizationRef,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub price: &'static str,
    pub price_currency: &'static str,
    pub description: &'static str,
    pub availability: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizationRef {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub alternate_name: String,
    pub url: String,
    pub logo: ImageObject,
    pub founding_date: String,
    pub contact_point: ContactPoint,
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub email: String,
    pub contact_type: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    pub in_language: String,
}

/// A question/answer pair, as stored in the translation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPosting {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub description: String,
    pub date_published: String,
    pub in_language: String,
    pub url: String,
    pub article_section: String,
    pub author: OrganizationRef,
    pub publisher: OrganizationRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

pub fn web_application(site: &SiteConfig, locale: &str) -> WebApplication {
    WebApplication {
        context: SCHEMA_CONTEXT,
        kind: "WebApplication",
        name: site.name.to_string(),
        alternate_name: site.alternate_name.to_string(),
        url: site.url.clone(),
        description: APP_DESCRIPTION,
        application_category: "EducationalApplication",
        operating_system: "Web",
        in_language: locale.to_string(),
        offers: Offer {
            kind: "Offer",
            price: "6.00",
            price_currency: "USD",
            description: "Per active seat, per month",
            availability: "https://schema.org/InStock",
        },
        creator: OrganizationRef {
            kind: "Organization",
            name: site.organization.name.to_string(),
            url: site.organization.url.to_string(),
        },
    }
}

pub fn organization(site: &SiteConfig) -> OrganizationSchema {
    let org = &site.organization;
    OrganizationSchema {
        context: SCHEMA_CONTEXT,
        kind: "Organization",
        name: org.name.to_string(),
        alternate_name: org.alternate_name.to_string(),
        url: org.url.to_string(),
        logo: ImageObject {
            kind: "ImageObject",
            url: org.logo_url.to_string(),
            width: 512,
            height: 512,
        },
        founding_date: org.founding_date.to_string(),
        contact_point: ContactPoint {
            kind: "ContactPoint",
            email: org.contact_email.to_string(),
            contact_type: "customer support",
        },
        same_as: Vec::new(),
    }
}

pub fn web_site(site: &SiteConfig, locale: &str) -> WebSite {
    WebSite {
        context: SCHEMA_CONTEXT,
        kind: "WebSite",
        name: site.name.to_string(),
        url: site.url.clone(),
        in_language: locale.to_string(),
    }
}

pub fn faq_page(items: &[FaqItem]) -> FaqPage {
    FaqPage {
        context: SCHEMA_CONTEXT,
        kind: "FAQPage",
        main_entity: items
            .iter()
            .map(|item| Question {
                kind: "Question",
                name: item.question.clone(),
                accepted_answer: Answer {
                    kind: "Answer",
                    text: item.answer.clone(),
                },
            })
            .collect(),
    }
}

/// Article graph for a blog post page. `url` is the post's canonical URL.
pub fn blog_posting(
    site: &SiteConfig,
    post: &BlogPostMeta,
    headline: &str,
    description: &str,
    locale: &str,
    url: &str,
) -> BlogPosting {
    BlogPosting {
        context: SCHEMA_CONTEXT,
        kind: "BlogPosting",
        headline: headline.to_string(),
        description: description.to_string(),
        date_published: post.date.clone(),
        in_language: locale.to_string(),
        url: url.to_string(),
        article_section: post.category.clone(),
        author: OrganizationRef {
            kind: "Organization",
            name: post.author.clone(),
            url: site.url.clone(),
        },
        publisher: OrganizationRef {
            kind: "Organization",
            name: site.organization.name.to_string(),
            url: site.organization.url.to_string(),
        },
        image: post.hero_image.clone(),
    }
}

/// Serialize for a `<script type="application/ld+json">` body.
///
/// `</` is written as `<\/` so translated text cannot terminate the
/// script element; both spellings decode to the same JSON string.
pub fn to_script_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// The layout-level graphs: WebApplication, Organization and WebSite.
pub fn site_graphs(site: &SiteConfig, locale: &str) -> Result<Vec<String>, serde_json::Error> {
    Ok(vec![
        to_script_json(&web_application(site, locale))?,
        to_script_json(&organization(site))?,
        to_script_json(&web_site(site, locale))?,
    ])
}
