//! SEO metadata: per-page titles and descriptions, canonical and
//! alternate-language URLs, Open Graph and Twitter card payloads.

use crate::i18n::{Locale, LocaleRegistry};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub const DEFAULT_BASE_URL: &str = "https://thelivingtextbook.lokalingo.com";

/// Facts about the organization behind the site, used by JSON-LD.
#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub name: &'static str,
    pub alternate_name: &'static str,
    pub url: &'static str,
    pub logo_url: &'static str,
    pub founding_date: &'static str,
    pub contact_email: &'static str,
}

/// Site-wide constants and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub name: &'static str,
    pub alternate_name: &'static str,
    /// Base URL without a trailing slash
    pub url: String,
    pub description: &'static str,
    pub default_title: &'static str,
    /// `%s` is replaced by the page title
    pub title_template: &'static str,
    pub keywords: &'static [&'static str],
    pub creator: &'static str,
    pub organization: Organization,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "The Living Textbook",
            alternate_name: "Loka The Living Textbook",
            url: DEFAULT_BASE_URL.to_string(),
            description: "A curriculum that learns from you. Powered by AI. Guided by neuroscience. Built by educators, for educators.",
            default_title: "The Living Textbook | AI-Powered Language Learning",
            title_template: "%s | The Living Textbook",
            keywords: &[
                "language learning",
                "EdTech",
                "AI curriculum",
                "language teaching",
                "CIP",
                "The Living Textbook",
                "LokaLingo",
                "BYOK",
            ],
            creator: "LokaLingo",
            organization: Organization {
                name: "LokaLingo",
                alternate_name: "Accent Language 株式会社",
                url: "https://lokalingo.com",
                logo_url: "https://lokalingo.com/logo.png",
                founding_date: "2003",
                contact_email: "ryan@lokalingo.com",
            },
        }
    }
}

impl SiteConfig {
    /// Defaults with a different base URL (trailing slashes trimmed).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Absolute URL for a locale and a page path.
    pub fn locale_url(&self, locale: &str, path: &str) -> String {
        format!("{}/{}{}", self.url, locale, normalize_path(path))
    }

    /// Apply the title template to a page title.
    pub fn format_title(&self, title: &str) -> String {
        self.title_template.replace("%s", title)
    }

    pub fn logo_url(&self) -> String {
        format!("{}/logo.png", self.url)
    }
}

/// The localized marketing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKey {
    Home,
    Features,
    Educators,
    Learners,
}

impl PageKey {
    /// All pages, in sitemap order.
    pub const ALL: [PageKey; 4] = [
        PageKey::Home,
        PageKey::Features,
        PageKey::Educators,
        PageKey::Learners,
    ];

    /// Path below the locale segment; the home page is the empty path.
    pub fn path(&self) -> &'static str {
        match self {
            PageKey::Home => "",
            PageKey::Features => "/features",
            PageKey::Educators => "/for-educators",
            PageKey::Learners => "/for-learners",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::Features => "features",
            PageKey::Educators => "educators",
            PageKey::Learners => "learners",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeoEntry {
    pub title: &'static str,
    pub description: &'static str,
}

/// SEO entries for one page. The English entry is a required field, so
/// every page always has its fallback.
struct PageSeo {
    en: SeoEntry,
    translations: &'static [(&'static str, SeoEntry)],
}

impl PageSeo {
    fn entry(&self, locale: &str) -> SeoEntry {
        self.translations
            .iter()
            .find(|(code, _)| *code == locale)
            .map(|(_, entry)| *entry)
            .unwrap_or(self.en)
    }
}

const HOME_SEO: PageSeo = PageSeo {
    en: SeoEntry {
        title: "AI-Powered Language Learning Platform",
        description: "A curriculum that learns from you. Powered by AI. Guided by neuroscience. Built by educators, for educators.",
    },
    translations: &[
        (
            "ja",
            SeoEntry {
                title: "AI搭載言語学習プラットフォーム",
                description: "会話から生まれるカリキュラム。AIを活用し、神経科学に基づき、教育者のために教育者が構築した語学学習プラットフォームです。",
            },
        ),
        (
            "ko",
            SeoEntry {
                title: "AI 기반 언어 학습 플랫폼",
                description: "대화에서 배우는 커리큘럼. AI로 구동되고, 신경과학에 기반하며, 교육자가 교육자를 위해 만든 언어 학습 플랫폼입니다.",
            },
        ),
    ],
};

const FEATURES_SEO: PageSeo = PageSeo {
    en: SeoEntry {
        title: "Canvas, AI Assessment & Spaced Repetition Features",
        description: "Explore The Living Textbook platform features: Canvas system for real-time lesson capture, AI assessment engine, student management, booking, spaced repetition, and BYOK AI integration.",
    },
    translations: &[
        (
            "ja",
            SeoEntry {
                title: "機能 - キャンバス・AI評価・間隔反復",
                description: "リアルタイムレッスンキャプチャのキャンバスシステム、5次元AI評価エンジン、生徒管理、予約、間隔反復、CEFR対応、BYOK AI統合機能。",
            },
        ),
        (
            "ko",
            SeoEntry {
                title: "기능 - 캔버스, AI 평가, 간격 반복",
                description: "실시간 수업 캡처 캔버스 시스템, 5차원 AI 평가 엔진, 학생 관리, 예약, 간격 반복, CEFR 레벨 추적, BYOK AI 통합 기능.",
            },
        ),
    ],
};

const EDUCATORS_SEO: PageSeo = PageSeo {
    en: SeoEntry {
        title: "AI Teaching Tools for Independent Language Educators",
        description: "Built for educators who want control. Canvas workflow, AI-powered assessment, student management, and flat $6/seat pricing with no commissions. Keep nearly 94% of your earnings.",
    },
    translations: &[
        (
            "ja",
            SeoEntry {
                title: "教育者向け - AI教育ツール",
                description: "キャンバスワークフロー、AI搭載評価、生徒管理を定額$6/席で。手数料なしで収入の約94%を維持でき、独立した教育が実現します。",
            },
        ),
        (
            "ko",
            SeoEntry {
                title: "교육자용 - AI 교육 도구",
                description: "캔버스 워크플로우, AI 기반 평가, 학생 관리를 정액 $6/석으로. 수수료 없이 수입의 약 94%를 유지하며 독립적인 교육이 가능합니다.",
            },
        ),
    ],
};

const LEARNERS_SEO: PageSeo = PageSeo {
    en: SeoEntry {
        title: "Track Your Language Progress with AI Assessment",
        description: "Your real conversations become your curriculum. Track progress across 5 skill dimensions with AI-powered review, spaced repetition, and CEFR-aligned assessments.",
    },
    translations: &[
        (
            "ja",
            SeoEntry {
                title: "学習者向け - AI評価で進捗を可視化",
                description: "実際の会話から生まれるパーソナライズされたカリキュラム。AI搭載レビューで5つのスキル次元の進捗を追跡し、間隔反復で定着させます。",
            },
        ),
        (
            "ko",
            SeoEntry {
                title: "학습자용 - AI 평가로 진행 상황 추적",
                description: "실제 대화에서 만들어지는 맞춤형 커리큘럼. AI 기반 리뷰로 5가지 스킬 차원의 진행 상황을 추적하고, 간격 반복으로 학습을 정착시킵니다.",
            },
        ),
    ],
};

fn page_seo(page: PageKey) -> &'static PageSeo {
    match page {
        PageKey::Home => &HOME_SEO,
        PageKey::Features => &FEATURES_SEO,
        PageKey::Educators => &EDUCATORS_SEO,
        PageKey::Learners => &LEARNERS_SEO,
    }
}

/// Title and description for a page, falling back to English.
pub fn seo_entry(page: PageKey, locale: &str) -> SeoEntry {
    page_seo(page).entry(locale)
}

/// `"/"` and `""` both mean the locale root.
pub fn normalize_path(path: &str) -> &str {
    if path == "/" {
        ""
    } else {
        path
    }
}

/// One `hreflang` alternate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternates {
    pub canonical: String,
    /// Serialized as an ordered `{hreflang: href}` map
    #[serde(serialize_with = "serialize_links")]
    pub languages: Vec<AlternateLink>,
}

impl Alternates {
    pub fn language(&self, hreflang: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|link| link.hreflang == hreflang)
            .map(|link| link.href.as_str())
    }
}

pub(crate) fn serialize_links<S: Serializer>(links: &[AlternateLink], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(links.len()))?;
    for link in links {
        map.serialize_entry(&link.hreflang, &link.href)?;
    }
    map.end()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Resolved metadata for one page in one locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub alternates: Alternates,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

/// Canonical URL plus one alternate per supported locale and `x-default`.
pub fn generate_alternates(site: &SiteConfig, path: &str, locale: &str) -> Alternates {
    let mut languages: Vec<AlternateLink> = LocaleRegistry::get()
        .list_enabled()
        .iter()
        .map(|config| AlternateLink {
            hreflang: config.code.to_string(),
            href: site.locale_url(config.code, path),
        })
        .collect();
    languages.push(AlternateLink {
        hreflang: "x-default".to_string(),
        href: site.locale_url(Locale::canonical().code(), path),
    });

    Alternates {
        canonical: site.locale_url(locale, path),
        languages,
    }
}

/// Assemble metadata from an already-resolved title and description.
pub fn build_metadata(
    site: &SiteConfig,
    title: &str,
    description: &str,
    locale: &str,
    path: &str,
) -> Metadata {
    let alternates = generate_alternates(site, path, locale);
    let logo = site.logo_url();

    Metadata {
        title: title.to_string(),
        description: description.to_string(),
        open_graph: OpenGraph {
            title: title.to_string(),
            description: description.to_string(),
            url: alternates.canonical.clone(),
            site_name: site.name.to_string(),
            locale: LocaleRegistry::get().og_locale(locale).to_string(),
            kind: "website",
            images: vec![OgImage {
                url: logo.clone(),
                width: 1200,
                height: 630,
                alt: site.name.to_string(),
            }],
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            title: title.to_string(),
            description: description.to_string(),
            images: vec![logo],
        },
        alternates,
    }
}

/// Metadata for a marketing page.
///
/// `locale` may be any string; locales without an entry get the English
/// title and description but keep their own URLs. `path` defaults to the
/// page's own path.
pub fn get_page_seo(site: &SiteConfig, page: PageKey, locale: &str, path: Option<&str>) -> Metadata {
    let entry = seo_entry(page, locale);
    build_metadata(
        site,
        entry.title,
        entry.description,
        locale,
        path.unwrap_or(page.path()),
    )
}
