//! Internationalization (i18n) module.
//!
//! - `registry`: supported locales and their metadata
//! - `locale`: validated `Locale` type and `Accept-Language` negotiation
//! - `catalog`: per-locale message trees and the typed `Translator`
//! - `validator`: load-time checks of the catalog against page key declarations
//! - `metrics`: counters for lookups, fallbacks and misses
//!
//! # Example
//!
//! ```rust,ignore
//! use living_textbook_site::i18n::{Catalog, Locale};
//!
//! let catalog = Catalog::embedded()?;
//! let t = catalog.translator(Locale::from_code("ja")?, "home");
//! let title = t.text("hero.title");
//! ```

mod catalog;
mod locale;
mod metrics;
mod registry;
mod validator;

pub use catalog::{Catalog, Translator};
pub use locale::Locale;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use validator::{CatalogValidator, KeyKind, KeySpec, ValidationReport};
