//! Locale type: a locale code validated against the registry.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated, enabled site locale.
///
/// Route handlers construct this from the `{locale}` path segment; anything
/// that fails validation is rejected at the routing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const JAPANESE: Locale = Locale { code: "ja" };
    pub const KOREAN: Locale = Locale { code: "ko" };

    /// Create a Locale from a code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered and enabled
    /// * `Err` if the code is unknown or disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale { code: config.code }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// The fallback locale every table must cover.
    pub fn canonical() -> Locale {
        Locale {
            code: LocaleRegistry::get().canonical().code,
        }
    }

    /// All enabled locales in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// Locale built through `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be registered")
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn og_locale(&self) -> &'static str {
        self.config().og_locale
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// Pick the best supported locale from an `Accept-Language` header.
    ///
    /// Only the primary subtag is compared (`ja-JP` matches `ja`). Entries are
    /// ranked by their `q` weight; ties keep header order. Falls back to the
    /// canonical locale.
    pub fn negotiate(accept_language: Option<&str>) -> Locale {
        let Some(header) = accept_language else {
            return Locale::canonical();
        };

        let mut ranked: Vec<(f32, &str)> = header
            .split(',')
            .filter_map(|part| {
                let mut pieces = part.trim().split(';');
                let tag = pieces.next()?.trim();
                if tag.is_empty() {
                    return None;
                }
                let weight = pieces
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0);
                Some((weight, tag))
            })
            .collect();
        // Stable sort keeps header order for equal weights
        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        ranked
            .into_iter()
            .filter(|(weight, _)| *weight > 0.0)
            .find_map(|(_, tag)| {
                let primary = tag.split('-').next().unwrap_or(tag).to_ascii_lowercase();
                Locale::from_code(&primary).ok()
            })
            .unwrap_or_else(Locale::canonical)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
