//! Locale registry: Single source of truth for all supported site locales.
//!
//! The registry is a lazily initialized singleton (`OnceLock`). Its order is
//! significant: sitemap entries, alternate-language links and the language
//! switcher all enumerate locales in registry order.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// URL segment and translation file name (e.g., "en", "ja")
    pub code: &'static str,

    /// English name of the locale (e.g., "Japanese")
    pub name: &'static str,

    /// Name of the locale in its own language (e.g., "日本語")
    pub native_name: &'static str,

    /// Open Graph `og:locale` tag (e.g., "ja_JP")
    pub og_locale: &'static str,

    /// Whether this is the fallback locale (exactly one must be true)
    pub is_canonical: bool,

    /// Whether pages are served for this locale
    pub enabled: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All enabled locales, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get the canonical (fallback) locale configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one canonical locale.
    /// The registry is static, so this is a programming error.
    pub fn canonical(&self) -> &LocaleConfig {
        let canonical: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_canonical)
            .collect();

        match canonical.len() {
            0 => panic!("No canonical locale found in registry"),
            1 => canonical[0],
            _ => panic!("Multiple canonical locales found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }

    /// Open Graph locale tag for an arbitrary code.
    ///
    /// Unknown codes map to the canonical locale's tag.
    pub fn og_locale(&self, code: &str) -> &'static str {
        self.get_by_code(code)
            .map(|locale| locale.og_locale)
            .unwrap_or_else(|| self.canonical().og_locale)
    }
}

fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            is_canonical: true,
            enabled: true,
        },
        LocaleConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            og_locale: "ja_JP",
            is_canonical: false,
            enabled: true,
        },
        LocaleConfig {
            code: "ko",
            name: "Korean",
            native_name: "한국어",
            og_locale: "ko_KR",
            is_canonical: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_japanese() {
        let config = LocaleRegistry::get()
            .get_by_code("ja")
            .expect("ja should be registered");
        assert_eq!(config.name, "Japanese");
        assert_eq!(config.og_locale, "ja_JP");
        assert!(!config.is_canonical);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LocaleRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_list_enabled_order() {
        let codes: Vec<_> = LocaleRegistry::get()
            .list_enabled()
            .iter()
            .map(|locale| locale.code)
            .collect();
        assert_eq!(codes, vec!["en", "ja", "ko"]);
    }

    #[test]
    fn test_canonical_is_english() {
        let canonical = LocaleRegistry::get().canonical();
        assert_eq!(canonical.code, "en");
        assert_eq!(canonical.og_locale, "en_US");
    }

    #[test]
    fn test_og_locale_mapping() {
        let registry = LocaleRegistry::get();
        assert_eq!(registry.og_locale("ja"), "ja_JP");
        assert_eq!(registry.og_locale("ko"), "ko_KR");
        assert_eq!(registry.og_locale("en"), "en_US");
        assert_eq!(registry.og_locale("fr"), "en_US");
    }

    #[test]
    fn test_is_enabled() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_enabled("ko"));
        assert!(!registry.is_enabled("es"));
    }
}
