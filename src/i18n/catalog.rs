//! Translation catalog: one JSON message tree per locale.
//!
//! Messages are grouped by namespace (`home`, `features`, `educators`,
//! `learners`, `blog`, `common`) and addressed with dotted key paths
//! (`hero.title`, `pillars.nurture.bullets`). Lookups go through a
//! [`Translator`], which falls back to the canonical locale when the
//! requested one lacks a key.

use crate::error::SiteError;
use crate::i18n::{Locale, TranslationMetrics};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, error, warn};

const EMBEDDED_MESSAGES: &[(&str, &str)] = &[
    ("en", include_str!("../../messages/en.json")),
    ("ja", include_str!("../../messages/ja.json")),
    ("ko", include_str!("../../messages/ko.json")),
];

/// Locale-indexed message trees.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    trees: HashMap<String, Value>,
}

impl Catalog {
    /// Load the messages compiled into the binary.
    pub fn embedded() -> Result<Self, SiteError> {
        let mut trees = HashMap::new();
        for (code, source) in EMBEDDED_MESSAGES {
            let tree = serde_json::from_str(source).map_err(|source| SiteError::Json {
                origin: format!("embedded messages/{}.json", code),
                source,
            })?;
            trees.insert(code.to_string(), tree);
        }
        Ok(Self { trees })
    }

    /// Load `{code}.json` for every enabled locale from a directory.
    ///
    /// The canonical locale's file is required. Other missing files are
    /// logged and treated as empty trees, so their pages render entirely
    /// in the canonical locale.
    pub fn from_dir(dir: &Path) -> Result<Self, SiteError> {
        let mut trees = HashMap::new();

        for locale in Locale::all() {
            let path = dir.join(format!("{}.json", locale.code()));
            let source = match std::fs::read_to_string(&path) {
                Ok(source) => source,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound && !locale.is_canonical() => {
                    warn!("No messages file for '{}' at {}", locale, path.display());
                    trees.insert(locale.code().to_string(), Value::Object(Default::default()));
                    continue;
                }
                Err(source) => return Err(SiteError::Io { path, source }),
            };

            let tree = serde_json::from_str(&source).map_err(|source| SiteError::Json {
                origin: path.display().to_string(),
                source,
            })?;
            debug!("Loaded messages for '{}' from {}", locale, path.display());
            trees.insert(locale.code().to_string(), tree);
        }

        Ok(Self { trees })
    }

    /// Build a catalog from already-parsed trees.
    pub fn from_trees<I, S>(trees: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        Self {
            trees: trees
                .into_iter()
                .map(|(code, tree)| (code.into(), tree))
                .collect(),
        }
    }

    /// Raw lookup of a dotted path in one locale's tree, without fallback.
    pub fn lookup(&self, locale: &str, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(self.trees.get(locale)?, |node, segment| node.get(segment))
    }

    /// Scoped accessor for one page's namespace.
    pub fn translator<'a>(&'a self, locale: Locale, namespace: &'a str) -> Translator<'a> {
        Translator {
            catalog: self,
            locale,
            namespace,
        }
    }
}

/// Typed, namespaced access to a catalog for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
    locale: Locale,
    namespace: &'a str,
}

impl<'a> Translator<'a> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Resolve a key, trying the requested locale first and then the
    /// canonical one. `extract` rejects values of the wrong shape, which are
    /// treated like missing values.
    fn resolve<T>(&self, key: &str, extract: impl Fn(&Value) -> Option<T>) -> Option<T> {
        let metrics = TranslationMetrics::global();
        metrics.record_lookup();

        let path = format!("{}.{}", self.namespace, key);
        if let Some(value) = self.catalog.lookup(self.locale.code(), &path).and_then(&extract) {
            return Some(value);
        }

        let canonical = Locale::canonical();
        if self.locale != canonical {
            if let Some(value) = self.catalog.lookup(canonical.code(), &path).and_then(&extract) {
                warn!("Missing '{}' for locale '{}', using '{}'", path, self.locale, canonical);
                metrics.record_fallback();
                return Some(value);
            }
        }

        error!("Translation '{}' missing for locale '{}'", path, self.locale);
        metrics.record_miss();
        None
    }

    /// A string value. A missing key renders as its own path.
    pub fn text(&self, key: &str) -> String {
        self.text_opt(key)
            .unwrap_or_else(|| format!("{}.{}", self.namespace, key))
    }

    /// A string value, or `None` if no locale defines it.
    pub fn text_opt(&self, key: &str) -> Option<String> {
        self.resolve(key, |value| value.as_str().map(str::to_string))
    }

    /// A list of strings.
    pub fn list(&self, key: &str) -> Vec<String> {
        self.resolve(key, |value| {
            value
                .as_array()?
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
    }

    /// A list of structured records.
    pub fn records<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.resolve(key, |value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_default()
    }

    /// A list of rows of strings.
    pub fn table(&self, key: &str) -> Vec<Vec<String>> {
        self.resolve(key, |value| {
            value
                .as_array()?
                .iter()
                .map(|row| {
                    row.as_array()?
                        .iter()
                        .map(|cell| cell.as_str().map(str::to_string))
                        .collect::<Option<Vec<_>>>()
                })
                .collect()
        })
        .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Card {
        title: String,
        description: String,
    }

    fn fixture() -> Catalog {
        Catalog::from_trees(vec![
            (
                "en",
                json!({
                    "home": {
                        "hero": { "title": "Hello", "subtitle": "Welcome" },
                        "bullets": ["one", "two"],
                        "cards": [{ "title": "A", "description": "a" }],
                        "rows": [["1", "2"], ["3", "4"]]
                    }
                }),
            ),
            (
                "ja",
                json!({
                    "home": {
                        "hero": { "title": "こんにちは" },
                        "bullets": "not a list"
                    }
                }),
            ),
        ])
    }

    // ==================== lookup Tests ====================

    #[test]
    fn test_lookup_nested_path() {
        let catalog = fixture();
        assert_eq!(
            catalog.lookup("en", "home.hero.title"),
            Some(&json!("Hello"))
        );
        assert!(catalog.lookup("en", "home.hero.missing").is_none());
        assert!(catalog.lookup("fr", "home.hero.title").is_none());
    }

    // ==================== Translator Tests ====================

    #[test]
    fn test_text_in_requested_locale() {
        let catalog = fixture();
        let t = catalog.translator(Locale::JAPANESE, "home");
        assert_eq!(t.text("hero.title"), "こんにちは");
    }

    #[test]
    fn test_text_falls_back_to_canonical() {
        let catalog = fixture();
        let t = catalog.translator(Locale::JAPANESE, "home");
        assert_eq!(t.text("hero.subtitle"), "Welcome");
    }

    #[test]
    fn test_missing_locale_tree_falls_back() {
        let catalog = fixture();
        let t = catalog.translator(Locale::KOREAN, "home");
        assert_eq!(t.text("hero.title"), "Hello");
        assert_eq!(t.list("bullets"), vec!["one", "two"]);
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        let catalog = fixture();
        let t = catalog.translator(Locale::JAPANESE, "home");
        assert_eq!(t.list("bullets"), vec!["one", "two"]);
    }

    #[test]
    fn test_missing_everywhere() {
        let catalog = fixture();
        let t = catalog.translator(Locale::ENGLISH, "home");
        assert_eq!(t.text("nope"), "home.nope");
        assert!(t.text_opt("nope").is_none());
        assert!(t.list("nope").is_empty());
        assert!(t.table("nope").is_empty());
        assert!(t.records::<Card>("nope").is_empty());
    }

    #[test]
    fn test_records_deserialize() {
        let catalog = fixture();
        let t = catalog.translator(Locale::ENGLISH, "home");
        assert_eq!(
            t.records::<Card>("cards"),
            vec![Card {
                title: "A".to_string(),
                description: "a".to_string()
            }]
        );
    }

    #[test]
    fn test_table() {
        let catalog = fixture();
        let t = catalog.translator(Locale::ENGLISH, "home");
        assert_eq!(t.table("rows"), vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    // ==================== Loading Tests ====================

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = Catalog::embedded().expect("embedded messages should parse");
        for locale in Locale::all() {
            assert!(catalog.lookup(locale.code(), "home.hero.title").is_some());
        }
    }

    #[test]
    fn test_from_dir_requires_canonical_file() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        std::fs::write(dir.path().join("ja.json"), "{}").expect("write");

        let result = Catalog::from_dir(dir.path());
        assert!(matches!(result, Err(SiteError::Io { .. })));
    }

    #[test]
    fn test_from_dir_tolerates_missing_translation_file() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        std::fs::write(
            dir.path().join("en.json"),
            r#"{"features": {"hero": {"title": "Features"}}}"#,
        )
        .expect("write");

        let catalog = Catalog::from_dir(dir.path()).expect("should load");
        let t = catalog.translator(Locale::KOREAN, "features");
        assert_eq!(t.text("hero.title"), "Features");
    }

    #[test]
    fn test_from_dir_reports_bad_json() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        std::fs::write(dir.path().join("en.json"), "{ not json").expect("write");

        let err = Catalog::from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("en.json"));
    }
}
