//! Translation catalog validation.
//!
//! Pages declare every key they read as a [`KeySpec`]. At load time the
//! catalog is checked against those declarations: a key that is missing or
//! has the wrong shape in the canonical locale is an error (the site refuses
//! to start), while gaps in other locales are warnings, since rendering falls
//! back to the canonical text for them.

use crate::i18n::{Catalog, Locale};
use serde_json::Value;

/// Expected shape of a translation value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// A single string
    Text,

    /// A list of strings
    List,

    /// A list of objects, each with the given string fields
    Records(&'static [&'static str]),

    /// A list of rows, each a list of strings
    Table,
}

impl KeyKind {
    /// Check whether a JSON value has this shape.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            KeyKind::Text => value.is_string(),
            KeyKind::List => is_string_list(value),
            KeyKind::Records(fields) => value.as_array().is_some_and(|items| {
                items.iter().all(|item| {
                    item.as_object().is_some_and(|object| {
                        fields
                            .iter()
                            .all(|field| object.get(*field).is_some_and(Value::is_string))
                    })
                })
            }),
            KeyKind::Table => value
                .as_array()
                .is_some_and(|rows| rows.iter().all(is_string_list)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            KeyKind::Text => "a string".to_string(),
            KeyKind::List => "a list of strings".to_string(),
            KeyKind::Records(fields) => format!("a list of {{{}}} records", fields.join(", ")),
            KeyKind::Table => "a list of string rows".to_string(),
        }
    }
}

fn is_string_list(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_string))
}

/// A translation key read by a page, with its expected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpec {
    pub namespace: &'static str,
    pub key: &'static str,
    pub kind: KeyKind,
}

impl KeySpec {
    pub const fn text(namespace: &'static str, key: &'static str) -> Self {
        Self {
            namespace,
            key,
            kind: KeyKind::Text,
        }
    }

    pub const fn list(namespace: &'static str, key: &'static str) -> Self {
        Self {
            namespace,
            key,
            kind: KeyKind::List,
        }
    }

    pub const fn records(
        namespace: &'static str,
        key: &'static str,
        fields: &'static [&'static str],
    ) -> Self {
        Self {
            namespace,
            key,
            kind: KeyKind::Records(fields),
        }
    }

    pub const fn table(namespace: &'static str, key: &'static str) -> Self {
        Self {
            namespace,
            key,
            kind: KeyKind::Table,
        }
    }

    /// Full dotted path (`namespace.key`).
    pub fn path(&self) -> String {
        format!("{}.{}", self.namespace, self.key)
    }
}

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems in the canonical locale; rendering cannot recover from these
    pub errors: Vec<String>,

    /// Problems in other locales; rendering falls back to canonical text
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation catalogs.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Check every declared key in every enabled locale.
    pub fn validate(catalog: &Catalog, specs: &[KeySpec]) -> ValidationReport {
        let mut report = ValidationReport::new();

        for locale in Locale::all() {
            for spec in specs {
                let Some(problem) = Self::check(catalog, locale, spec) else {
                    continue;
                };
                let message = format!("{}: {}", locale, problem);
                if locale.is_canonical() {
                    report.errors.push(message);
                } else {
                    report.warnings.push(message);
                }
            }
        }

        report
    }

    fn check(catalog: &Catalog, locale: Locale, spec: &KeySpec) -> Option<String> {
        let path = spec.path();
        match catalog.lookup(locale.code(), &path) {
            None => Some(format!("missing {}", path)),
            Some(value) if !spec.kind.matches(value) => Some(format!(
                "{} should be {}",
                path,
                spec.kind.describe()
            )),
            Some(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SPECS: &[KeySpec] = &[
        KeySpec::text("home", "hero.title"),
        KeySpec::list("home", "tabs.educator.items"),
        KeySpec::records("home", "faq.items", &["question", "answer"]),
        KeySpec::table("educators", "earnings.rows"),
    ];

    fn catalog(en: Value, ja: Value, ko: Value) -> Catalog {
        Catalog::from_trees(vec![("en", en), ("ja", ja), ("ko", ko)])
    }

    fn complete_tree(title: &str) -> Value {
        json!({
            "home": {
                "hero": { "title": title },
                "tabs": { "educator": { "items": ["one", "two"] } },
                "faq": { "items": [{ "question": "Q?", "answer": "A." }] }
            },
            "educators": {
                "earnings": { "rows": [["a", "b"], ["c", "d"]] }
            }
        })
    }

    // ==================== KeyKind Tests ====================

    #[test]
    fn test_kind_text() {
        assert!(KeyKind::Text.matches(&json!("hello")));
        assert!(!KeyKind::Text.matches(&json!(["hello"])));
    }

    #[test]
    fn test_kind_list_accepts_empty() {
        assert!(KeyKind::List.matches(&json!([])));
        assert!(!KeyKind::List.matches(&json!(["a", 1])));
    }

    #[test]
    fn test_kind_records_requires_fields() {
        let kind = KeyKind::Records(&["title", "description"]);
        assert!(kind.matches(&json!([{ "title": "t", "description": "d", "extra": 1 }])));
        assert!(!kind.matches(&json!([{ "title": "t" }])));
        assert!(!kind.matches(&json!(["t"])));
    }

    #[test]
    fn test_kind_table() {
        assert!(KeyKind::Table.matches(&json!([["a"], []])));
        assert!(!KeyKind::Table.matches(&json!(["a"])));
    }

    // ==================== validate Tests ====================

    #[test]
    fn test_complete_catalog_is_clean() {
        let catalog = catalog(
            complete_tree("Hello"),
            complete_tree("こんにちは"),
            complete_tree("안녕하세요"),
        );
        let report = CatalogValidator::validate(&catalog, SPECS);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_missing_canonical_key_is_error() {
        let mut en = complete_tree("Hello");
        en["home"]["hero"] = json!({});
        let catalog = catalog(en, complete_tree("ja"), complete_tree("ko"));

        let report = CatalogValidator::validate(&catalog, SPECS);
        assert_eq!(report.errors, vec!["en: missing home.hero.title".to_string()]);
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_missing_translation_is_warning() {
        let catalog = catalog(complete_tree("Hello"), json!({}), complete_tree("ko"));

        let report = CatalogValidator::validate(&catalog, SPECS);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), SPECS.len());
        assert!(report.warnings.iter().all(|w| w.starts_with("ja: missing")));
    }

    #[test]
    fn test_wrong_shape_is_reported() {
        let mut ko = complete_tree("ko");
        ko["home"]["faq"]["items"] = json!(["not a record"]);
        let catalog = catalog(complete_tree("Hello"), complete_tree("ja"), ko);

        let report = CatalogValidator::validate(&catalog, SPECS);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("home.faq.items should be a list of {question, answer} records"));
    }
}
