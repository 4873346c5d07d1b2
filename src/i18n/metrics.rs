//! Translation lookup metrics.
//!
//! Counts how often page renders hit the requested locale, fall back to the
//! canonical locale, or miss entirely. Reported by the health endpoint.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    lookups: AtomicUsize,

    /// Lookups answered by the canonical locale instead of the requested one
    fallbacks: AtomicUsize,

    /// Lookups not answered by any locale
    misses: AtomicUsize,
}

static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(TranslationMetrics::new)
    }

    /// A detached set of counters, independent of the global instance.
    pub fn new() -> Self {
        Self {
            lookups: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let fallbacks = self.fallbacks();
        let fallback_rate = if lookups > 0 {
            (fallbacks as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            fallbacks,
            misses: self.misses(),
            fallback_rate,
        }
    }
}

impl Default for TranslationMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the translation counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub fallbacks: usize,
    pub misses: usize,

    /// Fallbacks as a percentage of lookups (0-100)
    pub fallback_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_empty() {
        let metrics = TranslationMetrics::new();

        let report = metrics.report();
        assert_eq!(report.lookups, 0);
        assert_eq!(report.fallback_rate, 0.0);
    }

    #[test]
    fn test_fallback_rate() {
        let metrics = TranslationMetrics::new();

        for _ in 0..4 {
            metrics.record_lookup();
        }
        metrics.record_fallback();
        metrics.record_miss();

        let report = metrics.report();
        assert_eq!(report.lookups, 4);
        assert_eq!(report.fallbacks, 1);
        assert_eq!(report.misses, 1);
        assert!((report.fallback_rate - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_global_is_singleton() {
        assert!(std::ptr::eq(
            TranslationMetrics::global(),
            TranslationMetrics::global()
        ));
    }

    #[test]
    fn test_report_serializes() {
        let metrics = TranslationMetrics::new();
        metrics.record_lookup();

        let json = serde_json::to_value(metrics.report()).expect("Should serialize");
        assert_eq!(json["lookups"], 1);
        assert!(json.get("fallback_rate").is_some());
    }
}
