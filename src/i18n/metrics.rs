//! Lookup metrics and observability module.
//!
//! Tracks how translation lookups are resolved: through the nested path,
//! through the flat-key retry, or not at all (key returned as-is).

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global lookup metrics singleton.
pub struct LookupMetrics {
    /// Lookups answered by the dot-path traversal
    nested_hits: AtomicUsize,

    /// Lookups answered by the flat top-level key retry
    flat_hits: AtomicUsize,

    /// Lookups that fell back to returning the key itself
    misses: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    /// Get the global lookup metrics instance.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(LookupMetrics::new)
    }

    /// Create a standalone set of counters, all zero.
    pub fn new() -> Self {
        LookupMetrics {
            nested_hits: AtomicUsize::new(0),
            flat_hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    pub fn record_nested_hit(&self) {
        self.nested_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_flat_hit(&self) {
        self.flat_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn nested_hits(&self) -> usize {
        self.nested_hits.load(Ordering::Relaxed)
    }

    pub fn flat_hits(&self) -> usize {
        self.flat_hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let nested_hits = self.nested_hits();
        let flat_hits = self.flat_hits();
        let misses = self.misses();
        let total_lookups = nested_hits + flat_hits + misses;
        let hit_rate = if total_lookups > 0 {
            ((nested_hits + flat_hits) as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            total_lookups,
            nested_hits,
            flat_hits,
            misses,
            hit_rate,
        }
    }
}

impl Default for LookupMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of lookup metrics, suitable for logging or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub total_lookups: usize,
    pub nested_hits: usize,
    pub flat_hits: usize,
    pub misses: usize,
    /// Percentage of lookups that produced a translation (0-100)
    pub hit_rate: f64,
}

impl MetricsReport {
    /// Format the report as a single log line.
    pub fn format_log(&self) -> String {
        format!(
            "Translation lookups: {} total, {} nested, {} flat, {} missing ({:.1}% hit rate)",
            self.total_lookups, self.nested_hits, self.flat_hits, self.misses, self.hit_rate
        )
    }
}
