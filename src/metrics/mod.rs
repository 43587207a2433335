//! Metrics collection for observability

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec_with_registry, register_int_gauge_with_registry, CounterVec, IntGauge,
    Opts, Registry,
};
use std::sync::Arc;

/// Global metrics registry
pub static METRICS: Lazy<Arc<Metrics>> = Lazy::new(|| {
    Arc::new(Metrics::new().expect("Failed to initialize metrics"))
});

/// Metrics collector
pub struct Metrics {
    registry: Registry,

    // Retriever registry metrics
    pub registrations: CounterVec,
    pub lookups: CounterVec,
    pub registered: IntGauge,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let registry = Registry::new();

        let registrations = register_counter_vec_with_registry!(
            Opts::new(
                "fact_retriever_registrations_total",
                "Total fact retriever registration attempts"
            ),
            &["status"],
            registry
        )?;

        let lookups = register_counter_vec_with_registry!(
            Opts::new(
                "fact_retriever_lookups_total",
                "Total fact retriever lookups by id"
            ),
            &["status"],
            registry
        )?;

        let registered = register_int_gauge_with_registry!(
            Opts::new(
                "fact_retrievers_registered",
                "Number of currently registered fact retrievers"
            ),
            registry
        )?;

        Ok(Self {
            registry,
            registrations,
            lookups,
            registered,
        })
    }

    /// Get the metrics registry for exporting
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Record a registration attempt
    pub fn record_registration(&self, success: bool) {
        let status = if success { "success" } else { "conflict" };
        self.registrations.with_label_values(&[status]).inc();
    }

    /// Record a lookup by id
    pub fn record_lookup(&self, found: bool) {
        let status = if found { "success" } else { "not_found" };
        self.lookups.with_label_values(&[status]).inc();
    }

    /// Update the registered retriever count
    pub fn set_registered(&self, count: usize) {
        self.registered.set(count as i64);
    }

    /// Export metrics in Prometheus text format
    pub fn export_prometheus(&self) -> String {
        use prometheus::Encoder;

        let encoder = prometheus::TextEncoder::new();
        let metric_families = self.registry.gather();

        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).unwrap_or_default();

        String::from_utf8(buffer).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_initialization() {
        let metrics = Metrics::new();
        assert!(metrics.is_ok());
    }

    #[test]
    fn test_record_registration() {
        let metrics = Metrics::new().unwrap();
        metrics.record_registration(true);
        metrics.record_registration(false);
        metrics.set_registered(1);
        assert_eq!(metrics.registered.get(), 1);
    }

    #[test]
    fn test_export_prometheus_includes_registry_metrics() {
        let metrics = Metrics::new().unwrap();
        metrics.record_lookup(true);

        let exported = metrics.export_prometheus();
        assert!(exported.contains("fact_retriever_lookups_total"));
    }
}
