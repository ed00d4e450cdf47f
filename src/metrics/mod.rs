use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Form page serves
// - Order relay outcomes (created / rejected / failed)
// - Upstream request latency
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

/// Central metrics registry for the entire application
pub struct Metrics {
    registry: Registry,

    pub forms_served_total: IntCounter,
    pub orders_relayed_total: IntCounterVec,
    pub upstream_request_duration: Histogram,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let forms_served_total = IntCounter::new(
            "forms_served_total",
            "Total order form pages served",
        )?;
        registry.register(Box::new(forms_served_total.clone()))?;

        let orders_relayed_total = IntCounterVec::new(
            Opts::new("orders_relayed_total", "Total order submissions relayed upstream"),
            &["outcome"],
        )?;
        registry.register(Box::new(orders_relayed_total.clone()))?;

        let upstream_request_duration = Histogram::with_opts(
            HistogramOpts::new("upstream_request_duration_seconds", "Upstream order-creation call duration")
                .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        )?;
        registry.register(Box::new(upstream_request_duration.clone()))?;

        Ok(Self {
            registry,
            forms_served_total,
            orders_relayed_total,
            upstream_request_duration,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record a form page serve
    pub fn record_form_served(&self) {
        self.forms_served_total.inc();
    }

    /// Helper to record a relay outcome and its upstream latency
    pub fn record_relay(&self, outcome: &str, duration_secs: f64) {
        self.orders_relayed_total.with_label_values(&[outcome]).inc();
        self.upstream_request_duration.observe(duration_secs);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new().expect("Failed to create metrics")
    }
}
