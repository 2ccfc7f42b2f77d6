//! Metrics module for subscription-view.
//! Provides Prometheus counters for panel interactions.

use once_cell::sync::Lazy;
use prometheus::{
    opts, register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec,
    TextEncoder,
};
use std::sync::OnceLock;

/// Catalog index rebuilds
pub static CATALOG_REBUILDS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(opts!(
        "subscription_view_catalog_rebuilds_total",
        "Plan catalog index rebuilds"
    ))
    .expect("Failed to register CATALOG_REBUILDS_TOTAL")
});

/// Plan selections made in the attach-plan form
pub static PLAN_SELECTIONS_TOTAL: OnceLock<IntCounter> = OnceLock::new();

/// Attach-plan submissions by outcome
pub static PLAN_SUBMISSIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Cancellation requests by action
pub static CANCELLATIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize all metrics. Safe to call more than once.
pub fn init_metrics() {
    PLAN_SELECTIONS_TOTAL.get_or_init(|| {
        register_int_counter!(opts!(
            "subscription_view_plan_selections_total",
            "Plans picked in the attach-plan form"
        ))
        .expect("Failed to register PLAN_SELECTIONS_TOTAL")
    });

    PLAN_SUBMISSIONS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "subscription_view_plan_submissions_total",
                "Attach-plan submissions by outcome"
            ),
            &["outcome"]
        )
        .expect("Failed to register PLAN_SUBMISSIONS_TOTAL")
    });

    CANCELLATIONS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "subscription_view_cancellations_total",
                "Cancellation requests dispatched by action"
            ),
            &["action"]
        )
        .expect("Failed to register CANCELLATIONS_TOTAL")
    });

    // Force initialization of lazy statics
    let _ = &*CATALOG_REBUILDS_TOTAL;
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::warn!(error = %e, "Failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Record a catalog index rebuild.
pub fn record_catalog_rebuild() {
    CATALOG_REBUILDS_TOTAL.inc();
}

/// Record a plan selection.
pub fn record_plan_selection() {
    if let Some(counter) = PLAN_SELECTIONS_TOTAL.get() {
        counter.inc();
    }
}

/// Record an attach-plan submission.
pub fn record_plan_submission(outcome: &str) {
    if let Some(counter) = PLAN_SUBMISSIONS_TOTAL.get() {
        counter.with_label_values(&[outcome]).inc();
    }
}

/// Record a dispatched cancellation.
pub fn record_cancellation(action: &str) {
    if let Some(counter) = CANCELLATIONS_TOTAL.get() {
        counter.with_label_values(&[action]).inc();
    }
}
