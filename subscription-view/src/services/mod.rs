//! Services module for subscription-view.

pub mod metrics;

pub use metrics::{
    get_metrics, init_metrics, record_cancellation, record_catalog_rebuild,
    record_plan_selection, record_plan_submission,
};
