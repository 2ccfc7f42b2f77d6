//! Billing plan model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Billing plan as supplied by the parent container's catalog.
///
/// Fields this crate does not interpret are kept in `extra` so the record
/// handed back through `on_change` is the one the parent supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub billing_plan_id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Plan {
    pub fn new(billing_plan_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            billing_plan_id: billing_plan_id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Attach an uninterpreted field, e.g. a price or interval.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Entry of the attach-plan select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOption {
    pub label: String,
    pub value: String,
}

impl From<&Plan> for PlanOption {
    fn from(plan: &Plan) -> Self {
        Self {
            label: plan.name.clone(),
            value: plan.billing_plan_id.clone(),
        }
    }
}
