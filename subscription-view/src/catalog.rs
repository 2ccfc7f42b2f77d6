//! Plan catalog index.
//!
//! Derived lookup from plan identifier to plan record, plus the option list
//! the attach-plan select shows. Always rebuilt from the catalog input as a
//! whole; never patched in place.

use crate::models::{Plan, PlanOption};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanCatalogIndex {
    by_id: HashMap<String, Plan>,
    options: Vec<PlanOption>,
    loaded: bool,
}

impl PlanCatalogIndex {
    /// Build the index for a catalog, or an empty unloaded index when the
    /// catalog has not arrived yet.
    ///
    /// Options keep catalog order. When an identifier repeats, the first
    /// entry wins so that map keys and options stay 1:1; a naive
    /// insert-every-plan map would instead keep the last one, and its
    /// option list would show the id twice.
    pub fn build(plans: Option<&[Plan]>) -> Self {
        let Some(plans) = plans else {
            debug!("Plan catalog not loaded");
            return Self::default();
        };

        let mut by_id = HashMap::with_capacity(plans.len());
        let mut options = Vec::with_capacity(plans.len());

        for plan in plans {
            match by_id.entry(plan.billing_plan_id.clone()) {
                Entry::Occupied(_) => {
                    warn!(
                        billing_plan_id = %plan.billing_plan_id,
                        name = %plan.name,
                        "Duplicate plan id in catalog, keeping first entry"
                    );
                }
                Entry::Vacant(slot) => {
                    options.push(PlanOption::from(plan));
                    slot.insert(plan.clone());
                }
            }
        }

        debug!(plans = options.len(), "Plan catalog index built");

        Self {
            by_id,
            options,
            loaded: true,
        }
    }

    /// False while the parent is still loading the catalog.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn get(&self, plan_id: &str) -> Option<&Plan> {
        self.by_id.get(plan_id)
    }

    pub fn contains(&self, plan_id: &str) -> bool {
        self.by_id.contains_key(plan_id)
    }

    pub fn options(&self) -> &[PlanOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Options whose label contains `query`, ignoring case. A blank query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<&PlanOption> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.options.iter().collect();
        }

        self.options
            .iter()
            .filter(|option| option.label.to_lowercase().contains(&needle))
            .collect()
    }
}
