//! Serializable view model of the subscription panel.
//!
//! Front ends draw from this; it carries every label and option the panel
//! shows but no styling.

use crate::cancellation::{ActionTrigger, CancellationAction};
use crate::models::{PlanOption, Subscription};
use chrono::NaiveDate;
use serde::Serialize;

pub const UNATTACHED_HEADING: &str = "No Subscription";
pub const UNATTACHED_PROMPT: &str = "Please attach a Plan";
pub const PLAN_PLACEHOLDER: &str = "Select a plan";
pub const ATTACH_SUBMIT_LABEL: &str = "Attach Plan";
pub const ATTACHED_HEADING: &str = "Active Plan";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PanelView {
    Unattached {
        heading: &'static str,
        prompt: &'static str,
        form: AttachPlanFormView,
    },
    Attached {
        heading: &'static str,
        subscriptions: Vec<SubscriptionSummary>,
        triggers: Vec<TriggerView>,
    },
}

impl PanelView {
    pub fn is_attached(&self) -> bool {
        matches!(self, PanelView::Attached { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttachPlanFormView {
    pub name: &'static str,
    pub field: &'static str,
    pub placeholder: &'static str,
    pub searchable: bool,
    /// True until the parent supplies a catalog.
    pub loading: bool,
    pub selected: Option<String>,
    pub options: Vec<PlanOption>,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionSummary {
    pub plan_name: String,
    pub subscription_uid: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub renews: &'static str,
}

impl From<&Subscription> for SubscriptionSummary {
    fn from(subscription: &Subscription) -> Self {
        Self {
            plan_name: subscription.billing_plan_name.clone(),
            subscription_uid: subscription.subscription_uid.clone(),
            start_date: subscription.start_date,
            end_date: subscription.end_date,
            renews: subscription.renews_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerView {
    pub trigger: ActionTrigger,
    pub label: &'static str,
    pub menu: Vec<MenuItemView>,
}

impl From<ActionTrigger> for TriggerView {
    fn from(trigger: ActionTrigger) -> Self {
        Self {
            trigger,
            label: trigger.label(),
            menu: trigger.menu().iter().copied().map(MenuItemView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemView {
    pub key: &'static str,
    pub label: &'static str,
}

impl From<CancellationAction> for MenuItemView {
    fn from(action: CancellationAction) -> Self {
        Self {
            key: action.key(),
            label: action.label(),
        }
    }
}
