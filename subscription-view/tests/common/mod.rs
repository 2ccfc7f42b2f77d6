//! Test helper module for subscription-view integration tests.
//!
//! Provides catalog and subscription fixtures and a handler that records
//! every callback.

#![allow(dead_code)]

use chrono::NaiveDate;
use serde_json::json;
use subscription_view::{
    ActivePlanPanel, AttachPlanPanel, CancellationRequest, Panel, Plan, Subscription,
    SubscriptionHandler, SubscriptionView,
};

pub const TEST_SUBSCRIPTION_UID: &str = "S1";

/// Records callbacks in the order the panel fired them.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    pub changes: Vec<Plan>,
    pub cancels: Vec<CancellationRequest>,
}

impl SubscriptionHandler for RecordingHandler {
    fn on_change(&mut self, plan: Plan) {
        self.changes.push(plan);
    }

    fn on_cancel(&mut self, request: CancellationRequest) {
        self.cancels.push(request);
    }
}

/// Three-plan catalog; the parent's extra fields ride along.
pub fn test_plans() -> Vec<Plan> {
    vec![
        Plan::new("P1", "Starter")
            .with_field("flat_rate", json!(10))
            .with_field("interval", json!("month")),
        Plan::new("P2", "Growth").with_field("flat_rate", json!(49)),
        Plan::new("P3", "Enterprise").with_field("flat_rate", json!(499)),
    ]
}

pub fn test_subscription(uid: &str, plan_name: &str) -> Subscription {
    Subscription {
        subscription_uid: uid.to_string(),
        billing_plan_name: plan_name.to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 9, 1).expect("valid date"),
        end_date: NaiveDate::from_ymd_opt(2026, 10, 1).expect("valid date"),
        auto_renew: true,
    }
}

/// View with the test catalog loaded and no subscription.
pub fn unattached_view() -> SubscriptionView<RecordingHandler> {
    let mut view = SubscriptionView::new(RecordingHandler::default());
    view.set_plans(Some(test_plans()));
    view
}

/// View attached to the given subscriptions.
pub fn attached_view(subscriptions: Vec<Subscription>) -> SubscriptionView<RecordingHandler> {
    let mut view = unattached_view();
    view.set_subscriptions(subscriptions);
    view
}

pub fn expect_attach_form<H>(panel: Panel<'_, H>) -> AttachPlanPanel<'_, H> {
    match panel {
        Panel::Unattached(form) => form,
        Panel::Attached(_) => panic!("expected the attach-plan form"),
    }
}

pub fn expect_active_plan<H>(panel: Panel<'_, H>) -> ActivePlanPanel<'_, H> {
    match panel {
        Panel::Attached(active) => active,
        Panel::Unattached(_) => panic!("expected the active-plan panel"),
    }
}
