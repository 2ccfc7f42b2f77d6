//! Cancellation policies and their dispatch.
//!
//! The three actions form one enumeration. Every trigger that opens the
//! cancellation menu lists [`CancellationAction::ALL`]; no trigger keeps its
//! own copy of the menu.

use crate::error::ViewError;
use crate::handler::SubscriptionHandler;
use crate::models::{CancellationRequest, Subscription};
use crate::services::record_cancellation;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Cancellation policy offered in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CancellationAction {
    /// Cut access now and issue the final invoice now.
    CancelAndBillNow,
    /// Cut access now without a further invoice.
    CancelWithoutBilling,
    /// Keep access through the current term and stop auto-renewal.
    CancelRenewal,
}

impl CancellationAction {
    /// Menu order.
    pub const ALL: [CancellationAction; 3] = [
        CancellationAction::CancelAndBillNow,
        CancellationAction::CancelWithoutBilling,
        CancellationAction::CancelRenewal,
    ];

    /// Menu item key, unique per action.
    pub fn key(&self) -> &'static str {
        match self {
            CancellationAction::CancelAndBillNow => "cancel_bill_now",
            CancellationAction::CancelWithoutBilling => "cancel_without_billing",
            CancellationAction::CancelRenewal => "cancel_renewal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CancellationAction::CancelAndBillNow => "Cancel and Bill Now",
            CancellationAction::CancelWithoutBilling => "Cancel Without Billing",
            CancellationAction::CancelRenewal => "Cancel Renewal",
        }
    }

    pub fn bill_now(&self) -> bool {
        matches!(self, CancellationAction::CancelAndBillNow)
    }

    pub fn revoke_access(&self) -> bool {
        !matches!(self, CancellationAction::CancelRenewal)
    }

    /// Build the request this policy sends for `subscription`.
    pub fn request_for(&self, subscription: &Subscription) -> CancellationRequest {
        CancellationRequest::new(
            &subscription.subscription_uid,
            self.bill_now(),
            self.revoke_access(),
        )
    }
}

impl fmt::Display for CancellationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CancellationAction {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CancellationAction::ALL
            .into_iter()
            .find(|action| action.key() == s)
            .ok_or_else(|| ViewError::UnknownAction(s.to_string()))
    }
}

/// Buttons on the active-plan panel. Both open the same cancellation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionTrigger {
    SwitchPlan,
    CancelSubscription,
}

impl ActionTrigger {
    pub const ALL: [ActionTrigger; 2] = [
        ActionTrigger::SwitchPlan,
        ActionTrigger::CancelSubscription,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActionTrigger::SwitchPlan => "Switch Plan",
            ActionTrigger::CancelSubscription => "Cancel Subscription",
        }
    }

    // TODO: give SwitchPlan a plan picker once product decides what switching means.
    pub fn menu(&self) -> &'static [CancellationAction] {
        &CancellationAction::ALL
    }
}

/// Dispatches cancellation requests against the first subscription.
///
/// Only obtainable for a non-empty subscription list. With several
/// subscriptions only the first one is addressable.
#[derive(Debug, Clone, Copy)]
pub struct CancellationDispatcher<'a> {
    target: &'a Subscription,
}

impl<'a> CancellationDispatcher<'a> {
    pub fn new(subscriptions: &'a [Subscription]) -> Option<Self> {
        subscriptions.first().map(|target| Self { target })
    }

    pub fn target(&self) -> &'a Subscription {
        self.target
    }

    /// Build the request for `action` and pass it to `on_cancel`.
    pub fn dispatch<H>(&self, action: CancellationAction, handler: &mut H) -> CancellationRequest
    where
        H: SubscriptionHandler + ?Sized,
    {
        let request = action.request_for(self.target);

        info!(
            subscription_uid = %request.subscription_uid(),
            action = %action,
            bill_now = request.bill_now(),
            revoke_access = request.revoke_access(),
            "Dispatching cancellation"
        );
        record_cancellation(action.key());

        handler.on_cancel(request.clone());
        request
    }

    /// Dispatch by menu item key. Unknown keys dispatch nothing.
    pub fn dispatch_key<H>(
        &self,
        key: &str,
        handler: &mut H,
    ) -> Result<CancellationRequest, ViewError>
    where
        H: SubscriptionHandler + ?Sized,
    {
        let action: CancellationAction = key.parse()?;
        Ok(self.dispatch(action, handler))
    }
}
