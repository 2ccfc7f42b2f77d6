//! Cancellation request model.

use serde::Serialize;

/// Request handed to the parent container's `on_cancel`.
///
/// Only [`crate::cancellation::CancellationAction`] builds these, so every
/// request carries one of the three valid policy combinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CancellationRequest {
    subscription_uid: String,
    bill_now: bool,
    revoke_access: bool,
}

impl CancellationRequest {
    pub(crate) fn new(subscription_uid: &str, bill_now: bool, revoke_access: bool) -> Self {
        Self {
            subscription_uid: subscription_uid.to_string(),
            bill_now,
            revoke_access,
        }
    }

    pub fn subscription_uid(&self) -> &str {
        &self.subscription_uid
    }

    pub fn bill_now(&self) -> bool {
        self.bill_now
    }

    pub fn revoke_access(&self) -> bool {
        self.revoke_access
    }
}
