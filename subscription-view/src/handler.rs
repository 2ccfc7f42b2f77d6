//! Callbacks supplied by the parent container.
//!
//! The panel never talks to the billing backend itself. It hands the chosen
//! plan or the built cancellation request to these callbacks and expects the
//! parent to re-supply fresh subscriptions once its own round trip is done.

use crate::models::{CancellationRequest, Plan};

pub trait SubscriptionHandler {
    /// A plan was picked and submitted in the attach-plan form.
    fn on_change(&mut self, plan: Plan);

    /// One of the cancellation actions was chosen.
    fn on_cancel(&mut self, request: CancellationRequest);
}

impl<H: SubscriptionHandler + ?Sized> SubscriptionHandler for &mut H {
    fn on_change(&mut self, plan: Plan) {
        (**self).on_change(plan)
    }

    fn on_cancel(&mut self, request: CancellationRequest) {
        (**self).on_cancel(request)
    }
}

impl<H: SubscriptionHandler + ?Sized> SubscriptionHandler for Box<H> {
    fn on_change(&mut self, plan: Plan) {
        (**self).on_change(plan)
    }

    fn on_cancel(&mut self, request: CancellationRequest) {
        (**self).on_cancel(request)
    }
}

/// Handler built from a pair of closures.
pub struct FnHandler<C, X> {
    on_change: C,
    on_cancel: X,
}

/// Wrap two closures as a [`SubscriptionHandler`].
pub fn handler_fn<C, X>(on_change: C, on_cancel: X) -> FnHandler<C, X>
where
    C: FnMut(Plan),
    X: FnMut(CancellationRequest),
{
    FnHandler {
        on_change,
        on_cancel,
    }
}

impl<C, X> SubscriptionHandler for FnHandler<C, X>
where
    C: FnMut(Plan),
    X: FnMut(CancellationRequest),
{
    fn on_change(&mut self, plan: Plan) {
        (self.on_change)(plan)
    }

    fn on_cancel(&mut self, request: CancellationRequest) {
        (self.on_cancel)(request)
    }
}
