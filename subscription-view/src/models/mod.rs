//! Domain models for subscription-view.

mod cancellation;
mod plan;
mod subscription;

pub use cancellation::CancellationRequest;
pub use plan::{Plan, PlanOption};
pub use subscription::Subscription;
