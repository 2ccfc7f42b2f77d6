//! subscription-view: headless customer subscription panel.
//!
//! Shows the active plan of a customer, offers the plan catalog when there
//! is no subscription, and turns the three cancellation policies into
//! requests for the parent container. Creating and cancelling subscriptions
//! happens in the parent, through [`SubscriptionHandler`].
//!
//! ```
//! use subscription_view::{handler_fn, Panel, Plan, SubscriptionView};
//!
//! let mut attached = Vec::new();
//! let mut view = SubscriptionView::new(handler_fn(
//!     |plan: Plan| attached.push(plan.billing_plan_id),
//!     |_request| {},
//! ));
//! view.set_plans(Some(vec![Plan::new("P1", "Starter")]));
//!
//! if let Panel::Unattached(mut form) = view.panel() {
//!     form.select("P1");
//!     form.submit();
//! }
//! drop(view);
//! assert_eq!(attached, vec!["P1".to_string()]);
//! ```
pub mod cancellation;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handler;
pub mod models;
pub mod observability;
pub mod render;
pub mod selection;
pub mod services;
pub mod view;

pub use cancellation::{ActionTrigger, CancellationAction, CancellationDispatcher};
pub use catalog::PlanCatalogIndex;
pub use config::{LogFormat, ViewConfig};
pub use error::{Result, ViewError};
pub use handler::{handler_fn, FnHandler, SubscriptionHandler};
pub use models::{CancellationRequest, Plan, PlanOption, Subscription};
pub use render::PanelView;
pub use selection::{SelectionState, SubmitOutcome};
pub use view::{ActivePlanPanel, AttachPlanPanel, Panel, SubscriptionView, ViewState};
