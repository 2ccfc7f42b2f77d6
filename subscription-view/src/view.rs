//! The subscription panel: picks the attach-plan form or the active-plan
//! summary from the subscription snapshot the parent supplies.

use crate::cancellation::{ActionTrigger, CancellationAction, CancellationDispatcher};
use crate::catalog::PlanCatalogIndex;
use crate::config::ViewConfig;
use crate::error::ViewError;
use crate::handler::SubscriptionHandler;
use crate::models::{CancellationRequest, Plan, PlanOption, Subscription};
use crate::render::{
    AttachPlanFormView, PanelView, SubscriptionSummary, TriggerView, ATTACHED_HEADING,
    ATTACH_SUBMIT_LABEL, PLAN_PLACEHOLDER, UNATTACHED_HEADING, UNATTACHED_PROMPT,
};
use crate::selection::{SelectionState, SubmitOutcome, ATTACH_FORM_NAME, PLAN_FIELD};
use crate::services::record_catalog_rebuild;
use tracing::debug;

/// Which of the two panels is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Unattached,
    Attached,
}

pub struct SubscriptionView<H> {
    subscriptions: Vec<Subscription>,
    plans: Option<Vec<Plan>>,
    catalog: PlanCatalogIndex,
    selection: SelectionState,
    plan_search: bool,
    handler: H,
}

impl<H: SubscriptionHandler> SubscriptionView<H> {
    pub fn new(handler: H) -> Self {
        Self {
            subscriptions: Vec::new(),
            plans: None,
            catalog: PlanCatalogIndex::default(),
            selection: SelectionState::new(),
            plan_search: true,
            handler,
        }
    }

    pub fn with_config(mut self, config: &ViewConfig) -> Self {
        self.plan_search = config.plan_search;
        self
    }

    /// Replace the subscription snapshot.
    ///
    /// The attach-plan form is not shown while attached, so a non-empty
    /// snapshot drops any pending selection.
    pub fn set_subscriptions(&mut self, subscriptions: Vec<Subscription>) {
        self.subscriptions = subscriptions;
        if !self.subscriptions.is_empty() {
            self.selection.reset();
        }
        debug!(
            subscriptions = self.subscriptions.len(),
            state = ?self.state(),
            "Subscriptions updated"
        );
    }

    /// Replace the plan catalog. Returns whether the index was rebuilt; an
    /// input equal to the current one keeps the existing index.
    pub fn set_plans(&mut self, plans: Option<Vec<Plan>>) -> bool {
        if plans == self.plans {
            return false;
        }

        self.catalog = PlanCatalogIndex::build(plans.as_deref());
        self.plans = plans;
        record_catalog_rebuild();
        true
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn catalog(&self) -> &PlanCatalogIndex {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    pub fn state(&self) -> ViewState {
        if self.subscriptions.is_empty() {
            ViewState::Unattached
        } else {
            ViewState::Attached
        }
    }

    /// Interactive handle for the panel currently showing.
    pub fn panel(&mut self) -> Panel<'_, H> {
        match CancellationDispatcher::new(&self.subscriptions) {
            None => Panel::Unattached(AttachPlanPanel {
                selection: &mut self.selection,
                catalog: &self.catalog,
                plan_search: self.plan_search,
                handler: &mut self.handler,
            }),
            Some(dispatcher) => Panel::Attached(ActivePlanPanel {
                dispatcher,
                subscriptions: &self.subscriptions,
                handler: &mut self.handler,
            }),
        }
    }

    pub fn render(&self) -> PanelView {
        match self.state() {
            ViewState::Unattached => PanelView::Unattached {
                heading: UNATTACHED_HEADING,
                prompt: UNATTACHED_PROMPT,
                form: AttachPlanFormView {
                    name: ATTACH_FORM_NAME,
                    field: PLAN_FIELD,
                    placeholder: PLAN_PLACEHOLDER,
                    searchable: self.plan_search,
                    loading: !self.catalog.is_loaded(),
                    selected: self.selection.form().plan().map(str::to_string),
                    options: self.catalog.options().to_vec(),
                    submit_label: ATTACH_SUBMIT_LABEL,
                },
            },
            ViewState::Attached => PanelView::Attached {
                heading: ATTACHED_HEADING,
                subscriptions: self
                    .subscriptions
                    .iter()
                    .map(SubscriptionSummary::from)
                    .collect(),
                triggers: ActionTrigger::ALL.into_iter().map(TriggerView::from).collect(),
            },
        }
    }
}

/// The panel showing. Cancellation is only reachable through `Attached`.
pub enum Panel<'a, H> {
    Unattached(AttachPlanPanel<'a, H>),
    Attached(ActivePlanPanel<'a, H>),
}

/// Attach-plan form shown while the customer has no subscription.
pub struct AttachPlanPanel<'a, H> {
    selection: &'a mut SelectionState,
    catalog: &'a PlanCatalogIndex,
    plan_search: bool,
    handler: &'a mut H,
}

impl<H: SubscriptionHandler> AttachPlanPanel<'_, H> {
    pub fn options(&self) -> &[PlanOption] {
        self.catalog.options()
    }

    /// Options matching `query`; every option when search is disabled.
    pub fn search(&self, query: &str) -> Vec<&PlanOption> {
        if self.plan_search {
            self.catalog.search(query)
        } else {
            self.catalog.options().iter().collect()
        }
    }

    pub fn select(&mut self, plan_id: impl Into<String>) {
        self.selection.select(plan_id);
    }

    pub fn pending(&self) -> Option<&str> {
        self.selection.pending()
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.selection.submit(self.catalog, &mut *self.handler)
    }

    pub fn reset(&mut self) {
        self.selection.reset();
    }
}

/// Active-plan summary with the cancellation menu.
pub struct ActivePlanPanel<'a, H> {
    dispatcher: CancellationDispatcher<'a>,
    subscriptions: &'a [Subscription],
    handler: &'a mut H,
}

impl<'a, H: SubscriptionHandler> ActivePlanPanel<'a, H> {
    pub fn subscriptions(&self) -> &'a [Subscription] {
        self.subscriptions
    }

    /// The subscription every cancellation action targets.
    pub fn target(&self) -> &'a Subscription {
        self.dispatcher.target()
    }

    pub fn triggers(&self) -> &'static [ActionTrigger] {
        &ActionTrigger::ALL
    }

    pub fn cancel(&mut self, action: CancellationAction) -> CancellationRequest {
        self.dispatcher.dispatch(action, &mut *self.handler)
    }

    /// Cancel through a menu item key as reported by the front end.
    pub fn cancel_by_key(&mut self, key: &str) -> Result<CancellationRequest, ViewError> {
        self.dispatcher.dispatch_key(key, &mut *self.handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use chrono::NaiveDate;

    #[derive(Default)]
    struct Recorder {
        changes: Vec<Plan>,
        cancels: Vec<CancellationRequest>,
    }

    impl SubscriptionHandler for Recorder {
        fn on_change(&mut self, plan: Plan) {
            self.changes.push(plan);
        }

        fn on_cancel(&mut self, request: CancellationRequest) {
            self.cancels.push(request);
        }
    }

    fn subscription(uid: &str) -> Subscription {
        Subscription {
            subscription_uid: uid.to_string(),
            billing_plan_name: "Growth".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            auto_renew: false,
        }
    }

    #[test]
    #[serial]
    fn test_state_follows_subscription_count() {
        let mut view = SubscriptionView::new(Recorder::default());
        assert_eq!(view.state(), ViewState::Unattached);

        view.set_subscriptions(vec![subscription("S1")]);
        assert_eq!(view.state(), ViewState::Attached);

        view.set_subscriptions(vec![]);
        assert_eq!(view.state(), ViewState::Unattached);
    }

    #[test]
    #[serial]
    fn test_set_plans_skips_identical_input() {
        let mut view = SubscriptionView::new(Recorder::default());
        let plans = vec![Plan::new("P1", "Starter")];

        assert!(!view.set_plans(None));
        assert!(view.set_plans(Some(plans.clone())));
        assert!(!view.set_plans(Some(plans)));
        assert!(view.set_plans(None));
        assert!(!view.catalog().is_loaded());
    }

    #[test]
    #[serial]
    fn test_attaching_drops_pending_selection() {
        let mut view = SubscriptionView::new(Recorder::default());
        view.set_plans(Some(vec![Plan::new("P1", "Starter")]));

        if let Panel::Unattached(mut form) = view.panel() {
            form.select("P1");
        }
        view.set_subscriptions(vec![subscription("S1")]);

        assert_eq!(view.selection().pending(), None);
        assert!(view.handler().changes.is_empty());
    }

    #[test]
    #[serial]
    fn test_search_disabled_returns_all_options() {
        let config = ViewConfig {
            plan_search: false,
            ..ViewConfig::default()
        };
        let mut view = SubscriptionView::new(Recorder::default()).with_config(&config);
        view.set_plans(Some(vec![Plan::new("P1", "Starter"), Plan::new("P2", "Growth")]));

        match view.panel() {
            Panel::Unattached(form) => assert_eq!(form.search("growth").len(), 2),
            Panel::Attached(_) => panic!("expected attach form"),
        }
    }
}
