//! Pending plan selection for the attach-plan form.

use crate::catalog::PlanCatalogIndex;
use crate::handler::SubscriptionHandler;
use crate::services::{record_plan_selection, record_plan_submission};
use tracing::{debug, info, warn};

/// Form name of the attach-plan form.
pub const ATTACH_FORM_NAME: &str = "create_subscription";

/// Name of the select field bound to the pending selection.
pub const PLAN_FIELD: &str = "plan";

/// Field values of the attach-plan form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachPlanForm {
    plan: Option<String>,
}

impl AttachPlanForm {
    pub fn plan(&self) -> Option<&str> {
        self.plan.as_deref()
    }

    pub fn reset_fields(&mut self) {
        self.plan = None;
    }
}

/// What a submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// `on_change` received the plan with this id.
    Attached(String),
    /// Nothing was selected; no callback.
    NoSelection,
    /// The selected id is not in the current catalog; no callback.
    UnknownPlan(String),
}

impl SubmitOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitOutcome::Attached(_) => "attached",
            SubmitOutcome::NoSelection => "no_selection",
            SubmitOutcome::UnknownPlan(_) => "unknown_plan",
        }
    }

    pub fn is_attached(&self) -> bool {
        matches!(self, SubmitOutcome::Attached(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pending: Option<String>,
    form: AttachPlanForm,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `plan_id` as the pending selection, replacing any earlier one.
    pub fn select(&mut self, plan_id: impl Into<String>) {
        let plan_id = plan_id.into();
        debug!(billing_plan_id = %plan_id, "Plan selected");
        record_plan_selection();

        self.form.plan = Some(plan_id.clone());
        self.pending = Some(plan_id);
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn form(&self) -> &AttachPlanForm {
        &self.form
    }

    /// Resolve the pending selection and hand the plan to `on_change`.
    ///
    /// The selection and form are cleared whatever the outcome, including
    /// when the id no longer resolves in `catalog`.
    pub fn submit<H>(&mut self, catalog: &PlanCatalogIndex, handler: &mut H) -> SubmitOutcome
    where
        H: SubscriptionHandler + ?Sized,
    {
        let outcome = match self.pending.take() {
            None => {
                debug!("Attach submitted without a selection");
                SubmitOutcome::NoSelection
            }
            Some(plan_id) => match catalog.get(&plan_id) {
                Some(plan) => {
                    info!(billing_plan_id = %plan_id, name = %plan.name, "Attaching plan");
                    handler.on_change(plan.clone());
                    SubmitOutcome::Attached(plan_id)
                }
                None => {
                    warn!(
                        billing_plan_id = %plan_id,
                        catalog_loaded = catalog.is_loaded(),
                        "Selected plan not in catalog, dropping submission"
                    );
                    SubmitOutcome::UnknownPlan(plan_id)
                }
            },
        };

        self.reset();
        record_plan_submission(outcome.as_str());
        outcome
    }

    /// Clear the pending selection and form fields without submitting.
    pub fn reset(&mut self) {
        self.pending = None;
        self.form.reset_fields();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use crate::models::{CancellationRequest, Plan};

    #[derive(Default)]
    struct Recorder {
        changes: Vec<Plan>,
    }

    impl SubscriptionHandler for Recorder {
        fn on_change(&mut self, plan: Plan) {
            self.changes.push(plan);
        }

        fn on_cancel(&mut self, _request: CancellationRequest) {}
    }

    fn index() -> PlanCatalogIndex {
        let plans = vec![Plan::new("P1", "Starter"), Plan::new("P2", "Growth")];
        PlanCatalogIndex::build(Some(plans.as_slice()))
    }

    #[test]
    #[serial]
    fn test_select_overwrites_previous_choice() {
        let mut state = SelectionState::new();
        state.select("P1");
        state.select("P2");

        assert_eq!(state.pending(), Some("P2"));
        assert_eq!(state.form().plan(), Some("P2"));
    }

    #[test]
    #[serial]
    fn test_submit_without_selection_is_inert() {
        let mut state = SelectionState::new();
        let mut recorder = Recorder::default();

        let outcome = state.submit(&index(), &mut recorder);

        assert_eq!(outcome, SubmitOutcome::NoSelection);
        assert!(recorder.changes.is_empty());
    }

    #[test]
    #[serial]
    fn test_submit_forwards_plan_once_and_clears() {
        let mut state = SelectionState::new();
        let mut recorder = Recorder::default();
        let catalog = index();

        state.select("P2");
        assert!(state.submit(&catalog, &mut recorder).is_attached());
        assert_eq!(state.submit(&catalog, &mut recorder), SubmitOutcome::NoSelection);

        assert_eq!(recorder.changes.len(), 1);
        assert_eq!(recorder.changes[0].billing_plan_id, "P2");
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    #[serial]
    fn test_stale_selection_is_dropped_and_fields_reset() {
        let mut state = SelectionState::new();
        let mut recorder = Recorder::default();

        state.select("P9");
        let outcome = state.submit(&index(), &mut recorder);

        assert_eq!(outcome, SubmitOutcome::UnknownPlan("P9".to_string()));
        assert!(recorder.changes.is_empty());
        assert_eq!(state.pending(), None);
        assert_eq!(state.form().plan(), None);
    }

    #[test]
    #[serial]
    fn test_reset_clears_without_callback() {
        let mut state = SelectionState::new();
        state.select("P1");
        state.reset();
        assert_eq!(state.pending(), None);
        assert_eq!(state.form().plan(), None);
    }
}
