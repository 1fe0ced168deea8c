// Port for the roster store.
//
// Purpose
// - Own every activity and its participant sequence.
//
// Responsibilities
// - Resolve the activity by exact name before any other check.
// - Run the decision and apply the resulting event as one step, so two requests for the
//   same activity never both observe the roster before either change lands.
//
// Boundaries
// - Validation rules live in the deciders; stores only resolve, decide and apply.

use async_trait::async_trait;

use crate::modules::activities::core::activity::{Activity, ActivityCatalog};
use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::withdraw_from_activity::command::WithdrawFromActivity;

#[async_trait]
pub trait RosterStore: Send + Sync {
    async fn list_activities(&self) -> ActivityCatalog;

    async fn find_activity(&self, name: &str) -> Option<Activity>;

    async fn sign_up(&self, command: SignUpForActivity) -> Result<RosterEvent, RosterError>;

    async fn withdraw(&self, command: WithdrawFromActivity) -> Result<RosterEvent, RosterError>;
}
