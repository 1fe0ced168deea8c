use std::sync::Arc;

use crate::modules::activities::adapters::outbound::roster_store::RosterStore;
use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::use_cases::withdraw_from_activity::command::WithdrawFromActivity;

pub struct WithdrawFromActivityHandler {
    store: Arc<dyn RosterStore>,
}

impl WithdrawFromActivityHandler {
    pub fn new(store: Arc<dyn RosterStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: WithdrawFromActivity) -> Result<String, RosterError> {
        let activity_name = command.activity_name.clone();
        match self.store.withdraw(command).await {
            Ok(event) => {
                tracing::info!(
                    activity = %event.activity_name(),
                    email = %event.email(),
                    "participant withdrawn"
                );
                Ok(event.confirmation())
            }
            Err(error) => {
                tracing::warn!(
                    activity = %activity_name,
                    kind = ?error.kind(),
                    "withdrawal rejected: {error}"
                );
                Err(error)
            }
        }
    }
}
