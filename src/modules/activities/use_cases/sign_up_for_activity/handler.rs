use std::sync::Arc;

use crate::modules::activities::adapters::outbound::roster_store::RosterStore;
use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub struct SignUpForActivityHandler {
    store: Arc<dyn RosterStore>,
}

impl SignUpForActivityHandler {
    pub fn new(store: Arc<dyn RosterStore>) -> Self {
        Self { store }
    }

    /// Returns the confirmation message for the caller.
    pub async fn handle(&self, command: SignUpForActivity) -> Result<String, RosterError> {
        let activity_name = command.activity_name.clone();
        match self.store.sign_up(command).await {
            Ok(event) => {
                tracing::info!(
                    activity = %event.activity_name(),
                    email = %event.email(),
                    "participant signed up"
                );
                Ok(event.confirmation())
            }
            Err(error) => {
                tracing::warn!(
                    activity = %activity_name,
                    kind = ?error.kind(),
                    "sign up rejected: {error}"
                );
                Err(error)
            }
        }
    }
}
