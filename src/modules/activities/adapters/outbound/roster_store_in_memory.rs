use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::activities::adapters::outbound::roster_store::RosterStore;
use crate::modules::activities::core::activity::{Activity, ActivityCatalog, CatalogError};
use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::seed::seed_catalog;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use crate::modules::activities::use_cases::withdraw_from_activity::command::WithdrawFromActivity;
use crate::modules::activities::use_cases::withdraw_from_activity::decide::decide_withdraw;

pub struct InMemoryRosterStore {
    catalog: RwLock<ActivityCatalog>,
}

impl InMemoryRosterStore {
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    pub fn seeded() -> Result<Self, CatalogError> {
        Ok(Self::new(seed_catalog()?))
    }

    async fn transition<F>(&self, activity_name: &str, decide: F) -> Result<RosterEvent, RosterError>
    where
        F: FnOnce(&Activity) -> Result<RosterEvent, RosterError> + Send,
    {
        let mut guard = self.catalog.write().await;
        let activity = guard
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;
        let event = decide(activity)?;
        *activity = evolve(std::mem::take(activity), event.clone());
        Ok(event)
    }
}

#[async_trait]
impl RosterStore for InMemoryRosterStore {
    async fn list_activities(&self) -> ActivityCatalog {
        self.catalog.read().await.clone()
    }

    async fn find_activity(&self, name: &str) -> Option<Activity> {
        self.catalog.read().await.get(name).cloned()
    }

    async fn sign_up(&self, command: SignUpForActivity) -> Result<RosterEvent, RosterError> {
        let activity_name = command.activity_name.clone();
        self.transition(&activity_name, |activity| {
            decide_sign_up(activity, command)
        })
        .await
    }

    async fn withdraw(&self, command: WithdrawFromActivity) -> Result<RosterEvent, RosterError> {
        let activity_name = command.activity_name.clone();
        self.transition(&activity_name, |activity| {
            decide_withdraw(activity, command)
        })
        .await
    }
}
