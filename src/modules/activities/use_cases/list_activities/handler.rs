use std::sync::Arc;

use crate::modules::activities::adapters::outbound::roster_store::RosterStore;
use crate::modules::activities::core::activity::{Activity, ActivityCatalog};

pub struct ListActivitiesHandler {
    store: Arc<dyn RosterStore>,
}

impl ListActivitiesHandler {
    pub fn new(store: Arc<dyn RosterStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> ActivityCatalog {
        self.store.list_activities().await
    }

    pub async fn find(&self, name: &str) -> Option<Activity> {
        self.store.find_activity(name).await
    }
}
