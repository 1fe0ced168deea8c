use crate::modules::activities::adapters::outbound::roster_store::RosterStore;
use crate::modules::activities::use_cases::list_activities::handler::ListActivitiesHandler;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::withdraw_from_activity::handler::WithdrawFromActivityHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_activities: Arc<ListActivitiesHandler>,
    pub sign_up_handler: Arc<SignUpForActivityHandler>,
    pub withdraw_handler: Arc<WithdrawFromActivityHandler>,
}

impl AppState {
    pub fn new(store: Arc<dyn RosterStore>) -> Self {
        Self {
            list_activities: Arc::new(ListActivitiesHandler::new(store.clone())),
            sign_up_handler: Arc::new(SignUpForActivityHandler::new(store.clone())),
            withdraw_handler: Arc::new(WithdrawFromActivityHandler::new(store)),
        }
    }
}
