use async_graphql::{Context, Object};

use crate::modules::activities::adapters::inbound::graphql::GqlActivity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every activity, in catalog order.
    async fn activities(&self, context: &Context<'_>) -> Vec<GqlActivity> {
        let state = context.data_unchecked::<AppState>();
        state
            .list_activities
            .handle()
            .await
            .iter()
            .cloned()
            .map(GqlActivity::from)
            .collect()
    }

    async fn activity(&self, context: &Context<'_>, name: String) -> Option<GqlActivity> {
        let state = context.data_unchecked::<AppState>();
        state.list_activities.find(&name).await.map(GqlActivity::from)
    }
}
