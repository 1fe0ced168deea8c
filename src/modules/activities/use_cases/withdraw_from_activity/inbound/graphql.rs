use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::activities::use_cases::withdraw_from_activity::command::WithdrawFromActivity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct WithdrawMutation;

#[Object]
impl WithdrawMutation {
    async fn withdraw(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        state
            .withdraw_handler
            .handle(WithdrawFromActivity {
                activity_name,
                email,
            })
            .await
            .map_err(|e| e.extend())
    }
}
