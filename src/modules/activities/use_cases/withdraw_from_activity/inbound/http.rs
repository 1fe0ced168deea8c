use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};

use crate::modules::activities::adapters::inbound::http::{EmailParams, bad_query, message};
use crate::modules::activities::use_cases::withdraw_from_activity::command::WithdrawFromActivity;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return bad_query(rejection),
    };

    let command = WithdrawFromActivity {
        activity_name,
        email: params.email,
    };

    match state.withdraw_handler.handle(command).await {
        Ok(confirmation) => message(confirmation),
        Err(error) => error.into_response(),
    }
}
