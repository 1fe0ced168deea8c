// Response shapes shared by the REST handlers.
//
// Success bodies carry `message`, error bodies carry `detail`.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::core::errors::{ErrorKind, RosterError};

#[derive(Deserialize)]
pub struct EmailParams {
    pub email: String,
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Serialize)]
pub struct DetailBody {
    pub detail: String,
}

pub fn message(message: String) -> Response {
    (StatusCode::OK, Json(MessageBody { message })).into_response()
}

pub fn detail(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(DetailBody {
            detail: detail.into(),
        }),
    )
        .into_response()
}

pub fn bad_query(rejection: QueryRejection) -> Response {
    detail(StatusCode::BAD_REQUEST, rejection.body_text())
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status = match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidInput | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
        };
        detail(status, self.to_string())
    }
}
