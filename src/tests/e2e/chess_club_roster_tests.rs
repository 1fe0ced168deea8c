// Full router scenarios against the Chess Club roster.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::activities::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::state::make_test_state;

#[fixture]
fn app() -> Router {
    let (_, state) = make_test_state();
    router(state, "static")
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn chess_club_participants(app: &Router) -> serde_json::Value {
    let (status, json) = send(app, Method::GET, "/activities").await;
    assert_eq!(status, StatusCode::OK);
    json["Chess Club"]["participants"].clone()
}

#[rstest]
#[tokio::test]
async fn it_should_sign_up_reject_the_repeat_and_withdraw_in_order(app: Router) {
    let signup = "/activities/Chess%20Club/signup?email=new@mergington.edu";

    let (status, json) = send(&app, Method::POST, signup).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Signed up new@mergington.edu for Chess Club");
    assert_eq!(
        chess_club_participants(&app).await,
        serde_json::json!([
            "michael@mergington.edu",
            "daniel@mergington.edu",
            "new@mergington.edu"
        ])
    );

    let (status, json) = send(&app, Method::POST, signup).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Student already signed up for this activity");

    let (status, json) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/participants?email=michael@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Removed michael@mergington.edu from Chess Club");
    assert_eq!(
        chess_club_participants(&app).await,
        serde_json::json!(["daniel@mergington.edu", "new@mergington.edu"])
    );
}

#[rstest]
#[tokio::test]
async fn it_should_not_withdraw_a_raw_variant_of_a_normalized_signup(app: Router) {
    let (status, _) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=%20Mixed%40Mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/participants?email=%20Mixed%40Mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Student not signed up for this activity");

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/participants?email=mixed@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[case(Method::POST, "/activities/NoSuchActivity/signup?email=a@b.com")]
#[case(Method::POST, "/activities/NoSuchActivity/signup?email=invalid")]
#[case(Method::DELETE, "/activities/NoSuchActivity/participants?email=a@b.com")]
#[case(Method::POST, "/activities/chess%20club/signup?email=a@b.com")]
#[tokio::test]
async fn it_should_report_unknown_activities_as_not_found(
    app: Router,
    #[case] method: Method,
    #[case] uri: &str,
) {
    let (status, json) = send(&app, method, uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Activity not found");
}

#[rstest]
#[tokio::test]
async fn it_should_serve_the_seeded_catalog_with_bilingual_names() {
    let state = AppState::new(Arc::new(InMemoryRosterStore::seeded().unwrap()));
    let app = router(state, "static");

    let (status, json) = send(&app, Method::GET, "/activities").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_object().unwrap().len(), 9);
    assert_eq!(
        json["Club de Robótica"]["participants"],
        serde_json::json!(["jorge@mergington.edu"])
    );

    let (status, json) = send(
        &app,
        Method::POST,
        "/activities/Clase%20de%20Programaci%C3%B3n/signup?email=nuevo@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["message"],
        "Signed up nuevo@mergington.edu for Clase de Programación"
    );
}
