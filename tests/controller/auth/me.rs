use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use piste::{
    model::user::{LoginDto, UpdateProfileDto},
    server::{
        controller::auth::{get_me, login, update_me},
        model::{app::AppState, session::user::SessionUserId},
    },
};

use super::*;

/// Expect the logged in profile
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user = test
        .user()
        .insert_mock_user("skier@example.com", TEST_PASSWORD)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_me(State(test.to_app_state::<AppState>()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["data"]["email"], "skier@example.com");
    assert!(body["data"].get("password_hash").is_none());

    Ok(())
}

/// Expect 401 without a logged in user
#[tokio::test]
async fn rejects_anonymous_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_me(State(test.to_app_state::<AppState>()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect a changed password to be accepted by the next login
#[tokio::test]
async fn updates_profile_and_password() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user = test
        .user()
        .insert_mock_user("skier@example.com", TEST_PASSWORD)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = update_me(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Json(UpdateProfileDto {
            first_name: Some("Lindsey".to_string()),
            password: Some("fresh-tracks".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["data"]["first_name"], "Lindsey");

    let relogin = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Json(LoginDto {
            email: "skier@example.com".to_string(),
            password: "fresh-tracks".to_string(),
        }),
    )
    .await;

    assert_eq!(relogin.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect 409 when changing to another user's email
#[tokio::test]
async fn rejects_taken_email() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user = test
        .user()
        .insert_mock_user("skier@example.com", TEST_PASSWORD)
        .await?;
    test.user()
        .insert_mock_user("boarder@example.com", TEST_PASSWORD)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = update_me(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Json(UpdateProfileDto {
            email: Some("boarder@example.com".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
