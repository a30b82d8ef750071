use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use piste::{
    model::user::RegisterDto,
    server::{
        controller::auth::register, model::app::AppState, model::session::user::SessionUserId,
    },
};

use super::*;

fn registration(email: &str) -> RegisterDto {
    RegisterDto {
        first_name: " Mikaela ".to_string(),
        last_name: "Shiffrin".to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

/// Expect 201 with the new profile and the user stored in session
#[tokio::test]
async fn creates_account_and_logs_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = register(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Json(registration("Mikaela@Example.com")),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], "mikaela@example.com");
    assert_eq!(body["data"]["first_name"], "Mikaela");

    let user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(user_id, body["data"]["id"].as_i64().map(|id| id as i32));

    Ok(())
}

/// Expect 409 when the email is already registered
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    test.user()
        .insert_mock_user("taken@example.com", TEST_PASSWORD)
        .await?;

    let result = register(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Json(registration("TAKEN@example.com")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 400 for a password shorter than six characters
#[tokio::test]
async fn rejects_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let mut dto = registration("new@example.com");
    dto.password = "abc".to_string();

    let result = register(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Json(dto),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["success"], false);

    Ok(())
}
