use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{Duration, Utc};
use piste::{
    model::user::LoginDto,
    server::{
        controller::auth::login,
        model::{app::AppState, session::user::SessionUserId},
    },
};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use super::*;

fn credentials(email: &str, password: &str) -> LoginDto {
    LoginDto {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Expect 200 and the user stored in session for valid credentials
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user = test
        .user()
        .insert_mock_user("skier@example.com", TEST_PASSWORD)
        .await?;

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Json(credentials("Skier@Example.com", TEST_PASSWORD)),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(user.id));

    let stored = entity::prelude::AppUser::find_by_id(user.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(stored.last_login.is_some());

    Ok(())
}

/// Expect 401 for an unknown email
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Json(credentials("nobody@example.com", TEST_PASSWORD)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the fifth wrong password to lock the account and later attempts to get 423
#[tokio::test]
async fn locks_after_repeated_failures() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user = test
        .user()
        .insert_mock_user("skier@example.com", TEST_PASSWORD)
        .await?;

    for _ in 0..5 {
        let result = login(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Json(credentials("skier@example.com", "wrong-password")),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    let stored = entity::prelude::AppUser::find_by_id(user.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.login_attempts, 5);
    assert!(stored.lock_until.is_some());

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Json(credentials("skier@example.com", TEST_PASSWORD)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::LOCKED);

    Ok(())
}

/// Expect an expired lock to allow logging in again
#[tokio::test]
async fn allows_login_after_lock_expires() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user = test
        .user()
        .insert_mock_user("skier@example.com", TEST_PASSWORD)
        .await?;

    let mut active = user.into_active_model();
    active.login_attempts = ActiveValue::Set(5);
    active.lock_until = ActiveValue::Set(Some(Utc::now().naive_utc() - Duration::minutes(1)));
    active.update(&test.db).await?;

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Json(credentials("skier@example.com", TEST_PASSWORD)),
    )
    .await;

    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 for a deactivated account with the right password
#[tokio::test]
async fn rejects_deactivated_account() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user = test
        .user()
        .insert_mock_user("retired@example.com", TEST_PASSWORD)
        .await?;

    let mut active = user.into_active_model();
    active.is_active = ActiveValue::Set(false);
    active.update(&test.db).await?;

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Json(credentials("retired@example.com", TEST_PASSWORD)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
