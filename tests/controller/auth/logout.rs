use axum::{http::StatusCode, response::IntoResponse};
use piste::server::{controller::auth::logout, model::session::user::SessionUserId};

use super::*;

/// Expect 200 and the session cleared after logout
#[tokio::test]
async fn clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = logout(test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 200 even when nobody is logged in
#[tokio::test]
async fn succeeds_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Logged out successfully");

    Ok(())
}
