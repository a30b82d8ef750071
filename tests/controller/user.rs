use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use piste::server::{
    controller::user::{
        add_favorite, add_to_wishlist, get_favorites, get_wishlist, remove_favorite,
        remove_from_wishlist,
    },
    model::{app::AppState, session::user::SessionUserId},
};

use super::*;

async fn logged_in() -> Result<(TestContext, i32), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let resort = test.catalog().insert_mock_resort("Niseko", "Japan").await?;
    let user = test
        .user()
        .insert_mock_user("skier@example.com", TEST_PASSWORD)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    Ok((test, resort.id))
}

mod favorites {
    use super::*;

    /// Expect a repeated add to keep a single entry
    #[tokio::test]
    async fn adds_favorite_once() -> Result<(), TestError> {
        let (test, resort_id) = logged_in().await?;

        for _ in 0..2 {
            let result = add_favorite(
                State(test.to_app_state::<AppState>()),
                test.session.clone(),
                Path(resort_id),
            )
            .await;
            assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);
        }

        let result = get_favorites(State(test.to_app_state::<AppState>()), test.session.clone()).await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["slug"], "niseko");

        Ok(())
    }

    /// Expect removal to empty the list
    #[tokio::test]
    async fn removes_favorite() -> Result<(), TestError> {
        let (test, resort_id) = logged_in().await?;
        add_favorite(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(resort_id),
        )
        .await
        .unwrap();

        let result = remove_favorite(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(resort_id),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["count"], 0);

        Ok(())
    }

    /// Expect 404 for an unknown resort
    #[tokio::test]
    async fn rejects_unknown_resort() -> Result<(), TestError> {
        let (test, _) = logged_in().await?;

        let result = add_favorite(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(404),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 401 without a logged in user
    #[tokio::test]
    async fn requires_login() -> Result<(), TestError> {
        let test = TestBuilder::new().with_user_tables().build().await?;

        let result = get_favorites(State(test.to_app_state::<AppState>()), test.session.clone()).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod wishlist {
    use super::*;

    /// Expect the wishlist to be kept apart from favorites
    #[tokio::test]
    async fn keeps_lists_separate() -> Result<(), TestError> {
        let (test, resort_id) = logged_in().await?;

        let result = add_to_wishlist(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(resort_id),
        )
        .await;
        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["count"], 1);

        let favorites =
            get_favorites(State(test.to_app_state::<AppState>()), test.session.clone()).await;
        let body = body_json(favorites.unwrap().into_response()).await;
        assert_eq!(body["count"], 0);

        Ok(())
    }

    /// Expect removing an unsaved resort to succeed with an unchanged list
    #[tokio::test]
    async fn ignores_missing_entry_on_remove() -> Result<(), TestError> {
        let (test, resort_id) = logged_in().await?;

        let result = remove_from_wishlist(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(resort_id),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let wishlist = get_wishlist(State(test.to_app_state::<AppState>()), test.session.clone()).await;
        let body = body_json(wishlist.unwrap().into_response()).await;
        assert_eq!(body["count"], 0);

        Ok(())
    }
}
