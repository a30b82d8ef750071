use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, NaiveDate, Utc};
use piste::{
    model::review::{CreateReviewDto, FlagDto, ReviewListParams, VoteDto},
    server::{
        controller::review::{
            create_review, delete_review, flag_review, get_review_stats, list_reviews,
            vote_review,
        },
        model::{app::AppState, session::user::SessionUserId},
    },
};
use sea_orm::EntityTrait;

use super::*;

fn new_review(rating: i32) -> CreateReviewDto {
    CreateReviewDto {
        rating,
        title: "Bluebird powder day".to_string(),
        content: "Fresh snow overnight and short lift lines all morning.".to_string(),
        visit_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        ..Default::default()
    }
}

/// Resort named Alta plus one logged in user
async fn resort_with_user() -> Result<(TestContext, i32, i32), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let resort = test.catalog().insert_mock_resort("Alta", "US").await?;
    let user = test
        .user()
        .insert_mock_user("skier@example.com", TEST_PASSWORD)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    Ok((test, resort.id, user.id))
}

mod list_reviews {
    use super::*;

    /// Expect approved reviews with the author's full name
    #[tokio::test]
    async fn lists_with_author() -> Result<(), TestError> {
        let (mut test, resort_id, user_id) = resort_with_user().await?;
        test.user().insert_mock_review(user_id, resort_id, 5).await?;
        test.user().insert_mock_review(user_id, resort_id, 2).await?;

        let result = list_reviews(
            State(test.to_app_state::<AppState>()),
            Path("alta".to_string()),
            Query(ReviewListParams::default()),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["pagination"]["total"], 2);
        assert_eq!(body["data"][0]["author"], "Test Skier");

        Ok(())
    }

    /// Expect min_rating to drop lower ratings
    #[tokio::test]
    async fn filters_by_min_rating() -> Result<(), TestError> {
        let (mut test, resort_id, user_id) = resort_with_user().await?;
        test.user().insert_mock_review(user_id, resort_id, 5).await?;
        test.user().insert_mock_review(user_id, resort_id, 2).await?;

        let result = list_reviews(
            State(test.to_app_state::<AppState>()),
            Path("alta".to_string()),
            Query(ReviewListParams {
                min_rating: Some(4),
                ..Default::default()
            }),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["rating"], 5);

        Ok(())
    }

    /// Expect 400 for a min_rating outside 1 to 5
    #[tokio::test]
    async fn rejects_out_of_range_min_rating() -> Result<(), TestError> {
        let (test, _, _) = resort_with_user().await?;

        let result = list_reviews(
            State(test.to_app_state::<AppState>()),
            Path("alta".to_string()),
            Query(ReviewListParams {
                min_rating: Some(6),
                ..Default::default()
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 404 for an unknown resort
    #[tokio::test]
    async fn returns_not_found_for_unknown_resort() -> Result<(), TestError> {
        let test = TestBuilder::new().with_user_tables().build().await?;

        let result = list_reviews(
            State(test.to_app_state::<AppState>()),
            Path("atlantis".to_string()),
            Query(ReviewListParams::default()),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod get_review_stats {
    use super::*;

    /// Expect the average and a five bucket distribution
    #[tokio::test]
    async fn summarizes_ratings() -> Result<(), TestError> {
        let (mut test, resort_id, user_id) = resort_with_user().await?;
        test.user().insert_mock_review(user_id, resort_id, 5).await?;
        test.user().insert_mock_review(user_id, resort_id, 4).await?;

        let result = get_review_stats(
            State(test.to_app_state::<AppState>()),
            Path("alta".to_string()),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["data"]["average_rating"], 4.5);
        assert_eq!(body["data"]["total_reviews"], 2);
        assert_eq!(body["data"]["distribution"].as_array().unwrap().len(), 5);
        assert_eq!(body["data"]["distribution"][0]["rating"], 5);
        assert_eq!(body["data"]["distribution"][0]["count"], 1);

        Ok(())
    }
}

mod create_review {
    use super::*;

    /// Expect 201 and the resort rating cache refreshed
    #[tokio::test]
    async fn stores_review_and_refreshes_rating() -> Result<(), TestError> {
        let (test, resort_id, _) = resort_with_user().await?;

        let result = create_review(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path("alta".to_string()),
            Json(new_review(4)),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resort = entity::prelude::Resort::find_by_id(resort_id)
            .one(&test.db)
            .await?
            .unwrap();
        assert_eq!(resort.average_rating, Some(4.0));
        assert_eq!(resort.total_reviews, 1);

        Ok(())
    }

    /// Expect 401 without a logged in user
    #[tokio::test]
    async fn requires_login() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_user_tables().build().await?;
        test.catalog().insert_mock_resort("Alta", "US").await?;

        let result = create_review(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path("alta".to_string()),
            Json(new_review(4)),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 400 for a visit date in the future
    #[tokio::test]
    async fn rejects_future_visit() -> Result<(), TestError> {
        let (test, _, _) = resort_with_user().await?;

        let mut review = new_review(4);
        review.visit_date = Utc::now().date_naive() + Duration::days(3);

        let result = create_review(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path("alta".to_string()),
            Json(review),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert_eq!(body["error"], "visit_date");

        Ok(())
    }
}

mod vote_review {
    use super::*;

    /// Expect the helpful vote to be counted
    #[tokio::test]
    async fn counts_helpful_vote() -> Result<(), TestError> {
        let (mut test, resort_id, user_id) = resort_with_user().await?;
        let review = test.user().insert_mock_review(user_id, resort_id, 5).await?;

        let result = vote_review(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(review.id),
            Json(VoteDto { helpful: true }),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["data"]["helpful_votes"], 1);
        assert_eq!(body["data"]["total_votes"], 1);
        assert_eq!(body["data"]["helpfulness_ratio"], 1.0);

        Ok(())
    }

    /// Expect 404 for an unknown review
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let (test, _, _) = resort_with_user().await?;

        let result = vote_review(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(404),
            Json(VoteDto { helpful: false }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod flag_review {
    use super::*;

    /// Expect the review to be marked as flagged
    #[tokio::test]
    async fn flags_review() -> Result<(), TestError> {
        let (mut test, resort_id, user_id) = resort_with_user().await?;
        let review = test.user().insert_mock_review(user_id, resort_id, 1).await?;

        let result = flag_review(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(review.id),
            Json(FlagDto {
                reason: "Advertising".to_string(),
            }),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["data"]["is_flagged"], true);

        Ok(())
    }

    /// Expect 400 for a blank reason
    #[tokio::test]
    async fn requires_reason() -> Result<(), TestError> {
        let (mut test, resort_id, user_id) = resort_with_user().await?;
        let review = test.user().insert_mock_review(user_id, resort_id, 1).await?;

        let result = flag_review(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(review.id),
            Json(FlagDto {
                reason: "  ".to_string(),
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod delete_review {
    use super::*;

    /// Expect the author to delete their review
    #[tokio::test]
    async fn deletes_own_review() -> Result<(), TestError> {
        let (mut test, resort_id, user_id) = resort_with_user().await?;
        let review = test.user().insert_mock_review(user_id, resort_id, 3).await?;

        let result = delete_review(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(review.id),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["message"], "Review deleted successfully");
        assert!(entity::prelude::Review::find_by_id(review.id)
            .one(&test.db)
            .await?
            .is_none());

        Ok(())
    }

    /// Expect 403 when deleting another user's review
    #[tokio::test]
    async fn rejects_other_users_review() -> Result<(), TestError> {
        let (mut test, resort_id, _) = resort_with_user().await?;
        let author = test
            .user()
            .insert_mock_user("author@example.com", TEST_PASSWORD)
            .await?;
        let review = test.user().insert_mock_review(author.id, resort_id, 3).await?;

        let result = delete_review(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(review.id),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }
}
