use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::{AerialwayKind, OperationalStatus, TrailDifficulty, UserRole};
use piste::{
    model::resort::{CreateResortDto, ResortListParams, ResortSearchParams, ResortTrailParams},
    server::{
        controller::resort::{
            create_resort, get_resort, get_resort_lifts, get_resort_stats, get_resort_trails,
            list_countries, list_resorts, search_resorts,
        },
        model::{app::AppState, session::user::SessionUserId},
    },
};

use super::*;

mod list_resorts {
    use super::*;

    /// Expect resorts sorted by name with pagination totals
    #[tokio::test]
    async fn returns_page_sorted_by_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_mock_resort("Zermatt", "Switzerland")
            .with_mock_resort("Alta", "US")
            .with_mock_resort("Niseko", "Japan")
            .build()
            .await?;

        let result = list_resorts(
            State(test.to_app_state::<AppState>()),
            Query(ResortListParams {
                page: Some(1),
                limit: Some(2),
                ..Default::default()
            }),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["data"][0]["name"], "Alta");
        assert_eq!(body["data"][1]["name"], "Niseko");
        assert_eq!(body["pagination"]["total"], 3);
        assert_eq!(body["pagination"]["pages"], 2);

        Ok(())
    }

    /// Expect a page far past the end to be empty with correct totals
    #[tokio::test]
    async fn returns_empty_page_past_the_end() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_mock_resort("Zermatt", "Switzerland")
            .with_mock_resort("Alta", "US")
            .with_mock_resort("Niseko", "Japan")
            .build()
            .await?;

        let result = list_resorts(
            State(test.to_app_state::<AppState>()),
            Query(ResortListParams {
                page: Some(i64::MAX),
                limit: Some(20),
                ..Default::default()
            }),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
        assert_eq!(body["pagination"]["page"], i64::MAX);
        assert_eq!(body["pagination"]["total"], 3);
        assert_eq!(body["pagination"]["pages"], 1);

        Ok(())
    }

    /// Expect the country filter to ignore case
    #[tokio::test]
    async fn filters_by_country() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_mock_resort("Zermatt", "Switzerland")
            .with_mock_resort("Alta", "US")
            .build()
            .await?;

        let result = list_resorts(
            State(test.to_app_state::<AppState>()),
            Query(ResortListParams {
                country: Some("switzerland".to_string()),
                ..Default::default()
            }),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["slug"], "zermatt");

        Ok(())
    }
}

mod search_resorts {
    use super::*;

    /// Expect a case-insensitive name match
    #[tokio::test]
    async fn matches_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_mock_resort("Whistler Blackcomb", "Canada")
            .with_mock_resort("Alta", "US")
            .build()
            .await?;

        let result = search_resorts(
            State(test.to_app_state::<AppState>()),
            Query(ResortSearchParams {
                q: Some("whistler".to_string()),
                ..Default::default()
            }),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["name"], "Whistler Blackcomb");

        Ok(())
    }
}

mod list_countries {
    use super::*;

    /// Expect countries ordered by resort count
    #[tokio::test]
    async fn counts_resorts_per_country() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_mock_resort("Zermatt", "Switzerland")
            .with_mock_resort("Verbier", "Switzerland")
            .with_mock_resort("Alta", "US")
            .build()
            .await?;

        let result = list_countries(State(test.to_app_state::<AppState>())).await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["data"][0]["country"], "Switzerland");
        assert_eq!(body["data"][0]["count"], 2);
        assert_eq!(body["data"][1]["country"], "US");

        Ok(())
    }
}

mod get_resort {
    use super::*;

    /// Expect the same resort by numeric ID and by slug
    #[tokio::test]
    async fn finds_by_id_or_slug() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_catalog_tables().build().await?;
        let resort = test.catalog().insert_mock_resort("Big Sky", "US").await?;

        let by_id = get_resort(
            State(test.to_app_state::<AppState>()),
            Path(resort.id.to_string()),
        )
        .await;
        let by_slug = get_resort(
            State(test.to_app_state::<AppState>()),
            Path("big-sky".to_string()),
        )
        .await;

        let by_id = body_json(by_id.unwrap().into_response()).await;
        let by_slug = body_json(by_slug.unwrap().into_response()).await;
        assert_eq!(by_id["data"]["id"], resort.id);
        assert_eq!(by_slug["data"]["id"], resort.id);

        Ok(())
    }

    /// Expect 404 for an unknown resort
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;

        let result = get_resort(
            State(test.to_app_state::<AppState>()),
            Path("atlantis".to_string()),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = body_json(resp).await;
        assert_eq!(body["success"], false);

        Ok(())
    }
}

mod get_resort_trails {
    use super::*;

    /// Expect trails filtered by difficulty
    #[tokio::test]
    async fn filters_by_difficulty() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_catalog_tables().build().await?;
        let resort = test.catalog().insert_mock_resort("Alta", "US").await?;
        test.catalog()
            .insert_mock_trail(resort.id, "High Rustler", TrailDifficulty::Expert, OperationalStatus::Open, Some(900.0))
            .await?;
        test.catalog()
            .insert_mock_trail(resort.id, "Sugar Bowl", TrailDifficulty::Easy, OperationalStatus::Open, Some(1200.0))
            .await?;

        let result = get_resort_trails(
            State(test.to_app_state::<AppState>()),
            Path("alta".to_string()),
            Query(ResortTrailParams {
                difficulty: Some("expert".to_string()),
                ..Default::default()
            }),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["name"], "High Rustler");

        Ok(())
    }

    /// Expect 400 for an unknown difficulty
    #[tokio::test]
    async fn rejects_unknown_difficulty() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_mock_resort("Alta", "US")
            .build()
            .await?;

        let result = get_resort_trails(
            State(test.to_app_state::<AppState>()),
            Path("alta".to_string()),
            Query(ResortTrailParams {
                difficulty: Some("double-black".to_string()),
                ..Default::default()
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod get_resort_lifts {
    use piste::model::resort::ResortLiftParams;

    use super::*;

    /// Expect every lift of the resort
    #[tokio::test]
    async fn lists_lifts() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_catalog_tables().build().await?;
        let resort = test.catalog().insert_mock_resort("Alta", "US").await?;
        test.catalog()
            .insert_mock_lift(resort.id, "Collins", AerialwayKind::ChairLift, OperationalStatus::Open, Some(1800))
            .await?;

        let result = get_resort_lifts(
            State(test.to_app_state::<AppState>()),
            Path(resort.id.to_string()),
            Query(ResortLiftParams::default()),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["aerialway"], "chair_lift");

        Ok(())
    }
}

mod get_resort_stats {
    use super::*;

    /// Expect trail length and lift capacity totals
    #[tokio::test]
    async fn sums_breakdowns() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_catalog_tables().build().await?;
        let resort = test.catalog().insert_mock_resort("Alta", "US").await?;
        test.catalog()
            .insert_mock_trail(resort.id, "Sugar Bowl", TrailDifficulty::Easy, OperationalStatus::Open, Some(1200.0))
            .await?;
        test.catalog()
            .insert_mock_trail(resort.id, "Crooked Mile", TrailDifficulty::Easy, OperationalStatus::Closed, Some(800.0))
            .await?;
        test.catalog()
            .insert_mock_lift(resort.id, "Collins", AerialwayKind::ChairLift, OperationalStatus::Open, Some(1800))
            .await?;

        let result = get_resort_stats(
            State(test.to_app_state::<AppState>()),
            Path("alta".to_string()),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        let easy = &body["data"]["trails"][0];
        assert_eq!(easy["difficulty"], "easy");
        assert_eq!(easy["count"], 2);
        assert_eq!(easy["open"], 1);
        assert_eq!(easy["total_length_m"], 2000.0);
        assert_eq!(body["data"]["lifts"][0]["total_capacity"], 1800);

        Ok(())
    }
}

mod create_resort {
    use super::*;

    fn new_resort() -> CreateResortDto {
        CreateResortDto {
            name: "Revelstoke".to_string(),
            country: "Canada".to_string(),
            elevation_base_m: Some(512.0),
            elevation_summit_m: Some(2225.0),
            ..Default::default()
        }
    }

    /// Expect 201 for an admin with derived slug and vertical drop
    #[tokio::test]
    async fn creates_resort_as_admin() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user_tables()
            .with_mock_user("admin@example.com", UserRole::Admin)
            .build()
            .await?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        let result = create_resort(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Json(new_resort()),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = body_json(resp).await;
        assert_eq!(body["data"]["slug"], "revelstoke");
        assert_eq!(body["data"]["stats"]["vertical_drop_m"], 1713.0);

        Ok(())
    }

    /// Expect 403 for a regular user
    #[tokio::test]
    async fn rejects_regular_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user_tables()
            .with_mock_user("skier@example.com", UserRole::User)
            .build()
            .await?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        let result = create_resort(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Json(new_resort()),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect 401 without a logged in user
    #[tokio::test]
    async fn rejects_anonymous_request() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user_tables()
            .build()
            .await?;

        let result = create_resort(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Json(new_resort()),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
