use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::{AerialwayKind, OperationalStatus, TrailDifficulty};
use piste::{
    model::{
        lift::{LiftListParams, LiftSearchParams},
        trail::{TrailListParams, TrailSearchParams},
    },
    server::{
        controller::{
            lift::{get_aerialway_stats, get_lift, list_lifts, search_lifts},
            trail::{
                get_difficulty_stats, get_trail, get_trail_status_stats, list_trails,
                search_trails,
            },
        },
        model::app::AppState,
    },
};

use super::*;

async fn seeded() -> Result<TestContext, TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let alta = test.catalog().insert_mock_resort("Alta", "US").await?;
    let zermatt = test.catalog().insert_mock_resort("Zermatt", "Switzerland").await?;

    test.catalog()
        .insert_mock_trail(alta.id, "High Rustler", TrailDifficulty::Expert, OperationalStatus::Open, Some(900.0))
        .await?;
    test.catalog()
        .insert_mock_trail(alta.id, "Sugar Bowl", TrailDifficulty::Easy, OperationalStatus::Closed, Some(1200.0))
        .await?;
    test.catalog()
        .insert_mock_trail(zermatt.id, "Triftji", TrailDifficulty::Expert, OperationalStatus::Open, None)
        .await?;

    test.catalog()
        .insert_mock_lift(alta.id, "Collins", AerialwayKind::ChairLift, OperationalStatus::Open, Some(1800))
        .await?;
    test.catalog()
        .insert_mock_lift(zermatt.id, "Matterhorn Express", AerialwayKind::Gondola, OperationalStatus::Open, Some(2400))
        .await?;
    test.catalog()
        .insert_mock_lift(zermatt.id, "Hirli", AerialwayKind::TBar, OperationalStatus::Closed, None)
        .await?;

    Ok(test)
}

mod trails {
    use super::*;

    /// Expect trails across resorts with their resort summary
    #[tokio::test]
    async fn lists_with_resort() -> Result<(), TestError> {
        let test = seeded().await?;

        let result = list_trails(
            State(test.to_app_state::<AppState>()),
            Query(TrailListParams::default()),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["pagination"]["total"], 3);
        assert_eq!(body["data"][0]["name"], "High Rustler");
        assert_eq!(body["data"][0]["resort"]["slug"], "alta");

        Ok(())
    }

    /// Expect the status filter to apply
    #[tokio::test]
    async fn filters_by_status() -> Result<(), TestError> {
        let test = seeded().await?;

        let result = list_trails(
            State(test.to_app_state::<AppState>()),
            Query(TrailListParams {
                status: Some("closed".to_string()),
                ..Default::default()
            }),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["name"], "Sugar Bowl");

        Ok(())
    }

    /// Expect name matches limited to the requested resort
    #[tokio::test]
    async fn searches_within_resort() -> Result<(), TestError> {
        let test = seeded().await?;

        let result = search_trails(
            State(test.to_app_state::<AppState>()),
            Query(TrailSearchParams {
                q: Some("r".to_string()),
                resort: Some(2),
                ..Default::default()
            }),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["name"], "Triftji");

        Ok(())
    }

    /// Expect the most common difficulty first
    #[tokio::test]
    async fn counts_difficulties() -> Result<(), TestError> {
        let test = seeded().await?;

        let result = get_difficulty_stats(State(test.to_app_state::<AppState>())).await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["data"][0]["difficulty"], "expert");
        assert_eq!(body["data"][0]["count"], 2);
        assert_eq!(body["data"][0]["open"], 2);

        Ok(())
    }

    /// Expect one entry per status
    #[tokio::test]
    async fn counts_statuses() -> Result<(), TestError> {
        let test = seeded().await?;

        let result = get_trail_status_stats(State(test.to_app_state::<AppState>())).await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["data"][0]["status"], "open");
        assert_eq!(body["data"][0]["count"], 2);
        assert_eq!(body["data"][1]["status"], "closed");

        Ok(())
    }

    /// Expect 404 for an unknown trail
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = seeded().await?;

        let result = get_trail(State(test.to_app_state::<AppState>()), Path(404)).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod lifts {
    use super::*;

    /// Expect the aerialway filter to use OSM names
    #[tokio::test]
    async fn filters_by_aerialway() -> Result<(), TestError> {
        let test = seeded().await?;

        let result = list_lifts(
            State(test.to_app_state::<AppState>()),
            Query(LiftListParams {
                aerialway: Some("t-bar".to_string()),
                ..Default::default()
            }),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["pagination"]["total"], 1);
        assert_eq!(body["data"][0]["name"], "Hirli");

        Ok(())
    }

    /// Expect 400 for an unknown aerialway
    #[tokio::test]
    async fn rejects_unknown_aerialway() -> Result<(), TestError> {
        let test = seeded().await?;

        let result = list_lifts(
            State(test.to_app_state::<AppState>()),
            Query(LiftListParams {
                aerialway: Some("funicular".to_string()),
                ..Default::default()
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect a case-insensitive name match
    #[tokio::test]
    async fn searches_by_name() -> Result<(), TestError> {
        let test = seeded().await?;

        let result = search_lifts(
            State(test.to_app_state::<AppState>()),
            Query(LiftSearchParams {
                q: Some("matterhorn".to_string()),
                ..Default::default()
            }),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["aerialway"], "gondola");

        Ok(())
    }

    /// Expect capacity averaged per aerialway kind
    #[tokio::test]
    async fn averages_capacity_per_aerialway() -> Result<(), TestError> {
        let test = seeded().await?;

        let result = get_aerialway_stats(State(test.to_app_state::<AppState>())).await;

        let body = body_json(result.unwrap().into_response()).await;
        let gondola = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .find(|row| row["aerialway"] == "gondola")
            .cloned()
            .unwrap();
        assert_eq!(gondola["count"], 1);
        assert_eq!(gondola["avg_capacity"], 2400.0);

        Ok(())
    }

    /// Expect the lift with its resort summary
    #[tokio::test]
    async fn returns_lift_detail() -> Result<(), TestError> {
        let test = seeded().await?;

        let result = get_lift(State(test.to_app_state::<AppState>()), Path(1)).await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["data"]["name"], "Collins");
        assert_eq!(body["data"]["resort"]["name"], "Alta");

        Ok(())
    }
}
