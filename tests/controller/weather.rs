use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::UserRole;
use piste::{
    model::weather::{CreateWeatherDto, WeatherHistoryParams},
    server::{
        controller::weather::{get_current_weather, get_weather_history, record_weather},
        model::{app::AppState, session::user::SessionUserId},
    },
};

use super::*;

fn powder_morning() -> CreateWeatherDto {
    CreateWeatherDto {
        temperature_c: -5.0,
        wind_speed_kmh: Some(5.0),
        wind_direction_deg: Some(270.0),
        visibility_km: Some(10.0),
        new_snow_24h_cm: Some(15.0),
        conditions_main: "Snow".to_string(),
        ..Default::default()
    }
}

async fn with_role(role: UserRole) -> Result<TestContext, TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_resort("Alta", "US")
        .with_mock_user("staff@example.com", role)
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    Ok(test)
}

mod record_weather {
    use super::*;

    /// Expect 201 with derived skiing conditions for a resort manager
    #[tokio::test]
    async fn records_as_resort_manager() -> Result<(), TestError> {
        let test = with_role(UserRole::ResortManager).await?;

        let result = record_weather(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path("alta".to_string()),
            Json(powder_morning()),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = body_json(resp).await;
        assert_eq!(body["data"]["wind_direction"], "W");
        assert_eq!(body["data"]["skiing_conditions"]["overall"], "excellent");
        assert_eq!(body["data"]["skiing_conditions"]["temperature"], "ideal");

        Ok(())
    }

    /// Expect 403 for a regular user
    #[tokio::test]
    async fn rejects_regular_user() -> Result<(), TestError> {
        let test = with_role(UserRole::User).await?;

        let result = record_weather(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path("alta".to_string()),
            Json(powder_morning()),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect 400 for humidity above 100
    #[tokio::test]
    async fn rejects_out_of_range_humidity() -> Result<(), TestError> {
        let test = with_role(UserRole::Admin).await?;

        let mut observation = powder_morning();
        observation.humidity = Some(120.0);

        let result = record_weather(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path("alta".to_string()),
            Json(observation),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod get_current_weather {
    use super::*;

    /// Expect the newest observation
    #[tokio::test]
    async fn returns_latest_observation() -> Result<(), TestError> {
        let test = with_role(UserRole::Admin).await?;
        let now = Utc::now().naive_utc();

        for (hours_ago, conditions) in [(6, "Clouds"), (1, "Clear")] {
            let mut observation = powder_morning();
            observation.observed_at = Some(now - Duration::hours(hours_ago));
            observation.conditions_main = conditions.to_string();

            record_weather(
                State(test.to_app_state::<AppState>()),
                test.session.clone(),
                Path("alta".to_string()),
                Json(observation),
            )
            .await
            .unwrap();
        }

        let result =
            get_current_weather(State(test.to_app_state::<AppState>()), Path("alta".to_string()))
                .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["data"]["conditions_main"], "Clear");

        Ok(())
    }

    /// Expect 404 when no observation exists
    #[tokio::test]
    async fn returns_not_found_without_observation() -> Result<(), TestError> {
        let test = with_role(UserRole::Admin).await?;

        let result =
            get_current_weather(State(test.to_app_state::<AppState>()), Path("alta".to_string()))
                .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod get_weather_history {
    use super::*;

    /// Expect only observations within the default seven days
    #[tokio::test]
    async fn defaults_to_seven_days() -> Result<(), TestError> {
        let test = with_role(UserRole::Admin).await?;
        let now = Utc::now().naive_utc();

        for days_ago in [1, 3, 10] {
            let mut observation = powder_morning();
            observation.observed_at = Some(now - Duration::days(days_ago));

            record_weather(
                State(test.to_app_state::<AppState>()),
                test.session.clone(),
                Path("alta".to_string()),
                Json(observation),
            )
            .await
            .unwrap();
        }

        let result = get_weather_history(
            State(test.to_app_state::<AppState>()),
            Path("alta".to_string()),
            Query(WeatherHistoryParams::default()),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["count"], 2);

        Ok(())
    }
}
