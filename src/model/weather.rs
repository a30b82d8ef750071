use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{
    LiftOperations, SkiingRating, SnowmakingRating, TemperatureRating, VisibilityRating,
    WindEffect,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateWeatherDto {
    /// Defaults to the time the observation is received
    pub observed_at: Option<NaiveDateTime>,
    pub temperature_c: f64,
    pub feels_like_c: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed_kmh: Option<f64>,
    pub wind_direction_deg: Option<f64>,
    pub visibility_km: Option<f64>,
    pub new_snow_24h_cm: Option<f64>,
    pub snow_depth_cm: Option<f64>,
    pub conditions_main: String,
    #[serde(default)]
    pub conditions_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SkiingConditionsDto {
    #[schema(value_type = String)]
    pub overall: SkiingRating,
    #[schema(value_type = String)]
    pub visibility: VisibilityRating,
    #[schema(value_type = String)]
    pub wind_effect: WindEffect,
    #[schema(value_type = String)]
    pub temperature: TemperatureRating,
    pub chill_factor: Option<f64>,
    #[schema(value_type = String)]
    pub snowmaking: SnowmakingRating,
    #[schema(value_type = String)]
    pub lift_operations: LiftOperations,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeatherDto {
    pub id: i32,
    pub resort_id: i32,
    pub observed_at: NaiveDateTime,
    pub temperature_c: f64,
    pub feels_like_c: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed_kmh: Option<f64>,
    pub wind_direction_deg: Option<f64>,
    pub wind_direction: Option<String>,
    pub visibility_km: Option<f64>,
    pub new_snow_24h_cm: Option<f64>,
    pub snow_depth_cm: Option<f64>,
    pub conditions_main: String,
    pub conditions_description: String,
    pub skiing_conditions: SkiingConditionsDto,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeatherHistoryParams {
    /// Number of days to look back, defaults to 7
    pub days: Option<i64>,
}

impl From<entity::weather::Model> for WeatherDto {
    fn from(weather: entity::weather::Model) -> Self {
        Self {
            id: weather.id,
            resort_id: weather.resort_id,
            observed_at: weather.observed_at,
            temperature_c: weather.temperature_c,
            feels_like_c: weather.feels_like_c,
            humidity: weather.humidity,
            wind_speed_kmh: weather.wind_speed_kmh,
            wind_direction_deg: weather.wind_direction_deg,
            wind_direction: weather.wind_direction_text,
            visibility_km: weather.visibility_km,
            new_snow_24h_cm: weather.new_snow_24h_cm,
            snow_depth_cm: weather.snow_depth_cm,
            conditions_main: weather.conditions_main,
            conditions_description: weather.conditions_description,
            skiing_conditions: SkiingConditionsDto {
                overall: weather.overall,
                visibility: weather.visibility_rating,
                wind_effect: weather.wind_effect,
                temperature: weather.temperature_rating,
                chill_factor: weather.chill_factor,
                snowmaking: weather.snowmaking,
                lift_operations: weather.lift_operations,
            },
        }
    }
}
