use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::weather::{CreateWeatherDto, WeatherDto, WeatherHistoryParams},
    server::{
        data::weather::WeatherRepository,
        error::{not_found::NotFoundError, validation::ValidationError, Error},
        service::resort::ResortService,
        util::conditions::{assess, compass_direction, Observation},
    },
};

pub const DEFAULT_HISTORY_DAYS: i64 = 7;
pub const MAX_HISTORY_DAYS: i64 = 90;

pub struct WeatherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WeatherService<'a> {
    /// Creates a new instance of [`WeatherService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores an observation along with its skiing condition assessment
    ///
    /// # Returns
    /// - `Ok(WeatherDto)` - Stored observation with the derived assessment
    /// - `Err(Error::NotFoundError)` - Resort does not exist
    /// - `Err(Error::ValidationError)` - Observation values out of range
    pub async fn record(
        &self,
        resort_key: &str,
        observation: &CreateWeatherDto,
    ) -> Result<WeatherDto, Error> {
        let resort = ResortService::new(self.db).resolve(resort_key).await?;
        validate_observation(observation)?;

        let assessment = assess(&Observation {
            temperature_c: observation.temperature_c,
            humidity: observation.humidity,
            wind_speed_kmh: observation.wind_speed_kmh,
            visibility_km: observation.visibility_km,
            new_snow_24h_cm: observation.new_snow_24h_cm,
        });
        let wind_direction = observation
            .wind_direction_deg
            .map(|deg| compass_direction(deg).to_string());
        let observed_at = observation
            .observed_at
            .unwrap_or_else(|| Utc::now().naive_utc());

        let weather = WeatherRepository::new(self.db)
            .create(resort.id, observed_at, observation, &assessment, wind_direction)
            .await?;

        tracing::debug!(resort_id = resort.id, overall = ?weather.overall, "Recorded weather observation");

        Ok(WeatherDto::from(weather))
    }

    /// Most recent observation of a resort
    pub async fn current(&self, resort_key: &str) -> Result<WeatherDto, Error> {
        let resort = ResortService::new(self.db).resolve(resort_key).await?;

        let Some(weather) = WeatherRepository::new(self.db).latest(resort.id).await? else {
            return Err(NotFoundError::Weather(resort.id).into());
        };

        Ok(WeatherDto::from(weather))
    }

    /// Observations of the last `days` days, newest first
    pub async fn history(
        &self,
        resort_key: &str,
        params: &WeatherHistoryParams,
    ) -> Result<Vec<WeatherDto>, Error> {
        let resort = ResortService::new(self.db).resolve(resort_key).await?;

        let days = params
            .days
            .unwrap_or(DEFAULT_HISTORY_DAYS)
            .clamp(1, MAX_HISTORY_DAYS);
        let since = Utc::now().naive_utc() - Duration::days(days);

        let history = WeatherRepository::new(self.db)
            .since(resort.id, since)
            .await?;

        Ok(history.into_iter().map(WeatherDto::from).collect())
    }
}

fn validate_observation(observation: &CreateWeatherDto) -> Result<(), ValidationError> {
    if observation.conditions_main.trim().is_empty() {
        return Err(ValidationError::field(
            "conditions_main",
            "Main weather condition is required",
        ));
    }
    if !(-80.0..=60.0).contains(&observation.temperature_c) {
        return Err(ValidationError::field(
            "temperature_c",
            "Temperature must be between -80 and 60",
        ));
    }
    if observation
        .humidity
        .is_some_and(|h| !(0.0..=100.0).contains(&h))
    {
        return Err(ValidationError::field(
            "humidity",
            "Humidity must be between 0 and 100",
        ));
    }
    if observation
        .wind_direction_deg
        .is_some_and(|deg| !(0.0..=360.0).contains(&deg))
    {
        return Err(ValidationError::field(
            "wind_direction_deg",
            "Wind direction must be between 0 and 360",
        ));
    }

    let non_negative = [
        ("wind_speed_kmh", observation.wind_speed_kmh),
        ("visibility_km", observation.visibility_km),
        ("new_snow_24h_cm", observation.new_snow_24h_cm),
        ("snow_depth_cm", observation.snow_depth_cm),
    ];
    for (field, value) in non_negative {
        if value.is_some_and(|v| v < 0.0) {
            return Err(ValidationError::field(field, "Value cannot be negative"));
        }
    }

    Ok(())
}
