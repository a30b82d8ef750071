use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{model::weather::CreateWeatherDto, server::util::conditions::Assessment};

pub struct WeatherRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WeatherRepository<'a, C> {
    /// Creates a new instance of [`WeatherRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores an observation together with its computed assessment
    pub async fn create(
        &self,
        resort_id: i32,
        observed_at: NaiveDateTime,
        observation: &CreateWeatherDto,
        assessment: &Assessment,
        wind_direction_text: Option<String>,
    ) -> Result<entity::weather::Model, DbErr> {
        entity::prelude::Weather::insert(entity::weather::ActiveModel {
            resort_id: ActiveValue::Set(resort_id),
            observed_at: ActiveValue::Set(observed_at),
            temperature_c: ActiveValue::Set(observation.temperature_c),
            feels_like_c: ActiveValue::Set(observation.feels_like_c),
            humidity: ActiveValue::Set(observation.humidity),
            wind_speed_kmh: ActiveValue::Set(observation.wind_speed_kmh),
            wind_direction_deg: ActiveValue::Set(observation.wind_direction_deg),
            wind_direction_text: ActiveValue::Set(wind_direction_text),
            visibility_km: ActiveValue::Set(observation.visibility_km),
            new_snow_24h_cm: ActiveValue::Set(observation.new_snow_24h_cm),
            snow_depth_cm: ActiveValue::Set(observation.snow_depth_cm),
            conditions_main: ActiveValue::Set(observation.conditions_main.clone()),
            conditions_description: ActiveValue::Set(observation.conditions_description.clone()),
            overall: ActiveValue::Set(assessment.overall),
            visibility_rating: ActiveValue::Set(assessment.visibility),
            wind_effect: ActiveValue::Set(assessment.wind_effect),
            temperature_rating: ActiveValue::Set(assessment.temperature),
            chill_factor: ActiveValue::Set(Some(assessment.chill_factor)),
            snowmaking: ActiveValue::Set(assessment.snowmaking),
            lift_operations: ActiveValue::Set(assessment.lift_operations),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Most recent observation for a resort
    pub async fn latest(&self, resort_id: i32) -> Result<Option<entity::weather::Model>, DbErr> {
        entity::prelude::Weather::find()
            .filter(entity::weather::Column::ResortId.eq(resort_id))
            .order_by_desc(entity::weather::Column::ObservedAt)
            .order_by_desc(entity::weather::Column::Id)
            .one(self.db)
            .await
    }

    /// Observations at or after `since`, newest first
    pub async fn since(
        &self,
        resort_id: i32,
        since: NaiveDateTime,
    ) -> Result<Vec<entity::weather::Model>, DbErr> {
        entity::prelude::Weather::find()
            .filter(entity::weather::Column::ResortId.eq(resort_id))
            .filter(entity::weather::Column::ObservedAt.gte(since))
            .order_by_desc(entity::weather::Column::ObservedAt)
            .order_by_desc(entity::weather::Column::Id)
            .all(self.db)
            .await
    }
}
