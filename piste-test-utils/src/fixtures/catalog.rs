use chrono::Utc;
use entity::sea_orm_active_enums::{AerialwayKind, OperationalStatus, TrailDifficulty};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_mock_resort(
        &self,
        name: &str,
        country: &str,
    ) -> Result<entity::resort::Model, TestError> {
        let now = Utc::now().naive_utc();
        let slug = name.to_lowercase().replace(' ', "-");

        Ok(
            entity::prelude::Resort::insert(entity::resort::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                slug: ActiveValue::Set(slug),
                country: ActiveValue::Set(country.to_string()),
                features: ActiveValue::Set(serde_json::json!([])),
                total_reviews: ActiveValue::Set(0),
                is_active: ActiveValue::Set(true),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_trail(
        &self,
        resort_id: i32,
        name: &str,
        difficulty: TrailDifficulty,
        status: OperationalStatus,
        length_m: Option<f64>,
    ) -> Result<entity::trail::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Trail::insert(entity::trail::ActiveModel {
                resort_id: ActiveValue::Set(resort_id),
                name: ActiveValue::Set(name.to_string()),
                piste_type: ActiveValue::Set("downhill".to_string()),
                difficulty: ActiveValue::Set(difficulty),
                status: ActiveValue::Set(status),
                lit: ActiveValue::Set(false),
                oneway: ActiveValue::Set(false),
                abandoned: ActiveValue::Set(false),
                gladed: ActiveValue::Set(false),
                patrolled: ActiveValue::Set(true),
                length_m: ActiveValue::Set(length_m),
                technical_difficulty: ActiveValue::Set(4),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_lift(
        &self,
        resort_id: i32,
        name: &str,
        aerialway: AerialwayKind,
        status: OperationalStatus,
        capacity: Option<i32>,
    ) -> Result<entity::lift::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Lift::insert(entity::lift::ActiveModel {
                resort_id: ActiveValue::Set(resort_id),
                name: ActiveValue::Set(name.to_string()),
                aerialway: ActiveValue::Set(aerialway),
                status: ActiveValue::Set(status),
                capacity: ActiveValue::Set(capacity),
                oneway: ActiveValue::Set(true),
                lit: ActiveValue::Set(false),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
