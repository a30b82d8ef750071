use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::{
    LiftOperations, SkiingRating, SnowmakingRating, TemperatureRating, VisibilityRating,
    WindEffect,
};

/// Weather observation with its derived skiing assessment
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "weather")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub resort_id: i32,
    pub observed_at: DateTime,
    pub temperature_c: f64,
    pub feels_like_c: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed_kmh: Option<f64>,
    pub wind_direction_deg: Option<f64>,
    pub wind_direction_text: Option<String>,
    pub visibility_km: Option<f64>,
    pub new_snow_24h_cm: Option<f64>,
    pub snow_depth_cm: Option<f64>,
    pub conditions_main: String,
    pub conditions_description: String,
    pub overall: SkiingRating,
    pub visibility_rating: VisibilityRating,
    pub wind_effect: WindEffect,
    pub temperature_rating: TemperatureRating,
    pub chill_factor: Option<f64>,
    pub snowmaking: SnowmakingRating,
    pub lift_operations: LiftOperations,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::resort::Entity",
        from = "Column::ResortId",
        to = "super::resort::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Resort,
}

impl Related<super::resort::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resort.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
