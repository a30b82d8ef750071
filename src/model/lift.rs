use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{AerialwayKind, OperationalStatus, TrailDifficulty};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::resort::ResortSummaryDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LiftDto {
    pub id: i32,
    pub resort_id: i32,
    pub osm_id: Option<i64>,
    pub name: String,
    #[schema(value_type = String)]
    pub aerialway: AerialwayKind,
    pub capacity: Option<i32>,
    pub speed_mps: Option<f64>,
    pub length_m: Option<f64>,
    /// Ride time in minutes
    pub duration_min: Option<f64>,
    pub base_elevation_m: Option<f64>,
    pub top_elevation_m: Option<f64>,
    pub vertical_rise_m: Option<f64>,
    #[schema(value_type = String)]
    pub status: OperationalStatus,
    pub oneway: bool,
    pub lit: bool,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resort: Option<ResortSummaryDto>,
    pub serves_trails: Vec<TrailRefDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Trail referenced from a lift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrailRefDto {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String)]
    pub difficulty: TrailDifficulty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AerialwayStatDto {
    pub aerialway: String,
    pub count: i64,
    pub open: i64,
    pub avg_capacity: Option<f64>,
    pub avg_duration_min: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LiftListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub aerialway: Option<String>,
    pub status: Option<String>,
    pub lit: Option<bool>,
    pub oneway: Option<bool>,
    /// Resort id
    pub resort: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LiftSearchParams {
    pub q: Option<String>,
    pub aerialway: Option<String>,
    pub status: Option<String>,
    pub resort: Option<i32>,
    pub limit: Option<i64>,
}

impl From<entity::lift::Model> for LiftDto {
    fn from(lift: entity::lift::Model) -> Self {
        Self {
            id: lift.id,
            resort_id: lift.resort_id,
            osm_id: lift.osm_id,
            name: lift.name,
            aerialway: lift.aerialway,
            capacity: lift.capacity,
            speed_mps: lift.speed_mps,
            length_m: lift.length_m,
            duration_min: lift.duration_min,
            base_elevation_m: lift.base_elevation_m,
            top_elevation_m: lift.top_elevation_m,
            vertical_rise_m: lift.vertical_rise_m,
            status: lift.status,
            oneway: lift.oneway,
            lit: lift.lit,
            description: lift.description,
            latitude: lift.latitude,
            longitude: lift.longitude,
            area: lift.area,
            resort: None,
            serves_trails: Vec::new(),
            created_at: lift.created_at,
            updated_at: lift.updated_at,
        }
    }
}

impl From<&entity::trail::Model> for TrailRefDto {
    fn from(trail: &entity::trail::Model) -> Self {
        Self {
            id: trail.id,
            name: trail.name.clone(),
            difficulty: trail.difficulty,
        }
    }
}
