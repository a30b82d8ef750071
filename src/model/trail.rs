use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{AerialwayKind, OperationalStatus, TrailDifficulty};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::resort::ResortSummaryDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrailDto {
    pub id: i32,
    pub resort_id: i32,
    pub osm_id: Option<i64>,
    pub name: String,
    pub piste_type: String,
    #[schema(value_type = String)]
    pub difficulty: TrailDifficulty,
    pub grooming: Option<String>,
    #[schema(value_type = String)]
    pub status: OperationalStatus,
    pub lit: bool,
    pub oneway: bool,
    pub abandoned: bool,
    pub gladed: bool,
    pub patrolled: bool,
    pub grooming_priority: Option<i32>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub area: Option<String>,
    pub length_m: Option<f64>,
    pub top_elevation_m: Option<f64>,
    pub bottom_elevation_m: Option<f64>,
    pub vertical_drop_m: Option<f64>,
    pub average_gradient: Option<f64>,
    pub technical_difficulty: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resort: Option<ResortSummaryDto>,
    pub top_lifts: Vec<LiftRefDto>,
    pub connects_to: Vec<LiftRefDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Lift referenced from a trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LiftRefDto {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String)]
    pub aerialway: AerialwayKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrailDifficultyStatDto {
    pub difficulty: String,
    pub count: i64,
    pub open: i64,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrailListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub difficulty: Option<String>,
    pub status: Option<String>,
    pub piste_type: Option<String>,
    pub grooming: Option<String>,
    pub lit: Option<bool>,
    /// Resort id
    pub resort: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrailSearchParams {
    pub q: Option<String>,
    pub difficulty: Option<String>,
    pub status: Option<String>,
    pub resort: Option<i32>,
    pub limit: Option<i64>,
}

impl From<entity::trail::Model> for TrailDto {
    fn from(trail: entity::trail::Model) -> Self {
        Self {
            id: trail.id,
            resort_id: trail.resort_id,
            osm_id: trail.osm_id,
            name: trail.name,
            piste_type: trail.piste_type,
            difficulty: trail.difficulty,
            grooming: trail.grooming,
            status: trail.status,
            lit: trail.lit,
            oneway: trail.oneway,
            abandoned: trail.abandoned,
            gladed: trail.gladed,
            patrolled: trail.patrolled,
            grooming_priority: trail.grooming_priority,
            description: trail.description,
            latitude: trail.latitude,
            longitude: trail.longitude,
            area: trail.area,
            length_m: trail.length_m,
            top_elevation_m: trail.top_elevation_m,
            bottom_elevation_m: trail.bottom_elevation_m,
            vertical_drop_m: trail.vertical_drop_m,
            average_gradient: trail.average_gradient,
            technical_difficulty: trail.technical_difficulty,
            resort: None,
            top_lifts: Vec::new(),
            connects_to: Vec::new(),
            created_at: trail.created_at,
            updated_at: trail.updated_at,
        }
    }
}

impl From<&entity::lift::Model> for LiftRefDto {
    fn from(lift: &entity::lift::Model) -> Self {
        Self {
            id: lift.id,
            name: lift.name.clone(),
            aerialway: lift.aerialway,
        }
    }
}
