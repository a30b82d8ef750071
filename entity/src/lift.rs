use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::{AerialwayKind, OperationalStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lift")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub resort_id: i32,
    pub osm_id: Option<i64>,
    pub name: String,
    pub aerialway: AerialwayKind,
    /// Persons per hour
    pub capacity: Option<i32>,
    pub speed_mps: Option<f64>,
    pub length_m: Option<f64>,
    pub duration_min: Option<f64>,
    pub base_elevation_m: Option<f64>,
    pub top_elevation_m: Option<f64>,
    pub vertical_rise_m: Option<f64>,
    pub status: OperationalStatus,
    pub oneway: bool,
    pub lit: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub area: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
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
    #[sea_orm(has_many = "super::trail_lift::Entity")]
    TrailLift,
}

impl Related<super::resort::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resort.def()
    }
}

impl Related<super::trail_lift::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrailLift.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
