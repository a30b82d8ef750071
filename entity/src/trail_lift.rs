use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::TrailLiftRelation;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trail_lift")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub trail_id: i32,
    pub lift_id: i32,
    pub relation_type: TrailLiftRelation,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trail::Entity",
        from = "Column::TrailId",
        to = "super::trail::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Trail,
    #[sea_orm(
        belongs_to = "super::lift::Entity",
        from = "Column::LiftId",
        to = "super::lift::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Lift,
}

impl Related<super::trail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trail.def()
    }
}

impl Related<super::lift::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lift.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
