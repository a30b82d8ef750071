use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Named zone within a resort, e.g. a linked valley or sector
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resort_area")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub resort_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub lift_count: Option<i32>,
    pub trail_count: Option<i32>,
    pub features: Json,
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
