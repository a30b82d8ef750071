use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::MemberType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resort_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub resort_id: i32,
    /// Id of the referenced trail or lift row
    pub ref_id: i32,
    pub ref_type: MemberType,
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
