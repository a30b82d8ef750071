use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::{
    GroupType, SkiLevel, TripType, VisitSeason, WouldRecommend, WouldReturn,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub resort_id: i32,
    pub rating: i32,
    pub snow_quality: Option<i32>,
    pub trail_variety: Option<i32>,
    pub lift_efficiency: Option<i32>,
    pub value_for_money: Option<i32>,
    pub family_friendly: Option<i32>,
    pub apres_ski: Option<i32>,
    pub accommodation: Option<i32>,
    pub dining: Option<i32>,
    pub staff: Option<i32>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub visit_date: Date,
    pub visit_season: Option<VisitSeason>,
    pub ski_level: Option<SkiLevel>,
    pub group_type: Option<GroupType>,
    pub trip_type: Option<TripType>,
    pub would_return: Option<WouldReturn>,
    pub would_recommend: Option<WouldRecommend>,
    pub helpful_votes: i32,
    pub unhelpful_votes: i32,
    pub total_votes: i32,
    pub helpfulness_ratio: f64,
    pub is_approved: bool,
    pub is_flagged: bool,
    /// Reasons supplied when the review was flagged
    pub flag_reasons: Json,
    pub published_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::UserId",
        to = "super::app_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AppUser,
    #[sea_orm(
        belongs_to = "super::resort::Entity",
        from = "Column::ResortId",
        to = "super::resort::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Resort,
}

impl Related<super::app_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppUser.def()
    }
}

impl Related<super::resort::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resort.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
