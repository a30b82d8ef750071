use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::{SkiLevel, SnowboardLevel, UserRole};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "app_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Stored lower-cased
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub ski_level: SkiLevel,
    pub snowboard_level: Option<SnowboardLevel>,
    pub years_of_experience: Option<i32>,
    pub preferred_currency: String,
    pub language: String,
    pub newsletter: bool,
    pub weather_alerts: bool,
    pub role: UserRole,
    pub is_active: bool,
    pub total_reviews: i32,
    pub login_attempts: i32,
    pub lock_until: Option<DateTime>,
    pub last_login: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
    #[sea_orm(has_many = "super::user_resort::Entity")]
    UserResort,
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::user_resort::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserResort.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
