use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resort")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub country: String,
    pub region: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub rank: Option<i32>,
    pub rating: Option<f64>,
    pub url: Option<String>,
    pub total_trails: Option<i32>,
    pub total_lifts: Option<i32>,
    pub elevation_base_m: Option<f64>,
    pub elevation_summit_m: Option<f64>,
    pub vertical_drop_m: Option<f64>,
    pub total_slope_length_km: Option<f64>,
    pub annual_snowfall_cm: Option<f64>,
    pub season_open: Option<Date>,
    pub season_close: Option<Date>,
    pub currency: Option<String>,
    pub adult_day_price: Option<f64>,
    /// Amenity tags such as `terrain-park` or `night-skiing`
    pub features: Json,
    pub average_rating: Option<f64>,
    pub total_reviews: i32,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::resort_area::Entity")]
    ResortArea,
    #[sea_orm(has_many = "super::resort_member::Entity")]
    ResortMember,
    #[sea_orm(has_many = "super::trail::Entity")]
    Trail,
    #[sea_orm(has_many = "super::lift::Entity")]
    Lift,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
    #[sea_orm(has_many = "super::weather::Entity")]
    Weather,
    #[sea_orm(has_many = "super::user_resort::Entity")]
    UserResort,
}

impl Related<super::resort_area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResortArea.def()
    }
}

impl Related<super::resort_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResortMember.def()
    }
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

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::weather::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Weather.def()
    }
}

impl Related<super::user_resort::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserResort.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
