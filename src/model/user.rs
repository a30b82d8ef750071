use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{SkiLevel, SnowboardLevel, UserRole};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: LocationDto,
    pub ski_profile: SkiProfileDto,
    pub preferences: PreferencesDto,
    #[schema(value_type = String)]
    pub role: UserRole,
    pub is_active: bool,
    pub total_reviews: i32,
    pub last_login: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SkiProfileDto {
    #[schema(value_type = String)]
    pub ski_level: SkiLevel,
    #[schema(value_type = Option<String>)]
    pub snowboard_level: Option<SnowboardLevel>,
    pub years_of_experience: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PreferencesDto {
    pub preferred_currency: String,
    pub language: String,
    pub newsletter: bool,
    pub weather_alerts: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Profile changes, absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub location: Option<LocationDto>,
    #[schema(value_type = Option<String>)]
    pub ski_level: Option<SkiLevel>,
    #[schema(value_type = Option<String>)]
    pub snowboard_level: Option<SnowboardLevel>,
    pub years_of_experience: Option<i32>,
    pub preferred_currency: Option<String>,
    pub language: Option<String>,
    pub newsletter: Option<bool>,
    pub weather_alerts: Option<bool>,
}

impl From<entity::app_user::Model> for UserDto {
    fn from(user: entity::app_user::Model) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            location: LocationDto {
                city: user.city,
                state: user.state,
                country: user.country,
            },
            ski_profile: SkiProfileDto {
                ski_level: user.ski_level,
                snowboard_level: user.snowboard_level,
                years_of_experience: user.years_of_experience,
            },
            preferences: PreferencesDto {
                preferred_currency: user.preferred_currency,
                language: user.language,
                newsletter: user.newsletter,
                weather_alerts: user.weather_alerts,
            },
            role: user.role,
            is_active: user.is_active,
            total_reviews: user.total_reviews,
            last_login: user.last_login,
            created_at: user.created_at,
        }
    }
}
