use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::MemberType;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResortDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
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
    pub stats: ResortFiguresDto,
    pub season_open: Option<NaiveDate>,
    pub season_close: Option<NaiveDate>,
    pub currency: Option<String>,
    pub adult_day_price: Option<f64>,
    pub features: Vec<String>,
    pub average_rating: Option<f64>,
    pub total_reviews: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResortFiguresDto {
    pub total_trails: Option<i32>,
    pub total_lifts: Option<i32>,
    pub elevation_base_m: Option<f64>,
    pub elevation_summit_m: Option<f64>,
    pub vertical_drop_m: Option<f64>,
    pub total_slope_length_km: Option<f64>,
    pub annual_snowfall_cm: Option<f64>,
}

/// Short resort reference embedded in trail, lift and saved list payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResortSummaryDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub country: String,
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResortAreaDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub lift_count: Option<i32>,
    pub trail_count: Option<i32>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResortMemberDto {
    pub ref_id: i32,
    #[schema(value_type = String)]
    pub ref_type: MemberType,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResortDetailDto {
    #[serde(flatten)]
    pub resort: ResortDto,
    pub areas: Vec<ResortAreaDto>,
    pub members: Vec<ResortMemberDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CountryCountDto {
    pub country: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DifficultyBreakdownDto {
    pub difficulty: String,
    pub count: i64,
    pub total_length_m: f64,
    pub open: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AerialwayBreakdownDto {
    pub aerialway: String,
    pub count: i64,
    pub total_capacity: i64,
    pub open: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResortStatsDto {
    pub resort: ResortSummaryDto,
    pub trails: Vec<DifficultyBreakdownDto>,
    pub lifts: Vec<AerialwayBreakdownDto>,
    pub stats: ResortFiguresDto,
    pub areas: Vec<ResortAreaDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateResortAreaDto {
    pub name: String,
    pub description: Option<String>,
    pub lift_count: Option<i32>,
    pub trail_count: Option<i32>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateResortDto {
    pub name: String,
    /// Derived from `name` when omitted
    pub slug: Option<String>,
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
    pub total_slope_length_km: Option<f64>,
    pub annual_snowfall_cm: Option<f64>,
    pub season_open: Option<NaiveDate>,
    pub season_close: Option<NaiveDate>,
    pub currency: Option<String>,
    pub adult_day_price: Option<f64>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub areas: Vec<CreateResortAreaDto>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResortListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub country: Option<String>,
    pub region: Option<String>,
    /// Case-insensitive substring of the resort name
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResortSearchParams {
    pub q: Option<String>,
    pub country: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResortTrailParams {
    pub difficulty: Option<String>,
    pub status: Option<String>,
    pub area: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResortLiftParams {
    pub aerialway: Option<String>,
    pub status: Option<String>,
    pub area: Option<String>,
}

impl From<entity::resort::Model> for ResortDto {
    fn from(resort: entity::resort::Model) -> Self {
        Self {
            stats: ResortFiguresDto::from(&resort),
            features: json_strings(&resort.features),
            id: resort.id,
            name: resort.name,
            slug: resort.slug,
            description: resort.description,
            country: resort.country,
            region: resort.region,
            city: resort.city,
            latitude: resort.latitude,
            longitude: resort.longitude,
            timezone: resort.timezone,
            rank: resort.rank,
            rating: resort.rating,
            url: resort.url,
            season_open: resort.season_open,
            season_close: resort.season_close,
            currency: resort.currency,
            adult_day_price: resort.adult_day_price,
            average_rating: resort.average_rating,
            total_reviews: resort.total_reviews,
            is_active: resort.is_active,
            created_at: resort.created_at,
            updated_at: resort.updated_at,
        }
    }
}

impl From<&entity::resort::Model> for ResortFiguresDto {
    fn from(resort: &entity::resort::Model) -> Self {
        Self {
            total_trails: resort.total_trails,
            total_lifts: resort.total_lifts,
            elevation_base_m: resort.elevation_base_m,
            elevation_summit_m: resort.elevation_summit_m,
            vertical_drop_m: resort.vertical_drop_m,
            total_slope_length_km: resort.total_slope_length_km,
            annual_snowfall_cm: resort.annual_snowfall_cm,
        }
    }
}

impl From<&entity::resort::Model> for ResortSummaryDto {
    fn from(resort: &entity::resort::Model) -> Self {
        Self {
            id: resort.id,
            name: resort.name.clone(),
            slug: resort.slug.clone(),
            country: resort.country.clone(),
            region: resort.region.clone(),
        }
    }
}

impl From<entity::resort_area::Model> for ResortAreaDto {
    fn from(area: entity::resort_area::Model) -> Self {
        Self {
            features: json_strings(&area.features),
            id: area.id,
            name: area.name,
            description: area.description,
            lift_count: area.lift_count,
            trail_count: area.trail_count,
        }
    }
}

impl From<entity::resort_member::Model> for ResortMemberDto {
    fn from(member: entity::resort_member::Model) -> Self {
        Self {
            ref_id: member.ref_id,
            ref_type: member.ref_type,
        }
    }
}

/// Reads a JSON array column of strings, ignoring anything else
pub(crate) fn json_strings(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
