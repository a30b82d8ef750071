use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::{
    GroupType, SkiLevel, TripType, VisitSeason, WouldRecommend, WouldReturn,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Optional 1 to 5 ratings per aspect of a visit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryRatingsDto {
    pub snow_quality: Option<i32>,
    pub trail_variety: Option<i32>,
    pub lift_efficiency: Option<i32>,
    pub value_for_money: Option<i32>,
    pub family_friendly: Option<i32>,
    pub apres_ski: Option<i32>,
    pub accommodation: Option<i32>,
    pub dining: Option<i32>,
    pub staff: Option<i32>,
}

impl CategoryRatingsDto {
    /// Category name paired with its rating, in display order
    pub fn entries(&self) -> [(&'static str, Option<i32>); 9] {
        [
            ("snow_quality", self.snow_quality),
            ("trail_variety", self.trail_variety),
            ("lift_efficiency", self.lift_efficiency),
            ("value_for_money", self.value_for_money),
            ("family_friendly", self.family_friendly),
            ("apres_ski", self.apres_ski),
            ("accommodation", self.accommodation),
            ("dining", self.dining),
            ("staff", self.staff),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub resort_id: i32,
    pub user_id: i32,
    pub author: Option<String>,
    pub rating: i32,
    pub categories: CategoryRatingsDto,
    pub title: String,
    pub content: String,
    pub visit_date: NaiveDate,
    #[schema(value_type = Option<String>)]
    pub visit_season: Option<VisitSeason>,
    #[schema(value_type = Option<String>)]
    pub ski_level: Option<SkiLevel>,
    #[schema(value_type = Option<String>)]
    pub group_type: Option<GroupType>,
    #[schema(value_type = Option<String>)]
    pub trip_type: Option<TripType>,
    #[schema(value_type = Option<String>)]
    pub would_return: Option<WouldReturn>,
    #[schema(value_type = Option<String>)]
    pub would_recommend: Option<WouldRecommend>,
    pub helpful_votes: i32,
    pub unhelpful_votes: i32,
    pub total_votes: i32,
    pub helpfulness_ratio: f64,
    pub is_helpful: bool,
    pub is_flagged: bool,
    pub published_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub rating: i32,
    #[serde(default)]
    pub categories: CategoryRatingsDto,
    pub title: String,
    pub content: String,
    pub visit_date: NaiveDate,
    #[schema(value_type = Option<String>)]
    pub visit_season: Option<VisitSeason>,
    #[schema(value_type = Option<String>)]
    pub ski_level: Option<SkiLevel>,
    #[schema(value_type = Option<String>)]
    pub group_type: Option<GroupType>,
    #[schema(value_type = Option<String>)]
    pub trip_type: Option<TripType>,
    #[schema(value_type = Option<String>)]
    pub would_return: Option<WouldReturn>,
    #[schema(value_type = Option<String>)]
    pub would_recommend: Option<WouldRecommend>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VoteDto {
    pub helpful: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlagDto {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RatingBucketDto {
    pub rating: i32,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryAverageDto {
    pub category: String,
    pub average: f64,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewStatsDto {
    pub average_rating: Option<f64>,
    pub total_reviews: i64,
    /// One bucket per rating from 5 down to 1
    pub distribution: Vec<RatingBucketDto>,
    pub categories: Vec<CategoryAverageDto>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReviewListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub min_rating: Option<i32>,
    pub ski_level: Option<String>,
    pub visit_season: Option<String>,
}

impl From<entity::review::Model> for ReviewDto {
    fn from(review: entity::review::Model) -> Self {
        Self {
            is_helpful: review.helpfulness_ratio >= 0.6 && review.total_votes >= 3,
            categories: CategoryRatingsDto {
                snow_quality: review.snow_quality,
                trail_variety: review.trail_variety,
                lift_efficiency: review.lift_efficiency,
                value_for_money: review.value_for_money,
                family_friendly: review.family_friendly,
                apres_ski: review.apres_ski,
                accommodation: review.accommodation,
                dining: review.dining,
                staff: review.staff,
            },
            id: review.id,
            resort_id: review.resort_id,
            user_id: review.user_id,
            author: None,
            rating: review.rating,
            title: review.title,
            content: review.content,
            visit_date: review.visit_date,
            visit_season: review.visit_season,
            ski_level: review.ski_level,
            group_type: review.group_type,
            trip_type: review.trip_type,
            would_return: review.would_return,
            would_recommend: review.would_recommend,
            helpful_votes: review.helpful_votes,
            unhelpful_votes: review.unhelpful_votes,
            total_votes: review.total_votes,
            helpfulness_ratio: review.helpfulness_ratio,
            is_flagged: review.is_flagged,
            published_at: review.published_at,
            created_at: review.created_at,
        }
    }
}
