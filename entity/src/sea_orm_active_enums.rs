use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "kebab-case")]
pub enum MemberType {
    #[sea_orm(string_value = "trail")]
    Trail,
    #[sea_orm(string_value = "lift")]
    Lift,
}

/// OSM `piste:difficulty` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, Default)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "kebab-case")]
pub enum TrailDifficulty {
    #[sea_orm(string_value = "novice")]
    Novice,
    #[sea_orm(string_value = "easy")]
    Easy,
    #[default]
    #[sea_orm(string_value = "intermediate")]
    Intermediate,
    #[sea_orm(string_value = "advanced")]
    Advanced,
    #[sea_orm(string_value = "expert")]
    Expert,
    #[sea_orm(string_value = "freeride")]
    Freeride,
    #[sea_orm(string_value = "extreme")]
    Extreme,
}

impl TrailDifficulty {
    pub fn from_osm(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "novice" => Some(Self::Novice),
            "easy" => Some(Self::Easy),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            "expert" => Some(Self::Expert),
            "freeride" => Some(Self::Freeride),
            "extreme" => Some(Self::Extreme),
            _ => None,
        }
    }
}

/// Operating status shared by trails and lifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, Default)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "kebab-case")]
pub enum OperationalStatus {
    #[default]
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "closed")]
    Closed,
    #[sea_orm(string_value = "disused")]
    Disused,
    #[sea_orm(string_value = "abandoned")]
    Abandoned,
    #[sea_orm(string_value = "planned")]
    Planned,
}

impl OperationalStatus {
    /// Maps OSM `operational_status`, `piste:status` and `aerialway:status` values.
    ///
    /// Unknown values are treated as open.
    pub fn from_osm(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "closed" | "no" => Self::Closed,
            "disused" => Self::Disused,
            "abandoned" => Self::Abandoned,
            "planned" | "proposed" | "construction" => Self::Planned,
            _ => Self::Open,
        }
    }
}

/// OSM `aerialway` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AerialwayKind {
    #[sea_orm(string_value = "cable_car")]
    #[serde(rename = "cable_car")]
    CableCar,
    #[sea_orm(string_value = "gondola")]
    #[serde(rename = "gondola")]
    Gondola,
    #[sea_orm(string_value = "mixed_lift")]
    #[serde(rename = "mixed_lift")]
    MixedLift,
    #[sea_orm(string_value = "chair_lift")]
    #[serde(rename = "chair_lift")]
    ChairLift,
    #[sea_orm(string_value = "drag_lift")]
    #[serde(rename = "drag_lift")]
    DragLift,
    #[sea_orm(string_value = "t-bar")]
    #[serde(rename = "t-bar")]
    TBar,
    #[sea_orm(string_value = "j-bar")]
    #[serde(rename = "j-bar")]
    JBar,
    #[sea_orm(string_value = "platter")]
    #[serde(rename = "platter")]
    Platter,
    #[sea_orm(string_value = "rope_tow")]
    #[serde(rename = "rope_tow")]
    RopeTow,
    #[sea_orm(string_value = "magic_carpet")]
    #[serde(rename = "magic_carpet")]
    MagicCarpet,
    #[sea_orm(string_value = "zip_line")]
    #[serde(rename = "zip_line")]
    ZipLine,
    #[sea_orm(string_value = "goods")]
    #[serde(rename = "goods")]
    Goods,
    #[sea_orm(string_value = "other")]
    #[serde(rename = "other")]
    Other,
}

impl AerialwayKind {
    pub fn from_osm(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "cable_car" => Self::CableCar,
            "gondola" => Self::Gondola,
            "mixed_lift" => Self::MixedLift,
            "chair_lift" => Self::ChairLift,
            "drag_lift" => Self::DragLift,
            "t-bar" => Self::TBar,
            "j-bar" => Self::JBar,
            "platter" => Self::Platter,
            "rope_tow" => Self::RopeTow,
            "magic_carpet" => Self::MagicCarpet,
            "zip_line" => Self::ZipLine,
            "goods" => Self::Goods,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum TrailLiftRelation {
    /// Lift that takes skiers to the top of the trail
    #[sea_orm(string_value = "top_lift")]
    TopLift,
    /// Lift reached at the bottom of the trail
    #[sea_orm(string_value = "connects_to")]
    ConnectsTo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, Default)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "kebab-case")]
pub enum SkiLevel {
    #[sea_orm(string_value = "never-ever")]
    NeverEver,
    #[default]
    #[sea_orm(string_value = "beginner")]
    Beginner,
    #[sea_orm(string_value = "intermediate")]
    Intermediate,
    #[sea_orm(string_value = "advanced")]
    Advanced,
    #[sea_orm(string_value = "expert")]
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "kebab-case")]
pub enum SnowboardLevel {
    #[sea_orm(string_value = "never-tried")]
    NeverTried,
    #[sea_orm(string_value = "beginner")]
    Beginner,
    #[sea_orm(string_value = "intermediate")]
    Intermediate,
    #[sea_orm(string_value = "advanced")]
    Advanced,
    #[sea_orm(string_value = "expert")]
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, Default)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    #[default]
    #[sea_orm(string_value = "user")]
    User,
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "resort-manager")]
    ResortManager,
    #[sea_orm(string_value = "moderator")]
    Moderator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "kebab-case")]
pub enum ResortList {
    #[sea_orm(string_value = "favorite")]
    Favorite,
    #[sea_orm(string_value = "wishlist")]
    Wishlist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
#[serde(rename_all = "kebab-case")]
pub enum VisitSeason {
    #[sea_orm(string_value = "early-season")]
    EarlySeason,
    #[sea_orm(string_value = "peak-season")]
    PeakSeason,
    #[sea_orm(string_value = "late-season")]
    LateSeason,
    #[sea_orm(string_value = "spring-skiing")]
    SpringSkiing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
#[serde(rename_all = "kebab-case")]
pub enum GroupType {
    #[sea_orm(string_value = "solo")]
    Solo,
    #[sea_orm(string_value = "couple")]
    Couple,
    #[sea_orm(string_value = "family-young-kids")]
    FamilyYoungKids,
    #[sea_orm(string_value = "family-teens")]
    FamilyTeens,
    #[sea_orm(string_value = "friends")]
    Friends,
    #[sea_orm(string_value = "business")]
    Business,
    #[sea_orm(string_value = "ski-club")]
    SkiClub,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
#[serde(rename_all = "kebab-case")]
pub enum TripType {
    #[sea_orm(string_value = "day-trip")]
    DayTrip,
    #[sea_orm(string_value = "weekend")]
    Weekend,
    #[sea_orm(string_value = "week-long")]
    WeekLong,
    #[sea_orm(string_value = "extended-stay")]
    ExtendedStay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
#[serde(rename_all = "kebab-case")]
pub enum WouldReturn {
    #[sea_orm(string_value = "definitely")]
    Definitely,
    #[sea_orm(string_value = "probably")]
    Probably,
    #[sea_orm(string_value = "maybe")]
    Maybe,
    #[sea_orm(string_value = "probably-not")]
    ProbablyNot,
    #[sea_orm(string_value = "definitely-not")]
    DefinitelyNot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
#[serde(rename_all = "kebab-case")]
pub enum WouldRecommend {
    #[sea_orm(string_value = "highly-recommend")]
    HighlyRecommend,
    #[sea_orm(string_value = "recommend")]
    Recommend,
    #[sea_orm(string_value = "neutral")]
    Neutral,
    #[sea_orm(string_value = "would-not-recommend")]
    WouldNotRecommend,
    #[sea_orm(string_value = "strongly-against")]
    StronglyAgainst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "kebab-case")]
pub enum SkiingRating {
    #[sea_orm(string_value = "excellent")]
    Excellent,
    #[sea_orm(string_value = "very-good")]
    VeryGood,
    #[sea_orm(string_value = "good")]
    Good,
    #[sea_orm(string_value = "fair")]
    Fair,
    #[sea_orm(string_value = "poor")]
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "kebab-case")]
pub enum VisibilityRating {
    #[sea_orm(string_value = "excellent")]
    Excellent,
    #[sea_orm(string_value = "good")]
    Good,
    #[sea_orm(string_value = "limited")]
    Limited,
    #[sea_orm(string_value = "poor")]
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "kebab-case")]
pub enum WindEffect {
    #[sea_orm(string_value = "none")]
    None,
    #[sea_orm(string_value = "minimal")]
    Minimal,
    #[sea_orm(string_value = "moderate")]
    Moderate,
    #[sea_orm(string_value = "significant")]
    Significant,
    #[sea_orm(string_value = "severe")]
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "kebab-case")]
pub enum TemperatureRating {
    #[sea_orm(string_value = "ideal")]
    Ideal,
    #[sea_orm(string_value = "comfortable")]
    Comfortable,
    #[sea_orm(string_value = "cold")]
    Cold,
    #[sea_orm(string_value = "very-cold")]
    VeryCold,
    #[sea_orm(string_value = "extreme")]
    Extreme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "kebab-case")]
pub enum SnowmakingRating {
    #[sea_orm(string_value = "excellent")]
    Excellent,
    #[sea_orm(string_value = "good")]
    Good,
    #[sea_orm(string_value = "marginal")]
    Marginal,
    #[sea_orm(string_value = "poor")]
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "kebab-case")]
pub enum LiftOperations {
    #[sea_orm(string_value = "all-lifts")]
    AllLifts,
    #[sea_orm(string_value = "most-lifts")]
    MostLifts,
    #[sea_orm(string_value = "limited-lifts")]
    LimitedLifts,
    #[sea_orm(string_value = "minimal-lifts")]
    MinimalLifts,
}
