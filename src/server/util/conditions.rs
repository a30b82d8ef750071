//! Skiing condition assessment derived from a weather observation.

use entity::sea_orm_active_enums::{
    LiftOperations, SkiingRating, SnowmakingRating, TemperatureRating, VisibilityRating,
    WindEffect,
};

use crate::server::util::terrain::round1;

const BASE_SCORE: f64 = 5.0;
const DEFAULT_VISIBILITY_KM: f64 = 10.0;
const DEFAULT_HUMIDITY: f64 = 50.0;

/// Raw observation values used by the assessment
#[derive(Debug, Clone, Copy, Default)]
pub struct Observation {
    pub temperature_c: f64,
    pub humidity: Option<f64>,
    pub wind_speed_kmh: Option<f64>,
    pub visibility_km: Option<f64>,
    pub new_snow_24h_cm: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub overall: SkiingRating,
    pub visibility: VisibilityRating,
    pub wind_effect: WindEffect,
    pub temperature: TemperatureRating,
    pub chill_factor: f64,
    pub snowmaking: SnowmakingRating,
    pub lift_operations: LiftOperations,
}

pub fn assess(obs: &Observation) -> Assessment {
    let t = obs.temperature_c;
    let wind = obs.wind_speed_kmh.unwrap_or(0.0);
    let visibility_km = obs.visibility_km.unwrap_or(DEFAULT_VISIBILITY_KM);

    let mut score = BASE_SCORE;

    // Anything from -15 °C up costs half a point, ideal is only a label
    let temperature = if t < -15.0 {
        score -= 1.0;
        TemperatureRating::Cold
    } else {
        score -= 0.5;
        if (-8.0..=-2.0).contains(&t) {
            TemperatureRating::Ideal
        } else {
            TemperatureRating::Comfortable
        }
    };

    let wind_effect = if wind < 15.0 {
        WindEffect::None
    } else if wind < 25.0 {
        score -= 0.5;
        WindEffect::Minimal
    } else if wind < 35.0 {
        score -= 1.0;
        WindEffect::Moderate
    } else {
        score -= 2.0;
        WindEffect::Significant
    };

    let visibility = if visibility_km >= 5.0 {
        VisibilityRating::Excellent
    } else if visibility_km >= 2.0 {
        score -= 0.5;
        VisibilityRating::Good
    } else if visibility_km >= 0.5 {
        score -= 1.0;
        VisibilityRating::Limited
    } else {
        score -= 2.0;
        VisibilityRating::Poor
    };

    if obs.new_snow_24h_cm.unwrap_or(0.0) > 10.0 {
        score += 1.0;
    }

    Assessment {
        overall: overall_rating(score),
        visibility,
        wind_effect,
        temperature,
        chill_factor: wind_chill(t, wind),
        snowmaking: snowmaking(t, obs.humidity.unwrap_or(DEFAULT_HUMIDITY)),
        lift_operations: lift_operations(wind, visibility_km),
    }
}

fn overall_rating(score: f64) -> SkiingRating {
    if score >= 4.5 {
        SkiingRating::Excellent
    } else if score >= 3.5 {
        SkiingRating::VeryGood
    } else if score >= 2.5 {
        SkiingRating::Good
    } else if score >= 1.5 {
        SkiingRating::Fair
    } else {
        SkiingRating::Poor
    }
}

fn snowmaking(temperature_c: f64, humidity: f64) -> SnowmakingRating {
    let wet_bulb = temperature_c - (100.0 - humidity) / 5.0;

    if wet_bulb <= -3.0 {
        SnowmakingRating::Excellent
    } else if wet_bulb <= -1.0 {
        SnowmakingRating::Good
    } else if wet_bulb <= 1.0 {
        SnowmakingRating::Marginal
    } else {
        SnowmakingRating::Poor
    }
}

fn lift_operations(wind_kmh: f64, visibility_km: f64) -> LiftOperations {
    if wind_kmh < 25.0 && visibility_km >= 2.0 {
        LiftOperations::AllLifts
    } else if wind_kmh < 35.0 && visibility_km >= 1.0 {
        LiftOperations::MostLifts
    } else if wind_kmh < 50.0 && visibility_km >= 0.5 {
        LiftOperations::LimitedLifts
    } else {
        LiftOperations::MinimalLifts
    }
}

/// Environment Canada wind chill index, rounded to one decimal.
///
/// Only defined for temperatures at or below 10 °C with wind above 4.8 km/h;
/// outside that range the air temperature is returned.
pub fn wind_chill(temperature_c: f64, wind_kmh: f64) -> f64 {
    if temperature_c > 10.0 || wind_kmh <= 4.8 {
        return temperature_c;
    }

    let v = wind_kmh.powf(0.16);

    round1(13.12 + 0.6215 * temperature_c - 11.37 * v + 0.3965 * temperature_c * v)
}

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// 16-point compass label for a bearing in degrees
pub fn compass_direction(degrees: f64) -> &'static str {
    let normalized = degrees.rem_euclid(360.0);
    let index = (normalized / 22.5).round() as usize % COMPASS_POINTS.len();

    COMPASS_POINTS[index]
}
