//! Derived trail, lift and resort figures recomputed on every write.

use entity::sea_orm_active_enums::TrailDifficulty;

/// Rounds to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `top - bottom` when both elevations are known
pub fn elevation_difference(top: Option<f64>, bottom: Option<f64>) -> Option<f64> {
    match (top, bottom) {
        (Some(top), Some(bottom)) => Some(top - bottom),
        _ => None,
    }
}

/// Ride time in minutes from length and line speed.
///
/// Falls back to `supplied` unless both length and speed are positive.
pub fn lift_ride_minutes(
    length_m: Option<f64>,
    speed_mps: Option<f64>,
    supplied: Option<f64>,
) -> Option<f64> {
    match (length_m, speed_mps) {
        (Some(length), Some(speed)) if length > 0.0 && speed > 0.0 => {
            Some(round1(length / speed / 60.0))
        }
        _ => supplied,
    }
}

/// Average gradient in percent, `None` without a positive length
pub fn average_gradient(vertical_drop_m: Option<f64>, length_m: Option<f64>) -> Option<f64> {
    match (vertical_drop_m, length_m) {
        (Some(drop), Some(length)) if length > 0.0 => Some(round1(drop / length * 100.0)),
        _ => None,
    }
}

/// Inputs to the 1-10 technical difficulty score of a trail
#[derive(Debug, Clone, Copy)]
pub struct TechnicalInputs<'a> {
    pub gradient: Option<f64>,
    pub difficulty: TrailDifficulty,
    pub gladed: bool,
    pub patrolled: bool,
    pub grooming: Option<&'a str>,
}

pub fn technical_difficulty(inputs: TechnicalInputs<'_>) -> i32 {
    let mut score = match inputs.gradient {
        Some(gradient) => gradient_band(gradient.abs()),
        None => difficulty_base(inputs.difficulty),
    };

    if inputs.gladed {
        score += 1;
    }
    if !inputs.patrolled {
        score += 1;
    }
    if inputs
        .grooming
        .map(|g| matches!(g.trim().to_ascii_lowercase().as_str(), "backcountry" | "no"))
        .unwrap_or(false)
    {
        score += 1;
    }

    score.clamp(1, 10)
}

fn gradient_band(gradient: f64) -> i32 {
    if gradient < 10.0 {
        2
    } else if gradient < 20.0 {
        4
    } else if gradient < 30.0 {
        6
    } else if gradient < 40.0 {
        8
    } else {
        9
    }
}

fn difficulty_base(difficulty: TrailDifficulty) -> i32 {
    match difficulty {
        TrailDifficulty::Novice => 1,
        TrailDifficulty::Easy => 2,
        TrailDifficulty::Intermediate => 4,
        TrailDifficulty::Advanced => 6,
        TrailDifficulty::Expert | TrailDifficulty::Freeride => 8,
        TrailDifficulty::Extreme => 9,
    }
}
