//! Insert payloads for catalog rows.
//!
//! Trails and lifts are written by the import pipeline rather than through the
//! REST API, so their inputs live here instead of in the public DTOs. Derived
//! figures are filled in by `with_derived_fields` before every insert.

use entity::sea_orm_active_enums::{AerialwayKind, OperationalStatus, TrailDifficulty};

use crate::server::util::terrain::{
    average_gradient, elevation_difference, lift_ride_minutes, technical_difficulty,
    TechnicalInputs,
};

/// Trail to insert for a resort
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTrail {
    /// Owning resort
    pub resort_id: i32,
    /// OSM way id the trail was imported from
    pub osm_id: Option<i64>,
    /// Display name
    pub name: String,
    /// OSM `piste:type`
    pub piste_type: String,
    /// Difficulty label
    pub difficulty: TrailDifficulty,
    /// OSM `piste:grooming`
    pub grooming: Option<String>,
    /// Operating status
    pub status: OperationalStatus,
    /// Night skiing
    pub lit: bool,
    /// One direction only
    pub oneway: bool,
    /// No longer maintained
    pub abandoned: bool,
    /// Tree skiing
    pub gladed: bool,
    /// Patrolled by ski patrol
    pub patrolled: bool,
    /// Grooming order, 1 is groomed first
    pub grooming_priority: Option<i32>,
    /// Free text description
    pub description: Option<String>,
    /// Latitude of the way center
    pub latitude: Option<f64>,
    /// Longitude of the way center
    pub longitude: Option<f64>,
    /// Resort area name
    pub area: Option<String>,
    /// Length in meters
    pub length_m: Option<f64>,
    /// Elevation at the start
    pub top_elevation_m: Option<f64>,
    /// Elevation at the finish
    pub bottom_elevation_m: Option<f64>,
    /// Derived, `top - bottom`
    pub vertical_drop_m: Option<f64>,
    /// Derived, percent
    pub average_gradient: Option<f64>,
    /// Derived, 1 to 10
    pub technical_difficulty: i32,
}

impl NewTrail {
    /// Recomputes vertical drop, gradient and technical difficulty
    pub fn with_derived_fields(mut self) -> Self {
        self.vertical_drop_m = elevation_difference(self.top_elevation_m, self.bottom_elevation_m);
        self.average_gradient = average_gradient(self.vertical_drop_m, self.length_m);
        self.technical_difficulty = technical_difficulty(TechnicalInputs {
            gradient: self.average_gradient,
            difficulty: self.difficulty,
            gladed: self.gladed,
            patrolled: self.patrolled,
            grooming: self.grooming.as_deref(),
        });

        self
    }
}

/// Lift to insert for a resort
#[derive(Debug, Clone, PartialEq)]
pub struct NewLift {
    /// Owning resort
    pub resort_id: i32,
    /// OSM way id the lift was imported from
    pub osm_id: Option<i64>,
    /// Display name
    pub name: String,
    /// OSM aerialway kind
    pub aerialway: AerialwayKind,
    /// Persons per hour
    pub capacity: Option<i32>,
    /// Line speed in meters per second
    pub speed_mps: Option<f64>,
    /// Length in meters
    pub length_m: Option<f64>,
    /// Ride time in minutes, replaced when length and speed are known
    pub duration_min: Option<f64>,
    /// Elevation at the bottom station
    pub base_elevation_m: Option<f64>,
    /// Elevation at the top station
    pub top_elevation_m: Option<f64>,
    /// Derived, `top - base`
    pub vertical_rise_m: Option<f64>,
    /// Operating status
    pub status: OperationalStatus,
    /// One direction only
    pub oneway: bool,
    /// Night operation
    pub lit: bool,
    /// Free text description
    pub description: Option<String>,
    /// Latitude of the way center
    pub latitude: Option<f64>,
    /// Longitude of the way center
    pub longitude: Option<f64>,
    /// Resort area name
    pub area: Option<String>,
}

impl NewLift {
    /// Recomputes ride time and vertical rise
    pub fn with_derived_fields(mut self) -> Self {
        self.duration_min = lift_ride_minutes(self.length_m, self.speed_mps, self.duration_min);
        self.vertical_rise_m = elevation_difference(self.top_elevation_m, self.base_elevation_m);

        self
    }
}
