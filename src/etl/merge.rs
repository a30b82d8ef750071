//! Nearest resort assignment of OSM nodes and ways.

use crate::etl::osm::{Element, LatLon, Member, ResortRecord};

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Elements farther than this from every resort are dropped
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Default `--min-members` of the filter command
pub const DEFAULT_MIN_MEMBERS: usize = 2;

/// Great-circle distance between two points in kilometers
pub fn haversine_km(a: LatLon, b: LatLon) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + (d_lon / 2.0).sin().powi(2) * a.lat.to_radians().cos() * b.lat.to_radians().cos();

    2.0 * h.sqrt().atan2((1.0 - h).sqrt()) * EARTH_RADIUS_KM
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Nodes and ways with usable coordinates
    pub candidates: usize,
    pub assigned: usize,
    /// Candidates with no resort within the radius
    pub dropped: usize,
    /// Resorts whose coordinate string could not be parsed
    pub resorts_without_coordinates: usize,
}

/// Replaces each resort's members with the elements closest to it.
///
/// An element goes to the resort at minimum distance when that distance is at
/// most `radius_km`. On equal distances the resort listed first keeps the
/// element. Resorts without parsable coordinates end up with no members.
pub fn assign_members(
    resorts: &mut [ResortRecord],
    elements: &[Element],
    radius_km: f64,
) -> MergeReport {
    let coordinates: Vec<Option<LatLon>> = resorts.iter().map(ResortRecord::coordinates).collect();
    let mut report = MergeReport {
        resorts_without_coordinates: coordinates.iter().filter(|c| c.is_none()).count(),
        ..Default::default()
    };

    for resort in resorts.iter_mut() {
        resort.members.clear();
    }

    for element in elements {
        let Some(position) = element.position() else {
            continue;
        };
        report.candidates += 1;

        let mut closest: Option<(usize, f64)> = None;
        for (index, coordinate) in coordinates.iter().enumerate() {
            let Some(coordinate) = coordinate else {
                continue;
            };

            let distance = haversine_km(position, *coordinate);
            if closest.is_none_or(|(_, min)| distance < min) {
                closest = Some((index, distance));
            }
        }

        match closest {
            Some((index, distance)) if distance <= radius_km => {
                resorts[index].members.push(Member::from(element));
                report.assigned += 1;
            }
            _ => report.dropped += 1,
        }
    }

    report
}

/// Keeps resorts with at least `min_members` members
pub fn filter_by_members(resorts: Vec<ResortRecord>, min_members: usize) -> Vec<ResortRecord> {
    resorts
        .into_iter()
        .filter(|resort| resort.members.len() >= min_members)
        .collect()
}
