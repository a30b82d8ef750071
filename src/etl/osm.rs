//! OpenStreetMap element and resort record shapes read and written by the pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Latitude and longitude in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
    #[serde(other)]
    Other,
}

/// Member reference inside an Overpass relation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationMember {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(rename = "ref")]
    pub reference: i64,
    #[serde(default)]
    pub role: String,
}

/// Element of an Overpass `out center` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<LatLon>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<RelationMember>,
}

impl Element {
    /// Point used for the nearest resort search.
    ///
    /// Nodes use their own coordinates and ways their precomputed center.
    /// Relations and elements without finite coordinates have none.
    pub fn position(&self) -> Option<LatLon> {
        let point = match self.kind {
            ElementKind::Node => LatLon {
                lat: self.lat?,
                lon: self.lon?,
            },
            ElementKind::Way => self.center?,
            _ => return None,
        };

        (point.lat.is_finite() && point.lon.is_finite()).then_some(point)
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

/// Body of an Overpass interpreter response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl OverpassResponse {
    pub fn counts(&self) -> ElementCounts {
        let mut counts = ElementCounts::default();
        for element in &self.elements {
            match element.kind {
                ElementKind::Node => counts.nodes += 1,
                ElementKind::Way => counts.ways += 1,
                ElementKind::Relation => counts.relations += 1,
                ElementKind::Other => counts.other += 1,
            }
        }

        counts
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementCounts {
    pub nodes: usize,
    pub ways: usize,
    pub relations: usize,
    pub other: usize,
}

/// Node or way assigned to a resort by the merge step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub id: i64,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<LatLon>,
}

impl Member {
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

impl From<&Element> for Member {
    fn from(element: &Element) -> Self {
        match element.kind {
            ElementKind::Way => Self {
                kind: element.kind,
                id: element.id,
                tags: element.tags.clone(),
                lat: None,
                lon: None,
                center: element.center,
            },
            _ => Self {
                kind: element.kind,
                id: element.id,
                tags: element.tags.clone(),
                lat: element.lat,
                lon: element.lon,
                center: None,
            },
        }
    }
}

/// Resort entry of the ski resort listing, optionally annotated with members.
///
/// Fields the pipeline does not read are carried through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResortRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_coordinate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub rank: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub elevation_top_m: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub elevation_difference_m: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub total_slope_length_km: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub number_of_lifts: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub number_of_slopes: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub annual_snowfall_cm: Option<f64>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResortRecord {
    pub fn coordinates(&self) -> Option<LatLon> {
        self.location_coordinate.as_deref().and_then(parse_coordinates)
    }
}

/// Parses a listing coordinate such as `{'lat': '46.5', 'long': '7.9'}`.
///
/// Values may be numbers or numeric strings. Returns `None` when the string
/// is not an object or either value is missing or not finite.
pub fn parse_coordinates(raw: &str) -> Option<LatLon> {
    let json = raw.replace('\'', "\"");
    let value: Value = serde_json::from_str(&json).ok()?;

    let lat = number_from_value(value.get("lat")?)?;
    let lon = number_from_value(value.get("long")?)?;

    Some(LatLon { lat, lon })
}

/// Leading decimal number of a string, the way listings format numeric fields
fn parse_leading_number(raw: &str) -> Option<f64> {
    let raw = raw.trim_start();
    let end = raw
        .char_indices()
        .take_while(|&(i, c)| {
            c.is_ascii_digit() || c == '.' || ((c == '-' || c == '+') && i == 0)
        })
        .map(|(i, c)| i + c.len_utf8())
        .last()?;

    raw[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => parse_leading_number(s),
        _ => None,
    }
}

/// Accepts a number, a numeric string or anything else as `None`
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(value.as_ref().and_then(number_from_value))
}
