//! Resorts described by OSM `piste:type=downhill` relations.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::etl::osm::{Element, ElementKind, LatLon};

/// Trail or lift referenced by a resort relation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationFeature {
    pub name: Option<String>,
    pub id: i64,
    pub tags: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<i64>,
}

impl From<&Element> for RelationFeature {
    fn from(element: &Element) -> Self {
        Self {
            name: element.tag("name").map(str::to_string),
            id: element.id,
            tags: element.tags.clone(),
            nodes: element.nodes.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationResort {
    pub name: String,
    pub tags: BTreeMap<String, String>,
    pub center: Option<LatLon>,
    pub trails: Vec<RelationFeature>,
    pub lifts: Vec<RelationFeature>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub resorts: Vec<RelationResort>,
    /// Distinct `type:role` pairs seen across relation members
    pub member_roles: BTreeSet<String>,
    pub total_members: usize,
    /// Member references with no tagged element in the response
    pub missing_references: usize,
}

/// Collects named downhill relations together with their member trails and lifts.
///
/// A member counts as a trail when tagged `piste:type=downhill` and as a lift
/// when it carries any `aerialway` tag. An element tagged both ways appears in
/// both lists.
pub fn extract_relations(elements: &[Element]) -> Extraction {
    let by_id: HashMap<(ElementKind, i64), &Element> = elements
        .iter()
        .map(|element| ((element.kind, element.id), element))
        .collect();

    let mut extraction = Extraction::default();

    for relation in elements.iter().filter(|e| e.kind == ElementKind::Relation) {
        if relation.tag("piste:type") != Some("downhill") {
            continue;
        }
        let Some(name) = relation.tag("name") else {
            continue;
        };

        let mut resort = RelationResort {
            name: name.to_string(),
            tags: relation.tags.clone(),
            center: relation.center,
            trails: Vec::new(),
            lifts: Vec::new(),
        };

        for member in &relation.members {
            extraction.total_members += 1;
            extraction
                .member_roles
                .insert(format!("{}:{}", kind_name(member.kind), member.role));

            let Some(element) = by_id
                .get(&(member.kind, member.reference))
                .filter(|element| !element.tags.is_empty())
            else {
                extraction.missing_references += 1;
                continue;
            };

            if element.tag("piste:type") == Some("downhill") {
                resort.trails.push(RelationFeature::from(*element));
            }
            if element.tag("aerialway").is_some_and(|kind| !kind.is_empty()) {
                resort.lifts.push(RelationFeature::from(*element));
            }
        }

        extraction.resorts.push(resort);
    }

    extraction
}

fn kind_name(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Node => "node",
        ElementKind::Way => "way",
        ElementKind::Relation => "relation",
        ElementKind::Other => "other",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::etl::osm::OverpassResponse;

    fn response() -> Vec<Element> {
        serde_json::from_value::<OverpassResponse>(json!({
            "elements": [
                { "type": "way", "id": 10, "tags": { "piste:type": "downhill", "name": "Blue Run" }, "nodes": [1, 2] },
                { "type": "way", "id": 11, "tags": { "aerialway": "chair_lift", "name": "Summit Chair" } },
                { "type": "way", "id": 12 },
                {
                    "type": "relation", "id": 100,
                    "tags": { "piste:type": "downhill", "name": "Valley Resort" },
                    "center": { "lat": 46.0, "lon": 7.0 },
                    "members": [
                        { "type": "way", "ref": 10, "role": "" },
                        { "type": "way", "ref": 11, "role": "lift" },
                        { "type": "way", "ref": 12, "role": "" },
                        { "type": "way", "ref": 99, "role": "" }
                    ]
                },
                { "type": "relation", "id": 101, "tags": { "piste:type": "downhill" }, "members": [] },
                { "type": "relation", "id": 102, "tags": { "piste:type": "nordic", "name": "Cross Country" } }
            ]
        }))
        .unwrap()
        .elements
    }

    /// Expect only named downhill relations to become resorts
    #[test]
    fn extracts_named_downhill_relations() {
        let extraction = extract_relations(&response());

        assert_eq!(extraction.resorts.len(), 1);

        let resort = &extraction.resorts[0];
        assert_eq!(resort.name, "Valley Resort");
        assert_eq!(resort.center, Some(LatLon { lat: 46.0, lon: 7.0 }));
        assert_eq!(resort.trails.len(), 1);
        assert_eq!(resort.trails[0].name.as_deref(), Some("Blue Run"));
        assert_eq!(resort.trails[0].nodes, vec![1, 2]);
        assert_eq!(resort.lifts.len(), 1);
        assert_eq!(resort.lifts[0].id, 11);
    }

    /// Expect untagged and absent members to be reported as missing
    #[test]
    fn reports_missing_references() {
        let extraction = extract_relations(&response());

        assert_eq!(extraction.total_members, 4);
        assert_eq!(extraction.missing_references, 2);
        assert!(extraction.member_roles.contains("way:lift"));
        assert!(extraction.member_roles.contains("way:"));
    }
}
