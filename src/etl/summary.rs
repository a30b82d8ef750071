//! Tag statistics over an Overpass response.

use std::collections::HashMap;

use crate::etl::osm::Element;

/// Elements inspected by default
pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;

/// Tag keys printed by default
pub const DEFAULT_TOP_KEYS: usize = 30;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSummary {
    /// Elements actually inspected
    pub sampled: usize,
    /// Tag keys with their occurrence count, most frequent first
    pub key_counts: Vec<(String, usize)>,
    /// Inspected elements carrying a non-empty `aerialway` tag
    pub aerialway_count: usize,
}

impl TagSummary {
    pub fn top(&self, n: usize) -> &[(String, usize)] {
        &self.key_counts[..n.min(self.key_counts.len())]
    }
}

/// Counts tag keys over the first `sample_size` elements.
///
/// Keys with equal counts are ordered alphabetically.
pub fn summarize_tags(elements: &[Element], sample_size: usize) -> TagSummary {
    let sample = &elements[..sample_size.min(elements.len())];

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut aerialway_count = 0;

    for element in sample {
        for key in element.tags.keys() {
            *counts.entry(key.as_str()).or_default() += 1;
        }
        if element.tag("aerialway").is_some_and(|kind| !kind.is_empty()) {
            aerialway_count += 1;
        }
    }

    let mut key_counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(key, count)| (key.to_string(), count))
        .collect();
    key_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    TagSummary {
        sampled: sample.len(),
        key_counts,
        aerialway_count,
    }
}
