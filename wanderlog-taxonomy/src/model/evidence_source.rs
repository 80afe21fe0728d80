use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the five kinds of evidence a place record can carry, one per provider taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceSource {
    /// place types reported by the general-purpose maps API
    GoogleTypes,
    /// crowd-sourced `key=value` map tags
    OsmTags,
    /// knowledge-graph "instance of" class labels
    Wikidata,
    /// point-of-interest discovery service category labels
    Foursquare,
    /// descriptive keywords and free text
    Keywords,
}

impl EvidenceSource {
    pub const ALL: [EvidenceSource; 5] = [
        EvidenceSource::GoogleTypes,
        EvidenceSource::OsmTags,
        EvidenceSource::Wikidata,
        EvidenceSource::Foursquare,
        EvidenceSource::Keywords,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceSource::GoogleTypes => "google_types",
            EvidenceSource::OsmTags => "osm_tags",
            EvidenceSource::Wikidata => "wikidata",
            EvidenceSource::Foursquare => "foursquare",
            EvidenceSource::Keywords => "keywords",
        }
    }
}

impl Display for EvidenceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
