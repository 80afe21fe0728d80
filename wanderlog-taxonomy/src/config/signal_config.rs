use serde::{Deserialize, Serialize};

/// raw per-source signal lists as written in configuration.
/// `osm_tags` entries are `key=value` or `key=*`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub google_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub osm_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wikidata: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub foursquare: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl SignalConfig {
    pub(crate) fn from_static(
        google_types: &[&str],
        osm_tags: &[&str],
        wikidata: &[&str],
        foursquare: &[&str],
        keywords: &[&str],
    ) -> Self {
        fn owned(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }
        Self {
            google_types: owned(google_types),
            osm_tags: owned(osm_tags),
            wikidata: owned(wikidata),
            foursquare: owned(foursquare),
            keywords: owned(keywords),
        }
    }
}
