use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

/// all raw provider signals collected for a single place.
///
/// built by the ingestion layer and only ever borrowed by this crate. matching
/// is case-insensitive, so values may be passed as the providers report them.
///
/// ```
/// use wanderlog_taxonomy::model::EvidenceBag;
///
/// let bag = EvidenceBag::default()
///     .with_google_type("museum")
///     .with_osm_tag("tourism", "museum")
///     .with_text("Danish design museum in a former hospital");
/// assert!(!bag.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceBag {
    #[serde(default)]
    pub google_types: BTreeSet<String>,
    /// `key=value` strings
    #[serde(default)]
    pub osm_tags: BTreeSet<String>,
    #[serde(default)]
    pub wikidata: BTreeSet<String>,
    #[serde(default)]
    pub foursquare: BTreeSet<String>,
    #[serde(default)]
    pub keywords: BTreeSet<String>,
    /// free text (descriptions, reviews, names) scanned for keyword phrases
    #[serde(default)]
    pub text: String,
    /// architect name resolved upstream from the knowledge graph, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architect: Option<String>,
    /// architectural style resolved upstream from the knowledge graph, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl EvidenceBag {
    pub fn with_google_type(mut self, value: &str) -> Self {
        self.google_types.insert(value.to_string());
        self
    }

    pub fn with_osm_tag(mut self, key: &str, value: &str) -> Self {
        self.osm_tags.insert(format!("{key}={value}"));
        self
    }

    pub fn with_wikidata(mut self, value: &str) -> Self {
        self.wikidata.insert(value.to_string());
        self
    }

    pub fn with_foursquare(mut self, value: &str) -> Self {
        self.foursquare.insert(value.to_string());
        self
    }

    pub fn with_keyword(mut self, value: &str) -> Self {
        self.keywords.insert(value.to_string());
        self
    }

    pub fn with_text(mut self, value: &str) -> Self {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(value);
        self
    }

    pub fn with_architect(mut self, value: &str) -> Self {
        self.architect = Some(value.to_string());
        self
    }

    pub fn with_style(mut self, value: &str) -> Self {
        self.style = Some(value.to_string());
        self
    }

    /// true when none of the five evidence kinds carries anything. the structured
    /// `architect`/`style` attributes are not category evidence.
    pub fn is_empty(&self) -> bool {
        self.google_types.is_empty()
            && self.osm_tags.is_empty()
            && self.wikidata.is_empty()
            && self.foursquare.is_empty()
            && self.keywords.is_empty()
            && self.text.trim().is_empty()
    }

    /// finds the raw value of a crowd tag by key, preserving its original case.
    /// keys compare case-insensitively. with several values for the same key the
    /// lexically first one wins.
    pub fn osm_tag_value(&self, key: &str) -> Option<&str> {
        self.osm_tags.iter().find_map(|tag| match tag.split_once('=') {
            Some((k, v)) if k.trim().eq_ignore_ascii_case(key) => Some(v.trim()),
            _ => None,
        })
    }

    /// builds the lowercased lookup view used by matching. allocated per call.
    pub fn index(&self) -> EvidenceIndex {
        EvidenceIndex::from(self)
    }
}

/// lowercased, hash-indexed view of an [`EvidenceBag`].
#[derive(Debug, Clone, Default)]
pub struct EvidenceIndex {
    pub(crate) google_types: HashSet<String>,
    pub(crate) osm_tags: HashMap<String, HashSet<String>>,
    pub(crate) wikidata: HashSet<String>,
    pub(crate) foursquare: HashSet<String>,
    pub(crate) keywords: HashSet<String>,
    pub(crate) text: String,
}

impl From<&EvidenceBag> for EvidenceIndex {
    fn from(bag: &EvidenceBag) -> Self {
        let mut osm_tags: HashMap<String, HashSet<String>> = HashMap::new();
        for tag in bag.osm_tags.iter() {
            // a bare key is stored with an empty value so that `key=*` still matches it
            let (key, value) = tag.split_once('=').unwrap_or((tag.as_str(), ""));
            osm_tags
                .entry(normalize(key))
                .or_default()
                .insert(normalize(value));
        }
        Self {
            google_types: bag.google_types.iter().map(|s| normalize(s)).collect(),
            osm_tags,
            wikidata: bag.wikidata.iter().map(|s| normalize(s)).collect(),
            foursquare: bag.foursquare.iter().map(|s| normalize(s)).collect(),
            keywords: bag.keywords.iter().map(|s| normalize(s)).collect(),
            text: bag.text.to_lowercase(),
        }
    }
}

/// the normalization applied to both evidence and registered signals
pub(crate) fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bag() {
        assert!(EvidenceBag::default().is_empty());
        assert!(EvidenceBag::default().with_text("   ").is_empty());
        assert!(EvidenceBag::default().with_architect("Tadao Ando").is_empty());
        assert!(!EvidenceBag::default().with_keyword("brunch").is_empty());
    }

    #[test]
    fn test_index_lowercases_everything() {
        let bag = EvidenceBag::default()
            .with_foursquare("Art Museum")
            .with_osm_tag("Tourism", "Museum")
            .with_text("Louisiana MUSEUM");
        let index = bag.index();
        assert!(index.foursquare.contains("art museum"));
        assert!(index
            .osm_tags
            .get("tourism")
            .is_some_and(|values| values.contains("museum")));
        assert_eq!(index.text, "louisiana museum");
    }

    #[test]
    fn test_osm_tag_value_preserves_case() {
        let bag = EvidenceBag::default()
            .with_osm_tag("architect", "Jørn Utzon")
            .with_osm_tag("building", "yes");
        assert_eq!(bag.osm_tag_value("architect"), Some("Jørn Utzon"));
        assert_eq!(bag.osm_tag_value("ARCHITECT"), Some("Jørn Utzon"));
        assert_eq!(bag.osm_tag_value("style"), None);
    }
}
