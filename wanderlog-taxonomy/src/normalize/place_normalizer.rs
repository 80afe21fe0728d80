use serde::{Deserialize, Serialize};

use crate::{
    migration::MigrationResult,
    model::{CategorySlug, EvidenceBag, TagSet},
    Taxonomy,
};

/// one place record as handed over by ingestion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub evidence: EvidenceBag,
    /// free-text category of the old scheme, used when there is no evidence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_category: Option<String>,
}

/// what decided the category of a [`NormalizedPlace`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceOrigin {
    Evidence,
    Migration,
    /// a legacy category without mapping, left for manual review
    Unmapped,
    NoEvidence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedPlace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub category: Option<CategorySlug>,
    pub secondary_categories: Vec<CategorySlug>,
    pub tags: TagSet,
    pub origin: PlaceOrigin,
}

/// combines classification, tagging and legacy migration into one result per
/// place. evidence always takes precedence over a legacy category.
#[derive(Debug, Clone, Copy)]
pub struct PlaceNormalizer<'a> {
    taxonomy: &'a Taxonomy,
}

impl<'a> PlaceNormalizer<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// category tags come first (default tags of every accepted category, then
    /// migration tags), followed by the tag engine output
    pub fn normalize(&self, place: &PlaceInput) -> NormalizedPlace {
        let mut tags = TagSet::default();
        let mut secondary_categories = vec![];

        let (category, origin) = if !place.evidence.is_empty() {
            let matches = self.taxonomy.classifier().classify_all(&place.evidence);
            for m in matches.iter() {
                tags.extend_keys(m.default_tags.iter());
            }
            let mut slugs = matches.into_iter().map(|m| m.slug);
            let primary = slugs.next();
            secondary_categories.extend(slugs);
            (primary, PlaceOrigin::Evidence)
        } else if let Some(legacy) = place.legacy_category.as_deref() {
            self.migrate(legacy, &mut tags)
        } else {
            (None, PlaceOrigin::NoEvidence)
        };

        tags.merge(self.taxonomy.tag_engine().tags_for(&place.evidence));

        NormalizedPlace {
            id: place.id.clone(),
            category,
            secondary_categories,
            tags,
            origin,
        }
    }

    fn migrate(&self, legacy: &str, tags: &mut TagSet) -> (Option<CategorySlug>, PlaceOrigin) {
        match self.taxonomy.migration().mapping_for(legacy) {
            MigrationResult::Mapped { slug, tags: extra } => {
                if let Some(definition) = self.taxonomy.categories().definition_for(slug.as_str()) {
                    tags.extend_keys(definition.default_tags().iter());
                }
                tags.extend_keys(extra.iter());
                (Some(slug), PlaceOrigin::Migration)
            }
            MigrationResult::Unmapped { legacy } => {
                log::warn!("legacy category '{legacy}' has no mapping");
                (None, PlaceOrigin::Unmapped)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> Taxonomy {
        Taxonomy::builtin().expect("builtin taxonomy should build")
    }

    fn slugs(place: &NormalizedPlace) -> Vec<&str> {
        place
            .category
            .iter()
            .chain(place.secondary_categories.iter())
            .map(CategorySlug::as_str)
            .collect()
    }

    #[test]
    fn test_evidence_wins_over_legacy() {
        let t = taxonomy();
        let place = PlaceInput {
            id: Some(String::from("p1")),
            evidence: EvidenceBag::default()
                .with_google_type("museum")
                .with_google_type("tourist_attraction")
                .with_architect("Tadao Ando"),
            legacy_category: Some(String::from("Bakery")),
        };
        let result = t.normalizer().normalize(&place);
        assert_eq!(result.origin, PlaceOrigin::Evidence);
        // landmark is suppressed by museum
        assert_eq!(slugs(&result), vec!["museum"]);
        assert_eq!(
            result.tags.to_strings(),
            vec![
                "activity:culture",
                "architect:Tadao Ando",
                "pritzker:1995"
            ]
        );
    }

    #[test]
    fn test_legacy_migration_without_evidence() {
        let t = taxonomy();
        let place = PlaceInput {
            legacy_category: Some(String::from("Brunch")),
            ..Default::default()
        };
        let result = t.normalizer().normalize(&place);
        assert_eq!(result.origin, PlaceOrigin::Migration);
        assert_eq!(result.category.as_ref().map(CategorySlug::as_str), Some("restaurant"));
        assert_eq!(result.tags.to_strings(), vec!["meal:brunch"]);
    }

    #[test]
    fn test_unmapped_legacy_is_reported() {
        let t = taxonomy();
        let place = PlaceInput {
            legacy_category: Some(String::from("Spaceport")),
            ..Default::default()
        };
        let result = t.normalizer().normalize(&place);
        assert_eq!(result.origin, PlaceOrigin::Unmapped);
        assert!(result.category.is_none());
        assert!(result.tags.is_empty());
    }

    #[test]
    fn test_nothing_to_go_on() {
        let t = taxonomy();
        let result = t.normalizer().normalize(&PlaceInput::default());
        assert_eq!(result.origin, PlaceOrigin::NoEvidence);
        assert!(result.category.is_none());
        assert!(result.secondary_categories.is_empty());
    }

    #[test]
    fn test_input_json() {
        let json = r#"{
            "id": "nyhavn-1",
            "evidence": { "osm_tags": ["amenity=cafe", "outdoor_seating=yes"] },
            "legacy_category": "Coffee"
        }"#;
        let place: PlaceInput = serde_json::from_str(json).expect("valid place");
        let result = taxonomy().normalizer().normalize(&place);
        assert_eq!(result.category.as_ref().map(CategorySlug::as_str), Some("cafe"));
        assert!(result.tags.contains_key("feature:outdoor_seating"));
        assert!(!result.tags.contains_key("drink:specialty_coffee"));
    }
}
