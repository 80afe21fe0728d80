use super::CategoryMatch;
use crate::{
    model::{CategorySlug, EvidenceBag, EvidenceIndex},
    registry::{CategoryDefinition, CategoryRegistry, ExclusionRules},
};

/// decides the category of a place from its [`EvidenceBag`].
///
/// a category is confirmed by the first source of its priority order that has
/// registered signals and hits the evidence. among confirmed categories the one
/// whose confirming source sits earliest in its own order wins, ties going to
/// the global category priority. a winner suppressed by an exclusion rule is
/// discarded in favor of the next candidate, and a winner that a still pending
/// candidate would suppress waits for that candidate to be decided first.
#[derive(Debug, Clone, Copy)]
pub struct CategoryClassifier<'a> {
    registry: &'a CategoryRegistry,
    exclusions: &'a ExclusionRules,
}

impl<'a> CategoryClassifier<'a> {
    pub fn new(registry: &'a CategoryRegistry, exclusions: &'a ExclusionRules) -> Self {
        Self {
            registry,
            exclusions,
        }
    }

    /// classify a place given the categories already accepted for it earlier in
    /// the same batch. categories in `accepted` are not proposed again.
    ///
    /// # Arguments
    ///
    /// * `bag` - evidence for the place
    /// * `accepted` - categories accepted earlier for this place, in acceptance order
    ///
    /// # Returns
    ///
    /// the best remaining category, or `None` for empty evidence or when nothing
    /// matches.
    pub fn classify(&self, bag: &EvidenceBag, accepted: &[CategorySlug]) -> Option<CategoryMatch> {
        if bag.is_empty() {
            return None;
        }
        self.classify_indexed(&bag.index(), accepted)
    }

    /// runs the batch for one place: classifies repeatedly, feeding every
    /// accepted category into the next decision, until nothing is left. the
    /// first element is the primary category.
    pub fn classify_all(&self, bag: &EvidenceBag) -> Vec<CategoryMatch> {
        if bag.is_empty() {
            return vec![];
        }
        let evidence = bag.index();
        let mut accepted: Vec<CategorySlug> = vec![];
        let mut matches = vec![];
        while let Some(next) = self.classify_indexed(&evidence, &accepted) {
            accepted.push(next.slug.clone());
            matches.push(next);
        }
        matches
    }

    /// all categories confirmed by the evidence, best first, ignoring exclusions
    pub fn candidates(&self, bag: &EvidenceBag) -> Vec<CategoryMatch> {
        if bag.is_empty() {
            return vec![];
        }
        self.ranked_candidates(&bag.index(), &[])
    }

    fn classify_indexed(
        &self,
        evidence: &EvidenceIndex,
        accepted: &[CategorySlug],
    ) -> Option<CategoryMatch> {
        let candidates = self.ranked_candidates(evidence, accepted);
        self.select(candidates, accepted)
    }

    /// takes the best candidate that no accepted category suppresses. a
    /// candidate is deferred while a category that would suppress it is still
    /// a pending candidate, so the catch-all is never accepted ahead of the
    /// specific category that vetoes it.
    fn select(
        &self,
        candidates: Vec<CategoryMatch>,
        accepted: &[CategorySlug],
    ) -> Option<CategoryMatch> {
        let open: Vec<CategoryMatch> = candidates
            .into_iter()
            .filter(|candidate| {
                match self.exclusions.suppressed_by(candidate.slug.as_str(), accepted) {
                    Some(suppressor) => {
                        log::debug!(
                            "category '{}' ({} match) suppressed by accepted category '{}'",
                            candidate.slug,
                            candidate.source,
                            suppressor
                        );
                        false
                    }
                    None => true,
                }
            })
            .collect();
        let pending: Vec<CategorySlug> = open.iter().map(|m| m.slug.clone()).collect();
        let position = open
            .iter()
            .position(|candidate| {
                match self.exclusions.suppressed_by(candidate.slug.as_str(), &pending) {
                    Some(suppressor) => {
                        log::debug!(
                            "category '{}' deferred behind pending category '{}'",
                            candidate.slug,
                            suppressor
                        );
                        false
                    }
                    None => true,
                }
            })
            // mutually suppressing candidates fall back to plain rank order
            .unwrap_or(0);
        let winner = open.into_iter().nth(position)?;
        log::debug!(
            "category '{}' confirmed by {} at priority {}",
            winner.slug,
            winner.source,
            winner.rank
        );
        Some(winner)
    }

    fn ranked_candidates(
        &self,
        evidence: &EvidenceIndex,
        accepted: &[CategorySlug],
    ) -> Vec<CategoryMatch> {
        // registry iteration order is the global category priority
        let mut candidates: Vec<(usize, CategoryMatch)> = self
            .registry
            .iter()
            .enumerate()
            .filter(|(_, definition)| !accepted.contains(definition.slug()))
            .filter_map(|(global, definition)| {
                self.confirm(definition, evidence).map(|m| (global, m))
            })
            .collect();
        candidates.sort_by_key(|(global, m)| (m.rank, *global));
        candidates.into_iter().map(|(_, m)| m).collect()
    }

    /// walks the category's priority order and returns the first source with
    /// registered signals that hits the evidence
    fn confirm(
        &self,
        definition: &CategoryDefinition,
        evidence: &EvidenceIndex,
    ) -> Option<CategoryMatch> {
        let signals = definition.signals();
        self.registry
            .priority_for(definition.slug().as_str())
            .iter()
            .enumerate()
            .filter(|(_, source)| signals.has_signals(*source))
            .find(|(_, source)| signals.hits(*source, evidence))
            .map(|(rank, source)| CategoryMatch::new(definition, source, rank))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use std::{path::PathBuf, str::FromStr};

    use crate::{
        model::{CategorySlug, EvidenceBag, EvidenceSource},
        Taxonomy,
    };

    fn taxonomy() -> Taxonomy {
        Taxonomy::builtin().expect("builtin taxonomy should build")
    }

    fn slug(s: &str) -> CategorySlug {
        CategorySlug::from_str(s).expect("valid slug")
    }

    #[test]
    fn test_castle_prefers_crowd_tags() {
        let t = taxonomy();
        let bag = EvidenceBag::default()
            .with_google_type("castle")
            .with_google_type("tourist_attraction")
            .with_osm_tag("historic", "castle");
        let result = t.classifier().classify(&bag, &[]).expect("should match");
        assert_eq!(result.slug.as_str(), "castle");
        assert_eq!(result.source, EvidenceSource::OsmTags);
        assert_eq!(result.rank, 0);
    }

    #[test]
    fn test_landmark_suppressed_by_museum() {
        let t = taxonomy();
        let bag = EvidenceBag::default().with_google_type("tourist_attraction");
        let alone = t.classifier().classify(&bag, &[]).expect("should match");
        assert_eq!(alone.slug.as_str(), "landmark");
        assert_eq!(t.classifier().classify(&bag, &[slug("museum")]), None);
    }

    #[test]
    fn test_accepted_categories_are_not_proposed_again() {
        let t = taxonomy();
        let bag = EvidenceBag::default().with_google_type("museum");
        assert_eq!(t.classifier().classify(&bag, &[slug("museum")]), None);
    }

    #[test]
    fn test_deterministic() {
        let t = taxonomy();
        let bag = EvidenceBag::default()
            .with_osm_tag("amenity", "cafe")
            .with_foursquare("Bakery")
            .with_text("croissants and coffee by the harbour");
        let accepted = vec![slug("shop")];
        let first = t.classifier().classify(&bag, &accepted);
        for _ in 0..10 {
            assert_eq!(t.classifier().classify(&bag, &accepted), first);
        }
    }

    #[test]
    fn test_classify_all_applies_exclusions_in_order() {
        let t = taxonomy();
        let bag = EvidenceBag::default()
            .with_google_type("museum")
            .with_osm_tag("shop", "books");
        let slugs: Vec<String> = t
            .classifier()
            .classify_all(&bag)
            .into_iter()
            .map(|m| m.slug.to_string())
            .collect();
        // shop is confirmed by shop=* but suppressed by bookstore
        assert_eq!(slugs, vec!["museum", "bookstore"]);
    }

    #[test]
    fn test_catch_all_waits_for_pending_suppressor() {
        let t = taxonomy();
        // landmark is confirmed by its first source, museum only by its third
        let bag = EvidenceBag::default()
            .with_google_type("tourist_attraction")
            .with_wikidata("Q33506");
        let candidates: Vec<String> = t
            .classifier()
            .candidates(&bag)
            .into_iter()
            .map(|m| m.slug.to_string())
            .collect();
        assert_eq!(candidates, vec!["landmark", "museum"]);

        let primary = t.classifier().classify(&bag, &[]).expect("should match");
        assert_eq!(primary.slug.as_str(), "museum");
        assert_eq!(primary.source, EvidenceSource::Wikidata);

        let slugs: Vec<String> = t
            .classifier()
            .classify_all(&bag)
            .into_iter()
            .map(|m| m.slug.to_string())
            .collect();
        assert_eq!(slugs, vec!["museum"]);
    }

    #[test]
    fn test_castle_with_catch_all_provider_type() {
        let t = taxonomy();
        let bag = EvidenceBag::default()
            .with_google_type("tourist_attraction")
            .with_wikidata("Q23413");
        let slugs: Vec<String> = t
            .classifier()
            .classify_all(&bag)
            .into_iter()
            .map(|m| m.slug.to_string())
            .collect();
        assert_eq!(slugs, vec!["castle"]);
    }

    #[test]
    fn test_candidates_ignore_exclusions() {
        let t = taxonomy();
        let bag = EvidenceBag::default()
            .with_google_type("museum")
            .with_google_type("tourist_attraction");
        let slugs: Vec<String> = t
            .classifier()
            .candidates(&bag)
            .into_iter()
            .map(|m| m.slug.to_string())
            .collect();
        assert_eq!(slugs, vec!["museum", "landmark"]);
    }

    #[test]
    fn test_empty_evidence() {
        let t = taxonomy();
        let bag = EvidenceBag::default().with_architect("Tadao Ando");
        assert_eq!(t.classifier().classify(&bag, &[]), None);
        assert!(t.classifier().classify_all(&bag).is_empty());
    }

    #[derive(Debug, Deserialize)]
    struct GoldenCase {
        name: String,
        evidence: EvidenceBag,
        expected: Option<String>,
        #[serde(default)]
        expected_all: Option<Vec<String>>,
    }

    #[test]
    fn test_golden_classifications() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test")
            .join("golden_classifications.json");
        let contents = std::fs::read_to_string(&path).expect("golden file exists");
        let cases: Vec<GoldenCase> = serde_json::from_str(&contents).expect("valid golden file");
        let t = taxonomy();

        // every built-in category has at least one case
        for definition in t.categories().iter() {
            let covered = cases
                .iter()
                .any(|c| c.expected.as_deref() == Some(definition.slug().as_str()));
            assert!(covered, "no golden case for '{}'", definition.slug());
        }

        for case in cases.iter() {
            let result = t.classifier().classify(&case.evidence, &[]);
            assert_eq!(
                result.as_ref().map(|m| m.slug.as_str()),
                case.expected.as_deref(),
                "golden case '{}'",
                case.name
            );
            if let Some(expected_all) = &case.expected_all {
                let all: Vec<String> = t
                    .classifier()
                    .classify_all(&case.evidence)
                    .into_iter()
                    .map(|m| m.slug.to_string())
                    .collect();
                assert_eq!(&all, expected_all, "golden batch case '{}'", case.name);
            }
        }
    }
}
