use super::{extract, TagPredicate, TagRegistry, TagRule};
use crate::{
    model::{EvidenceBag, EvidenceIndex, TagSet},
    pritzker::PritzkerMatcher,
};

/// applies every [`TagRule`] to a place. tags do not compete, so each rule is
/// evaluated on its own and any number of them may apply.
#[derive(Debug, Clone, Copy)]
pub struct TagEngine<'a> {
    rules: &'a TagRegistry,
    pritzker: &'a PritzkerMatcher,
}

impl<'a> TagEngine<'a> {
    pub fn new(rules: &'a TagRegistry, pritzker: &'a PritzkerMatcher) -> Self {
        Self { rules, pritzker }
    }

    /// tags for a place in rule table order. keys are unique.
    pub fn tags_for(&self, bag: &EvidenceBag) -> TagSet {
        let evidence = bag.index();
        let mut tags = TagSet::default();
        for rule in self.rules.iter() {
            if let Some(value) = self.apply(rule, bag, &evidence) {
                tags.insert(rule.key(), value);
            }
        }
        tags
    }

    /// `None` when the rule does not apply, `Some(value)` otherwise where
    /// `value` is the templated suffix of value-carrying rules
    fn apply(
        &self,
        rule: &TagRule,
        bag: &EvidenceBag,
        evidence: &EvidenceIndex,
    ) -> Option<Option<String>> {
        let predicate = rule.predicate();
        // for value-carrying rules without signals the extraction is the evidence
        let gated = if predicate.carries_value() && rule.signals().is_empty() {
            true
        } else {
            rule.signals().any_hit(evidence)
        };
        if !gated {
            return None;
        }

        match predicate {
            TagPredicate::AnyEvidence => Some(None),
            TagPredicate::ArchitectName => extract::architect_name(bag).map(Some),
            TagPredicate::StyleName => extract::style_name(bag).map(Some),
            TagPredicate::PritzkerWinner => {
                let architect = extract::architect_name(bag)?;
                let hit = self.pritzker.lookup(&architect)?;
                log::debug!(
                    "architect '{architect}' matched pritzker {} via {:?} lookup",
                    hit.year,
                    hit.tier
                );
                Some(Some(hit.year.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{model::EvidenceBag, Taxonomy};

    fn taxonomy() -> Taxonomy {
        Taxonomy::builtin().expect("builtin taxonomy should build")
    }

    #[test]
    fn test_plain_tags_from_any_source() {
        let t = taxonomy();
        let bag = EvidenceBag::default()
            .with_text("Bottomless brunch on a rooftop terrace")
            .with_osm_tag("wheelchair", "yes");
        let tags = t.tag_engine().tags_for(&bag);
        assert!(tags.contains_key("meal:brunch"));
        assert!(tags.contains_key("vibe:rooftop"));
        assert!(tags.contains_key("feature:wheelchair"));
        assert!(!tags.contains_key("architect"));
    }

    #[test]
    fn test_architect_style_and_pritzker() {
        let t = taxonomy();
        let bag = EvidenceBag::default()
            .with_osm_tag("architect", "Tadao Ando")
            .with_osm_tag("building:architecture", "Modern")
            .with_google_type("museum");
        let tags = t.tag_engine().tags_for(&bag);
        assert_eq!(tags.value("architect"), Some("Tadao Ando"));
        assert_eq!(tags.value("style"), Some("modern"));
        assert_eq!(tags.value("pritzker"), Some("1995"));
    }

    #[test]
    fn test_value_tags_need_a_value() {
        let t = taxonomy();
        let bag = EvidenceBag::default().with_text("famous architect designed this museum");
        let tags = t.tag_engine().tags_for(&bag);
        assert!(!tags.contains_key("architect"));
        assert!(!tags.contains_key("style"));
        assert!(!tags.contains_key("pritzker"));
    }

    #[test]
    fn test_non_laureate_architect() {
        let t = taxonomy();
        let bag = EvidenceBag::default().with_architect("Bjarke Ingels");
        let tags = t.tag_engine().tags_for(&bag);
        assert_eq!(tags.value("architect"), Some("Bjarke Ingels"));
        assert!(!tags.contains_key("pritzker"));
    }

    #[test]
    fn test_idempotent_without_duplicates() {
        let t = taxonomy();
        let bag = EvidenceBag::default()
            .with_keyword("brunch")
            .with_text("brunch and more brunch, vegan options, rooftop")
            .with_foursquare("Vegan Restaurant")
            .with_osm_tag("diet:vegan", "yes")
            .with_architect("Zaha Hadid");
        let engine = t.tag_engine();
        let first = engine.tags_for(&bag);
        let second = engine.tags_for(&bag);
        assert_eq!(first, second);
        let keys: Vec<&str> = first.keys().collect();
        let mut deduped = keys.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(keys.len(), deduped.len());
    }
}
