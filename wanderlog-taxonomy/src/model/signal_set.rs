use std::collections::HashSet;

use regex::Regex;

use super::{evidence_bag::normalize, EvidenceIndex, EvidenceSource, TaxonomyError};
use crate::config::SignalConfig;

/// a registered crowd tag signal. a `None` value is the `key=*` wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsmTagSignal {
    key: String,
    value: Option<String>,
}

impl OsmTagSignal {
    fn hits(&self, evidence: &EvidenceIndex) -> bool {
        match (evidence.osm_tags.get(&self.key), &self.value) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(values), Some(value)) => values.contains(value),
        }
    }
}

/// a registered keyword. matches an evidence keyword exactly or occurs as a
/// phrase in the free text.
#[derive(Debug, Clone)]
pub struct KeywordSignal {
    phrase: String,
    pattern: Regex,
}

impl KeywordSignal {
    fn hits(&self, evidence: &EvidenceIndex) -> bool {
        evidence.keywords.contains(&self.phrase) || self.pattern.is_match(&evidence.text)
    }
}

/// per-source signal lists registered for a category or a tag rule.
/// all signals are stored lowercased.
#[derive(Debug, Clone, Default)]
pub struct SignalSet {
    google_types: HashSet<String>,
    osm_tags: Vec<OsmTagSignal>,
    wikidata: HashSet<String>,
    foursquare: HashSet<String>,
    keywords: Vec<KeywordSignal>,
}

impl SignalSet {
    /// validates and normalizes a [`SignalConfig`]. `context` names the owner
    /// of the signals for error reporting.
    pub fn build(config: &SignalConfig, context: &str) -> Result<SignalSet, TaxonomyError> {
        let osm_tags = config
            .osm_tags
            .iter()
            .map(|tag| parse_osm_signal(tag, context))
            .collect::<Result<Vec<_>, _>>()?;
        let keywords = normalized(&config.keywords)
            .map(|phrase| parse_keyword_signal(phrase, context))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SignalSet {
            google_types: normalized(&config.google_types).collect(),
            osm_tags,
            wikidata: normalized(&config.wikidata).collect(),
            foursquare: normalized(&config.foursquare).collect(),
            keywords,
        })
    }

    /// true if at least one signal is registered for this source
    pub fn has_signals(&self, source: EvidenceSource) -> bool {
        match source {
            EvidenceSource::GoogleTypes => !self.google_types.is_empty(),
            EvidenceSource::OsmTags => !self.osm_tags.is_empty(),
            EvidenceSource::Wikidata => !self.wikidata.is_empty(),
            EvidenceSource::Foursquare => !self.foursquare.is_empty(),
            EvidenceSource::Keywords => !self.keywords.is_empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        EvidenceSource::ALL
            .into_iter()
            .all(|source| !self.has_signals(source))
    }

    /// true if any signal registered for `source` appears in the evidence
    pub fn hits(&self, source: EvidenceSource, evidence: &EvidenceIndex) -> bool {
        match source {
            EvidenceSource::GoogleTypes => intersects(&self.google_types, &evidence.google_types),
            EvidenceSource::OsmTags => self.osm_tags.iter().any(|tag| tag.hits(evidence)),
            EvidenceSource::Wikidata => intersects(&self.wikidata, &evidence.wikidata),
            EvidenceSource::Foursquare => intersects(&self.foursquare, &evidence.foursquare),
            EvidenceSource::Keywords => self.keywords.iter().any(|kw| kw.hits(evidence)),
        }
    }

    /// true if any source produces a hit
    pub fn any_hit(&self, evidence: &EvidenceIndex) -> bool {
        EvidenceSource::ALL
            .into_iter()
            .any(|source| self.hits(source, evidence))
    }
}

fn normalized(values: &[String]) -> impl Iterator<Item = String> + '_ {
    values
        .iter()
        .map(|v| normalize(v))
        .filter(|v| !v.is_empty())
}

fn intersects(signals: &HashSet<String>, evidence: &HashSet<String>) -> bool {
    // iterate over the smaller side
    if signals.len() <= evidence.len() {
        signals.iter().any(|s| evidence.contains(s))
    } else {
        evidence.iter().any(|e| signals.contains(e))
    }
}

fn parse_osm_signal(tag: &str, context: &str) -> Result<OsmTagSignal, TaxonomyError> {
    let invalid = |reason: &str| TaxonomyError::InvalidSignal {
        context: context.to_string(),
        kind: EvidenceSource::OsmTags,
        signal: tag.to_string(),
        reason: reason.to_string(),
    };
    let (key, value) = tag
        .split_once('=')
        .ok_or_else(|| invalid("expected 'key=value' or 'key=*'"))?;
    let key = normalize(key);
    let value = normalize(value);
    if key.is_empty() || value.is_empty() {
        return Err(invalid("key and value must be non-empty"));
    }
    let value = if value == "*" { None } else { Some(value) };
    Ok(OsmTagSignal { key, value })
}

fn parse_keyword_signal(phrase: String, context: &str) -> Result<KeywordSignal, TaxonomyError> {
    let pattern = Regex::new(&phrase_pattern(&phrase)).map_err(|e| TaxonomyError::InvalidSignal {
        context: context.to_string(),
        kind: EvidenceSource::Keywords,
        signal: phrase.clone(),
        reason: e.to_string(),
    })?;
    Ok(KeywordSignal { phrase, pattern })
}

/// an ascii alphanumeric edge of the phrase must not touch another ascii
/// alphanumeric character, so `bar` is not found in `barbecue`. other scripts
/// (e.g. CJK) have no word boundaries to check.
fn phrase_pattern(phrase: &str) -> String {
    const OPEN: &str = "(?:^|[^0-9A-Za-z])";
    const CLOSE: &str = "(?:$|[^0-9A-Za-z])";
    let guarded = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());
    format!(
        "{}{}{}",
        if guarded(phrase.chars().next()) { OPEN } else { "" },
        regex::escape(phrase),
        if guarded(phrase.chars().next_back()) { CLOSE } else { "" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EvidenceBag;

    fn signals(osm_tags: &[&str], keywords: &[&str]) -> SignalSet {
        let config = SignalConfig {
            osm_tags: osm_tags.iter().map(|s| s.to_string()).collect(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        SignalSet::build(&config, "test").expect("signals should be valid")
    }

    #[test]
    fn test_osm_wildcard() {
        let set = signals(&["historic=*"], &[]);
        let hit = EvidenceBag::default().with_osm_tag("historic", "castle").index();
        let miss = EvidenceBag::default().with_osm_tag("tourism", "museum").index();
        assert!(set.hits(EvidenceSource::OsmTags, &hit));
        assert!(!set.hits(EvidenceSource::OsmTags, &miss));
    }

    #[test]
    fn test_osm_exact_value_is_case_insensitive() {
        let set = signals(&["tourism=museum"], &[]);
        let hit = EvidenceBag::default().with_osm_tag("TOURISM", "Museum").index();
        let miss = EvidenceBag::default().with_osm_tag("tourism", "gallery").index();
        assert!(set.hits(EvidenceSource::OsmTags, &hit));
        assert!(!set.hits(EvidenceSource::OsmTags, &miss));
    }

    #[test]
    fn test_invalid_osm_signal() {
        let config = SignalConfig {
            osm_tags: vec![String::from("tourism")],
            ..Default::default()
        };
        assert!(SignalSet::build(&config, "test").is_err());
    }

    #[test]
    fn test_keyword_matches_text_and_keywords() {
        let set = signals(&[], &["bar", "cocktail bar"]);
        let by_keyword = EvidenceBag::default().with_keyword("BAR").index();
        let by_text = EvidenceBag::default()
            .with_text("A tiny cocktail bar near the canal")
            .index();
        let neither = EvidenceBag::default().with_text("korean barbecue").index();
        assert!(set.hits(EvidenceSource::Keywords, &by_keyword));
        assert!(set.hits(EvidenceSource::Keywords, &by_text));
        assert!(!set.hits(EvidenceSource::Keywords, &neither));
    }

    fn contains_phrase(haystack: &str, phrase: &str) -> bool {
        Regex::new(&phrase_pattern(phrase))
            .expect("escaped phrase is a valid pattern")
            .is_match(haystack)
    }

    #[test]
    fn test_phrase_boundaries() {
        assert!(contains_phrase("the bar.", "bar"));
        assert!(contains_phrase("bar", "bar"));
        assert!(!contains_phrase("crowbar", "bar"));
        assert!(!contains_phrase("barbecue", "bar"));
        assert!(contains_phrase("bbq, then a bar", "bar"));
        assert!(contains_phrase("故宫博物院和博物馆", "博物馆"));
        assert!(contains_phrase("petits cafés", "café"));
        assert!(contains_phrase("a.k.a. (st. paul's)", "st. paul's"));
        assert!(!contains_phrase("a.k.a. (stx paul's)", "st. paul's"));
    }

    #[test]
    fn test_blank_keywords_are_dropped() {
        let set = signals(&[], &["", "   "]);
        assert!(!set.has_signals(EvidenceSource::Keywords));
    }

    #[test]
    fn test_has_signals() {
        let set = signals(&["shop=*"], &[]);
        assert!(set.has_signals(EvidenceSource::OsmTags));
        assert!(!set.has_signals(EvidenceSource::Keywords));
        assert!(!set.is_empty());
        assert!(SignalSet::default().is_empty());
    }
}
