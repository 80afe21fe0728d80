use serde::{Deserialize, Serialize};

use crate::model::SignalSet;

/// how a [`TagRule`] decides whether it applies and what value it carries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagPredicate {
    /// a hit on any evidence source applies the plain tag
    #[default]
    AnyEvidence,
    /// applies `<key>:<architect name>` when an architect can be extracted
    ArchitectName,
    /// applies `<key>:<style>` when an architectural style can be extracted
    StyleName,
    /// applies `<key>:<award year>` when the extracted architect is a Pritzker laureate
    PritzkerWinner,
}

impl TagPredicate {
    /// true for predicates that need an extracted value before emitting a tag
    pub fn carries_value(&self) -> bool {
        !matches!(self, TagPredicate::AnyEvidence)
    }
}

#[derive(Debug, Clone)]
pub struct TagRule {
    key: String,
    predicate: TagPredicate,
    signals: SignalSet,
}

impl TagRule {
    pub fn new(key: String, predicate: TagPredicate, signals: SignalSet) -> Self {
        Self {
            key,
            predicate,
            signals,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn predicate(&self) -> TagPredicate {
        self.predicate
    }

    pub fn signals(&self) -> &SignalSet {
        &self.signals
    }
}

/// immutable, ordered table of [`TagRule`]s
#[derive(Debug, Clone, Default)]
pub struct TagRegistry(Vec<TagRule>);

impl TagRegistry {
    pub fn new(rules: Vec<TagRule>) -> Self {
        Self(rules)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagRule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
