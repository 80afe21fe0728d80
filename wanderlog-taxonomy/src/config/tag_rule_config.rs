use serde::{Deserialize, Serialize};

use super::SignalConfig;
use crate::{
    model::{SignalSet, TaxonomyError},
    tagging::{TagPredicate, TagRule},
};

/// serializable description of a [`TagRule`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRuleConfig {
    pub key: String,
    #[serde(default)]
    pub predicate: TagPredicate,
    #[serde(default)]
    pub signals: SignalConfig,
}

impl TagRuleConfig {
    /// `position` is the index of the rule in its table, used in error messages
    pub fn build(&self, position: usize) -> Result<TagRule, TaxonomyError> {
        let key = self.key.trim();
        if key.is_empty() {
            return Err(TaxonomyError::EmptyTagKey(position));
        }
        let signals = SignalSet::build(&self.signals, &format!("tag rule '{key}'"))?;
        Ok(TagRule::new(key.to_string(), self.predicate, signals))
    }
}
