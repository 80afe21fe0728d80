use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::{
    model::TaxonomyError,
    pritzker::{MatchPolicy, PritzkerMatcher},
};

/// curated Pritzker laureate dataset. `laureates` maps every accepted name
/// variant to its award year; `aliases` maps lowercase tokens to a laureate name.
/// table order is significant for alias and fallback lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PritzkerConfig {
    #[serde(default = "default_fuzzy_fallback")]
    pub fuzzy_fallback: bool,
    #[serde(default = "defaults::pritzker_laureates")]
    pub laureates: IndexMap<String, u16>,
    #[serde(default = "defaults::pritzker_aliases")]
    pub aliases: IndexMap<String, String>,
}

fn default_fuzzy_fallback() -> bool {
    MatchPolicy::default().fuzzy_fallback
}

impl Default for PritzkerConfig {
    fn default() -> Self {
        Self {
            fuzzy_fallback: default_fuzzy_fallback(),
            laureates: defaults::pritzker_laureates(),
            aliases: defaults::pritzker_aliases(),
        }
    }
}

impl PritzkerConfig {
    pub fn build(&self) -> Result<PritzkerMatcher, TaxonomyError> {
        let policy = MatchPolicy {
            fuzzy_fallback: self.fuzzy_fallback,
        };
        PritzkerMatcher::try_new(self.laureates.clone(), self.aliases.clone(), policy)
    }
}
