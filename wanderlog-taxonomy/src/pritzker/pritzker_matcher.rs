use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::TaxonomyError;

/// which lookup tier produced a [`PritzkerHit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// the name is a laureate table entry
    Exact,
    /// an alias token occurs inside the name
    Alias,
    /// bidirectional substring containment with a laureate name
    Fuzzy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PritzkerHit {
    pub year: u16,
    pub tier: MatchTier,
}

/// controls the precision/recall tradeoff of [`PritzkerMatcher`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPolicy {
    /// enables the substring fallback tier. short fragments may match unrelated
    /// longer names in that tier, so callers needing certainty turn it off.
    pub fuzzy_fallback: bool,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            fuzzy_fallback: true,
        }
    }
}

/// resolves an architect display name to a Pritzker Prize year.
///
/// lookup order, first hit wins:
///   1. exact laureate table lookup
///   2. any alias token contained in the lowercased name, resolved through the table
///   3. (fallback) the first laureate name, in table order, that contains or is
///      contained in the lowercased name
///
/// both tables keep insertion order, so tier 2 and tier 3 results depend on the
/// table order.
///
/// ```
/// use wanderlog_taxonomy::Taxonomy;
///
/// let taxonomy = Taxonomy::builtin().unwrap();
/// let pritzker = taxonomy.pritzker();
/// assert_eq!(pritzker.year_for("Tadao Ando"), Some(1995));
/// assert_eq!(pritzker.year_for("ando"), Some(1995));
/// assert_eq!(pritzker.year_for("Unknown Person"), None);
/// ```
#[derive(Debug, Clone)]
pub struct PritzkerMatcher {
    laureates: IndexMap<String, u16>,
    /// laureate names lowercased once, same order as `laureates`
    folded: Vec<(String, u16)>,
    aliases: IndexMap<String, String>,
    policy: MatchPolicy,
}

impl PritzkerMatcher {
    /// builds the matcher. alias tokens are lowercased and each alias must point
    /// at a name of the laureate table.
    pub fn try_new(
        laureates: IndexMap<String, u16>,
        aliases: IndexMap<String, String>,
        policy: MatchPolicy,
    ) -> Result<PritzkerMatcher, TaxonomyError> {
        let mut normalized_aliases = IndexMap::with_capacity(aliases.len());
        for (alias, target) in aliases.into_iter() {
            if !laureates.contains_key(&target) {
                return Err(TaxonomyError::UnknownAlias { alias, target });
            }
            let token = alias.trim().to_lowercase();
            if !token.is_empty() {
                normalized_aliases.insert(token, target);
            }
        }
        let folded = laureates
            .iter()
            .map(|(name, year)| (name.to_lowercase(), *year))
            .collect();
        Ok(PritzkerMatcher {
            laureates,
            folded,
            aliases: normalized_aliases,
            policy,
        })
    }

    /// the same tables under a different policy
    pub fn with_policy(&self, policy: MatchPolicy) -> PritzkerMatcher {
        PritzkerMatcher {
            policy,
            ..self.clone()
        }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn year_for(&self, name: &str) -> Option<u16> {
        self.lookup(name).map(|hit| hit.year)
    }

    /// resolves a name, reporting which tier matched. blank names never match.
    pub fn lookup(&self, name: &str) -> Option<PritzkerHit> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        if let Some(year) = self.laureates.get(name) {
            return Some(PritzkerHit {
                year: *year,
                tier: MatchTier::Exact,
            });
        }

        let lowered = name.to_lowercase();
        let by_alias = self
            .aliases
            .iter()
            .find(|(token, _)| lowered.contains(token.as_str()))
            .and_then(|(token, canonical)| {
                log::debug!("pritzker alias '{token}' found in '{name}' -> '{canonical}'");
                self.laureates.get(canonical)
            });
        if let Some(year) = by_alias {
            return Some(PritzkerHit {
                year: *year,
                tier: MatchTier::Alias,
            });
        }

        if !self.policy.fuzzy_fallback {
            return None;
        }
        self.folded
            .iter()
            .find(|(laureate, _)| laureate.contains(&lowered) || lowered.contains(laureate.as_str()))
            .map(|(laureate, year)| {
                log::debug!("pritzker fuzzy match '{name}' ~ '{laureate}'");
                PritzkerHit {
                    year: *year,
                    tier: MatchTier::Fuzzy,
                }
            })
    }

    pub fn laureates(&self) -> impl Iterator<Item = (&str, u16)> {
        self.laureates.iter().map(|(name, year)| (name.as_str(), *year))
    }
}
