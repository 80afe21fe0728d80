use std::collections::{HashMap, HashSet};

use super::CategoryRegistry;
use crate::model::{CategorySlug, TaxonomyError};

/// category -> categories whose earlier acceptance suppresses it.
///
/// rules are neither symmetric nor transitive: only direct membership in the
/// suppressed category's own set is checked.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRules(HashMap<CategorySlug, HashSet<CategorySlug>>);

impl ExclusionRules {
    /// validates every slug against the registry. a rule naming an unknown
    /// category would silently never fire, so it fails the build instead.
    pub fn try_new<'a, I>(
        rules: I,
        registry: &CategoryRegistry,
    ) -> Result<ExclusionRules, TaxonomyError>
    where
        I: IntoIterator<Item = (&'a String, &'a Vec<String>)>,
    {
        let mut result: HashMap<CategorySlug, HashSet<CategorySlug>> = HashMap::new();
        for (suppressed, suppressors) in rules {
            let suppressed = registry.require(suppressed, "exclusion rule")?.clone();
            let context = format!("exclusion rule for '{suppressed}'");
            let entry = result.entry(suppressed).or_default();
            for suppressor in suppressors {
                entry.insert(registry.require(suppressor, &context)?.clone());
            }
        }
        Ok(ExclusionRules(result))
    }

    /// returns the first category of `others` that suppresses `candidate`
    pub fn suppressed_by<'a>(
        &self,
        candidate: &str,
        others: &'a [CategorySlug],
    ) -> Option<&'a CategorySlug> {
        let suppressors = self.0.get(candidate)?;
        others.iter().find(|slug| suppressors.contains(*slug))
    }
}
