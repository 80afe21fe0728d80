use std::collections::HashMap;

use super::{CategoryDefinition, PriorityOrder};
use crate::model::{CategorySlug, TaxonomyError};

/// slug of the catch-all category, always the lowest priority category
pub const CATCH_ALL_CATEGORY: &str = "landmark";

/// immutable table of [`CategoryDefinition`]s plus the evidence source priority
/// of each category.
///
/// the order of the definitions is the global category priority used to break
/// ties between categories: specific categories first, the catch-all last.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    definitions: Vec<CategoryDefinition>,
    index: HashMap<CategorySlug, usize>,
    default_priority: PriorityOrder,
    priority_overrides: HashMap<CategorySlug, PriorityOrder>,
}

impl CategoryRegistry {
    /// builds a registry, failing on duplicate slugs or a misplaced catch-all.
    ///
    /// # Arguments
    ///
    /// * `definitions` - categories in global priority order, each with an optional
    ///   override of `default_priority`
    /// * `default_priority` - evidence source order for categories without override
    pub fn try_new(
        definitions: Vec<(CategoryDefinition, Option<PriorityOrder>)>,
        default_priority: PriorityOrder,
    ) -> Result<CategoryRegistry, TaxonomyError> {
        let mut index = HashMap::new();
        let mut priority_overrides = HashMap::new();
        let mut ordered = Vec::with_capacity(definitions.len());
        for (position, (definition, priority)) in definitions.into_iter().enumerate() {
            let slug = definition.slug().clone();
            if index.insert(slug.clone(), position).is_some() {
                return Err(TaxonomyError::DuplicateCategory(slug.to_string()));
            }
            if let Some(order) = priority {
                priority_overrides.insert(slug, order);
            }
            ordered.push(definition);
        }

        match index.get(CATCH_ALL_CATEGORY) {
            None => return Err(TaxonomyError::MissingCatchAll(CATCH_ALL_CATEGORY.to_string())),
            Some(position) if *position + 1 != ordered.len() => {
                return Err(TaxonomyError::CatchAllNotLast(CATCH_ALL_CATEGORY.to_string()))
            }
            Some(_) => {}
        }

        Ok(CategoryRegistry {
            definitions: ordered,
            index,
            default_priority,
            priority_overrides,
        })
    }

    /// looks up a category by slug. unknown slugs return `None`.
    pub fn definition_for(&self, slug: &str) -> Option<&CategoryDefinition> {
        self.index.get(slug).map(|i| &self.definitions[*i])
    }

    /// the evidence source order for a category: its override if registered,
    /// the default order otherwise (including for unknown slugs).
    pub fn priority_for(&self, slug: &str) -> &PriorityOrder {
        self.priority_overrides
            .get(slug)
            .unwrap_or(&self.default_priority)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.index.contains_key(slug)
    }

    /// position of a category in the global category priority
    pub fn global_rank(&self, slug: &str) -> Option<usize> {
        self.index.get(slug).copied()
    }

    /// resolves a slug into the registry's own instance, reporting unknown slugs
    /// against `context`
    pub fn require(&self, slug: &str, context: &str) -> Result<&CategorySlug, TaxonomyError> {
        self.definition_for(slug)
            .map(CategoryDefinition::slug)
            .ok_or_else(|| TaxonomyError::UnknownCategory {
                context: context.to_string(),
                slug: slug.to_string(),
            })
    }

    /// all categories in global priority order
    pub fn iter(&self) -> impl Iterator<Item = &CategoryDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EvidenceSource, SignalSet};
    use std::{collections::BTreeMap, str::FromStr};

    fn definition(slug: &str) -> CategoryDefinition {
        let slug = CategorySlug::from_str(slug).expect("valid slug");
        CategoryDefinition::new(slug, BTreeMap::new(), SignalSet::default(), vec![])
    }

    #[test]
    fn test_lookup_and_priority() {
        let castle_order = PriorityOrder::try_new(
            &[
                EvidenceSource::OsmTags,
                EvidenceSource::Wikidata,
                EvidenceSource::GoogleTypes,
                EvidenceSource::Foursquare,
                EvidenceSource::Keywords,
            ],
            "castle",
        )
        .expect("valid order");
        let registry = CategoryRegistry::try_new(
            vec![
                (definition("castle"), Some(castle_order)),
                (definition("museum"), None),
                (definition("landmark"), None),
            ],
            PriorityOrder::default(),
        )
        .expect("valid registry");

        assert!(registry.definition_for("museum").is_some());
        assert!(registry.definition_for("unknown").is_none());
        assert!(registry.contains("castle"));
        assert!(!registry.contains("Castle"));
        assert_eq!(registry.priority_for("castle"), &castle_order);
        assert_eq!(registry.priority_for("museum"), &PriorityOrder::default());
        assert_eq!(registry.priority_for("unknown"), &PriorityOrder::default());
        assert_eq!(registry.global_rank("landmark"), Some(2));
    }

    #[test]
    fn test_catch_all_must_be_last() {
        let result = CategoryRegistry::try_new(
            vec![(definition("landmark"), None), (definition("museum"), None)],
            PriorityOrder::default(),
        );
        assert!(matches!(result, Err(TaxonomyError::CatchAllNotLast(_))));

        let result =
            CategoryRegistry::try_new(vec![(definition("museum"), None)], PriorityOrder::default());
        assert!(matches!(result, Err(TaxonomyError::MissingCatchAll(_))));
    }

    #[test]
    fn test_duplicate_slug() {
        let result = CategoryRegistry::try_new(
            vec![
                (definition("museum"), None),
                (definition("museum"), None),
                (definition("landmark"), None),
            ],
            PriorityOrder::default(),
        );
        assert!(matches!(result, Err(TaxonomyError::DuplicateCategory(_))));
    }
}
