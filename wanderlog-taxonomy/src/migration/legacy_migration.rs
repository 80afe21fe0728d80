use serde::Serialize;
use std::collections::HashMap;

use crate::model::{CategorySlug, TaxonomyError};

/// target of a legacy category string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationMapping {
    pub slug: CategorySlug,
    pub tags: Vec<String>,
}

/// outcome of a legacy lookup. unmapped strings are reported, never guessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum MigrationResult {
    Mapped { slug: CategorySlug, tags: Vec<String> },
    Unmapped { legacy: String },
}

impl MigrationResult {
    pub fn slug(&self) -> Option<&CategorySlug> {
        match self {
            MigrationResult::Mapped { slug, .. } => Some(slug),
            MigrationResult::Unmapped { .. } => None,
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, MigrationResult::Mapped { .. })
    }
}

/// translates free-text categories of the old scheme into slug + tags.
///
/// lookup is exact first, then case-insensitive.
///
/// ```
/// use wanderlog_taxonomy::{migration::MigrationResult, Taxonomy};
///
/// let taxonomy = Taxonomy::builtin().unwrap();
/// match taxonomy.migration().mapping_for("Brunch") {
///     MigrationResult::Mapped { slug, tags } => {
///         assert_eq!(slug.as_str(), "restaurant");
///         assert_eq!(tags, vec![String::from("meal:brunch")]);
///     }
///     MigrationResult::Unmapped { .. } => panic!("Brunch is a known legacy category"),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct LegacyMigration {
    exact: HashMap<String, MigrationMapping>,
    /// lowercased legacy string -> exact key
    folded: HashMap<String, String>,
}

impl LegacyMigration {
    /// builds the table and its lowercase index. two legacy strings that only
    /// differ by case must agree on their target.
    pub fn try_new<I>(mappings: I) -> Result<LegacyMigration, TaxonomyError>
    where
        I: IntoIterator<Item = (String, MigrationMapping)>,
    {
        let mut exact: HashMap<String, MigrationMapping> = HashMap::new();
        let mut folded: HashMap<String, String> = HashMap::new();
        for (legacy, mapping) in mappings {
            let lowered = legacy.to_lowercase();
            if let Some(existing) = folded.get(&lowered) {
                let same_target = exact.get(existing).is_some_and(|m| *m == mapping);
                if !same_target {
                    return Err(TaxonomyError::DuplicateMigrationKey(
                        existing.clone(),
                        legacy,
                    ));
                }
            } else {
                folded.insert(lowered, legacy.clone());
            }
            exact.insert(legacy, mapping);
        }
        Ok(LegacyMigration { exact, folded })
    }

    pub fn mapping_for(&self, legacy: &str) -> MigrationResult {
        let key = legacy.trim();
        let found = self.exact.get(key).or_else(|| {
            self.folded
                .get(&key.to_lowercase())
                .and_then(|original| self.exact.get(original))
        });
        match found {
            Some(mapping) => MigrationResult::Mapped {
                slug: mapping.slug.clone(),
                tags: mapping.tags.clone(),
            },
            None => MigrationResult::Unmapped {
                legacy: legacy.to_string(),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Taxonomy;
    use std::str::FromStr;

    fn slug(s: &str) -> CategorySlug {
        CategorySlug::from_str(s).expect("valid slug")
    }

    #[test]
    fn test_exact_and_case_insensitive() {
        let taxonomy = Taxonomy::builtin().expect("builtin taxonomy should build");
        let migration = taxonomy.migration();
        for legacy in ["Bakery", "bakery", "BAKERY", "  Bakery "] {
            assert_eq!(
                migration.mapping_for(legacy).slug().map(CategorySlug::as_str),
                Some("bakery"),
                "'{legacy}' should map to bakery"
            );
        }
    }

    #[test]
    fn test_extra_tags() {
        let taxonomy = Taxonomy::builtin().expect("builtin taxonomy should build");
        assert_eq!(
            taxonomy.migration().mapping_for("Brunch"),
            MigrationResult::Mapped {
                slug: slug("restaurant"),
                tags: vec![String::from("meal:brunch")],
            }
        );
    }

    #[test]
    fn test_unmapped_is_explicit() {
        let taxonomy = Taxonomy::builtin().expect("builtin taxonomy should build");
        let result = taxonomy.migration().mapping_for("Spaceport");
        assert_eq!(
            result,
            MigrationResult::Unmapped {
                legacy: String::from("Spaceport")
            }
        );
        assert!(!result.is_mapped());
    }

    #[test]
    fn test_case_collision_with_different_target_fails() {
        let result = LegacyMigration::try_new(vec![
            (
                String::from("Bar"),
                MigrationMapping { slug: slug("bar"), tags: vec![] },
            ),
            (
                String::from("BAR"),
                MigrationMapping { slug: slug("restaurant"), tags: vec![] },
            ),
        ]);
        assert!(matches!(result, Err(TaxonomyError::DuplicateMigrationKey(_, _))));
    }
}
