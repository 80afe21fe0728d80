use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{
    defaults, CategoryConfig, MigrationConfig, PritzkerConfig, TagRuleConfig, WorkLabelConfig,
};
use crate::{
    migration::{LegacyMigration, MigrationMapping},
    model::{EvidenceSource, TaxonomyError},
    registry::{CategoryRegistry, ExclusionRules, PriorityOrder},
    tagging::TagRegistry,
    Taxonomy,
};

/// complete, serializable description of every table of the engine.
///
/// [`Default`] holds the built-in tables. a configuration file only needs the
/// sections it replaces; missing sections keep their built-in value. nothing is
/// usable before [`TaxonomyConfig::build`] has validated the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    pub default_priority: Vec<EvidenceSource>,
    /// categories in global priority order, catch-all last
    pub categories: Vec<CategoryConfig>,
    /// suppressed category -> categories that suppress it
    pub exclusions: IndexMap<String, Vec<String>>,
    pub tags: Vec<TagRuleConfig>,
    /// legacy category string -> target
    pub migrations: IndexMap<String, MigrationConfig>,
    pub pritzker: PritzkerConfig,
    pub work_labels: WorkLabelConfig,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            default_priority: PriorityOrder::default().as_slice().to_vec(),
            categories: defaults::categories(),
            exclusions: defaults::exclusions(),
            tags: defaults::tag_rules(),
            migrations: defaults::migrations(),
            pritzker: PritzkerConfig::default(),
            work_labels: WorkLabelConfig::default(),
        }
    }
}

impl TaxonomyConfig {
    /// validates every table and builds the immutable [`Taxonomy`]. any
    /// reference to an unknown category fails here rather than at lookup time.
    pub fn build(&self) -> Result<Taxonomy, TaxonomyError> {
        let default_priority = PriorityOrder::try_new(&self.default_priority, "default priority")?;
        let definitions = self
            .categories
            .iter()
            .map(CategoryConfig::build)
            .collect::<Result<Vec<_>, TaxonomyError>>()?;
        let categories = CategoryRegistry::try_new(definitions, default_priority)?;

        let exclusions = ExclusionRules::try_new(self.exclusions.iter(), &categories)?;

        let rules = self
            .tags
            .iter()
            .enumerate()
            .map(|(i, rule)| rule.build(i))
            .collect::<Result<Vec<_>, TaxonomyError>>()?;
        let tags = TagRegistry::new(rules);

        let mappings = self
            .migrations
            .iter()
            .map(|(legacy, target)| -> Result<(String, MigrationMapping), TaxonomyError> {
                let context = format!("legacy category '{legacy}'");
                let slug = categories.require(&target.slug, &context)?.clone();
                let mapping = MigrationMapping {
                    slug,
                    tags: target.tags.clone(),
                };
                Ok((legacy.clone(), mapping))
            })
            .collect::<Result<Vec<_>, TaxonomyError>>()?;
        let migration = LegacyMigration::try_new(mappings)?;

        let pritzker = self.pritzker.build()?;
        let work_labels = self.work_labels.build(&categories)?;

        log::info!(
            "built taxonomy with {} categories, {} tag rules, {} legacy mappings",
            categories.len(),
            tags.len(),
            migration.len()
        );

        Ok(Taxonomy::new(
            categories,
            exclusions,
            tags,
            migration,
            pritzker,
            work_labels,
        ))
    }
}

impl TryFrom<&String> for TaxonomyConfig {
    type Error = TaxonomyError;

    /// reads a `.toml` or `.json` configuration file
    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let read = || {
            std::fs::read_to_string(f).map_err(|e| {
                TaxonomyError::ConfigurationError(format!("failure reading {f}: {e}"))
            })
        };
        if f.ends_with(".toml") {
            toml::from_str(&read()?).map_err(|e| {
                TaxonomyError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            serde_json::from_str(&read()?).map_err(|e| {
                TaxonomyError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(TaxonomyError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
