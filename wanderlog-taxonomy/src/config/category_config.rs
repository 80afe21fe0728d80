use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, str::FromStr};

use super::SignalConfig;
use crate::{
    model::{CategorySlug, EvidenceSource, SignalSet, TaxonomyError},
    registry::{CategoryDefinition, PriorityOrder},
};

/// serializable description of one category. builds to a [`CategoryDefinition`]
/// and its optional [`PriorityOrder`] override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub slug: String,
    /// replaces the default evidence source order for this category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Vec<EvidenceSource>>,
    #[serde(default)]
    pub default_tags: Vec<String>,
    /// display names by language code
    #[serde(default)]
    pub names: BTreeMap<String, String>,
    #[serde(default)]
    pub signals: SignalConfig,
}

impl CategoryConfig {
    pub fn build(&self) -> Result<(CategoryDefinition, Option<PriorityOrder>), TaxonomyError> {
        let slug = CategorySlug::from_str(&self.slug)?;
        let context = format!("category '{slug}'");
        let priority = self
            .priority
            .as_ref()
            .map(|sources| PriorityOrder::try_new(sources, &context))
            .transpose()?;
        let signals = SignalSet::build(&self.signals, &context)?;
        let definition =
            CategoryDefinition::new(slug, self.names.clone(), signals, self.default_tags.clone());
        Ok((definition, priority))
    }
}
