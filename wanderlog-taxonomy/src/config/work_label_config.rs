use serde::{Deserialize, Serialize};

use super::defaults;
use crate::{
    model::TaxonomyError,
    registry::CategoryRegistry,
    work_label::{WorkLabelClassifier, WorkLabelRule},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLabelRuleConfig {
    pub category: String,
    pub keywords: Vec<String>,
}

/// ordered rule list of the [`WorkLabelClassifier`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLabelConfig {
    #[serde(default = "default_category")]
    pub default_category: String,
    #[serde(default = "defaults::work_label_rules")]
    pub rules: Vec<WorkLabelRuleConfig>,
}

fn default_category() -> String {
    String::from(defaults::WORK_LABEL_DEFAULT_CATEGORY)
}

impl Default for WorkLabelConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            rules: defaults::work_label_rules(),
        }
    }
}

impl WorkLabelConfig {
    pub fn build(&self, registry: &CategoryRegistry) -> Result<WorkLabelClassifier, TaxonomyError> {
        let default_category = registry
            .require(&self.default_category, "work label default")?
            .clone();
        let rules = self
            .rules
            .iter()
            .enumerate()
            .map(|(i, rule)| -> Result<WorkLabelRule, TaxonomyError> {
                let category = registry
                    .require(&rule.category, &format!("work label rule {i}"))?
                    .clone();
                Ok(WorkLabelRule::new(category, &rule.keywords))
            })
            .collect::<Result<Vec<_>, TaxonomyError>>()?;
        Ok(WorkLabelClassifier::new(rules, default_category))
    }
}
