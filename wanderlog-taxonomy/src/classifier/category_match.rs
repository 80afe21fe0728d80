use serde::Serialize;

use crate::{
    model::{CategorySlug, EvidenceSource},
    registry::CategoryDefinition,
};

/// a category confirmed by the evidence of a place
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMatch {
    pub slug: CategorySlug,
    /// evidence source that confirmed the category
    pub source: EvidenceSource,
    /// position of `source` in the category's own priority order
    pub rank: usize,
    pub default_tags: Vec<String>,
}

impl CategoryMatch {
    pub fn new(definition: &CategoryDefinition, source: EvidenceSource, rank: usize) -> Self {
        Self {
            slug: definition.slug().clone(),
            source,
            rank,
            default_tags: definition.default_tags().to_vec(),
        }
    }
}
