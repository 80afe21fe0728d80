use crate::model::CategorySlug;

/// a keyword set and the category it selects
#[derive(Debug, Clone)]
pub struct WorkLabelRule {
    category: CategorySlug,
    /// lowercased
    keywords: Vec<String>,
}

impl WorkLabelRule {
    pub fn new(category: CategorySlug, keywords: &[String]) -> Self {
        let keywords = keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { category, keywords }
    }

    pub fn category(&self) -> &CategorySlug {
        &self.category
    }

    fn matches(&self, label: &str) -> bool {
        self.keywords.iter().any(|k| label.contains(k.as_str()))
    }
}

/// keyword-in-label classifier for bulk heritage imports, where the only input
/// is the label of a work such as "National Gallery of Art".
///
/// rules are evaluated top to bottom with a case-insensitive substring test and
/// the first rule with a hit wins, so rule order is the priority.
#[derive(Debug, Clone)]
pub struct WorkLabelClassifier {
    rules: Vec<WorkLabelRule>,
    default_category: CategorySlug,
}

impl WorkLabelClassifier {
    pub fn new(rules: Vec<WorkLabelRule>, default_category: CategorySlug) -> Self {
        Self {
            rules,
            default_category,
        }
    }

    pub fn classify(&self, label: &str) -> &CategorySlug {
        let lowered = label.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(WorkLabelRule::category)
            .unwrap_or(&self.default_category)
    }

    pub fn default_category(&self) -> &CategorySlug {
        &self.default_category
    }
}

#[cfg(test)]
mod tests {
    use crate::Taxonomy;

    #[test]
    fn test_builtin_rules() {
        let taxonomy = Taxonomy::builtin().expect("builtin taxonomy should build");
        let classifier = taxonomy.work_labels();
        assert_eq!(classifier.classify("National Gallery of Art").as_str(), "museum");
        assert_eq!(classifier.classify("Random Pavilion Hall").as_str(), "pavilion");
        assert_eq!(classifier.classify("Villa Savoye").as_str(), "architecture");
        assert_eq!(classifier.classify("").as_str(), "architecture");
    }

    #[test]
    fn test_rule_order_is_priority() {
        let taxonomy = Taxonomy::builtin().expect("builtin taxonomy should build");
        let classifier = taxonomy.work_labels();
        // both the museum and the castle rule hit, the museum rule comes first
        assert_eq!(classifier.classify("Castle Museum").as_str(), "museum");
        assert_eq!(classifier.classify("ROSENBORG CASTLE").as_str(), "castle");
    }
}
