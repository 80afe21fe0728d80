use std::collections::BTreeMap;

use crate::model::{CategorySlug, SignalSet};

/// language used when a requested display name is missing
pub const FALLBACK_LANGUAGE: &str = "en";

/// one entry of the closed category taxonomy
#[derive(Debug, Clone)]
pub struct CategoryDefinition {
    slug: CategorySlug,
    names: BTreeMap<String, String>,
    signals: SignalSet,
    default_tags: Vec<String>,
}

impl CategoryDefinition {
    pub fn new(
        slug: CategorySlug,
        names: BTreeMap<String, String>,
        signals: SignalSet,
        default_tags: Vec<String>,
    ) -> Self {
        Self {
            slug,
            names,
            signals,
            default_tags,
        }
    }

    pub fn slug(&self) -> &CategorySlug {
        &self.slug
    }

    pub fn signals(&self) -> &SignalSet {
        &self.signals
    }

    /// tags applied to a place whenever this category is chosen
    pub fn default_tags(&self) -> &[String] {
        &self.default_tags
    }

    /// localized name for `language`, falling back to english and then to the slug
    pub fn display_name(&self, language: &str) -> &str {
        self.names
            .get(language)
            .or_else(|| self.names.get(FALLBACK_LANGUAGE))
            .map(String::as_str)
            .unwrap_or(self.slug.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn definition(names: &[(&str, &str)]) -> CategoryDefinition {
        let names = names
            .iter()
            .map(|(language, name)| (language.to_string(), name.to_string()))
            .collect();
        CategoryDefinition::new(
            CategorySlug::from_str("art_gallery").expect("valid slug"),
            names,
            SignalSet::default(),
            vec![],
        )
    }

    #[test]
    fn test_display_name_localized() {
        let d = definition(&[("en", "Art Gallery"), ("zh", "美术馆")]);
        assert_eq!(d.display_name("zh"), "美术馆");
        assert_eq!(d.display_name("en"), "Art Gallery");
    }

    #[test]
    fn test_display_name_falls_back_to_english() {
        let d = definition(&[("en", "Art Gallery"), ("zh", "美术馆")]);
        assert_eq!(d.display_name("fr"), "Art Gallery");
    }

    #[test]
    fn test_display_name_falls_back_to_slug() {
        assert_eq!(definition(&[]).display_name("en"), "art_gallery");
        assert_eq!(definition(&[("zh", "美术馆")]).display_name("fr"), "art_gallery");
    }
}
