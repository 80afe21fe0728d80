use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt::Display, str::FromStr};

use super::TaxonomyError;

/// identifier of a category in the closed taxonomy, e.g. `museum` or `art_gallery`.
///
/// a slug is non-empty and made only of lowercase ascii letters, digits and `_`.
/// construction goes through [`FromStr`] so an invalid slug never reaches a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategorySlug(String);

impl CategorySlug {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategorySlug {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = !s.is_empty()
            && s
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if valid {
            Ok(CategorySlug(s.to_string()))
        } else {
            Err(TaxonomyError::InvalidSlug(s.to_string()))
        }
    }
}

impl TryFrom<String> for CategorySlug {
    type Error = TaxonomyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CategorySlug::from_str(&value)
    }
}

impl From<CategorySlug> for String {
    fn from(value: CategorySlug) -> Self {
        value.0
    }
}

impl Borrow<str> for CategorySlug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CategorySlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CategorySlug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CategorySlug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for CategorySlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        for s in ["museum", "art_gallery", "route_66"] {
            let slug = CategorySlug::from_str(s).expect("slug should be valid");
            assert_eq!(slug.as_str(), s);
        }
    }

    #[test]
    fn test_invalid_slugs() {
        for s in ["", "Museum", "art gallery", "café", "bar-pub"] {
            assert!(
                CategorySlug::from_str(s).is_err(),
                "'{s}' should not be a valid slug"
            );
        }
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let ok: Result<CategorySlug, _> = serde_json::from_str("\"castle\"");
        assert!(ok.is_ok());
        let err: Result<CategorySlug, _> = serde_json::from_str("\"Castle\"");
        assert!(err.is_err());
    }
}
