use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;
use std::fmt::Display;

/// insertion-ordered set of tags keyed by tag key. a key holds at most one value,
/// the first one inserted, so repeated application never duplicates a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(IndexMap<String, Option<String>>);

impl TagSet {
    /// adds a plain tag such as `meal:brunch`
    pub fn insert_key(&mut self, key: &str) -> bool {
        self.insert(key, None)
    }

    /// adds a tag, returning false if the key was already present
    pub fn insert(&mut self, key: &str, value: Option<String>) -> bool {
        if self.0.contains_key(key) {
            return false;
        }
        self.0.insert(key.to_string(), value);
        true
    }

    pub fn extend_keys<'a, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for key in keys {
            self.insert_key(key);
        }
    }

    /// appends all tags of `other` whose keys are not present yet
    pub fn merge(&mut self, other: TagSet) {
        for (key, value) in other.0 {
            self.0.entry(key).or_insert(value);
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_deref())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// renders each tag as `key` or `key:value`
    pub fn to_strings(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|(key, value)| render(key, value.as_deref()))
            .collect()
    }
}

fn render(key: &str, value: Option<&str>) -> String {
    match value {
        Some(v) => format!("{key}:{v}"),
        None => key.to_string(),
    }
}

impl Display for TagSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.to_strings().iter().join(", "))
    }
}

impl Serialize for TagSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.to_strings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins() {
        let mut tags = TagSet::default();
        assert!(tags.insert("architect", Some(String::from("Tadao Ando"))));
        assert!(!tags.insert("architect", Some(String::from("Someone Else"))));
        assert_eq!(tags.value("architect"), Some("Tadao Ando"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_render_and_order() {
        let mut tags = TagSet::default();
        tags.insert_key("meal:brunch");
        tags.insert("pritzker", Some(String::from("1995")));
        tags.insert_key("vibe:rooftop");
        assert_eq!(
            tags.to_strings(),
            vec!["meal:brunch", "pritzker:1995", "vibe:rooftop"]
        );
        assert_eq!(
            serde_json::to_string(&tags).expect("serializes"),
            r#"["meal:brunch","pritzker:1995","vibe:rooftop"]"#
        );
    }

    #[test]
    fn test_merge_keeps_existing() {
        let mut left = TagSet::default();
        left.insert_key("activity:culture");
        let mut right = TagSet::default();
        right.insert_key("activity:culture");
        right.insert_key("heritage:unesco");
        left.merge(right);
        assert_eq!(left.to_strings(), vec!["activity:culture", "heritage:unesco"]);
    }
}
