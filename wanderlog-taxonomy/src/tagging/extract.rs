use crate::model::EvidenceBag;

/// crowd tag keys carrying an architectural style, in lookup order
const STYLE_TAG_KEYS: [&str; 2] = ["building:architecture", "architecture"];

/// extracts the architect of a place: the first entry of a crowd `architect`
/// tag (multiple names are `;`-separated), else the upstream attribute.
pub fn architect_name(bag: &EvidenceBag) -> Option<String> {
    let from_tag = bag
        .osm_tag_value("architect")
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .filter(|name| !name.is_empty());
    from_tag
        .or_else(|| bag.architect.as_deref().map(str::trim))
        .filter(|name| !name.is_empty())
        .map(String::from)
}

/// extracts an architectural style, lowercased with spaces replaced by `_`
/// (`Art Nouveau` -> `art_nouveau`).
pub fn style_name(bag: &EvidenceBag) -> Option<String> {
    STYLE_TAG_KEYS
        .iter()
        .find_map(|key| bag.osm_tag_value(key).filter(|value| !value.is_empty()))
        .or(bag.style.as_deref())
        .map(|style| {
            style
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("_")
                .to_lowercase()
        })
        .filter(|style| !style.is_empty())
}
