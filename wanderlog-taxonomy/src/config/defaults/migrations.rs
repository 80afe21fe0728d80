use indexmap::IndexMap;

use crate::config::MigrationConfig;

/// legacy category, target slug, extra tags
const LEGACY_CATEGORIES: &[(&str, &str, &[&str])] = &[
    ("Bakery", "bakery", &[]),
    ("Brunch", "restaurant", &["meal:brunch"]),
    ("Breakfast", "restaurant", &["meal:brunch"]),
    ("Restaurant", "restaurant", &[]),
    ("Food", "restaurant", &[]),
    ("Vegan", "restaurant", &["diet:vegan"]),
    ("Cafe", "cafe", &[]),
    ("Café", "cafe", &[]),
    ("Coffee", "cafe", &["drink:specialty_coffee"]),
    ("Bar", "bar", &[]),
    ("Pub", "bar", &[]),
    ("Nightlife", "bar", &[]),
    ("Cocktail Bar", "bar", &["drink:cocktail"]),
    ("Rooftop Bar", "bar", &["vibe:rooftop"]),
    ("Shopping", "shop", &[]),
    ("Vintage", "shop", &["vibe:vintage"]),
    ("Mall", "shopping_mall", &[]),
    ("Market", "market", &[]),
    ("Bookstore", "bookstore", &[]),
    ("Museum", "museum", &[]),
    ("Gallery", "art_gallery", &[]),
    ("Art", "art_gallery", &[]),
    ("Castle", "castle", &[]),
    ("Palace", "palace", &[]),
    ("Church", "church", &[]),
    ("Temple", "temple", &[]),
    ("Mosque", "mosque", &[]),
    ("Monument", "monument", &[]),
    ("Architecture", "architecture", &[]),
    ("Park", "park", &[]),
    ("Garden", "garden", &[]),
    ("Beach", "beach", &[]),
    ("Viewpoint", "viewpoint", &[]),
    ("Nature", "park", &["activity:outdoor"]),
    ("Hotel", "hotel", &[]),
    ("Zoo", "zoo", &[]),
    ("Theme Park", "amusement_park", &[]),
    ("Theater", "theater", &[]),
    ("Stadium", "stadium", &[]),
    ("University", "university", &[]),
    ("Library", "library", &[]),
    ("Landmark", "landmark", &[]),
    ("Sightseeing", "landmark", &[]),
    ("Attraction", "landmark", &[]),
    ("Heritage", "landmark", &["heritage:listed"]),
    ("咖啡", "cafe", &[]),
    ("面包店", "bakery", &[]),
    ("早午餐", "restaurant", &["meal:brunch"]),
    ("餐厅", "restaurant", &[]),
    ("酒吧", "bar", &[]),
    ("博物馆", "museum", &[]),
    ("公园", "park", &[]),
    ("建筑", "architecture", &[]),
    ("景点", "landmark", &[]),
];

/// built-in legacy category table
pub fn migrations() -> IndexMap<String, MigrationConfig> {
    LEGACY_CATEGORIES
        .iter()
        .map(|(legacy, slug, tags)| {
            let target = MigrationConfig {
                slug: slug.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
            };
            (legacy.to_string(), target)
        })
        .collect()
}
