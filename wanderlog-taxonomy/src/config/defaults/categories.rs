use indexmap::IndexMap;
use std::collections::BTreeMap;

use crate::{
    config::{CategoryConfig, SignalConfig},
    model::EvidenceSource,
};

fn category(
    slug: &str,
    en: &str,
    zh: &str,
    default_tags: &[&str],
    signals: SignalConfig,
) -> CategoryConfig {
    CategoryConfig {
        slug: slug.to_string(),
        priority: None,
        default_tags: default_tags.iter().map(|t| t.to_string()).collect(),
        names: BTreeMap::from([
            (String::from("en"), en.to_string()),
            (String::from("zh"), zh.to_string()),
        ]),
        signals,
    }
}

/// crowd tags describe built structures more reliably than provider place types
fn structure_first() -> Option<Vec<EvidenceSource>> {
    Some(vec![
        EvidenceSource::OsmTags,
        EvidenceSource::Wikidata,
        EvidenceSource::GoogleTypes,
        EvidenceSource::Foursquare,
        EvidenceSource::Keywords,
    ])
}

/// built-in categories in global priority order: specific sights first, then
/// food and drink, shopping, lodging, outdoor places, the catch-all last.
pub fn categories() -> Vec<CategoryConfig> {
    use SignalConfig as S;
    vec![
        category(
            "museum",
            "Museum",
            "博物馆",
            &["activity:culture"],
            S::from_static(
                &["museum"],
                &["tourism=museum"],
                &["Q33506", "Q207694", "Q1030034"],
                &["Museum", "Art Museum", "History Museum", "Science Museum"],
                &["museum", "博物馆", "美术馆"],
            ),
        ),
        category(
            "art_gallery",
            "Art Gallery",
            "画廊",
            &["activity:culture"],
            S::from_static(
                &["art_gallery"],
                &["tourism=gallery", "shop=art"],
                &["Q1007870"],
                &["Art Gallery"],
                &["art gallery", "画廊"],
            ),
        ),
        CategoryConfig {
            priority: structure_first(),
            ..category(
                "castle",
                "Castle",
                "城堡",
                &["activity:culture"],
                S::from_static(
                    &["castle"],
                    &["historic=castle", "building=castle", "historic=fort"],
                    &["Q23413", "Q57821"],
                    &["Castle"],
                    &["castle", "fortress", "城堡"],
                ),
            )
        },
        CategoryConfig {
            priority: structure_first(),
            ..category(
                "palace",
                "Palace",
                "宫殿",
                &["activity:culture"],
                S::from_static(
                    &["palace"],
                    &["castle_type=palace", "building=palace", "historic=palace"],
                    &["Q16560"],
                    &["Palace"],
                    &["palace", "宫殿"],
                ),
            )
        },
        category(
            "church",
            "Church",
            "教堂",
            &["activity:culture"],
            S::from_static(
                &["church"],
                &["building=church", "building=cathedral", "building=chapel"],
                &["Q16970", "Q2977", "Q108325"],
                &["Church", "Cathedral"],
                &["church", "cathedral", "basilica", "教堂"],
            ),
        ),
        category(
            "mosque",
            "Mosque",
            "清真寺",
            &["activity:culture"],
            S::from_static(
                &["mosque"],
                &["building=mosque", "religion=muslim"],
                &["Q32815"],
                &["Mosque"],
                &["mosque", "清真寺"],
            ),
        ),
        category(
            "temple",
            "Temple",
            "寺庙",
            &["activity:culture"],
            S::from_static(
                &["hindu_temple", "buddhist_temple", "shinto_shrine"],
                &[
                    "building=temple",
                    "building=shrine",
                    "religion=buddhist",
                    "religion=hindu",
                    "religion=shinto",
                ],
                &["Q44539", "Q5393308", "Q845945"],
                &["Temple", "Buddhist Temple", "Hindu Temple", "Shrine"],
                &["temple", "shrine", "寺", "神社"],
            ),
        ),
        category(
            "synagogue",
            "Synagogue",
            "犹太会堂",
            &["activity:culture"],
            S::from_static(
                &["synagogue"],
                &["building=synagogue", "religion=jewish"],
                &["Q34627"],
                &["Synagogue"],
                &["synagogue", "犹太会堂"],
            ),
        ),
        category(
            "monument",
            "Monument",
            "纪念碑",
            &["activity:culture"],
            S::from_static(
                &["monument"],
                &["historic=monument", "historic=memorial"],
                &["Q4989906", "Q5003624"],
                &["Monument", "Memorial Site"],
                &["monument", "memorial", "纪念碑"],
            ),
        ),
        CategoryConfig {
            priority: structure_first(),
            ..category(
                "tower",
                "Tower",
                "塔",
                &[],
                S::from_static(
                    &["observation_deck"],
                    &["man_made=tower", "building=tower", "tower:type=observation"],
                    &["Q12518"],
                    &["Tower"],
                    &["tower", "observation deck", "塔"],
                ),
            )
        },
        CategoryConfig {
            priority: structure_first(),
            ..category(
                "bridge",
                "Bridge",
                "桥",
                &[],
                S::from_static(
                    &["bridge"],
                    &["man_made=bridge", "bridge=*"],
                    &["Q12280"],
                    &["Bridge"],
                    &["bridge", "大桥"],
                ),
            )
        },
        category(
            "library",
            "Library",
            "图书馆",
            &["activity:culture"],
            S::from_static(
                &["library"],
                &["amenity=library"],
                &["Q7075"],
                &["Library"],
                &["library", "图书馆"],
            ),
        ),
        category(
            "bookstore",
            "Bookstore",
            "书店",
            &[],
            S::from_static(
                &["book_store"],
                &["shop=books"],
                &["Q200764"],
                &["Bookstore", "Used Bookstore"],
                &["bookstore", "bookshop", "书店"],
            ),
        ),
        category(
            "theater",
            "Theater",
            "剧院",
            &["activity:culture"],
            S::from_static(
                &["performing_arts_theater", "opera_house", "concert_hall"],
                &["amenity=theatre", "amenity=concert_hall"],
                &["Q24354", "Q153562"],
                &["Theater", "Opera House", "Concert Hall"],
                &["theater", "theatre", "opera house", "剧院"],
            ),
        ),
        category(
            "stadium",
            "Stadium",
            "体育场",
            &[],
            S::from_static(
                &["stadium", "arena"],
                &["leisure=stadium", "building=stadium"],
                &["Q483110"],
                &["Stadium", "Arena"],
                &["stadium", "体育场"],
            ),
        ),
        category(
            "zoo",
            "Zoo",
            "动物园",
            &["activity:family"],
            S::from_static(
                &["zoo"],
                &["tourism=zoo"],
                &["Q43501"],
                &["Zoo"],
                &["zoo", "动物园"],
            ),
        ),
        category(
            "aquarium",
            "Aquarium",
            "水族馆",
            &["activity:family"],
            S::from_static(
                &["aquarium"],
                &["tourism=aquarium"],
                &["Q2281788"],
                &["Aquarium"],
                &["aquarium", "水族馆"],
            ),
        ),
        category(
            "amusement_park",
            "Amusement Park",
            "游乐园",
            &["activity:family"],
            S::from_static(
                &["amusement_park", "water_park"],
                &["tourism=theme_park", "leisure=water_park"],
                &["Q194195", "Q2416723"],
                &["Theme Park", "Water Park"],
                &["theme park", "amusement park", "游乐园"],
            ),
        ),
        category(
            "bakery",
            "Bakery",
            "面包店",
            &[],
            S::from_static(
                &["bakery"],
                &["shop=bakery", "shop=pastry"],
                &["Q274393"],
                &["Bakery"],
                &["bakery", "boulangerie", "面包店"],
            ),
        ),
        category(
            "cafe",
            "Cafe",
            "咖啡馆",
            &[],
            S::from_static(
                &["cafe", "coffee_shop"],
                &["amenity=cafe"],
                &["Q30022"],
                &["Café", "Coffee Shop"],
                &["cafe", "café", "coffee", "咖啡"],
            ),
        ),
        category(
            "bar",
            "Bar",
            "酒吧",
            &["activity:nightlife"],
            S::from_static(
                &["bar", "night_club", "pub", "wine_bar"],
                &["amenity=bar", "amenity=pub", "amenity=nightclub"],
                &["Q187456", "Q212198"],
                &["Bar", "Cocktail Bar", "Pub", "Wine Bar"],
                &["bar", "pub", "酒吧"],
            ),
        ),
        category(
            "restaurant",
            "Restaurant",
            "餐厅",
            &[],
            S::from_static(
                &["restaurant", "meal_takeaway"],
                &["amenity=restaurant", "amenity=fast_food", "amenity=food_court"],
                &["Q11707"],
                &["Restaurant"],
                &["restaurant", "bistro", "餐厅"],
            ),
        ),
        category(
            "market",
            "Market",
            "市场",
            &[],
            S::from_static(
                &["market"],
                &["amenity=marketplace"],
                &["Q132510"],
                &["Market", "Farmers Market", "Flea Market"],
                &["market", "bazaar", "市场", "集市"],
            ),
        ),
        category(
            "shopping_mall",
            "Shopping Mall",
            "购物中心",
            &[],
            S::from_static(
                &["shopping_mall", "department_store"],
                &["shop=mall", "shop=department_store"],
                &["Q11315"],
                &["Shopping Mall", "Department Store"],
                &["shopping mall", "购物中心", "商场"],
            ),
        ),
        category(
            "shop",
            "Shop",
            "商店",
            &[],
            S::from_static(
                &["store", "clothing_store", "gift_shop"],
                &["shop=*"],
                &["Q213441"],
                &["Retail", "Boutique", "Gift Store"],
                &["shop", "store", "boutique", "商店"],
            ),
        ),
        category(
            "hotel",
            "Hotel",
            "酒店",
            &[],
            S::from_static(
                &["lodging", "hotel", "hostel"],
                &["tourism=hotel", "tourism=hostel", "tourism=guest_house"],
                &["Q27686"],
                &["Hotel", "Hostel", "Bed and Breakfast"],
                &["hotel", "hostel", "酒店"],
            ),
        ),
        category(
            "university",
            "University",
            "大学",
            &[],
            S::from_static(
                &["university"],
                &["amenity=university", "amenity=college"],
                &["Q3918"],
                &["University", "College and University"],
                &["university", "campus", "大学"],
            ),
        ),
        category(
            "garden",
            "Garden",
            "花园",
            &["activity:outdoor"],
            S::from_static(
                &["botanical_garden", "garden"],
                &["leisure=garden"],
                &["Q1107656", "Q167346"],
                &["Garden", "Botanical Garden"],
                &["garden", "花园", "植物园"],
            ),
        ),
        category(
            "park",
            "Park",
            "公园",
            &["activity:outdoor"],
            S::from_static(
                &["park", "national_park"],
                &["leisure=park", "boundary=national_park"],
                &["Q22698", "Q46169"],
                &["Park", "National Park"],
                &["park", "公园"],
            ),
        ),
        category(
            "beach",
            "Beach",
            "海滩",
            &["activity:outdoor"],
            S::from_static(
                &["beach"],
                &["natural=beach"],
                &["Q40080"],
                &["Beach"],
                &["beach", "海滩"],
            ),
        ),
        category(
            "viewpoint",
            "Viewpoint",
            "观景台",
            &["activity:outdoor"],
            S::from_static(
                &["scenic_spot"],
                &["tourism=viewpoint"],
                &["Q6017969"],
                &["Scenic Lookout"],
                &["viewpoint", "lookout", "观景台"],
            ),
        ),
        category(
            "cemetery",
            "Cemetery",
            "墓地",
            &[],
            S::from_static(
                &["cemetery"],
                &["landuse=cemetery", "amenity=grave_yard"],
                &["Q39614"],
                &["Cemetery"],
                &["cemetery", "墓地"],
            ),
        ),
        category(
            "square",
            "Square",
            "广场",
            &[],
            S::from_static(
                &["plaza"],
                &["place=square"],
                &["Q174782"],
                &["Plaza"],
                &["square", "plaza", "piazza", "广场"],
            ),
        ),
        CategoryConfig {
            priority: structure_first(),
            ..category(
                "pavilion",
                "Pavilion",
                "亭",
                &[],
                S::from_static(
                    &[],
                    &["building=pavilion"],
                    &["Q276173"],
                    &["Pavilion"],
                    &["pavilion", "亭"],
                ),
            )
        },
        CategoryConfig {
            priority: structure_first(),
            ..category(
                "architecture",
                "Architecture",
                "建筑",
                &["activity:culture"],
                S::from_static(
                    &[],
                    &["architect=*", "building:architecture=*"],
                    &["Q811979"],
                    &[],
                    &["architecture", "architectural", "建筑"],
                ),
            )
        },
        category(
            "landmark",
            "Landmark",
            "地标",
            &[],
            S::from_static(
                &["tourist_attraction", "historical_landmark", "point_of_interest"],
                &["tourism=attraction", "historic=*"],
                &["Q2319498", "Q570116"],
                &["Historic and Protected Site", "Landmarks and Outdoors"],
                &["landmark", "attraction", "地标", "景点"],
            ),
        ),
    ]
}

/// suppressed category -> categories whose acceptance suppresses it
pub fn exclusions() -> IndexMap<String, Vec<String>> {
    let table: [(&str, &[&str]); 5] = [
        (
            "landmark",
            &[
                "museum",
                "art_gallery",
                "castle",
                "palace",
                "church",
                "mosque",
                "temple",
                "synagogue",
                "monument",
                "tower",
                "bridge",
                "library",
                "theater",
                "stadium",
                "zoo",
                "aquarium",
                "amusement_park",
                "university",
                "garden",
                "park",
                "beach",
                "viewpoint",
                "cemetery",
                "square",
                "pavilion",
                "architecture",
            ],
        ),
        (
            "architecture",
            &[
                "museum",
                "art_gallery",
                "castle",
                "palace",
                "church",
                "mosque",
                "temple",
                "synagogue",
                "tower",
                "bridge",
                "library",
                "theater",
                "stadium",
                "pavilion",
            ],
        ),
        ("art_gallery", &["museum"]),
        ("shop", &["bakery", "bookstore", "market", "shopping_mall"]),
        ("park", &["garden", "zoo", "amusement_park"]),
    ];
    table
        .into_iter()
        .map(|(suppressed, by)| {
            let by: Vec<String> = by.iter().map(|s| s.to_string()).collect();
            (suppressed.to_string(), by)
        })
        .collect()
}
