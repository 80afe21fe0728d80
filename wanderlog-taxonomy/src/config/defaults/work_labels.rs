use crate::config::WorkLabelRuleConfig;

pub const WORK_LABEL_DEFAULT_CATEGORY: &str = "architecture";

/// evaluated top to bottom, so labels such as "Castle Museum" land on the
/// earlier rule
const WORK_LABEL_RULES: &[(&str, &[&str])] = &[
    (
        "museum",
        &[
            "museum",
            "museo",
            "musée",
            "national gallery",
            "gallery of art",
            "kunsthalle",
            "博物馆",
            "美术馆",
        ],
    ),
    ("art_gallery", &["gallery", "galerie", "画廊"]),
    ("castle", &["castle", "fortress", "citadel", "schloss", "城堡"]),
    ("palace", &["palace", "palazzo", "palais", "宫"]),
    (
        "church",
        &["church", "cathedral", "chapel", "basilica", "abbey", "教堂"],
    ),
    ("mosque", &["mosque", "清真寺"]),
    ("temple", &["temple", "shrine", "寺", "神社"]),
    ("synagogue", &["synagogue"]),
    ("library", &["library", "bibliothèque", "bibliothek", "图书馆"]),
    (
        "theater",
        &["theater", "theatre", "opera", "concert hall", "philharmonic", "剧院"],
    ),
    ("stadium", &["stadium", "arena", "体育场"]),
    ("university", &["university", "college", "campus", "大学"]),
    ("tower", &["tower", "塔"]),
    ("bridge", &["bridge", "桥"]),
    ("pavilion", &["pavilion", "亭"]),
    ("monument", &["monument", "memorial", "纪念"]),
    ("garden", &["garden", "花园", "植物园"]),
];

pub fn work_label_rules() -> Vec<WorkLabelRuleConfig> {
    WORK_LABEL_RULES
        .iter()
        .map(|(category, keywords)| WorkLabelRuleConfig {
            category: category.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        })
        .collect()
}
