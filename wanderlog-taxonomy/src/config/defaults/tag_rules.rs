use crate::{
    config::{SignalConfig, TagRuleConfig},
    tagging::TagPredicate,
};

fn plain(key: &str, signals: SignalConfig) -> TagRuleConfig {
    TagRuleConfig {
        key: key.to_string(),
        predicate: TagPredicate::AnyEvidence,
        signals,
    }
}

fn extracted(key: &str, predicate: TagPredicate) -> TagRuleConfig {
    TagRuleConfig {
        key: key.to_string(),
        predicate,
        signals: SignalConfig::default(),
    }
}

/// built-in tag rules in emission order
pub fn tag_rules() -> Vec<TagRuleConfig> {
    use SignalConfig as S;
    vec![
        plain(
            "meal:brunch",
            S::from_static(
                &["brunch_restaurant"],
                &["cuisine=brunch"],
                &[],
                &["Breakfast Spot", "Brunch Spot"],
                &["brunch", "早午餐"],
            ),
        ),
        plain(
            "drink:cocktail",
            S::from_static(
                &[],
                &["drink:cocktail=yes"],
                &[],
                &["Cocktail Bar", "Speakeasy"],
                &["cocktail", "cocktails", "mixology", "鸡尾酒"],
            ),
        ),
        plain(
            "drink:specialty_coffee",
            S::from_static(
                &[],
                &["cuisine=coffee_shop"],
                &[],
                &["Coffee Roaster"],
                &["specialty coffee", "pour over", "single origin", "精品咖啡"],
            ),
        ),
        plain(
            "vibe:rooftop",
            S::from_static(
                &[],
                &["roof:terrace=yes"],
                &[],
                &["Rooftop Bar"],
                &["rooftop", "roof terrace", "天台", "屋顶"],
            ),
        ),
        plain(
            "vibe:vintage",
            S::from_static(
                &["thrift_store"],
                &["shop=second_hand", "shop=antiques", "second_hand=only"],
                &[],
                &["Thrift / Vintage Store", "Antique Store"],
                &["vintage", "antique", "thrift", "古着", "复古"],
            ),
        ),
        plain(
            "feature:outdoor_seating",
            S::from_static(
                &[],
                &["outdoor_seating=yes"],
                &[],
                &["Beer Garden"],
                &["terrace", "outdoor seating", "patio", "beer garden"],
            ),
        ),
        plain(
            "feature:wheelchair",
            S::from_static(
                &[],
                &["wheelchair=yes"],
                &[],
                &[],
                &["wheelchair accessible", "无障碍"],
            ),
        ),
        plain(
            "diet:vegan",
            S::from_static(
                &["vegan_restaurant"],
                &["diet:vegan=yes", "diet:vegan=only"],
                &[],
                &["Vegan and Vegetarian Restaurant"],
                &["vegan", "plant-based", "纯素"],
            ),
        ),
        plain(
            "price:free",
            S::from_static(
                &[],
                &["fee=no"],
                &[],
                &[],
                &["free entry", "free admission", "免费"],
            ),
        ),
        plain(
            "heritage:unesco",
            S::from_static(
                &[],
                &["heritage=1", "heritage:operator=whc"],
                &["Q9259"],
                &[],
                &["unesco", "world heritage", "世界遗产"],
            ),
        ),
        plain(
            "heritage:listed",
            S::from_static(
                &[],
                &["heritage=2", "listed_status=*"],
                &["Q570600"],
                &[],
                &["listed building", "national monument", "文物保护单位"],
            ),
        ),
        plain(
            "era:medieval",
            S::from_static(
                &[],
                &["historic:period=medieval"],
                &[],
                &[],
                &["medieval", "middle ages", "中世纪"],
            ),
        ),
        extracted("style", TagPredicate::StyleName),
        extracted("architect", TagPredicate::ArchitectName),
        extracted("pritzker", TagPredicate::PritzkerWinner),
    ]
}
