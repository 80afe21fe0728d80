mod category_classifier;
mod category_match;

pub use category_classifier::CategoryClassifier;
pub use category_match::CategoryMatch;
