mod category_definition;
mod category_registry;
mod exclusion_rules;
mod priority_order;

pub use category_definition::{CategoryDefinition, FALLBACK_LANGUAGE};
pub use category_registry::{CategoryRegistry, CATCH_ALL_CATEGORY};
pub use exclusion_rules::ExclusionRules;
pub use priority_order::PriorityOrder;
