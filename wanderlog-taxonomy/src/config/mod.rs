mod category_config;
pub(crate) mod defaults;
mod migration_config;
mod pritzker_config;
mod signal_config;
mod tag_rule_config;
mod taxonomy_config;
mod work_label_config;

pub use category_config::CategoryConfig;
pub use migration_config::MigrationConfig;
pub use pritzker_config::PritzkerConfig;
pub use signal_config::SignalConfig;
pub use tag_rule_config::TagRuleConfig;
pub use taxonomy_config::TaxonomyConfig;
pub use work_label_config::{WorkLabelConfig, WorkLabelRuleConfig};
