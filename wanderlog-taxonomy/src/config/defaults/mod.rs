//! built-in tables used when no configuration file overrides them

mod categories;
mod migrations;
mod pritzker;
mod tag_rules;
mod work_labels;

pub use categories::{categories, exclusions};
pub use migrations::migrations;
pub use pritzker::{pritzker_aliases, pritzker_laureates};
pub use tag_rules::tag_rules;
pub use work_labels::{work_label_rules, WORK_LABEL_DEFAULT_CATEGORY};
