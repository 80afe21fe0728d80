pub mod extract;
mod tag_engine;
mod tag_rule;

pub use tag_engine::TagEngine;
pub use tag_rule::{TagPredicate, TagRegistry, TagRule};
