//! place category normalization and tagging.
//!
//! turns the evidence a place record collected from several providers (map
//! place types, crowd tags, knowledge-graph classes, POI service categories,
//! free text) into one category of a closed taxonomy plus a set of tags. all
//! tables live in a [`Taxonomy`] built once from a [`config::TaxonomyConfig`].
pub mod app;
pub mod classifier;
pub mod config;
pub mod migration;
pub mod model;
pub mod normalize;
pub mod pritzker;
pub mod registry;
pub mod tagging;
pub mod work_label;

mod taxonomy;

pub use taxonomy::Taxonomy;
