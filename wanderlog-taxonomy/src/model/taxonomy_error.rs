use thiserror::Error;

use super::EvidenceSource;

#[derive(Error, Debug)]
pub enum TaxonomyError {
    #[error("invalid category slug '{0}': expected lowercase ascii letters, digits or '_'")]
    InvalidSlug(String),
    #[error("category '{0}' is defined more than once")]
    DuplicateCategory(String),
    #[error("{context} references unknown category '{slug}'")]
    UnknownCategory { context: String, slug: String },
    #[error("priority order for {context} must list each evidence source exactly once, found [{found}]")]
    InvalidPriorityOrder { context: String, found: String },
    #[error("catch-all category '{0}' is missing from the category table")]
    MissingCatchAll(String),
    #[error("catch-all category '{0}' must be the last entry of the category table")]
    CatchAllNotLast(String),
    #[error("legacy categories '{0}' and '{1}' collide case-insensitively with different targets")]
    DuplicateMigrationKey(String, String),
    #[error("pritzker alias '{alias}' points to '{target}' which is not in the laureate table")]
    UnknownAlias { alias: String, target: String },
    #[error("tag rule {0} has an empty key")]
    EmptyTagKey(usize),
    #[error("{kind} signal '{signal}' for {context} is invalid: {reason}")]
    InvalidSignal {
        context: String,
        kind: EvidenceSource,
        signal: String,
        reason: String,
    },
    #[error("failure reading taxonomy configuration: {0}")]
    ConfigurationError(String),
}
