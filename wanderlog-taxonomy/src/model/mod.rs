mod category_slug;
mod evidence_bag;
mod evidence_source;
mod signal_set;
mod tag_set;
mod taxonomy_error;

pub use category_slug::CategorySlug;
pub use evidence_bag::{EvidenceBag, EvidenceIndex};
pub use evidence_source::EvidenceSource;
pub use signal_set::{KeywordSignal, OsmTagSignal, SignalSet};
pub use tag_set::TagSet;
pub use taxonomy_error::TaxonomyError;
