use crate::{
    classifier::CategoryClassifier,
    config::TaxonomyConfig,
    migration::LegacyMigration,
    model::TaxonomyError,
    normalize::PlaceNormalizer,
    pritzker::PritzkerMatcher,
    registry::{CategoryRegistry, ExclusionRules},
    tagging::{TagEngine, TagRegistry},
    work_label::WorkLabelClassifier,
};

/// every validated table of the engine, built once at startup.
///
/// all tables are immutable after [`TaxonomyConfig::build`], so a `Taxonomy`
/// can be shared across threads and the engines it hands out only borrow it.
///
/// ```
/// use wanderlog_taxonomy::{model::EvidenceBag, Taxonomy};
///
/// let taxonomy = Taxonomy::builtin().unwrap();
/// let bag = EvidenceBag::default()
///     .with_google_type("museum")
///     .with_google_type("tourist_attraction");
/// let primary = taxonomy.classifier().classify(&bag, &[]).unwrap();
/// assert_eq!(primary.slug.as_str(), "museum");
/// ```
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: CategoryRegistry,
    exclusions: ExclusionRules,
    tags: TagRegistry,
    migration: LegacyMigration,
    pritzker: PritzkerMatcher,
    work_labels: WorkLabelClassifier,
}

impl Taxonomy {
    pub fn new(
        categories: CategoryRegistry,
        exclusions: ExclusionRules,
        tags: TagRegistry,
        migration: LegacyMigration,
        pritzker: PritzkerMatcher,
        work_labels: WorkLabelClassifier,
    ) -> Self {
        Self {
            categories,
            exclusions,
            tags,
            migration,
            pritzker,
            work_labels,
        }
    }

    /// the built-in tables
    pub fn builtin() -> Result<Taxonomy, TaxonomyError> {
        TaxonomyConfig::default().build()
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn exclusions(&self) -> &ExclusionRules {
        &self.exclusions
    }

    pub fn tags(&self) -> &TagRegistry {
        &self.tags
    }

    pub fn migration(&self) -> &LegacyMigration {
        &self.migration
    }

    pub fn pritzker(&self) -> &PritzkerMatcher {
        &self.pritzker
    }

    pub fn work_labels(&self) -> &WorkLabelClassifier {
        &self.work_labels
    }

    pub fn classifier(&self) -> CategoryClassifier<'_> {
        CategoryClassifier::new(&self.categories, &self.exclusions)
    }

    pub fn tag_engine(&self) -> TagEngine<'_> {
        TagEngine::new(&self.tags, &self.pritzker)
    }

    pub fn normalizer(&self) -> PlaceNormalizer<'_> {
        PlaceNormalizer::new(self)
    }
}
