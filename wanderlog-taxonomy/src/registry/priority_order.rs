use itertools::Itertools;

use crate::model::{EvidenceSource, TaxonomyError};

/// a permutation of the five [`EvidenceSource`] kinds, highest priority first.
///
/// the default order is provider-type, crowd-tag, knowledge-graph, POI-service,
/// keyword. categories may override it with any other permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityOrder([EvidenceSource; 5]);

impl Default for PriorityOrder {
    fn default() -> Self {
        PriorityOrder(EvidenceSource::ALL)
    }
}

impl PriorityOrder {
    /// validates that `sources` lists every evidence source exactly once.
    ///
    /// # Arguments
    ///
    /// * `sources` - candidate ordering, highest priority first
    /// * `context` - owner of this ordering, used in error messages
    pub fn try_new(
        sources: &[EvidenceSource],
        context: &str,
    ) -> Result<PriorityOrder, TaxonomyError> {
        let invalid = || TaxonomyError::InvalidPriorityOrder {
            context: context.to_string(),
            found: sources.iter().join(", "),
        };
        let order: [EvidenceSource; 5] = sources.try_into().map_err(|_| invalid())?;
        let is_permutation = EvidenceSource::ALL
            .iter()
            .all(|source| order.iter().filter(|s| *s == source).count() == 1);
        if is_permutation {
            Ok(PriorityOrder(order))
        } else {
            Err(invalid())
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = EvidenceSource> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[EvidenceSource] {
        &self.0
    }

    /// index of `source` in this ordering, 0 being the highest priority
    pub fn position(&self, source: EvidenceSource) -> usize {
        self.0
            .iter()
            .position(|s| *s == source)
            .unwrap_or(self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EvidenceSource as S;

    #[test]
    fn test_default_order() {
        let order = PriorityOrder::default();
        assert_eq!(
            order.as_slice(),
            &[S::GoogleTypes, S::OsmTags, S::Wikidata, S::Foursquare, S::Keywords]
        );
        assert_eq!(order.position(S::Keywords), 4);
    }

    #[test]
    fn test_valid_override() {
        let sources = [S::OsmTags, S::Wikidata, S::GoogleTypes, S::Foursquare, S::Keywords];
        let order = PriorityOrder::try_new(&sources, "castle").expect("valid permutation");
        assert_eq!(order.position(S::OsmTags), 0);
        assert_eq!(order.position(S::GoogleTypes), 2);
    }

    #[test]
    fn test_rejects_duplicates_and_wrong_length() {
        let duplicate = [S::OsmTags, S::OsmTags, S::GoogleTypes, S::Foursquare, S::Keywords];
        assert!(PriorityOrder::try_new(&duplicate, "castle").is_err());
        let short = [S::OsmTags, S::GoogleTypes];
        assert!(PriorityOrder::try_new(&short, "castle").is_err());
    }
}
