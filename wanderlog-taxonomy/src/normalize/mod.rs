mod place_normalizer;

pub use place_normalizer::{NormalizedPlace, PlaceInput, PlaceNormalizer, PlaceOrigin};
