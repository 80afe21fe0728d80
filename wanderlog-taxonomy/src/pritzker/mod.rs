mod pritzker_matcher;

pub use pritzker_matcher::{MatchPolicy, MatchTier, PritzkerHit, PritzkerMatcher};
