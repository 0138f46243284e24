mod shaping;
mod strategy;
mod tiers;

pub use shaping::{
    ResultShape, ShapedResults, TierBucket, TierPage, UnknownShape, DEFAULT_FLAT_LIMIT,
    DEFAULT_PAGE_SIZE, DEFAULT_TIER_CAP,
};
pub use strategy::{MatchStrategy, UnknownStrategy};
pub use tiers::{MatchTier, UnknownTier};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::catalog::ProfileCatalog;
use super::domain::{CareerDetail, RiasecType};
use super::scoring::ScoreState;
use strategy::MatchInputs;

/// Ranking knobs, chosen per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MatchPolicy {
    pub strategy: MatchStrategy,
    /// Sort weight given to careers of the dominant type, compared after match count.
    #[serde(default)]
    pub dominant_boost: u32,
    pub shape: ResultShape,
}

/// One career scored against a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCareer {
    /// Position in the career catalog.
    pub index: usize,
    pub career: CareerDetail,
    pub match_count: u32,
    pub subtype_sum: u32,
    pub tier: MatchTier,
    pub matches_dominant: bool,
}

/// Every catalog career, sorted and de-duplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerRanking {
    pub dominant: RiasecType,
    entries: Vec<RankedCareer>,
}

impl CareerRanking {
    pub fn entries(&self) -> &[RankedCareer] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tier(&self, tier: MatchTier) -> impl Iterator<Item = &RankedCareer> + '_ {
        self.entries.iter().filter(move |entry| entry.tier == tier)
    }
}

/// Stateless ranker applying a [`MatchPolicy`] to a session's scores.
#[derive(Debug, Clone, Default)]
pub struct CareerMatcher {
    policy: MatchPolicy,
}

impl CareerMatcher {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Orders careers by match count, dominant boost, subtype sum, then catalog index.
    ///
    /// A `(name, type)` pair listed more than once keeps only its best-placed entry.
    pub fn rank(
        &self,
        careers: &[CareerDetail],
        profiles: &ProfileCatalog,
        scores: &ScoreState,
        dominant: RiasecType,
    ) -> CareerRanking {
        let inputs = MatchInputs::new(self.policy.strategy, scores, profiles);

        let mut scored: Vec<RankedCareer> = careers
            .iter()
            .enumerate()
            .map(|(index, career)| {
                let match_count = inputs.match_count(career);
                RankedCareer {
                    index,
                    career: career.clone(),
                    match_count,
                    subtype_sum: inputs.subtype_sum(career),
                    tier: MatchTier::from_match_count(match_count),
                    matches_dominant: career.riasec_type == dominant,
                }
            })
            .collect();

        let boost = |entry: &RankedCareer| {
            if entry.matches_dominant {
                self.policy.dominant_boost
            } else {
                0
            }
        };
        scored.sort_by(|a, b| {
            b.match_count
                .cmp(&a.match_count)
                .then_with(|| boost(b).cmp(&boost(a)))
                .then_with(|| b.subtype_sum.cmp(&a.subtype_sum))
                .then_with(|| a.index.cmp(&b.index))
        });

        let mut seen = BTreeSet::new();
        scored.retain(|entry| {
            let (name, riasec_type) = entry.career.key();
            seen.insert((name.to_string(), riasec_type))
        });

        CareerRanking {
            dominant,
            entries: scored,
        }
    }
}
