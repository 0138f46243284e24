use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::quiz::catalog::ProfileCatalog;
use crate::quiz::domain::CareerDetail;
use crate::quiz::scoring::{top_subtypes, ScoreState, DEFAULT_TOP_SUBTYPES};
use crate::quiz::validation::SUBTYPES_PER_CAREER;

/// How a career's match count is derived from the player's scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Related subtypes found among the player's global top `n`.
    TopSubtypes { n: usize },
    /// Subtypes of the career's own type the player touched, capped at four.
    OwnTypeCoverage,
    /// Related subtypes the player touched at all.
    RelatedCoverage,
}

impl MatchStrategy {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TopSubtypes { .. } => "top_subtypes",
            Self::OwnTypeCoverage => "own_type_coverage",
            Self::RelatedCoverage => "related_coverage",
        }
    }

    /// Replaces `n` for [`MatchStrategy::TopSubtypes`]; other strategies are unchanged.
    pub fn with_top_subtypes(self, n: usize) -> Self {
        match self {
            Self::TopSubtypes { .. } => Self::TopSubtypes { n },
            other => other,
        }
    }
}

impl Default for MatchStrategy {
    fn default() -> Self {
        Self::TopSubtypes {
            n: DEFAULT_TOP_SUBTYPES,
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchStrategy {
    type Err = UnknownStrategy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "top_subtypes" => Ok(Self::default()),
            "own_type_coverage" => Ok(Self::OwnTypeCoverage),
            "related_coverage" => Ok(Self::RelatedCoverage),
            _ => Err(UnknownStrategy(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown match strategy '{0}'")]
pub struct UnknownStrategy(pub String);

/// Per-ranking view over the scores, built once and shared by every career.
pub(super) struct MatchInputs<'a> {
    strategy: MatchStrategy,
    scores: &'a ScoreState,
    profiles: &'a ProfileCatalog,
    top: BTreeSet<String>,
}

impl<'a> MatchInputs<'a> {
    pub(super) fn new(
        strategy: MatchStrategy,
        scores: &'a ScoreState,
        profiles: &'a ProfileCatalog,
    ) -> Self {
        let top = match strategy {
            MatchStrategy::TopSubtypes { n } => {
                top_subtypes(&scores.subtype_counts, &scores.recency, n)
                    .into_iter()
                    .collect()
            }
            _ => BTreeSet::new(),
        };
        Self {
            strategy,
            scores,
            profiles,
            top,
        }
    }

    pub(super) fn match_count(&self, career: &CareerDetail) -> u32 {
        let count = match self.strategy {
            MatchStrategy::TopSubtypes { .. } => career
                .labels()
                .filter(|label| self.top.contains(*label))
                .count(),
            MatchStrategy::OwnTypeCoverage => self
                .profiles
                .subdivisions(career.riasec_type)
                .iter()
                .filter(|label| self.scores.count_for(career.riasec_type, label) > 0)
                .count()
                .min(SUBTYPES_PER_CAREER),
            MatchStrategy::RelatedCoverage => career
                .related_subtypes
                .iter()
                .filter(|related| self.scores.count_for(related.riasec_type, &related.label) > 0)
                .count(),
        };
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    pub(super) fn subtype_sum(&self, career: &CareerDetail) -> u32 {
        career
            .related_subtypes
            .iter()
            .map(|related| self.scores.count_for(related.riasec_type, &related.label))
            .sum()
    }
}
