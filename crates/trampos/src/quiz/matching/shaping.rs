use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::tiers::MatchTier;
use super::{CareerRanking, RankedCareer};

pub const DEFAULT_FLAT_LIMIT: usize = 6;
pub const DEFAULT_TIER_CAP: usize = 4;
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// How a ranking is cut down for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultShape {
    /// Best `limit` careers across every tier.
    Flat { limit: usize },
    /// Up to `cap` careers per tier, dominant-type careers first when `prefer_dominant`.
    PerTier { cap: usize, prefer_dominant: bool },
    /// First page of every tier; later pages come from [`CareerRanking::page`].
    Paged { page_size: usize },
}

impl ResultShape {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Flat { .. } => "flat",
            Self::PerTier { .. } => "per_tier",
            Self::Paged { .. } => "paged",
        }
    }

    /// Same shape with its size parameter replaced.
    pub fn with_limit(self, limit: usize) -> Self {
        match self {
            Self::Flat { .. } => Self::Flat { limit },
            Self::PerTier {
                prefer_dominant, ..
            } => Self::PerTier {
                cap: limit,
                prefer_dominant,
            },
            Self::Paged { .. } => Self::Paged { page_size: limit },
        }
    }

    pub const fn limit(&self) -> usize {
        match self {
            Self::Flat { limit } => *limit,
            Self::PerTier { cap, .. } => *cap,
            Self::Paged { page_size } => *page_size,
        }
    }
}

impl Default for ResultShape {
    fn default() -> Self {
        Self::PerTier {
            cap: DEFAULT_TIER_CAP,
            prefer_dominant: true,
        }
    }
}

impl fmt::Display for ResultShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResultShape {
    type Err = UnknownShape;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "flat" => Ok(Self::Flat {
                limit: DEFAULT_FLAT_LIMIT,
            }),
            "per_tier" => Ok(Self::default()),
            "paged" => Ok(Self::Paged {
                page_size: DEFAULT_PAGE_SIZE,
            }),
            _ => Err(UnknownShape(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown result shape '{0}'")]
pub struct UnknownShape(pub String);

/// Careers selected for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierBucket {
    pub tier: MatchTier,
    pub fraction: &'static str,
    /// Careers in the tier before capping.
    pub total: usize,
    pub careers: Vec<RankedCareer>,
}

/// A window into one tier with a cursor for the next request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierPage {
    pub tier: MatchTier,
    pub offset: usize,
    pub total: usize,
    pub careers: Vec<RankedCareer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<usize>,
}

impl TierPage {
    pub fn has_more(&self) -> bool {
        self.next_offset.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapedResults {
    Flat { careers: Vec<RankedCareer> },
    PerTier { tiers: Vec<TierBucket> },
    Paged { tiers: Vec<TierPage> },
}

impl CareerRanking {
    pub fn flat(&self, limit: usize) -> Vec<RankedCareer> {
        self.entries.iter().take(limit).cloned().collect()
    }

    pub fn per_tier(&self, cap: usize, prefer_dominant: bool) -> Vec<TierBucket> {
        MatchTier::ordered()
            .into_iter()
            .map(|tier| {
                let all: Vec<&RankedCareer> = self.tier(tier).collect();
                let mut careers: Vec<RankedCareer> = Vec::with_capacity(cap.min(all.len()));
                if prefer_dominant {
                    let (dominant, others): (Vec<&RankedCareer>, Vec<&RankedCareer>) =
                        all.iter().copied().partition(|entry| entry.matches_dominant);
                    careers.extend(dominant.into_iter().take(cap).cloned());
                    let remaining = cap.saturating_sub(careers.len());
                    careers.extend(others.into_iter().take(remaining).cloned());
                } else {
                    careers.extend(all.iter().take(cap).copied().cloned());
                }
                TierBucket {
                    tier,
                    fraction: tier.fraction(),
                    total: all.len(),
                    careers,
                }
            })
            .collect()
    }

    /// Careers `offset..offset + page_size` of `tier`.
    pub fn page(&self, tier: MatchTier, offset: usize, page_size: usize) -> TierPage {
        let all: Vec<&RankedCareer> = self.tier(tier).collect();
        let total = all.len();
        let start = offset.min(total);
        let end = start.saturating_add(page_size).min(total);
        TierPage {
            tier,
            offset: start,
            total,
            careers: all[start..end].iter().copied().cloned().collect(),
            next_offset: (end < total).then_some(end),
        }
    }

    /// Visible count after one more "show more" step, never past the tier size.
    pub fn show_more(&self, tier: MatchTier, visible: usize, page_size: usize) -> usize {
        visible
            .saturating_add(page_size)
            .min(self.tier(tier).count())
    }

    pub fn shape(&self, shape: &ResultShape) -> ShapedResults {
        match *shape {
            ResultShape::Flat { limit } => ShapedResults::Flat {
                careers: self.flat(limit),
            },
            ResultShape::PerTier {
                cap,
                prefer_dominant,
            } => ShapedResults::PerTier {
                tiers: self.per_tier(cap, prefer_dominant),
            },
            ResultShape::Paged { page_size } => ShapedResults::Paged {
                tiers: MatchTier::ordered()
                    .into_iter()
                    .map(|tier| self.page(tier, 0, page_size))
                    .collect(),
            },
        }
    }
}
