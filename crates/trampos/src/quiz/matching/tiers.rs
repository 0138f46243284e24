use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Match-quality bucket for a ranked career.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchTier {
    Excelente,
    Bom,
    #[serde(rename = "Atenção")]
    Atencao,
    Refazer,
}

impl MatchTier {
    pub const fn ordered() -> [Self; 4] {
        [Self::Excelente, Self::Bom, Self::Atencao, Self::Refazer]
    }

    pub const fn from_match_count(match_count: u32) -> Self {
        match match_count {
            0 | 1 => Self::Refazer,
            2 => Self::Atencao,
            3 => Self::Bom,
            _ => Self::Excelente,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excelente => "Excelente",
            Self::Bom => "Bom",
            Self::Atencao => "Atenção",
            Self::Refazer => "Refazer",
        }
    }

    pub const fn fraction(self) -> &'static str {
        match self {
            Self::Excelente => "4/4",
            Self::Bom => "3/4",
            Self::Atencao => "2/4",
            Self::Refazer => "1/4",
        }
    }

    /// Whether the player should be nudged to retake the quiz.
    pub const fn suggests_retake(self) -> bool {
        matches!(self, Self::Refazer)
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MatchTier {
    type Err = UnknownTier;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "excelente" => Ok(Self::Excelente),
            "bom" => Ok(Self::Bom),
            "atenção" | "atencao" => Ok(Self::Atencao),
            "refazer" => Ok(Self::Refazer),
            _ => Err(UnknownTier(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown match tier '{0}'")]
pub struct UnknownTier(pub String);
