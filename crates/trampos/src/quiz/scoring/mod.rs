//! Answer accumulation into per-type and per-subtype scores.

mod dominant;

pub use dominant::{ranked_types, resolve_dominant, top_subtypes, DEFAULT_TOP_SUBTYPES};

use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{Answer, Answers, RiasecType, SessionQuestion};

/// Score per type. All six types are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeScores(BTreeMap<RiasecType, u32>);

impl TypeScores {
    pub fn zeroed() -> Self {
        Self(
            RiasecType::ordered()
                .into_iter()
                .map(|riasec_type| (riasec_type, 0))
                .collect(),
        )
    }

    pub fn get(&self, riasec_type: RiasecType) -> u32 {
        self.0.get(&riasec_type).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// Scores in canonical type order.
    pub fn iter(&self) -> impl Iterator<Item = (RiasecType, u32)> + '_ {
        self.0.iter().map(|(riasec_type, score)| (*riasec_type, *score))
    }

    fn increment(&mut self, riasec_type: RiasecType) {
        *self.0.entry(riasec_type).or_insert(0) += 1;
    }
}

impl Default for TypeScores {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl FromIterator<(RiasecType, u32)> for TypeScores {
    fn from_iter<T: IntoIterator<Item = (RiasecType, u32)>>(iter: T) -> Self {
        let mut scores = Self::zeroed();
        scores.0.extend(iter);
        scores
    }
}

/// Everything derived from one session's answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreState {
    pub type_scores: TypeScores,
    pub subtype_counts: BTreeMap<String, u32>,
    /// Session index of the latest answer that credited each subtype.
    pub recency: BTreeMap<String, usize>,
    pub yes_counts: TypeScores,
    pub no_counts: TypeScores,
    /// Session questions able to credit each type on either side.
    pub capacity: TypeScores,
    pub answered: usize,
    #[serde(skip)]
    subtype_types: BTreeMap<String, RiasecType>,
}

impl ScoreState {
    /// Counts of the subtypes credited to `riasec_type`.
    pub fn subtype_counts_for(&self, riasec_type: RiasecType) -> BTreeMap<&str, u32> {
        self.subtype_counts
            .iter()
            .filter(|(label, _)| self.subtype_types.get(label.as_str()) == Some(&riasec_type))
            .map(|(label, count)| (label.as_str(), *count))
            .collect()
    }

    pub fn subtype_count(&self, label: &str) -> u32 {
        self.subtype_counts.get(label).copied().unwrap_or(0)
    }

    /// Count for `label`, or zero unless it was credited to `riasec_type`.
    pub fn count_for(&self, riasec_type: RiasecType, label: &str) -> u32 {
        match self.subtype_types.get(label) {
            Some(credited) if *credited == riasec_type => self.subtype_count(label),
            _ => 0,
        }
    }

    /// Score as a rounded percentage of the type's capacity in this session.
    pub fn percentage(&self, riasec_type: RiasecType) -> u32 {
        let capacity = self.capacity.get(riasec_type);
        if capacity == 0 {
            return 0;
        }
        let score = self.type_scores.get(riasec_type);
        (score * 100 + capacity / 2) / capacity
    }
}

/// Folds `answers` over `questions` in session order. Unanswered questions are skipped.
pub fn compute_scores(questions: &[SessionQuestion], answers: &Answers) -> ScoreState {
    let mut type_scores = TypeScores::zeroed();
    let mut yes_counts = TypeScores::zeroed();
    let mut no_counts = TypeScores::zeroed();
    let mut capacity = TypeScores::zeroed();
    let mut subtype_counts: BTreeMap<String, u32> = BTreeMap::new();
    let mut recency = BTreeMap::new();
    let mut subtype_types = BTreeMap::new();
    let mut answered = 0;

    for (index, question) in questions.iter().enumerate() {
        capacity.increment(question.yes_type);
        capacity.increment(question.no_type);

        let Some(answer) = answers.get(question.id) else {
            continue;
        };
        answered += 1;

        let (riasec_type, subtype) = question.awarded(answer);
        type_scores.increment(riasec_type);
        match answer {
            Answer::Yes => yes_counts.increment(riasec_type),
            Answer::No => no_counts.increment(riasec_type),
        }
        *subtype_counts.entry(subtype.to_string()).or_default() += 1;
        recency.insert(subtype.to_string(), index);
        subtype_types.insert(subtype.to_string(), riasec_type);
    }

    ScoreState {
        type_scores,
        subtype_counts,
        recency,
        yes_counts,
        no_counts,
        capacity,
        answered,
        subtype_types,
    }
}
