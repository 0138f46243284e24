use std::cmp::Reverse;
use std::collections::BTreeMap;

use super::TypeScores;
use crate::quiz::domain::RiasecType;

pub const DEFAULT_TOP_SUBTYPES: usize = 4;

/// Highest-scoring type; ties go to the earliest type in `R, I, A, S, E, C`.
pub fn resolve_dominant(scores: &TypeScores) -> RiasecType {
    let mut dominant = RiasecType::R;
    let mut best = scores.get(dominant);
    for riasec_type in RiasecType::ordered() {
        let score = scores.get(riasec_type);
        if score > best {
            dominant = riasec_type;
            best = score;
        }
    }
    dominant
}

/// All six types by score, highest first, canonical order among equals.
pub fn ranked_types(scores: &TypeScores) -> Vec<(RiasecType, u32)> {
    let mut ranked: Vec<_> = RiasecType::ordered()
        .into_iter()
        .map(|riasec_type| (riasec_type, scores.get(riasec_type)))
        .collect();
    ranked.sort_by_key(|(_, score)| Reverse(*score));
    ranked
}

/// The `n` strongest subtypes: count first, then the more recent contribution.
///
/// Labels never credited are ignored. Remaining ties fall back to label order
/// so the result is deterministic.
pub fn top_subtypes(
    counts: &BTreeMap<String, u32>,
    recency: &BTreeMap<String, usize>,
    n: usize,
) -> Vec<String> {
    let mut entries: Vec<(&String, u32, usize)> = counts
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(label, count)| (label, *count, recency.get(label).copied().unwrap_or(0)))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(b.2.cmp(&a.2)).then(a.0.cmp(b.0)));
    entries
        .into_iter()
        .take(n)
        .map(|(label, _, _)| label.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
        entries
            .iter()
            .map(|(label, count)| (label.to_string(), *count))
            .collect()
    }

    #[test]
    fn tie_on_dominant_goes_to_realistic() {
        let scores: TypeScores = [(RiasecType::R, 5), (RiasecType::I, 5)].into_iter().collect();
        for _ in 0..10 {
            assert_eq!(resolve_dominant(&scores), RiasecType::R);
        }
    }

    #[test]
    fn dominant_follows_highest_score() {
        let scores: TypeScores = [(RiasecType::S, 4), (RiasecType::C, 4), (RiasecType::E, 6)]
            .into_iter()
            .collect();
        assert_eq!(resolve_dominant(&scores), RiasecType::E);
        assert_eq!(resolve_dominant(&TypeScores::zeroed()), RiasecType::R);
    }

    #[test]
    fn ranked_types_is_stable_for_equal_scores() {
        let scores: TypeScores = [(RiasecType::C, 3), (RiasecType::I, 3), (RiasecType::A, 5)]
            .into_iter()
            .collect();
        let order: Vec<_> = ranked_types(&scores)
            .into_iter()
            .map(|(riasec_type, _)| riasec_type)
            .collect();
        assert_eq!(
            order,
            vec![
                RiasecType::A,
                RiasecType::I,
                RiasecType::C,
                RiasecType::R,
                RiasecType::S,
                RiasecType::E,
            ]
        );
    }

    #[test]
    fn recency_breaks_count_ties() {
        let counts = labels(&[("PESQUISA", 3), ("DADOS", 3)]);
        let recency: BTreeMap<_, _> = [("PESQUISA".to_string(), 5), ("DADOS".to_string(), 10)]
            .into_iter()
            .collect();

        assert_eq!(top_subtypes(&counts, &recency, 2), vec!["DADOS", "PESQUISA"]);
    }

    #[test]
    fn top_subtypes_truncates_and_skips_zero_counts() {
        let counts = labels(&[("A", 1), ("B", 4), ("C", 2), ("D", 0), ("E", 2), ("F", 1)]);
        let recency: BTreeMap<_, _> = [
            ("A".to_string(), 1),
            ("B".to_string(), 2),
            ("C".to_string(), 3),
            ("E".to_string(), 7),
            ("F".to_string(), 9),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            top_subtypes(&counts, &recency, DEFAULT_TOP_SUBTYPES),
            vec!["B", "E", "C", "F"]
        );
        assert_eq!(top_subtypes(&labels(&[("D", 0)]), &recency, 4), Vec::<String>::new());
    }
}
