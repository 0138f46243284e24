use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use super::catalog::ProfileCatalog;
use super::domain::{AxisPair, QuestionTemplate, RiasecType, SessionQuestion};
use super::validation::IntegrityError;

/// Questions asked per session.
pub const QUIZ_SIZE: usize = 18;
/// Questions drawn from each axis pair.
pub const QUESTIONS_PER_PAIR: usize = QUIZ_SIZE / 3;

/// Bank size per axis pair. Every pair is present, possibly with zero.
pub fn pair_counts(questions: &[QuestionTemplate]) -> BTreeMap<AxisPair, usize> {
    let mut counts: BTreeMap<AxisPair, usize> =
        AxisPair::ordered().into_iter().map(|pair| (pair, 0)).collect();
    for pair in questions.iter().filter_map(QuestionTemplate::axis_pair) {
        *counts.entry(pair).or_default() += 1;
    }
    counts
}

/// Fails when any axis pair cannot supply a full share of a session.
pub fn validate_bank(questions: &[QuestionTemplate]) -> Result<(), IntegrityError> {
    for (pair, found) in pair_counts(questions) {
        if found < QUESTIONS_PER_PAIR {
            return Err(IntegrityError::InsufficientQuestions {
                pair,
                found,
                required: QUESTIONS_PER_PAIR,
            });
        }
    }
    Ok(())
}

/// Draws balanced sessions from a validated bank.
///
/// Each session takes six questions from every axis pair, shuffles the
/// eighteen together, then resolves the subtype credited by each side.
/// Pinned subtypes are kept while the profile still lists them.
pub struct SessionSampler<'a> {
    catalog: &'a ProfileCatalog,
    groups: BTreeMap<AxisPair, Vec<&'a QuestionTemplate>>,
}

impl<'a> SessionSampler<'a> {
    pub fn new(
        catalog: &'a ProfileCatalog,
        questions: &'a [QuestionTemplate],
    ) -> Result<Self, IntegrityError> {
        validate_bank(questions)?;
        for riasec_type in RiasecType::ordered() {
            if catalog.subdivisions(riasec_type).is_empty() {
                return Err(IntegrityError::EmptySubdivisions(riasec_type));
            }
        }

        let mut groups: BTreeMap<AxisPair, Vec<&'a QuestionTemplate>> = BTreeMap::new();
        for question in questions {
            if let Some(pair) = question.axis_pair() {
                groups.entry(pair).or_default().push(question);
            }
        }

        Ok(Self { catalog, groups })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<SessionQuestion> {
        let mut picked: Vec<&QuestionTemplate> = Vec::with_capacity(QUIZ_SIZE);
        for pair in AxisPair::ordered() {
            let mut group = self.groups.get(&pair).cloned().unwrap_or_default();
            group.shuffle(rng);
            picked.extend(group.into_iter().take(QUESTIONS_PER_PAIR));
        }
        picked.shuffle(rng);

        picked
            .into_iter()
            .map(|template| {
                let yes_sub = self.subtype_for(template.yes_type, template.yes_sub.as_deref(), rng);
                let no_sub = self.subtype_for(template.no_type, template.no_sub.as_deref(), rng);
                SessionQuestion {
                    id: template.id,
                    text: template.text.clone(),
                    yes_type: template.yes_type,
                    no_type: template.no_type,
                    yes_sub,
                    no_sub,
                }
            })
            .collect()
    }

    fn subtype_for<R: Rng + ?Sized>(
        &self,
        riasec_type: RiasecType,
        pinned: Option<&str>,
        rng: &mut R,
    ) -> String {
        match pinned {
            Some(label) if self.catalog.contains_subtype(riasec_type, label) => label.to_string(),
            _ => self
                .catalog
                .subdivisions(riasec_type)
                .choose(rng)
                .cloned()
                .unwrap_or_default(),
        }
    }
}
