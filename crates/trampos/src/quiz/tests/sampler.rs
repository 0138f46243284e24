use super::common::*;
use std::collections::{BTreeMap, BTreeSet};

use crate::quiz::catalog::{default_questions, ProfileCatalog};
use crate::quiz::domain::{AxisPair, QuestionTemplate, RiasecType};
use crate::quiz::sampler::{pair_counts, SessionSampler, QUESTIONS_PER_PAIR, QUIZ_SIZE};
use crate::quiz::validation::IntegrityError;

fn pair_bank(per_pair: usize) -> Vec<QuestionTemplate> {
    let mut bank = Vec::new();
    let mut id = 1;
    for pair in AxisPair::ordered() {
        let (first, second) = pair.members();
        for n in 0..per_pair {
            let (yes, no) = if n % 2 == 0 {
                (first, second)
            } else {
                (second, first)
            };
            bank.push(QuestionTemplate::new(id, "Você prefere isto?", yes, no));
            id += 1;
        }
    }
    bank
}

#[test]
fn every_session_draws_six_questions_per_pair() {
    let catalog = ProfileCatalog::defaults();
    let bank = default_questions();
    let sampler = SessionSampler::new(&catalog, &bank).expect("default bank is balanced");

    for seed in 0..200 {
        let session = sampler.sample(&mut rng(seed));
        assert_eq!(session.len(), QUIZ_SIZE, "seed {seed}");

        let mut per_pair: BTreeMap<AxisPair, usize> = BTreeMap::new();
        for question in &session {
            let pair = AxisPair::of(question.yes_type, question.no_type)
                .expect("session questions sit on an axis pair");
            *per_pair.entry(pair).or_default() += 1;
        }
        for pair in AxisPair::ordered() {
            assert_eq!(
                per_pair.get(&pair).copied(),
                Some(QUESTIONS_PER_PAIR),
                "seed {seed}, pair {pair}"
            );
        }

        let ids: BTreeSet<_> = session.iter().map(|question| question.id).collect();
        assert_eq!(ids.len(), QUIZ_SIZE, "seed {seed} repeated a question");
    }
}

#[test]
fn assigned_subtypes_belong_to_their_side() {
    let catalog = ProfileCatalog::defaults();
    for seed in 0..50 {
        for question in sampled_session(seed) {
            assert!(
                catalog.contains_subtype(question.yes_type, &question.yes_sub),
                "{} credited to {}",
                question.yes_sub,
                question.yes_type
            );
            assert!(
                catalog.contains_subtype(question.no_type, &question.no_sub),
                "{} credited to {}",
                question.no_sub,
                question.no_type
            );
        }
    }
}

#[test]
fn pinned_subtypes_survive_sampling() {
    let catalog = ProfileCatalog::defaults();
    let mut bank = pair_bank(QUESTIONS_PER_PAIR);
    for question in &mut bank {
        if question.yes_type == RiasecType::I {
            question.yes_sub = Some("PESQUISA".to_string());
        }
        if question.no_type == RiasecType::C {
            question.no_sub = Some("DADOS".to_string());
        }
    }
    let sampler = SessionSampler::new(&catalog, &bank).expect("bank has six per pair");

    let session = sampler.sample(&mut rng(7));
    assert_eq!(session.len(), QUIZ_SIZE);
    for question in &session {
        if question.yes_type == RiasecType::I {
            assert_eq!(question.yes_sub, "PESQUISA");
        }
        if question.no_type == RiasecType::C {
            assert_eq!(question.no_sub, "DADOS");
        }
    }
}

#[test]
fn stale_pins_are_redrawn_from_the_current_profile() {
    let catalog = ProfileCatalog::defaults();
    let mut bank = pair_bank(QUESTIONS_PER_PAIR);
    for question in &mut bank {
        question.yes_sub = Some("SUBTIPO REMOVIDO".to_string());
        // Valid label, wrong owner.
        question.no_sub = Some("LIDERANÇA".to_string());
    }
    let sampler = SessionSampler::new(&catalog, &bank).expect("bank has six per pair");

    for question in sampler.sample(&mut rng(3)) {
        assert!(catalog.contains_subtype(question.yes_type, &question.yes_sub));
        assert!(catalog.contains_subtype(question.no_type, &question.no_sub));
        assert_ne!(question.yes_sub, "SUBTIPO REMOVIDO");
    }
}

#[test]
fn sampler_rejects_a_bank_short_of_one_pair() {
    let catalog = ProfileCatalog::defaults();
    let mut bank = pair_bank(QUESTIONS_PER_PAIR);
    bank.retain(|question| question.axis_pair() != Some(AxisPair::SocialEnterprising));
    bank.push(QuestionTemplate::new(900, "Só uma?", RiasecType::S, RiasecType::E));

    match SessionSampler::new(&catalog, &bank) {
        Err(IntegrityError::InsufficientQuestions {
            pair,
            found,
            required,
        }) => {
            assert_eq!(pair, AxisPair::SocialEnterprising);
            assert_eq!(found, 1);
            assert_eq!(required, QUESTIONS_PER_PAIR);
        }
        Err(other) => panic!("expected insufficient questions, got {other:?}"),
        Ok(_) => panic!("expected insufficient questions, got a sampler"),
    }
}

#[test]
fn sampler_rejects_profiles_without_subtypes() {
    let mut profiles = crate::quiz::catalog::default_profiles();
    if let Some(profile) = profiles.get_mut(&RiasecType::A) {
        profile.subdivisions.clear();
    }
    let catalog = ProfileCatalog::new(profiles);
    let bank = default_questions();

    assert!(matches!(
        SessionSampler::new(&catalog, &bank),
        Err(IntegrityError::EmptySubdivisions(RiasecType::A))
    ));
}

#[test]
fn same_seed_reproduces_the_session() {
    assert_eq!(sampled_session(11), sampled_session(11));
    assert_ne!(sampled_session(11), sampled_session(12));
}

#[test]
fn pair_counts_reports_every_pair() {
    let counts = pair_counts(&pair_bank(2)[..2]);
    assert_eq!(counts.len(), 3);
    assert_eq!(counts[&AxisPair::RealisticInvestigative], 2);
    assert_eq!(counts[&AxisPair::ArtisticConventional], 0);
    assert_eq!(counts[&AxisPair::SocialEnterprising], 0);
}
